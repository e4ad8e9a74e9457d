//! Build-graph composition for WordPack.
//!
//! Given a loaded [`UserConfig`], the composer derives independent fragments
//! (shared settings, manifest, entry, compile rules, optimization policy) for
//! every bundle and merges them in a fixed order into one build graph per
//! bundle. A static asset copy graph is appended last. The graphs are plain
//! JSON objects handed to the external bundling engine.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wordpack_compose::compose;
//! use wordpack_config::UserConfig;
//!
//! let config = UserConfig::from_value(json!({
//!     "basePath": "/srv/theme",
//!     "bundles": [{ "name": "admin", "files": ["./scripts/admin.ts"] }]
//! }))
//! .unwrap();
//!
//! let graphs = compose(&config);
//! assert_eq!(graphs.len(), 2);
//! assert_eq!(graphs[0]["name"], json!("admin"));
//! assert_eq!(graphs[1]["name"], json!("AssetCopy"));
//! ```

pub mod color;
pub mod context;
pub mod error;
pub mod fragments;
pub mod manifest;
pub mod merge;
pub mod output;

use std::path::Path;

use wordpack_config::{ConfigDiscovery, DEFAULT_CONFIG_FILE, EnvParams, Environment, UserConfig};

pub use color::{Colorizer, DEFAULT_BACKGROUND};
pub use context::{BuildRun, SINGLE_MODE_NAME, collapse};
pub use error::{Error, Result};
pub use fragments::asset::ASSET_GRAPH_NAME;
pub use manifest::ManifestAssembler;
pub use merge::{Fragment, merge};

/// Compose every build graph for `config`.
pub fn compose(config: &UserConfig) -> Vec<Fragment> {
    BuildRun::new(config).compose()
}

/// Resolve the environment and load the configuration file.
pub async fn load_config(params: &EnvParams, cwd: &Path, file: Option<&str>) -> Result<UserConfig> {
    let env = Environment::resolve(params, cwd);
    let config = ConfigDiscovery::new(&env.base_path)
        .load(&env, file.unwrap_or(DEFAULT_CONFIG_FILE))
        .await?;
    Ok(config)
}

/// Full run: load the configuration, empty the output directory, compose.
///
/// Nothing is composed when loading fails; the output directory is only
/// touched once the configuration is valid.
pub async fn build_config(
    params: &EnvParams,
    cwd: &Path,
    file: Option<&str>,
) -> Result<Vec<Fragment>> {
    let config = load_config(params, cwd, file).await?;
    output::empty_dir(&config.dist_root())?;
    Ok(compose(&config))
}
