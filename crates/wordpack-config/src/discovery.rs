//! File-based config discovery
//!
//! Handles finding the WordPack configuration file under a project root,
//! loading it through a [`ConfigSource`] and turning it into a [`UserConfig`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::Serialized;
use serde_json::Value;

use crate::config::UserConfig;
use crate::env::Environment;
use crate::error::{ConfigError, Result};
use crate::source::{ConfigSource, FileConfigSource};
use crate::validation::validate_value;

/// Config file name used when the caller does not name one.
pub const DEFAULT_CONFIG_FILE: &str = "wordpack.config.toml";

/// Directories (relative to the project root) searched for the config file.
pub const CANDIDATE_DIRS: [&str; 5] = ["", "assets", "assets/wordpack", "assets/webpack", "assets/build"];

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use wordpack_config::{ConfigDiscovery, EnvParams, Environment};
///
/// # async fn run() -> wordpack_config::Result<()> {
/// let env = Environment::resolve(&EnvParams::new(), Path::new("."));
/// let config = ConfigDiscovery::new(&env.base_path)
///     .load(&env, "wordpack.config.toml")
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Every location `find` looks at for `file`, in search order.
    pub fn candidates(&self, file: &str) -> Vec<PathBuf> {
        let name = Path::new(file)
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(file));

        CANDIDATE_DIRS
            .iter()
            .map(|dir| self.root.join(dir).join(&name))
            .collect()
    }

    /// Locate `file`.
    ///
    /// A name that already points at an existing file (absolute, or relative
    /// to the root) is used as is. Otherwise its basename is looked up in
    /// each of [`CANDIDATE_DIRS`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` listing every searched path.
    pub fn find(&self, file: &str) -> Result<PathBuf> {
        let direct = self.root.join(file);
        if direct.is_file() {
            return Ok(direct);
        }

        let searched = self.candidates(file);
        if let Some(found) = searched.iter().find(|path| path.is_file()) {
            return Ok(found.clone());
        }

        Err(ConfigError::NotFound {
            file: file.to_string(),
            searched,
        })
    }

    /// Find and load `file` from disk.
    pub async fn load(&self, env: &Environment, file: &str) -> Result<UserConfig> {
        self.load_with(&FileConfigSource, env, file).await
    }

    /// Find `file` and load it through `source`.
    ///
    /// The environment is merged over the loaded object (environment values
    /// always win), every violation is collected, then defaults are applied.
    pub async fn load_with<S>(&self, source: &S, env: &Environment, file: &str) -> Result<UserConfig>
    where
        S: ConfigSource + ?Sized,
    {
        let path = self.find(file)?;
        tracing::info!(path = %path.display(), "loading configuration");

        let raw = source.load(&path).await?;
        let merged = merge_environment(raw, env)?;
        validate_value(&merged)?;

        let config = UserConfig::from_value(merged)?;
        tracing::debug!(
            bundles = config.bundles.len(),
            multimode = config.multimode,
            mode = config.mode(),
            "configuration loaded"
        );
        Ok(config)
    }
}

/// Layer the environment's plain fields over the loaded config object.
pub fn merge_environment(raw: Value, env: &Environment) -> Result<Value> {
    if !raw.is_object() {
        return Err(ConfigError::invalid("config", "must be an object"));
    }

    Figment::from(Serialized::defaults(raw))
        .merge(Serialized::defaults(env))
        .extract::<Value>()
        .map_err(|e| ConfigError::invalid("config", e.to_string()))
}
