//! Top-level user configuration.
//!
//! [`UserConfig`] is what a `wordpack.config.*` file describes, after the
//! invocation environment has been merged over it and validation passed.
//! For file discovery, see the `discovery` module.

use std::path::PathBuf;

use indexmap::IndexMap;
use path_clean::PathClean;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::bundle::{Bundle, DEFAULT_CHUNK_MIN_SIZE, SourceMaps};
use crate::error::{ConfigError, Result as ConfigResult};
use crate::paths::{AssetKind, PathConfig, Side};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    /// Project root every configured directory is relative to.
    #[serde(default)]
    pub base_path: PathBuf,

    #[serde(default)]
    pub production: bool,

    #[serde(default)]
    pub watch: bool,

    #[serde(default)]
    pub ci: bool,

    /// Output file name template used in production (`[ext]` is stripped).
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Manifest file name; empty disables manifest emission.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    pub bundles: Vec<Bundle>,

    /// Module name -> global variable provided by the page.
    #[serde(default = "default_externals")]
    pub externals: IndexMap<String, String>,

    /// One build graph per bundle when `true`, one combined graph otherwise.
    #[serde(default = "default_true")]
    pub multimode: bool,

    #[serde(default)]
    pub paths: PathConfig,

    #[serde(default)]
    pub source_maps: SourceMaps,

    /// Packages extracted into their own shared chunk across bundles.
    #[serde(default = "default_global_chunks")]
    pub global_chunks: Vec<String>,

    /// Lowest accepted `chunkMinSize` for split bundles.
    #[serde(default = "default_chunk_min_size_floor")]
    pub chunk_min_size_floor: u64,

    /// Partial build graph merged into every bundle graph.
    #[serde(default, rename = "override")]
    pub overrides: Map<String, Value>,
}

impl UserConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use wordpack_config::UserConfig;
    /// use serde_json::json;
    ///
    /// let config = UserConfig::from_value(json!({
    ///     "basePath": "/srv/theme",
    ///     "bundles": [{ "name": "admin", "files": ["./scripts/admin.ts"] }]
    /// }))
    /// .unwrap();
    ///
    /// assert_eq!(config.bundles[0].name, "admin");
    /// assert!(config.multimode);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        let mut config: UserConfig = serde_json::from_value(value)
            .map_err(|e| ConfigError::invalid("config", e.to_string()))?;
        config.normalize();
        Ok(config)
    }

    /// Apply the rules that hold for every loaded config.
    ///
    /// The `[ext]` placeholder is stripped from the file name template, and
    /// production builds never ship source maps.
    pub fn normalize(&mut self) {
        self.filename = self.filename.replace("[ext]", "");
        if self.production {
            self.source_maps = SourceMaps::Disabled;
        }
    }

    pub fn mode(&self) -> &'static str {
        if self.production {
            "production"
        } else {
            "development"
        }
    }

    /// Output name template: hashed in production, plain `[name]` otherwise.
    pub fn asset(&self) -> &str {
        if self.production {
            &self.filename
        } else {
            "[name]"
        }
    }

    pub fn dir(&self, side: Side, kind: AssetKind) -> &str {
        self.paths.dir(side, kind)
    }

    /// Absolute directory of `kind` on `side`.
    pub fn path(&self, side: Side, kind: AssetKind) -> PathBuf {
        let root = self.base_path.join(self.dir(side, AssetKind::Root));
        match kind {
            AssetKind::Root => root.clean(),
            _ => root.join(self.dir(side, kind)).clean(),
        }
    }

    /// Output directory emptied at the start of every run.
    pub fn dist_root(&self) -> PathBuf {
        self.path(Side::Dist, AssetKind::Root)
    }

    /// Manifest file name when manifest emission is enabled.
    pub fn manifest_file(&self) -> Option<&str> {
        let name = self.manifest.trim();
        (!name.is_empty()).then_some(name)
    }
}

fn default_true() -> bool {
    true
}

fn default_filename() -> String {
    "[name].[contenthash:6]".to_string()
}

fn default_manifest() -> String {
    "assets.json".to_string()
}

fn default_externals() -> IndexMap<String, String> {
    [
        ("jquery", "jQuery"),
        ("underscore", "_"),
        ("backbone", "backbone"),
        ("lodash", "_"),
    ]
    .into_iter()
    .map(|(module, global)| (module.to_string(), global.to_string()))
    .collect()
}

fn default_global_chunks() -> Vec<String> {
    vec!["awesome-notifications".to_string()]
}

pub(crate) fn default_chunk_min_size_floor() -> u64 {
    DEFAULT_CHUNK_MIN_SIZE
}
