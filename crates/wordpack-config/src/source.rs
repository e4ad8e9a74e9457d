//! Loading a configuration file into a raw value.
//!
//! The composer never evaluates config files itself. A [`ConfigSource`] takes a
//! resolved path and returns the configuration object it describes, or a load
//! error; [`FileConfigSource`] understands TOML and JSON files.

use std::path::Path;

use async_trait::async_trait;
use figment::Figment;
use figment::providers::{Format as _, Json, Toml};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Turns a resolved configuration path into its exported object.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn load(&self, path: &Path) -> Result<Value>;
}

/// Reads `*.toml` and `*.json` configuration files from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigSource;

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn load(&self, path: &Path) -> Result<Value> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::Load {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        tracing::trace!(path = %path.display(), bytes = content.len(), "read configuration file");

        let figment = match extension.as_str() {
            "toml" => Figment::from(Toml::string(&content)),
            "json" => Figment::from(Json::string(&content)),
            other => return Err(ConfigError::UnsupportedFormat(other.to_string())),
        };

        figment.extract::<Value>().map_err(|e| ConfigError::Load {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
