//! Invocation environment.
//!
//! The bundling engine hands the composer a flat key/value map (`--env` pairs).
//! [`Environment::resolve`] normalizes it once per run; the result is never
//! mutated afterwards.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Engine-specific alternate key for the watch flag. Wins over `watch`.
pub const ENGINE_WATCH_KEY: &str = "WEBPACK_WATCH";

/// Raw invocation parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvParams {
    values: BTreeMap<String, String>,
}

impl EnvParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Parse a `KEY=VALUE` pair; a bare `KEY` is a flag set to `true`.
    pub fn parse_pair(pair: &str) -> (String, String) {
        match pair.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (pair.trim().to_string(), "true".to_string()),
        }
    }

    fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).map(parse_flag)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Resolved, immutable environment of one build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Environment {
    pub base_path: PathBuf,
    pub production: bool,
    pub watch: bool,
    pub ci: bool,
}

impl Environment {
    /// Resolve parameters against the working directory.
    ///
    /// `basePath` is resolved relative to `cwd` (absolute values are kept),
    /// missing flags default to `false`, and `WEBPACK_WATCH` takes precedence
    /// over `watch` whenever it is present.
    pub fn resolve(params: &EnvParams, cwd: &Path) -> Self {
        let base = params.get("basePath").unwrap_or("");
        let base_path = if Path::new(base).is_absolute() {
            PathBuf::from(base).clean()
        } else {
            cwd.join(base).clean()
        };

        let watch = params
            .flag(ENGINE_WATCH_KEY)
            .or_else(|| params.flag("watch"))
            .unwrap_or(false);

        let env = Self {
            base_path,
            production: params.flag("production").unwrap_or(false),
            watch,
            ci: params.flag("CI").unwrap_or(false),
        };

        tracing::debug!(
            base_path = %env.base_path.display(),
            production = env.production,
            watch = env.watch,
            "resolved environment"
        );

        env
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}
