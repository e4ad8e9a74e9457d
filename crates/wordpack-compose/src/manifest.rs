//! Manifest assembly: re-keying entries and writing the PHP lookup table.
//!
//! The engine writes `assets.json`; once emission finishes, the entries are
//! normalized, sorted and written next to it as `assets.php`, a plain
//! `return array(...)` file server-side code can `require`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};

const PHP_HEADER: &str = "<?php
/**
 * Asset manifest file.
 *
 * Auto-generated via WordPack.
 *
 * @package eXtended WordPress
 * @subpackage Assets
 */
";

/// Name of the directory a path sits in, `.` for a bare file name.
fn parent_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        None => ".",
        Some(idx) => trimmed[..idx]
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(""),
    }
}

fn file_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Re-key one manifest entry.
///
/// When the directory name of the emitted `value` differs from that of `key`,
/// the key is prefixed with the emitted directory name. Keys already under
/// that directory, and values without a directory, leave the key unchanged,
/// so applying it to its own output is a no-op.
///
/// # Example
///
/// ```
/// use wordpack_compose::manifest::rekey;
///
/// assert_eq!(rekey("admin.css", "styles/admin/admin.1a2b3c.css"), "admin/admin.css");
/// assert_eq!(rekey("x/app.js", "scripts/app.1a2b3c.js"), "scripts/x/app.js");
/// assert_eq!(rekey("scripts/admin.js", "scripts/admin.1a2b3c.js"), "scripts/admin.js");
/// ```
pub fn rekey(key: &str, value: &str) -> String {
    let src = parent_name(key);
    let dst = parent_name(value);

    if src == dst || dst == "." || dst.is_empty() || key.starts_with(&format!("{dst}/")) {
        return key.to_string();
    }

    format!("{dst}/{key}")
}

/// Re-key every entry and sort by key.
///
/// # Errors
///
/// Returns `Error::ManifestConflict` when two entries with different emitted
/// paths end up under the same key.
pub fn normalize<I, K, V>(assets: I) -> Result<BTreeMap<String, String>>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut normalized: BTreeMap<String, String> = BTreeMap::new();

    for (key, value) in assets {
        let value = value.into();
        let key = rekey(key.as_ref(), &value);

        match normalized.get(&key) {
            Some(existing) if *existing != value => {
                return Err(Error::ManifestConflict {
                    key,
                    first: existing.clone(),
                    second: value,
                });
            }
            Some(_) => {}
            None => {
                normalized.insert(key, value);
            }
        }
    }

    Ok(normalized)
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render sorted entries as a PHP file with keys padded to a common width.
pub fn render_php(assets: &BTreeMap<String, String>) -> String {
    let entries: Vec<(String, String)> = assets
        .iter()
        .map(|(key, value)| (escape(key), escape(value)))
        .collect();
    let width = entries
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::from(PHP_HEADER);
    out.push_str("\nreturn array(\n");
    for (key, value) in &entries {
        let pad = width - key.chars().count();
        out.push_str(&format!("    '{key}'{} => '{value}',\n", " ".repeat(pad)));
    }
    out.push_str(");\n");
    out
}

/// Completion hook: turns the engine's JSON manifest into the PHP table.
#[derive(Debug, Clone)]
pub struct ManifestAssembler {
    manifest: PathBuf,
}

impl ManifestAssembler {
    /// `manifest` is the engine's output file (e.g. `dist/assets.json`).
    pub fn new(manifest: impl Into<PathBuf>) -> Self {
        Self {
            manifest: manifest.into(),
        }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest
    }

    /// The PHP sibling of the manifest.
    pub fn php_path(&self) -> PathBuf {
        self.manifest.with_extension("php")
    }

    /// Read the engine manifest, then write the PHP table.
    pub fn assemble(&self) -> Result<PathBuf> {
        let content = fs::read_to_string(&self.manifest).map_err(|e| Error::ManifestRead {
            path: self.manifest.clone(),
            message: e.to_string(),
        })?;

        let parsed: Value = serde_json::from_str(&content).map_err(|e| Error::ManifestRead {
            path: self.manifest.clone(),
            message: e.to_string(),
        })?;

        let Value::Object(entries) = parsed else {
            return Err(Error::ManifestRead {
                path: self.manifest.clone(),
                message: "expected an object of asset key -> path".to_string(),
            });
        };

        let assets = entries.into_iter().map(|(key, value)| {
            let value = match value {
                Value::String(path) => path,
                other => other.to_string(),
            };
            (key, value)
        });

        self.write(normalize(assets)?)
    }

    /// Write `assets` as the PHP table, replacing any previous file atomically.
    pub fn write(&self, assets: BTreeMap<String, String>) -> Result<PathBuf> {
        let target = self.php_path();
        write_atomic(&target, render_php(&assets).as_bytes())?;

        tracing::info!(path = %target.display(), entries = assets.len(), "wrote PHP manifest");
        Ok(target)
    }
}

// Write to a sibling temp file, then rename over the target.
fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let fail = |source: std::io::Error| Error::ManifestWrite {
        path: target.to_path_buf(),
        source,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(fail)?;
    }

    let temp = target.with_extension("php.tmp");
    fs::write(&temp, content).map_err(|e| {
        cleanup_temp_file(&temp);
        fail(e)
    })?;

    fs::rename(&temp, target).map_err(|e| {
        cleanup_temp_file(&temp);
        fail(e)
    })
}

fn cleanup_temp_file(temp: &Path) {
    if temp.exists() {
        if let Err(e) = fs::remove_file(temp) {
            tracing::warn!(path = %temp.display(), error = %e, "failed to clean up temporary file");
        }
    }
}
