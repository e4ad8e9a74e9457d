//! Schema validation of the merged configuration value.
//!
//! Validation runs on the raw JSON value before deserialization so that every
//! failing field is reported at once instead of stopping at the first serde
//! error.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::bundle::Devtool;
use crate::config::default_chunk_min_size_floor;
use crate::error::{ConfigError, Result, Violation};

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex color pattern is valid")
});

const PATH_KEYS: [&str; 5] = ["root", "scripts", "styles", "images", "fonts"];

/// Cache group and chunk names the chunk policy claims for itself.
pub const RESERVED_CHUNK_NAMES: [&str; 4] = ["vendor", "common", "default", "defaultVendors"];

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    /// Validate a merged configuration value, reporting every violation.
    fn validate(&self, value: &Value) -> Result<()>;
}

/// Structural validation of the `UserConfig` shape (no filesystem checks).
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wordpack_config::{ConfigValidator, SchemaValidator};
///
/// let value = json!({ "bundles": [{ "name": "admin", "files": ["a.ts"] }] });
/// SchemaValidator.validate(&value).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, value: &Value) -> Result<()> {
        let mut violations = Vec::new();
        check_config(value, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = violations.len(), "configuration rejected");
            Err(ConfigError::Invalid { violations })
        }
    }
}

/// Convenience function for schema validation
pub fn validate_value(value: &Value) -> Result<()> {
    SchemaValidator.validate(value)
}

struct Report<'a>(&'a mut Vec<Violation>);

impl Report<'_> {
    fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(Violation::new(field, message));
    }

    fn string(&mut self, obj: &Map<String, Value>, key: &str, field: &str) {
        if obj.get(key).is_some_and(|v| !v.is_string()) {
            self.push(field, "must be a string");
        }
    }

    fn boolean(&mut self, obj: &Map<String, Value>, key: &str, field: &str) {
        if obj.get(key).is_some_and(|v| !v.is_boolean()) {
            self.push(field, "must be a boolean");
        }
    }

    fn object(&mut self, obj: &Map<String, Value>, key: &str, field: &str) {
        if obj.get(key).is_some_and(|v| !v.is_object()) {
            self.push(field, "must be an object");
        }
    }

    fn string_list(&mut self, value: &Value, field: &str) {
        match value.as_array() {
            Some(items) => {
                for (i, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        self.push(format!("{field}[{i}]"), "must be a string");
                    }
                }
            }
            None => self.push(field, "must be an array of strings"),
        }
    }
}

fn check_config(value: &Value, violations: &mut Vec<Violation>) {
    let mut report = Report(violations);

    let Some(obj) = value.as_object() else {
        report.push("config", "must be an object");
        return;
    };

    report.string(obj, "basePath", "basePath");
    report.boolean(obj, "production", "production");
    report.boolean(obj, "watch", "watch");
    report.boolean(obj, "ci", "ci");
    report.string(obj, "filename", "filename");
    report.string(obj, "manifest", "manifest");
    report.boolean(obj, "multimode", "multimode");
    report.object(obj, "override", "override");

    if let Some(externals) = obj.get("externals") {
        match externals.as_object() {
            Some(map) => {
                for (module, global) in map {
                    if !global.is_string() {
                        report.push(format!("externals.{module}"), "must be a string");
                    }
                }
            }
            None => report.push("externals", "must be an object of module -> global"),
        }
    }

    if let Some(chunks) = obj.get("globalChunks") {
        report.string_list(chunks, "globalChunks");
        for (i, name) in chunks.as_array().into_iter().flatten().enumerate() {
            if let Some(name) = name.as_str().filter(|n| RESERVED_CHUNK_NAMES.contains(n)) {
                report.push(
                    format!("globalChunks[{i}]"),
                    format!("'{name}' is reserved by the chunk policy"),
                );
            }
        }
    }

    if let Some(maps) = obj.get("sourceMaps") {
        let valid = match maps {
            Value::Bool(false) => true,
            Value::String(mode) => Devtool::parse(mode).is_some(),
            _ => false,
        };
        if !valid {
            let modes: Vec<_> = Devtool::ALL.iter().map(|d| d.as_str()).collect();
            report.push(
                "sourceMaps",
                format!("must be false or one of: {}", modes.join(", ")),
            );
        }
    }

    let floor = match obj.get("chunkMinSizeFloor") {
        Some(v) => match v.as_u64() {
            Some(n) if n > 0 => n,
            _ => {
                report.push("chunkMinSizeFloor", "must be a positive integer");
                default_chunk_min_size_floor()
            }
        },
        None => default_chunk_min_size_floor(),
    };

    if let Some(paths) = obj.get("paths") {
        check_paths(paths, &mut report);
    }

    match obj.get("bundles") {
        None | Some(Value::Null) => report.push("bundles", "is required"),
        Some(Value::Array(bundles)) if bundles.is_empty() => {
            report.push("bundles", "must contain at least one bundle")
        }
        Some(Value::Array(bundles)) => {
            let mut seen = HashSet::new();
            for (i, bundle) in bundles.iter().enumerate() {
                check_bundle(bundle, i, floor, &mut seen, &mut report);
            }
        }
        Some(_) => report.push("bundles", "must be an array"),
    }
}

fn check_paths(paths: &Value, report: &mut Report<'_>) {
    let Some(map) = paths.as_object() else {
        report.push("paths", "must be an object");
        return;
    };

    for (key, entry) in map {
        let field = format!("paths.{key}");
        if !PATH_KEYS.contains(&key.as_str()) {
            report.push(
                field,
                format!("unknown path category (expected one of {})", PATH_KEYS.join(", ")),
            );
            continue;
        }

        match entry {
            Value::String(_) => {}
            Value::Object(pair) => {
                for side in ["src", "dist"] {
                    if !pair.get(side).is_some_and(Value::is_string) {
                        report.push(format!("{field}.{side}"), "must be a string");
                    }
                }
            }
            _ => report.push(field, "must be a string or { src, dist }"),
        }
    }
}

fn check_bundle(
    bundle: &Value,
    index: usize,
    floor: u64,
    seen: &mut HashSet<String>,
    report: &mut Report<'_>,
) {
    let prefix = format!("bundles[{index}]");
    let Some(obj) = bundle.as_object() else {
        report.push(prefix, "must be an object");
        return;
    };

    match obj.get("name") {
        Some(Value::String(name)) if !name.trim().is_empty() => {
            if !seen.insert(name.clone()) {
                report.push(
                    format!("{prefix}.name"),
                    format!("duplicate bundle name '{name}'"),
                );
            }
        }
        Some(Value::String(_)) => report.push(format!("{prefix}.name"), "must not be empty"),
        Some(_) => report.push(format!("{prefix}.name"), "must be a string"),
        None => report.push(format!("{prefix}.name"), "is required"),
    }

    match obj.get("files") {
        Some(files) => report.string_list(files, &format!("{prefix}.files")),
        None => report.push(format!("{prefix}.files"), "is required"),
    }

    report.boolean(obj, "splitChunks", &format!("{prefix}.splitChunks"));
    report.boolean(obj, "groupEntries", &format!("{prefix}.groupEntries"));
    report.object(obj, "override", &format!("{prefix}.override"));

    if let Some(color) = obj.get("color") {
        let valid = color.as_str().is_some_and(|c| HEX_COLOR.is_match(c));
        if !valid {
            report.push(format!("{prefix}.color"), "must be a hex color");
        }
    }

    if obj.get("entry").is_some_and(|e| !e.is_object()) {
        report.push(format!("{prefix}.entry"), "must be an object");
    }

    // Chunk settings only matter while splitting is on.
    if obj.get("splitChunks") != Some(&Value::Bool(true)) {
        return;
    }

    match obj.get("chunkTest") {
        Some(Value::String(pattern)) => {
            if let Err(err) = Regex::new(pattern) {
                report.push(
                    format!("{prefix}.chunkTest"),
                    format!("invalid pattern: {err}"),
                );
            }
        }
        Some(_) => report.push(format!("{prefix}.chunkTest"), "must be a string pattern"),
        None => {}
    }

    report.string(obj, "chunkName", &format!("{prefix}.chunkName"));

    if let Some(size) = obj.get("chunkMinSize") {
        match size.as_u64() {
            Some(n) if n >= floor => {}
            Some(_) => report.push(
                format!("{prefix}.chunkMinSize"),
                format!("must not be less than {floor}"),
            ),
            None => report.push(format!("{prefix}.chunkMinSize"), "must be a positive integer"),
        }
    }
}
