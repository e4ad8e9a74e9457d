use std::path::Path;

// Helper defaults
pub const DEFAULT_CHUNK_TEST: &str = r"[\\/]node_modules[\\/]";

pub const DEFAULT_CHUNK_NAME: &str = "vendor-[name]";

pub const DEFAULT_CHUNK_MIN_SIZE: u64 = 20_000;

pub(crate) const SCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs"];

pub(crate) const STYLE_EXTENSIONS: &[&str] = &["css", "scss", "sass"];

pub(crate) fn default_chunk_min_size() -> u64 {
    DEFAULT_CHUNK_MIN_SIZE
}

/// Replace the `[name]` placeholder of a chunk name template.
pub(crate) fn substitute_name(template: &str, name: &str) -> String {
    template.replace("[name]", name)
}

pub(crate) fn has_extension(file: &str, extensions: &[&str]) -> bool {
    Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// File name without directories or extension (`./styles/admin.scss` -> `admin`).
pub(crate) fn entry_key(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.to_string())
}
