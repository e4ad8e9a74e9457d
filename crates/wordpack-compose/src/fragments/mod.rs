//! Fragment builders.
//!
//! Each builder is a pure function of the [`BuildRun`](crate::BuildRun) and,
//! for per-bundle fragments, the bundle. A builder that does not apply returns
//! an empty fragment.
//!
//! Engine plugins are described as `{ "plugin": <name>, "options": {...} }`.
//! Patterns the engine treats as regular expressions are written as
//! `{ "$regex": <source>, "flags": <flags> }`, and callbacks the engine host
//! must provide as `{ "$hook": <name> }`.

pub mod asset;
pub mod compile;
pub mod entry;
pub mod manifest;
pub mod optimize;
pub mod shared;

use serde_json::{Value, json};

/// Plugin names understood by the engine host.
pub mod plugins {
    pub const FRIENDLY_ERRORS: &str = "OnlyFriendlyErrorsPlugin";
    pub const ASSETS_MANIFEST: &str = "WebpackAssetsManifest";
    pub const PROGRESS_BAR: &str = "WebpackBarPlugin";
    pub const CSS_EXTRACT: &str = "MiniCssExtractPlugin";
    pub const CSS_URL_RELATIVE: &str = "CssUrlRelativePlugin";
    pub const REMOVE_EMPTY_SCRIPTS: &str = "WebpackRemoveEmptyScriptsPlugin";
    pub const CSS_MINIMIZER: &str = "CssMinimizerPlugin";
    pub const IMAGE_MINIMIZER: &str = "ImageMinimizerPlugin";
    pub const TERSER: &str = "TerserPlugin";
    pub const COPY: &str = "CopyPlugin";
}

/// Callbacks the engine host wires to the composer's own operations.
pub mod hooks {
    /// Manifest `customize`: re-key one entry.
    pub const MANIFEST_REKEY: &str = "wordpack:manifest-rekey";
    /// Manifest `done`: write the PHP lookup table.
    pub const MANIFEST_WRITE_PHP: &str = "wordpack:manifest-php";
    /// Copy `filter`: skip files already present in the output tree.
    pub const SKIP_EXISTING: &str = "wordpack:skip-existing";
}

pub(crate) fn plugin(name: &str, options: Value) -> Value {
    json!({ "plugin": name, "options": options })
}

pub(crate) fn regex(source: &str, flags: &str) -> Value {
    json!({ "$regex": source, "flags": flags })
}

pub(crate) fn hook(name: &str) -> Value {
    json!({ "$hook": name })
}
