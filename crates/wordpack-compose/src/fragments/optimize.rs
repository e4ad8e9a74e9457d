//! Chunk splitting policy and production minimizers.
//!
//! Cache groups, highest priority first:
//!
//! | group            | priority | selects                                   |
//! |------------------|----------|-------------------------------------------|
//! | `vendor`         | 10       | the bundle's chunk test                   |
//! | `global-<pkg>`   | 5        | `node_modules/<package>/`                 |
//! | `common`         | -20      | modules shared by two or more entries     |
//!
//! The engine's built-in `default` and `defaultVendors` groups are disabled.

use serde_json::{Map, Value, json};
use wordpack_config::{AssetKind, Bundle, Side, SplitChunks};

use super::{plugin, plugins, regex};
use crate::context::BuildRun;
use crate::merge::{Fragment, fragment, merge};

pub const VENDOR_PRIORITY: i64 = 10;
pub const GLOBAL_PRIORITY: i64 = 5;
pub const COMMON_PRIORITY: i64 = -20;

pub fn build(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    merge([chunks(run, bundle), styles(run, bundle), scripts(run, bundle)])
}

fn chunks(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    let config = run.config();
    let SplitChunks::Enabled {
        test,
        min_size,
        name,
    } = &bundle.split_chunks
    else {
        return Fragment::new();
    };

    // Watch builds keep every module in its entry chunk.
    if config.watch {
        return Fragment::new();
    }

    let scripts_dist = run.rel(Side::Dist, AssetKind::Scripts);
    let mut groups = Map::new();

    groups.insert(
        "vendor".to_string(),
        json!({
            "test": regex(test, ""),
            "name": name,
            "filename": format!("{scripts_dist}/[name].js"),
            "minSize": min_size,
            "minChunks": 1,
            "priority": VENDOR_PRIORITY,
            "reuseExistingChunk": true,
            "chunks": "all",
        }),
    );

    for package in &config.global_chunks {
        groups.insert(global_group_key(package), global_group(package));
    }

    groups.insert(
        "common".to_string(),
        json!({
            "name": "common",
            "minChunks": 2,
            "priority": COMMON_PRIORITY,
            "reuseExistingChunk": true,
            "chunks": "all",
        }),
    );

    groups.insert("default".to_string(), Value::Bool(false));
    groups.insert("defaultVendors".to_string(), Value::Bool(false));

    tracing::trace!(bundle = %bundle.name, groups = groups.len(), "chunk policy");

    fragment(json!({
        "optimization": {
            "splitChunks": {
                "hidePathInfo": true,
                "cacheGroups": groups,
            },
        },
    }))
}

/// Cache group key of a global package, kept apart from the fixed groups.
fn global_group_key(package: &str) -> String {
    format!("global-{package}")
}

fn global_group(package: &str) -> Value {
    let test = format!(r"[\\/]node_modules[\\/]{}[\\/]", ::regex::escape(package));
    json!({
        "test": regex(&test, ""),
        "name": package,
        "priority": GLOBAL_PRIORITY,
        "reuseExistingChunk": true,
        "chunks": "all",
    })
}

fn styles(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    if !run.config().production || !bundle.has_styles() {
        return Fragment::new();
    }

    let minimizer: Vec<Value> = run
        .css_minimizers()
        .iter()
        .chain(run.image_minimizers())
        .cloned()
        .collect();

    fragment(json!({ "optimization": { "minimize": true, "minimizer": minimizer } }))
}

fn scripts(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    if !run.config().production || !bundle.has_scripts() {
        return Fragment::new();
    }

    fragment(json!({
        "optimization": { "minimize": true, "minimizer": run.js_minimizers() },
    }))
}

pub(crate) fn css_minimizers() -> Vec<Value> {
    vec![plugin(plugins::CSS_MINIMIZER, json!({}))]
}

pub(crate) fn image_minimizers() -> Vec<Value> {
    vec![
        plugin(
            plugins::IMAGE_MINIMIZER,
            json!({
                "exclude": regex(r"\.svg$", ""),
                "minimizer": {
                    "implementation": "sharpMinify",
                    "options": {
                        "encodeOptions": {
                            "jpeg": { "quality": 100 },
                            "webp": { "lossless": true },
                            "avif": { "lossless": true },
                            "png": {},
                            "gif": {},
                        },
                    },
                },
            }),
        ),
        plugin(
            plugins::IMAGE_MINIMIZER,
            json!({
                "include": regex(r"\.svg$", ""),
                "minimizer": {
                    "implementation": "svgoMinify",
                    "options": {
                        "encodeOptions": {
                            "multipass": true,
                            "plugins": ["preset-default"],
                        },
                    },
                },
            }),
        ),
    ]
}

pub(crate) fn js_minimizers() -> Vec<Value> {
    vec![plugin(
        plugins::TERSER,
        json!({
            "extractComments": false,
            "terserOptions": {
                "format": { "comments": false },
                "compress": { "drop_console": true },
            },
        }),
    )]
}
