//! Compilation rules and extraction plugins.
//!
//! Script rules apply only to bundles with scripts, style/image/font rules
//! only to bundles with styles. Every rule is scoped to its configured source
//! directory.

use serde_json::{Value, json};
use wordpack_config::{AssetKind, Bundle, Side};

use super::{plugin, plugins, regex};
use crate::context::BuildRun;
use crate::merge::{Fragment, fragment, merge};

const SCRIPT_TEST: &str = r"(\.[tj]sx?)$";
const SCRIPT_EXCLUDE: &str = r"node_modules(?![/|\\](bootstrap|foundation-sites))";
const STYLE_TEST: &str = r"\.(sa|sc|c)ss$";
const IMAGE_TEST: &str = r"\.(png|svg|jpg|jpeg|gif|ico|avif)$";
const FONT_TEST: &str = r"\.(ttf|otf|eot|woff2?)$";

pub fn build(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    merge([scripts(run, bundle), styles(run, bundle), no_script(bundle)])
}

/// File name of an extracted stylesheet: entry chunks go under the bundle's
/// directory, split chunks under `vendor`.
pub fn css_filename(run: &BuildRun<'_>, bundle: &Bundle) -> String {
    format!(
        "{}/{}/{}.css",
        run.rel(Side::Dist, AssetKind::Styles),
        bundle.name,
        run.config().asset()
    )
}

pub fn css_chunk_filename(run: &BuildRun<'_>) -> String {
    format!("{}/vendor/[id].css", run.rel(Side::Dist, AssetKind::Styles))
}

fn scripts(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    if !bundle.has_scripts() {
        return Fragment::new();
    }

    fragment(json!({
        "module": {
            "rules": [{
                "test": regex(SCRIPT_TEST, ""),
                "include": [run.abs(Side::Src, AssetKind::Scripts)],
                "exclude": [regex(SCRIPT_EXCLUDE, "")],
                "use": {
                    "loader": "babel-loader",
                    "options": {
                        "presets": [
                            ["@babel/preset-env", { "useBuiltIns": "entry", "corejs": "3.37" }],
                            ["@babel/preset-typescript", { "onlyRemoveTypeImports": true }],
                        ],
                        "plugins": ["@babel/plugin-transform-class-properties"],
                    },
                },
            }],
        },
        "resolve": { "extensions": [".jsx", ".tsx", ".ts", ".js"] },
    }))
}

fn styles(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    if !bundle.has_styles() {
        return Fragment::new();
    }

    fragment(json!({
        "module": {
            "rules": [
                {
                    "test": regex(STYLE_TEST, "i"),
                    "include": run.abs(Side::Src, AssetKind::Styles),
                    "use": style_loaders(),
                },
                asset_rule(run, IMAGE_TEST, "i", AssetKind::Images),
                asset_rule(run, FONT_TEST, "", AssetKind::Fonts),
            ],
        },
        "resolve": { "extensions": [".scss", ".css"] },
        "plugins": [
            plugin(plugins::CSS_EXTRACT, json!({
                "filename": css_filename(run, bundle),
                "chunkFilename": css_chunk_filename(run),
            })),
            plugin(plugins::CSS_URL_RELATIVE, json!({})),
        ],
    }))
}

fn style_loaders() -> Value {
    json!([
        { "loader": "mini-css-extract-plugin/loader" },
        { "loader": "css-loader", "options": { "importLoaders": 1, "sourceMap": true } },
        {
            "loader": "postcss-loader",
            "options": {
                "postcssOptions": { "plugins": ["postcss-preset-env"] },
                "sourceMap": true,
            },
        },
        { "loader": "resolve-url-loader", "options": { "sourceMap": true } },
        { "loader": "sass-loader", "options": { "implementation": "sass", "sourceMap": true } },
    ])
}

fn asset_rule(run: &BuildRun<'_>, test: &str, flags: &str, kind: AssetKind) -> Value {
    json!({
        "test": regex(test, flags),
        "type": "asset/resource",
        "include": run.abs(Side::Src, kind),
        "generator": {
            "filename": format!("{}/[name][ext]", run.rel(Side::Dist, kind)),
        },
    })
}

// A styles-only entry still emits a script file; the plugin drops it.
fn no_script(bundle: &Bundle) -> Fragment {
    if bundle.has_scripts() || !bundle.has_styles() {
        return Fragment::new();
    }

    fragment(json!({ "plugins": [plugin(plugins::REMOVE_EMPTY_SCRIPTS, json!({}))] }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpack_config::UserConfig;

    fn config() -> UserConfig {
        UserConfig::from_value(json!({
            "basePath": "/srv/theme",
            "paths": { "styles": { "src": "scss", "dist": "css" } },
            "bundles": [{ "name": "admin", "files": ["a.ts"] }]
        }))
        .unwrap()
    }

    fn plugin_names(fragment: &Fragment) -> Vec<String> {
        fragment
            .get("plugins")
            .and_then(Value::as_array)
            .map(|plugins| {
                plugins
                    .iter()
                    .filter_map(|p| p["plugin"].as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn scripts_only_bundle_gets_script_rule() {
        let config = config();
        let compile = build(&BuildRun::new(&config), &Bundle::new("front", ["./scripts/front.ts"]));

        let rules = compile["module"]["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0]["include"], json!(["/srv/theme/assets/scripts"]));
        assert_eq!(rules[0]["use"]["loader"], json!("babel-loader"));
        assert!(plugin_names(&compile).is_empty());
    }

    #[test]
    fn styles_only_bundle_drops_empty_scripts() {
        let config = config();
        let compile = build(&BuildRun::new(&config), &Bundle::new("editor", ["./editor.scss"]));

        let rules = compile["module"]["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0]["include"], json!("/srv/theme/assets/scss"));
        assert_eq!(rules[1]["generator"]["filename"], json!("images/[name][ext]"));
        assert_eq!(rules[2]["generator"]["filename"], json!("fonts/[name][ext]"));
        assert_eq!(
            plugin_names(&compile),
            vec![
                plugins::CSS_EXTRACT,
                plugins::CSS_URL_RELATIVE,
                plugins::REMOVE_EMPTY_SCRIPTS
            ]
        );
        assert_eq!(
            compile["plugins"][0]["options"]["filename"],
            json!("css/editor/[name].css")
        );
        assert_eq!(
            compile["plugins"][0]["options"]["chunkFilename"],
            json!("css/vendor/[id].css")
        );
    }

    #[test]
    fn mixed_bundle_concatenates_rules_and_extensions() {
        let config = config();
        let compile = build(
            &BuildRun::new(&config),
            &Bundle::new("admin", ["./admin.scss", "./admin.ts"]),
        );

        assert_eq!(compile["module"]["rules"].as_array().unwrap().len(), 4);
        assert_eq!(
            compile["resolve"]["extensions"],
            json!([".jsx", ".tsx", ".ts", ".js", ".scss", ".css"])
        );
        assert!(!plugin_names(&compile).contains(&plugins::REMOVE_EMPTY_SCRIPTS.to_string()));
    }

    #[test]
    fn bundle_without_assets_contributes_nothing() {
        let config = config();
        let compile = build(&BuildRun::new(&config), &Bundle::new("empty", ["README.md"]));
        assert!(compile.is_empty());
    }
}
