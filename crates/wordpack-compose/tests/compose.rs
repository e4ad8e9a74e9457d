//! End-to-end composition tests over real project trees.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;
use wordpack_compose::{ASSET_GRAPH_NAME, Error, build_config, compose};
use wordpack_config::{ConfigError, EnvParams, UserConfig};

const THEME_CONFIG: &str = r#"
globalChunks = ["awesome-notifications"]

[override]
target = "web"
plugins = [{ plugin = "GlobalPlugin" }]

[[bundles]]
name = "admin"
files = ["./styles/admin.scss", "./scripts/admin/list-page.ts"]
splitChunks = true
chunkMinSize = 25000
override = { plugins = [{ plugin = "AdminPlugin" }], target = "es2020" }

[[bundles]]
name = "basic"
files = ["./scripts/frontend/basic.ts"]
"#;

fn project(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("assets/scripts")).unwrap();
    fs::write(dir.path().join("wordpack.config.toml"), config).unwrap();
    dir
}

fn params(root: &Path) -> EnvParams {
    EnvParams::new().set("basePath", root.to_string_lossy())
}

fn plugin_names(graph: &serde_json::Map<String, Value>) -> Vec<String> {
    graph["plugins"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["plugin"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn composes_one_graph_per_bundle_plus_assets() {
    let dir = project(THEME_CONFIG);
    let graphs = build_config(&params(dir.path()), Path::new("/"), None)
        .await
        .unwrap();

    let names: Vec<_> = graphs.iter().map(|g| g["name"].clone()).collect();
    assert_eq!(names, vec![json!("admin"), json!("basic"), json!(ASSET_GRAPH_NAME)]);
    assert_eq!(graphs[2]["dependencies"], json!(["admin", "basic"]));
}

#[tokio::test]
async fn overrides_merge_after_builtin_fragments() {
    let dir = project(THEME_CONFIG);
    let graphs = build_config(&params(dir.path()), Path::new("/"), None)
        .await
        .unwrap();

    let admin = &graphs[0];
    // Bundle override wins over the global override for scalars.
    assert_eq!(admin["target"], json!("es2020"));
    assert_eq!(graphs[1]["target"], json!("web"));

    let plugins = plugin_names(admin);
    let n = plugins.len();
    assert_eq!(plugins[0], "OnlyFriendlyErrorsPlugin");
    assert_eq!(plugins[n - 2], "GlobalPlugin");
    assert_eq!(plugins[n - 1], "AdminPlugin");
}

#[tokio::test]
async fn chunk_policy_reflects_bundle_settings() {
    let dir = project(THEME_CONFIG);
    let graphs = build_config(&params(dir.path()), Path::new("/"), None)
        .await
        .unwrap();

    let groups = &graphs[0]["optimization"]["splitChunks"]["cacheGroups"];
    assert_eq!(groups["vendor"]["minSize"], json!(25000));
    assert_eq!(groups["vendor"]["name"], json!("vendor-admin"));
    assert_eq!(groups["global-awesome-notifications"]["priority"], json!(5));
    assert!(graphs[1]["optimization"].get("splitChunks").is_none());
}

#[tokio::test]
async fn watch_mode_skips_chunk_policy() {
    let dir = project(THEME_CONFIG);
    let params = params(dir.path()).set("WEBPACK_WATCH", "true");
    let graphs = build_config(&params, Path::new("/"), None).await.unwrap();

    assert_eq!(graphs[0]["watch"], json!(true));
    assert!(graphs[0]["optimization"].get("splitChunks").is_none());
}

#[tokio::test]
async fn single_mode_builds_app_graph() {
    let dir = project(&format!("multimode = false\n{THEME_CONFIG}"));
    let graphs = build_config(&params(dir.path()), Path::new("/"), None)
        .await
        .unwrap();

    assert_eq!(graphs.len(), 2);
    let app = &graphs[0];
    assert_eq!(app["name"], json!("App"));
    assert_eq!(
        app["entry"],
        json!({
            "admin": ["./styles/admin.scss", "./scripts/admin/list-page.ts"],
            "basic": ["./scripts/frontend/basic.ts"]
        })
    );
    assert_eq!(
        app["optimization"]["splitChunks"]["cacheGroups"]["vendor"]["name"],
        json!("vendor-app")
    );
    assert!(plugin_names(app).contains(&"AdminPlugin".to_string()));
}

#[tokio::test]
async fn production_graphs_minimize_without_source_maps() {
    let dir = project(THEME_CONFIG);
    let params = params(dir.path()).set("production", "true");
    let graphs = build_config(&params, Path::new("/"), None).await.unwrap();

    let admin = &graphs[0];
    assert_eq!(admin["devtool"], json!(false));
    assert_eq!(admin["mode"], json!("production"));
    assert_eq!(admin["optimization"]["minimize"], json!(true));
    assert_eq!(
        admin["output"]["filename"],
        json!("scripts/[name].[contenthash:6].js")
    );
}

#[tokio::test]
async fn output_directory_is_emptied() {
    let dir = project(THEME_CONFIG);
    let stale = dir.path().join("dist/scripts/old.js");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "old").unwrap();

    build_config(&params(dir.path()), Path::new("/"), None)
        .await
        .unwrap();

    assert!(dir.path().join("dist").is_dir());
    assert!(!stale.exists());
}

#[tokio::test]
async fn invalid_config_leaves_output_untouched() {
    let dir = project("multimode = true\n");
    let stale = dir.path().join("dist/keep.txt");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "keep").unwrap();

    let err = build_config(&params(dir.path()), Path::new("/"), None)
        .await
        .unwrap_err();

    match err {
        Error::Config(ConfigError::Invalid { violations }) => {
            assert_eq!(violations[0].field, "bundles");
        }
        other => panic!("expected invalid config, got {other:?}"),
    }
    assert!(stale.exists());
}

#[test]
fn composing_twice_is_byte_identical() {
    let config = UserConfig::from_value(json!({
        "basePath": "/srv/theme",
        "production": true,
        "bundles": [
            { "name": "admin", "files": ["a.scss", "a.ts"], "splitChunks": true },
            { "name": "editor", "files": ["editor.scss"] }
        ]
    }))
    .unwrap();

    let first = serde_json::to_string(&compose(&config)).unwrap();
    let second = serde_json::to_string(&compose(&config)).unwrap();
    assert_eq!(first, second);
}
