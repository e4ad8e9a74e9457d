//! Tests for default values and path resolution.

use std::path::PathBuf;

use serde_json::json;
use wordpack_config::{AssetKind, Devtool, PathConfig, Side, SourceMaps, UserConfig};

fn config(extra: serde_json::Value) -> UserConfig {
    let mut value = json!({
        "basePath": "/srv/theme",
        "bundles": [{ "name": "admin", "files": ["./scripts/admin.ts"] }]
    });
    if let (Some(obj), Some(extra)) = (value.as_object_mut(), extra.as_object()) {
        obj.extend(extra.clone());
    }
    UserConfig::from_value(value).unwrap()
}

#[test]
fn path_config_defaults() {
    let paths = PathConfig::default();
    assert_eq!(paths.dir(Side::Src, AssetKind::Root), "assets");
    assert_eq!(paths.dir(Side::Dist, AssetKind::Root), "dist");
    for (kind, name) in [
        (AssetKind::Scripts, "scripts"),
        (AssetKind::Styles, "styles"),
        (AssetKind::Images, "images"),
        (AssetKind::Fonts, "fonts"),
    ] {
        assert_eq!(paths.dir(Side::Src, kind), name);
        assert_eq!(paths.dir(Side::Dist, kind), name);
    }
}

#[test]
fn user_config_defaults() {
    let config = config(json!({}));
    assert!(!config.production);
    assert!(!config.watch);
    assert!(config.multimode);
    assert_eq!(config.externals.len(), 4);
    assert_eq!(config.externals["lodash"], "_");
    assert_eq!(
        config.source_maps,
        SourceMaps::Enabled(Devtool::EvalCheapSourceMap)
    );
    assert_eq!(config.manifest_file(), Some("assets.json"));
    assert!(config.overrides.is_empty());
}

#[test]
fn shared_path_entry_applies_to_both_sides() {
    let config = config(json!({ "paths": { "images": "img" } }));
    assert_eq!(
        config.path(Side::Src, AssetKind::Images),
        PathBuf::from("/srv/theme/assets/img")
    );
    assert_eq!(
        config.path(Side::Dist, AssetKind::Images),
        PathBuf::from("/srv/theme/dist/img")
    );
}

#[test]
fn source_maps_accept_devtool_names() {
    let config = config(json!({ "sourceMaps": "cheap-module-source-map" }));
    assert_eq!(
        config.source_maps,
        SourceMaps::Enabled(Devtool::CheapModuleSourceMap)
    );

    let config = self::config(json!({ "sourceMaps": false }));
    assert_eq!(config.source_maps, SourceMaps::Disabled);
}
