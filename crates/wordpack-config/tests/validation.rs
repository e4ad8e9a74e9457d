//! Validation reporting through the public API.

use serde_json::json;
use wordpack_config::{ConfigError, UserConfig, validate_value};

#[test]
fn every_violation_is_rendered() {
    let value = json!({
        "externals": { "jquery": 1 },
        "bundles": [
            { "name": "admin", "files": "admin.ts" },
            { "name": "admin", "files": [], "splitChunks": true, "chunkName": 7 }
        ]
    });

    let err = validate_value(&value).unwrap_err();
    let message = err.to_string();
    assert!(message.starts_with("invalid configuration:"));
    for field in [
        "externals.jquery",
        "bundles[0].files",
        "bundles[1].name",
        "bundles[1].chunkName",
    ] {
        assert!(message.contains(field), "{field} missing from:\n{message}");
    }
}

#[test]
fn empty_bundle_list_is_invalid() {
    let err = validate_value(&json!({ "bundles": [] })).unwrap_err();
    assert_eq!(err.violations().len(), 1);
    assert_eq!(err.violations()[0].field, "bundles");
}

#[test]
fn valid_config_deserializes() {
    let value = json!({
        "basePath": "/srv/theme",
        "multimode": false,
        "sourceMaps": false,
        "paths": { "root": "static", "fonts": { "src": "type", "dist": "webfonts" } },
        "bundles": [{
            "name": "admin",
            "files": ["./scripts/admin.ts"],
            "splitChunks": true,
            "chunkTest": "[\\\\/]node_modules[\\\\/]",
            "color": "#ff8800",
            "override": { "target": "web" }
        }]
    });

    validate_value(&value).unwrap();
    let config = UserConfig::from_value(value).unwrap();
    assert!(!config.multimode);
    assert_eq!(config.bundles[0].color.as_deref(), Some("#ff8800"));
    assert_eq!(config.bundles[0].overrides["target"], json!("web"));
}

#[test]
fn serde_errors_surface_as_invalid_config() {
    let err = UserConfig::from_value(json!({ "bundles": 3 })).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}
