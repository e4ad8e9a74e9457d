//! Settings common to every bundle graph of a run.

use serde_json::{Value, json};
use wordpack_config::{AssetKind, Side, SourceMaps};

use super::{plugin, plugins, regex};
use crate::context::BuildRun;
use crate::merge::{Fragment, fragment, merge};

pub fn build(run: &BuildRun<'_>) -> Fragment {
    merge([core(run), watch(run), production(run)])
}

fn core(run: &BuildRun<'_>) -> Fragment {
    let config = run.config();

    let devtool = match config.source_maps {
        SourceMaps::Enabled(mode) => Value::from(mode.as_str()),
        SourceMaps::Disabled => Value::Bool(false),
    };

    fragment(json!({
        "devtool": devtool,
        "context": run.abs(Side::Src, AssetKind::Root),
        "externals": config.externals,
        "mode": "development",
        "target": "browserslist",
        "output": {
            "path": run.abs(Side::Dist, AssetKind::Root),
            "publicPath": "",
            "filename": format!("{}/{}.js", run.rel(Side::Dist, AssetKind::Scripts), config.asset()),
        },
        "stats": false,
        "optimization": {
            "removeEmptyChunks": true,
        },
        "plugins": [
            plugin(plugins::FRIENDLY_ERRORS, json!({
                "clearConsole": false,
                "compilationSuccessInfo": { "messages": [], "notes": [] },
            })),
        ],
    }))
}

fn watch(run: &BuildRun<'_>) -> Fragment {
    if !run.config().watch {
        return Fragment::new();
    }

    fragment(json!({
        "watch": true,
        "watchOptions": {
            "ignored": regex("node_modules", ""),
            "aggregateTimeout": 600,
            "poll": 1000,
        },
    }))
}

fn production(run: &BuildRun<'_>) -> Fragment {
    if !run.config().production {
        return Fragment::new();
    }

    fragment(json!({
        "devtool": false,
        "mode": "production",
        "optimization": { "minimize": true },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordpack_config::UserConfig;

    fn config(extra: Value) -> UserConfig {
        let mut value = json!({
            "basePath": "/srv/theme",
            "bundles": [{ "name": "admin", "files": ["./scripts/admin.ts"] }]
        });
        if let (Some(obj), Value::Object(extra)) = (value.as_object_mut(), extra) {
            obj.extend(extra);
        }
        UserConfig::from_value(value).unwrap()
    }

    #[test]
    fn development_defaults() {
        let config = config(json!({}));
        let shared = build(&BuildRun::new(&config));

        assert_eq!(shared["devtool"], json!("eval-cheap-source-map"));
        assert_eq!(shared["context"], json!("/srv/theme/assets"));
        assert_eq!(shared["mode"], json!("development"));
        assert_eq!(shared["output"]["path"], json!("/srv/theme/dist"));
        assert_eq!(shared["output"]["filename"], json!("scripts/[name].js"));
        assert_eq!(shared["externals"]["jquery"], json!("jQuery"));
        assert_eq!(shared["plugins"][0]["plugin"], json!(plugins::FRIENDLY_ERRORS));
        assert!(shared.get("watch").is_none());
    }

    #[test]
    fn watch_adds_watch_options() {
        let config = config(json!({ "watch": true }));
        let shared = build(&BuildRun::new(&config));
        assert_eq!(shared["watch"], json!(true));
        assert_eq!(shared["watchOptions"]["aggregateTimeout"], json!(600));
        assert_eq!(shared["watchOptions"]["ignored"]["$regex"], json!("node_modules"));
    }

    #[test]
    fn production_disables_devtool_and_minimizes() {
        let config = config(json!({ "production": true }));
        let shared = build(&BuildRun::new(&config));
        assert_eq!(shared["devtool"], json!(false));
        assert_eq!(shared["mode"], json!("production"));
        assert_eq!(
            shared["optimization"],
            json!({ "removeEmptyChunks": true, "minimize": true })
        );
        assert_eq!(shared["output"]["filename"], json!("scripts/[name].[contenthash:6].js"));
    }
}
