//! The static asset copy graph, appended after every bundle graph.

use serde_json::json;
use wordpack_config::{AssetKind, Side};

use super::manifest::manifest_plugin;
use super::{hook, hooks, plugin, plugins};
use crate::context::BuildRun;
use crate::merge::{Fragment, fragment, merge};

/// Name of the asset copy graph.
pub const ASSET_GRAPH_NAME: &str = "AssetCopy";

/// Build the asset copy graph. It runs after the graphs named in `dependencies`.
pub fn build(run: &BuildRun<'_>, dependencies: &[String]) -> Fragment {
    merge([core(run, dependencies), manifest(run), production(run)])
}

fn core(run: &BuildRun<'_>, dependencies: &[String]) -> Fragment {
    let config = run.config();
    let images_src = run.rel(Side::Src, AssetKind::Images);
    let images_dist = run.rel(Side::Dist, AssetKind::Images);

    fragment(json!({
        "name": ASSET_GRAPH_NAME,
        "context": run.abs(Side::Src, AssetKind::Root),
        "mode": config.mode(),
        "entry": {},
        "output": { "path": run.abs(Side::Dist, AssetKind::Root) },
        "stats": false,
        "plugins": [
            plugin(plugins::COPY, json!({
                "patterns": [{
                    "from": format!("{images_src}/"),
                    "to": format!("{images_dist}/[path][name][ext]"),
                    "force": false,
                    "noErrorOnMissing": true,
                    "toType": "template",
                    "filter": hook(hooks::SKIP_EXISTING),
                }],
            })),
            plugin(plugins::PROGRESS_BAR, json!({
                "name": ASSET_GRAPH_NAME,
                "fancy": !config.ci,
                "basic": config.ci,
            })),
        ],
        "dependencies": dependencies,
    }))
}

// The copy graph finishes last, so its manifest instance writes the files.
fn manifest(run: &BuildRun<'_>) -> Fragment {
    match run.config().manifest_file() {
        Some(output) => fragment(json!({ "plugins": [manifest_plugin(output, true)] })),
        None => Fragment::new(),
    }
}

fn production(run: &BuildRun<'_>) -> Fragment {
    if !run.config().production {
        return Fragment::new();
    }

    fragment(json!({
        "optimization": { "minimize": true, "minimizer": run.image_minimizers() },
    }))
}
