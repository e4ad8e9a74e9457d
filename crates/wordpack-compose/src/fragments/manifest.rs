//! Asset manifest plugin registration.

use serde_json::{Value, json};

use super::{hook, hooks, plugin, plugins};
use crate::context::BuildRun;
use crate::merge::{Fragment, fragment};

/// Manifest plugin for a bundle graph. Empty when no manifest is configured.
pub fn build(run: &BuildRun<'_>) -> Fragment {
    match run.config().manifest_file() {
        Some(output) => fragment(json!({ "plugins": [manifest_plugin(output, false)] })),
        None => Fragment::new(),
    }
}

/// Plugin descriptor shared by bundle graphs and the asset copy graph.
///
/// Every instance merges into the same output file. Only the instance that
/// writes to disk carries the completion hook producing the PHP table.
pub(crate) fn manifest_plugin(output: &str, write_to_disk: bool) -> Value {
    let mut options = json!({
        "output": output,
        "space": 2,
        "merge": true,
        "sortManifest": true,
        "writeToDisk": write_to_disk,
        "customize": hook(hooks::MANIFEST_REKEY),
    });

    if write_to_disk {
        options["done"] = hook(hooks::MANIFEST_WRITE_PHP);
    }

    plugin(plugins::ASSETS_MANIFEST, options)
}
