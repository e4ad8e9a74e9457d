//! Entry points, module ids and the progress bar of one bundle.

use serde_json::{Map, Value, json};
use wordpack_config::{AssetKind, Bundle, Side};

use super::{plugin, plugins};
use crate::context::BuildRun;
use crate::merge::{Fragment, fragment};

pub fn build(run: &BuildRun<'_>, bundle: &Bundle) -> Fragment {
    let config = run.config();

    let entry: Map<String, Value> = bundle
        .entry()
        .into_iter()
        .map(|(name, files)| (name, json!(files)))
        .collect();

    let color = bundle
        .color
        .clone()
        .unwrap_or_else(|| run.colorizer().assign(&bundle.name));

    fragment(json!({
        "name": bundle.name,
        "entry": entry,
        "output": {
            "uniqueName": bundle.name,
            "chunkFilename": format!("{}/[name].js", run.rel(Side::Dist, AssetKind::Scripts)),
        },
        "optimization": { "moduleIds": "deterministic" },
        "plugins": [
            plugin(plugins::PROGRESS_BAR, json!({
                "name": camel_case(&bundle.name),
                "fancy": !config.ci,
                "basic": config.ci,
                "color": color,
            })),
        ],
    }))
}

/// `list-page` -> `listPage`, `Admin_Area` -> `adminArea`.
pub(crate) fn camel_case(input: &str) -> String {
    let words: Vec<&str> = input
        .split(|c: char| c == '-' || c == '_' || c == '.' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .collect();

    let mut out = String::with_capacity(input.len());
    for (i, word) in words.iter().enumerate() {
        let all_upper = word.chars().all(|c| !c.is_lowercase());
        let mut chars = word.chars();
        let Some(first) = chars.next() else { continue };

        if i == 0 {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }

        let rest = chars.as_str();
        if all_upper {
            out.push_str(&rest.to_lowercase());
        } else {
            out.push_str(rest);
        }
    }
    out
}
