//! Per-run composition state.

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde_json::Value;
use wordpack_config::{AssetKind, Bundle, DEFAULT_CHUNK_TEST, Side, SplitChunks, UserConfig};

use crate::color::Colorizer;
use crate::fragments::{asset, compile, entry, manifest, optimize, shared};
use crate::merge::{self, Fragment};

/// Name of the bundle synthesized when `multimode` is off.
pub const SINGLE_MODE_NAME: &str = "App";

/// Vendor chunk name of the synthesized bundle.
pub const SINGLE_MODE_CHUNK_NAME: &str = "vendor-app";

/// One composition run over a loaded configuration.
///
/// The shared fragment and the minimizer lists are built at most once per
/// run and cloned into every graph that needs them. Nothing is cached across
/// runs.
pub struct BuildRun<'a> {
    config: &'a UserConfig,
    colorizer: Colorizer,
    shared: OnceCell<Fragment>,
    css_minimizers: OnceCell<Vec<Value>>,
    image_minimizers: OnceCell<Vec<Value>>,
    js_minimizers: OnceCell<Vec<Value>>,
}

impl<'a> BuildRun<'a> {
    pub fn new(config: &'a UserConfig) -> Self {
        Self::with_colorizer(config, Colorizer::default())
    }

    pub fn with_colorizer(config: &'a UserConfig, colorizer: Colorizer) -> Self {
        Self {
            config,
            colorizer,
            shared: OnceCell::new(),
            css_minimizers: OnceCell::new(),
            image_minimizers: OnceCell::new(),
            js_minimizers: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &'a UserConfig {
        self.config
    }

    pub fn colorizer(&self) -> &Colorizer {
        &self.colorizer
    }

    /// Absolute directory as a string, for `context`, `include` and `output.path`.
    pub(crate) fn abs(&self, side: Side, kind: AssetKind) -> String {
        self.config.path(side, kind).to_string_lossy().into_owned()
    }

    /// Directory relative to its root, for output file name templates.
    pub(crate) fn rel(&self, side: Side, kind: AssetKind) -> &'a str {
        self.config.dir(side, kind)
    }

    pub(crate) fn shared(&self) -> &Fragment {
        self.shared.get_or_init(|| shared::build(self))
    }

    pub(crate) fn css_minimizers(&self) -> &[Value] {
        self.css_minimizers.get_or_init(optimize::css_minimizers)
    }

    pub(crate) fn image_minimizers(&self) -> &[Value] {
        self.image_minimizers.get_or_init(optimize::image_minimizers)
    }

    pub(crate) fn js_minimizers(&self) -> &[Value] {
        self.js_minimizers.get_or_init(optimize::js_minimizers)
    }

    /// Bundles to compose: the configured ones, or the single synthetic
    /// bundle when `multimode` is off.
    pub fn bundles(&self) -> Cow<'a, [Bundle]> {
        if self.config.multimode {
            Cow::Borrowed(&self.config.bundles)
        } else {
            Cow::Owned(vec![collapse(
                &self.config.bundles,
                self.config.chunk_min_size_floor,
            )])
        }
    }

    /// Build graph of one bundle.
    ///
    /// Fragments are merged as Shared, Manifest, Entry, Compile, Optimize,
    /// then the global override and finally the bundle's own override.
    pub fn bundle_graph(&self, bundle: &Bundle) -> Fragment {
        tracing::debug!(bundle = %bundle.name, "composing bundle graph");

        merge::merge([
            self.shared().clone(),
            manifest::build(self),
            entry::build(self, bundle),
            compile::build(self, bundle),
            optimize::build(self, bundle),
            self.config.overrides.clone(),
            bundle.overrides.clone(),
        ])
    }

    /// Every build graph of the run: one per bundle, then the asset copy graph.
    pub fn compose(&self) -> Vec<Fragment> {
        let mut graphs: Vec<Fragment> = self
            .bundles()
            .iter()
            .map(|bundle| self.bundle_graph(bundle))
            .collect();

        let names: Vec<String> = graphs
            .iter()
            .filter_map(|graph| graph.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        graphs.push(asset::build(self, &names));

        tracing::info!(
            graphs = graphs.len(),
            mode = self.config.mode(),
            "composed build graphs"
        );
        graphs
    }
}

/// Collapse every bundle into the synthetic single-mode bundle.
///
/// Files are concatenated in bundle order, each original bundle becomes one
/// entry point, and overrides are merged in bundle order.
pub fn collapse(bundles: &[Bundle], min_size: u64) -> Bundle {
    let files: Vec<String> = bundles
        .iter()
        .flat_map(|bundle| bundle.files.iter().cloned())
        .collect();

    let entry: IndexMap<String, Vec<String>> = bundles
        .iter()
        .map(|bundle| (bundle.name.clone(), bundle.files.clone()))
        .collect();

    let overrides = merge::merge(bundles.iter().map(|bundle| bundle.overrides.clone()));

    let mut app = Bundle::new(SINGLE_MODE_NAME, files)
        .with_split_chunks(SplitChunks::Enabled {
            test: DEFAULT_CHUNK_TEST.to_string(),
            min_size,
            name: SINGLE_MODE_CHUNK_NAME.to_string(),
        })
        .with_overrides(overrides);
    app.entry = Some(entry);
    app
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(multimode: bool) -> UserConfig {
        UserConfig::from_value(json!({
            "basePath": "/srv/theme",
            "multimode": multimode,
            "bundles": [
                { "name": "admin", "files": ["./styles/admin.scss", "./scripts/admin.ts"],
                  "override": { "plugins": ["a"] } },
                { "name": "front", "files": ["./scripts/front.ts"],
                  "override": { "plugins": ["b"], "target": "web" } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn multimode_keeps_configured_bundles() {
        let config = config(true);
        let run = BuildRun::new(&config);
        let names: Vec<_> = run.bundles().iter().map(|b| b.name.clone()).collect();
        assert_eq!(names, vec!["admin", "front"]);
    }

    #[test]
    fn single_mode_collapses_into_app() {
        let config = config(false);
        let run = BuildRun::new(&config);
        let bundles = run.bundles();
        assert_eq!(bundles.len(), 1);

        let app = &bundles[0];
        assert_eq!(app.name, SINGLE_MODE_NAME);
        assert_eq!(
            app.files,
            vec!["./styles/admin.scss", "./scripts/admin.ts", "./scripts/front.ts"]
        );
        assert_eq!(app.chunk_name(), Some(SINGLE_MODE_CHUNK_NAME));
        assert_eq!(
            app.split_chunks,
            SplitChunks::Enabled {
                test: DEFAULT_CHUNK_TEST.to_string(),
                min_size: 20_000,
                name: SINGLE_MODE_CHUNK_NAME.to_string(),
            }
        );

        let entry = app.entry();
        assert_eq!(entry.keys().collect::<Vec<_>>(), vec!["admin", "front"]);
        assert_eq!(app.overrides["plugins"], json!(["a", "b"]));
        assert_eq!(app.overrides["target"], json!("web"));
    }

    #[test]
    fn shared_fragment_is_built_once() {
        let config = config(true);
        let run = BuildRun::new(&config);
        let first: *const Fragment = run.shared();
        let second: *const Fragment = run.shared();
        assert_eq!(first, second);
    }

    #[test]
    fn asset_graph_depends_on_bundle_graphs() {
        let config = config(true);
        let graphs = BuildRun::new(&config).compose();
        assert_eq!(graphs.len(), 3);
        assert_eq!(graphs[2]["name"], json!("AssetCopy"));
        assert_eq!(graphs[2]["dependencies"], json!(["admin", "front"]));
    }
}
