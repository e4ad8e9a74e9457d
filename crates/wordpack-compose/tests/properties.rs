//! Property-based tests for colors, re-keying and composition.

use proptest::prelude::*;
use serde_json::json;
use wordpack_compose::color::{CONTRAST_THRESHOLD, Colorizer, Rgb};
use wordpack_compose::manifest::{normalize, rekey};
use wordpack_compose::{BuildRun, collapse, compose};
use wordpack_config::{Bundle, UserConfig};

/// Slash-separated relative paths such as `styles/admin/admin.css`.
fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9][a-z0-9.-]{0,7}", 1..=4).prop_map(|parts| parts.join("/"))
}

fn bundles_strategy() -> impl Strategy<Value = Vec<Bundle>> {
    prop::collection::vec(prop::collection::vec(path_strategy(), 0..4), 1..6).prop_map(|groups| {
        groups
            .into_iter()
            .enumerate()
            .map(|(i, files)| Bundle::new(format!("bundle-{i}"), files))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: same name, same color, always legible on black.
    #[test]
    fn colors_are_stable_and_legible(name in "\\PC{0,24}") {
        let colors = Colorizer::default();
        let color = colors.assign(&name);

        prop_assert_eq!(&color, &colors.assign(&name));
        let rgb = Rgb::parse(&color).unwrap();
        prop_assert!(colors.contrast(rgb) >= CONTRAST_THRESHOLD);
    }

    /// Property: re-keying an already re-keyed entry changes nothing.
    #[test]
    fn rekey_is_idempotent(key in path_strategy(), value in path_strategy()) {
        let once = rekey(&key, &value);
        prop_assert_eq!(rekey(&once, &value), once);
    }

    /// Property: normalizing a normalized manifest is a no-op.
    #[test]
    fn normalize_is_idempotent(entries in prop::collection::vec((path_strategy(), path_strategy()), 0..8)) {
        if let Ok(once) = normalize(entries) {
            let twice = normalize(once.clone()).unwrap();
            prop_assert_eq!(twice, once);
        }
    }

    /// Property: distinct keys under one emitted directory never collapse.
    #[test]
    fn normalize_keeps_every_distinct_key(
        keys in prop::collection::btree_set(path_strategy(), 1..8),
        dir in "[a-z]{1,8}",
    ) {
        let entries: Vec<(String, String)> = keys
            .iter()
            .enumerate()
            .map(|(i, key)| (format!("{dir}/{key}"), format!("{dir}/asset.{i}.js")))
            .collect();

        let normalized = normalize(entries).unwrap();
        prop_assert_eq!(normalized.len(), keys.len());
    }

    /// Property: the single-mode bundle concatenates files in bundle order.
    #[test]
    fn collapse_concatenates_files(bundles in bundles_strategy()) {
        let expected: Vec<String> = bundles.iter().flat_map(|b| b.files.clone()).collect();
        let app = collapse(&bundles, 20_000);

        prop_assert_eq!(&app.files, &expected);
        prop_assert_eq!(app.entry().len(), bundles.len());
    }

    /// Property: composition is deterministic.
    #[test]
    fn compose_is_deterministic(bundles in bundles_strategy(), production in any::<bool>(), multimode in any::<bool>()) {
        let config = UserConfig::from_value(json!({
            "basePath": "/srv/theme",
            "production": production,
            "multimode": multimode,
            "bundles": bundles,
        }))
        .unwrap();

        let first = serde_json::to_string(&compose(&config)).unwrap();
        let second = serde_json::to_string(&BuildRun::new(&config).compose()).unwrap();
        prop_assert_eq!(first, second);
    }
}
