//! Deep, order-sensitive merging of build-graph fragments.
//!
//! Scalars: the later value wins. Arrays: concatenated in order, duplicates
//! kept. Objects: merged key by key with the same rules. A value of a different
//! kind than the one it meets replaces it.

use serde_json::{Map, Value};

/// A partial build graph. Fragments only exist to be merged.
pub type Fragment = Map<String, Value>;

/// Merge `source` into `target`.
pub fn merge_value(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => merge_into(target, source),
        (Value::Array(target), Value::Array(source)) => target.extend(source),
        (target, source) => *target = source,
    }
}

/// Merge every key of `source` into `target`.
pub fn merge_into(target: &mut Fragment, source: Fragment) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}

/// Fold fragments left to right into one.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wordpack_compose::merge::{merge, Fragment};
///
/// let a: Fragment = serde_json::from_value(json!({ "plugins": ["a"], "mode": "development" })).unwrap();
/// let b: Fragment = serde_json::from_value(json!({ "plugins": ["b"], "mode": "production" })).unwrap();
///
/// let merged = merge([a, b]);
/// assert_eq!(merged["plugins"], json!(["a", "b"]));
/// assert_eq!(merged["mode"], json!("production"));
/// ```
pub fn merge<I>(fragments: I) -> Fragment
where
    I: IntoIterator<Item = Fragment>,
{
    fragments.into_iter().fold(Fragment::new(), |mut acc, next| {
        merge_into(&mut acc, next);
        acc
    })
}

/// Turn a `json!` object literal into a fragment. Non-objects yield an empty one.
pub fn fragment(value: Value) -> Fragment {
    match value {
        Value::Object(map) => map,
        _ => Fragment::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_last_wins() {
        let merged = merge([
            fragment(json!({ "devtool": "eval", "mode": "development" })),
            fragment(json!({ "devtool": false })),
        ]);
        assert_eq!(merged["devtool"], json!(false));
        assert_eq!(merged["mode"], json!("development"));
    }

    #[test]
    fn arrays_concatenate_with_duplicates() {
        let merged = merge([
            fragment(json!({ "plugins": [{ "plugin": "A" }] })),
            fragment(json!({ "plugins": [{ "plugin": "A" }, { "plugin": "B" }] })),
        ]);
        assert_eq!(
            merged["plugins"],
            json!([{ "plugin": "A" }, { "plugin": "A" }, { "plugin": "B" }])
        );
    }

    #[test]
    fn objects_merge_recursively() {
        let merged = merge([
            fragment(json!({ "optimization": { "removeEmptyChunks": true, "minimizer": ["css"] } })),
            fragment(json!({ "optimization": { "minimize": true, "minimizer": ["js"] } })),
        ]);
        assert_eq!(
            merged["optimization"],
            json!({
                "removeEmptyChunks": true,
                "minimize": true,
                "minimizer": ["css", "js"]
            })
        );
    }

    #[test]
    fn mismatched_kinds_are_replaced() {
        let merged = merge([
            fragment(json!({ "externals": { "jquery": "jQuery" } })),
            fragment(json!({ "externals": ["react"] })),
        ]);
        assert_eq!(merged["externals"], json!(["react"]));
    }

    #[test]
    fn empty_fragments_are_neutral() {
        let base = fragment(json!({ "name": "admin", "entry": { "admin": ["a.ts"] } }));
        assert_eq!(merge([Fragment::new(), base.clone(), Fragment::new()]), base);
    }
}
