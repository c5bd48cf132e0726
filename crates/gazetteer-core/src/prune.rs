// crates/gazetteer-core/src/prune.rs

//! # Sparse Pruner
//!
//! Removes `null` leaves and the containers they leave empty, so a record
//! serializes without `null`, `{}` or `[]` anywhere in its tree.

use serde_json::{Map, Value};

/// Recursively prunes `value`. Returns `None` when nothing is left.
///
/// - objects drop keys whose pruned value is absent, and vanish when empty
/// - arrays drop absent elements, and vanish when empty
/// - `null` is absent, every other scalar passes through unchanged
///
/// ```rust
/// use gazetteer_core::prune::prune;
/// use serde_json::json;
///
/// let v = json!({ "a": null, "b": { "c": [] }, "d": [1, null] });
/// assert_eq!(prune(v), Some(json!({ "d": [1] })));
/// ```
pub fn prune(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let kept: Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, value)| prune(value).map(|v| (key, v)))
                .collect();
            (!kept.is_empty()).then_some(Value::Object(kept))
        }
        Value::Array(items) => {
            let kept: Vec<Value> = items.into_iter().filter_map(prune).collect();
            (!kept.is_empty()).then_some(Value::Array(kept))
        }
        scalar => Some(scalar),
    }
}

/// `true` if no object or array inside `value` is empty or holds a `null`.
pub fn is_sparse(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Object(map) => !map.is_empty() && map.values().all(is_sparse),
        Value::Array(items) => !items.is_empty() && items.iter().all(is_sparse),
        _ => true,
    }
}
