//! Layer merge policy
//!
//! Mappings merge key by key, recursively. Sequences and scalars are atomic:
//! an overlay of either shape replaces the base wholesale, so a stage can
//! restate a list without it being interleaved with the base list.

use serde_json::Value;

/// Merge `overlay` onto `base`, producing a new value.
///
/// - `base` absent: the result is `overlay`
/// - both mappings: every base key is kept; each overlay key recurses when
///   both sides hold a mapping, otherwise the overlay value wins
/// - anything else: the result is `overlay`
pub fn merge(base: Option<&Value>, overlay: &Value) -> Value {
    match base {
        Some(base @ Value::Object(_)) if overlay.is_object() => {
            let mut merged = base.clone();
            merge_in_place(&mut merged, overlay);
            merged
        }
        _ => overlay.clone(),
    }
}

/// Merge `overlay` into `base` in place, following the same policy as [`merge`].
pub fn merge_in_place(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                if let Some(base_val) = base_map.get_mut(key) {
                    merge_in_place(base_val, overlay_val);
                } else {
                    base_map.insert(key.clone(), overlay_val.clone());
                }
            }
        }
        (base, overlay) => {
            *base = overlay.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn merge_against_absent_base_is_overlay() {
        let overlay = json!({"timeout": 60});
        assert_eq!(merge(None, &overlay), overlay);
    }

    #[test]
    fn merge_nested_objects() {
        let base = json!({
            "a": 1,
            "b": { "x": 10, "y": 20 }
        });
        let overlay = json!({
            "b": { "y": 25, "z": 30 },
            "c": 3
        });

        let merged = merge(Some(&base), &overlay);

        assert_eq!(merged, json!({"a": 1, "b": {"x": 10, "y": 25, "z": 30}, "c": 3}));
    }

    #[test]
    fn arrays_are_replaced_not_concatenated() {
        let base = json!({"origins": ["a", "b"], "nested": {"ids": [1, 2, 3]}});
        let overlay = json!({"origins": ["c"], "nested": {"ids": [9]}});

        let merged = merge(Some(&base), &overlay);

        assert_eq!(merged, json!({"origins": ["c"], "nested": {"ids": [9]}}));
    }

    #[test]
    fn mapping_overlay_replaces_scalar_base() {
        let base = json!({"api": "disabled"});
        let overlay = json!({"api": {"timeout": 60}});

        let merged = merge(Some(&base), &overlay);

        assert_eq!(merged, json!({"api": {"timeout": 60}}));
    }

    #[test]
    fn null_overlay_replaces_mapping() {
        let base = json!({"api": {"timeout": 30}});
        assert_eq!(merge(Some(&base), &Value::Null), Value::Null);
    }
}
