use serde_json::{Map, Value};

/// Compares two JSON values using the equality rules of JSON Patch `test`
/// ([RFC 6902 §4.6](https://tools.ietf.org/html/rfc6902#section-4.6)).
///
/// Containers are flattened to key/value views: object members by key, array
/// elements by their decimal index. Two containers are equal when their views
/// have the same size and every key of `left` is present in `right` with a
/// recursively equal value. Object member order is therefore irrelevant while
/// array order is significant. Because arrays and objects share the same view,
/// `["a"]` and `{"0": "a"}` compare equal, as do `[]` and `{}`.
///
/// Scalars must have the same type and content: `1` never equals `"1"` and
/// `0` never equals `false`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use jsondoc_util::json_equal::compare;
///
/// assert!(compare(&json!({"a": 1, "b": [1, 2]}), &json!({"b": [1, 2], "a": 1})));
/// assert!(!compare(&json!([1, 2]), &json!([2, 1])));
/// ```
pub fn compare(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len() && arr_a.iter().zip(arr_b).all(|(a, b)| compare(a, b))
        }
        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => compare(val_a, val_b),
                None => false,
            })
        }
        (Value::Array(arr), Value::Object(obj)) => array_matches_object(arr, obj, false),
        (Value::Object(obj), Value::Array(arr)) => array_matches_object(arr, obj, true),

        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,

        // Different types are never equal
        _ => false,
    }
}

/// Compare an array against an object whose keys are decimal indices.
///
/// `object_first` keeps argument order for the recursive calls.
fn array_matches_object(arr: &[Value], obj: &Map<String, Value>, object_first: bool) -> bool {
    if arr.len() != obj.len() {
        return false;
    }
    obj.iter().all(|(key, obj_val)| {
        match canonical_index(key).and_then(|idx| arr.get(idx)) {
            Some(arr_val) if object_first => compare(obj_val, arr_val),
            Some(arr_val) => compare(arr_val, obj_val),
            None => false,
        }
    })
}

/// The index an array element would be keyed by, if `key` is one.
fn canonical_index(key: &str) -> Option<usize> {
    let idx: usize = key.parse().ok()?;
    (idx.to_string() == key).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_equal_numbers() {
        assert!(compare(&json!(1), &json!(1)));
        assert!(!compare(&json!(1), &json!(2)));
    }

    #[test]
    fn test_number_and_string_not_equal() {
        assert!(!compare(&json!(1), &json!("1")));
    }

    #[test]
    fn test_zero_and_null_not_equal() {
        assert!(!compare(&json!(0), &json!(null)));
        assert!(!compare(&json!(""), &json!(null)));
        assert!(!compare(&json!(0), &json!(false)));
    }

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert!(!compare(&json!(1), &json!(1.0)));
        assert!(compare(&json!(1.5), &json!(1.5)));
    }

    #[test]
    fn test_null_equal_null() {
        assert!(compare(&json!(null), &json!(null)));
    }

    #[test]
    fn test_scalar_and_container_not_equal() {
        assert!(!compare(&json!(1), &json!([])));
        assert!(!compare(&json!({}), &json!(null)));
    }

    #[test]
    fn test_object_key_order_ignored() {
        let a = json!({"foo": 1, "bar": {"x": [1, 2], "y": null}});
        let b = json!({"bar": {"y": null, "x": [1, 2]}, "foo": 1});
        assert!(compare(&a, &b));
        assert!(compare(&b, &a));
    }

    #[test]
    fn test_array_order_matters() {
        assert!(!compare(&json!(["a", "b"]), &json!(["b", "a"])));
    }

    #[test]
    fn test_cardinality_mismatch() {
        assert!(!compare(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!compare(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
        assert!(!compare(&json!([1]), &json!([1, 1])));
    }

    #[test]
    fn test_null_members_count_as_present() {
        assert!(compare(&json!({"a": null}), &json!({"a": null})));
        assert!(!compare(&json!({"a": null}), &json!({"b": null})));
    }

    #[test]
    fn test_array_and_object_share_key_view() {
        assert!(compare(&json!([]), &json!({})));
        assert!(compare(&json!(["a", "b"]), &json!({"1": "b", "0": "a"})));
        assert!(compare(&json!({"0": "a"}), &json!(["a"])));
        assert!(!compare(&json!(["a"]), &json!({"00": "a"})));
        assert!(!compare(&json!(["a"]), &json!({"+0": "a"})));
    }
}
