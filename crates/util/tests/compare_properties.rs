use jsondoc_util::compare;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Rebuild every object with its members in reverse insertion order.
fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = Map::new();
            for (k, v) in map.iter().rev() {
                out.insert(k.clone(), reverse_keys(v));
            }
            Value::Object(out)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn compare_is_reflexive(doc in arb_json()) {
        prop_assert!(compare(&doc, &doc));
    }

    #[test]
    fn compare_ignores_object_key_order(doc in arb_json()) {
        let reordered = reverse_keys(&doc);
        prop_assert!(compare(&doc, &reordered));
        prop_assert!(compare(&reordered, &doc));
    }

    #[test]
    fn compare_is_symmetric(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(compare(&a, &b), compare(&b, &a));
    }

    #[test]
    fn compare_sees_array_reordering(items in prop::collection::vec(any::<i32>(), 2..6)) {
        let original = Value::Array(items.iter().copied().map(Value::from).collect());
        let mut reversed_items = items.clone();
        reversed_items.reverse();
        let reversed = Value::Array(reversed_items.iter().copied().map(Value::from).collect());
        prop_assert_eq!(compare(&original, &reversed), items == reversed_items);
    }
}
