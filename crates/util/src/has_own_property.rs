use serde_json::{Map, Value};

/// Check if a `serde_json::Map` has a member with the given key.
///
/// Presence is what counts: a member holding `null` is still present.
pub fn has_own_property_map(obj: &Map<String, Value>, key: &str) -> bool {
    obj.contains_key(key)
}
