use serde_json::Value;

use crate::util::{format_json_pointer, parse_index};
use crate::JsonPointerError;

/// Resolve reference tokens against a document.
///
/// Arrays accept only canonical in-range indices (the `-` token never
/// resolves when reading), objects require the key to exist, and any leaf,
/// `null` included, ends resolution while tokens remain.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Result<&'a Value, JsonPointerError> {
    let mut current = val;
    for (depth, path_step) in path.iter().enumerate() {
        let next = match current {
            Value::Array(arr) => parse_index(path_step).and_then(|idx| arr.get(idx)),
            Value::Object(map) => map.get(path_step),
            _ => None,
        };
        current = next.ok_or_else(|| JsonPointerError::PointerResolution {
            path: format_json_pointer(&path[..depth]),
            token: path_step.clone(),
        })?;
    }
    Ok(current)
}
