//! JSON codec for JSON Patch operations.
//!
//! Converts operations to/from `serde_json::Value` in RFC 6902 format.

use serde_json::{json, Map, Value};

use jsondoc_pointer::{format_json_pointer, parse_json_pointer};
use jsondoc_util::has_own_property_map;

use crate::json_patch::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(v: &Value, field: &str) -> Result<Vec<String>, PatchError> {
    let s = v
        .as_str()
        .ok_or_else(|| PatchError::InvalidOp(format!("'{field}' must be a string")))?;
    Ok(parse_json_pointer(s)?)
}

/// Fetch a required member. Presence is decided by key existence, so an
/// explicit `null` counts as present.
fn required<'a>(
    obj: &'a Map<String, Value>,
    op: &str,
    field: &'static str,
) -> Result<&'a Value, PatchError> {
    if has_own_property_map(obj, field) {
        Ok(&obj[field])
    } else {
        Err(PatchError::MissingField {
            op: op.to_string(),
            field,
        })
    }
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to a `serde_json::Value` in the JSON Patch format.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": encode_path(path),
            "value": value
        }),
        Op::Remove { path } => json!({ "op": "remove", "path": encode_path(path) }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": encode_path(path),
            "value": value
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": encode_path(path),
            "value": value
        }),
    }
}

/// Serialize a list of operations to a JSON Patch document.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one RFC 6902 operation object.
///
/// `append` is accepted as a legacy spelling of `add`.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let obj = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_str = match obj.get("op") {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(PatchError::UnknownOperation(other.to_string())),
        None => return Err(PatchError::UnknownOperation(String::new())),
    };

    let op = match op_str {
        "add" | "append" => "add",
        "remove" | "replace" | "copy" | "move" | "test" => op_str,
        other => return Err(PatchError::UnknownOperation(other.to_string())),
    };
    let path = decode_path(required(obj, op, "path")?, "path")?;

    match op {
        "add" => {
            let value = required(obj, op, "value")?.clone();
            Ok(Op::Add { path, value })
        }
        "remove" => Ok(Op::Remove { path }),
        "replace" => {
            let value = required(obj, op, "value")?.clone();
            Ok(Op::Replace { path, value })
        }
        "copy" => {
            let from = decode_path(required(obj, op, "from")?, "from")?;
            Ok(Op::Copy { path, from })
        }
        "move" => {
            let from = decode_path(required(obj, op, "from")?, "from")?;
            Ok(Op::Move { path, from })
        }
        _ => {
            let value = required(obj, op, "value")?.clone();
            Ok(Op::Test { path, value })
        }
    }
}

/// Deserialize a JSON Patch document (an array of operation objects).
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    let arr = v
        .as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?;
    arr.iter().map(from_json).collect()
}
