//! JSON Patch apply logic.
//!
//! Reads go through [`jsondoc_pointer::get`]; writes use their own traversal
//! that requires every intermediate key or index to exist and only varies the
//! existence rule for the final token.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use jsondoc_pointer::{format_json_pointer, get, is_valid_index, parse_index};
use jsondoc_util::compare;

use super::codec::json::from_json;
use super::types::{ApplyPatchOptions, Op, PatchError, PatchFailure};

/// What to do with the final token of a write path.
enum Write {
    Add(Value),
    Replace(Value),
    Remove,
}

// ── Path navigation ───────────────────────────────────────────────────────

/// Mutable navigation through the parents of a write target.
///
/// Every step must already exist; a leaf on the way is an invalid path.
fn walk_mut<'a>(doc: &'a mut Value, parents: &[String]) -> Result<&'a mut Value, PatchError> {
    let mut current = doc;
    for (depth, path_step) in parents.iter().enumerate() {
        let next = match current {
            Value::Array(arr) => parse_index(path_step).and_then(|idx| arr.get_mut(idx)),
            Value::Object(map) => map.get_mut(path_step),
            _ => {
                return Err(PatchError::InvalidPath {
                    path: format_json_pointer(&parents[..depth]),
                })
            }
        };
        current = next.ok_or_else(|| PatchError::MissingProperty {
            path: format_json_pointer(&parents[..depth]),
            token: path_step.clone(),
        })?;
    }
    Ok(current)
}

fn apply_write(doc: &mut Value, path: &[String], write: Write) -> Result<(), PatchError> {
    let Some((key, parents)) = path.split_last() else {
        return match write {
            Write::Add(value) | Write::Replace(value) => {
                *doc = value;
                Ok(())
            }
            Write::Remove => Err(PatchError::InvalidPath {
                path: String::new(),
            }),
        };
    };
    match walk_mut(doc, parents)? {
        Value::Array(arr) => write_array(arr, parents, key, write),
        Value::Object(map) => write_object(map, parents, key, write),
        _ => Err(PatchError::InvalidPath {
            path: format_json_pointer(parents),
        }),
    }
}

fn write_array(
    arr: &mut Vec<Value>,
    parents: &[String],
    key: &str,
    write: Write,
) -> Result<(), PatchError> {
    if key != "-" && !is_valid_index(key) {
        return Err(PatchError::InvalidPath {
            path: format_json_pointer(parents),
        });
    }
    match write {
        Write::Add(value) => {
            if key == "-" {
                arr.push(value);
                return Ok(());
            }
            match parse_index(key) {
                Some(idx) if idx <= arr.len() => {
                    arr.insert(idx, value);
                    Ok(())
                }
                _ => Err(PatchError::InvalidPath {
                    path: format_json_pointer(parents),
                }),
            }
        }
        Write::Replace(value) => {
            // Replacing a position that does not exist leaves the array as is.
            if let Some(slot) = parse_index(key).and_then(|idx| arr.get_mut(idx)) {
                *slot = value;
            }
            Ok(())
        }
        Write::Remove => match parse_index(key) {
            Some(idx) if idx < arr.len() => {
                arr.remove(idx);
                Ok(())
            }
            _ => Err(PatchError::MissingProperty {
                path: format_json_pointer(parents),
                token: key.to_string(),
            }),
        },
    }
}

fn write_object(
    map: &mut Map<String, Value>,
    parents: &[String],
    key: &str,
    write: Write,
) -> Result<(), PatchError> {
    match write {
        Write::Add(value) => {
            map.insert(key.to_string(), value);
            Ok(())
        }
        Write::Replace(value) => {
            // Replacing a member that does not exist leaves the object as is.
            if let Some(slot) = map.get_mut(key) {
                *slot = value;
            }
            Ok(())
        }
        Write::Remove => match map.shift_remove(key) {
            Some(_) => Ok(()),
            None => Err(PatchError::MissingProperty {
                path: format_json_pointer(parents),
                token: key.to_string(),
            }),
        },
    }
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_copy(doc: &mut Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    let value = get(doc, from)?.clone();
    apply_write(doc, path, Write::Add(value))
}

fn apply_move(doc: &mut Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    let value = get(doc, from)?.clone();
    apply_write(doc, from, Write::Remove)?;
    apply_write(doc, path, Write::Add(value))
}

fn apply_test(doc: &Value, path: &[String], value: &Value) -> Result<(), PatchError> {
    let actual = get(doc, path)?;
    if compare(value, actual) {
        Ok(())
    } else {
        Err(PatchError::TestFailed {
            path: format_json_pointer(path),
        })
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document in place.
///
/// A failing operation may leave the document modified only for `move`, whose
/// removal at `from` has already happened when the `add` at `path` fails.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<(), PatchError> {
    debug!(op = op.op_name(), path = %format_json_pointer(op.path()), "applying patch operation");
    match op {
        Op::Add { path, value } => apply_write(doc, path, Write::Add(value.clone())),
        Op::Remove { path } => apply_write(doc, path, Write::Remove),
        Op::Replace { path, value } => apply_write(doc, path, Write::Replace(value.clone())),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value } => apply_test(doc, path, value),
    }
}

/// Apply a sequence of operations, stopping at the first failure.
///
/// Operations that succeeded before the failure stay applied; the document in
/// that state is handed back inside the [`PatchFailure`].
pub fn apply_ops(mut doc: Value, ops: &[Op]) -> Result<Value, PatchFailure> {
    for (index, op) in ops.iter().enumerate() {
        if let Err(error) = apply_op(&mut doc, op) {
            warn!(index, op = op.op_name(), %error, "patch stopped");
            return Err(PatchFailure { index, error, doc });
        }
    }
    Ok(doc)
}

/// Apply a sequence of operations with options.
///
/// With `atomic: true` the input document is kept aside and returned
/// unchanged inside the [`PatchFailure`] if any operation fails.
pub fn apply_patch(
    doc: Value,
    ops: &[Op],
    options: &ApplyPatchOptions,
) -> Result<Value, PatchFailure> {
    if !options.atomic {
        return apply_ops(doc, ops);
    }
    let original = doc.clone();
    apply_ops(doc, ops).map_err(|failure| rollback(failure, original))
}

/// Apply raw RFC 6902 operation objects.
///
/// Each operation is decoded right before it is applied, so a malformed or
/// unknown operation at position `k` is reported after operations `0..k` have
/// taken effect (unless `atomic` is set).
pub fn apply_json_patch(
    doc: Value,
    ops: &[Value],
    options: &ApplyPatchOptions,
) -> Result<Value, PatchFailure> {
    let original = options.atomic.then(|| doc.clone());
    let mut doc = doc;
    for (index, raw) in ops.iter().enumerate() {
        let result = from_json(raw).and_then(|op| apply_op(&mut doc, &op));
        if let Err(error) = result {
            warn!(index, %error, "patch stopped");
            let failure = PatchFailure { index, error, doc };
            return Err(match original {
                Some(original) => rollback(failure, original),
                None => failure,
            });
        }
    }
    Ok(doc)
}

fn rollback(failure: PatchFailure, original: Value) -> PatchFailure {
    debug!(index = failure.index, "rolling back atomic patch");
    PatchFailure {
        doc: original,
        ..failure
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
