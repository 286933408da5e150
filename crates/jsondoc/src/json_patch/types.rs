//! Core types for the JSON Patch module: the operation model, errors, and
//! apply options.

use serde_json::Value;
use thiserror::Error;

use jsondoc_pointer::JsonPointerError;
pub use jsondoc_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("malformed pointer {pointer:?}")]
    MalformedPointer { pointer: String },
    #[error("property {token:?} does not exist at {path:?}")]
    PointerResolution { path: String, token: String },
    /// A write needed an existing key or index that is not there.
    #[error("property {token:?} does not exist at {path:?}")]
    MissingProperty { path: String, token: String },
    /// The path runs through a value that is not a container, or names an
    /// array position that cannot be written.
    #[error("invalid path {path:?}")]
    InvalidPath { path: String },
    #[error("test failed: value at {path:?} is different")]
    TestFailed { path: String },
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),
    #[error("operation {op:?} requires field {field:?}")]
    MissingField { op: String, field: &'static str },
    /// The operation object itself has the wrong shape.
    #[error("invalid operation: {0}")]
    InvalidOp(String),
}

impl From<JsonPointerError> for PatchError {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::MalformedPointer { pointer } => PatchError::MalformedPointer { pointer },
            JsonPointerError::PointerResolution { path, token } => {
                PatchError::PointerResolution { path, token }
            }
        }
    }
}

/// A patch that stopped before its last operation.
///
/// `doc` is the document as it stood when the patch stopped: the result of
/// operations `0..index` by default, or the untouched input when the patch was
/// applied with [`ApplyPatchOptions::atomic`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("operation {index} failed: {error}")]
pub struct PatchFailure {
    pub index: usize,
    #[source]
    pub error: PatchError,
    pub doc: Value,
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value },
}

impl Op {
    /// Returns the operation name as it appears in the `op` member.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source path of `copy` and `move`.
    pub fn from_path(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for [`apply_patch`](super::apply_patch).
#[derive(Debug, Clone, Default)]
pub struct ApplyPatchOptions {
    /// If true, a failing patch hands back the input document untouched.
    /// If false, operations that succeeded before the failure stay applied.
    pub atomic: bool,
}

impl ApplyPatchOptions {
    pub fn atomic() -> Self {
        Self { atomic: true }
    }
}
