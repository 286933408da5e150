//! JSON Patch implementation (RFC 6902).
//!
//! # Operations
//!
//! All RFC 6902 operations are supported:
//! `add`, `remove`, `replace`, `copy`, `move`, `test`.
//!
//! Operations run in order against the document left by the ones before
//! them. Application stops at the first failing operation; by default the
//! effects of earlier operations are kept, see [`ApplyPatchOptions`] for the
//! all-or-nothing mode.

pub mod apply;
pub mod codec;
pub mod types;

pub use apply::{apply_json_patch, apply_op, apply_ops, apply_patch};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyPatchOptions, Op, PatchError, PatchFailure, Path};
