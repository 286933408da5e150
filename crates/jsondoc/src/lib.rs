//! jsondoc — JSON Patch (RFC 6902) on top of JSON Pointer (RFC 6901).
//!
//! - [`json_patch`]: operation model, JSON codec and apply engine
//! - [`document`]: a document wrapper with pointer lookup, comparison and
//!   patching
//! - [`json_cli`]: logic behind the `json-patch` and `json-pointer` binaries
//!
//! # Example
//!
//! ```
//! use jsondoc::json_patch::{apply_json_patch, ApplyPatchOptions};
//! use serde_json::json;
//!
//! let doc = json!({"array": ["foo"], "object": {"foo": "bar"}});
//! let ops = [
//!     json!({"op": "add", "path": "/array/-", "value": "bar"}),
//!     json!({"op": "add", "path": "/object/bar", "value": "bar"}),
//! ];
//! let doc = apply_json_patch(doc, &ops, &ApplyPatchOptions::default()).unwrap();
//! assert_eq!(doc, json!({"array": ["foo", "bar"], "object": {"foo": "bar", "bar": "bar"}}));
//! ```

pub mod document;
pub mod json_cli;
pub mod json_patch;

pub use document::{Document, DocumentError};
pub use jsondoc_pointer::{JsonPointerError, Pointer};
pub use jsondoc_util::compare;
