//! JSON Pointer (RFC 6901).
//!
//! Parses [JSON Pointer](https://tools.ietf.org/html/rfc6901) strings into
//! unescaped reference tokens and evaluates them against a
//! [`serde_json::Value`].
//!
//! # Example
//!
//! ```
//! use jsondoc_pointer::{format_json_pointer, parse_json_pointer, Pointer};
//! use serde_json::json;
//!
//! let path = parse_json_pointer("/foo/a~1b").unwrap();
//! assert_eq!(path, vec!["foo".to_string(), "a/b".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/foo/a~1b");
//!
//! let doc = json!({"foo": {"a/b": 42}});
//! let pointer = Pointer::parse("/foo/a~1b").unwrap();
//! assert_eq!(pointer.evaluate(&doc).unwrap(), &json!(42));
//! ```

use thiserror::Error;

mod get;
pub mod types;
pub mod util;

pub use get::get;
pub use types::{Path, PathStep, Pointer};
pub use util::{
    escape_component, format_json_pointer, is_valid_index, parse_index, parse_json_pointer,
    unescape_component,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    /// The pointer is non-empty and does not start with `/`, or its percent
    /// escapes do not decode to UTF-8.
    #[error("malformed pointer {pointer:?}: must be empty or start with '/'")]
    MalformedPointer { pointer: String },
    /// `token` could not be resolved below the already resolved `path`.
    #[error("property {token:?} does not exist at {path:?}")]
    PointerResolution { path: String, token: String },
}
