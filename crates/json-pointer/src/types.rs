//! Type definitions for JSON Pointer.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::util::{format_json_pointer, parse_json_pointer};
use crate::{get, JsonPointerError};

/// A single unescaped reference token.
pub type PathStep = String;

/// A parsed JSON Pointer path.
pub type Path = Vec<PathStep>;

/// A parsed JSON Pointer.
///
/// Holds the pointer string it was built from together with its unescaped
/// reference tokens, so a pointer parsed once can be evaluated any number of
/// times.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pointer {
    path: String,
    tokens: Path,
}

impl Pointer {
    /// Parse a pointer string.
    ///
    /// # Errors
    ///
    /// Returns [`JsonPointerError::MalformedPointer`] if the string is neither
    /// empty nor starts with `/` (after percent-decoding).
    pub fn parse(path: &str) -> Result<Self, JsonPointerError> {
        let tokens = parse_json_pointer(path)?;
        Ok(Self {
            path: path.to_string(),
            tokens,
        })
    }

    /// The pointer to the whole document.
    pub fn root() -> Self {
        Self {
            path: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Build a pointer from already unescaped tokens.
    pub fn from_tokens(tokens: Path) -> Self {
        Self {
            path: format_json_pointer(&tokens),
            tokens,
        }
    }

    /// The pointer string: the parsed input, or the escaped form of the
    /// tokens for pointers built with [`Pointer::from_tokens`].
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        self.path()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Path {
        self.tokens
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Locate the value this pointer refers to.
    ///
    /// # Errors
    ///
    /// Returns [`JsonPointerError::PointerResolution`] when a token cannot be
    /// resolved; see [`get`](fn@crate::get) for the rules.
    pub fn evaluate<'a>(&self, doc: &'a Value) -> Result<&'a Value, JsonPointerError> {
        get(doc, &self.tokens)
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::root()
    }
}

impl FromStr for Pointer {
    type Err = JsonPointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for Pointer {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
