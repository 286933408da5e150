use crate::JsonPointerError;
use crate::types::Path;

/// Unescapes a JSON Pointer reference token.
///
/// `~1` is decoded before `~0`, so `~01` yields `~1` and never `/`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a reference token so it can be embedded in a pointer string.
///
/// `%` is written as `%25` because [`parse_json_pointer`] percent-decodes
/// its input.
pub fn escape_component(component: &str) -> String {
    if !component.contains(['/', '~', '%']) {
        return component.to_string();
    }
    component
        .replace('%', "%25")
        .replace('~', "~0")
        .replace('/', "~1")
}

/// Parse a JSON Pointer string into its reference tokens.
///
/// The whole string is percent-decoded once before it is split, so pointers
/// taken from URI fragments (`/caf%C3%A9`) resolve the same way as their
/// plain form.
pub fn parse_json_pointer(pointer: &str) -> Result<Path, JsonPointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let malformed = || JsonPointerError::MalformedPointer {
        pointer: pointer.to_string(),
    };
    let decoded = urlencoding::decode(pointer).map_err(|_| malformed())?;
    let rest = decoded.strip_prefix('/').ok_or_else(malformed)?;
    Ok(rest.split('/').map(unescape_component).collect())
}

/// Format reference tokens back into a pointer string.
///
/// The root path formats as the empty string.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Check if a token is a canonical array index: base-10 digits without a
/// leading zero, except for `0` itself.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Parse a token as an array index, rejecting anything [`is_valid_index`]
/// rejects as well as values that overflow `usize`.
pub fn parse_index(index: &str) -> Option<usize> {
    if !is_valid_index(index) {
        return None;
    }
    index.parse().ok()
}
