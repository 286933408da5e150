//! `json-cli` — logic behind the command-line tools.
//!
//! Provides the core logic used by the binary entry points:
//! - `json-patch`   — apply a JSON Patch to a document
//! - `json-pointer` — look up a JSON Pointer in a document

use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use jsondoc_pointer::{JsonPointerError, Pointer};

use crate::json_patch::{apply_json_patch, ApplyPatchOptions, PatchFailure};

// ── Errors ────────────────────────────────────────────────────────────────

/// Errors surfaced by the command-line tools.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Patch(#[from] PatchFailure),
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    #[error("{0}")]
    Usage(String),
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Install the stderr log subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default `jsondoc=warn` directive.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jsondoc=warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ── json-patch ────────────────────────────────────────────────────────────

/// Apply a JSON Patch (RFC 6902) to a document.
///
/// `doc_json`: the document as a JSON string.
/// `patch_json`: the patch operations as a JSON array string.
///
/// Returns the patched document as a pretty-printed JSON string.
pub fn apply_json_patch_str(
    doc_json: &str,
    patch_json: &str,
    options: &ApplyPatchOptions,
) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let ops_raw: Value = serde_json::from_str(patch_json)?;
    let ops = ops_raw
        .as_array()
        .ok_or_else(|| CliError::Usage("JSON patch must be an array.".to_string()))?;
    let result = apply_json_patch(doc, ops, options)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

// ── json-pointer ──────────────────────────────────────────────────────────

/// Look up a JSON Pointer (RFC 6901) in a document.
///
/// Returns the found value as a pretty-printed JSON string.
pub fn lookup_pointer(doc_json: &str, pointer: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(doc_json)?;
    let pointer = Pointer::parse(pointer)?;
    let found = pointer.evaluate(&doc)?;
    Ok(serde_json::to_string_pretty(found)?)
}

// ── Tests ─────────────────────────────────────────────────────────────────
