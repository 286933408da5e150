//! A JSON document that can be queried with pointers, compared, and patched.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use jsondoc_pointer::{JsonPointerError, Pointer};
use jsondoc_util::compare;

use crate::json_patch::{apply_json_patch, ApplyPatchOptions, PatchError, PatchFailure};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("provided JSON string must not be empty")]
    Empty,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Pointer(#[from] JsonPointerError),
    #[error("patch operation {index} failed: {source}")]
    Patch {
        index: usize,
        #[source]
        source: PatchError,
    },
}

/// Owns a decoded JSON value.
#[derive(Debug, Clone, Default)]
pub struct Document {
    value: Value,
}

impl Document {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Decode a document from JSON text.
    ///
    /// # Errors
    ///
    /// Blank input is rejected with [`DocumentError::Empty`] before it reaches
    /// the decoder.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        if json.trim().is_empty() {
            return Err(DocumentError::Empty);
        }
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Resolve a JSON Pointer against the document.
    pub fn get(&self, pointer: &str) -> Result<&Value, DocumentError> {
        Ok(Pointer::parse(pointer)?.evaluate(&self.value)?)
    }

    /// Structural equality with JSON Patch `test` semantics.
    pub fn equals(&self, other: &Value) -> bool {
        compare(&self.value, other)
    }

    /// Apply raw JSON Patch operations.
    ///
    /// On failure the document keeps the effects of the operations that ran
    /// before the failing one.
    pub fn patch(&mut self, ops: &[Value]) -> Result<(), DocumentError> {
        self.patch_with(ops, &ApplyPatchOptions::default())
    }

    pub fn patch_with(
        &mut self,
        ops: &[Value],
        options: &ApplyPatchOptions,
    ) -> Result<(), DocumentError> {
        let doc = std::mem::take(&mut self.value);
        match apply_json_patch(doc, ops, options) {
            Ok(doc) => {
                self.value = doc;
                Ok(())
            }
            Err(PatchFailure { index, error, doc }) => {
                self.value = doc;
                Err(DocumentError::Patch {
                    index,
                    source: error,
                })
            }
        }
    }

    /// Pretty-printed JSON text.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.value)?)
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string_pretty(&self.value).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_A: &str = r#"{
        "string": "bar",
        "number": 12,
        "boolean": false,
        "null": null,
        "array": ["foo"],
        "arrayObject": [{"foo": "bar"}],
        "object": {"foo": "bar"}
    }"#;

    #[test]
    fn get_values() {
        let doc = Document::from_json(TEST_A).unwrap();
        assert_eq!(doc.get("/string").unwrap(), &json!("bar"));
        assert_eq!(doc.get("/number").unwrap(), &json!(12));
        assert_eq!(doc.get("/boolean").unwrap(), &json!(false));
        assert_eq!(doc.get("/null").unwrap(), &Value::Null);
        assert_eq!(doc.get("/array/0").unwrap(), &json!("foo"));
        assert_eq!(doc.get("/arrayObject/0/foo").unwrap(), &json!("bar"));
        assert!(matches!(doc.get("/array/1"), Err(DocumentError::Pointer(_))));
        assert!(matches!(doc.get("/object/bar"), Err(DocumentError::Pointer(_))));
        assert!(matches!(doc.get("object"), Err(DocumentError::Pointer(_))));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(Document::from_json(""), Err(DocumentError::Empty)));
        assert!(matches!(Document::from_json("  \n"), Err(DocumentError::Empty)));
        assert!(matches!(Document::from_json("{"), Err(DocumentError::Json(_))));
    }

    #[test]
    fn patch_appends_and_adds() {
        let mut doc = Document::from_json(TEST_A).unwrap();
        doc.patch(&[
            json!({"op": "add", "path": "/array/-", "value": "bar"}),
            json!({"op": "add", "path": "/object/bar", "value": "bar"}),
        ])
        .unwrap();
        assert_eq!(doc.get("/array").unwrap(), &json!(["foo", "bar"]));
        assert_eq!(doc.get("/object").unwrap(), &json!({"foo": "bar", "bar": "bar"}));
    }

    #[test]
    fn failed_patch_keeps_earlier_operations() {
        let mut doc = Document::new(json!({"a": 1}));
        let err = doc
            .patch(&[
                json!({"op": "add", "path": "/b", "value": 2}),
                json!({"op": "test", "path": "/a", "value": 5}),
            ])
            .unwrap_err();
        assert!(matches!(
            err,
            DocumentError::Patch { index: 1, source: PatchError::TestFailed { .. } }
        ));
        assert!(doc.equals(&json!({"a": 1, "b": 2})));
    }

    #[test]
    fn atomic_patch_restores_document() {
        let mut doc = Document::new(json!({"a": 1}));
        let result = doc.patch_with(
            &[
                json!({"op": "add", "path": "/b", "value": 2}),
                json!({"op": "remove", "path": "/c"}),
            ],
            &ApplyPatchOptions::atomic(),
        );
        assert!(result.is_err());
        assert!(doc.equals(&json!({"a": 1})));
    }

    #[test]
    fn equals_ignores_key_order() {
        let doc = Document::from_json(TEST_A).unwrap();
        let reordered: Value = serde_json::from_str(
            r#"{"object": {"foo": "bar"}, "arrayObject": [{"foo": "bar"}], "array": ["foo"],
                "null": null, "boolean": false, "number": 12, "string": "bar"}"#,
        )
        .unwrap();
        assert!(doc.equals(&reordered));
        assert!(!doc.equals(&json!({"string": "bar"})));
    }

    #[test]
    fn to_json_string_roundtrips() {
        let doc = Document::from_json(TEST_A).unwrap();
        let text = doc.to_json_string().unwrap();
        let back = Document::from_json(&text).unwrap();
        assert!(doc.equals(back.as_value()));
        assert_eq!(doc.to_string(), text);
    }
}
