use std::fs;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct PatchCase {
    pub comment: String,
    pub doc: Value,
    pub patch: Vec<Value>,
    #[serde(default)]
    pub expected: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn load_patch_cases() -> Vec<PatchCase> {
    let path = fixtures_dir().join("patch_cases.json");
    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&data)
        .unwrap_or_else(|e| panic!("failed to parse {}: {e}", path.display()))
}
