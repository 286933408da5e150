#![allow(dead_code)]

pub mod fixtures;

use jsondoc::json_patch::PatchError;
use tracing_subscriber::EnvFilter;

pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The fixture name of an error variant.
pub fn error_kind(err: &PatchError) -> &'static str {
    match err {
        PatchError::MalformedPointer { .. } => "MalformedPointer",
        PatchError::PointerResolution { .. } => "PointerResolution",
        PatchError::MissingProperty { .. } => "MissingProperty",
        PatchError::InvalidPath { .. } => "InvalidPath",
        PatchError::TestFailed { .. } => "TestFailed",
        PatchError::UnknownOperation(_) => "UnknownOperation",
        PatchError::MissingField { .. } => "MissingField",
        PatchError::InvalidOp(_) => "InvalidOp",
    }
}
