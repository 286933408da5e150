//! JSON equality utilities.
//!
//! Provides the structural comparison used by JSON Patch `test`.

mod compare;

pub use compare::compare;
