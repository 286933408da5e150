//! jsondoc-util - helpers shared by the pointer and patch crates.
//!
//! - [`json_equal::compare`]: structural equality with JSON Patch `test`
//!   semantics.
//! - [`has_own_property`]: key-existence checks that tell an explicit `null`
//!   apart from an absent member.

pub mod has_own_property;
pub mod json_equal;

pub use has_own_property::has_own_property_map;
pub use json_equal::compare;
