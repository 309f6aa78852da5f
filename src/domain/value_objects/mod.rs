//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod axis;
mod name_hash;
mod target_spec;

pub use axis::Axis;
pub use name_hash::NameHash;
pub use target_spec::TargetSpec;
