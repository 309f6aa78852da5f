//! Domain Layer
//!
//! The core of target-select - pure selection logic without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Axis, NameHash, TargetSpec)
//! - `entities/` - The validated axis catalog
//! - `services/` - Segmenter, Resolver, Emitter
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or environment
//! 2. **Pure Functions** - Every resolution builds its own state and discards it
//! 3. **Validate Early** - Catalogs are checked once at construction

pub mod entities;
pub mod services;
pub mod value_objects;
