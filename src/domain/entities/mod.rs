//! Domain Entities
//!
//! - `AxisCatalog` - Names, digests and defaults for the three selection axes

mod catalog;

pub use catalog::{AxisCatalog, AxisDefinition};
