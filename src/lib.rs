//! target-select - build configuration selection for a build tool front end
//!
//! Turns the residual command-line arguments of a build invocation into the
//! set of (config, variant, subvariant) build configurations to build, plus
//! the literal build-graph node names to forward to the executor.
//!
//! ```
//! use target_select::{select_targets, AxisCatalog, AxisDefinition, TargetSpec};
//!
//! let catalog = AxisCatalog::new(
//!     AxisDefinition::new(["win32-msvc", "linux-gcc"], 0),
//!     AxisDefinition::new(["debug", "release"], 0),
//!     AxisDefinition::new(["default"], 0),
//! )?;
//!
//! let selection = select_targets(&catalog, ["linux-gcc-release", "my-tool"]);
//! assert_eq!(selection.specs, vec![TargetSpec::new(1, 1, 0)]);
//! assert_eq!(selection.names, vec!["my-tool"]);
//! # Ok::<(), target_select::SelectError>(())
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use domain::entities::{AxisCatalog, AxisDefinition};
pub use domain::services::{
    select_targets, Classification, Emitter, PartialSpec, Resolver, Segmenter, Selection,
};
pub use domain::value_objects::{Axis, NameHash, TargetSpec};
pub use error::{SelectError, SelectResult};
