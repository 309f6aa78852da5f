//! Error types for target-select
//!
//! Uses `thiserror` for library errors. Resolution itself never fails; every
//! variant here is a catalog or configuration problem detected up front.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::Axis;

/// Result type alias for target-select operations
pub type SelectResult<T> = Result<T, SelectError>;

/// Main error type for target-select operations
#[derive(Error, Debug)]
pub enum SelectError {
    /// Default index does not address an entry of its axis
    #[error("default {axis} index {index} is out of range ({count} entries)")]
    DefaultOutOfRange {
        axis: Axis,
        index: usize,
        count: usize,
    },

    /// Two names of one axis share a digest
    #[error("{axis} name '{name}' collides with existing entry '{existing}'")]
    DuplicateName {
        axis: Axis,
        name: String,
        existing: String,
    },

    /// Configured default names no entry of its axis
    #[error("default {axis} '{name}' is not a known {axis} name")]
    UnknownDefault { axis: Axis, name: String },

    /// Separator must be exactly one character
    #[error("invalid separator '{value}' - expected exactly one character")]
    InvalidSeparator { value: String },

    /// Catalog file could not be parsed
    #[error("invalid catalog file {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
