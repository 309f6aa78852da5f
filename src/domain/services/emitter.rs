//! Emitter
//!
//! Turns the resolver's unordered result sets into sorted vectors so output is
//! reproducible regardless of input order or hash-set iteration order.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::value_objects::TargetSpec;

/// Final outcome of one resolution call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Build configurations to build, ascending
    pub specs: Vec<TargetSpec>,
    /// Literal build-graph node names, ascending by byte order
    pub names: Vec<String>,
}

pub struct Emitter;

impl Emitter {
    pub fn emit(specs: HashSet<TargetSpec>, names: HashSet<String>) -> Selection {
        let mut specs: Vec<TargetSpec> = specs.into_iter().collect();
        specs.sort_unstable();

        let mut names: Vec<String> = names.into_iter().collect();
        names.sort_unstable();

        Selection { specs, names }
    }
}
