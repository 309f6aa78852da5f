//! Resolver
//!
//! Folds the classification of every argument into the final selection.
//!
//! - An unmatched argument becomes a literal target name.
//! - A single-axis argument adds a candidate on that axis. Once an axis has a
//!   candidate it no longer contributes its default, even if the candidate is
//!   the default itself.
//! - A compound argument pins one explicit spec; open axes take their default.
//!
//! The final specs are the explicit specs plus the cross product of the
//! per-axis candidates. When nothing single-axis was given, that cross product
//! is just the all-defaults spec and is dropped if an explicit spec exists.

use std::collections::{BTreeSet, HashSet};

use tracing::{debug, trace};

use crate::domain::entities::AxisCatalog;
use crate::domain::value_objects::{Axis, TargetSpec};

use super::emitter::{Emitter, Selection};
use super::segmenter::{Classification, Segmenter};

/// Candidates collected for one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum AxisSelection {
    #[default]
    Untouched,
    Touched(BTreeSet<usize>),
}

impl AxisSelection {
    fn touch(&mut self, index: usize) {
        match self {
            AxisSelection::Untouched => *self = AxisSelection::Touched(BTreeSet::from([index])),
            AxisSelection::Touched(set) => {
                set.insert(index);
            }
        }
    }

    fn is_touched(&self) -> bool {
        matches!(self, AxisSelection::Touched(_))
    }

    fn candidates(&self, default_index: usize) -> Vec<usize> {
        match self {
            AxisSelection::Untouched => vec![default_index],
            AxisSelection::Touched(set) => set.iter().copied().collect(),
        }
    }
}

/// Per-call accumulator.
#[derive(Debug, Default)]
struct ResolutionState {
    axes: [AxisSelection; 3],
    explicit: HashSet<TargetSpec>,
    passthrough: HashSet<String>,
}

impl ResolutionState {
    fn touched_any(&self) -> bool {
        self.axes.iter().any(AxisSelection::is_touched)
    }

    fn cross_product(&self, catalog: &AxisCatalog) -> Vec<TargetSpec> {
        let [configs, variants, subvariants] =
            Axis::ALL.map(|axis| self.axes[axis.position()].candidates(catalog.default_index(axis)));

        let mut specs = Vec::with_capacity(configs.len() * variants.len() * subvariants.len());
        for &config in &configs {
            for &variant in &variants {
                for &subvariant in &subvariants {
                    specs.push(TargetSpec::new(config, variant, subvariant));
                }
            }
        }
        specs
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a AxisCatalog,
    segmenter: Segmenter<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a AxisCatalog) -> Self {
        Self {
            catalog,
            segmenter: Segmenter::new(catalog),
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.segmenter = self.segmenter.with_separator(separator);
        self
    }

    pub fn segmenter(&self) -> &Segmenter<'a> {
        &self.segmenter
    }

    /// Resolve raw arguments into build specs and literal target names.
    pub fn resolve<I, S>(&self, inputs: I) -> Selection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = ResolutionState::default();

        for input in inputs {
            let input = input.as_ref();
            let classification = self.segmenter.classify(input);
            trace!(input, ?classification, "classified argument");

            match classification {
                Classification::NoMatch => {
                    state.passthrough.insert(input.to_string());
                }
                Classification::SingleAxis { axis, index } => {
                    state.axes[axis.position()].touch(index);
                }
                Classification::MultiAxis(partial) => {
                    state.explicit.insert(partial.complete(self.catalog));
                }
            }
        }

        let touched_any = state.touched_any();
        let mut specs = std::mem::take(&mut state.explicit);
        let explicit_count = specs.len();
        if explicit_count == 0 || touched_any {
            specs.extend(state.cross_product(self.catalog));
        }

        debug!(
            explicit = explicit_count,
            touched_any,
            specs = specs.len(),
            names = state.passthrough.len(),
            "resolved target selection"
        );

        Emitter::emit(specs, state.passthrough)
    }
}

/// Resolve `inputs` against `catalog` using the default separator.
pub fn select_targets<I, S>(catalog: &AxisCatalog, inputs: I) -> Selection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Resolver::new(catalog).resolve(inputs)
}
