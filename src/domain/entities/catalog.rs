//! Axis catalog entity
//!
//! Immutable description of the three selection axes: for each axis an
//! ordered list of names, their digests, and the default entry.

use std::collections::HashMap;

use crate::domain::value_objects::{Axis, NameHash, TargetSpec};
use crate::error::{SelectError, SelectResult};

/// Names and default for one axis, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisDefinition {
    pub names: Vec<String>,
    pub default_index: usize,
}

impl AxisDefinition {
    pub fn new<I, S>(names: I, default_index: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            default_index,
        }
    }
}

#[derive(Debug, Clone)]
struct AxisEntries {
    names: Vec<String>,
    hashes: Vec<NameHash>,
    by_hash: HashMap<NameHash, usize>,
    default_index: usize,
}

impl AxisEntries {
    fn build(axis: Axis, definition: AxisDefinition) -> SelectResult<Self> {
        let AxisDefinition {
            names,
            default_index,
        } = definition;

        if default_index >= names.len() {
            return Err(SelectError::DefaultOutOfRange {
                axis,
                index: default_index,
                count: names.len(),
            });
        }

        let mut hashes = Vec::with_capacity(names.len());
        let mut by_hash: HashMap<NameHash, usize> = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            let hash = NameHash::of(name);
            if let Some(&existing) = by_hash.get(&hash) {
                return Err(SelectError::DuplicateName {
                    axis,
                    name: name.clone(),
                    existing: names[existing].clone(),
                });
            }
            by_hash.insert(hash, index);
            hashes.push(hash);
        }

        Ok(Self {
            names,
            hashes,
            by_hash,
            default_index,
        })
    }
}

/// Validated catalog of all three axes.
#[derive(Debug, Clone)]
pub struct AxisCatalog {
    axes: [AxisEntries; 3],
}

impl AxisCatalog {
    /// Build a catalog, rejecting out-of-range defaults and digest collisions.
    pub fn new(
        config: AxisDefinition,
        variant: AxisDefinition,
        subvariant: AxisDefinition,
    ) -> SelectResult<Self> {
        Ok(Self {
            axes: [
                AxisEntries::build(Axis::Config, config)?,
                AxisEntries::build(Axis::Variant, variant)?,
                AxisEntries::build(Axis::SubVariant, subvariant)?,
            ],
        })
    }

    fn entries(&self, axis: Axis) -> &AxisEntries {
        &self.axes[axis.position()]
    }

    /// Resolve a name on `axis` by digest comparison
    pub fn lookup(&self, axis: Axis, name: &str) -> Option<usize> {
        self.entries(axis).by_hash.get(&NameHash::of(name)).copied()
    }

    pub fn default_index(&self, axis: Axis) -> usize {
        self.entries(axis).default_index
    }

    pub fn len(&self, axis: Axis) -> usize {
        self.entries(axis).names.len()
    }

    pub fn name(&self, axis: Axis, index: usize) -> Option<&str> {
        self.entries(axis).names.get(index).map(String::as_str)
    }

    pub fn names(&self, axis: Axis) -> &[String] {
        &self.entries(axis).names
    }

    pub fn hash(&self, axis: Axis, index: usize) -> Option<NameHash> {
        self.entries(axis).hashes.get(index).copied()
    }

    /// The all-defaults selection
    pub fn default_spec(&self) -> TargetSpec {
        TargetSpec::new(
            self.default_index(Axis::Config),
            self.default_index(Axis::Variant),
            self.default_index(Axis::SubVariant),
        )
    }

    /// Render `spec` as `<config><sep><variant><sep><subvariant>`.
    ///
    /// Returns `None` if any index is outside its axis.
    pub fn describe(&self, spec: &TargetSpec, separator: char) -> Option<String> {
        let mut out = String::new();
        for axis in Axis::ALL {
            if axis != Axis::Config {
                out.push(separator);
            }
            out.push_str(self.name(axis, spec.index(axis))?);
        }
        Some(out)
    }
}
