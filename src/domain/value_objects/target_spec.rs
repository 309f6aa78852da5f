//! TargetSpec value object - one fully resolved build configuration

use serde::Serialize;

use super::Axis;

/// A fully pinned (config, variant, subvariant) index triple.
///
/// Indices refer to positions in the matching axis of an
/// [`AxisCatalog`](crate::domain::entities::AxisCatalog). Ordering is
/// lexicographic over the fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TargetSpec {
    pub config: usize,
    pub variant: usize,
    pub subvariant: usize,
}

impl TargetSpec {
    pub fn new(config: usize, variant: usize, subvariant: usize) -> Self {
        Self {
            config,
            variant,
            subvariant,
        }
    }

    /// Index selected on `axis`
    pub fn index(&self, axis: Axis) -> usize {
        match axis {
            Axis::Config => self.config,
            Axis::Variant => self.variant,
            Axis::SubVariant => self.subvariant,
        }
    }

    /// Copy of this spec with `axis` set to `index`
    pub fn with(mut self, axis: Axis, index: usize) -> Self {
        match axis {
            Axis::Config => self.config = index,
            Axis::Variant => self.variant = index,
            Axis::SubVariant => self.subvariant = index,
        }
        self
    }

    pub fn as_array(&self) -> [usize; 3] {
        [self.config, self.variant, self.subvariant]
    }
}

impl From<(usize, usize, usize)> for TargetSpec {
    fn from((config, variant, subvariant): (usize, usize, usize)) -> Self {
        Self::new(config, variant, subvariant)
    }
}

impl std::fmt::Display for TargetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.config, self.variant, self.subvariant)
    }
}
