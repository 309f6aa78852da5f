//! Segmenter
//!
//! Classifies a single argument against the catalog. An argument may name one
//! axis entry (`release`), or spell out several axes joined by the separator
//! (`linux-gcc-production-special`).
//!
//! Names can contain the separator themselves (`linux-gcc`), so an argument
//! cannot simply be split. Instead every way of cutting it at separator
//! positions is tried, axis by axis in precedence order, and the best complete
//! decomposition wins:
//!
//! 1. more assigned axes beats fewer;
//! 2. then the longer config segment;
//! 3. then the longer variant segment.
//!
//! The search is bounded by the number of separators in the argument, which is
//! always small for command-line input.

use crate::domain::entities::AxisCatalog;
use crate::domain::value_objects::{Axis, TargetSpec};

/// A compound selection with some axes left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PartialSpec {
    slots: [Option<usize>; 3],
}

impl PartialSpec {
    pub fn get(&self, axis: Axis) -> Option<usize> {
        self.slots[axis.position()]
    }

    pub fn set(&mut self, axis: Axis, index: usize) {
        self.slots[axis.position()] = Some(index);
    }

    /// Number of axes this selection pins
    pub fn assigned(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Fill every open axis with the catalog default
    pub fn complete(&self, catalog: &AxisCatalog) -> TargetSpec {
        Axis::ALL
            .iter()
            .fold(catalog.default_spec(), |spec, &axis| match self.get(axis) {
                Some(index) => spec.with(axis, index),
                None => spec,
            })
    }
}

/// How one argument relates to the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not a selection; forwarded as a literal target name
    NoMatch,
    /// The whole argument names one entry of one axis
    SingleAxis { axis: Axis, index: usize },
    /// Two or three axes spelled out in precedence order
    MultiAxis(PartialSpec),
}

/// Candidate decomposition; `lengths` feeds the tie-break.
#[derive(Debug, Clone, Copy, Default)]
struct Decomposition {
    spec: PartialSpec,
    lengths: [usize; 3],
}

impl Decomposition {
    fn rank(&self) -> (usize, usize, usize) {
        (self.spec.assigned(), self.lengths[0], self.lengths[1])
    }

    fn assign(&mut self, axis: Axis, index: usize, len: usize) {
        self.spec.set(axis, index);
        self.lengths[axis.position()] = len;
    }

    fn clear(&mut self, axis: Axis) {
        self.spec.slots[axis.position()] = None;
        self.lengths[axis.position()] = 0;
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    catalog: &'a AxisCatalog,
    separator: char,
}

impl<'a> Segmenter<'a> {
    pub const DEFAULT_SEPARATOR: char = '-';

    pub fn new(catalog: &'a AxisCatalog) -> Self {
        Self {
            catalog,
            separator: Self::DEFAULT_SEPARATOR,
        }
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn classify(&self, input: &str) -> Classification {
        let mut current = Decomposition::default();
        let mut best: Option<Decomposition> = None;
        self.search(input, &Axis::ALL, &mut current, &mut best);

        let Some(best) = best else {
            return Classification::NoMatch;
        };

        let mut given = Axis::ALL
            .iter()
            .filter_map(|&axis| best.spec.get(axis).map(|index| (axis, index)));
        match (given.next(), given.next()) {
            (Some((axis, index)), None) => Classification::SingleAxis { axis, index },
            _ => Classification::MultiAxis(best.spec),
        }
    }

    /// Match `rest` against `axes` (and their successors), recording every
    /// decomposition that consumes all of it.
    fn search(
        &self,
        rest: &str,
        axes: &'static [Axis],
        current: &mut Decomposition,
        best: &mut Option<Decomposition>,
    ) {
        for &axis in axes {
            for end in segment_ends(rest, self.separator) {
                let segment = &rest[..end];
                let Some(index) = self.catalog.lookup(axis, segment) else {
                    continue;
                };

                current.assign(axis, index, segment.len());
                if end == rest.len() {
                    if best.map_or(true, |b| current.rank() > b.rank()) {
                        *best = Some(*current);
                    }
                } else {
                    let tail = &rest[end + self.separator.len_utf8()..];
                    self.search(tail, axis.later(), current, best);
                }
                current.clear(axis);
            }
        }
    }
}

/// Byte offsets where a non-empty leading segment of `rest` may end: before
/// each separator, and at the end of the string.
fn segment_ends(rest: &str, separator: char) -> impl Iterator<Item = usize> + '_ {
    rest.char_indices()
        .filter(move |&(i, c)| i > 0 && c == separator)
        .map(|(i, _)| i)
        .chain((!rest.is_empty()).then_some(rest.len()))
}
