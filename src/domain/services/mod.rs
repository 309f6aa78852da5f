//! Domain Services
//!
//! Pure selection logic. Arguments flow through the services in order:
//! `Segmenter` classifies each one, `Resolver` folds the classifications,
//! `Emitter` produces the sorted result.

mod emitter;
mod resolver;
mod segmenter;

pub use emitter::{Emitter, Selection};
pub use resolver::{select_targets, Resolver};
pub use segmenter::{Classification, PartialSpec, Segmenter};
