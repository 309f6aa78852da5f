//! Axis value object - one independent dimension of a build selection

use serde::{Deserialize, Serialize};

/// Selection axis, in strict precedence order.
///
/// Compound selections must name axes in this order (`config`, then
/// `variant`, then `subvariant`), although any axis may be skipped.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Platform/toolchain configuration (e.g. `linux-gcc`)
    Config,
    /// Build variant (e.g. `debug`, `release`)
    Variant,
    /// Sub-variant (e.g. `default`)
    #[serde(alias = "sub-variant")]
    #[value(name = "subvariant", alias = "sub-variant")]
    SubVariant,
}

impl Axis {
    /// All axes in precedence order
    pub const ALL: [Axis; 3] = [Axis::Config, Axis::Variant, Axis::SubVariant];

    /// Zero-based position in precedence order
    pub fn position(&self) -> usize {
        match self {
            Axis::Config => 0,
            Axis::Variant => 1,
            Axis::SubVariant => 2,
        }
    }

    /// Axes that may follow this one in a compound selection
    pub fn later(&self) -> &'static [Axis] {
        &Self::ALL[self.position() + 1..]
    }

    /// Lowercase label used in config files and output
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Config => "config",
            Axis::Variant => "variant",
            Axis::SubVariant => "subvariant",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
