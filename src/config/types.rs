//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{AxisCatalog, AxisDefinition};
use crate::domain::services::Segmenter;
use crate::domain::value_objects::Axis;
use crate::error::{SelectError, SelectResult};

use super::loader::{self, ConfigWarning};

/// Default entry of an axis, by name or by zero-based index.
///
/// Both forms are accepted:
///   default = "linux-gcc"
///   default = 2
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultSelector {
    Index(usize),
    Name(String),
}

impl DefaultSelector {
    /// Parse an override value: digits are an index, anything else a name.
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<usize>() {
            Ok(index) => DefaultSelector::Index(index),
            Err(_) => DefaultSelector::Name(value.trim().to_string()),
        }
    }
}

/// One axis section (`[config]`, `[variant]`, `[subvariant]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    #[serde(default)]
    pub names: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultSelector>,
}

impl AxisConfig {
    fn new(names: &[&str], default: &str) -> Self {
        Self {
            names: names.iter().map(|n| n.to_string()).collect(),
            default: Some(DefaultSelector::Name(default.to_string())),
        }
    }

    fn to_definition(&self, axis: Axis) -> SelectResult<AxisDefinition> {
        let default_index = match &self.default {
            None => 0,
            Some(DefaultSelector::Index(index)) => *index,
            Some(DefaultSelector::Name(name)) => self
                .names
                .iter()
                .position(|n| n == name)
                .ok_or_else(|| SelectError::UnknownDefault {
                    axis,
                    name: name.clone(),
                })?,
        };
        Ok(AxisDefinition::new(self.names.iter().cloned(), default_index))
    }
}

fn default_config_axis() -> AxisConfig {
    AxisConfig::new(&["win32-msvc", "macosx-clang", "linux-gcc"], "win32-msvc")
}

fn default_variant_axis() -> AxisConfig {
    AxisConfig::new(&["debug", "production", "release"], "debug")
}

fn default_subvariant_axis() -> AxisConfig {
    AxisConfig::new(&["default"], "default")
}

fn default_separator() -> String {
    Segmenter::DEFAULT_SEPARATOR.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_separator")]
    pub separator: String,

    #[serde(default = "default_config_axis")]
    pub config: AxisConfig,

    #[serde(default = "default_variant_axis")]
    pub variant: AxisConfig,

    #[serde(default = "default_subvariant_axis")]
    pub subvariant: AxisConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            config: default_config_axis(),
            variant: default_variant_axis(),
            subvariant: default_subvariant_axis(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SelectResult<Self> {
        Ok(loader::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory, user config, or defaults
    pub fn load_or_default(
        project_root: Option<&Path>,
    ) -> SelectResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    pub fn axis(&self, axis: Axis) -> &AxisConfig {
        match axis {
            Axis::Config => &self.config,
            Axis::Variant => &self.variant,
            Axis::SubVariant => &self.subvariant,
        }
    }

    pub fn axis_mut(&mut self, axis: Axis) -> &mut AxisConfig {
        match axis {
            Axis::Config => &mut self.config,
            Axis::Variant => &mut self.variant,
            Axis::SubVariant => &mut self.subvariant,
        }
    }

    /// The separator as a single character
    pub fn separator_char(&self) -> SelectResult<char> {
        let mut chars = self.separator.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(SelectError::InvalidSeparator {
                value: self.separator.clone(),
            }),
        }
    }

    /// Build the validated catalog this configuration describes
    pub fn to_catalog(&self) -> SelectResult<AxisCatalog> {
        AxisCatalog::new(
            self.config.to_definition(Axis::Config)?,
            self.variant.to_definition(Axis::Variant)?,
            self.subvariant.to_definition(Axis::SubVariant)?,
        )
    }
}
