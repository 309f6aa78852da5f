//! Configuration module for target-select
//!
//! The catalog (axis names, defaults, separator) comes from, highest first:
//! 1. CLI flag (`--catalog PATH`)
//! 2. Project config (`./target-select.toml`)
//! 3. User config (`~/.config/target-select/catalog.toml`)
//! 4. Built-in defaults
//!
//! Environment variables (`TARGET_SELECT_*`) are applied on top of whichever
//! source was used.

mod loader;
mod types;

pub use loader::{
    apply_overrides, config_search_paths, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{AxisConfig, Config, DefaultSelector};
