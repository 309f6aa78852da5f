//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --catalog, --separator) are inherited by all subcommands
//! - `resolve` takes the residual arguments verbatim, including ones that start with `-`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Axis;

/// target-select - resolve build configurations and named targets from arguments
#[derive(Parser, Debug)]
#[command(name = "target-select")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Catalog file (defaults to ./target-select.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Separator between axis names in compound selections
    #[arg(long, global = true, value_name = "CHAR")]
    pub separator: Option<char>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve arguments into build configurations and named targets
    Resolve {
        /// Selections (e.g. `release`, `linux-gcc-debug`) and target names
        #[arg(
            value_name = "ARG",
            num_args = 0..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },

    /// Show how a single argument is classified (debugging)
    Classify {
        /// Argument to classify
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// List catalog entries and defaults
    Catalog {
        /// Only show one axis
        #[arg(long, value_enum)]
        axis: Option<Axis>,
    },
}
