//! target-select CLI
//!
//! Usage: target-select <COMMAND>
//!
//! Commands:
//!   resolve   Resolve arguments into build configurations and named targets
//!   classify  Show how a single argument is classified
//!   catalog   List catalog entries and defaults

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing::debug;

use target_select::config::{self, Config, ConfigWarning};
use target_select::presentation::{Cli, Commands, OutputFormat, Renderer};
use target_select::{AxisCatalog, Resolver};

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    let format = OutputFormat::from_json_flag(cli.json);
    let (config, warnings) = load_config(cli.catalog.as_deref())?;

    if format == OutputFormat::Text {
        for warning in &warnings {
            eprintln!("warning: {}", warning);
        }
    }

    let separator = match cli.separator {
        Some(c) => c,
        None => config.separator_char()?,
    };
    let catalog = config
        .to_catalog()
        .context("catalog configuration is invalid")?;
    let renderer = Renderer::new(&catalog, separator, format);

    match cli.command {
        Commands::Resolve { args } => cmd_resolve(&catalog, separator, &renderer, &args, &warnings),
        Commands::Classify { input } => cmd_classify(&catalog, separator, &renderer, &input),
        Commands::Catalog { axis } => {
            println!("{}", renderer.catalog(axis));
            Ok(())
        }
    }
}

fn cmd_resolve(
    catalog: &AxisCatalog,
    separator: char,
    renderer: &Renderer<'_>,
    args: &[String],
    warnings: &[ConfigWarning],
) -> Result<()> {
    let selection = Resolver::new(catalog).with_separator(separator).resolve(args);
    println!("{}", renderer.selection(&selection, warnings));
    Ok(())
}

fn cmd_classify(
    catalog: &AxisCatalog,
    separator: char,
    renderer: &Renderer<'_>,
    input: &str,
) -> Result<()> {
    let resolver = Resolver::new(catalog).with_separator(separator);
    let classification = resolver.segmenter().classify(input);
    println!("{}", renderer.classification(input, &classification));
    Ok(())
}

/// Explicit `--catalog` file, else the usual search path, with env overrides.
fn load_config(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            debug!(path = %path.display(), "loaded catalog from --catalog");
            Ok((config::with_env_overrides(config), warnings))
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Config::load_or_default(cwd.as_deref()).context("failed to load catalog")
        }
    }
}

fn setup_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
