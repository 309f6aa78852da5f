//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::Axis;
use crate::error::{SelectError, SelectResult};

use super::types::{Config, DefaultSelector};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "target-select.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SelectResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SelectError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files, highest priority first
pub fn config_search_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = dirs_config_dir() {
        paths.push(dir.join("target-select/catalog.toml"));
    }
    paths
}

/// Load from project config, user config, or defaults.
///
/// The first file that exists wins. A file that exists but cannot be read or
/// parsed is an error rather than a silent fallback to defaults.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> SelectResult<(Config, Vec<ConfigWarning>)> {
    for path in config_search_paths(project_root) {
        if !path.exists() {
            continue;
        }
        let (config, warnings) = load_with_warnings(&path)?;
        debug!(path = %path.display(), warnings = warnings.len(), "loaded catalog config");
        return Ok((with_env_overrides(config), warnings));
    }

    debug!("no catalog config found, using built-in defaults");
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (TARGET_SELECT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary key lookup
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // TARGET_SELECT_SEPARATOR
    if let Some(separator) = lookup("TARGET_SELECT_SEPARATOR") {
        config.separator = separator;
    }

    // TARGET_SELECT_DEFAULT_{CONFIG,VARIANT,SUBVARIANT}
    for axis in Axis::ALL {
        let key = format!("TARGET_SELECT_DEFAULT_{}", axis.label().to_uppercase());
        if let Some(value) = lookup(&key) {
            config.axis_mut(axis).default = Some(DefaultSelector::parse(&value));
        }
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// 1-based line on which `key` is assigned (`key = ...` or `key.sub = ...`)
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let Some(rest) = line.trim_start().strip_prefix(key) else {
                return false;
            };
            let rest = rest.trim_start();
            rest.starts_with('=') || rest.starts_with('.')
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "separator",
        "config",
        "variant",
        "subvariant",
        "names",
        "default",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
