//! Output Rendering
//!
//! Renders selections, classifications and catalogs as text or JSON. Every
//! renderer returns the full output as a `String` (no trailing newline) so the
//! binary decides where it goes.

use serde_json::{json, Value};

use crate::config::ConfigWarning;
use crate::domain::entities::AxisCatalog;
use crate::domain::services::{Classification, Selection};
use crate::domain::value_objects::{Axis, TargetSpec};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Renders results against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    catalog: &'a AxisCatalog,
    separator: char,
    format: OutputFormat,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a AxisCatalog, separator: char, format: OutputFormat) -> Self {
        Self {
            catalog,
            separator,
            format,
        }
    }

    fn spec_name(&self, spec: &TargetSpec) -> String {
        self.catalog
            .describe(spec, self.separator)
            .unwrap_or_else(|| spec.to_string())
    }

    fn spec_json(&self, spec: &TargetSpec) -> Value {
        json!({
            "name": self.spec_name(spec),
            "config": self.catalog.name(Axis::Config, spec.config),
            "variant": self.catalog.name(Axis::Variant, spec.variant),
            "subvariant": self.catalog.name(Axis::SubVariant, spec.subvariant),
            "index": spec.as_array(),
        })
    }

    pub fn selection(&self, selection: &Selection, warnings: &[ConfigWarning]) -> String {
        match self.format {
            OutputFormat::Json => {
                let specs: Vec<Value> = selection.specs.iter().map(|s| self.spec_json(s)).collect();
                json!({
                    "event": "resolve",
                    "specs": specs,
                    "names": selection.names,
                    "warnings": warnings_json(warnings),
                })
                .to_string()
            }
            OutputFormat::Text => {
                let mut lines = vec![format!("Build configurations ({}):", selection.specs.len())];
                lines.extend(selection.specs.iter().map(|s| format!("  {}", self.spec_name(s))));
                lines.push(format!("Named targets ({}):", selection.names.len()));
                lines.extend(selection.names.iter().map(|n| format!("  {}", n)));
                lines.join("\n")
            }
        }
    }

    pub fn classification(&self, input: &str, classification: &Classification) -> String {
        match self.format {
            OutputFormat::Json => {
                let body = match classification {
                    Classification::NoMatch => json!({ "kind": "no-match" }),
                    Classification::SingleAxis { axis, index } => json!({
                        "kind": "single-axis",
                        "axis": axis,
                        "index": index,
                        "name": self.catalog.name(*axis, *index),
                    }),
                    Classification::MultiAxis(partial) => {
                        let spec = partial.complete(self.catalog);
                        let given: Vec<Axis> = Axis::ALL
                            .into_iter()
                            .filter(|&axis| partial.get(axis).is_some())
                            .collect();
                        json!({
                            "kind": "multi-axis",
                            "axes": given,
                            "spec": self.spec_json(&spec),
                        })
                    }
                };
                json!({ "event": "classify", "input": input, "classification": body }).to_string()
            }
            OutputFormat::Text => match classification {
                Classification::NoMatch => format!("{}: named target", input),
                Classification::SingleAxis { axis, index } => format!(
                    "{}: {} {}",
                    input,
                    axis,
                    self.catalog.name(*axis, *index).unwrap_or("?")
                ),
                Classification::MultiAxis(partial) => {
                    let given: Vec<&str> = Axis::ALL
                        .iter()
                        .filter(|&&axis| partial.get(axis).is_some())
                        .map(Axis::label)
                        .collect();
                    format!(
                        "{}: {} ({})",
                        input,
                        self.spec_name(&partial.complete(self.catalog)),
                        given.join(", ")
                    )
                }
            },
        }
    }

    pub fn catalog(&self, only: Option<Axis>) -> String {
        let axes: Vec<Axis> = match only {
            Some(axis) => vec![axis],
            None => Axis::ALL.to_vec(),
        };

        match self.format {
            OutputFormat::Json => {
                let mut body = serde_json::Map::new();
                for axis in &axes {
                    let entries: Vec<Value> = self
                        .catalog
                        .names(*axis)
                        .iter()
                        .enumerate()
                        .map(|(index, name)| {
                            json!({
                                "index": index,
                                "name": name,
                                "hash": self.catalog.hash(*axis, index).map(|h| h.to_string()),
                                "default": index == self.catalog.default_index(*axis),
                            })
                        })
                        .collect();
                    body.insert(axis.label().to_string(), Value::Array(entries));
                }
                json!({
                    "event": "catalog",
                    "separator": self.separator.to_string(),
                    "axes": body,
                })
                .to_string()
            }
            OutputFormat::Text => {
                let mut lines = Vec::new();
                for axis in &axes {
                    lines.push(format!("{}:", axis));
                    for (index, name) in self.catalog.names(*axis).iter().enumerate() {
                        let hash = self
                            .catalog
                            .hash(*axis, index)
                            .map(|h| h.to_string())
                            .unwrap_or_default();
                        let marker = if index == self.catalog.default_index(*axis) {
                            "  (default)"
                        } else {
                            ""
                        };
                        lines.push(format!("  {} {} {}{}", index, hash, name, marker));
                    }
                }
                lines.join("\n")
            }
        }
    }
}

fn warnings_json(warnings: &[ConfigWarning]) -> Vec<Value> {
    warnings
        .iter()
        .map(|w| {
            json!({
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            })
        })
        .collect()
}
