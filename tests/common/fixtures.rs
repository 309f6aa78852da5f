//! Test fixtures - the reference catalog and helpers.

use target_select::{AxisCatalog, AxisDefinition, TargetSpec};

/// Reference catalog as a config file
pub const REFERENCE_CATALOG_TOML: &str = r#"separator = "-"

[config]
names = ["win32-msvc", "macosx-clang", "linux-gcc"]
default = "win32-msvc"

[variant]
names = ["debug", "production", "release"]
default = "debug"

[subvariant]
names = ["default", "special"]
default = "default"
"#;

/// Reference catalog:
/// - config: win32-msvc (default), macosx-clang, linux-gcc
/// - variant: debug (default), production, release
/// - subvariant: default (default), special
pub fn reference_catalog() -> AxisCatalog {
    AxisCatalog::new(
        AxisDefinition::new(["win32-msvc", "macosx-clang", "linux-gcc"], 0),
        AxisDefinition::new(["debug", "production", "release"], 0),
        AxisDefinition::new(["default", "special"], 0),
    )
    .expect("reference catalog is valid")
}

/// Build a spec list from index triples
pub fn specs(triples: &[(usize, usize, usize)]) -> Vec<TargetSpec> {
    triples.iter().copied().map(TargetSpec::from).collect()
}
