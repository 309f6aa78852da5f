//! Scenario: Driving selection through the CLI
//!
//! Journey: A build script calls `target-select resolve` with the residual
//! arguments and reads the result as JSON; a developer inspects the catalog
//! and checks how an argument is interpreted.

use serde_json::json;

use crate::common::*;

/// SCENARIO: Project catalog is picked up from the working directory
#[test]
fn scenario_project_catalog_resolve_json() {
    let env = TestEnv::builder()
        .with_project_catalog(REFERENCE_CATALOG_TOML)
        .build();

    let result = env.run(&["--json", "resolve", "linux-gcc", "special", "my-lib"]);
    assert!(result.success, "resolve failed: {}", result.stderr);

    let value = result.json();
    assert_eq!(value["specs"].as_array().map(Vec::len), Some(1));
    assert_eq!(value["specs"][0]["name"], "linux-gcc-debug-special");
    assert_eq!(value["specs"][0]["index"], json!([2, 0, 1]));
    assert_eq!(value["names"], json!(["my-lib"]));
}

/// SCENARIO: User catalog applies when the project has none
#[test]
fn scenario_user_catalog_fallback() {
    let env = TestEnv::builder()
        .with_user_catalog(
            "[config]\nnames = [\"host\", \"arm\"]\n[variant]\nnames = [\"dbg\", \"opt\"]\n[subvariant]\nnames = [\"std\"]\n",
        )
        .build();

    let result = env.run(&["--json", "resolve", "arm-opt"]);
    assert!(result.success, "resolve failed: {}", result.stderr);
    assert_eq!(result.json()["specs"][0]["name"], "arm-opt-std");
}

/// SCENARIO: Project catalog wins over the user catalog
#[test]
fn scenario_project_catalog_beats_user_catalog() {
    let env = TestEnv::builder()
        .with_project_catalog(REFERENCE_CATALOG_TOML)
        .with_user_catalog("[config]\nnames = [\"other\"]\n")
        .build();

    let result = env.run(&["--json", "resolve"]);
    assert_eq!(result.json()["specs"][0]["name"], "win32-msvc-debug-default");
}

/// SCENARIO: Environment overrides change the defaults
#[test]
fn scenario_env_override_default_variant() {
    let env = TestEnv::builder()
        .with_project_catalog(REFERENCE_CATALOG_TOML)
        .build();

    let result = env.run_with_env(
        &["--json", "resolve"],
        &[("TARGET_SELECT_DEFAULT_VARIANT", "release")],
    );
    assert!(result.success, "resolve failed: {}", result.stderr);
    assert_eq!(result.json()["specs"][0]["name"], "win32-msvc-release-default");
}

/// SCENARIO: Invalid catalog fails before any resolution
#[test]
fn scenario_invalid_catalog_fails() {
    let env = TestEnv::builder()
        .with_project_catalog("[variant]\nnames = [\"debug\", \"debug\"]\n")
        .build();

    let result = env.run(&["resolve", "debug"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("collides with existing entry"),
        "unexpected stderr:\n{}",
        result.stderr
    );
}

/// SCENARIO: A discovered catalog with a syntax error is reported, not ignored
#[test]
fn scenario_malformed_project_catalog_fails() {
    let env = TestEnv::builder()
        .with_project_catalog("[config]\nnames = [\"arm\", \"host\"\n")
        .build();

    let result = env.run(&["resolve", "arm"]);
    assert!(!result.success, "resolve should fail:\n{}", result.stdout);
    assert!(
        result.stderr.contains("invalid catalog file"),
        "unexpected stderr:\n{}",
        result.stderr
    );
}

/// SCENARIO: Typos in a discovered catalog produce a warning with a suggestion
#[test]
fn scenario_project_catalog_unknown_key_warns() {
    let catalog = format!("seperator = \"/\"\n{}", REFERENCE_CATALOG_TOML);
    let env = TestEnv::builder().with_project_catalog(&catalog).build();

    let result = env.run(&["resolve", "release"]);
    assert!(result.success, "resolve failed: {}", result.stderr);
    assert!(
        result.stderr.contains("unknown key 'seperator'"),
        "unexpected stderr:\n{}",
        result.stderr
    );
    assert!(result.stderr.contains("did you mean 'separator'?"));

    let json = env.run(&["--json", "resolve", "release"]);
    assert_eq!(json.json()["warnings"][0]["key"], "seperator");
    assert_eq!(json.json()["warnings"][0]["line"], 1);
}
