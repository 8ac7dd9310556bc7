//! Integration tests for `init` and `config`.

mod common;

use common::{BASIC_CONFIG, TestFixture};
use predicates::prelude::*;

// =============================================================================
// init
// =============================================================================

#[test]
fn init_creates_config_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".promo-admin.toml")).unwrap();
    assert!(content.contains("version = \"1\""));
    assert!(content.contains("[stats]"));
}

#[test]
fn init_refuses_existing_file() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);

    fixture
        .command()
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn init_force_and_custom_output() {
    let fixture = TestFixture::new();
    fixture.create_file("custom.toml", "old");

    fixture
        .command()
        .args(["init", "--force", "-o", "custom.toml"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join("custom.toml")).unwrap();
    assert!(content.starts_with("# promo-admin configuration file"));
}

#[test]
fn generated_config_validates() {
    let fixture = TestFixture::new();
    fixture.command().arg("init").assert().success();

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

// =============================================================================
// config validate
// =============================================================================

#[test]
fn validate_without_config_uses_defaults() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("defaults are in effect"));
}

#[test]
fn validate_reports_toml_errors() {
    let fixture = TestFixture::new();
    fixture.create_config("[output\nformat = ");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn validate_rejects_unknown_keys() {
    let fixture = TestFixture::new();
    fixture.create_config("[store]\nlocation = \"x.json\"\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .code(2);
}

#[test]
fn validate_rejects_unsupported_version() {
    let fixture = TestFixture::new();
    fixture.create_config("version = \"7\"\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported config version"));
}

#[test]
fn validate_warns_on_unknown_default_region() {
    let fixture = TestFixture::new();
    fixture.create_config("[codes]\ndefault_region = \"mars\"\n");

    fixture
        .command()
        .args(["config", "validate"])
        .assert()
        .success()
        .stderr(predicate::str::contains("codes.default_region"));
}

#[test]
fn validate_explicit_missing_path_fails() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .args(["--config", "missing.toml", "config", "validate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

// =============================================================================
// config show
// =============================================================================

#[test]
fn show_text_names_source() {
    let fixture = TestFixture::new();
    fixture.create_config("[output]\nformat = \"json\"\n");

    fixture
        .command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Source:"))
        .stdout(predicate::str::contains(".promo-admin.toml"))
        .stdout(predicate::str::contains("format = \"json\""));
}

#[test]
fn show_json_with_no_config_is_defaults() {
    let fixture = TestFixture::new();
    fixture.create_config("[output]\nformat = \"json\"\n");

    let output = fixture
        .command()
        .args(["--no-config", "config", "show", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["output"]["format"], "text");
    assert_eq!(json["store"]["path"], ".promo-admin/store.json");
}

// =============================================================================
// CLI surface
// =============================================================================

#[test]
fn help_lists_commands() {
    common::TestFixture::new()
        .command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("codes"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("blog"))
        .stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn unknown_subcommand_fails() {
    TestFixture::new()
        .command()
        .arg("frobnicate")
        .assert()
        .failure();
}
