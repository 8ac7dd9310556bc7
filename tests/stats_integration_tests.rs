//! Integration tests for the `stats` command.

mod common;

use common::{BASIC_CONFIG, TestFixture, code, sample_codes};
use predicates::prelude::*;

fn stats_json(fixture: &TestFixture, extra: &[&str]) -> serde_json::Value {
    let output = fixture
        .command()
        .args(["stats", "--format", "json"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn keys(groups: &serde_json::Value) -> Vec<&str> {
    groups
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["key"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Text Output
// =============================================================================

#[test]
fn stats_text_summary_and_groups() {
    let fixture = TestFixture::new();
    fixture.create_config(BASIC_CONFIG);
    fixture.seed_store(sample_codes(), vec![]);

    fixture
        .command()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total codes: 3"))
        .stdout(predicate::str::contains("Used: 1"))
        .stdout(predicate::str::contains("Unused: 2"))
        .stdout(predicate::str::contains("Usage rate: 33.3%"))
        .stdout(predicate::str::contains("EMEA: 1/2 used (50.0%)"))
        .stdout(predicate::str::contains("Americas: 0/1 used (0.0%)"))
        .stdout(predicate::str::contains("Starter: 1/2 used (50.0%)"))
        .stdout(predicate::str::contains("Standard: 0/1 used (0.0%)"));
}

#[test]
fn stats_text_groups_in_first_seen_order() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);

    let output = fixture.command().arg("stats").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let emea = stdout.find("EMEA:").unwrap();
    let americas = stdout.find("Americas:").unwrap();
    assert!(emea < americas);
}

#[test]
fn stats_without_snapshot_reports_zeros() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total codes: 0"))
        .stdout(predicate::str::contains("Usage rate: 0.0%"))
        .stdout(predicate::str::contains("(no codes)"));
}

#[test]
fn stats_unknown_region_gets_own_group() {
    let fixture = TestFixture::new();
    fixture.seed_store(vec![code("X-1", "starter", "unknown", false)], vec![]);

    fixture
        .command()
        .args(["stats", "--by", "region"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown: 0/1 used (0.0%)"));
}

#[test]
fn stats_by_region_hides_type_breakdown() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);

    fixture
        .command()
        .args(["stats", "--by", "region"])
        .assert()
        .success()
        .stdout(predicate::str::contains("By Region:"))
        .stdout(predicate::str::contains("By Type:").not());
}

#[test]
fn stats_group_by_from_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[stats]\ngroup_by = \"type\"\n");
    fixture.seed_store(sample_codes(), vec![]);

    fixture
        .command()
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("By Type:"))
        .stdout(predicate::str::contains("By Region:").not());
}

// =============================================================================
// JSON and Markdown
// =============================================================================

#[test]
fn stats_json_carries_raw_numbers() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);

    let json = stats_json(&fixture, &[]);
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["used"], 1);
    assert_eq!(json["summary"]["unused"], 2);
    let percent = json["summary"]["usage_percent"].as_f64().unwrap();
    assert!((percent - 100.0 / 3.0).abs() < 1e-9);

    assert_eq!(keys(&json["by_region"]), vec!["emea", "americas"]);
    assert_eq!(keys(&json["by_type"]), vec!["starter", "standard"]);
    assert_eq!(json["by_region"][0]["usage_percent"], 50.0);
}

#[test]
fn stats_json_order_by_key() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);

    let json = stats_json(&fixture, &["--order", "key"]);
    assert_eq!(keys(&json["by_region"]), vec!["americas", "emea"]);
}

#[test]
fn stats_json_none_breakdown_has_only_summary() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);

    let json = stats_json(&fixture, &["--by", "none"]);
    assert!(json.get("by_region").is_none());
    assert!(json.get("by_type").is_none());
}

#[test]
fn stats_markdown_format() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);

    fixture
        .command()
        .args(["stats", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Promo Code Statistics"))
        .stdout(predicate::str::contains("| EMEA | 2 | 1 | 1 | 50.0% |"));
}

// =============================================================================
// Output Destinations and Errors
// =============================================================================

#[test]
fn stats_output_to_file() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);
    let report = fixture.path().join("reports/stats.json");

    fixture
        .command()
        .args(["stats", "--format", "json", "-o"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("\"summary\""));
}

#[test]
fn stats_custom_store_flag() {
    let fixture = TestFixture::new();
    fixture.seed_store(sample_codes(), vec![]);
    let moved = fixture.path().join("elsewhere.json");
    std::fs::rename(fixture.store_path(), &moved).unwrap();

    fixture
        .command()
        .arg("stats")
        .arg("--store")
        .arg(&moved)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total codes: 3"));
}

#[test]
fn stats_unsupported_snapshot_version_fails() {
    let fixture = TestFixture::new();
    fixture.create_file(
        common::STORE_PATH,
        r#"{"version": 99, "promo_codes": [], "blog_posts": []}"#,
    );

    fixture
        .command()
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration"));
}

#[test]
fn stats_invalid_config_fails() {
    let fixture = TestFixture::new();
    fixture.create_config("[stats]\norder = \"random\"\n");

    fixture
        .command()
        .arg("stats")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("stats.order"));
}
