use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn specfilter(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("specfilter").unwrap();
    cmd.env("SPECFILTER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn demo_prints_every_scenario() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("green and large"))
        .stdout(predicate::str::contains("House"))
        .stdout(predicate::str::contains("not green"));
}

#[test]
fn filter_keeps_green_items_in_order() {
    let home = tempfile::tempdir().unwrap();
    let output = specfilter(&home)
        .args(["filter", "color=green"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let apple = stdout.find("Apple").unwrap();
    let house = stdout.find("House").unwrap();
    assert!(apple < house);
    assert!(!stdout.contains("Banana"));
    assert!(stdout.contains("2 of 3 items match color=green"));
}

#[test]
fn filter_json_output() {
    let home = tempfile::tempdir().unwrap();
    let output = specfilter(&home)
        .args(["--json", "filter", "color=green", "&", "size=large"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let listed = value["listed"].as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["index"], 3);
    assert_eq!(listed[0]["item"]["name"], "House");
}

#[test]
fn json_flag_after_filter_query() {
    let home = tempfile::tempdir().unwrap();
    let output = specfilter(&home)
        .args(["filter", "color=green", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["listed"].as_array().unwrap().len(), 2);
}

#[test]
fn deeply_nested_query_is_rejected() {
    let home = tempfile::tempdir().unwrap();
    let query = format!("{}color=green{}", "(".repeat(10_000), ")".repeat(10_000));
    specfilter(&home)
        .args(["filter", query.as_str()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("query nested too deeply"));
}

#[test]
fn empty_query_lists_everything() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .arg("filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 of 3 items match *"));
}

#[test]
fn bad_query_fails_with_error() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .args(["filter", "color="])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Query error"));
}

#[test]
fn unknown_attribute_fails() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .args(["filter", "weight=heavy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown attribute: weight"));
}

#[test]
fn catalog_flag_reads_file() {
    let home = tempfile::tempdir().unwrap();
    let catalog = home.path().join("shop.json");
    fs::write(
        &catalog,
        r#"[
            {"name": "Kiwi", "color": "green", "size": "small", "tags": ["fruit"]},
            {"name": "Shed", "color": "red", "size": "large", "in_stock": false},
            {"name": "Plum", "color": "blue", "size": "small", "tags": ["fruit"]}
        ]"#,
    )
    .unwrap();

    specfilter(&home)
        .arg("--catalog")
        .arg(&catalog)
        .args(["filter", "tags=fruit", "&", "!color=blue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kiwi"))
        .stdout(predicate::str::contains("Plum").not())
        .stdout(predicate::str::contains("Shed").not());
}

#[test]
fn missing_catalog_file_fails() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .args(["--catalog", "does-not-exist.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn config_set_then_get() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .args(["config", "color", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color set to false"));

    specfilter(&home)
        .args(["config", "color"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));

    specfilter(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog = (built-in)"))
        .stdout(predicate::str::contains("color = false"));
}

#[test]
fn init_switches_to_file_catalog() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote demo catalog"));

    let catalog = home.path().join("catalog.json");
    assert!(catalog.exists());
    fs::write(
        &catalog,
        r#"[{"name": "Lamp", "color": "red", "size": "medium"}]"#,
    )
    .unwrap();

    specfilter(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lamp"))
        .stdout(predicate::str::contains("Apple").not());
}

#[test]
fn attrs_lists_enum_values() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .arg("attrs")
        .assert()
        .success()
        .stdout(predicate::str::contains("red | green | blue"))
        .stdout(predicate::str::contains("in_stock"));
}

#[test]
fn verbose_logs_to_stderr() {
    let home = tempfile::tempdir().unwrap();
    specfilter(&home)
        .args(["-v", "filter", "size=small"])
        .assert()
        .success()
        .stderr(predicate::str::contains("filter applied"));
}
