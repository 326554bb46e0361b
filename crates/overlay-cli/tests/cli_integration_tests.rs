//! CLI integration tests
//!
//! Run the `overlays` binary against a catalog seed and a record file in a
//! scratch directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

const CATALOG: &str = r#"
schema_version: 0
overlays:
  - { id: 1, collection: mpbeach, render_name: MP_Bea_M_Chest_000, display_name: Anchor, category: tattoo, zone: torso }
  - { id: 2, collection: mpbeach, render_name: MP_Bea_M_Head_000, display_name: Star, category: tattoo, zone: head }
  - { id: 4, collection: mpbusiness, render_name: MP_Buis_M_Badge_000, display_name: Crest, category: badge }
"#;

fn setup(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let catalog = temp_dir.path().join("catalog.yaml");
    fs::write(&catalog, CATALOG).unwrap();
    let record = temp_dir.path().join("character.json");
    (catalog, record)
}

fn run(catalog: &Path, record: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_overlays");
    Command::new(cli_bin)
        .arg("--catalog")
        .arg(catalog)
        .arg("--record")
        .arg(record)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn saved_overlays(record: &Path) -> serde_json::Value {
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(record).unwrap()).unwrap();
    json["Overlays"].clone()
}

#[test]
fn test_add_persists_and_prints_render_calls() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);

    let output = run(&catalog, &record, &["add", "1"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let out = stdout(&output);
    assert!(out.contains("added overlay 1 (count 1)"));
    assert!(out.contains("clear 1"));
    assert_eq!(out.lines().filter(|l| l.starts_with("apply ")).count(), 1);
    assert_eq!(saved_overlays(&record)["1"], 1);
}

#[test]
fn test_repeated_add_stacks_across_invocations() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);

    for _ in 0..3 {
        assert!(run(&catalog, &record, &["add", "4"]).status.success());
    }

    assert_eq!(saved_overlays(&record)["4"], 3);
    let out = stdout(&run(&catalog, &record, &["show"]));
    assert!(out.contains("4\t3\tCrest\tmpbusiness"));
}

#[test]
fn test_record_fields_outside_overlays_survive() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);
    fs::write(&record, r#"{"Model":"mp_m_freemode_01","Overlays":{"2":1}}"#).unwrap();

    assert!(run(&catalog, &record, &["add", "1"]).status.success());

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&record).unwrap()).unwrap();
    assert_eq!(json["Model"], "mp_m_freemode_01");
    assert_eq!(json["Overlays"]["2"], 1);
    assert_eq!(json["Overlays"]["1"], 1);
}

#[test]
fn test_clear_category_and_zone() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);
    fs::write(&record, r#"{"Overlays":{"1":1,"2":2,"4":1}}"#).unwrap();

    let out = stdout(&run(&catalog, &record, &["clear", "badges"]));
    assert!(out.contains("removed 1 badge overlay(s)"));

    let out = stdout(&run(&catalog, &record, &["clear-zone", "head"]));
    assert!(out.contains("removed 1 tattoo(s) on head"));

    let overlays = saved_overlays(&record);
    assert_eq!(overlays, serde_json::json!({"1": 1}));
}

#[test]
fn test_remove_inactive_leaves_record_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);

    let output = run(&catalog, &record, &["remove", "2"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("overlay 2 is not active"));
    assert!(!record.exists());
}

#[test]
fn test_refresh_reports_missing_catalog_entry() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);
    fs::write(&record, r#"{"Overlays":{"1":1,"9":1,"4":1}}"#).unwrap();

    let out = stdout(&run(&catalog, &record, &["refresh"]));

    assert!(out.contains("render aborted at overlay 9"));
    assert_eq!(out.lines().filter(|l| l.starts_with("apply ")).count(), 1);
}

#[test]
fn test_skip_missing_config_renders_past_gap() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);
    fs::write(&record, r#"{"Overlays":{"1":1,"9":1,"4":1}}"#).unwrap();
    let config = temp_dir.path().join("overlays.toml");
    fs::write(&config, "render_policy = \"skip_missing\"\nlogging = \"test\"\n").unwrap();

    let out = stdout(&run(
        &catalog,
        &record,
        &["--config", config.to_str().unwrap(), "refresh"],
    ));

    assert!(out.contains("skipped overlay 9"));
    assert_eq!(out.lines().filter(|l| l.starts_with("apply ")).count(), 2);
}

#[test]
fn test_menus_lists_twenty_collections() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);

    let out = stdout(&run(&catalog, &record, &["menus"]));

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "mpbeach\tBeach\t2");
    assert_eq!(lines[2], "mpbusiness\tBusiness\t1");
}

#[test]
fn test_menus_json_export() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);

    let out = stdout(&run(&catalog, &record, &["menus", "--json"]));

    let menus: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(menus.as_array().unwrap().len(), 20);
    assert_eq!(menus[0]["subMenu"]["headerTitle"], "Beach");
    assert_eq!(menus[0]["subMenu"]["menuItems"][0]["title"], "Anchor");
}

#[test]
fn test_bad_catalog_fails_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let (catalog, record) = setup(&temp_dir);
    fs::write(&catalog, "schema_version: 3\n").unwrap();

    let output = run(&catalog, &record, &["show"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}
