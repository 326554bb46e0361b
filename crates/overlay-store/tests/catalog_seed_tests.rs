#![allow(clippy::unwrap_used)]

use overlay_core::catalog::OverlayCatalog;
use overlay_core::errors::ExErrorKind;
use overlay_core::model::{OverlayCategory, OverlayId, OverlayZone};
use overlay_store::seed::{load_catalog_file, parse_catalog_str};
use std::fs;
use tempfile::TempDir;

const SEED: &str = r#"
schema_version: 0
overlays:
  - id: 1
    collection: mpbeach
    render_name: MP_Bea_M_Chest_000
    display_name: Anchor
    category: tattoo
    zone: torso
  - id: 4
    collection: mpbusiness
    render_name: MP_Buis_M_Badge_000
    category: badges
  - id: 6
    collection: mphipster
    render_name: FM_Hip_M_Hair_000
    display_name: Fade
    category: hairstyle
"#;

#[test]
fn test_parse_valid_seed() {
    let seed = parse_catalog_str(SEED).unwrap();

    assert_eq!(seed.schema_version, 0);
    assert_eq!(seed.overlays.len(), 3);
}

#[test]
fn test_into_catalog_builds_entries() {
    let catalog = parse_catalog_str(SEED).unwrap().into_catalog().unwrap();

    let anchor = catalog.lookup(OverlayId::new(1)).unwrap();
    assert_eq!(anchor.zone, Some(OverlayZone::Torso));
    assert_eq!(anchor.category, OverlayCategory::Tattoo);

    // display_name falls back to render_name
    let badge = catalog.lookup(OverlayId::new(4)).unwrap();
    assert_eq!(badge.display_name, "MP_Buis_M_Badge_000");
    assert_eq!(badge.category, OverlayCategory::Badge);
}

#[test]
fn test_rejects_unsupported_schema_version() {
    let err = parse_catalog_str("schema_version: 1\noverlays: []\n").unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    assert!(err.message().contains("schema_version"));
}

#[test]
fn test_rejects_duplicate_ids() {
    let yaml = r#"
schema_version: 0
overlays:
  - { id: 3, collection: mpbeach, render_name: a, category: tattoo }
  - { id: 3, collection: mpbiker, render_name: b, category: badge }
"#;

    let err = parse_catalog_str(yaml).unwrap_err();

    assert_eq!(err.overlay_id(), Some(3));
    assert!(err.message().contains("Duplicate"));
}

#[test]
fn test_rejects_zone_on_non_tattoo() {
    let yaml = r#"
schema_version: 0
overlays:
  - { id: 5, collection: mpbusiness, render_name: b, category: badge, zone: head }
"#;

    let err = parse_catalog_str(yaml).unwrap_err();

    assert_eq!(err.overlay_id(), Some(5));
    assert!(err.message().contains("zone"));
}

#[test]
fn test_rejects_id_out_of_range() {
    let yaml = r#"
schema_version: 0
overlays:
  - { id: 70000, collection: mpbeach, render_name: a, category: tattoo }
"#;

    let err = parse_catalog_str(yaml).unwrap_err();

    assert!(err.message().contains("70000"));
}

#[test]
fn test_rejects_unknown_category() {
    let yaml = r#"
schema_version: 0
overlays:
  - { id: 2, collection: mpbeach, render_name: a, category: scar }
"#;

    let err = parse_catalog_str(yaml).unwrap_err();

    assert!(err.message().contains("scar"));
}

#[test]
fn test_rejects_malformed_yaml() {
    let err = parse_catalog_str("schema_version: [").unwrap_err();

    assert!(err.message().contains("YAML parse error"));
}

#[test]
fn test_load_catalog_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.yaml");
    fs::write(&path, SEED).unwrap();

    let catalog = load_catalog_file(&path).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.entries_by_category(OverlayCategory::Hairstyle).len(),
        1
    );
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    let err = load_catalog_file(&dir.path().join("nope.yaml")).unwrap_err();

    assert!(err.message().contains("Failed to read seed file"));
}
