//! Catalog seed parser with validation
//!
//! Parses YAML and validates schema version, id range and uniqueness, and
//! category/zone names

use crate::errors::{seed_entry_invalid, seed_validation, Result};
use crate::seed::format_v0::{CatalogSeedV0, SeedOverlay};
use overlay_core::catalog::InMemoryCatalog;
use overlay_core::model::{CatalogEntry, OverlayCategory, OverlayId, OverlayZone};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_catalog_file(path: &Path) -> Result<CatalogSeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_catalog_str(&content)
}

/// Parse a seed from a string
pub fn parse_catalog_str(content: &str) -> Result<CatalogSeedV0> {
    let seed: CatalogSeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    validate_seed(&seed)?;

    Ok(seed)
}

/// Parse, validate and build the catalog in one step
pub fn load_catalog_file(path: &Path) -> Result<InMemoryCatalog> {
    let seed = parse_catalog_file(path)?;
    let catalog = seed.into_catalog()?;
    tracing::debug!(path = %path.display(), entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

impl CatalogSeedV0 {
    /// Convert validated rows into catalog entries
    pub fn into_catalog(self) -> Result<InMemoryCatalog> {
        let entries = self
            .overlays
            .iter()
            .map(to_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(InMemoryCatalog::new(entries)?)
    }
}

/// Validate a parsed seed
fn validate_seed(seed: &CatalogSeedV0) -> Result<()> {
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    let mut ids = HashSet::new();
    for row in &seed.overlays {
        let entry = to_entry(row)?;
        if !ids.insert(entry.id) {
            return Err(seed_entry_invalid(
                entry.id.get(),
                &format!("Duplicate overlay id {}", entry.id),
            ));
        }
    }

    Ok(())
}

fn to_entry(row: &SeedOverlay) -> Result<CatalogEntry> {
    let id = OverlayId::try_from(row.id)
        .map_err(|_| seed_validation(&format!("Overlay id {} does not fit in u16", row.id)))?;

    let category: OverlayCategory = row.category.parse().map_err(|_| {
        seed_entry_invalid(
            id.get(),
            &format!("Unknown category '{}' for overlay {}", row.category, id),
        )
    })?;

    if row.collection.is_empty() || row.render_name.is_empty() {
        return Err(seed_entry_invalid(
            id.get(),
            &format!("Overlay {} needs a collection and a render_name", id),
        ));
    }

    let display_name = row
        .display_name
        .clone()
        .unwrap_or_else(|| row.render_name.clone());
    let mut entry = CatalogEntry::new(
        id,
        row.collection.clone(),
        row.render_name.clone(),
        display_name,
        category,
    );

    if let Some(zone_name) = &row.zone {
        if category != OverlayCategory::Tattoo {
            return Err(seed_entry_invalid(
                id.get(),
                &format!("Overlay {} is a {} and cannot carry a zone", id, category.as_str()),
            ));
        }
        let zone: OverlayZone = zone_name.parse().map_err(|_| {
            seed_entry_invalid(
                id.get(),
                &format!("Unknown zone '{}' for overlay {}", zone_name, id),
            )
        })?;
        entry = entry.with_zone(zone);
    }

    Ok(entry)
}
