//! Catalog seed import
//!
//! Provides:
//! - Catalog seed format v0 schema
//! - YAML parser with validation
//! - Conversion into an `InMemoryCatalog`

pub mod format_v0;
pub mod parser;

pub use format_v0::{CatalogSeedV0, SeedOverlay};
pub use parser::{load_catalog_file, parse_catalog_file, parse_catalog_str};
