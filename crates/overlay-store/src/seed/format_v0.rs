//! Catalog seed format v0 schema
//!
//! ```yaml
//! schema_version: 0
//! overlays:
//!   - id: 1
//!     collection: mpbeach
//!     render_name: MP_Bea_M_Chest_000
//!     display_name: Anchor
//!     category: tattoo
//!     zone: torso
//! ```

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Catalog rows
    #[serde(default)]
    pub overlays: Vec<SeedOverlay>,
}

/// One catalog row as written in the seed
///
/// Ids, categories and zones stay loosely typed here so the parser can report
/// which row is wrong instead of a bare YAML type error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOverlay {
    pub id: i64,

    /// Render group, without the `_overlays` suffix
    pub collection: String,

    pub render_name: String,

    /// Label shown in menus; defaults to the render name
    #[serde(default)]
    pub display_name: Option<String>,

    /// `tattoo`, `badge` or `hairstyle` (plurals accepted)
    pub category: String,

    /// Body zone, tattoos only
    #[serde(default)]
    pub zone: Option<String>,
}
