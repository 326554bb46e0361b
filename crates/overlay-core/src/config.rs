//! Manager configuration
//!
//! Loaded from TOML by hosts; every field has a default so an empty file (or
//! no file) yields the compatible behavior.
//!
//! ```toml
//! render_policy = "skip_missing"
//! logging = "production"
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{OverlayError, Result};
use crate::logging_facility::Profile;
use crate::render::RenderPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManagerConfig {
    /// Behavior on a catalog miss during render
    pub render_policy: RenderPolicy,

    /// Logging profile the host should initialize with
    pub logging: Profile,
}

impl ManagerConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed TOML or unknown keys.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| OverlayError::Serialization {
            message: format!("Invalid manager config: {}", e),
        })
    }
}
