use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::overlay::OverlayId;
use crate::errors::OverlayError;

/// Catalog table an overlay belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayCategory {
    Tattoo,
    Badge,
    Hairstyle,
}

impl OverlayCategory {
    pub const ALL: [OverlayCategory; 3] = [
        OverlayCategory::Tattoo,
        OverlayCategory::Badge,
        OverlayCategory::Hairstyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayCategory::Tattoo => "tattoo",
            OverlayCategory::Badge => "badge",
            OverlayCategory::Hairstyle => "hairstyle",
        }
    }
}

impl std::fmt::Display for OverlayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayCategory {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tattoo" | "tattoos" => Ok(OverlayCategory::Tattoo),
            "badge" | "badges" => Ok(OverlayCategory::Badge),
            "hairstyle" | "hairstyles" | "hair" => Ok(OverlayCategory::Hairstyle),
            _ => Err(OverlayError::InvalidCategory {
                name: s.to_string(),
            }),
        }
    }
}

/// Body-part zone of a tattoo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayZone {
    Torso,
    Head,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    Unknown,
    None,
}

impl OverlayZone {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlayZone::Torso => "torso",
            OverlayZone::Head => "head",
            OverlayZone::LeftArm => "left_arm",
            OverlayZone::RightArm => "right_arm",
            OverlayZone::LeftLeg => "left_leg",
            OverlayZone::RightLeg => "right_leg",
            OverlayZone::Unknown => "unknown",
            OverlayZone::None => "none",
        }
    }
}

impl std::fmt::Display for OverlayZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverlayZone {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let zone = match normalized.trim_start_matches("zone_") {
            "torso" => OverlayZone::Torso,
            "head" => OverlayZone::Head,
            "left_arm" => OverlayZone::LeftArm,
            "right_arm" => OverlayZone::RightArm,
            "left_leg" => OverlayZone::LeftLeg,
            "right_leg" => OverlayZone::RightLeg,
            "unknown" => OverlayZone::Unknown,
            "none" => OverlayZone::None,
            _ => {
                return Err(OverlayError::InvalidZone {
                    name: s.to_string(),
                })
            }
        };
        Ok(zone)
    }
}

/// Read-only catalog metadata for one overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: OverlayId,

    /// Render group, e.g. `mpbeach`
    pub collection: String,

    /// Name hashed into the decoration key
    pub render_name: String,

    pub display_name: String,

    pub category: OverlayCategory,

    /// Only tattoos carry a zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<OverlayZone>,
}

impl CatalogEntry {
    pub fn new(
        id: OverlayId,
        collection: impl Into<String>,
        render_name: impl Into<String>,
        display_name: impl Into<String>,
        category: OverlayCategory,
    ) -> Self {
        Self {
            id,
            collection: collection.into(),
            render_name: render_name.into(),
            display_name: display_name.into(),
            category,
            zone: None,
        }
    }

    pub fn with_zone(mut self, zone: OverlayZone) -> Self {
        self.zone = Some(zone);
        self
    }

    /// True for tattoos painted on `zone`
    pub fn is_tattoo_in_zone(&self, zone: OverlayZone) -> bool {
        self.category == OverlayCategory::Tattoo && self.zone == Some(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_accepts_plurals() {
        assert_eq!("Tattoos".parse::<OverlayCategory>().unwrap(), OverlayCategory::Tattoo);
        assert_eq!("hair".parse::<OverlayCategory>().unwrap(), OverlayCategory::Hairstyle);
        assert!(matches!(
            "scars".parse::<OverlayCategory>(),
            Err(OverlayError::InvalidCategory { .. })
        ));
    }

    #[test]
    fn test_zone_from_str_accepts_native_names() {
        assert_eq!("ZONE_LEFT_ARM".parse::<OverlayZone>().unwrap(), OverlayZone::LeftArm);
        assert_eq!("right-leg".parse::<OverlayZone>().unwrap(), OverlayZone::RightLeg);
        assert!("elbow".parse::<OverlayZone>().is_err());
    }

    #[test]
    fn test_is_tattoo_in_zone() {
        let tattoo = CatalogEntry::new(OverlayId::new(1), "mpbeach", "tat_1", "Anchor", OverlayCategory::Tattoo)
            .with_zone(OverlayZone::Torso);
        let badge = CatalogEntry::new(OverlayId::new(2), "mpbusiness", "badge_1", "Star", OverlayCategory::Badge);

        assert!(tattoo.is_tattoo_in_zone(OverlayZone::Torso));
        assert!(!tattoo.is_tattoo_in_zone(OverlayZone::Head));
        assert!(!badge.is_tattoo_in_zone(OverlayZone::Torso));
    }

    #[test]
    fn test_zone_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&OverlayZone::LeftLeg).unwrap(), "\"left_leg\"");
    }
}
