use serde::{Deserialize, Serialize};

use crate::errors::{OverlayError, Result};

/// Catalog identifier of an overlay
///
/// Persisted snapshots store ids as unsigned 16-bit keys, so the id type is
/// `u16` and wider values are rejected at the conversion boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverlayId(u16);

impl OverlayId {
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for OverlayId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl TryFrom<i64> for OverlayId {
    type Error = OverlayError;

    fn try_from(value: i64) -> Result<Self> {
        u16::try_from(value)
            .map(Self)
            .map_err(|_| OverlayError::IdOutOfRange { value })
    }
}

impl std::fmt::Display for OverlayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many times an overlay is stacked during render, always in `1..=9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ApplyCount(u8);

impl ApplyCount {
    pub const MIN: ApplyCount = ApplyCount(1);
    pub const MAX: ApplyCount = ApplyCount(9);

    /// Create a count, rejecting values outside `1..=9`
    ///
    /// # Errors
    ///
    /// Returns `ApplyCountOutOfRange` for 0 or anything above 9.
    pub fn new(count: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&count) {
            Ok(Self(count))
        } else {
            Err(OverlayError::ApplyCountOutOfRange {
                value: i64::from(count),
            })
        }
    }

    /// Create a count, pulling out-of-range values to the nearest bound
    pub fn clamped(count: u8) -> Self {
        Self(count.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next count up, saturating at `MAX`
    pub fn incremented(self) -> Self {
        if self.is_max() {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }
}

impl Default for ApplyCount {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for ApplyCount {
    type Error = OverlayError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ApplyCount> for u8 {
    fn from(count: ApplyCount) -> Self {
        count.0
    }
}

impl std::fmt::Display for ApplyCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One active overlay on the character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayEntry {
    pub id: OverlayId,
    pub apply_count: ApplyCount,
}

impl OverlayEntry {
    /// New entry applied once
    pub fn new(id: OverlayId) -> Self {
        Self {
            id,
            apply_count: ApplyCount::MIN,
        }
    }

    pub fn with_count(id: OverlayId, apply_count: ApplyCount) -> Self {
        Self { id, apply_count }
    }
}

/// Host handle of the character the decorations are painted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterHandle(pub i32);
