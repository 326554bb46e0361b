//! Persisted overlay snapshot
//!
//! The snapshot is the only durable form of the active collection: an ordered
//! `id -> apply_count` mapping with ids narrowed to `u16` and counts to `u8`.
//!
//! ## Wire format
//!
//! A JSON object keyed by decimal id, in collection order:
//!
//! ```json
//! {"5": 3, "12": 1}
//! ```
//!
//! Deserialization keeps document order. A repeated key overwrites the earlier
//! count in place, so a snapshot never holds the same id twice.

use std::fmt;

use serde::de::{self, MapAccess, Unexpected, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{OverlayEntry, OverlayId};

/// Ordered `id -> apply_count` mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlaySnapshot {
    entries: Vec<(OverlayId, u8)>,
}

impl OverlaySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of an active collection, in collection order
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a OverlayEntry>) -> Self {
        let mut snapshot = Self::new();
        for entry in entries {
            snapshot.insert(entry.id, entry.apply_count.get());
        }
        snapshot
    }

    /// Set the count for `id`, keeping its position if already present
    pub fn insert(&mut self, id: OverlayId, count: u8) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(slot) => slot.1 = count,
            None => self.entries.push((id, count)),
        }
    }

    pub fn get(&self, id: OverlayId) -> Option<u8> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OverlayId, u8)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(OverlayId, u8)> for OverlaySnapshot {
    fn from_iter<I: IntoIterator<Item = (OverlayId, u8)>>(iter: I) -> Self {
        let mut snapshot = Self::new();
        for (id, count) in iter {
            snapshot.insert(id, count);
        }
        snapshot
    }
}

impl Serialize for OverlaySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (id, count) in &self.entries {
            map.serialize_entry(&id.get(), count)?;
        }
        map.end()
    }
}

/// Map key that accepts both integer and decimal-string ids
///
/// JSON object keys arrive as strings, but buffered deserialization (for
/// example inside a flattened record) does not coerce them to integers.
struct SnapshotKey(u16);

struct SnapshotKeyVisitor;

impl<'de> Visitor<'de> for SnapshotKeyVisitor {
    type Value = SnapshotKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a u16 overlay id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u16::try_from(v)
            .map(SnapshotKey)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u16::try_from(v)
            .map(SnapshotKey)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<u16>()
            .map(SnapshotKey)
            .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for SnapshotKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnapshotKeyVisitor)
    }
}

struct SnapshotVisitor;

impl<'de> Visitor<'de> for SnapshotVisitor {
    type Value = OverlaySnapshot;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of u16 overlay ids to u8 apply counts")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut snapshot = OverlaySnapshot::new();
        while let Some((SnapshotKey(id), count)) = access.next_entry::<SnapshotKey, u8>()? {
            snapshot.insert(OverlayId::new(id), count);
        }
        Ok(snapshot)
    }
}

impl<'de> Deserialize<'de> for OverlaySnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SnapshotVisitor)
    }
}
