//! Overlay catalog trait and the in-memory implementation
//!
//! The catalog is the read-only table mapping an overlay id to its metadata.
//! The collection manager only queries it: at render time to build decoration
//! keys, and during bulk removal to decide which entries belong to a category
//! or zone.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::errors::{OverlayError, Result};
use crate::model::{CatalogEntry, OverlayCategory, OverlayId};

/// Read-only overlay metadata lookup
///
/// Implementations must be deterministic and side-effect free.
pub trait OverlayCatalog {
    /// Look up an overlay's metadata
    fn lookup(&self, id: OverlayId) -> Option<&CatalogEntry>;

    /// All ids in one category table
    fn entries_by_category(&self, category: OverlayCategory) -> BTreeSet<OverlayId>;
}

impl<T: OverlayCatalog + ?Sized> OverlayCatalog for &T {
    fn lookup(&self, id: OverlayId) -> Option<&CatalogEntry> {
        (**self).lookup(id)
    }

    fn entries_by_category(&self, category: OverlayCategory) -> BTreeSet<OverlayId> {
        (**self).entries_by_category(category)
    }
}

impl<T: OverlayCatalog + ?Sized> OverlayCatalog for Arc<T> {
    fn lookup(&self, id: OverlayId) -> Option<&CatalogEntry> {
        (**self).lookup(id)
    }

    fn entries_by_category(&self, category: OverlayCategory) -> BTreeSet<OverlayId> {
        (**self).entries_by_category(category)
    }
}

/// Catalog held in memory, keyed by id
///
/// # Example
/// ```
/// use overlay_core::catalog::{InMemoryCatalog, OverlayCatalog};
/// use overlay_core::model::{CatalogEntry, OverlayCategory, OverlayId};
///
/// let catalog = InMemoryCatalog::new(vec![CatalogEntry::new(
///     OverlayId::new(1),
///     "mpbeach",
///     "MP_Bea_M_Back_000",
///     "Ship Arms",
///     OverlayCategory::Tattoo,
/// )])
/// .unwrap();
///
/// assert!(catalog.lookup(OverlayId::new(1)).is_some());
/// assert!(catalog.lookup(OverlayId::new(2)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    entries: BTreeMap<OverlayId, CatalogEntry>,
}

impl InMemoryCatalog {
    /// Build a catalog from entries
    ///
    /// # Errors
    ///
    /// Returns `DuplicateCatalogEntry` if two entries share an id.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for entry in entries {
            let id = entry.id;
            if map.insert(id, entry).is_some() {
                return Err(OverlayError::DuplicateCatalogEntry {
                    overlay_id: id.get(),
                });
            }
        }
        Ok(Self { entries: map })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in id order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Entries belonging to one render collection, in id order
    pub fn entries_in_collection<'a>(
        &'a self,
        collection: &'a str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries
            .values()
            .filter(move |entry| entry.collection == collection)
    }
}

impl OverlayCatalog for InMemoryCatalog {
    fn lookup(&self, id: OverlayId) -> Option<&CatalogEntry> {
        self.entries.get(&id)
    }

    fn entries_by_category(&self, category: OverlayCategory) -> BTreeSet<OverlayId> {
        self.entries
            .values()
            .filter(|entry| entry.category == category)
            .map(|entry| entry.id)
            .collect()
    }
}
