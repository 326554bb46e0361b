use crate::model::{ApplyCount, OverlayEntry, OverlayId};
use crate::snapshot::OverlaySnapshot;

/// Ordered set of active overlays, unique by id
///
/// Insertion order is kept: it decides render order and keeps removal stable.
/// Not thread-safe on its own; `CollectionManager` is the single owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCollection {
    entries: Vec<OverlayEntry>,
}

impl ActiveCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[OverlayEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: OverlayId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: OverlayId) -> Option<&OverlayEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn apply_count(&self, id: OverlayId) -> Option<ApplyCount> {
        self.get(id).map(|entry| entry.apply_count)
    }

    fn position(&self, id: OverlayId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Append an entry with count 1 unless `id` is already active
    ///
    /// Returns `false` when the id was already present (nothing changed).
    pub fn insert_new(&mut self, id: OverlayId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.entries.push(OverlayEntry::new(id));
        true
    }

    /// Put `entry` in the collection without merging counts
    ///
    /// An id that is already active keeps its position and takes the new count.
    pub fn insert(&mut self, entry: OverlayEntry) {
        match self.position(entry.id) {
            Some(idx) => self.entries[idx].apply_count = entry.apply_count,
            None => self.entries.push(entry),
        }
    }

    /// Increment the count of an active entry, saturating at 9
    ///
    /// Returns the resulting count, or `None` if `id` is not active.
    pub fn bump(&mut self, id: OverlayId) -> Option<ApplyCount> {
        let idx = self.position(id)?;
        let entry = &mut self.entries[idx];
        entry.apply_count = entry.apply_count.incremented();
        Some(entry.apply_count)
    }

    /// Remove an entry, keeping the order of the rest
    pub fn remove(&mut self, id: OverlayId) -> Option<OverlayEntry> {
        let idx = self.position(id)?;
        Some(self.entries.remove(idx))
    }

    /// Keep only entries matching `keep`; returns how many were removed
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&OverlayEntry) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(keep);
        before - self.entries.len()
    }

    pub fn to_snapshot(&self) -> OverlaySnapshot {
        OverlaySnapshot::from_entries(&self.entries)
    }
}
