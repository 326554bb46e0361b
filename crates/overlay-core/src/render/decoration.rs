use crate::errors::Result;
use crate::model::{CatalogEntry, CharacterHandle};

use super::hash::joaat;

/// Suffix appended to a catalog collection name to form its render group
pub const COLLECTION_SUFFIX: &str = "_overlays";

/// Hashed (collection, decoration) pair the native layer paints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationKey {
    pub collection: u32,
    pub name: u32,
}

impl DecorationKey {
    pub fn new(collection: u32, name: u32) -> Self {
        Self { collection, name }
    }

    /// Key for a catalog entry: `hash("<collection>_overlays")`, `hash(render_name)`
    pub fn for_entry(entry: &CatalogEntry) -> Self {
        let collection = format!("{}{}", entry.collection, COLLECTION_SUFFIX);
        Self {
            collection: joaat(&collection),
            name: joaat(&entry.render_name),
        }
    }
}

/// Native rendering capability
///
/// The manager clears the character once per pass and then applies each
/// decoration once per stack repetition.
pub trait DecorationRenderer {
    /// Remove every decoration currently painted on `character`
    ///
    /// # Errors
    ///
    /// Implementations return `OverlayError::Render` when the host rejects the call.
    fn clear_decorations(&mut self, character: CharacterHandle) -> Result<()>;

    /// Paint one decoration on `character`
    ///
    /// # Errors
    ///
    /// Implementations return `OverlayError::Render` when the host rejects the call.
    fn apply_decoration(&mut self, character: CharacterHandle, key: DecorationKey) -> Result<()>;
}

/// One call received by a `RecordingRenderer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCall {
    Clear(CharacterHandle),
    Apply(CharacterHandle, DecorationKey),
}

/// Renderer that records calls instead of painting
///
/// Used by tests and by the CLI, which prints the recorded calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Keys applied since the last clear
    pub fn current_decorations(&self) -> Vec<DecorationKey> {
        let last_clear = self
            .calls
            .iter()
            .rposition(|call| matches!(call, RenderCall::Clear(_)))
            .map_or(0, |idx| idx + 1);
        self.calls[last_clear..]
            .iter()
            .filter_map(|call| match call {
                RenderCall::Apply(_, key) => Some(*key),
                RenderCall::Clear(_) => None,
            })
            .collect()
    }

    /// Number of clear calls, one per render pass
    pub fn pass_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::Clear(_)))
            .count()
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl DecorationRenderer for RecordingRenderer {
    fn clear_decorations(&mut self, character: CharacterHandle) -> Result<()> {
        self.calls.push(RenderCall::Clear(character));
        Ok(())
    }

    fn apply_decoration(&mut self, character: CharacterHandle, key: DecorationKey) -> Result<()> {
        self.calls.push(RenderCall::Apply(character, key));
        Ok(())
    }
}
