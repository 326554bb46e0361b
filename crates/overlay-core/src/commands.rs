//! Command types for driving a collection manager through one entry point
//!
//! Hosts translate menu actions and key binds into `Command`s and hand them to
//! `CollectionManager::apply`.

use crate::model::{OverlayCategory, OverlayId, OverlayZone};
use crate::render::RenderReport;
use crate::snapshot::OverlaySnapshot;

/// Every externally triggered manager operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add an overlay, or stack it once more if already active
    Add { overlay_id: OverlayId },

    /// Remove one overlay (persist and re-render immediately)
    Remove { overlay_id: OverlayId },

    /// Remove every active overlay from one catalog table
    RemoveCategory { category: OverlayCategory },

    /// Remove active tattoos painted on one body zone
    RemoveTattoosInZone { zone: OverlayZone },

    /// Re-render without changing anything
    Refresh,

    /// Persist the current collection without re-rendering
    Save,
}

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Single-entry mutation finished
    Applied,
    /// Bulk removal finished
    Removed { count: usize },
    /// Render pass finished
    Rendered(RenderReport),
    /// Snapshot handed to the sink
    Saved(OverlaySnapshot),
}
