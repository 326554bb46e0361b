//! Overlay Core - active overlay collection for one character
//!
//! This crate owns the rules for which decorative overlays (tattoos, badges,
//! hairstyle overlays) are applied to a character, how often each one is
//! stacked, how the set is persisted, and how it is painted back on:
//! - Overlay ids, apply counts and catalog metadata
//! - `OverlayCatalog`, `DecorationRenderer` and `SnapshotSink` collaborator traits
//! - `CollectionManager` with add/remove/bulk-removal/load/save/render
//! - Menu-description export for the UI layer
//! - Structured errors and logging

pub use overlay_core_types as types;

pub mod apply;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod manager;
pub mod menus;
pub mod model;
pub mod ops;
pub mod persistence;
pub mod render;
pub mod shared;
pub mod snapshot;

// Re-export commonly used types
pub use catalog::{InMemoryCatalog, OverlayCatalog};
pub use commands::{Command, CommandOutcome};
pub use config::ManagerConfig;
pub use errors::{ExError, ExErrorKind, OverlayError, Result};
pub use manager::CollectionManager;
pub use model::{
    ApplyCount, CatalogEntry, CharacterHandle, OverlayCategory, OverlayEntry, OverlayId,
    OverlayZone,
};
pub use persistence::{PedData, SnapshotSink};
pub use render::{DecorationRenderer, RenderPolicy, RenderReport};
pub use shared::SharedCollectionManager;
pub use snapshot::OverlaySnapshot;
