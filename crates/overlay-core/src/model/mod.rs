pub mod catalog_entry;
pub mod overlay;

pub use catalog_entry::{CatalogEntry, OverlayCategory, OverlayZone};
pub use overlay::{ApplyCount, CharacterHandle, OverlayEntry, OverlayId};
