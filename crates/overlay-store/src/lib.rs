//! Overlay Store - filesystem adapters for the overlay collection
//!
//! Provides:
//! - Catalog seed format v0 (YAML) parser with validation
//! - File-backed character record store implementing `SnapshotSink`
//! - Atomic write primitive shared by the writers

pub mod atomic;
pub mod character_store;
pub mod errors;
pub mod seed;

// Re-export key types
pub use character_store::FsCharacterStore;
pub use errors::Result;
pub use seed::{load_catalog_file, parse_catalog_str};
