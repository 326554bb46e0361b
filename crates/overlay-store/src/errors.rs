//! Error handling for overlay-store
//!
//! Wraps overlay-core ExError with store-specific helpers

use overlay_core::errors::{ExError, ExErrorKind, OverlayError};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create a seed validation error for one catalog entry
pub fn seed_entry_invalid(overlay_id: u16, reason: &str) -> ExError {
    seed_validation(reason).with_overlay_id(overlay_id)
}

/// Create a character record (de)serialization error
pub fn record_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Fold a store error into the core error the `SnapshotSink` contract returns
pub fn into_persistence(err: ExError) -> OverlayError {
    OverlayError::Persistence {
        message: err.to_string(),
    }
}
