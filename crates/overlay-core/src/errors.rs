use overlay_core_types::SessionId;
use thiserror::Error;

/// Result type alias using OverlayError
pub type Result<T> = std::result::Result<T, OverlayError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and structured log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    OutOfRange,

    // Collaborators
    Serialization,
    Persistence,
    Render,
    Io,

    // Runtime
    Concurrency,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::OutOfRange => "ERR_OUT_OF_RANGE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Render => "ERR_RENDER",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Concurrency => "ERR_CONCURRENCY",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// (operation, overlay id, session) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    overlay_id: Option<u16>,
    session_id: Option<SessionId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            overlay_id: None,
            session_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add overlay ID context
    pub fn with_overlay_id(mut self, id: u16) -> Self {
        self.overlay_id = Some(id);
        self
    }

    /// Add session context
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the overlay ID context, if any
    pub fn overlay_id(&self) -> Option<u16> {
        self.overlay_id
    }

    /// Get the session context, if any
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(overlay_id) = self.overlay_id {
            write!(f, " (overlay_id: {})", overlay_id)?;
        }
        if let Some(session_id) = &self.session_id {
            write!(f, " (session_id: {})", session_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for overlay collection operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OverlayError {
    // ===== Range Errors =====
    /// Overlay id does not fit the persisted 16-bit id range
    #[error("Overlay id out of range: {value}")]
    IdOutOfRange { value: i64 },

    /// Apply count outside the 1..=9 stacking range
    #[error("Apply count out of range: {value} (expected 1..=9)")]
    ApplyCountOutOfRange { value: i64 },

    // ===== Validation Errors =====
    /// Unknown overlay category name
    #[error("Invalid overlay category: {name}")]
    InvalidCategory { name: String },

    /// Unknown body-part zone name
    #[error("Invalid overlay zone: {name}")]
    InvalidZone { name: String },

    /// Catalog built with the same id twice
    #[error("Duplicate catalog entry: {overlay_id}")]
    DuplicateCatalogEntry { overlay_id: u16 },

    // ===== Collaborator Errors =====
    /// Snapshot or character record could not be (de)serialized
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Persistence collaborator rejected the snapshot
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    /// Rendering collaborator failed
    #[error("Render error: {message}")]
    Render { message: String },

    // ===== Runtime Errors =====
    /// Shared manager lock was poisoned by a panicking holder
    #[error("Concurrency error: {message}")]
    Concurrency { message: String },
}

impl From<OverlayError> for ExError {
    fn from(err: OverlayError) -> Self {
        match err {
            OverlayError::IdOutOfRange { value } => ExError::new(ExErrorKind::OutOfRange)
                .with_message(format!("Overlay id {} does not fit in u16", value)),

            OverlayError::ApplyCountOutOfRange { value } => {
                ExError::new(ExErrorKind::OutOfRange)
                    .with_message(format!("Apply count {} is outside 1..=9", value))
            }

            OverlayError::InvalidCategory { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Unknown overlay category '{}'", name)),

            OverlayError::InvalidZone { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Unknown overlay zone '{}'", name)),

            OverlayError::DuplicateCatalogEntry { overlay_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_overlay_id(overlay_id)
                    .with_message("Catalog already contains this id")
            }

            OverlayError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            OverlayError::Persistence { message } => {
                ExError::new(ExErrorKind::Persistence).with_message(message)
            }

            OverlayError::Render { message } => {
                ExError::new(ExErrorKind::Render).with_message(message)
            }

            OverlayError::Concurrency { message } => {
                ExError::new(ExErrorKind::Concurrency).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to OverlayError
impl From<serde_json::Error> for OverlayError {
    fn from(err: serde_json::Error) -> Self {
        OverlayError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (ExErrorKind::OutOfRange, "ERR_OUT_OF_RANGE"),
            (ExErrorKind::Persistence, "ERR_PERSISTENCE"),
            (ExErrorKind::Render, "ERR_RENDER"),
            (ExErrorKind::Concurrency, "ERR_CONCURRENCY"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_id_out_of_range_maps_to_out_of_range() {
        let ex: ExError = OverlayError::IdOutOfRange { value: 70_000 }.into();
        assert_eq!(ex.kind(), ExErrorKind::OutOfRange);
        assert!(ex.message().contains("70000"));
    }

    #[test]
    fn test_duplicate_catalog_entry_carries_overlay_id() {
        let ex: ExError = OverlayError::DuplicateCatalogEntry { overlay_id: 12 }.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidInput);
        assert_eq!(ex.overlay_id(), Some(12));
    }

    #[test]
    fn test_display_includes_code_op_and_session() {
        let session = SessionId::from_string("s-1".to_string());
        let err = ExError::new(ExErrorKind::Persistence)
            .with_op("save_overlays")
            .with_session_id(session)
            .with_message("disk full");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_PERSISTENCE]"));
        assert!(rendered.contains("save_overlays"));
        assert!(rendered.contains("disk full"));
        assert!(rendered.contains("s-1"));
    }

    #[test]
    fn test_serde_json_error_converts_to_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let overlay_err: OverlayError = err.into();
        assert!(matches!(overlay_err, OverlayError::Serialization { .. }));
    }
}
