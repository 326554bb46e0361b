//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_SESSION_ID: &str = "session_id";

// Entity identifiers
pub const FIELD_OVERLAY_ID: &str = "overlay_id";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_ZONE: &str = "zone";

// Collection sizes
pub const FIELD_ACTIVE_LEN: &str = "active_len";
pub const FIELD_REMOVED: &str = "removed";
pub const FIELD_DECORATIONS: &str = "decorations";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
