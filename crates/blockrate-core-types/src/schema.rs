//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Comparison identifiers
pub const FIELD_BLOCK_TYPE: &str = "block_type";

// Score fields
pub const FIELD_TOTAL_RATE: &str = "total_rate";
pub const FIELD_INDEX_RATE: &str = "index_rate";

// Collection sizes
pub const FIELD_PROPERTIES_LEN: &str = "properties_len";
pub const FIELD_EVENTS_LEN: &str = "events_len";
pub const FIELD_PERMISSIONS_LEN: &str = "permissions_len";
pub const FIELD_ARTIFACTS_LEN: &str = "artifacts_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
