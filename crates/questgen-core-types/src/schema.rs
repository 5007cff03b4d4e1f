//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";
pub const FIELD_STATE: &str = "state";

// Quest identity
pub const FIELD_REALM: &str = "realm";
pub const FIELD_THEME: &str = "theme";
pub const FIELD_DAY: &str = "day";

// Loot generation
pub const FIELD_TARGET_AMOUNT: &str = "target_amount";
pub const FIELD_TOTAL_VALUE: &str = "total_value";
pub const FIELD_LOOT_COUNT: &str = "loot_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
