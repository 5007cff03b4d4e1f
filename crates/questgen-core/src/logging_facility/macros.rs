//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use questgen_core::log_op_start;
/// log_op_start!("insert_quest");
/// log_op_start!("insert_quest", realm = "Arendale");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = questgen_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = questgen_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use questgen_core::log_op_end;
/// log_op_end!("insert_quest", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = questgen_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = questgen_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `QgError`.
///
/// # Example
///
/// ```
/// # use questgen_core::{log_op_error, errors::QuestError};
/// let err = QuestError::UnknownRealm { realm: "Narnia".to_string() };
/// log_op_error!("validate", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::QgError;
        let qg_err: QgError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = questgen_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?qg_err.kind(),
            err_code = qg_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::QgError;
        let qg_err: QgError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = questgen_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?qg_err.kind(),
            err_code = qg_err.code(),
            $($field)*
        );
    }};
}
