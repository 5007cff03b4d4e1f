//! Error handling for questgen-store
//!
//! Wraps questgen-core QgError with store-specific helpers

use questgen_core::errors::{QgError, QgErrorKind};

/// Result type alias using QgError
pub type Result<T> = std::result::Result<T, QgError>;

/// Create a database error from rusqlite::Error, tagged with the failing operation
pub fn store_error(op: &str, err: rusqlite::Error) -> QgError {
    QgError::new(QgErrorKind::Persistence)
        .with_op(op.to_string())
        .with_message(err.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> QgError {
    store_error("sqlite", err)
}

/// Create a connection error for an account database
pub fn connection_error(path: &str, reason: &str) -> QgError {
    QgError::new(QgErrorKind::Connection)
        .with_op("connect")
        .with_entity_id(path.to_string())
        .with_message(reason.to_string())
}

/// Create a reference data validation error
pub fn reference_validation(reason: &str) -> QgError {
    QgError::new(QgErrorKind::InvalidReferenceData)
        .with_op("reference_parse")
        .with_message(reason.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> QgError {
    QgError::new(QgErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
