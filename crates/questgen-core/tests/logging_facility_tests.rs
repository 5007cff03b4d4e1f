#![allow(clippy::unwrap_used, clippy::expect_used)]

use questgen_core::errors::{QgErrorKind, QuestError};
use questgen_core::logging_facility::test_capture::init_test_capture;
use questgen_core::{log_op_end, log_op_error, log_op_start};
use questgen_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, realm = "Arendale");

    let found = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name)
            && e.event.as_deref() == Some(EVENT_START)
            && e.fields.get("realm").map(String::as_str) == Some("Arendale")
    });
    assert_eq!(found, 1);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .expect("end event captured");
    assert_eq!(end_event.fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = QuestError::InvalidSeed { seed: 2.0 };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event captured");
    assert_eq!(
        error_event.fields.get("err_code").map(String::as_str),
        Some(QgErrorKind::InvalidSeed.code())
    );
    assert_eq!(error_event.level, tracing::Level::ERROR);
}
