#![allow(clippy::unwrap_used, clippy::expect_used)]

use dnevnik_core::errors::{ExErrorKind, RegisterError};
use dnevnik_core::logging_facility::test_capture::init_test_capture;
use dnevnik_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_COMPONENT, FIELD_DURATION_MS, FIELD_ERR_CODE,
    FIELD_ERR_KIND, FIELD_ERR_MESSAGE, FIELD_EVENT, FIELD_OP, FIELD_RECORD_ID, FIELD_RECORD_KIND,
};
use dnevnik_core::{log_op_end, log_op_error, log_op_start};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "logging_test_start";

    log_op_start!(op_name);

    let starts = capture.find(op_name, EVENT_START);
    assert_eq!(starts.len(), 1);
    assert!(starts[0]
        .component
        .as_deref()
        .unwrap()
        .contains("logging_facility_tests"));
}

#[test]
fn test_log_op_end_macro_records_duration() {
    let capture = init_test_capture();
    let op_name = "logging_test_end";

    log_op_end!(op_name, duration_ms = 42);

    let ends = capture.find(op_name, EVENT_END);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].fields.get(FIELD_DURATION_MS), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "logging_test_error";

    let err = RegisterError::QueryFailed {
        message: "no such table: students".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let errors = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].fields.get(FIELD_ERR_CODE).map(String::as_str),
        Some(ExErrorKind::QueryFailed.code())
    );
    assert_eq!(
        errors[0].fields.get(FIELD_ERR_MESSAGE).map(String::as_str),
        Some("no such table: students")
    );
}

#[test]
fn test_extra_fields_are_captured() {
    let capture = init_test_capture();
    let op_name = "logging_test_fields";

    log_op_start!(op_name, record_kind = "teacher", record_id = 5);

    let starts = capture.find(op_name, EVENT_START);
    assert_eq!(starts.len(), 1);
    assert_eq!(starts[0].fields.get(FIELD_RECORD_KIND), Some(&"teacher".to_string()));
    assert_eq!(starts[0].fields.get(FIELD_RECORD_ID), Some(&"5".to_string()));
}

#[test]
fn test_lifecycle_events_use_schema_field_keys() {
    let capture = init_test_capture();
    let op_name = "logging_test_schema_keys";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 1);
    log_op_error!(
        op_name,
        RegisterError::QueryFailed {
            message: "locked".to_string()
        },
        duration_ms = 2
    );

    assert_eq!(capture.count_for_op(op_name), 3);
    for event in capture.events().iter().filter(|e| e.op.as_deref() == Some(op_name)) {
        for key in [FIELD_COMPONENT, FIELD_OP, FIELD_EVENT] {
            assert!(event.fields.contains_key(key), "missing {} in {:?}", key, event);
        }
    }

    let end = &capture.find(op_name, EVENT_END)[0];
    assert!(end.fields.contains_key(FIELD_DURATION_MS));

    let error = &capture.find(op_name, EVENT_END_ERROR)[0];
    assert_eq!(error.level, tracing::Level::ERROR);
    for key in [FIELD_DURATION_MS, FIELD_ERR_KIND, FIELD_ERR_CODE, FIELD_ERR_MESSAGE] {
        assert!(error.fields.contains_key(key), "missing {} in {:?}", key, error);
    }
}
