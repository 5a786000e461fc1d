//! Lifecycle logging macros
//!
//! A register operation emits one `start` event and then exactly one of `end`
//! or `end_error`. All three go through [`__log_op_event!`], which writes the
//! fields every lifecycle event shares. Their keys are the `FIELD_*` names in
//! [`crate::schema`]; `tracing` needs them as identifiers, so the capture tests
//! pin the two together.

/// Emit one lifecycle event with the shared `component`/`op`/`event` fields
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr, $($field:tt)*) => {
        tracing::event!(
            tracing::Level::$level,
            component = module_path!(),
            op = $op,
            event = $event,
            $($field)*
        )
    };
}

/// Log the start of an operation
///
/// ```
/// # use dnevnik_core::log_op_start;
/// log_op_start!("list_all");
/// log_op_start!("delete_record", record_id = 5);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            INFO,
            $op,
            $crate::schema::EVENT_START,
            $($($field)*)?
        )
    };
}

/// Log the successful end of an operation; `duration_ms` is required
///
/// ```
/// # use dnevnik_core::log_op_end;
/// log_op_end!("list_all", duration_ms = 3, record_count = 2);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            INFO,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        )
    };
}

/// Log the failed end of an operation
///
/// `$err` is anything convertible into [`ExError`](crate::errors::ExError);
/// the event carries its kind, stable code and message.
///
/// ```
/// # use dnevnik_core::{log_op_error, errors::RegisterError};
/// let err = RegisterError::QueryFailed { message: "disk I/O error".to_string() };
/// log_op_error!("list_all", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            ERROR,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($($field)*)?
        )
    }};
}
