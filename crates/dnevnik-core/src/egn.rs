//! Secondary identifier (egn) for persisted students
//!
//! The identifier is the first ten decimal digits of a tick count: the number
//! of 100-nanosecond intervals elapsed since 0001-01-01T00:00:00 in local
//! time. It is not unique and is never used for lookups.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Number of digits kept from the tick count
pub const EGN_LEN: usize = 10;

const TICKS_PER_SECOND: i64 = 10_000_000;
const TICKS_PER_MICRO: i64 = 10;

/// Tick count of `at` since 0001-01-01T00:00:00
pub fn ticks_since_epoch(at: NaiveDateTime) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN);
    let elapsed = at - epoch;

    // Nanoseconds overflow i64 after ~292 years; microseconds do not
    elapsed.num_microseconds().map_or_else(
        || elapsed.num_seconds() * TICKS_PER_SECOND,
        |micros| micros * TICKS_PER_MICRO,
    )
}

/// Derive an egn from a point in time
pub fn egn_at(at: NaiveDateTime) -> String {
    let digits = ticks_since_epoch(at).max(0).to_string();
    format!("{:0>width$}", &digits[..digits.len().min(EGN_LEN)], width = EGN_LEN)
}

/// Derive an egn from the current local time
pub fn generate() -> String {
    egn_at(Local::now().naive_local())
}
