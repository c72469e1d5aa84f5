//! Business-day calendar arithmetic.
//!
//! The working week is fixed Mon–Fri; holiday calendars are a non-goal.
//! All scheduling math in the engine goes through these functions.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use wp_core::error::ValidationErrors;
use wp_core::{WpError, WpResult};

/// Whether a date falls Mon–Fri.
pub fn is_business_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `n` business days from `start`.
///
/// `n = 0` returns `start` unchanged, even when it falls on a weekend;
/// callers are responsible for supplying a sane start. For `n > 0` the walk
/// advances one calendar day at a time, counting only Mon–Fri, and returns
/// the nth such day. Negative offsets are rejected.
pub fn add_business_days(start: NaiveDate, n: i64) -> WpResult<NaiveDate> {
    if n < 0 {
        let mut errors = ValidationErrors::new();
        errors.add_base(format!("business day offset must be non-negative, got {n}"));
        return Err(WpError::InvalidInput(errors));
    }

    let mut current = start;
    let mut counted = 0;
    while counted < n {
        current = current + Duration::days(1);
        if is_business_day(current) {
            counted += 1;
        }
    }
    Ok(current)
}

/// The first business day strictly after `date`.
pub fn next_business_day(date: NaiveDate) -> NaiveDate {
    let mut current = date + Duration::days(1);
    while !is_business_day(current) {
        current = current + Duration::days(1);
    }
    current
}

/// Inclusive count of business days between `start` and `end`.
///
/// Returns 0 when `end` precedes `start`.
pub fn business_days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let mut count = 0;
    let mut current = start;
    while current <= end {
        if is_business_day(current) {
            count += 1;
        }
        current = current + Duration::days(1);
    }
    count
}
