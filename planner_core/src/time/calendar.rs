//! Calendar helpers for day- and month-granularity scheduling.
//!
//! The simulation advances one calendar day at a time and the capacity-curve
//! grid is month-based; sub-day time is not modeled anywhere.

use chrono::{Datelike, NaiveDate};

/// First day of the month containing `date`.
pub fn normalize_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("first of an existing month is always valid")
}

/// First day of the month `amount` months after (or before, if negative) the
/// month containing `date`.
pub fn add_months(date: NaiveDate, amount: i32) -> NaiveDate {
    let months0 = date.year() * 12 + date.month() as i32 - 1 + amount;
    let year = months0.div_euclid(12);
    let month = months0.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("first of an existing month is always valid")
}

/// Stable `YYYY-MM` key for the month containing `date`.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Signed whole-day distance from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
