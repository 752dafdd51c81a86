pub mod calendar;

pub use calendar::{add_months, days_between, month_key, normalize_month};
