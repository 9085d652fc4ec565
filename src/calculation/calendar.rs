//! Calendar helpers.
//!
//! This module determines how many days a calendar month has, which is the
//! divisor for every prorated amount.

use chrono::{Months, NaiveDate};

use crate::models::Month;

/// Returns the number of days in a month of the Gregorian calendar.
///
/// Returns `None` when the year is outside the range chrono can represent.
///
/// # Example
///
/// ```
/// use cpc_salary_engine::calculation::days_in_month;
/// use cpc_salary_engine::models::Month;
///
/// assert_eq!(days_in_month(Month::February, 2024), Some(29));
/// assert_eq!(days_in_month(Month::February, 2025), Some(28));
/// assert_eq!(days_in_month(Month::April, 2025), Some(30));
/// ```
pub fn days_in_month(month: Month, year: i32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month.number(), 1)?;
    let next = first.checked_add_months(Months::new(1))?;
    u32::try_from((next - first).num_days()).ok()
}
