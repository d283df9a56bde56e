//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type describing the fortnight a
//! calculation covers. The dates are reporting metadata only; no pay amount
//! depends on them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a fortnightly pay period with its date range.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 9, 20).unwrap()));
/// assert_eq!(period.days(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns the number of days in the period, inclusive of both ends.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
