//! Weekend and public holiday penalty pay.
//!
//! All weekend hours attract the weekend multiplier and all public holiday
//! hours the public holiday multiplier, regardless of when in the fortnight
//! they fall. Multipliers come from configuration.

use rust_decimal::Decimal;

use crate::config::PenaltyMultipliers;
use crate::models::{PayCategory, PayLine};

/// The penalty pay lines for a fortnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyResult {
    /// Weekend hours at the weekend multiplier.
    pub weekend: PayLine,
    /// Public holiday hours at the public holiday multiplier.
    pub public_holiday: PayLine,
}

/// Calculates weekend and public holiday pay lines.
///
/// # Arguments
///
/// * `weekend_hours` - Hours worked on Saturday or Sunday
/// * `public_holiday_hours` - Hours worked on public holidays
/// * `base_rate` - The base hourly rate
/// * `penalties` - Penalty multipliers from configuration
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_penalty_pay;
/// use payroll_engine::config::PenaltyMultipliers;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let penalties = PenaltyMultipliers {
///     weekend: Decimal::from_str("1.5").unwrap(),
///     public_holiday: Decimal::from_str("2.5").unwrap(),
/// };
///
/// let result = calculate_penalty_pay(
///     Decimal::from(8),
///     Decimal::from(4),
///     Decimal::from(40),
///     &penalties,
/// );
///
/// assert_eq!(result.weekend.amount, Decimal::from(480));
/// assert_eq!(result.public_holiday.amount, Decimal::from(400));
/// ```
pub fn calculate_penalty_pay(
    weekend_hours: Decimal,
    public_holiday_hours: Decimal,
    base_rate: Decimal,
    penalties: &PenaltyMultipliers,
) -> PenaltyResult {
    let weekend_rate = base_rate * penalties.weekend;
    let public_holiday_rate = base_rate * penalties.public_holiday;

    PenaltyResult {
        weekend: PayLine {
            category: PayCategory::Weekend,
            hours: weekend_hours,
            rate: weekend_rate,
            amount: weekend_hours * weekend_rate,
        },
        public_holiday: PayLine {
            category: PayCategory::PublicHoliday,
            hours: public_holiday_hours,
            rate: public_holiday_rate,
            amount: public_holiday_hours * public_holiday_rate,
        },
    }
}
