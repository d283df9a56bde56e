//! Rostered and unrostered overtime pay.
//!
//! Rostered overtime is entered pre-tiered by the roster (hours at 150% and
//! hours at 200%); unrostered overtime is claimed by the employee and paid
//! at the tier-two rate. All multipliers come from configuration.

use rust_decimal::Decimal;

use crate::config::OvertimeMultipliers;
use crate::models::{PayCategory, PayLine};

/// The overtime pay lines for a fortnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimeResult {
    /// Rostered overtime at the tier-one (150%) rate.
    pub tier_one: PayLine,
    /// Rostered overtime at the tier-two (200%) rate.
    pub tier_two: PayLine,
    /// Unrostered overtime claimed by the employee, at 200%.
    pub unrostered: PayLine,
}

/// Calculates overtime pay lines at the configured multipliers.
///
/// Lines are produced even for zero hours so the breakdown always carries
/// the full category table.
///
/// # Arguments
///
/// * `overtime_15_hours` - Rostered overtime hours at the tier-one rate
/// * `overtime_20_hours` - Rostered overtime hours at the tier-two rate
/// * `unrostered_hours` - Unrostered overtime hours claimed
/// * `base_rate` - The base hourly rate
/// * `multipliers` - Overtime multipliers from configuration
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_overtime;
/// use payroll_engine::config::OvertimeMultipliers;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let multipliers = OvertimeMultipliers {
///     tier_one: Decimal::from_str("1.5").unwrap(),
///     tier_two: Decimal::from_str("2.0").unwrap(),
///     unrostered: Decimal::from_str("2.0").unwrap(),
/// };
///
/// let result = calculate_overtime(
///     Decimal::from(2),
///     Decimal::from(12),
///     Decimal::ZERO,
///     Decimal::from_str("45.85395").unwrap(),
///     &multipliers,
/// );
///
/// assert_eq!(result.tier_one.amount, Decimal::from_str("137.561850").unwrap());
/// assert_eq!(result.tier_two.amount, Decimal::from_str("1100.49480").unwrap());
/// ```
pub fn calculate_overtime(
    overtime_15_hours: Decimal,
    overtime_20_hours: Decimal,
    unrostered_hours: Decimal,
    base_rate: Decimal,
    multipliers: &OvertimeMultipliers,
) -> OvertimeResult {
    let tier_one_rate = base_rate * multipliers.tier_one;
    let tier_two_rate = base_rate * multipliers.tier_two;
    let unrostered_rate = base_rate * multipliers.unrostered;

    OvertimeResult {
        tier_one: PayLine {
            category: PayCategory::Overtime150,
            hours: overtime_15_hours,
            rate: tier_one_rate,
            amount: overtime_15_hours * tier_one_rate,
        },
        tier_two: PayLine {
            category: PayCategory::Overtime200,
            hours: overtime_20_hours,
            rate: tier_two_rate,
            amount: overtime_20_hours * tier_two_rate,
        },
        unrostered: PayLine {
            category: PayCategory::UnrosteredOvertime,
            hours: unrostered_hours,
            rate: unrostered_rate,
            amount: unrostered_hours * unrostered_rate,
        },
    }
}
