//! Superannuation guarantee contribution.
//!
//! Superannuation is an employer contribution calculated on gross pay. It
//! is reported alongside the breakdown but is never a deduction: net pay
//! does not change with the contribution rate.

use rust_decimal::Decimal;

/// Calculates the employer superannuation contribution on gross pay.
///
/// # Arguments
///
/// * `gross_pay` - Total payments for the fortnight
/// * `super_rate_percent` - Contribution rate in percent (e.g. 12.0)
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_superannuation;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let contribution = calculate_superannuation(
///     Decimal::from(5000),
///     Decimal::from(12),
/// );
/// assert_eq!(contribution, Decimal::from(600));
/// ```
pub fn calculate_superannuation(gross_pay: Decimal, super_rate_percent: Decimal) -> Decimal {
    gross_pay * super_rate_percent / Decimal::ONE_HUNDRED
}
