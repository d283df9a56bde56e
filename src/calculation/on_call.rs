//! On-call standby pay.
//!
//! On-call hours are paid at a flat dollar rate supplied with the inputs.
//! The rate is independent of the base hourly rate and takes no multiplier.

use rust_decimal::Decimal;

use crate::models::{PayCategory, PayLine};

/// Calculates the on-call pay line.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_on_call_pay;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = calculate_on_call_pay(
///     Decimal::from(10),
///     Decimal::from_str("43.56").unwrap(),
/// );
///
/// assert_eq!(line.amount, Decimal::from_str("435.60").unwrap());
/// ```
pub fn calculate_on_call_pay(hours: Decimal, on_call_rate: Decimal) -> PayLine {
    PayLine {
        category: PayCategory::OnCall,
        hours,
        rate: on_call_rate,
        amount: hours * on_call_rate,
    }
}
