//! Fortnightly allowances.
//!
//! Two flat allowances (uniform and continuing education) plus a per-meal
//! allowance paid for each claimed meal. Allowances are added to gross pay
//! before tax.

use rust_decimal::Decimal;

use crate::models::{AllowancePayment, AllowanceType};

/// The allowance payments for a fortnight and their total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowancesResult {
    /// One payment per allowance type: uniform, education, meal.
    pub payments: Vec<AllowancePayment>,
    /// The sum of all allowance amounts.
    pub total: Decimal,
}

/// Calculates the fortnight's allowance payments.
///
/// # Arguments
///
/// * `uniform_allowance` - Flat uniform allowance
/// * `education_allowance` - Flat continuing-education allowance
/// * `meal_allowances` - Number of meal allowances claimed
/// * `meal_rate` - Dollar rate per meal allowance
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_allowances;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_allowances(
///     Decimal::from_str("19.74").unwrap(),
///     Decimal::from_str("181.80").unwrap(),
///     2,
///     Decimal::from_str("11.13").unwrap(),
/// );
///
/// assert_eq!(result.total, Decimal::from_str("223.80").unwrap());
/// ```
pub fn calculate_allowances(
    uniform_allowance: Decimal,
    education_allowance: Decimal,
    meal_allowances: u32,
    meal_rate: Decimal,
) -> AllowancesResult {
    let meal_units = Decimal::from(meal_allowances);
    let meal_amount = meal_units * meal_rate;

    let payments = vec![
        AllowancePayment {
            allowance_type: AllowanceType::Uniform,
            units: Decimal::ONE,
            rate: uniform_allowance,
            amount: uniform_allowance,
        },
        AllowancePayment {
            allowance_type: AllowanceType::Education,
            units: Decimal::ONE,
            rate: education_allowance,
            amount: education_allowance,
        },
        AllowancePayment {
            allowance_type: AllowanceType::Meal,
            units: meal_units,
            rate: meal_rate,
            amount: meal_amount,
        },
    ];

    let total = payments.iter().map(|p| p.amount).sum();

    AllowancesResult { payments, total }
}
