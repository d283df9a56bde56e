//! The fortnightly pay calculation.
//!
//! [`calculate_pay`] assembles the full [`PayBreakdown`] from validated
//! inputs: the standard-hours overtime split, per-category pay lines,
//! allowances, income tax with the Medicare levy, superannuation, and the
//! deduction and hour totals. The function is pure; the caller owns the
//! result.

use rust_decimal::Decimal;

use crate::config::PayConfig;
use crate::error::EngineResult;
use crate::models::{PayBreakdown, PayCategory, PayInputs, PayLine, PayTotals};

use super::allowances::calculate_allowances;
use super::income_tax::calculate_income_tax;
use super::on_call::calculate_on_call_pay;
use super::overtime::calculate_overtime;
use super::penalty_rates::calculate_penalty_pay;
use super::standard_hours::split_standard_hours;
use super::superannuation::calculate_superannuation;

/// Calculates a fortnight's pay breakdown.
///
/// Inputs are validated first; a negative quantity, an out-of-range
/// superannuation rate, or an inverted pay period is rejected before any
/// arithmetic runs. The returned breakdown carries one pay line per
/// [`PayCategory`] in fixed order, the three allowance payments, and the
/// aggregated totals.
///
/// Superannuation is reported in the totals but never deducted: it is an
/// employer contribution on top of gross pay.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{PayCategory, PayInputs, PayPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/au-2025-26").unwrap();
/// let inputs = PayInputs {
///     hourly_rate: Decimal::from_str("45.85395").unwrap(),
///     standard_fortnight_hours: Decimal::from(76),
///     total_standard_hours: Decimal::from(76),
///     overtime_15_hours: Decimal::ZERO,
///     overtime_20_hours: Decimal::ZERO,
///     total_weekend_hours: Decimal::ZERO,
///     total_public_holiday_hours: Decimal::ZERO,
///     unrostered_overtime_hours: Decimal::ZERO,
///     on_call_hours: Decimal::ZERO,
///     on_call_rate: Decimal::ZERO,
///     uniform_allowance: Decimal::ZERO,
///     education_allowance: Decimal::ZERO,
///     meal_allowances: 0,
///     meal_rate: Decimal::ZERO,
///     car_park: Decimal::ZERO,
///     salary_packaging: Decimal::ZERO,
///     super_rate: Decimal::from(12),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
///     },
/// };
///
/// let breakdown = calculate_pay(&inputs, loader.config()).unwrap();
/// assert_eq!(breakdown.hours_for(PayCategory::Ordinary), Decimal::from(76));
/// assert_eq!(breakdown.totals.total_hours, Decimal::from(76));
/// ```
pub fn calculate_pay(inputs: &PayInputs, config: &PayConfig) -> EngineResult<PayBreakdown> {
    inputs.validate()?;

    let overtime_config = &config.penalties().overtime;
    let penalty_config = &config.penalties().penalties;

    // Split worked standard hours against the contractual baseline.
    let split = split_standard_hours(inputs.total_standard_hours, inputs.standard_fortnight_hours);

    let ordinary = PayLine {
        category: PayCategory::Ordinary,
        hours: split.ordinary_hours,
        rate: inputs.hourly_rate,
        amount: split.ordinary_hours * inputs.hourly_rate,
    };

    let standard_tier_one_rate = inputs.hourly_rate * overtime_config.tier_one;
    let standard_tier_one = PayLine {
        category: PayCategory::StandardOvertime150,
        hours: split.tier_one_hours,
        rate: standard_tier_one_rate,
        amount: split.tier_one_hours * standard_tier_one_rate,
    };

    let standard_tier_two_rate = inputs.hourly_rate * overtime_config.tier_two;
    let standard_tier_two = PayLine {
        category: PayCategory::StandardOvertime200,
        hours: split.tier_two_hours,
        rate: standard_tier_two_rate,
        amount: split.tier_two_hours * standard_tier_two_rate,
    };

    let overtime = calculate_overtime(
        inputs.overtime_15_hours,
        inputs.overtime_20_hours,
        inputs.unrostered_overtime_hours,
        inputs.hourly_rate,
        overtime_config,
    );

    let on_call = calculate_on_call_pay(inputs.on_call_hours, inputs.on_call_rate);

    let penalties = calculate_penalty_pay(
        inputs.total_weekend_hours,
        inputs.total_public_holiday_hours,
        inputs.hourly_rate,
        penalty_config,
    );

    // One line per category, in PayCategory::ALL order.
    let lines = vec![
        ordinary,
        standard_tier_one,
        standard_tier_two,
        overtime.tier_one,
        overtime.tier_two,
        overtime.unrostered,
        on_call,
        penalties.weekend,
        penalties.public_holiday,
    ];

    let allowances = calculate_allowances(
        inputs.uniform_allowance,
        inputs.education_allowance,
        inputs.meal_allowances,
        inputs.meal_rate,
    );

    let lines_total: Decimal = lines.iter().map(|line| line.amount).sum();
    let total_payments = lines_total + allowances.total;

    let income_tax = calculate_income_tax(total_payments, config.tax())?;
    let superannuation = calculate_superannuation(total_payments, inputs.super_rate);

    let total_deductions = income_tax.total + inputs.car_park + inputs.salary_packaging;
    let net_pay = total_payments - total_deductions;

    let total_hours: Decimal = lines.iter().map(|line| line.hours).sum();
    let effective_hourly_rate = if total_hours > Decimal::ZERO {
        net_pay / total_hours
    } else {
        Decimal::ZERO
    };

    Ok(PayBreakdown {
        lines,
        allowances: allowances.payments,
        totals: PayTotals {
            total_allowances: allowances.total,
            total_payments,
            income_tax: income_tax.total,
            superannuation,
            total_deductions,
            net_pay,
            total_hours,
            effective_hourly_rate,
        },
    })
}
