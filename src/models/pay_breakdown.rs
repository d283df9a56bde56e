//! Pay breakdown models.
//!
//! This module contains the [`PayBreakdown`] type and its associated
//! structures that capture all outputs from a fortnightly pay calculation,
//! including per-category pay lines, allowances, and totals, plus the
//! [`CalculationResult`] envelope handed to the display layer and the
//! report generator.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayInputs;

/// Represents the category of pay for a pay line.
///
/// Different categories carry different multipliers of the base hourly rate
/// (or, for on-call, a flat rate of their own) and are used to distinguish
/// ordinary time, the overtime tiers, and penalty hours.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayCategory;
///
/// let category = PayCategory::PublicHoliday;
/// assert_eq!(format!("{:?}", category), "PublicHoliday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Ordinary hours up to the contractual fortnight baseline.
    Ordinary,
    /// Standard hours beyond the baseline, first tier (150%).
    StandardOvertime150,
    /// Standard hours beyond the baseline, second tier (200%).
    StandardOvertime200,
    /// Rostered overtime at 150%.
    Overtime150,
    /// Rostered overtime at 200%.
    Overtime200,
    /// Unrostered overtime claimed by the employee, at 200%.
    UnrosteredOvertime,
    /// On-call standby hours at the flat on-call rate.
    OnCall,
    /// Weekend hours at 150%.
    Weekend,
    /// Public holiday hours at 250%.
    PublicHoliday,
}

impl PayCategory {
    /// All categories in the fixed order a [`PayBreakdown`] lists them.
    pub const ALL: [PayCategory; 9] = [
        PayCategory::Ordinary,
        PayCategory::StandardOvertime150,
        PayCategory::StandardOvertime200,
        PayCategory::Overtime150,
        PayCategory::Overtime200,
        PayCategory::UnrosteredOvertime,
        PayCategory::OnCall,
        PayCategory::Weekend,
        PayCategory::PublicHoliday,
    ];
}

/// Represents a single line item in a pay calculation.
///
/// Each pay line captures the hours worked in a specific category,
/// the applicable rate, and the resulting amount.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayCategory, PayLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PayLine {
///     category: PayCategory::Ordinary,
///     hours: Decimal::from(76),
///     rate: Decimal::from_str("45.85395").unwrap(),
///     amount: Decimal::from_str("3484.9002").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The category of pay (e.g., Ordinary, Overtime150).
    pub category: PayCategory,
    /// The number of hours worked in this category.
    pub hours: Decimal,
    /// The hourly rate for this category.
    pub rate: Decimal,
    /// The total amount for this pay line (hours * rate).
    pub amount: Decimal,
}

/// The type of a fortnightly allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowanceType {
    /// Flat uniform allowance.
    Uniform,
    /// Flat continuing-education allowance.
    Education,
    /// Per-meal allowance, paid per claimed meal.
    Meal,
}

/// Represents an allowance payment.
///
/// Flat allowances carry a single unit; the meal allowance is paid per
/// claimed meal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowancePayment {
    /// The type of allowance.
    #[serde(rename = "type")]
    pub allowance_type: AllowanceType,
    /// The number of units claimed (1 for flat allowances).
    pub units: Decimal,
    /// The rate per unit.
    pub rate: Decimal,
    /// The total amount for this allowance.
    pub amount: Decimal,
}

/// Aggregated totals for a pay calculation.
///
/// Superannuation appears here for reporting but is an employer
/// contribution on top of gross pay; it is never part of
/// `total_deductions` and never reduces `net_pay`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// The total value of all allowances.
    pub total_allowances: Decimal,
    /// Gross pay: the sum of all pay lines plus allowances.
    pub total_payments: Decimal,
    /// Income tax for the fortnight, including the Medicare levy.
    pub income_tax: Decimal,
    /// Employer superannuation contribution on gross pay.
    pub superannuation: Decimal,
    /// Income tax plus the car park and salary packaging deductions.
    pub total_deductions: Decimal,
    /// Take-home pay: gross minus total deductions.
    pub net_pay: Decimal,
    /// The sum of all hour buckets.
    pub total_hours: Decimal,
    /// Net pay per hour worked, or zero when no hours were worked.
    pub effective_hourly_rate: Decimal,
}

/// The complete breakdown of one fortnight's pay.
///
/// `lines` always contains one entry per [`PayCategory`], in
/// [`PayCategory::ALL`] order, so the display layer can render the full
/// hours table; consumers that only want worked categories filter on
/// non-zero hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// One pay line per category, in fixed order.
    pub lines: Vec<PayLine>,
    /// Allowance payments included in gross pay.
    pub allowances: Vec<AllowancePayment>,
    /// Aggregated totals.
    pub totals: PayTotals,
}

impl PayBreakdown {
    /// Returns the pay line for a category.
    pub fn line(&self, category: PayCategory) -> Option<&PayLine> {
        self.lines.iter().find(|line| line.category == category)
    }

    /// Returns the hours worked in a category, zero if absent.
    pub fn hours_for(&self, category: PayCategory) -> Decimal {
        self.line(category).map_or(Decimal::ZERO, |line| line.hours)
    }

    /// Returns the pay amount for a category, zero if absent.
    pub fn pay_for(&self, category: PayCategory) -> Decimal {
        self.line(category)
            .map_or(Decimal::ZERO, |line| line.amount)
    }

    /// Returns the allowance payment of a given type.
    pub fn allowance(&self, allowance_type: AllowanceType) -> Option<&AllowancePayment> {
        self.allowances
            .iter()
            .find(|a| a.allowance_type == allowance_type)
    }
}

/// The complete result of a pay calculation.
///
/// Wraps the [`PayBreakdown`] together with the inputs it was derived from
/// and identification metadata. The echoed inputs give the display layer
/// and the report generator everything they need (rates, deduction inputs,
/// pay period dates) without hidden state: one request in, one result out.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_pay;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{CalculationResult, PayInputs};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// # fn demo(inputs: PayInputs) -> payroll_engine::error::EngineResult<()> {
/// let loader = ConfigLoader::load("./config/au-2025-26")?;
/// let breakdown = calculate_pay(&inputs, loader.config())?;
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: env!("CARGO_PKG_VERSION").to_string(),
///     inputs,
///     breakdown,
/// };
/// # let _ = result;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The inputs the breakdown was derived from.
    pub inputs: PayInputs,
    /// The calculated pay breakdown.
    pub breakdown: PayBreakdown,
}
