//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/report` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayInputs, PayPeriod};

/// Request body for the `/calculate` and `/report` endpoints.
///
/// Carries all inputs for one fortnightly pay calculation. Hour and
/// allowance fields default to zero when omitted, so a request only needs
/// the fields that apply to the fortnight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The base hourly rate in dollars.
    pub hourly_rate: Decimal,
    /// The contractual baseline of standard hours per fortnight.
    pub standard_fortnight_hours: Decimal,
    /// Standard hours actually worked this fortnight.
    pub total_standard_hours: Decimal,
    /// Rostered overtime hours at the tier-one rate.
    #[serde(default)]
    pub overtime_15_hours: Decimal,
    /// Rostered overtime hours at the tier-two rate.
    #[serde(default)]
    pub overtime_20_hours: Decimal,
    /// Hours worked on Saturday or Sunday.
    #[serde(default)]
    pub total_weekend_hours: Decimal,
    /// Hours worked on public holidays.
    #[serde(default)]
    pub total_public_holiday_hours: Decimal,
    /// Unrostered overtime claimed by the employee.
    #[serde(default)]
    pub unrostered_overtime_hours: Decimal,
    /// Hours on standby at the flat on-call rate.
    #[serde(default)]
    pub on_call_hours: Decimal,
    /// The flat dollar rate per on-call hour.
    #[serde(default)]
    pub on_call_rate: Decimal,
    /// Flat uniform allowance for the fortnight.
    #[serde(default)]
    pub uniform_allowance: Decimal,
    /// Flat continuing-education allowance for the fortnight.
    #[serde(default)]
    pub education_allowance: Decimal,
    /// Number of meal allowances claimed.
    #[serde(default)]
    pub meal_allowances: u32,
    /// Dollar rate per meal allowance.
    #[serde(default)]
    pub meal_rate: Decimal,
    /// Car park deduction for the fortnight.
    #[serde(default)]
    pub car_park: Decimal,
    /// Salary packaging deduction for the fortnight.
    #[serde(default)]
    pub salary_packaging: Decimal,
    /// Superannuation contribution rate in percent (0-20).
    pub super_rate: Decimal,
    /// The pay period the inputs cover.
    pub pay_period: PayPeriodRequest,
}

/// Pay period information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<CalculationRequest> for PayInputs {
    fn from(req: CalculationRequest) -> Self {
        PayInputs {
            hourly_rate: req.hourly_rate,
            standard_fortnight_hours: req.standard_fortnight_hours,
            total_standard_hours: req.total_standard_hours,
            overtime_15_hours: req.overtime_15_hours,
            overtime_20_hours: req.overtime_20_hours,
            total_weekend_hours: req.total_weekend_hours,
            total_public_holiday_hours: req.total_public_holiday_hours,
            unrostered_overtime_hours: req.unrostered_overtime_hours,
            on_call_hours: req.on_call_hours,
            on_call_rate: req.on_call_rate,
            uniform_allowance: req.uniform_allowance,
            education_allowance: req.education_allowance,
            meal_allowances: req.meal_allowances,
            meal_rate: req.meal_rate,
            car_park: req.car_park,
            salary_packaging: req.salary_packaging,
            super_rate: req.super_rate,
            pay_period: req.pay_period.into(),
        }
    }
}
