//! Pay calculation inputs.
//!
//! This module contains the [`PayInputs`] record: everything a fortnightly
//! pay calculation consumes, as entered for one pay period. The record is
//! constructed once per submission and validated before any arithmetic runs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::PayPeriod;

/// The highest superannuation contribution rate accepted, in percent.
pub const MAX_SUPER_RATE_PERCENT: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// The raw inputs for one fortnightly pay calculation.
///
/// All hour and dollar quantities are non-negative [`Decimal`] values;
/// [`PayInputs::validate`] enforces this before calculation. The pay period
/// dates are reporting metadata only.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayInputs, PayPeriod};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let inputs = PayInputs {
///     hourly_rate: Decimal::from_str("45.85395").unwrap(),
///     standard_fortnight_hours: Decimal::from(76),
///     total_standard_hours: Decimal::from(76),
///     overtime_15_hours: Decimal::from(2),
///     overtime_20_hours: Decimal::from(12),
///     total_weekend_hours: Decimal::ZERO,
///     total_public_holiday_hours: Decimal::ZERO,
///     unrostered_overtime_hours: Decimal::ZERO,
///     on_call_hours: Decimal::ZERO,
///     on_call_rate: Decimal::from_str("43.56").unwrap(),
///     uniform_allowance: Decimal::from_str("19.74").unwrap(),
///     education_allowance: Decimal::from_str("181.80").unwrap(),
///     meal_allowances: 2,
///     meal_rate: Decimal::from_str("11.13").unwrap(),
///     car_park: Decimal::from_str("86.30").unwrap(),
///     salary_packaging: Decimal::from_str("365.60").unwrap(),
///     super_rate: Decimal::from(12),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
///     },
/// };
///
/// assert!(inputs.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInputs {
    /// The base hourly rate in dollars.
    pub hourly_rate: Decimal,
    /// The contractual baseline of standard hours per fortnight.
    pub standard_fortnight_hours: Decimal,
    /// Standard (weekday, rostered) hours actually worked. Hours beyond the
    /// contractual baseline are re-billed as standard overtime.
    pub total_standard_hours: Decimal,
    /// Rostered overtime hours paid at the tier-one rate.
    pub overtime_15_hours: Decimal,
    /// Rostered overtime hours paid at the tier-two rate.
    pub overtime_20_hours: Decimal,
    /// Hours worked on Saturday or Sunday.
    pub total_weekend_hours: Decimal,
    /// Hours worked on public holidays.
    pub total_public_holiday_hours: Decimal,
    /// Unrostered overtime claimed by the employee.
    pub unrostered_overtime_hours: Decimal,
    /// Hours on standby, paid at the flat on-call rate.
    pub on_call_hours: Decimal,
    /// The flat dollar rate per on-call hour, independent of the base rate.
    pub on_call_rate: Decimal,
    /// Flat uniform allowance for the fortnight.
    pub uniform_allowance: Decimal,
    /// Flat continuing-education allowance for the fortnight.
    pub education_allowance: Decimal,
    /// Number of meal allowances claimed.
    pub meal_allowances: u32,
    /// Dollar rate per meal allowance.
    pub meal_rate: Decimal,
    /// Car park deduction for the fortnight.
    pub car_park: Decimal,
    /// Salary packaging deduction for the fortnight.
    pub salary_packaging: Decimal,
    /// Superannuation contribution rate in percent (0-20).
    pub super_rate: Decimal,
    /// The pay period the inputs cover.
    pub pay_period: PayPeriod,
}

impl PayInputs {
    /// Validates the inputs before calculation.
    ///
    /// Every dollar and hour quantity must be non-negative, the
    /// superannuation rate must be between 0 and
    /// [`MAX_SUPER_RATE_PERCENT`], and the pay period must not end before
    /// it starts. The first violation found is returned as
    /// [`EngineError::InvalidInput`]; values are never clamped into range.
    pub fn validate(&self) -> EngineResult<()> {
        let non_negative_fields = [
            ("hourly_rate", self.hourly_rate),
            ("standard_fortnight_hours", self.standard_fortnight_hours),
            ("total_standard_hours", self.total_standard_hours),
            ("overtime_15_hours", self.overtime_15_hours),
            ("overtime_20_hours", self.overtime_20_hours),
            ("total_weekend_hours", self.total_weekend_hours),
            (
                "total_public_holiday_hours",
                self.total_public_holiday_hours,
            ),
            (
                "unrostered_overtime_hours",
                self.unrostered_overtime_hours,
            ),
            ("on_call_hours", self.on_call_hours),
            ("on_call_rate", self.on_call_rate),
            ("uniform_allowance", self.uniform_allowance),
            ("education_allowance", self.education_allowance),
            ("meal_rate", self.meal_rate),
            ("car_park", self.car_park),
            ("salary_packaging", self.salary_packaging),
            ("super_rate", self.super_rate),
        ];

        for (field, value) in non_negative_fields {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.super_rate > MAX_SUPER_RATE_PERCENT {
            return Err(EngineError::InvalidInput {
                field: "super_rate".to_string(),
                message: format!(
                    "must not exceed {} percent, got {}",
                    MAX_SUPER_RATE_PERCENT, self.super_rate
                ),
            });
        }

        if self.pay_period.end_date < self.pay_period.start_date {
            return Err(EngineError::InvalidInput {
                field: "pay_period".to_string(),
                message: format!(
                    "end date {} is before start date {}",
                    self.pay_period.end_date, self.pay_period.start_date
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn valid_inputs() -> PayInputs {
        PayInputs {
            hourly_rate: dec("45.85395"),
            standard_fortnight_hours: dec("76"),
            total_standard_hours: dec("76"),
            overtime_15_hours: dec("2"),
            overtime_20_hours: dec("12"),
            total_weekend_hours: Decimal::ZERO,
            total_public_holiday_hours: Decimal::ZERO,
            unrostered_overtime_hours: Decimal::ZERO,
            on_call_hours: Decimal::ZERO,
            on_call_rate: dec("43.56"),
            uniform_allowance: dec("19.74"),
            education_allowance: dec("181.80"),
            meal_allowances: 2,
            meal_rate: dec("11.13"),
            car_park: dec("86.30"),
            salary_packaging: dec("365.60"),
            super_rate: dec("12.0"),
            pay_period: PayPeriod {
                start_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
            },
        }
    }

    #[test]
    fn test_valid_inputs_pass_validation() {
        assert!(valid_inputs().validate().is_ok());
    }

    #[test]
    fn test_all_zero_inputs_pass_validation() {
        let mut inputs = valid_inputs();
        inputs.hourly_rate = Decimal::ZERO;
        inputs.total_standard_hours = Decimal::ZERO;
        inputs.overtime_15_hours = Decimal::ZERO;
        inputs.overtime_20_hours = Decimal::ZERO;
        inputs.meal_allowances = 0;
        inputs.super_rate = Decimal::ZERO;

        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_negative_hourly_rate_rejected() {
        let mut inputs = valid_inputs();
        inputs.hourly_rate = dec("-1");

        let err = inputs.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "hourly_rate"
        ));
    }

    #[test]
    fn test_negative_on_call_hours_rejected() {
        let mut inputs = valid_inputs();
        inputs.on_call_hours = dec("-0.5");

        let err = inputs.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "on_call_hours"
        ));
    }

    #[test]
    fn test_super_rate_above_cap_rejected() {
        let mut inputs = valid_inputs();
        inputs.super_rate = dec("20.1");

        let err = inputs.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "super_rate"
        ));
    }

    #[test]
    fn test_super_rate_at_cap_accepted() {
        let mut inputs = valid_inputs();
        inputs.super_rate = dec("20");

        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_inverted_pay_period_rejected() {
        let mut inputs = valid_inputs();
        inputs.pay_period.end_date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();

        let err = inputs.validate().unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { ref field, .. } if field == "pay_period"
        ));
    }

    #[test]
    fn test_single_day_pay_period_accepted() {
        let mut inputs = valid_inputs();
        inputs.pay_period.end_date = inputs.pay_period.start_date;

        assert!(inputs.validate().is_ok());
    }

    #[test]
    fn test_max_super_rate_constant_is_twenty() {
        assert_eq!(MAX_SUPER_RATE_PERCENT, dec("20"));
    }

    #[test]
    fn test_inputs_round_trip_through_json() {
        let inputs = valid_inputs();
        let json = serde_json::to_string(&inputs).unwrap();
        let parsed: PayInputs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, inputs);
    }
}
