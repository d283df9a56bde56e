//! Calculation logic for the payroll engine.
//!
//! This module contains all the calculation functions for determining a
//! fortnight's pay: the standard-hours overtime split, rostered and
//! unrostered overtime, weekend and public holiday penalty rates, on-call
//! standby pay, allowances, progressive income tax with the Medicare levy,
//! superannuation, and the orchestrating [`calculate_pay`] function.

mod allowances;
mod calculate;
mod income_tax;
mod on_call;
mod overtime;
mod penalty_rates;
mod standard_hours;
mod superannuation;

pub use allowances::{AllowancesResult, calculate_allowances};
pub use calculate::calculate_pay;
pub use income_tax::{IncomeTaxResult, annual_tax, calculate_base_tax, calculate_income_tax};
pub use on_call::calculate_on_call_pay;
pub use overtime::{OvertimeResult, calculate_overtime};
pub use penalty_rates::{PenaltyResult, calculate_penalty_pay};
pub use standard_hours::{
    STANDARD_OT_TIER_1_THRESHOLD, StandardHoursSplit, split_standard_hours,
};
pub use superannuation::calculate_superannuation;
