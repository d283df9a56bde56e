//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_breakdown;
mod pay_inputs;
mod pay_period;

pub use pay_breakdown::{
    AllowancePayment, AllowanceType, CalculationResult, PayBreakdown, PayCategory, PayLine,
    PayTotals,
};
pub use pay_inputs::{MAX_SUPER_RATE_PERCENT, PayInputs};
pub use pay_period::PayPeriod;
