//! Configuration for the payroll engine.
//!
//! Pay rules that change year to year — the income tax scale, the Medicare
//! levy rate, and penalty/overtime multipliers — are loaded from YAML files
//! rather than hardcoded, so a new financial year is a data change.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgreementMetadata, OvertimeMultipliers, PayConfig, PenaltyConfig, PenaltyMultipliers,
    TaxBracket, TaxScale,
};
