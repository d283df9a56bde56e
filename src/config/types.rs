//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Metadata about the pay scheme.
///
/// Identifies the enterprise agreement and financial year the loaded
/// rates belong to.
#[derive(Debug, Clone, Deserialize)]
pub struct AgreementMetadata {
    /// The human-readable name of the agreement.
    pub name: String,
    /// The financial year the rates apply to (e.g., "2025-26").
    pub financial_year: String,
    /// The version or effective date of the rates.
    pub version: String,
    /// URL to the official rate documentation.
    pub source_url: String,
}

/// A single bracket in the progressive income tax scale.
///
/// The marginal rate applies to annual income above this bracket's
/// threshold, up to the next bracket's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TaxBracket {
    /// Annual income at which this bracket begins.
    pub threshold: Decimal,
    /// The marginal rate applied above the threshold.
    pub marginal_rate: Decimal,
}

/// The progressive income tax scale for a financial year.
///
/// Brackets are an ordered list of (threshold, marginal rate) pairs. The
/// first bracket's threshold is the tax-free amount. Cumulative tax at each
/// threshold is always derived from this table, never stored alongside it,
/// so a rate change cannot drift out of sync with the bracket totals.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxScale {
    /// The financial year this scale applies to (e.g., "2025-26").
    pub financial_year: String,
    /// The number of pay periods per year used to annualize income (26 for
    /// fortnightly pay).
    pub periods_per_year: u32,
    /// The flat Medicare levy rate applied to gross income.
    pub medicare_levy_rate: Decimal,
    /// The brackets, sorted by ascending threshold.
    pub brackets: Vec<TaxBracket>,
}

impl TaxScale {
    /// Returns the tax-free threshold, i.e. the first bracket's threshold.
    pub fn tax_free_threshold(&self) -> Option<Decimal> {
        self.brackets.first().map(|b| b.threshold)
    }
}

/// Penalty rate multipliers applied to the base hourly rate.
#[derive(Debug, Clone, Deserialize)]
pub struct PenaltyMultipliers {
    /// Multiplier for weekend hours.
    pub weekend: Decimal,
    /// Multiplier for public holiday hours.
    pub public_holiday: Decimal,
}

/// Overtime rate multipliers applied to the base hourly rate.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for the first tier of overtime.
    pub tier_one: Decimal,
    /// Multiplier for the second tier of overtime.
    pub tier_two: Decimal,
    /// Multiplier for unrostered overtime claimed by the employee.
    pub unrostered: Decimal,
}

/// Penalty configuration from penalties.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PenaltyConfig {
    /// Penalty multipliers.
    pub penalties: PenaltyMultipliers,
    /// Overtime multipliers.
    pub overtime: OvertimeMultipliers,
}

/// The complete pay configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the various
/// YAML files in a scheme configuration directory.
#[derive(Debug, Clone)]
pub struct PayConfig {
    /// Agreement metadata.
    agreement: AgreementMetadata,
    /// Income tax scale.
    tax: TaxScale,
    /// Penalty and overtime multipliers.
    penalties: PenaltyConfig,
}

impl PayConfig {
    /// Creates a new PayConfig from its component parts.
    pub fn new(agreement: AgreementMetadata, tax: TaxScale, penalties: PenaltyConfig) -> Self {
        Self {
            agreement,
            tax,
            penalties,
        }
    }

    /// Returns the agreement metadata.
    pub fn agreement(&self) -> &AgreementMetadata {
        &self.agreement
    }

    /// Returns the income tax scale.
    pub fn tax(&self) -> &TaxScale {
        &self.tax
    }

    /// Returns the penalty configuration.
    pub fn penalties(&self) -> &PenaltyConfig {
        &self.penalties
    }
}
