//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AgreementMetadata, PayConfig, PenaltyConfig, TaxScale};

/// Loads and provides access to pay configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the tax scale before handing out a [`PayConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/au-2025-26/
/// ├── agreement.yaml  # Agreement metadata
/// ├── tax.yaml        # Income tax scale and Medicare levy
/// └── penalties.yaml  # Penalty and overtime multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/au-2025-26").unwrap();
/// println!("Financial year: {}", loader.config().tax().financial_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/au-2025-26")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The tax scale brackets are unsorted, empty, or carry rates
    ///   outside [0, 1]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/au-2025-26")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let agreement_path = path.join("agreement.yaml");
        let agreement = Self::load_yaml::<AgreementMetadata>(&agreement_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxScale>(&tax_path)?;
        Self::validate_tax_scale(&tax, &tax_path)?;

        let penalties_path = path.join("penalties.yaml");
        let penalties = Self::load_yaml::<PenaltyConfig>(&penalties_path)?;

        Ok(Self {
            config: PayConfig::new(agreement, tax, penalties),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates the tax scale invariants the calculation relies on.
    fn validate_tax_scale(tax: &TaxScale, path: &Path) -> EngineResult<()> {
        let path_str = path.display().to_string();

        if tax.brackets.is_empty() {
            return Err(EngineError::ConfigParseError {
                path: path_str,
                message: "tax scale must contain at least one bracket".to_string(),
            });
        }

        if tax.periods_per_year == 0 {
            return Err(EngineError::ConfigParseError {
                path: path_str,
                message: "periods_per_year must be greater than zero".to_string(),
            });
        }

        for pair in tax.brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(EngineError::ConfigParseError {
                    path: path_str,
                    message: format!(
                        "tax brackets must have strictly ascending thresholds ({} followed by {})",
                        pair[0].threshold, pair[1].threshold
                    ),
                });
            }
        }

        for bracket in &tax.brackets {
            if bracket.threshold < Decimal::ZERO
                || bracket.marginal_rate < Decimal::ZERO
                || bracket.marginal_rate > Decimal::ONE
            {
                return Err(EngineError::ConfigParseError {
                    path: path_str,
                    message: format!(
                        "bracket at threshold {} has rate {} outside [0, 1]",
                        bracket.threshold, bracket.marginal_rate
                    ),
                });
            }
        }

        if tax.medicare_levy_rate < Decimal::ZERO || tax.medicare_levy_rate > Decimal::ONE {
            return Err(EngineError::ConfigParseError {
                path: path_str,
                message: format!(
                    "medicare_levy_rate {} outside [0, 1]",
                    tax.medicare_levy_rate
                ),
            });
        }

        Ok(())
    }
}
