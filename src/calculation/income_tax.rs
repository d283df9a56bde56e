//! Progressive income tax and Medicare levy.
//!
//! Fortnightly income is annualized by the configured number of pay periods,
//! taxed against the progressive bracket table, and the annual liability is
//! divided back to a fortnightly figure. The cumulative tax at each bracket
//! threshold is accumulated from the (threshold, marginal rate) table on
//! every call, so the table is the single source of truth for the scale.
//!
//! The Medicare levy is a separate flat levy on gross fortnightly income,
//! excluded from the brackets.
//!
//! No rounding happens here; callers round only for display.

use rust_decimal::Decimal;

use crate::config::TaxScale;
use crate::error::{EngineError, EngineResult};

/// The fortnightly income tax components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeTaxResult {
    /// Progressive income tax for the fortnight, Medicare levy excluded.
    pub base_tax: Decimal,
    /// The flat Medicare levy on gross fortnightly income.
    pub medicare_levy: Decimal,
    /// Base tax plus Medicare levy.
    pub total: Decimal,
}

/// Calculates annual tax on an annual income from the bracket table.
///
/// Each bracket's marginal rate applies to the income above its threshold
/// and below the next bracket's threshold. Income at or below the first
/// threshold is untaxed. The result is continuous at every bracket
/// boundary because the cumulative amounts are accumulated from the table
/// rather than stored.
pub fn annual_tax(annual_income: Decimal, scale: &TaxScale) -> Decimal {
    let mut tax = Decimal::ZERO;

    for (i, bracket) in scale.brackets.iter().enumerate() {
        if annual_income <= bracket.threshold {
            break;
        }

        let upper = match scale.brackets.get(i + 1) {
            Some(next) => annual_income.min(next.threshold),
            None => annual_income,
        };

        tax += (upper - bracket.threshold) * bracket.marginal_rate;
    }

    tax
}

/// Calculates fortnightly income tax, Medicare levy excluded.
///
/// Annualizes the fortnightly income by `periods_per_year`, applies the
/// bracket table, and divides the annual liability back down.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for negative income and
/// [`EngineError::CalculationError`] if the scale carries no brackets
/// (the config loader rejects such a scale before it gets here).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_base_tax;
/// use payroll_engine::config::ConfigLoader;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/au-2025-26").unwrap();
/// let tax = calculate_base_tax(Decimal::from(2000), loader.config().tax()).unwrap();
///
/// // $2,000/fortnight = $52,000/year: $4,288 + 30% of $7,000 = $6,388, or
/// // $245.69 per fortnight.
/// assert_eq!(tax.round_dp(2), Decimal::from_str("245.69").unwrap());
/// ```
pub fn calculate_base_tax(fortnightly_income: Decimal, scale: &TaxScale) -> EngineResult<Decimal> {
    if fortnightly_income < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "fortnightly_income".to_string(),
            message: format!("must not be negative, got {}", fortnightly_income),
        });
    }

    if scale.brackets.is_empty() {
        return Err(EngineError::CalculationError {
            message: "tax scale has no brackets".to_string(),
        });
    }

    let periods = Decimal::from(scale.periods_per_year);
    Ok(annual_tax(fortnightly_income * periods, scale) / periods)
}

/// Calculates total fortnightly income tax: base tax plus Medicare levy.
///
/// The levy is flat and unconditional at the configured rate.
pub fn calculate_income_tax(
    fortnightly_income: Decimal,
    scale: &TaxScale,
) -> EngineResult<IncomeTaxResult> {
    let base_tax = calculate_base_tax(fortnightly_income, scale)?;
    let medicare_levy = fortnightly_income * scale.medicare_levy_rate;

    Ok(IncomeTaxResult {
        base_tax,
        medicare_levy,
        total: base_tax + medicare_levy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scale_2025_26() -> TaxScale {
        TaxScale {
            financial_year: "2025-26".to_string(),
            periods_per_year: 26,
            medicare_levy_rate: dec("0.02"),
            brackets: vec![
                TaxBracket {
                    threshold: dec("18200"),
                    marginal_rate: dec("0.16"),
                },
                TaxBracket {
                    threshold: dec("45000"),
                    marginal_rate: dec("0.30"),
                },
                TaxBracket {
                    threshold: dec("135000"),
                    marginal_rate: dec("0.37"),
                },
                TaxBracket {
                    threshold: dec("190000"),
                    marginal_rate: dec("0.45"),
                },
            ],
        }
    }

    #[test]
    fn test_zero_income_zero_tax() {
        assert_eq!(annual_tax(Decimal::ZERO, &scale_2025_26()), Decimal::ZERO);
    }

    #[test]
    fn test_income_below_tax_free_threshold_untaxed() {
        assert_eq!(annual_tax(dec("18200"), &scale_2025_26()), Decimal::ZERO);
        assert_eq!(annual_tax(dec("10000"), &scale_2025_26()), Decimal::ZERO);
    }

    #[test]
    fn test_cumulative_amounts_derive_from_table() {
        let scale = scale_2025_26();

        // The published cumulative figures for the 2025-26 resident scale
        // must fall out of the bracket walk.
        assert_eq!(annual_tax(dec("45000"), &scale), dec("4288.00"));
        assert_eq!(annual_tax(dec("135000"), &scale), dec("31288.00"));
        assert_eq!(annual_tax(dec("190000"), &scale), dec("51638.00"));
    }

    #[test]
    fn test_second_bracket_marginal_rate() {
        // $52,000: $4,288 + 30% of $7,000 = $6,388
        assert_eq!(annual_tax(dec("52000"), &scale_2025_26()), dec("6388.00"));
    }

    #[test]
    fn test_top_bracket_marginal_rate() {
        // $200,000: $51,638 + 45% of $10,000 = $56,138
        assert_eq!(annual_tax(dec("200000"), &scale_2025_26()), dec("56138.00"));
    }

    #[test]
    fn test_continuity_at_bracket_boundaries() {
        let scale = scale_2025_26();
        let cent = dec("0.01");

        for threshold in ["18200", "45000", "135000", "190000"] {
            let at = dec(threshold);
            let below = annual_tax(at - cent, &scale);
            let on = annual_tax(at, &scale);
            let above = annual_tax(at + cent, &scale);

            // No jump across the boundary: one cent of income moves tax by
            // at most one cent times the top marginal rate.
            assert!(on - below <= cent, "jump below threshold {}", threshold);
            assert!(above - on <= cent, "jump above threshold {}", threshold);
            assert!(below <= on && on <= above);
        }
    }

    #[test]
    fn test_monotonic_over_sample_incomes() {
        let scale = scale_2025_26();
        let incomes = [
            "0", "5000", "18200", "18201", "30000", "45000", "60000", "100000", "135000",
            "150000", "190000", "250000",
        ];

        let mut previous = Decimal::ZERO;
        for income in incomes {
            let tax = annual_tax(dec(income), &scale);
            assert!(tax >= previous, "tax decreased at income {}", income);
            previous = tax;
        }
    }

    #[test]
    fn test_fortnightly_tax_annualizes_and_divides() {
        let tax = calculate_base_tax(dec("2000"), &scale_2025_26()).unwrap();

        // $2,000 x 26 = $52,000 -> $6,388 -> /26
        assert_eq!(tax.round_dp(2), dec("245.69"));
    }

    #[test]
    fn test_fortnightly_zero_income_zero_tax() {
        let tax = calculate_base_tax(Decimal::ZERO, &scale_2025_26()).unwrap();
        assert_eq!(tax, Decimal::ZERO);
    }

    #[test]
    fn test_negative_income_rejected() {
        let result = calculate_base_tax(dec("-1"), &scale_2025_26());
        assert!(matches!(
            result,
            Err(EngineError::InvalidInput { ref field, .. }) if field == "fortnightly_income"
        ));
    }

    #[test]
    fn test_empty_scale_is_calculation_error() {
        let mut scale = scale_2025_26();
        scale.brackets.clear();

        let result = calculate_base_tax(dec("2000"), &scale);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_medicare_levy_is_flat_two_percent() {
        let result = calculate_income_tax(dec("2000"), &scale_2025_26()).unwrap();

        assert_eq!(result.medicare_levy, dec("40.00"));
        assert_eq!(result.total, result.base_tax + result.medicare_levy);
    }

    #[test]
    fn test_medicare_levy_applies_below_tax_free_threshold() {
        // $500/fortnight is under the annualized tax-free threshold, but
        // the levy still applies to gross income.
        let result = calculate_income_tax(dec("500"), &scale_2025_26()).unwrap();

        assert_eq!(result.base_tax, Decimal::ZERO);
        assert_eq!(result.medicare_levy, dec("10.00"));
        assert_eq!(result.total, dec("10.00"));
    }

    #[test]
    fn test_worked_example_gross() {
        // Gross from the worked fortnight: $4,946.75685.
        let gross = dec("4946.75685");
        let result = calculate_income_tax(gross, &scale_2025_26()).unwrap();

        // Annualized: $128,615.6781 -> $4,288 + 30% of $83,615.6781
        // = $29,372.70343 -> $1,129.719362.. per fortnight.
        assert_eq!(result.base_tax.round_dp(2), dec("1129.72"));
        assert_eq!(result.medicare_levy.round_dp(2), dec("98.94"));
        assert_eq!(result.total.round_dp(2), dec("1228.65"));
    }
}
