//! Property-based tests for the calculation invariants.
//!
//! These properties hold for every valid input, not just the worked
//! examples: gross is the sum of its parts, net pay never depends on the
//! superannuation rate, the tax scale is monotonic and continuous, and the
//! standard-hours split never loses hours.

use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::calculation::{annual_tax, calculate_pay, split_standard_hours};
use payroll_engine::config::{
    AgreementMetadata, OvertimeMultipliers, PayConfig, PenaltyConfig, PenaltyMultipliers,
    TaxBracket, TaxScale,
};
use payroll_engine::models::{PayInputs, PayPeriod};

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

fn test_config() -> PayConfig {
    PayConfig::new(
        AgreementMetadata {
            name: "Test Agreement".to_string(),
            financial_year: "2025-26".to_string(),
            version: "2025-07-01".to_string(),
            source_url: "https://example.com".to_string(),
        },
        scale_2025_26(),
        PenaltyConfig {
            penalties: PenaltyMultipliers {
                weekend: dec("1.5"),
                public_holiday: dec("2.5"),
            },
            overtime: OvertimeMultipliers {
                tier_one: dec("1.5"),
                tier_two: dec("2.0"),
                unrostered: dec("2.0"),
            },
        },
    )
}

/// Cents to dollars.
fn money(cents: u32) -> Decimal {
    Decimal::new(i64::from(cents), 2)
}

/// Half-hour steps to hours.
fn hours(halves: u32) -> Decimal {
    Decimal::from(halves) / Decimal::from(2)
}

/// Generates arbitrary valid inputs: rates in cents, hours in half-hour
/// steps, the superannuation rate in tenths of a percent up to the cap.
fn arb_inputs() -> impl Strategy<Value = PayInputs> {
    let worked_hours = (
        0u32..=336,
        0u32..=96,
        0u32..=96,
        0u32..=96,
        0u32..=96,
        0u32..=96,
        0u32..=96,
    );
    let rates = (0u32..=20_000, 0u32..=10_000, 0u32..=200);
    let allowances = (0u32..=50_000, 0u32..=50_000, 0u32..=14, 0u32..=5_000);
    let deductions = (0u32..=50_000, 0u32..=100_000);

    (worked_hours, rates, allowances, deductions).prop_map(
        |(
            (standard, ot15, ot20, weekend, public_holiday, unrostered, on_call),
            (hourly_rate_cents, on_call_rate_cents, super_rate_tenths),
            (uniform_cents, education_cents, meal_allowances, meal_rate_cents),
            (car_park_cents, salary_packaging_cents),
        )| {
            PayInputs {
                hourly_rate: money(hourly_rate_cents),
                standard_fortnight_hours: dec("76"),
                total_standard_hours: hours(standard),
                overtime_15_hours: hours(ot15),
                overtime_20_hours: hours(ot20),
                total_weekend_hours: hours(weekend),
                total_public_holiday_hours: hours(public_holiday),
                unrostered_overtime_hours: hours(unrostered),
                on_call_hours: hours(on_call),
                on_call_rate: money(on_call_rate_cents),
                uniform_allowance: money(uniform_cents),
                education_allowance: money(education_cents),
                meal_allowances,
                meal_rate: money(meal_rate_cents),
                car_park: money(car_park_cents),
                salary_packaging: money(salary_packaging_cents),
                super_rate: Decimal::new(i64::from(super_rate_tenths), 1),
                pay_period: PayPeriod {
                    start_date: chrono::NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
                    end_date: chrono::NaiveDate::from_ymd_opt(2025, 9, 28).unwrap(),
                },
            }
        },
    )
}

proptest! {
    #[test]
    fn gross_is_sum_of_lines_and_allowances(inputs in arb_inputs()) {
        let breakdown = calculate_pay(&inputs, &test_config()).unwrap();

        let lines_total: Decimal = breakdown.lines.iter().map(|line| line.amount).sum();
        prop_assert_eq!(
            breakdown.totals.total_payments,
            lines_total + breakdown.totals.total_allowances
        );
    }

    #[test]
    fn net_pay_is_gross_minus_deductions(inputs in arb_inputs()) {
        let breakdown = calculate_pay(&inputs, &test_config()).unwrap();
        let totals = &breakdown.totals;

        prop_assert_eq!(
            totals.net_pay,
            totals.total_payments - totals.income_tax - inputs.car_park - inputs.salary_packaging
        );
        prop_assert_eq!(
            totals.total_deductions,
            totals.income_tax + inputs.car_park + inputs.salary_packaging
        );
    }

    #[test]
    fn net_pay_is_independent_of_super_rate(
        inputs in arb_inputs(),
        other_super_tenths in 0u32..=200,
    ) {
        let config = test_config();
        let mut other = inputs.clone();
        other.super_rate = Decimal::new(i64::from(other_super_tenths), 1);

        let breakdown = calculate_pay(&inputs, &config).unwrap();
        let other_breakdown = calculate_pay(&other, &config).unwrap();

        prop_assert_eq!(breakdown.totals.net_pay, other_breakdown.totals.net_pay);
    }

    #[test]
    fn total_hours_sums_every_line(inputs in arb_inputs()) {
        let breakdown = calculate_pay(&inputs, &test_config()).unwrap();

        let hours_total: Decimal = breakdown.lines.iter().map(|line| line.hours).sum();
        prop_assert_eq!(breakdown.totals.total_hours, hours_total);
    }

    #[test]
    fn effective_rate_guard_never_divides_by_zero(inputs in arb_inputs()) {
        let breakdown = calculate_pay(&inputs, &test_config()).unwrap();
        let totals = &breakdown.totals;

        if totals.total_hours > Decimal::ZERO {
            prop_assert_eq!(
                totals.effective_hourly_rate,
                totals.net_pay / totals.total_hours
            );
        } else {
            prop_assert_eq!(totals.effective_hourly_rate, Decimal::ZERO);
        }
    }

    #[test]
    fn standard_split_never_loses_hours(
        total_halves in 0u32..=336,
        baseline_halves in 0u32..=200,
    ) {
        let total = hours(total_halves);
        let baseline = hours(baseline_halves);
        let split = split_standard_hours(total, baseline);

        prop_assert_eq!(
            split.ordinary_hours + split.tier_one_hours + split.tier_two_hours,
            total
        );
        prop_assert!(split.ordinary_hours <= baseline || split.ordinary_hours == total);
        prop_assert!(split.tier_one_hours <= dec("2"));
    }

    #[test]
    fn annual_tax_is_monotonic(a_cents in 0u64..=30_000_000, b_cents in 0u64..=30_000_000) {
        let scale = scale_2025_26();
        let (low, high) = if a_cents <= b_cents {
            (a_cents, b_cents)
        } else {
            (b_cents, a_cents)
        };

        let low_tax = annual_tax(Decimal::new(low as i64, 2), &scale);
        let high_tax = annual_tax(Decimal::new(high as i64, 2), &scale);

        prop_assert!(low_tax <= high_tax);
    }

    #[test]
    fn annual_tax_is_continuous_at_boundaries(offset_cents in 1u32..=100) {
        let scale = scale_2025_26();
        let offset = Decimal::new(i64::from(offset_cents), 2);

        for threshold in ["18200", "45000", "135000", "190000"] {
            let at = dec(threshold);
            let below = annual_tax(at - offset, &scale);
            let above = annual_tax(at + offset, &scale);

            // Tax across a window of 2 * offset never jumps by more than the
            // top marginal rate applied to that window.
            prop_assert!(above - below <= Decimal::from(2) * offset);
            prop_assert!(above >= below);
        }
    }

    #[test]
    fn annual_tax_never_exceeds_income(income_cents in 0u64..=30_000_000) {
        let scale = scale_2025_26();
        let income = Decimal::new(income_cents as i64, 2);

        let tax = annual_tax(income, &scale);
        prop_assert!(tax >= Decimal::ZERO);
        prop_assert!(tax <= income);
    }
}
