//! Salary report document generation.
//!
//! This module builds the fixed-section salary calculation report from a
//! [`CalculationResult`]. The document is layout-free: six sections of
//! pre-formatted lines, in a fixed order, handed off to whatever renders
//! them (PDF, terminal, anything). Hour and earning lines are included only
//! when non-zero; deduction lines are always present.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AllowanceType, CalculationResult, PayCategory};

/// A titled section of the salary report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSection {
    /// The numbered section heading (e.g., "1. Basic Information").
    pub heading: String,
    /// The pre-formatted lines of the section, in order.
    pub lines: Vec<String>,
}

/// The complete salary calculation report.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::report::build_report;
/// # use payroll_engine::models::CalculationResult;
///
/// # fn demo(result: &CalculationResult) {
/// let document = build_report(result);
/// assert_eq!(document.sections.len(), 6);
/// for section in &document.sections {
///     println!("{}", section.heading);
///     for line in &section.lines {
///         println!("  {}", line);
///     }
/// }
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// The report title.
    pub title: String,
    /// The date the underlying calculation was performed.
    pub generated_on: NaiveDate,
    /// The six report sections, in fixed order.
    pub sections: Vec<ReportSection>,
}

/// The hour buckets in report order, with their display labels.
const HOUR_LABELS: [(PayCategory, &str); 9] = [
    (PayCategory::Ordinary, "Standard Hours"),
    (PayCategory::StandardOvertime150, "Standard OT @1.5"),
    (PayCategory::StandardOvertime200, "Standard OT @2.0"),
    (PayCategory::Overtime150, "Overtime @1.5"),
    (PayCategory::Overtime200, "Overtime @2.0"),
    (PayCategory::Weekend, "Weekend Hours"),
    (PayCategory::PublicHoliday, "Public Holiday Hours"),
    (PayCategory::UnrosteredOvertime, "Unrostered OT"),
    (PayCategory::OnCall, "On Call Hours"),
];

/// The earning labels in report order.
const EARNING_LABELS: [(PayCategory, &str); 9] = [
    (PayCategory::Ordinary, "Ordinary Hours"),
    (PayCategory::StandardOvertime150, "Standard OT @1.5"),
    (PayCategory::StandardOvertime200, "Standard OT @2.0"),
    (PayCategory::Overtime150, "Overtime @1.5"),
    (PayCategory::Overtime200, "Overtime @2.0"),
    (PayCategory::Weekend, "Weekend Hours"),
    (PayCategory::PublicHoliday, "Public Holiday Hours"),
    (PayCategory::UnrosteredOvertime, "Unrostered OT"),
    (PayCategory::OnCall, "On Call"),
];

/// Builds the fixed-section salary report from a calculation result.
///
/// Section order is part of the report format:
/// 1. Basic Information
/// 2. Hours Worked (non-zero hour buckets only)
/// 3. Allowances (meal line only when meals were claimed)
/// 4. Earnings Summary (non-zero amounts, then the gross total)
/// 5. Deductions (always complete, superannuation reported with its rate)
/// 6. Final Summary
pub fn build_report(result: &CalculationResult) -> ReportDocument {
    let inputs = &result.inputs;
    let breakdown = &result.breakdown;
    let totals = &breakdown.totals;

    // 1. Basic Information
    let basic_information = ReportSection {
        heading: "1. Basic Information".to_string(),
        lines: vec![
            format!("Hourly Rate: {}", format_money(inputs.hourly_rate)),
            format!(
                "Standard Fortnight Hours: {}",
                format_hours(inputs.standard_fortnight_hours)
            ),
            format!(
                "Pay Period: {} to {}",
                inputs.pay_period.start_date.format("%Y-%m-%d"),
                inputs.pay_period.end_date.format("%Y-%m-%d")
            ),
        ],
    };

    // 2. Hours Worked: only buckets with hours
    let hours_worked = ReportSection {
        heading: "2. Hours Worked".to_string(),
        lines: HOUR_LABELS
            .iter()
            .filter_map(|(category, label)| {
                let hours = breakdown.hours_for(*category);
                if hours > Decimal::ZERO {
                    Some(format!(
                        "{}: {}h = {}",
                        label,
                        format_hours(hours),
                        format_money(breakdown.pay_for(*category))
                    ))
                } else {
                    None
                }
            })
            .collect(),
    };

    // 3. Allowances: uniform and education always, meals only when claimed
    let mut allowance_lines = vec![
        format!(
            "Uniform Allowance: {}",
            format_money(inputs.uniform_allowance)
        ),
        format!(
            "Medical Education Allowance: {}",
            format_money(inputs.education_allowance)
        ),
    ];
    if let Some(meal) = breakdown.allowance(AllowanceType::Meal) {
        if meal.units > Decimal::ZERO {
            allowance_lines.push(format!(
                "Meal Allowances ({}): {}",
                format_hours(meal.units),
                format_money(meal.amount)
            ));
        }
    }
    let allowances = ReportSection {
        heading: "3. Allowances".to_string(),
        lines: allowance_lines,
    };

    // 4. Earnings Summary: non-zero amounts plus the allowance total
    let mut earning_lines: Vec<String> = EARNING_LABELS
        .iter()
        .filter_map(|(category, label)| {
            let amount = breakdown.pay_for(*category);
            if amount > Decimal::ZERO {
                Some(format!("{}: {}", label, format_money(amount)))
            } else {
                None
            }
        })
        .collect();
    if totals.total_allowances > Decimal::ZERO {
        earning_lines.push(format!(
            "Allowances: {}",
            format_money(totals.total_allowances)
        ));
    }
    earning_lines.push(format!(
        "Total Gross: {}",
        format_money(totals.total_payments)
    ));
    let earnings_summary = ReportSection {
        heading: "4. Earnings Summary".to_string(),
        lines: earning_lines,
    };

    // 5. Deductions: always complete
    let deductions = ReportSection {
        heading: "5. Deductions".to_string(),
        lines: vec![
            format!("Income Tax: {}", format_money(totals.income_tax)),
            format!("Car Park: {}", format_money(inputs.car_park)),
            format!(
                "Salary Packaging: {}",
                format_money(inputs.salary_packaging)
            ),
            format!(
                "Superannuation ({}%): {}",
                inputs.super_rate.normalize(),
                format_money(totals.superannuation)
            ),
            format!(
                "Total Deductions: {}",
                format_money(totals.total_deductions)
            ),
        ],
    };

    // 6. Final Summary
    let final_summary = ReportSection {
        heading: "6. Final Summary".to_string(),
        lines: vec![
            format!("NET PAY: {}", format_money(totals.net_pay)),
            format!("Total Hours: {}", format_hours(totals.total_hours)),
            format!(
                "Effective Hourly Rate: {}",
                format_money(totals.effective_hourly_rate)
            ),
        ],
    };

    ReportDocument {
        title: "Fortnightly Salary Calculation Report".to_string(),
        generated_on: result.timestamp.date_naive(),
        sections: vec![
            basic_information,
            hours_worked,
            allowances,
            earnings_summary,
            deductions,
            final_summary,
        ],
    }
}

/// Formats a dollar amount as `$1,234.56`, thousands-separated at 2 dp.
fn format_money(amount: Decimal) -> String {
    let formatted = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}${}.{}", sign, grouped, frac_part)
}

/// Formats an hour quantity with trailing zeros dropped.
fn format_hours(hours: Decimal) -> String {
    hours.normalize().to_string()
}
