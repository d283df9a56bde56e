//! Standard-hours overtime split.
//!
//! Standard (rostered weekday) hours beyond the contractual fortnight
//! baseline are re-billed as overtime in two tiers:
//! - First 2 hours of overage: 150%
//! - Anything beyond 2 hours: 200%
//!
//! Ordinary hours are capped at the baseline.

use rust_decimal::Decimal;

/// The threshold in hours for tier-one standard overtime.
/// The first 2 hours of overage are paid at the lower tier.
pub const STANDARD_OT_TIER_1_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The result of splitting worked standard hours against the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardHoursSplit {
    /// Hours paid at the ordinary rate, capped at the fortnight baseline.
    pub ordinary_hours: Decimal,
    /// Overage hours paid at the tier-one (150%) rate, at most 2.
    pub tier_one_hours: Decimal,
    /// Overage hours paid at the tier-two (200%) rate.
    pub tier_two_hours: Decimal,
}

/// Splits worked standard hours into ordinary hours and overtime tiers.
///
/// If the hours worked do not exceed the baseline, everything is ordinary
/// and both tiers are zero. Otherwise the overage is billed at 150% for its
/// first 2 hours and 200% beyond that, with ordinary hours capped at the
/// baseline.
///
/// # Arguments
///
/// * `total_standard_hours` - Standard hours actually worked this fortnight
/// * `standard_fortnight_hours` - The contractual fortnight baseline
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_standard_hours;
/// use rust_decimal::Decimal;
///
/// // At the baseline: all ordinary.
/// let split = split_standard_hours(Decimal::from(76), Decimal::from(76));
/// assert_eq!(split.ordinary_hours, Decimal::from(76));
/// assert_eq!(split.tier_one_hours, Decimal::ZERO);
/// assert_eq!(split.tier_two_hours, Decimal::ZERO);
///
/// // Four hours over: two at each tier.
/// let split = split_standard_hours(Decimal::from(80), Decimal::from(76));
/// assert_eq!(split.ordinary_hours, Decimal::from(76));
/// assert_eq!(split.tier_one_hours, Decimal::from(2));
/// assert_eq!(split.tier_two_hours, Decimal::from(2));
/// ```
pub fn split_standard_hours(
    total_standard_hours: Decimal,
    standard_fortnight_hours: Decimal,
) -> StandardHoursSplit {
    if total_standard_hours <= standard_fortnight_hours {
        return StandardHoursSplit {
            ordinary_hours: total_standard_hours,
            tier_one_hours: Decimal::ZERO,
            tier_two_hours: Decimal::ZERO,
        };
    }

    let overtime_hours = total_standard_hours - standard_fortnight_hours;
    StandardHoursSplit {
        ordinary_hours: standard_fortnight_hours,
        tier_one_hours: overtime_hours.min(STANDARD_OT_TIER_1_THRESHOLD),
        tier_two_hours: (overtime_hours - STANDARD_OT_TIER_1_THRESHOLD).max(Decimal::ZERO),
    }
}
