//! Field-duty per-diem calculation.
//!
//! A day with at least one field-duty shift earns a per-diem tier based on
//! the hours of its field-duty shifts. Hours of other shifts on the same
//! day do not count toward the tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PerDiemInfo, PerDiemTier, Shift};

/// Minimum field-duty hours for tier A.
pub const TIER_A_MIN_HOURS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Minimum field-duty hours for tier B.
pub const TIER_B_MIN_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Minimum field-duty hours for tier C.
pub const TIER_C_MIN_HOURS: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The per-diem relevant facts of one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerDiemShift {
    /// Whether the shift is a field-duty shift.
    pub is_field_duty_shift: bool,
    /// Worked hours.
    pub hours: Decimal,
}

impl From<&Shift> for PerDiemShift {
    fn from(shift: &Shift) -> Self {
        Self {
            is_field_duty_shift: shift.is_field_duty_shift,
            hours: shift.worked_hours(),
        }
    }
}

/// The tier for a number of field-duty hours, `None` under four hours.
pub fn per_diem_tier(field_duty_hours: Decimal) -> Option<PerDiemTier> {
    if field_duty_hours >= TIER_C_MIN_HOURS {
        Some(PerDiemTier::C)
    } else if field_duty_hours >= TIER_B_MIN_HOURS {
        Some(PerDiemTier::B)
    } else if field_duty_hours >= TIER_A_MIN_HOURS {
        Some(PerDiemTier::A)
    } else {
        None
    }
}

/// Whether any shift of the day is a field-duty shift.
pub fn is_field_duty_day(shifts: &[PerDiemShift]) -> bool {
    shifts.iter().any(|s| s.is_field_duty_shift)
}

/// Total hours of the day's field-duty shifts.
pub fn field_duty_hours(shifts: &[PerDiemShift]) -> Decimal {
    shifts
        .iter()
        .filter(|s| s.is_field_duty_shift)
        .map(|s| s.hours)
        .sum()
}

/// Calculates the day's per-diem.
///
/// `amount = points × rate`. A day without field-duty shifts always
/// yields no tier, zero points and zero amount.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::{PerDiemShift, calculate_per_diem};
/// use pay_breakdown_engine::models::PerDiemTier;
/// use rust_decimal::Decimal;
///
/// let shifts = vec![
///     PerDiemShift { is_field_duty_shift: true, hours: Decimal::new(9, 0) },
///     PerDiemShift { is_field_duty_shift: false, hours: Decimal::new(4, 0) },
/// ];
/// let info = calculate_per_diem(&shifts, Decimal::new(80, 0));
/// assert_eq!(info.tier, Some(PerDiemTier::B));
/// assert_eq!(info.points, 2);
/// assert_eq!(info.amount, Decimal::new(160, 0));
/// ```
pub fn calculate_per_diem(shifts: &[PerDiemShift], rate: Decimal) -> PerDiemInfo {
    if !is_field_duty_day(shifts) {
        return PerDiemInfo::default();
    }

    match per_diem_tier(field_duty_hours(shifts)) {
        Some(tier) => PerDiemInfo {
            tier: Some(tier),
            points: tier.points(),
            amount: Decimal::from(tier.points()) * rate,
        },
        None => PerDiemInfo::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn field(hours: &str) -> PerDiemShift {
        PerDiemShift {
            is_field_duty_shift: true,
            hours: dec(hours),
        }
    }

    fn office(hours: &str) -> PerDiemShift {
        PerDiemShift {
            is_field_duty_shift: false,
            hours: dec(hours),
        }
    }

    // ==========================================================================
    // PD-001: tier boundaries are half-open
    // ==========================================================================
    #[test]
    fn test_pd_001_tier_boundaries() {
        let cases = [
            ("3.99", None),
            ("4", Some(PerDiemTier::A)),
            ("7.99", Some(PerDiemTier::A)),
            ("8", Some(PerDiemTier::B)),
            ("11.99", Some(PerDiemTier::B)),
            ("12", Some(PerDiemTier::C)),
            ("20", Some(PerDiemTier::C)),
        ];
        for (hours, expected) in cases {
            assert_eq!(per_diem_tier(dec(hours)), expected, "hours = {}", hours);
        }
    }

    // ==========================================================================
    // PD-002: amount is points times rate
    // ==========================================================================
    #[test]
    fn test_pd_002_amount_is_points_times_rate() {
        let rate = dec("80.5");

        let a = calculate_per_diem(&[field("4")], rate);
        assert_eq!((a.tier, a.points, a.amount), (Some(PerDiemTier::A), 1, dec("80.5")));

        let c = calculate_per_diem(&[field("12")], rate);
        assert_eq!((c.tier, c.points, c.amount), (Some(PerDiemTier::C), 3, dec("241.5")));
    }

    // ==========================================================================
    // PD-003: non field-duty day earns nothing
    // ==========================================================================
    #[test]
    fn test_pd_003_non_field_duty_day() {
        let info = calculate_per_diem(&[office("12")], dec("80.5"));
        assert_eq!(info, PerDiemInfo::default());
    }

    // ==========================================================================
    // PD-004: only field-duty hours count toward the tier
    // ==========================================================================
    #[test]
    fn test_pd_004_other_shift_hours_excluded() {
        let shifts = [field("3.5"), office("8")];
        assert!(is_field_duty_day(&shifts));
        assert_eq!(field_duty_hours(&shifts), dec("3.5"));

        let info = calculate_per_diem(&shifts, dec("80.5"));
        assert_eq!(info.tier, None);
        assert_eq!(info.points, 0);
        assert_eq!(info.amount, Decimal::ZERO);
    }

    #[test]
    fn test_field_duty_hours_summed_across_shifts() {
        let info = calculate_per_diem(&[field("4"), field("4.5")], dec("10"));
        assert_eq!(info.tier, Some(PerDiemTier::B));
        assert_eq!(info.amount, dec("20"));
    }

    #[test]
    fn test_no_shifts() {
        assert_eq!(calculate_per_diem(&[], dec("10")), PerDiemInfo::default());
    }
}
