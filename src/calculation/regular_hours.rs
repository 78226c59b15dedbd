//! Tiered overtime allocation.
//!
//! Hours are poured greedily into three tiers: 100% up to the standard
//! daily hours, 125% up to the mid-tier threshold, and 150% for the rest.
//! Allocation continues from a running breakdown, so the shifts of one day
//! are folded into it in start-time order.

use rust_decimal::Decimal;

use crate::models::{HoursBucket, RegularBreakdown, WorkDayMeta};

/// Hours paid at 125% before spilling into 150%.
pub const DEFAULT_MID_TIER_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Remaining room in a bucket capped at `cap`.
fn room(bucket: &HoursBucket, cap: Decimal) -> Decimal {
    (cap - bucket.hours).max(Decimal::ZERO)
}

/// Allocates hours into the 100/125/150% tiers.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::RegularHoursAllocator;
/// use pay_breakdown_engine::models::{RegularBreakdown, WorkDayMeta, WorkDayType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let allocator = RegularHoursAllocator::new(Decimal::new(9, 0), Decimal::new(2, 0));
/// let meta = WorkDayMeta {
///     date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
///     type_day: WorkDayType::Regular,
///     cross_day_continuation: false,
///     special_entry_minute: 1080,
///     next_special_entry_minute: 1080,
/// };
///
/// let breakdown = allocator.allocate(RegularBreakdown::default(), Decimal::new(12, 0), &meta);
/// assert_eq!(breakdown.hours100.hours, Decimal::new(9, 0));
/// assert_eq!(breakdown.hours125.hours, Decimal::new(2, 0));
/// assert_eq!(breakdown.hours150.hours, Decimal::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegularHoursAllocator {
    standard_hours: Decimal,
    mid_tier_threshold: Decimal,
}

impl RegularHoursAllocator {
    /// Creates an allocator for the given thresholds.
    pub fn new(standard_hours: Decimal, mid_tier_threshold: Decimal) -> Self {
        Self {
            standard_hours,
            mid_tier_threshold,
        }
    }

    /// Hours paid at 100%.
    pub fn standard_hours(&self) -> Decimal {
        self.standard_hours
    }

    /// Hours paid at 125%.
    pub fn mid_tier_threshold(&self) -> Decimal {
        self.mid_tier_threshold
    }

    /// Adds `hours` to a running breakdown.
    ///
    /// Fills the remaining 100% room, then the remaining 125% room, and
    /// sends the rest to 150%. On a Sabbath/holiday not followed by another
    /// special day every hour goes to 150%. Non-positive hours leave the
    /// breakdown unchanged.
    pub fn allocate(
        &self,
        running: RegularBreakdown,
        hours: Decimal,
        meta: &WorkDayMeta,
    ) -> RegularBreakdown {
        if hours <= Decimal::ZERO {
            return running;
        }

        let mut breakdown = running;

        if meta.is_flat_special() {
            breakdown.hours150.hours += hours;
            return breakdown;
        }

        let to_100 = hours.min(room(&breakdown.hours100, self.standard_hours));
        breakdown.hours100.hours += to_100;
        let remaining = hours - to_100;

        let to_125 = remaining.min(room(&breakdown.hours125, self.mid_tier_threshold));
        breakdown.hours125.hours += to_125;

        breakdown.hours150.hours += remaining - to_125;
        breakdown
    }

    /// Folds per-shift hours, in the given order, into an empty breakdown.
    pub fn allocate_shifts<I>(&self, shift_hours: I, meta: &WorkDayMeta) -> RegularBreakdown
    where
        I: IntoIterator<Item = Decimal>,
    {
        shift_hours
            .into_iter()
            .fold(RegularBreakdown::default(), |running, hours| {
                self.allocate(running, hours, meta)
            })
    }

    /// Allocates a whole day's hours in a single step.
    pub fn allocate_day(&self, total_hours: Decimal, meta: &WorkDayMeta) -> RegularBreakdown {
        self.allocate(RegularBreakdown::default(), total_hours, meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkDayType;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn meta(type_day: WorkDayType, cross_day_continuation: bool) -> WorkDayMeta {
        WorkDayMeta {
            date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
            type_day,
            cross_day_continuation,
            special_entry_minute: 1080,
            next_special_entry_minute: 1080,
        }
    }

    fn regular_day() -> WorkDayMeta {
        meta(WorkDayType::Regular, false)
    }

    fn allocator() -> RegularHoursAllocator {
        RegularHoursAllocator::new(dec("9"), DEFAULT_MID_TIER_THRESHOLD)
    }

    fn tiers(breakdown: &RegularBreakdown) -> (Decimal, Decimal, Decimal) {
        (
            breakdown.hours100.hours,
            breakdown.hours125.hours,
            breakdown.hours150.hours,
        )
    }

    // ==========================================================================
    // RA-001: within standard hours
    // ==========================================================================
    #[test]
    fn test_ra_001_within_standard_hours() {
        let breakdown = allocator().allocate_day(dec("8"), &regular_day());
        assert_eq!(tiers(&breakdown), (dec("8"), dec("0"), dec("0")));
    }

    // ==========================================================================
    // RA-002: exactly at the standard threshold
    // ==========================================================================
    #[test]
    fn test_ra_002_at_standard_hours() {
        let breakdown = allocator().allocate_day(dec("9"), &regular_day());
        assert_eq!(tiers(&breakdown), (dec("9"), dec("0"), dec("0")));
    }

    // ==========================================================================
    // RA-003: overflow into the mid tier
    // ==========================================================================
    #[test]
    fn test_ra_003_into_mid_tier() {
        let breakdown = allocator().allocate_day(dec("10.5"), &regular_day());
        assert_eq!(tiers(&breakdown), (dec("9"), dec("1.5"), dec("0")));

        let at_cap = allocator().allocate_day(dec("11"), &regular_day());
        assert_eq!(tiers(&at_cap), (dec("9"), dec("2"), dec("0")));
    }

    // ==========================================================================
    // RA-004: beyond the mid tier
    // ==========================================================================
    #[test]
    fn test_ra_004_beyond_mid_tier() {
        let breakdown = allocator().allocate_day(dec("13.25"), &regular_day());
        assert_eq!(tiers(&breakdown), (dec("9"), dec("2"), dec("2.25")));
    }

    // ==========================================================================
    // RA-005: running breakdown is topped up across shifts
    // ==========================================================================
    #[test]
    fn test_ra_005_stateful_across_shifts() {
        let a = allocator();
        let day = regular_day();
        let first = a.allocate(RegularBreakdown::default(), dec("6"), &day);
        let second = a.allocate(first, dec("4"), &day);
        assert_eq!(tiers(&second), (dec("9"), dec("1"), dec("0")));
        let third = a.allocate(second, dec("3"), &day);
        assert_eq!(tiers(&third), (dec("9"), dec("2"), dec("2")));
    }

    // ==========================================================================
    // RA-006: per-shift and per-day agree for a single shift
    // ==========================================================================
    #[test]
    fn test_ra_006_single_shift_granularities_agree() {
        let a = allocator();
        let day = regular_day();
        for hours in ["0", "4", "9", "10", "11", "14.5"] {
            assert_eq!(
                a.allocate_shifts([dec(hours)], &day),
                a.allocate_day(dec(hours), &day),
                "hours = {}",
                hours
            );
        }
    }

    #[test]
    fn test_fold_over_several_shifts_matches_day_total() {
        let a = allocator();
        let day = regular_day();
        let folded = a.allocate_shifts([dec("5"), dec("5"), dec("3")], &day);
        assert_eq!(folded, a.allocate_day(dec("13"), &day));
    }

    // ==========================================================================
    // RA-007: Sabbath/holiday without continuation is flat 150%
    // ==========================================================================
    #[test]
    fn test_ra_007_flat_special_day() {
        let breakdown = allocator().allocate_day(dec("12"), &meta(WorkDayType::SpecialFull, false));
        assert_eq!(tiers(&breakdown), (dec("0"), dec("0"), dec("12")));
    }

    // ==========================================================================
    // RA-008: Sabbath/holiday with continuation is tiered normally
    // ==========================================================================
    #[test]
    fn test_ra_008_special_with_continuation_is_tiered() {
        let breakdown = allocator().allocate_day(dec("12"), &meta(WorkDayType::SpecialFull, true));
        assert_eq!(tiers(&breakdown), (dec("9"), dec("2"), dec("1")));
    }

    #[test]
    fn test_eve_day_is_tiered() {
        let breakdown =
            allocator().allocate_day(dec("10"), &meta(WorkDayType::SpecialPartialStart, true));
        assert_eq!(tiers(&breakdown), (dec("9"), dec("1"), dec("0")));
    }

    #[test]
    fn test_non_positive_hours_leave_breakdown_unchanged() {
        let a = allocator();
        let running = a.allocate_day(dec("5"), &regular_day());
        assert_eq!(a.allocate(running, Decimal::ZERO, &regular_day()), running);
        assert_eq!(a.allocate(running, dec("-2"), &regular_day()), running);
    }

    #[test]
    fn test_custom_mid_tier_threshold() {
        let a = RegularHoursAllocator::new(dec("8"), dec("1"));
        let breakdown = a.allocate_day(dec("10"), &regular_day());
        assert_eq!(tiers(&breakdown), (dec("8"), dec("1"), dec("1")));
        assert_eq!(a.standard_hours(), dec("8"));
        assert_eq!(a.mid_tier_threshold(), dec("1"));
    }
}
