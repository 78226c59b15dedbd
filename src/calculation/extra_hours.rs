//! Evening, night and Sabbath/holiday hour sums.
//!
//! Premium categories are read straight off the segment list. Evening
//! premium segments overlap the base attribution and are counted as-is.

use crate::models::{
    ExtraBreakdown, HoursBucket, LabeledSegmentRange, SegmentKey, SpecialBreakdown,
    hours_for_key,
};

/// Sums `hours20` and `hours50` segments; every other key is ignored.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::calculate_extra_hours;
/// use pay_breakdown_engine::models::{LabeledSegmentRange, Point, SegmentKey};
/// use rust_decimal::Decimal;
///
/// let segments = vec![
///     LabeledSegmentRange::new(Point::new(900, 1020), SegmentKey::Hours100),
///     LabeledSegmentRange::new(Point::new(900, 1260), SegmentKey::Hours20),
///     LabeledSegmentRange::new(Point::new(1020, 1260), SegmentKey::Hours50),
/// ];
/// let extra = calculate_extra_hours(&segments);
/// assert_eq!(extra.hours20.hours, Decimal::new(6, 0));
/// assert_eq!(extra.hours50.hours, Decimal::new(4, 0));
/// ```
pub fn calculate_extra_hours(segments: &[LabeledSegmentRange]) -> ExtraBreakdown {
    ExtraBreakdown {
        hours20: HoursBucket::with_hours(20, hours_for_key(segments, SegmentKey::Hours20)),
        hours50: HoursBucket::with_hours(50, hours_for_key(segments, SegmentKey::Hours50)),
    }
}

/// Sums `shabbat150` and `shabbat200` segments; every other key is ignored.
pub fn calculate_special_hours(segments: &[LabeledSegmentRange]) -> SpecialBreakdown {
    SpecialBreakdown {
        shabbat150: HoursBucket::with_hours(150, hours_for_key(segments, SegmentKey::Shabbat150)),
        shabbat200: HoursBucket::with_hours(200, hours_for_key(segments, SegmentKey::Shabbat200)),
    }
}
