//! Labeled sub-intervals produced by shift segmentation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Point;

/// The pay category a segment is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKey {
    /// Evening premium, stacks on top of the base allocation.
    #[serde(rename = "hours20")]
    Hours20,
    /// Night premium.
    #[serde(rename = "hours50")]
    Hours50,
    /// Ordinary daytime hours.
    #[serde(rename = "hours100")]
    Hours100,
    /// Sabbath/holiday daytime hours.
    #[serde(rename = "shabbat150")]
    Shabbat150,
    /// Sabbath/holiday night and evening hours.
    #[serde(rename = "shabbat200")]
    Shabbat200,
}

impl SegmentKey {
    /// The fixed percent attached to the category.
    pub fn percent(self) -> u32 {
        match self {
            SegmentKey::Hours20 => 20,
            SegmentKey::Hours50 => 50,
            SegmentKey::Hours100 => 100,
            SegmentKey::Shabbat150 => 150,
            SegmentKey::Shabbat200 => 200,
        }
    }
}

/// A projection of a shift onto one boundary-table entry.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::models::{LabeledSegmentRange, Point, SegmentKey};
/// use rust_decimal::Decimal;
///
/// let segment = LabeledSegmentRange::new(Point::new(1020, 1080), SegmentKey::Hours50);
/// assert_eq!(segment.percent, 50);
/// assert_eq!(segment.hours(), Decimal::ONE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledSegmentRange {
    /// The covered interval.
    pub point: Point,
    /// The category percent.
    pub percent: u32,
    /// The category.
    pub key: SegmentKey,
}

impl LabeledSegmentRange {
    /// Creates a segment, taking the percent from the key.
    pub fn new(point: Point, key: SegmentKey) -> Self {
        Self {
            point,
            percent: key.percent(),
            key,
        }
    }

    /// Duration of the segment in hours.
    pub fn hours(&self) -> Decimal {
        self.point.hours()
    }
}

/// Sums the hours of all segments carrying `key`.
pub fn hours_for_key(segments: &[LabeledSegmentRange], key: SegmentKey) -> Decimal {
    segments
        .iter()
        .filter(|s| s.key == key)
        .map(LabeledSegmentRange::hours)
        .sum()
}
