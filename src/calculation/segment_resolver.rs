//! Time-of-day segmentation of a shift.
//!
//! A shift interval is projected onto boundary tables that attribute each
//! minute to a pay category. Regular days use two independent passes: an
//! exclusive table that tiles the day (night 50%, day 100%, evening/night
//! 50%) and a projection onto the full regular table that keeps only the
//! 20% evening premium, which overlaps the base attribution. Sabbath and
//! holiday hours use the special table.
//!
//! Tables extend to 06:00 of the following day. Anything past that point
//! is re-based onto the next day and resolved against the table that day
//! calls for.

use crate::models::{
    LabeledSegmentRange, MINUTES_PER_DAY, Point, SegmentKey, WorkDayMeta, WorkDayType,
};

/// 06:00, start of the daytime categories.
pub const DAY_START: i64 = 6 * 60;

/// 14:00, start of the evening premium window.
pub const EVENING_START: i64 = 14 * 60;

/// 17:00, end of regular daytime hours.
pub const DAY_END: i64 = 17 * 60;

/// 22:00, end of the evening premium window.
pub const EVENING_END: i64 = 22 * 60;

/// 06:00 of the following day, end of every boundary table.
pub const FULL_DAY_LIMIT: i64 = DAY_START + MINUTES_PER_DAY;

/// One row of a boundary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundaryEntry {
    /// The interval covered by the row.
    pub range: Point,
    /// The category attributed to it.
    pub key: SegmentKey,
}

impl BoundaryEntry {
    const fn new(start: i64, end: i64, key: SegmentKey) -> Self {
        Self {
            range: Point { start, end },
            key,
        }
    }
}

/// Mutually exclusive categories of a regular day.
pub const REGULAR_EXCLUSIVE_TABLE: [BoundaryEntry; 3] = [
    BoundaryEntry::new(0, DAY_START, SegmentKey::Hours50),
    BoundaryEntry::new(DAY_START, DAY_END, SegmentKey::Hours100),
    BoundaryEntry::new(DAY_END, FULL_DAY_LIMIT, SegmentKey::Hours50),
];

/// The regular table ordered by start, evening premium row included.
///
/// The evening row overlaps its neighbours, so the table is not a
/// partition. Only its `hours20` projections are used.
pub const REGULAR_TABLE: [BoundaryEntry; 4] = [
    BoundaryEntry::new(0, DAY_START, SegmentKey::Hours50),
    BoundaryEntry::new(DAY_START, DAY_END, SegmentKey::Hours100),
    BoundaryEntry::new(EVENING_START, EVENING_END, SegmentKey::Hours20),
    BoundaryEntry::new(DAY_END, FULL_DAY_LIMIT, SegmentKey::Hours50),
];

/// The Sabbath/holiday table for the given entry minute.
pub fn special_table(special_entry_minute: i64) -> [BoundaryEntry; 3] {
    [
        BoundaryEntry::new(0, DAY_START, SegmentKey::Shabbat200),
        BoundaryEntry::new(DAY_START, special_entry_minute, SegmentKey::Shabbat150),
        BoundaryEntry::new(special_entry_minute, FULL_DAY_LIMIT, SegmentKey::Shabbat200),
    ]
}

/// Projects `target` onto a sorted boundary table.
///
/// Finds `i`, the last row starting at or before the target start, and
/// `j`, the first row ending at or after the target end. When either is
/// missing or `i > j` the result is empty; otherwise rows `i..=j` are
/// clipped to the target and positive-duration pieces are kept.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::{REGULAR_EXCLUSIVE_TABLE, resolve_against_table};
/// use pay_breakdown_engine::models::{Point, SegmentKey};
///
/// let segments = resolve_against_table(Point::new(960, 1080), &REGULAR_EXCLUSIVE_TABLE);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].key, SegmentKey::Hours100);
/// assert_eq!(segments[1].point, Point::new(1020, 1080));
/// ```
pub fn resolve_against_table(target: Point, table: &[BoundaryEntry]) -> Vec<LabeledSegmentRange> {
    if target.is_empty() {
        return Vec::new();
    }

    let first = table.iter().rposition(|row| row.range.start <= target.start);
    let last = table.iter().position(|row| row.range.end >= target.end);

    match (first, last) {
        (Some(i), Some(j)) if i <= j => table[i..=j]
            .iter()
            .filter_map(|row| {
                row.range
                    .clip(&target)
                    .map(|point| LabeledSegmentRange::new(point, row.key))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Which set of tables a portion of a shift is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableSet {
    Regular,
    Special { entry: i64 },
}

impl TableSet {
    fn resolve(self, target: Point) -> Vec<LabeledSegmentRange> {
        match self {
            TableSet::Regular => {
                let mut segments = resolve_against_table(target, &REGULAR_EXCLUSIVE_TABLE);
                segments.extend(
                    resolve_against_table(target, &REGULAR_TABLE)
                        .into_iter()
                        .filter(|s| s.key == SegmentKey::Hours20),
                );
                segments
            }
            TableSet::Special { entry } => resolve_against_table(target, &special_table(entry)),
        }
    }
}

fn sort_segments(segments: &mut [LabeledSegmentRange]) {
    segments.sort_by_key(|s| (s.point.start, s.point.end));
}

/// Partitions shift intervals into labeled segments for a classified day.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftSegmentResolver;

impl ShiftSegmentResolver {
    /// Creates a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Segments `point` on the day described by `meta`.
    ///
    /// Exclusive categories tile `[start, end)`; `hours20` segments are
    /// computed independently and may overlap them. The result is sorted
    /// by start and empty when `start >= end`.
    ///
    /// # Example
    ///
    /// ```
    /// use pay_breakdown_engine::calculation::ShiftSegmentResolver;
    /// use pay_breakdown_engine::models::{Point, SegmentKey, WorkDayMeta, WorkDayType};
    /// use chrono::NaiveDate;
    ///
    /// let meta = WorkDayMeta {
    ///     date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
    ///     type_day: WorkDayType::Regular,
    ///     cross_day_continuation: false,
    ///     special_entry_minute: 1080,
    ///     next_special_entry_minute: 1080,
    /// };
    ///
    /// // 22:00 to 07:00: night premium until 06:00, then ordinary time
    /// let segments = ShiftSegmentResolver::new().resolve(Point::new(1320, 1860), &meta);
    /// assert_eq!(segments.len(), 2);
    /// assert_eq!(segments[0].key, SegmentKey::Hours50);
    /// assert_eq!(segments[0].point, Point::new(1320, 1800));
    /// assert_eq!(segments[1].key, SegmentKey::Hours100);
    /// assert_eq!(segments[1].point, Point::new(1800, 1860));
    /// ```
    pub fn resolve(&self, point: Point, meta: &WorkDayMeta) -> Vec<LabeledSegmentRange> {
        if point.is_empty() {
            return Vec::new();
        }

        let entry = meta.special_entry_minute;
        let special = TableSet::Special { entry };

        let mut segments = match meta.type_day {
            WorkDayType::Regular => self.resolve_with_rollover(point, TableSet::Regular, meta),
            WorkDayType::SpecialFull => self.resolve_with_rollover(point, special, meta),
            WorkDayType::SpecialPartialStart => {
                if point.end <= entry {
                    self.resolve_with_rollover(point, TableSet::Regular, meta)
                } else if point.start >= entry {
                    self.resolve_with_rollover(point, special, meta)
                } else {
                    let mut before = TableSet::Regular.resolve(Point::new(point.start, entry));
                    before.extend(self.resolve_with_rollover(
                        Point::new(entry, point.end),
                        special,
                        meta,
                    ));
                    before
                }
            }
        };

        sort_segments(&mut segments);
        segments
    }

    /// Resolves the part up to 06:00 next morning against `tables`, and any
    /// remainder against the next day's tables, shifted back by one day.
    /// The next day's special table uses that date's entry minute.
    fn resolve_with_rollover(
        &self,
        point: Point,
        tables: TableSet,
        meta: &WorkDayMeta,
    ) -> Vec<LabeledSegmentRange> {
        let mut segments = tables.resolve(Point::new(point.start, point.end.min(FULL_DAY_LIMIT)));

        if point.end > FULL_DAY_LIMIT {
            let next_day = Point::new(
                point.start.max(FULL_DAY_LIMIT) - MINUTES_PER_DAY,
                point.end - MINUTES_PER_DAY,
            );
            let next_tables = if meta.cross_day_continuation {
                TableSet::Special {
                    entry: meta.next_special_entry_minute,
                }
            } else {
                TableSet::Regular
            };
            segments.extend(
                next_tables
                    .resolve(next_day)
                    .into_iter()
                    .map(|s| LabeledSegmentRange::new(s.point.shifted(MINUTES_PER_DAY), s.key)),
            );
        }

        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::models::hours_for_key;

    fn meta(type_day: WorkDayType, cross_day_continuation: bool) -> WorkDayMeta {
        WorkDayMeta {
            date: NaiveDate::from_ymd_opt(2024, 9, 4).unwrap(),
            type_day,
            cross_day_continuation,
            special_entry_minute: SPECIAL_ENTRY,
            next_special_entry_minute: SPECIAL_ENTRY,
        }
    }

    const SPECIAL_ENTRY: i64 = 1080;

    fn resolve(start: i64, end: i64, m: &WorkDayMeta) -> Vec<LabeledSegmentRange> {
        ShiftSegmentResolver::new().resolve(Point::new(start, end), m)
    }

    fn seg(start: i64, end: i64, key: SegmentKey) -> LabeledSegmentRange {
        LabeledSegmentRange::new(Point::new(start, end), key)
    }

    fn exclusive(segments: &[LabeledSegmentRange]) -> Vec<LabeledSegmentRange> {
        segments
            .iter()
            .copied()
            .filter(|s| s.key != SegmentKey::Hours20)
            .collect()
    }

    // ==========================================================================
    // SR-001: day shift inside ordinary hours
    // ==========================================================================
    #[test]
    fn test_sr_001_day_shift_is_all_base() {
        let segments = resolve(480, 960, &meta(WorkDayType::Regular, false));
        assert_eq!(segments, vec![seg(480, 960, SegmentKey::Hours100)]);
    }

    // ==========================================================================
    // SR-002: early start picks up the night premium
    // ==========================================================================
    #[test]
    fn test_sr_002_early_morning_start() {
        let segments = resolve(300, 780, &meta(WorkDayType::Regular, false));
        assert_eq!(
            segments,
            vec![
                seg(300, 360, SegmentKey::Hours50),
                seg(360, 780, SegmentKey::Hours100),
            ]
        );
    }

    // ==========================================================================
    // SR-003: evening shift inside the evening window gets the stacking premium
    // ==========================================================================
    #[test]
    fn test_sr_003_evening_premium_overlaps_base() {
        let segments = resolve(900, 1260, &meta(WorkDayType::Regular, false));
        assert_eq!(
            segments,
            vec![
                seg(900, 1020, SegmentKey::Hours100),
                seg(900, 1260, SegmentKey::Hours20),
                seg(1020, 1260, SegmentKey::Hours50),
            ]
        );
        // Overlap is intentional: 4h base+night, 6h evening premium.
        assert_eq!(
            hours_for_key(&segments, SegmentKey::Hours20),
            Decimal::new(6, 0)
        );
    }

    // ==========================================================================
    // SR-004: shifts running past 22:00 keep the evening premium
    // ==========================================================================
    #[test]
    fn test_sr_004_evening_premium_past_window_end() {
        // 15:00-23:00
        let segments = resolve(900, 1380, &meta(WorkDayType::Regular, false));
        assert_eq!(
            segments,
            vec![
                seg(900, 1020, SegmentKey::Hours100),
                seg(900, 1320, SegmentKey::Hours20),
                seg(1020, 1380, SegmentKey::Hours50),
            ]
        );
        assert_eq!(hours_for_key(&segments, SegmentKey::Hours20), Decimal::new(7, 0));

        // 08:00-23:00
        let segments = resolve(480, 1380, &meta(WorkDayType::Regular, false));
        assert_eq!(
            segments,
            vec![
                seg(480, 1020, SegmentKey::Hours100),
                seg(840, 1320, SegmentKey::Hours20),
                seg(1020, 1380, SegmentKey::Hours50),
            ]
        );
        assert_eq!(hours_for_key(&segments, SegmentKey::Hours20), Decimal::new(8, 0));
    }

    #[test]
    fn test_evening_premium_for_shift_starting_before_window() {
        // 13:00-20:00 ends past 17:00, so the evening row is reached
        let segments = resolve(780, 1200, &meta(WorkDayType::Regular, false));
        assert_eq!(hours_for_key(&segments, SegmentKey::Hours20), Decimal::new(6, 0));
        assert_eq!(hours_for_key(&segments, SegmentKey::Hours100), Decimal::new(4, 0));
        assert_eq!(hours_for_key(&segments, SegmentKey::Hours50), Decimal::new(3, 0));
    }

    #[test]
    fn test_day_shift_inside_base_row_has_no_evening_premium() {
        // 08:00-16:00 fits in [06:00, 17:00)
        let segments = resolve(480, 960, &meta(WorkDayType::Regular, false));
        assert!(segments.iter().all(|s| s.key != SegmentKey::Hours20));
    }

    #[test]
    fn test_next_day_special_table_uses_next_entry_minute() {
        // Saturday night into a holiday Sunday, daylight saving ending overnight
        let mut m = meta(WorkDayType::SpecialFull, true);
        m.special_entry_minute = 1080;
        m.next_special_entry_minute = 1020;
        // 22:00 to 19:00 next day
        let segments = resolve(1320, 2580, &m);
        assert_eq!(
            segments,
            vec![
                seg(1320, 1800, SegmentKey::Shabbat200),
                seg(1800, 2460, SegmentKey::Shabbat150),
                seg(2460, 2580, SegmentKey::Shabbat200),
            ]
        );
    }

    // ==========================================================================
    // SR-005: overnight into an ordinary morning
    // ==========================================================================
    #[test]
    fn test_sr_005_overnight_into_regular_morning() {
        let segments = resolve(1320, 1920, &meta(WorkDayType::Regular, false));
        assert_eq!(
            segments,
            vec![
                seg(1320, 1800, SegmentKey::Hours50),
                seg(1800, 1920, SegmentKey::Hours100),
            ]
        );
    }

    // ==========================================================================
    // SR-006: regular night running into a Sabbath morning
    // ==========================================================================
    #[test]
    fn test_sr_006_overnight_into_special_morning() {
        let segments = resolve(1320, 1920, &meta(WorkDayType::Regular, true));
        assert_eq!(
            segments,
            vec![
                seg(1320, 1800, SegmentKey::Hours50),
                seg(1800, 1920, SegmentKey::Shabbat150),
            ]
        );
    }

    // ==========================================================================
    // SR-007: eve shift ending before entry is regular
    // ==========================================================================
    #[test]
    fn test_sr_007_partial_start_before_entry() {
        let segments = resolve(420, 900, &meta(WorkDayType::SpecialPartialStart, true));
        assert_eq!(segments, vec![seg(420, 900, SegmentKey::Hours100)]);
    }

    // ==========================================================================
    // SR-008: eve shift straddling entry
    // ==========================================================================
    #[test]
    fn test_sr_008_partial_start_straddles_entry() {
        let segments = resolve(900, 1200, &meta(WorkDayType::SpecialPartialStart, true));
        assert_eq!(
            segments,
            vec![
                seg(900, 1020, SegmentKey::Hours100),
                seg(900, 1080, SegmentKey::Hours20),
                seg(1020, 1080, SegmentKey::Hours50),
                seg(1080, 1200, SegmentKey::Shabbat200),
            ]
        );
    }

    // ==========================================================================
    // SR-009: eve shift starting after entry runs into the Sabbath
    // ==========================================================================
    #[test]
    fn test_sr_009_partial_start_after_entry_rolls_over() {
        let segments = resolve(1320, 1920, &meta(WorkDayType::SpecialPartialStart, true));
        assert_eq!(
            segments,
            vec![
                seg(1320, 1800, SegmentKey::Shabbat200),
                seg(1800, 1920, SegmentKey::Shabbat150),
            ]
        );
    }

    // ==========================================================================
    // SR-010: Sabbath day shift around the exit minute
    // ==========================================================================
    #[test]
    fn test_sr_010_special_full_day() {
        let segments = resolve(600, 1200, &meta(WorkDayType::SpecialFull, false));
        assert_eq!(
            segments,
            vec![
                seg(600, 1080, SegmentKey::Shabbat150),
                seg(1080, 1200, SegmentKey::Shabbat200),
            ]
        );
    }

    // ==========================================================================
    // SR-011: Sabbath night ending into an ordinary day
    // ==========================================================================
    #[test]
    fn test_sr_011_special_full_into_regular_day() {
        let segments = resolve(1320, 1920, &meta(WorkDayType::SpecialFull, false));
        assert_eq!(
            segments,
            vec![
                seg(1320, 1800, SegmentKey::Shabbat200),
                seg(1800, 1920, SegmentKey::Hours100),
            ]
        );
    }

    // ==========================================================================
    // SR-012: Sabbath night into a holiday
    // ==========================================================================
    #[test]
    fn test_sr_012_special_full_into_special_day() {
        let segments = resolve(1320, 1920, &meta(WorkDayType::SpecialFull, true));
        assert_eq!(
            segments,
            vec![
                seg(1320, 1800, SegmentKey::Shabbat200),
                seg(1800, 1920, SegmentKey::Shabbat150),
            ]
        );
    }

    #[test]
    fn test_standard_time_entry_moves_boundary() {
        let mut winter = meta(WorkDayType::SpecialFull, false);
        winter.special_entry_minute = 1020;
        let segments = resolve(960, 1080, &winter);
        assert_eq!(
            segments,
            vec![
                seg(960, 1020, SegmentKey::Shabbat150),
                seg(1020, 1080, SegmentKey::Shabbat200),
            ]
        );
    }

    #[test]
    fn test_empty_and_inverted_intervals() {
        let m = meta(WorkDayType::Regular, false);
        assert!(resolve(600, 600, &m).is_empty());
        assert!(resolve(900, 600, &m).is_empty());
    }

    #[test]
    fn test_resolve_against_table_without_matching_rows() {
        // No row starts at or before a negative minute.
        assert!(resolve_against_table(Point::new(-60, 300), &REGULAR_TABLE).is_empty());
        // Ends past every row.
        assert!(
            resolve_against_table(Point::new(1000, 1900), &REGULAR_EXCLUSIVE_TABLE).is_empty()
        );
    }

    #[test]
    fn test_segments_sorted_by_start() {
        let segments = resolve(900, 1200, &meta(WorkDayType::SpecialPartialStart, true));
        for pair in segments.windows(2) {
            assert!(pair[0].point.start <= pair[1].point.start);
        }
    }

    proptest! {
        #[test]
        fn prop_regular_exclusive_segments_tile_interval(
            start in 0i64..1440,
            length in 1i64..=1440,
            continuation in any::<bool>(),
        ) {
            let end = start + length;
            let segments = exclusive(&resolve(start, end, &meta(WorkDayType::Regular, continuation)));

            prop_assert!(!segments.is_empty());
            prop_assert_eq!(segments[0].point.start, start);
            prop_assert_eq!(segments[segments.len() - 1].point.end, end);
            for pair in segments.windows(2) {
                prop_assert_eq!(pair[0].point.end, pair[1].point.start);
            }
            let covered: i64 = segments.iter().map(|s| s.point.duration_minutes()).sum();
            prop_assert_eq!(covered, length);
        }

        #[test]
        fn prop_special_full_segments_cover_interval(
            start in 0i64..1440,
            length in 1i64..=1440,
        ) {
            let segments = resolve(start, start + length, &meta(WorkDayType::SpecialFull, true));
            let covered: i64 = segments.iter().map(|s| s.point.duration_minutes()).sum();
            prop_assert_eq!(covered, length);
        }
    }
}
