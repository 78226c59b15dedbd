//! Effective-dated rate resolution.
//!
//! Monetary rates change at the start of a month. A timeline holds the
//! rates in force from each change onward; resolving a month returns the
//! rates of the latest change at or before it.

use serde::{Deserialize, Serialize};

/// Rates in force from `year`/`month` onward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry<R> {
    /// First year the rates apply.
    pub year: i32,
    /// First month the rates apply.
    pub month: u32,
    /// The rates.
    pub rates: R,
}

impl<R> RateEntry<R> {
    /// Creates an entry.
    pub fn new(year: i32, month: u32, rates: R) -> Self {
        Self { year, month, rates }
    }

    fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

/// Returns the rates of the last entry at or before `year`/`month`.
///
/// Entries must be sorted ascending. The comparison is lexicographic on
/// (year, month), so out-of-range months are not rejected. A month before
/// the first entry resolves to `R::default()`.
///
/// # Example
///
/// ```
/// use pay_breakdown_engine::calculation::{RateEntry, resolve_rates};
///
/// let entries = vec![RateEntry::new(2000, 1, 10), RateEntry::new(2024, 9, 12)];
/// assert_eq!(resolve_rates(&entries, 1999, 6), 0);
/// assert_eq!(resolve_rates(&entries, 2024, 8), 10);
/// assert_eq!(resolve_rates(&entries, 2024, 9), 12);
/// ```
pub fn resolve_rates<R: Clone + Default>(entries: &[RateEntry<R>], year: i32, month: u32) -> R {
    entries
        .iter()
        .rev()
        .find(|entry| entry.key() <= (year, month))
        .map(|entry| entry.rates.clone())
        .unwrap_or_default()
}

/// A sorted table of effective-dated rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTimeline<R> {
    entries: Vec<RateEntry<R>>,
}

impl<R> Default for RateTimeline<R> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<R: Clone + Default> RateTimeline<R> {
    /// Creates a timeline, sorting entries oldest first.
    pub fn new(entries: Vec<RateEntry<R>>) -> Self {
        let mut sorted = entries;
        sorted.sort_by_key(RateEntry::key);
        Self { entries: sorted }
    }

    /// Resolves the rates in force for `year`/`month`.
    pub fn resolve(&self, year: i32, month: u32) -> R {
        resolve_rates(&self.entries, year, month)
    }

    /// Returns the sorted entries.
    pub fn entries(&self) -> &[RateEntry<R>] {
        &self.entries
    }
}
