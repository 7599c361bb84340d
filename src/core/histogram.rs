//! Fixed-size count arrays indexed by a time component.

use serde::{Serialize, Serializer};

/// Buckets in the hour-of-day histogram.
pub const HOURS: usize = 24;
/// Buckets in the day-of-week histogram.
pub const WEEKDAYS: usize = 7;
/// Buckets in the month histogram.
pub const MONTHS: usize = 12;

/// A histogram with `N` buckets.
///
/// Serializes as a plain array of counts.
///
/// ```
/// use chatlens::core::histogram::Histogram;
///
/// let mut hours = Histogram::<24>::new();
/// hours.record(9);
/// hours.record(9);
/// hours.record(21);
/// assert_eq!(hours.get(9), 2);
/// assert_eq!(hours.peak(), 9);
/// assert_eq!(hours.total(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Histogram<const N: usize> {
    counts: [u64; N],
}

impl<const N: usize> Histogram<N> {
    pub fn new() -> Self {
        Self { counts: [0; N] }
    }

    /// Adds one to `bucket`. Out-of-range buckets are ignored.
    pub fn record(&mut self, bucket: usize) {
        if let Some(count) = self.counts.get_mut(bucket) {
            *count += 1;
        }
    }

    /// Count in `bucket`; `0` when out of range.
    pub fn get(&self, bucket: usize) -> u64 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u64; N] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Index of the largest bucket. The lowest index wins ties, so an empty
    /// histogram peaks at `0`.
    pub fn peak(&self) -> usize {
        let mut best = 0;
        for (i, &count) in self.counts.iter().enumerate() {
            if count > self.counts[best] {
                best = i;
            }
        }
        best
    }
}

impl<const N: usize> Default for Histogram<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Serialize for Histogram<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.counts.iter())
    }
}
