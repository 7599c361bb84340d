//! Summary data models.
//!
//! Everything here is derived data: an [`AnalysisSummary`] is rebuilt from
//! the events on every run and has no identity of its own.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::histogram::{Histogram, HOURS, MONTHS, WEEKDAYS};

/// Weekday names indexed like [`TimeAnalysis::day_of_week_counts`].
pub const WEEKDAY_NAMES: [&str; WEEKDAYS] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Month names indexed like [`TimeAnalysis::month_counts`].
pub const MONTH_NAMES: [&str; MONTHS] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Inclusive range between the earliest and latest timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// A range covering a single instant.
    pub fn at(ts: NaiveDateTime) -> Self {
        Self { start: ts, end: ts }
    }

    /// Widens the range to include `ts`.
    pub fn include(&mut self, ts: NaiveDateTime) {
        if ts < self.start {
            self.start = ts;
        }
        if ts > self.end {
            self.end = ts;
        }
    }

    /// The smallest range covering both.
    #[must_use]
    pub fn union(self, other: DateRange) -> DateRange {
        DateRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Builds a range from timestamps; `None` if there are none.
    pub fn spanning<I>(timestamps: I) -> Option<Self>
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        let mut iter = timestamps.into_iter();
        let mut range = DateRange::at(iter.next()?);
        for ts in iter {
            range.include(ts);
        }
        Some(range)
    }

    /// Returns `true` if `ts` falls inside the range.
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }
}

/// One row of a ranked frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub value: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(value: impl Into<String>, count: u64) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Activity by hour, weekday and month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TimeAnalysis {
    /// Events per hour of day, `0..=23`
    pub hour_counts: Histogram<HOURS>,
    /// Events per weekday, `0` = Sunday
    pub day_of_week_counts: Histogram<WEEKDAYS>,
    /// Events per month, `0` = January
    pub month_counts: Histogram<MONTHS>,
    /// Busiest hour, lowest index on ties
    pub most_active_hour: usize,
    /// Busiest weekday, lowest index on ties
    pub most_active_day: usize,
    /// Busiest month, lowest index on ties
    pub most_active_month: usize,
}

impl TimeAnalysis {
    /// Builds the analysis from filled histograms, computing the peaks.
    pub fn from_histograms(
        hour_counts: Histogram<HOURS>,
        day_of_week_counts: Histogram<WEEKDAYS>,
        month_counts: Histogram<MONTHS>,
    ) -> Self {
        Self {
            most_active_hour: hour_counts.peak(),
            most_active_day: day_of_week_counts.peak(),
            most_active_month: month_counts.peak(),
            hour_counts,
            day_of_week_counts,
            month_counts,
        }
    }

    /// Name of the busiest weekday.
    pub fn most_active_day_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.most_active_day]
    }

    /// Name of the busiest month.
    pub fn most_active_month_name(&self) -> &'static str {
        MONTH_NAMES[self.most_active_month]
    }
}

/// The merged statistics for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnalysisSummary {
    pub total_messages: usize,
    pub total_users: usize,
    /// Top-N authors by message count
    pub top_users: Vec<RankedEntry>,
    /// Every author, ranked
    pub user_counts: Vec<RankedEntry>,
    /// Top-N words after stop-word filtering
    pub top_words: Vec<RankedEntry>,
    /// Top-N emoji graphemes
    pub top_emojis: Vec<RankedEntry>,
    pub time_analysis: TimeAnalysis,
    /// `None` when there were no events
    pub date_range: Option<DateRange>,
}

impl AnalysisSummary {
    /// Message count for one author; `0` if unknown.
    pub fn user_count(&self, author: &str) -> u64 {
        self.user_counts
            .iter()
            .find(|entry| entry.value == author)
            .map_or(0, |entry| entry.count)
    }

    /// Returns `true` if no events were analyzed.
    pub fn is_empty(&self) -> bool {
        self.total_messages == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_date_range_include() {
        let mut range = DateRange::at(ts(10, 12));
        range.include(ts(5, 8));
        range.include(ts(20, 9));
        range.include(ts(12, 0));
        assert_eq!(range.start, ts(5, 8));
        assert_eq!(range.end, ts(20, 9));
        assert!(range.contains(ts(12, 0)));
        assert!(!range.contains(ts(21, 0)));
    }

    #[test]
    fn test_date_range_union() {
        let a = DateRange {
            start: ts(1, 0),
            end: ts(3, 0),
        };
        let b = DateRange {
            start: ts(2, 0),
            end: ts(9, 0),
        };
        assert_eq!(a.union(b), b.union(a));
        assert_eq!(a.union(b).start, ts(1, 0));
        assert_eq!(a.union(b).end, ts(9, 0));
    }

    #[test]
    fn test_date_range_spanning() {
        assert!(DateRange::spanning(Vec::new()).is_none());
        let range = DateRange::spanning(vec![ts(4, 1), ts(2, 1), ts(3, 1)]).unwrap();
        assert_eq!(range.start, ts(2, 1));
        assert_eq!(range.end, ts(4, 1));
    }

    #[test]
    fn test_time_analysis_names() {
        let mut days = Histogram::<WEEKDAYS>::new();
        days.record(5);
        let mut months = Histogram::<MONTHS>::new();
        months.record(11);
        let analysis = TimeAnalysis::from_histograms(Histogram::new(), days, months);
        assert_eq!(analysis.most_active_day_name(), "Friday");
        assert_eq!(analysis.most_active_month_name(), "December");
        assert_eq!(analysis.most_active_hour, 0);
    }

    #[test]
    fn test_user_count_lookup() {
        let summary = AnalysisSummary {
            user_counts: vec![RankedEntry::new("Alice", 3), RankedEntry::new("Bob", 1)],
            ..AnalysisSummary::default()
        };
        assert_eq!(summary.user_count("Alice"), 3);
        assert_eq!(summary.user_count("alice"), 0);
    }
}
