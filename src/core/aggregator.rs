//! Merging parsed sources into an [`AnalysisSummary`].
//!
//! The aggregator is total: any list of parsed sources, including an empty
//! one, produces a summary. It performs no I/O; the only shared input is
//! the stop-word set, which is read-only.

use std::sync::Arc;

use log::debug;

use super::emoji::emoji_graphemes;
use super::frequency::FrequencyTable;
use super::histogram::{HOURS, Histogram, MONTHS, WEEKDAYS};
use super::models::{AnalysisSummary, DateRange, TimeAnalysis};
use super::tokens::{is_countable, tokenize_with};
use crate::MessageEvent;
use crate::config::AnalysisConfig;
use crate::parser::ParsedSource;
use crate::stopwords::{StopWordCache, StopWords};

/// Computes summaries from parsed sources.
///
/// # Example
///
/// ```rust
/// use chatlens::core::Aggregator;
/// use chatlens::parser::LogParser;
///
/// # fn main() -> chatlens::Result<()> {
/// let source = LogParser::new().parse_str(
///     "12/01/2023, 9:05 AM - Alice: good morning 😀\n\
///      12/01/2023, 9:06 AM - Bob: good morning!",
/// )?;
///
/// let summary = Aggregator::default().analyze(&[source]);
/// assert_eq!(summary.total_messages, 2);
/// assert_eq!(summary.total_users, 2);
/// assert_eq!(summary.time_analysis.hour_counts.get(9), 2);
/// assert_eq!(summary.top_words[0].value, "good");
/// assert_eq!(summary.top_emojis[0].value, "😀");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Aggregator {
    config: AnalysisConfig,
    stop_words: Arc<StopWords>,
}

impl Aggregator {
    /// Creates an aggregator with explicit stop words.
    pub fn new(config: AnalysisConfig, stop_words: Arc<StopWords>) -> Self {
        Self { config, stop_words }
    }

    /// Creates an aggregator using a cache's stop words, loading them if
    /// this is the first use of the cache.
    pub fn with_cache(config: AnalysisConfig, cache: &StopWordCache) -> Self {
        Self::new(config, cache.get())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Merges all sources and computes the summary.
    ///
    /// Events are visited source by source, each in file order; that
    /// concatenated order decides count ties.
    pub fn analyze(&self, sources: &[ParsedSource]) -> AnalysisSummary {
        let summary = self.analyze_events(sources.iter().flat_map(|s| s.events()));
        debug!(
            "Aggregated {} sources: {} messages, {} users",
            sources.len(),
            summary.total_messages,
            summary.total_users
        );
        summary
    }

    /// Computes the summary for an arbitrary event stream.
    pub fn analyze_events<'a, I>(&self, events: I) -> AnalysisSummary
    where
        I: IntoIterator<Item = &'a MessageEvent>,
    {
        let mut acc = Accumulator::default();
        for event in events {
            acc.record(event, &self.config, &self.stop_words);
        }
        acc.finish(&self.config)
    }
}

impl Default for Aggregator {
    /// Default limits and the built-in stop words.
    fn default() -> Self {
        Self::new(AnalysisConfig::default(), Arc::new(StopWords::builtin()))
    }
}

#[derive(Default)]
struct Accumulator {
    total: usize,
    users: FrequencyTable,
    words: FrequencyTable,
    emojis: FrequencyTable,
    hours: Histogram<HOURS>,
    weekdays: Histogram<WEEKDAYS>,
    months: Histogram<MONTHS>,
    range: Option<DateRange>,
}

impl Accumulator {
    fn record(&mut self, event: &MessageEvent, config: &AnalysisConfig, stop_words: &StopWords) {
        self.total += 1;
        self.users.increment(&event.author);

        for token in tokenize_with(&event.body, config.word_chars) {
            if is_countable(&token, config.min_token_len, stop_words) {
                self.words.increment(&token);
            }
        }
        self.emojis.extend(emoji_graphemes(&event.body));

        self.hours.record(event.hour());
        self.weekdays.record(event.weekday_index());
        self.months.record(event.month_index());

        match &mut self.range {
            Some(range) => range.include(event.timestamp),
            None => self.range = Some(DateRange::at(event.timestamp)),
        }
    }

    fn finish(self, config: &AnalysisConfig) -> AnalysisSummary {
        let user_counts = self.users.ranked();
        let top_users = user_counts.iter().take(config.top_authors).cloned().collect();

        AnalysisSummary {
            total_messages: self.total,
            total_users: self.users.len(),
            top_users,
            user_counts,
            top_words: self.words.top(config.top_tokens),
            top_emojis: self.emojis.top(config.top_emojis),
            time_analysis: TimeAnalysis::from_histograms(self.hours, self.weekdays, self.months),
            date_range: self.range,
        }
    }
}

/// Every event of every source, concatenated in source order.
pub fn merged_events(sources: &[ParsedSource]) -> Vec<&MessageEvent> {
    sources.iter().flat_map(|s| s.events()).collect()
}
