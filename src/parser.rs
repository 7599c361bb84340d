//! Turning raw log text into message events.
//!
//! [`LogParser`] is the single entry point. It reads one input at a time,
//! classifies each physical line with [`parse_line`], and collects the
//! resulting [`MessageEvent`]s into a [`ParsedSource`]. Several inputs can be
//! parsed concurrently with [`LogParser::parse_all`]; each worker owns its
//! input and shares nothing but the read-only configuration.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::LogParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let text = "\
//! 12/01/2023, 9:05 AM - Alice: good morning
//! this line continues the previous message and is skipped
//! 12/01/2023, 9:06 AM - Bob: hi";
//!
//! let source = LogParser::new().parse_str(text)?;
//! assert_eq!(source.len(), 2);
//! assert_eq!(source.authors(), ["Alice", "Bob"]);
//! assert_eq!(source.stats().unmatched, 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fs;
use std::panic;
use std::path::Path;
use std::thread;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::MessageEvent;
use crate::config::ParserConfig;
use crate::core::models::DateRange;
use crate::error::{ChatlensError, Result};
use crate::parsing::{LineOutcome, is_system_notice, parse_line};

/// Leading U+FEFF that some exporters write before the first line.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Per-input line accounting.
///
/// Every physical line lands in exactly one bucket, so the buckets always
/// sum to `lines`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Physical lines examined
    pub lines: usize,
    /// Lines empty after trimming
    pub blank: usize,
    /// Lines that are not message headers
    pub unmatched: usize,
    /// Header-shaped lines with an unusable date, time or author
    pub malformed: usize,
    /// Header lines dropped as app notices
    pub notices: usize,
    /// Lines that became events
    pub accepted: usize,
}

impl ParseStats {
    /// Lines that did not become events.
    pub fn skipped(&self) -> usize {
        self.lines - self.accepted
    }
}

/// The events recovered from one input, in file order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedSource {
    label: Option<String>,
    events: Vec<MessageEvent>,
    authors: Vec<String>,
    date_range: DateRange,
    stats: ParseStats,
}

impl ParsedSource {
    /// Builds a source from events that are already parsed.
    ///
    /// Returns [`ChatlensError::NoValidMessages`] when `events` is empty.
    pub fn from_events(label: Option<String>, events: Vec<MessageEvent>) -> Result<Self> {
        let stats = ParseStats {
            lines: events.len(),
            accepted: events.len(),
            ..ParseStats::default()
        };
        Self::build(label, events, stats)
    }

    fn build(label: Option<String>, events: Vec<MessageEvent>, stats: ParseStats) -> Result<Self> {
        let Some(date_range) = DateRange::spanning(events.iter().map(|e| e.timestamp)) else {
            return Err(ChatlensError::no_valid_messages(label, stats.lines));
        };

        let mut seen = HashSet::new();
        let authors = events
            .iter()
            .filter(|e| seen.insert(e.author.as_str()))
            .map(|e| e.author.clone())
            .collect();

        Ok(Self {
            label,
            events,
            authors,
            date_range,
            stats,
        })
    }

    /// Name of the input, usually its path.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn events(&self) -> &[MessageEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<MessageEvent> {
        self.events
    }

    /// Distinct authors in order of first appearance.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// Earliest and latest event timestamps.
    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always `false`: a source holds at least one event.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Parser for line-oriented chat logs.
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
}

impl LogParser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses log text that has no name.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::NoValidMessages`] if no line yields an event.
    pub fn parse_str(&self, text: &str) -> Result<ParsedSource> {
        self.parse_text(None, text)
    }

    /// Parses log text, using `label` in diagnostics and errors.
    pub fn parse_labeled(&self, label: &str, text: &str) -> Result<ParsedSource> {
        self.parse_text(Some(label), text)
    }

    /// Reads and parses a file. The path becomes the source label.
    ///
    /// # Errors
    ///
    /// [`ChatlensError::Io`] if the file cannot be read, or
    /// [`ChatlensError::NoValidMessages`] if it holds no events.
    pub fn parse(&self, path: &Path) -> Result<ParsedSource> {
        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::utf8(path.display().to_string(), e))?;
        self.parse_text(Some(&path.display().to_string()), &text)
    }

    /// Parses several texts concurrently, one worker per input.
    ///
    /// Results come back in input order regardless of completion order.
    /// A failure affects only its own slot.
    pub fn parse_all<T>(&self, texts: &[T]) -> Vec<Result<ParsedSource>>
    where
        T: AsRef<str> + Sync,
    {
        self.fan_out(texts, |text| self.parse_str(text.as_ref()))
    }

    /// Reads and parses several files concurrently, one worker per file.
    ///
    /// Results come back in input order.
    pub fn parse_files<P>(&self, paths: &[P]) -> Vec<Result<ParsedSource>>
    where
        P: AsRef<Path> + Sync,
    {
        self.fan_out(paths, |path| self.parse(path.as_ref()))
    }

    fn fan_out<T, F>(&self, inputs: &[T], work: F) -> Vec<Result<ParsedSource>>
    where
        T: Sync,
        F: Fn(&T) -> Result<ParsedSource> + Sync,
    {
        if inputs.len() <= 1 {
            return inputs.iter().map(&work).collect();
        }

        let work = &work;
        thread::scope(|scope| {
            let handles: Vec<_> = inputs
                .iter()
                .map(|input| scope.spawn(move || work(input)))
                .collect();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect()
        })
    }

    fn parse_text(&self, label: Option<&str>, text: &str) -> Result<ParsedSource> {
        let name = label.unwrap_or("<input>");
        let mut stats = ParseStats::default();
        let mut events = Vec::new();
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);

        for (index, line) in text.lines().enumerate() {
            stats.lines += 1;
            match parse_line(line) {
                LineOutcome::Blank => stats.blank += 1,
                LineOutcome::Unmatched => {
                    stats.unmatched += 1;
                    trace!("{name}:{}: not a message header, skipped", index + 1);
                }
                LineOutcome::Malformed(reason) => {
                    stats.malformed += 1;
                    if self.config.warn_on_malformed {
                        warn!("{name}:{}: skipping malformed line: {reason}", index + 1);
                    }
                }
                LineOutcome::Event(event) => {
                    if self.config.skip_system_notices
                        && is_system_notice(&event.author, &event.body)
                    {
                        stats.notices += 1;
                        trace!("{name}:{}: system notice, skipped", index + 1);
                    } else {
                        stats.accepted += 1;
                        events.push(event);
                    }
                }
            }
        }

        debug!(
            "{name}: {} events from {} lines ({} malformed, {} unmatched)",
            stats.accepted, stats.lines, stats.malformed, stats.unmatched
        );

        ParsedSource::build(label.map(str::to_string), events, stats)
    }
}
