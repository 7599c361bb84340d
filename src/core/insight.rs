//! Plain-text context blocks for downstream language-model prompts.
//!
//! No network calls are made here; the block is meant to be handed to
//! whatever client the caller uses.

use std::fmt;

use super::models::AnalysisSummary;
use crate::MessageEvent;

/// Words listed in the context block.
pub const CONTEXT_TOP_WORDS: usize = 10;
/// Emojis listed in the context block.
pub const CONTEXT_TOP_EMOJIS: usize = 5;

/// Picks up to `max` events spread evenly over `events`.
///
/// Walks the slice with step `max(1, len / max)` and stops once `max`
/// events are collected, so the sample always starts at the first event.
///
/// ```
/// use chatlens::core::insight::sample_events;
///
/// let numbers: Vec<u32> = (0..10).collect();
/// let picked: Vec<&u32> = sample_events(&numbers.iter().collect::<Vec<_>>(), 3)
///     .into_iter()
///     .collect();
/// assert_eq!(picked, vec![&0, &3, &6]);
/// ```
pub fn sample_events<'a, T>(events: &[&'a T], max: usize) -> Vec<&'a T> {
    if max == 0 {
        return Vec::new();
    }
    let step = (events.len() / max).max(1);
    events.iter().step_by(step).take(max).copied().collect()
}

/// A rendered summary plus message sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightContext {
    pub total_messages: usize,
    pub total_users: usize,
    pub top_words: Vec<String>,
    pub top_emojis: Vec<String>,
    /// Sampled messages as `author: body`
    pub samples: Vec<String>,
}

impl InsightContext {
    /// Builds the context from a summary and the merged event stream.
    pub fn build(summary: &AnalysisSummary, events: &[&MessageEvent], sample: usize) -> Self {
        Self {
            total_messages: summary.total_messages,
            total_users: summary.total_users,
            top_words: summary
                .top_words
                .iter()
                .take(CONTEXT_TOP_WORDS)
                .map(|e| e.value.clone())
                .collect(),
            top_emojis: summary
                .top_emojis
                .iter()
                .take(CONTEXT_TOP_EMOJIS)
                .map(|e| e.value.clone())
                .collect(),
            samples: sample_events(events, sample)
                .into_iter()
                .map(MessageEvent::to_line)
                .collect(),
        }
    }

    /// The block as a string.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InsightContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Messages: {}", self.total_messages)?;
        writeln!(f, "Total Users: {}", self.total_users)?;
        writeln!(f, "Top Words: {}", self.top_words.join(", "))?;
        writeln!(f, "Top Emojis: {}", self.top_emojis.join(", "))?;
        writeln!(f)?;
        writeln!(f, "Sample Messages:")?;
        for line in &self.samples {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Aggregator, merged_events};
    use crate::parser::LogParser;

    #[test]
    fn test_sample_short_input_takes_all() {
        let items = [1, 2, 3];
        let refs: Vec<&i32> = items.iter().collect();
        assert_eq!(sample_events(&refs, 100).len(), 3);
    }

    #[test]
    fn test_sample_caps_at_max() {
        let items: Vec<usize> = (0..250).collect();
        let refs: Vec<&usize> = items.iter().collect();
        let picked = sample_events(&refs, 100);
        assert_eq!(picked.len(), 100);
        // step is 2
        assert_eq!(*picked[1], 2);
        assert_eq!(*picked[99], 198);
    }

    #[test]
    fn test_sample_zero() {
        let items = [1];
        let refs: Vec<&i32> = items.iter().collect();
        assert!(sample_events(&refs, 0).is_empty());
    }

    #[test]
    fn test_render() {
        let source = LogParser::new()
            .parse_str(
                "01/01/2024, 10:00 - Alice: coffee time ☕\n\
                 01/01/2024, 10:05 - Bob: coffee please",
            )
            .unwrap();
        let sources = [source];
        let summary = Aggregator::default().analyze(&sources);
        let events = merged_events(&sources);
        let text = InsightContext::build(&summary, &events, 100).render();

        assert!(text.starts_with("Total Messages: 2\nTotal Users: 2\n"));
        assert!(text.contains("Top Words: coffee, time, please\n"));
        assert!(text.contains("Top Emojis: ☕\n"));
        assert!(text.contains("Sample Messages:\nAlice: coffee time ☕\nBob: coffee please\n"));
    }
}
