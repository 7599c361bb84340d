//! # Chatlens
//!
//! A Rust library for turning exported chat logs into normalized message
//! events and activity, word and emoji statistics.
//!
//! ## Overview
//!
//! Chatlens reads line-oriented exports where each message starts with a
//! header such as:
//!
//! ```text
//! 12/01/2023, 9:05 AM - Alice: good morning
//! [12.01.23, 21:05:33] Bob: see you
//! ```
//!
//! Dates are read day-first; two-digit years below 50 land in the 2000s.
//! Lines that are not headers (continuations, notices) are skipped, and a
//! header with an impossible date or time is logged and skipped.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let text = "\
//! 12/01/2023, 9:05 AM - Alice: good morning 😀
//! 12/01/2023, 9:06 AM - Bob: good morning!";
//!
//!     // Parse one export
//!     let source = LogParser::new().parse_str(text)?;
//!
//!     // Merge any number of sources into a summary
//!     let summary = Aggregator::default().analyze(&[source]);
//!     assert_eq!(summary.total_messages, 2);
//!     assert_eq!(summary.top_words[0].value, "good");
//!     assert_eq!(summary.time_analysis.most_active_hour, 9);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Several Exports at Once
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let texts = ["01/01/2024, 10:00 - A: hello", "not a chat export"];
//! let results = LogParser::new().parse_all(&texts);
//!
//! // One result per input, in input order
//! assert!(results[0].is_ok());
//! assert!(results[1].as_ref().unwrap_err().is_no_valid_messages());
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LogParser`](parser::LogParser), [`ParsedSource`](parser::ParsedSource)
//! - [`parsing`] - Line-level sub-parsers (header, date, time, notices)
//! - [`core`] - Aggregation and summary types
//!   - [`core::aggregator`] - [`Aggregator`](core::Aggregator)
//!   - [`core::models`] - [`AnalysisSummary`](core::AnalysisSummary), [`TimeAnalysis`](core::TimeAnalysis)
//!   - [`core::insight`] - Sampled context blocks
//!   - [`core::output`] - Event and summary writers
//! - [`stopwords`] - Stop-word sources and the shared one-time cache
//! - [`config`] - Parser and analysis configuration
//! - [`format`] - Output format selection
//! - [`report`] - Text report rendering
//! - [`cli`] - CLI types (feature `cli`)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod report;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use event::MessageEvent;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core event type
    pub use crate::MessageEvent;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{LogParser, ParseStats, ParsedSource};

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig};
    pub use crate::stopwords::{StopWordCache, StopWordSource, StopWords};

    // Analysis
    pub use crate::core::{
        Aggregator, AnalysisSummary, DateRange, InsightContext, RankedEntry, TimeAnalysis,
        WordChars, merged_events,
    };

    // Output
    pub use crate::format::OutputFormat;
    pub use crate::report::render_text;
}
