//! Core analysis logic for chatlens.
//!
//! This module contains:
//! - [`models`] - Summary data structures
//! - [`aggregator`] - Merging parsed sources into a summary
//! - [`frequency`], [`histogram`] - Counting primitives
//! - [`tokens`], [`emoji`] - Body extraction rules
//! - [`insight`] - Sampled context blocks
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{Aggregator, AnalysisSummary};
//! use chatlens::parser::LogParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let source = LogParser::new().parse_str("01/01/2024, 10:00 - Alice: hello")?;
//! let summary: AnalysisSummary = Aggregator::default().analyze(&[source]);
//! assert_eq!(summary.total_messages, 1);
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
pub mod emoji;
pub mod frequency;
pub mod histogram;
pub mod insight;
pub mod models;
pub mod output;
pub mod tokens;

pub use aggregator::{Aggregator, merged_events};
pub use frequency::FrequencyTable;
pub use histogram::Histogram;
pub use insight::{InsightContext, sample_events};
pub use models::{AnalysisSummary, DateRange, RankedEntry, TimeAnalysis};
pub use tokens::WordChars;

#[cfg(feature = "csv-output")]
pub use output::{events_to_csv, write_events_csv};
#[cfg(feature = "json-output")]
pub use output::{
    events_to_json, events_to_jsonl, summary_to_json, write_events_json, write_events_jsonl,
    write_summary_json,
};
