//! Output format writers.
//!
//! This module provides writers for the normalized event stream and the
//! analysis summary:
//! - [`write_events_csv`] / [`events_to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_events_json`] / [`events_to_json`] - JSON array of events - requires `json-output` feature
//! - [`write_events_jsonl`] / [`events_to_jsonl`] - JSON Lines, one event per line - requires `json-output` feature
//! - [`write_summary_json`] / [`summary_to_json`] - pretty JSON summary - requires `json-output` feature
//!
//! Event writers accept `&[MessageEvent]` as well as `&[&MessageEvent]`, so
//! both a single parsed source and a merged stream can be written.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{events_to_csv, events_to_jsonl};
//! use chatlens::parser::LogParser;
//!
//! let source = LogParser::new().parse_str("01/01/2024, 10:00 - Alice: hello")?;
//!
//! let csv = events_to_csv(source.events())?;
//! assert_eq!(csv, "Timestamp;Author;Body\n2024-01-01 10:00:00;Alice;hello\n");
//!
//! let jsonl = events_to_jsonl(source.events())?;
//! assert!(jsonl.starts_with(r#"{"timestamp":"2024-01-01T10:00:00""#));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{events_to_csv, write_events_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{events_to_json, summary_to_json, write_events_json, write_summary_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{events_to_jsonl, write_events_jsonl};

/// Timestamp layout used in CSV output.
pub const CSV_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
