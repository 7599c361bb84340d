//! Output formats for the normalized event stream.
//!
//! Library-first format selection, independent of the CLI. The summary is
//! always JSON (see [`summary_to_json`](crate::core::output::summary_to_json));
//! these formats apply to events.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, events_to_string};
//! use chatlens::parser::LogParser;
//!
//! let source = LogParser::new().parse_str("01/01/2024, 10:00 - Alice: hello")?;
//! let text = events_to_string(source.events(), OutputFormat::Jsonl)?;
//! assert_eq!(text.lines().count(), 1);
//!
//! // Or use format detection from extension
//! let format = OutputFormat::from_path("events.csv")?;
//! assert_eq!(format, OutputFormat::Csv);
//! # Ok(())
//! # }
//! ```

use std::borrow::Borrow;

use crate::MessageEvent;
use crate::error::ChatlensError;

/// Output format for event exports.
///
/// - [`Csv`](OutputFormat::Csv) - `Timestamp;Author;Body` rows, compact
/// - [`Json`](OutputFormat::Json) - Structured array
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of events
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Csv.extension(), "csv");
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from a file path based on extension.
    ///
    /// Matching is case-insensitive; `.ndjson` is read as JSONL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// let format = OutputFormat::from_path("output.jsonl").unwrap();
    /// assert_eq!(format, OutputFormat::Jsonl);
    ///
    /// let err = OutputFormat::from_path("output.xml").unwrap_err();
    /// assert!(err.to_string().contains("csv, json, jsonl"));
    /// ```
    pub fn from_path(path: &str) -> Result<Self, ChatlensError> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();
        if ext == "ndjson" {
            return Ok(OutputFormat::Jsonl);
        }

        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.extension() == ext)
            .ok_or_else(|| {
                let expected: Vec<&str> =
                    OutputFormat::all().iter().map(OutputFormat::extension).collect();
                ChatlensError::invalid_format(
                    "output",
                    format!(
                        "Unknown file extension: '.{ext}'. Expected one of: {}",
                        expected.join(", ")
                    ),
                )
            })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

/// Writes events to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_events<E: Borrow<MessageEvent>>(
    events: &[E],
    path: &str,
    format: OutputFormat,
) -> Result<(), ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_events_csv(events, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_events_json(events, path),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_events_jsonl(events, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts events to a string in the specified format.
#[allow(unused_variables)]
pub fn events_to_string<E: Borrow<MessageEvent>>(
    events: &[E],
    format: OutputFormat,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::events_to_csv(events),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::events_to_json(events),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::events_to_jsonl(events),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatlensError {
    let feature = match format {
        OutputFormat::Csv => "csv-output",
        OutputFormat::Json | OutputFormat::Jsonl => "json-output",
    };
    ChatlensError::invalid_format(
        "output",
        format!("Output format {format:?} requires the '{feature}' feature to be enabled"),
    )
}
