//! JSON output writer.

use std::borrow::Borrow;
use std::fs::File;
use std::io::Write;

use crate::MessageEvent;
use crate::core::models::AnalysisSummary;
use crate::error::Result;

/// Writes events to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-12T09:05:00", "author": "Alice", "body": "Hello"},
///   {"timestamp": "2024-01-12T09:06:00", "author": "Bob", "body": "Hi"}
/// ]
/// ```
pub fn write_events_json<E: Borrow<MessageEvent>>(events: &[E], output_path: &str) -> Result<()> {
    let json = events_to_json(events)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts events to a pretty JSON array string.
pub fn events_to_json<E: Borrow<MessageEvent>>(events: &[E]) -> Result<String> {
    let events: Vec<&MessageEvent> = events.iter().map(Borrow::borrow).collect();
    Ok(serde_json::to_string_pretty(&events)?)
}

/// Writes a summary as pretty JSON.
pub fn write_summary_json(summary: &AnalysisSummary, output_path: &str) -> Result<()> {
    let json = summary_to_json(summary)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a summary to a pretty JSON string.
///
/// Histograms serialize as plain arrays, ranked tables as
/// `{"value": ..., "count": ...}` objects, and an empty run's date range
/// as `null`.
pub fn summary_to_json(summary: &AnalysisSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
