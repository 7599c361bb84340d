//! JSON Lines (JSONL) output writer.
//!
//! One event per line, suited to streaming consumers and line-based tools.

use std::borrow::Borrow;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::MessageEvent;
use crate::error::Result;

/// Writes events in JSONL format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-12T09:05:00","author":"Alice","body":"Hello"}
/// {"timestamp":"2024-01-12T09:06:00","author":"Bob","body":"Hi"}
/// ```
pub fn write_events_jsonl<E: Borrow<MessageEvent>>(events: &[E], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(events, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts events to a JSONL string.
pub fn events_to_jsonl<E: Borrow<MessageEvent>>(events: &[E]) -> Result<String> {
    let mut buffer = Vec::new();
    write_jsonl_to(events, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_jsonl_to<E: Borrow<MessageEvent>, W: Write>(events: &[E], sink: &mut W) -> Result<()> {
    for event in events {
        serde_json::to_writer(&mut *sink, event.borrow())?;
        sink.write_all(b"\n")?;
    }
    Ok(())
}
