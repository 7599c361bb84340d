//! CSV output writer.

use std::borrow::Borrow;
use std::fs::File;
use std::io::Write;

use super::CSV_TIMESTAMP_FORMAT;
use crate::MessageEvent;
use crate::error::Result;

const HEADER: [&str; 3] = ["Timestamp", "Author", "Body"];

/// Writes events to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp`, `Author`, `Body`
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`, local to the log
/// - Encoding: UTF-8
pub fn write_events_csv<E: Borrow<MessageEvent>>(events: &[E], output_path: &str) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(events, file)
}

/// Converts events to a CSV string.
///
/// Same format as [`write_events_csv`], but returns a String.
pub fn events_to_csv<E: Borrow<MessageEvent>>(events: &[E]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(events, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_csv_to<E: Borrow<MessageEvent>, W: Write>(events: &[E], sink: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for event in events {
        let event = event.borrow();
        writer.write_record([
            event.timestamp.format(CSV_TIMESTAMP_FORMAT).to_string().as_str(),
            event.author.as_str(),
            event.body.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn event(author: &str, body: &str) -> MessageEvent {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        MessageEvent::new(ts, author, body)
    }

    #[test]
    fn test_write_events_csv_basic() {
        let events = vec![event("Alice", "Hello"), event("Bob", "Hi there")];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_events_csv(&events, path).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("Timestamp;Author;Body\n"));
        assert!(content.contains("2024-06-15 12:30:00;Alice;Hello"));
        assert!(content.contains("2024-06-15 12:30:00;Bob;Hi there"));
    }

    #[test]
    fn test_semicolon_in_body_is_quoted() {
        let events = [event("Alice", "a;b")];
        let csv = events_to_csv(&events).unwrap();
        assert!(csv.contains("Alice;\"a;b\""));
    }

    #[test]
    fn test_borrowed_events() {
        let owned = event("Alice", "Hello");
        let borrowed = vec![&owned];
        let csv = events_to_csv(&borrowed).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }
}
