//! Normalized message events.
//!
//! This module provides [`MessageEvent`], the unit the parser emits for every
//! accepted header line and the aggregator consumes.
//!
//! # Overview
//!
//! An event always carries all three fields:
//! - `timestamp`: wall-clock time as written in the export, no zone attached
//! - `author`: trimmed display name, never empty
//! - `body`: the rest of the line, colons included
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageEvent;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 12)
//!     .unwrap()
//!     .and_hms_opt(9, 5, 0)
//!     .unwrap();
//! let event = MessageEvent::new(ts, "Alice", "good morning");
//!
//! assert_eq!(event.author(), "Alice");
//! assert_eq!(event.hour(), 9);
//! assert_eq!(event.weekday_index(), 4); // Thursday
//! assert_eq!(event.month_index(), 0); // January
//! ```
//!
//! ## Serialization
//!
//! ```
//! use chatlens::MessageEvent;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
//! let event = MessageEvent::new(ts, "Bob", "see: https://example.com");
//! let json = serde_json::to_string(&event)?;
//! let parsed: MessageEvent = serde_json::from_str(&json)?;
//!
//! assert_eq!(event, parsed);
//! assert!(json.contains("2024-06-15T12:00:00"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// One timestamped, attributed line of conversation.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local wall-clock time resolved from the header |
/// | `author` | `String` | Display name, trimmed, case preserved |
/// | `body` | `String` | Message text after the author's colon |
///
/// The timestamp is deliberately zone-less: exports do not record an offset,
/// and every bucket computed from it (hour, weekday, month) uses the time as
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageEvent {
    /// When the message was sent, as written in the export.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub author: String,

    /// Text content of the message.
    ///
    /// Only the header line's text: continuation lines are not joined.
    pub body: String,
}

impl MessageEvent {
    /// Creates a new event.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            body: body.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    // =========================================================================
    // Time buckets
    // =========================================================================

    /// Hour of day, `0..=23`.
    pub fn hour(&self) -> usize {
        self.timestamp.hour() as usize
    }

    /// Day of week, `0` = Sunday through `6` = Saturday.
    pub fn weekday_index(&self) -> usize {
        self.timestamp.weekday().num_days_from_sunday() as usize
    }

    /// Month of year, `0` = January through `11` = December.
    pub fn month_index(&self) -> usize {
        self.timestamp.month0() as usize
    }

    /// Renders the event as `author: body`.
    pub fn to_line(&self) -> String {
        format!("{}: {}", self.author, self.body)
    }
}
