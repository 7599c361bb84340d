//! Single-line classification.
//!
//! Combines the header splitter with the date and time sub-parsers and
//! decides what one physical line contributes.

use thiserror::Error;

use super::date::{DateToken, parse_date_token};
use super::header::split_header;
use super::time::{TimeToken, parse_time_token};
use crate::MessageEvent;

/// Why a header-shaped line was rejected.
///
/// These are recovered locally by the parser: logged, counted, skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedLine {
    /// The date token did not have three numeric groups.
    #[error("date token '{0}' is not day/month/year")]
    DateToken(String),

    /// The time token could not be read.
    #[error("time token '{0}' is not H:MM[:SS] [AM|PM]")]
    TimeToken(String),

    /// The date groups do not form a calendar date.
    #[error("no such date: day {day}, month {month}, year {year}")]
    CalendarDate { day: u32, month: u32, year: i32 },

    /// The time fields do not form a clock time.
    #[error("no such time: {hour:02}:{minute:02}:{second:02}")]
    ClockTime { hour: u32, minute: u32, second: u32 },

    /// Nothing but whitespace before the author colon.
    #[error("author is empty")]
    EmptyAuthor,
}

/// What one physical line contributes to a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty after trimming.
    Blank,
    /// Not a header line: continuation text or a system notice.
    Unmatched,
    /// Header-shaped but unusable.
    Malformed(MalformedLine),
    /// A complete message event.
    Event(MessageEvent),
}

impl LineOutcome {
    /// Returns the event, if this line produced one.
    pub fn into_event(self) -> Option<MessageEvent> {
        match self {
            LineOutcome::Event(event) => Some(event),
            _ => None,
        }
    }
}

/// Classifies one line of an export.
///
/// ```
/// use chatlens::parsing::{LineOutcome, parse_line};
///
/// let outcome = parse_line("12/01/2023, 9:05 AM - Alice: good morning");
/// let event = outcome.into_event().unwrap();
/// assert_eq!(event.author, "Alice");
/// assert_eq!(event.timestamp.to_string(), "2023-01-12 09:05:00");
///
/// assert_eq!(parse_line("   "), LineOutcome::Blank);
/// assert_eq!(parse_line("second line of a message"), LineOutcome::Unmatched);
/// ```
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let Some(parts) = split_header(line) else {
        return LineOutcome::Unmatched;
    };

    match build_event(parts.date, parts.time, parts.author, parts.body) {
        Ok(event) => LineOutcome::Event(event),
        Err(reason) => LineOutcome::Malformed(reason),
    }
}

fn build_event(
    date: &str,
    time: &str,
    author: &str,
    body: &str,
) -> Result<MessageEvent, MalformedLine> {
    if author.is_empty() {
        return Err(MalformedLine::EmptyAuthor);
    }

    let date_token =
        parse_date_token(date).ok_or_else(|| MalformedLine::DateToken(date.to_string()))?;
    let time_token =
        parse_time_token(time).ok_or_else(|| MalformedLine::TimeToken(time.to_string()))?;

    let date = date_token.to_date().ok_or_else(|| calendar_error(date_token))?;
    let time = time_token.to_time().ok_or_else(|| clock_error(time_token))?;

    Ok(MessageEvent::new(date.and_time(time), author, body))
}

fn calendar_error(token: DateToken) -> MalformedLine {
    MalformedLine::CalendarDate {
        day: token.day,
        month: token.month,
        year: token.year,
    }
}

fn clock_error(token: TimeToken) -> MalformedLine {
    MalformedLine::ClockTime {
        hour: token.hour24(),
        minute: token.minute,
        second: token.second,
    }
}
