//! Header-line shape matching and author/body splitting.
//!
//! A header line looks like one of:
//!
//! - `12/01/2023, 9:05 AM - Alice: good morning`
//! - `[15.01.24, 10:30:45] Bob: hi`
//! - `26-10-2025 20:40 - Carol: see you at 8:30`
//!
//! The pattern only locates the four fields. Whether the date and time are
//! real is decided by the date and time sub-parsers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shape of a message header line.
///
/// 1. optional leading bracket(s)
/// 2. date: two or three 1-4 digit groups joined by `/`, `-` or `.`
/// 3. comma and/or whitespace
/// 4. time: `H:MM` or `H:MM:SS`, optional `AM`/`PM`
/// 5. optional `]`, optional `-`
/// 6. author: anything up to the first colon
/// 7. body: the rest of the line, colons included
pub const HEADER_PATTERN: &str = r"^\[*(\d{1,4}(?:[/.\-]\d{1,4}){1,2})[,\s]+(\d{1,2}:\d{2}(?::\d{2})?(?:\s?[AaPp][Mm])?)\]?\s*-?\s*([^:]+?):\s*(.+)$";

static HEADER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(HEADER_PATTERN).expect("header pattern is a valid regex"));

/// Raw fields of a header line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderParts<'a> {
    /// Date token, e.g. `12/01/2023`
    pub date: &'a str,
    /// Time token, e.g. `9:05 AM`
    pub time: &'a str,
    /// Author, trimmed; may be empty if the line had only whitespace there
    pub author: &'a str,
    /// Body, trimmed
    pub body: &'a str,
}

/// Splits a trimmed line into its header fields.
///
/// Returns `None` when the line does not have the header shape
/// (continuation lines, system notices without an author, blank lines).
///
/// ```
/// use chatlens::parsing::split_header;
///
/// let parts = split_header("12/01/2023, 9:05 AM - Alice: meet at 10:30: ok?").unwrap();
/// assert_eq!(parts.date, "12/01/2023");
/// assert_eq!(parts.time, "9:05 AM");
/// assert_eq!(parts.author, "Alice");
/// assert_eq!(parts.body, "meet at 10:30: ok?");
/// ```
pub fn split_header(line: &str) -> Option<HeaderParts<'_>> {
    let caps = HEADER_REGEX.captures(line)?;

    Some(HeaderParts {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        author: caps.get(3)?.as_str().trim(),
        body: caps.get(4)?.as_str().trim(),
    })
}

/// Returns `true` if the line has the header shape.
pub fn is_header_line(line: &str) -> bool {
    HEADER_REGEX.is_match(line)
}
