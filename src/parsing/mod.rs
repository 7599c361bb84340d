//! Line-level parsing building blocks.
//!
//! The header recognizer is split into small sub-parsers so each step of
//! the date and time disambiguation can be tested on its own:
//!
//! - [`split_header`]: matches the header shape and splits out
//!   date, time, author and body
//! - [`parse_date_token`]: day-first `D/M/Y` with two-digit year pivot
//! - [`parse_time_token`]: `H:MM[:SS]` with optional `AM`/`PM`
//! - [`parse_line`]: combines the above into a [`LineOutcome`]
//!
//! [`LogParser`](crate::parser::LogParser) drives these over a whole input.

pub mod date;
pub mod header;
pub mod line;
pub mod notice;
pub mod time;

pub use date::{DateToken, YEAR_PIVOT, expand_two_digit_year, parse_date_token};
pub use header::{HEADER_PATTERN, HeaderParts, is_header_line, split_header};
pub use line::{LineOutcome, MalformedLine, parse_line};
pub use notice::is_system_notice;
pub use time::{Meridiem, TimeToken, parse_time_token};
