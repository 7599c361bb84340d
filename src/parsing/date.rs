//! Date-token parsing.
//!
//! Exports write dates as two or three numeric groups separated by `/`, `-`
//! or `.`. Groups are read positionally as day, month, year. There is no
//! month-first detection: `03/04/2024` is always the 3rd of April.

use chrono::NaiveDate;

/// Two-digit years below this value land in the 2000s, the rest in the 1900s.
pub const YEAR_PIVOT: u32 = 50;

/// Separators accepted between date groups.
pub const DATE_SEPARATORS: [char; 3] = ['/', '-', '.'];

/// A day-first date token, not yet validated against the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateToken {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl DateToken {
    /// Resolves the token to a calendar date.
    ///
    /// Returns `None` for impossible dates such as month 13 or 30 February.
    pub fn to_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Expands a year below 100 to four digits using [`YEAR_PIVOT`].
///
/// ```
/// use chatlens::parsing::expand_two_digit_year;
///
/// assert_eq!(expand_two_digit_year(29), 2029);
/// assert_eq!(expand_two_digit_year(50), 1950);
/// assert_eq!(expand_two_digit_year(0), 2000);
/// assert_eq!(expand_two_digit_year(2024), 2024);
/// ```
pub fn expand_two_digit_year(year: u32) -> i32 {
    let expanded = match year {
        y if y < YEAR_PIVOT => 2000 + y,
        y if y < 100 => 1900 + y,
        y => y,
    };
    expanded as i32
}

/// Parses a `D/M/Y` style token.
///
/// Returns `None` unless the token has exactly three non-empty, all-digit
/// groups. Calendar validity is checked later by [`DateToken::to_date`].
pub fn parse_date_token(token: &str) -> Option<DateToken> {
    let mut groups = token.trim().split(DATE_SEPARATORS);

    let day = numeric_group(groups.next()?)?;
    let month = numeric_group(groups.next()?)?;
    let year = numeric_group(groups.next()?)?;

    if groups.next().is_some() {
        return None;
    }

    Some(DateToken {
        day,
        month,
        year: expand_two_digit_year(year),
    })
}

fn numeric_group(group: &str) -> Option<u32> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_first() {
        let token = parse_date_token("12/01/2023").unwrap();
        assert_eq!(
            token,
            DateToken {
                day: 12,
                month: 1,
                year: 2023
            }
        );
    }

    #[test]
    fn test_all_separators() {
        for raw in ["15/01/2024", "15-01-2024", "15.01.2024"] {
            let token = parse_date_token(raw).unwrap();
            assert_eq!((token.day, token.month, token.year), (15, 1, 2024));
        }
    }

    #[test]
    fn test_single_digit_groups() {
        let token = parse_date_token("1/2/24").unwrap();
        assert_eq!((token.day, token.month, token.year), (1, 2, 2024));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(parse_date_token("01/01/29").unwrap().year, 2029);
        assert_eq!(parse_date_token("01/01/49").unwrap().year, 2049);
        assert_eq!(parse_date_token("01/01/50").unwrap().year, 1950);
        assert_eq!(parse_date_token("01/01/99").unwrap().year, 1999);
        assert_eq!(parse_date_token("01/01/00").unwrap().year, 2000);
    }

    #[test]
    fn test_rejects_two_groups() {
        assert!(parse_date_token("12/01").is_none());
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(parse_date_token("12/Jan/2023").is_none());
        assert!(parse_date_token("aa/01/2023").is_none());
        assert!(parse_date_token("12//2023").is_none());
        assert!(parse_date_token("").is_none());
    }

    #[test]
    fn test_rejects_four_groups() {
        assert!(parse_date_token("1/2/3/4").is_none());
    }

    #[test]
    fn test_token_is_not_calendar_checked() {
        let token = parse_date_token("32/13/2023").unwrap();
        assert_eq!(token.day, 32);
        assert!(token.to_date().is_none());
    }

    #[test]
    fn test_to_date_leap_year() {
        assert!(parse_date_token("29/02/2024").unwrap().to_date().is_some());
        assert!(parse_date_token("29/02/2023").unwrap().to_date().is_none());
    }
}
