//! Time-token parsing.
//!
//! Accepts `H:MM` and `H:MM:SS`, optionally followed by an `AM`/`PM` marker
//! in any case. iOS exports put a narrow no-break space (U+202F) before the
//! marker; any Unicode whitespace is accepted there.

use chrono::NaiveTime;

/// 12-hour clock marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A parsed time token, not yet validated against the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToken {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub meridiem: Option<Meridiem>,
}

impl TimeToken {
    /// Hour on the 24-hour clock.
    ///
    /// `12 AM` is midnight, `12 PM` is noon, other PM hours gain 12.
    /// Hours already past noon are left alone even with a PM marker.
    pub fn hour24(&self) -> u32 {
        match self.meridiem {
            Some(Meridiem::Am) if self.hour == 12 => 0,
            Some(Meridiem::Pm) if self.hour < 12 => self.hour + 12,
            _ => self.hour,
        }
    }

    /// Resolves the token to a clock time.
    ///
    /// Returns `None` for impossible times such as `25:00` or `10:61`.
    pub fn to_time(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour24(), self.minute, self.second)
    }
}

/// Parses a time token such as `9:05`, `21:40:07` or `9:05 PM`.
///
/// ```
/// use chatlens::parsing::parse_time_token;
///
/// assert_eq!(parse_time_token("12:15 AM").unwrap().hour24(), 0);
/// assert_eq!(parse_time_token("3:15 pm").unwrap().hour24(), 15);
/// ```
pub fn parse_time_token(token: &str) -> Option<TimeToken> {
    let (clock, meridiem) = split_meridiem(token.trim());

    let mut parts = clock.trim_end().split(':');
    let hour = clock_part(parts.next()?, 2)?;
    let minute = clock_part(parts.next()?, 2)?;
    let second = match parts.next() {
        Some(part) => clock_part(part, 2)?,
        None => 0,
    };

    if parts.next().is_some() {
        return None;
    }

    Some(TimeToken {
        hour,
        minute,
        second,
        meridiem,
    })
}

fn split_meridiem(token: &str) -> (&str, Option<Meridiem>) {
    if token.len() < 2 || !token.is_char_boundary(token.len() - 2) {
        return (token, None);
    }

    let (clock, suffix) = token.split_at(token.len() - 2);
    if suffix.eq_ignore_ascii_case("am") {
        (clock, Some(Meridiem::Am))
    } else if suffix.eq_ignore_ascii_case("pm") {
        (clock, Some(Meridiem::Pm))
    } else {
        (token, None)
    }
}

fn clock_part(part: &str, max_digits: usize) -> Option<u32> {
    if part.is_empty() || part.len() > max_digits || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_24_hour() {
        let token = parse_time_token("21:40").unwrap();
        assert_eq!((token.hour, token.minute, token.second), (21, 40, 0));
        assert_eq!(token.meridiem, None);
        assert_eq!(token.hour24(), 21);
    }

    #[test]
    fn test_with_seconds() {
        let token = parse_time_token("10:30:45").unwrap();
        assert_eq!((token.hour, token.minute, token.second), (10, 30, 45));
    }

    #[test]
    fn test_twelve_hour_conversion() {
        assert_eq!(parse_time_token("12:15 AM").unwrap().hour24(), 0);
        assert_eq!(parse_time_token("12:15 PM").unwrap().hour24(), 12);
        assert_eq!(parse_time_token("3:15 PM").unwrap().hour24(), 15);
        assert_eq!(parse_time_token("3:15 AM").unwrap().hour24(), 3);
    }

    #[test]
    fn test_meridiem_variants() {
        assert_eq!(
            parse_time_token("9:05pm").unwrap().meridiem,
            Some(Meridiem::Pm)
        );
        assert_eq!(
            parse_time_token("9:05 Am").unwrap().meridiem,
            Some(Meridiem::Am)
        );
        // narrow no-break space, as written by iOS
        assert_eq!(
            parse_time_token("9:05\u{202F}PM").unwrap().hour24(),
            21
        );
        assert_eq!(
            parse_time_token("10:30:45 AM").unwrap().second,
            45
        );
    }

    #[test]
    fn test_pm_past_noon_unchanged() {
        assert_eq!(parse_time_token("13:00 PM").unwrap().hour24(), 13);
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(parse_time_token("").is_none());
        assert!(parse_time_token("9").is_none());
        assert!(parse_time_token("9:").is_none());
        assert!(parse_time_token("a:05").is_none());
        assert!(parse_time_token("9:05:07:01").is_none());
        assert!(parse_time_token("123:05").is_none());
    }

    #[test]
    fn test_to_time_rejects_out_of_range() {
        assert!(parse_time_token("25:00").unwrap().to_time().is_none());
        assert!(parse_time_token("10:61").unwrap().to_time().is_none());
        assert!(parse_time_token("23:59:59").unwrap().to_time().is_some());
    }
}
