//! Conversions between directive strings and `time` values.
//!
//! `expires` uses a fixed, UTC-only layout (`ddd, dd MMM yyyy HH:mm:ss UTC`).
//! `max-age` is a signed whole number of seconds.

use crate::base::cookieerror::CookieError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Layout of the `expires` directive, e.g. `Wed, 30 Dec 2015 12:00:00 UTC`.
pub const EXPIRES_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] UTC"
);

/// Parse an `expires` string. Only the layout is checked; the weekday is
/// not compared against the date.
pub fn parse_expires(value: &str) -> Result<OffsetDateTime, CookieError> {
    PrimitiveDateTime::parse(value, EXPIRES_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| CookieError::invalid_expires(value))
}

/// Render a point in time as an `expires` string, converting to UTC first.
pub fn format_expires(at: OffsetDateTime) -> Result<String, CookieError> {
    at.to_offset(UtcOffset::UTC)
        .format(EXPIRES_FORMAT)
        .map_err(|_| CookieError::invalid_expires(at.to_string()))
}

/// Parse a `max-age` string as a number of seconds.
pub fn parse_max_age(value: &str) -> Result<Duration, CookieError> {
    value
        .parse::<i64>()
        .map(Duration::seconds)
        .map_err(|_| CookieError::invalid_max_age(value))
}

/// Render a duration as whole seconds, truncating any fraction.
pub fn format_max_age(age: Duration) -> String {
    age.whole_seconds().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_parse_expires() {
        let t = parse_expires("Wed, 30 Dec 2015 12:00:00 UTC").unwrap();
        assert_eq!(t, datetime!(2015-12-30 12:00:00 UTC));
    }

    #[test]
    fn test_parse_expires_rejects_other_layouts() {
        // RFC 1123 proper uses GMT
        assert!(parse_expires("Wed, 30 Dec 2015 12:00:00 GMT").is_err());
        assert!(parse_expires("2015-12-30T12:00:00Z").is_err());
        assert!(parse_expires("").is_err());
    }

    #[test]
    fn test_parse_expires_ignores_weekday_mismatch() {
        // 30 Dec 2015 was a Wednesday
        let t = parse_expires("Thu, 30 Dec 2015 12:00:00 UTC").unwrap();
        assert_eq!(t, datetime!(2015-12-30 12:00:00 UTC));
    }

    #[test]
    fn test_format_expires_pads_and_converts_to_utc() {
        let s = format_expires(datetime!(2024-03-05 09:04:07 +02:00)).unwrap();
        assert_eq!(s, "Tue, 05 Mar 2024 07:04:07 UTC");
    }

    #[test]
    fn test_max_age() {
        assert_eq!(parse_max_age("300").unwrap(), Duration::seconds(300));
        assert_eq!(parse_max_age("-1").unwrap(), Duration::seconds(-1));
        assert!(parse_max_age("5m").is_err());
        assert!(parse_max_age("").is_err());
        assert_eq!(format_max_age(Duration::milliseconds(90_500)), "90");
    }
}
