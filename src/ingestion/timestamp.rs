//! Recognition of date/time cell text.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// `%.f` is optional when parsing, so these also accept fractional seconds.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse `s` as a date/time instant.
///
/// RFC 3339 text with an offset is converted to UTC; naive date-times and bare dates are
/// taken to be UTC already (dates at midnight). Returns `None` for anything else.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    // cheap reject: every accepted form starts with a 4-digit year and a separator
    let bytes = s.as_bytes();
    if bytes.len() < 8 || !bytes[..4].iter().all(u8::is_ascii_digit) || !matches!(bytes[4], b'-' | b'/') {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{TimeZone, Utc};

    #[test]
    fn parses_bare_dates_as_utc_midnight() {
        assert_eq!(
            parse_timestamp("2023-02-15"),
            Some(Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2023/02/15"),
            Some(Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn parses_naive_datetimes_with_and_without_fraction() {
        let expected = Utc.with_ymd_and_hms(2024, 7, 1, 13, 5, 9).unwrap();
        assert_eq!(parse_timestamp("2024-07-01 13:05:09"), Some(expected));
        assert_eq!(parse_timestamp("2024-07-01T13:05:09"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-07-01T13:05:09.250").map(|t| t.timestamp()),
            Some(expected.timestamp())
        );
        assert_eq!(
            parse_timestamp("2024-07-01 13:05"),
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 13, 5, 0).unwrap())
        );
    }

    #[test]
    fn converts_offsets_to_utc() {
        assert_eq!(
            parse_timestamp("2024-07-01T10:00:00+10:00"),
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2024-07-01T00:00:00Z"),
            Some(Utc.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn rejects_malformed_text() {
        assert_eq!(parse_timestamp("2023-13-01"), None);
        assert_eq!(parse_timestamp("2023-02-30"), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("12345678"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
