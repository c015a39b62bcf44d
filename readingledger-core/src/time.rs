//! Timestamp parsing and formatting
//!
//! Readings carry an offset-aware instant. The offset is kept so the latest
//! timestamp can be rendered the way it was submitted, but equality and
//! ordering are by absolute instant: `2024-02-02T08:03:29-0600` and
//! `2024-02-02T14:03:29+0000` are the same reading time.
//!
//! The accepted layout is stricter than chrono's `%z`, which also takes
//! `-06:00` and `Z`. The structural check runs first and only then is chrono
//! asked to interpret the fields.

use chrono::{DateTime, Datelike, FixedOffset, Timelike};

use crate::{
    constants::time::{
        DATE_SEPARATOR_POSITIONS, DATE_TIME_SEPARATOR_POS, MIN_YEAR, OFFSET_SIGN_POS,
        TIME_SEPARATOR_POSITIONS, TIMESTAMP_FORMAT, TIMESTAMP_TEXT_LEN,
    },
    errors::{ReadingError, ReadingResult},
};

/// Offset-aware instant of a reading
pub type Timestamp = DateTime<FixedOffset>;

/// Parse `YYYY-MM-DDTHH:MM:SS±HHMM` into an instant
pub fn parse_timestamp(text: &str) -> ReadingResult<Timestamp> {
    if !has_fixed_layout(text) {
        return Err(ReadingError::InvalidReadingTimestamp);
    }

    let timestamp = DateTime::parse_from_str(text, TIMESTAMP_FORMAT)
        .map_err(|_| ReadingError::InvalidReadingTimestamp)?;

    // chrono reads second 60 as a leap second and allows year 0
    if timestamp.nanosecond() >= 1_000_000_000 || timestamp.year() < MIN_YEAR {
        return Err(ReadingError::InvalidReadingTimestamp);
    }
    Ok(timestamp)
}

/// Render an instant in the wire layout, keeping its original offset
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Positional check: digits everywhere except the fixed separators
fn has_fixed_layout(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != TIMESTAMP_TEXT_LEN {
        return false;
    }

    bytes.iter().enumerate().all(|(pos, &byte)| match pos {
        DATE_TIME_SEPARATOR_POS => byte == b'T',
        OFFSET_SIGN_POS => byte == b'+' || byte == b'-',
        p if DATE_SEPARATOR_POSITIONS.contains(&p) => byte == b'-',
        p if TIME_SEPARATOR_POSITIONS.contains(&p) => byte == b':',
        _ => byte.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_keeps_offset() {
        let ts = parse_timestamp("2024-02-02T08:03:29-0600").unwrap();
        assert_eq!(ts.offset().local_minus_utc(), -6 * 3600);
        assert_eq!(format_timestamp(&ts), "2024-02-02T08:03:29-0600");
    }

    #[test]
    fn same_instant_different_offset_is_equal() {
        let a = parse_timestamp("2024-02-02T08:03:29-0600").unwrap();
        let b = parse_timestamp("2024-02-02T14:03:29+0000").unwrap();
        let c = parse_timestamp("2024-02-02T15:33:29+0130").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn ordering_is_by_instant() {
        // Earlier wall clock, later instant
        let a = parse_timestamp("2024-02-02T08:00:00-0600").unwrap();
        let b = parse_timestamp("2024-02-02T10:00:00+0000").unwrap();
        assert!(a > b);
    }

    #[test]
    fn rejects_layout_variants() {
        for bad in [
            "2021-01-01T13:33:13-06:00",
            "2025-02-02 19:18:00.000Z",
            "2024-02-02T08:03:29Z",
            "2024-02-02 08:03:29-0600",
            "2024-02-02T08:03:29.123-0600",
            "2024-02-02T08:03:29",
            "2024-2-02T08:03:29-0600",
            "02-02-2024T08:03:29-0600",
            " 2024-02-02T08:03:29-0600",
            "",
        ] {
            assert_eq!(
                parse_timestamp(bad),
                Err(ReadingError::InvalidReadingTimestamp),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(parse_timestamp("2024-13-02T08:03:29-0600").is_err());
        assert!(parse_timestamp("2023-02-29T08:03:29-0600").is_err());
        assert!(parse_timestamp("2024-02-02T25:03:29-0600").is_err());
        assert!(parse_timestamp("2024-02-02T08:03:29-0675").is_err());
        assert!(parse_timestamp("2024-02-02T08:03:60-0600").is_err());
        assert!(parse_timestamp("2016-12-31T23:59:60+0000").is_err());
        assert!(parse_timestamp("0000-01-01T00:00:00+0000").is_err());
    }

    #[test]
    fn accepts_range_edges() {
        assert!(parse_timestamp("2024-02-02T08:03:59-0600").is_ok());
        assert!(parse_timestamp("0001-01-01T00:00:00+0000").is_ok());
        assert!(parse_timestamp("9999-12-31T23:59:59+0000").is_ok());
    }

    #[test]
    fn accepts_leap_day() {
        assert!(parse_timestamp("2024-02-29T00:00:00+0000").is_ok());
    }
}
