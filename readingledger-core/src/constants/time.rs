//! Timestamp Layout Constants
//!
//! The only accepted wire layout is `YYYY-MM-DDTHH:MM:SS±HHMM`, for example
//! `2024-02-02T08:03:29-0600`. The same layout is used for output, so a
//! formatted timestamp always parses back to the same instant.

/// chrono format string for the wire layout.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Exact text length of a timestamp in the wire layout.
pub const TIMESTAMP_TEXT_LEN: usize = 24;

/// Byte offset of the `T` between date and time.
pub const DATE_TIME_SEPARATOR_POS: usize = 10;

/// Byte offset of the offset sign (`+` or `-`).
pub const OFFSET_SIGN_POS: usize = 19;

/// Byte offsets of the `-` separators inside the date.
pub const DATE_SEPARATOR_POSITIONS: [usize; 2] = [4, 7];

/// Byte offsets of the `:` separators inside the time of day.
pub const TIME_SEPARATOR_POSITIONS: [usize; 2] = [13, 16];

/// Earliest calendar year accepted in a timestamp.
pub const MIN_YEAR: i32 = 1;
