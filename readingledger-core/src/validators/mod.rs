//! Field Validators for Raw Readings
//!
//! ## Overview
//!
//! A raw reading is a JSON object `{"count": <int>, "timestamp": "<string>"}`.
//! Each field has its own validator, and each validator maps every way the
//! field can be wrong onto a single error kind:
//!
//! | Field       | Accepted                                  | Error                     |
//! |-------------|-------------------------------------------|---------------------------|
//! | `count`     | JSON integer `> 0`                        | `InvalidReadingCount`     |
//! | `timestamp` | JSON string `YYYY-MM-DDTHH:MM:SS±HHMM`    | `InvalidReadingTimestamp` |
//!
//! ## Type Strictness
//!
//! Validation is done on the untyped value, before any coercion:
//! - `true` / `false` are not counts, even though some hosts treat them as 1 / 0
//! - `5.0` is a float, not an integer, and is rejected
//! - a numeric timestamp (e.g. epoch seconds) is not a string and is rejected
//!
//! ## Usage Example
//!
//! ```rust
//! use readingledger_core::traits::FieldValidator;
//! use readingledger_core::validators::{CountValidator, TimestampValidator};
//! use serde_json::json;
//!
//! let raw = json!({"count": 5, "timestamp": "2024-02-02T08:03:29-0600"});
//!
//! let count = CountValidator.validate_in(&raw)?;
//! let timestamp = TimestampValidator.validate_in(&raw)?;
//! assert_eq!(count, 5);
//! assert_eq!(timestamp.offset().local_minus_utc(), -6 * 3600);
//!
//! assert!(CountValidator.validate_in(&json!({"count": true})).is_err());
//! # Ok::<(), readingledger_core::ReadingError>(())
//! ```

mod count;
mod timestamp;

pub use count::CountValidator;
pub use timestamp::TimestampValidator;
