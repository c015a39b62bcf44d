//! Validated reading record
//!
//! A [`Reading`] only exists in fully-valid form: construction either runs
//! every field validator successfully or fails with the first field's error.
//! Count is checked before timestamp, so a reading with both fields wrong
//! reports `InvalidReadingCount`.

use serde_json::Value;

use crate::{
    errors::{ReadingError, ReadingResult},
    time::{format_timestamp, parse_timestamp, Timestamp},
    traits::FieldValidator,
    validators::{CountValidator, TimestampValidator},
};

/// One validated `(count, timestamp)` data point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    count: u64,
    timestamp: Timestamp,
}

impl Reading {
    /// Build a reading from already-typed parts
    pub fn new(count: u64, timestamp: &str) -> ReadingResult<Self> {
        if count == 0 {
            return Err(ReadingError::InvalidReadingCount);
        }
        let timestamp = parse_timestamp(timestamp)?;
        Ok(Self { count, timestamp })
    }

    /// Validate and normalise a raw JSON reading
    pub fn from_value(raw: &Value) -> ReadingResult<Self> {
        let count = CountValidator.validate_in(raw)?;
        let timestamp = TimestampValidator.validate_in(raw)?;
        Ok(Self { count, timestamp })
    }

    /// Validated count, always `> 0`
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Instant of the reading, with its submitted offset
    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }

    /// Timestamp rendered in the wire layout
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

/// Validate every raw reading of a batch, stopping at the first failure
///
/// Nothing is returned unless the whole batch is valid, which is what lets
/// the store apply a batch all-or-nothing.
pub fn normalize_batch(raw_readings: &[Value]) -> ReadingResult<Vec<Reading>> {
    raw_readings.iter().map(Reading::from_value).collect()
}
