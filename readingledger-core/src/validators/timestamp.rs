//! Timestamp validator

use serde_json::Value;

use crate::{
    errors::{ReadingError, ReadingResult},
    time::{parse_timestamp, Timestamp},
    traits::FieldValidator,
};

/// Validator for the `timestamp` field
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampValidator;

impl FieldValidator for TimestampValidator {
    type Output = Timestamp;

    fn field(&self) -> &'static str {
        "timestamp"
    }

    fn validate(&self, raw: Option<&Value>) -> ReadingResult<Timestamp> {
        match raw {
            Some(Value::String(text)) => parse_timestamp(text),
            _ => Err(ReadingError::InvalidReadingTimestamp),
        }
    }
}
