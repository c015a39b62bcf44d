//! Count validator
//!
//! Counts are strictly positive integers. JSON booleans and floats are
//! rejected outright; integers beyond `u64` are rejected as well since JSON
//! parsers hand them over as floats.

use serde_json::Value;

use crate::{
    errors::{ReadingError, ReadingResult},
    traits::FieldValidator,
};

/// Validator for the `count` field
#[derive(Debug, Clone, Copy, Default)]
pub struct CountValidator;

impl FieldValidator for CountValidator {
    type Output = u64;

    fn field(&self) -> &'static str {
        "count"
    }

    fn validate(&self, raw: Option<&Value>) -> ReadingResult<u64> {
        match raw {
            Some(Value::Number(number)) => match number.as_u64() {
                Some(count) if count > 0 => Ok(count),
                _ => Err(ReadingError::InvalidReadingCount),
            },
            _ => Err(ReadingError::InvalidReadingCount),
        }
    }
}
