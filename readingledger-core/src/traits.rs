//! Core traits for validators
//!
//! Raw readings arrive as untyped JSON, so each field validator receives the
//! value as found in the payload (`None` when the key is absent) and either
//! produces the typed field or the error kind for that field.

use serde_json::Value;

use crate::errors::ReadingResult;

/// Validator for one field of a raw reading
pub trait FieldValidator {
    /// Typed value produced on success
    type Output;

    /// Name of the payload key this validator reads
    fn field(&self) -> &'static str;

    /// Validate the raw value of the field
    fn validate(&self, raw: Option<&Value>) -> ReadingResult<Self::Output>;

    /// Look the field up in a raw reading and validate it
    ///
    /// A raw reading that is not a JSON object has no fields.
    fn validate_in(&self, reading: &Value) -> ReadingResult<Self::Output> {
        self.validate(reading.get(self.field()))
    }
}
