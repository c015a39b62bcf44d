//! JSON response envelopes
//!
//! ```text
//! create            201  {"status":"ok"}
//! ping              200  {"status":"ok"}
//! latest-timestamp  200  {"timestamp":"2024-02-02T08:03:29-0600"}
//! cumulative-count  200  {"cumulative_count":9}
//! any error         4xx  {"status":"error","error_message":"...","error_code":4xx}
//! ```

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::ApiError;

const STATUS_OK: &str = "ok";
const STATUS_ERROR: &str = "error";

/// `{"status":"ok"}`
#[derive(Debug, Clone, Serialize)]
pub struct StatusEnvelope {
    /// Always `"ok"`
    pub status: &'static str,
}

impl StatusEnvelope {
    /// The only success status
    pub fn ok() -> Self {
        Self { status: STATUS_OK }
    }
}

/// `{"timestamp":...}`
#[derive(Debug, Clone, Serialize)]
pub struct TimestampEnvelope {
    /// Latest instant in the wire layout, with its submitted offset
    pub timestamp: String,
}

/// `{"cumulative_count":...}`
#[derive(Debug, Clone, Serialize)]
pub struct CumulativeCountEnvelope {
    /// Exact sum of counts; may exceed the range of a single count
    pub cumulative_count: u128,
}

/// Error body shared by every failing route
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`
    pub status: &'static str,
    /// Client-facing message
    pub error_message: String,
    /// Same value as the HTTP status
    pub error_code: u16,
}

impl ErrorEnvelope {
    /// Error body for a message and status
    pub fn new(error_message: impl Into<String>, error_code: u16) -> Self {
        Self {
            status: STATUS_ERROR,
            error_message: error_message.into(),
            error_code,
        }
    }
}

impl From<ErrorEnvelope> for Value {
    fn from(envelope: ErrorEnvelope) -> Self {
        let mut body = Map::new();
        body.insert("status".into(), envelope.status.into());
        body.insert("error_message".into(), envelope.error_message.into());
        body.insert("error_code".into(), envelope.error_code.into());
        Value::Object(body)
    }
}

/// Status code plus JSON body, ready for any HTTP framework to send
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// JSON body
    pub body: Value,
}

impl ApiResponse {
    /// Encode a success envelope
    pub fn json<T: Serialize>(status: u16, envelope: &T) -> Result<Self, ApiError> {
        Ok(Self {
            status,
            body: serde_json::to_value(envelope)?,
        })
    }

    /// Error envelope with `error_code` equal to the HTTP status
    ///
    /// Converted without going through serde so it cannot fail.
    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: ErrorEnvelope::new(message, status).into(),
        }
    }

    /// 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as compact JSON text
    pub fn body_text(&self) -> String {
        self.body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelopes() {
        let resp = ApiResponse::json(201, &StatusEnvelope::ok()).unwrap();
        assert_eq!(resp.status, 201);
        assert_eq!(resp.body, json!({"status": "ok"}));
        assert!(resp.is_success());

        let resp = ApiResponse::json(200, &CumulativeCountEnvelope { cumulative_count: 9 }).unwrap();
        assert_eq!(resp.body_text(), r#"{"cumulative_count":9}"#);

        let resp = ApiResponse::json(
            200,
            &TimestampEnvelope { timestamp: "2024-02-02T08:03:29-0600".into() },
        )
        .unwrap();
        assert_eq!(resp.body["timestamp"], "2024-02-02T08:03:29-0600");
    }

    #[test]
    fn test_error_envelope_shapes_agree() {
        let built = ApiResponse::error(404, "Device readings not found.");
        let serialized = ApiResponse::json(404, &ErrorEnvelope::new("Device readings not found.", 404)).unwrap();

        assert_eq!(built, serialized);
        assert!(!built.is_success());
        assert_eq!(built.body["error_code"], 404);
        assert_eq!(built.body["status"], "error");
    }

    #[test]
    fn test_cumulative_count_beyond_u64() {
        let total = u128::from(u64::MAX) + 10;
        let resp = ApiResponse::json(200, &CumulativeCountEnvelope { cumulative_count: total }).unwrap();
        assert_eq!(resp.body_text(), r#"{"cumulative_count":18446744073709551625}"#);
    }
}
