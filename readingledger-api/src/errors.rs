//! Request-level errors
//!
//! Everything that can go wrong between receiving `(method, path, body)` and
//! producing a response. Store failures are wrapped unchanged so their status
//! and message reach the client as-is.

use readingledger_core::ReadingError;
use thiserror::Error;

/// Message sent in place of internal fault details when debug is off
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// API errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Body is not valid JSON or not a JSON object
    #[error("Request body must be a JSON object.")]
    InvalidBody,

    /// `id` missing or falsy
    #[error("Field 'id' is required.")]
    MissingDeviceId,

    /// `readings` missing, not an array, or empty
    #[error("Field 'readings' is required.")]
    MissingReadings,

    /// No route for the path
    #[error("Resource not found.")]
    RouteNotFound,

    /// Route exists but not for this method
    #[error("Method not allowed.")]
    MethodNotAllowed,

    /// Rejected or failed by the store
    #[error(transparent)]
    Reading(#[from] ReadingError),

    /// Response envelope could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidBody | Self::MissingDeviceId | Self::MissingReadings => 400,
            Self::RouteNotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::Reading(e) => e.status_code(),
            Self::Serialization(_) => 500,
        }
    }

    /// Faults of this service rather than of the request
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Reading(e) => e.is_internal(),
            Self::Serialization(_) => true,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
