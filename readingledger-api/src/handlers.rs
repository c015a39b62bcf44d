//! Endpoint handlers over a shared [`ReadingStore`]
//!
//! [`ReadingsApi`] owns no reading state. It checks request shape, calls the
//! store, and turns the outcome into an [`ApiResponse`]. Any HTTP framework can
//! sit in front of it by forwarding `(method, path, body)` to
//! [`ReadingsApi::handle`].
//!
//! ## Error policy
//!
//! Request and store rejections are returned with their own status and
//! message. Internal faults (poisoned locks, envelope encoding) are logged
//! and, unless [`ApiConfig::debug`] is set, reported as a 400 with the generic
//! `Unknown error occurred` message.

use std::sync::Arc;

use log::{debug, error, warn};
use serde_json::{Map, Value};

use readingledger_core::{format_timestamp, ReadingError, ReadingStore};

use crate::{
    config::ApiConfig,
    errors::{ApiError, UNKNOWN_ERROR_MESSAGE},
    response::{ApiResponse, CumulativeCountEnvelope, StatusEnvelope, TimestampEnvelope},
    router::{self, Route},
};

/// Request handler for the device-readings endpoints
#[derive(Debug, Clone)]
pub struct ReadingsApi {
    store: Arc<ReadingStore>,
    config: ApiConfig,
}

impl ReadingsApi {
    /// Handler with default configuration
    pub fn new(store: Arc<ReadingStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    /// Handler with explicit configuration
    pub fn with_config(store: Arc<ReadingStore>, config: ApiConfig) -> Self {
        Self { store, config }
    }

    /// Shared store behind this handler
    pub fn store(&self) -> &Arc<ReadingStore> {
        &self.store
    }

    /// Active configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Route and answer one request
    pub fn handle(&self, method: &str, path: &str, body: &[u8]) -> ApiResponse {
        debug!("{} {}", method, path);

        let route = match router::dispatch(&self.config.url_prefix, method, path) {
            Ok(route) => route,
            Err(e) => return self.error_response(e),
        };

        match route {
            Route::Ping => self.ping(),
            Route::Create => self.create(body),
            Route::LatestTimestamp(device_id) => self.latest_timestamp(device_id),
            Route::CumulativeCount(device_id) => self.cumulative_count(device_id),
        }
    }

    /// Liveness check
    pub fn ping(&self) -> ApiResponse {
        ApiResponse::json(200, &StatusEnvelope::ok()).unwrap_or_else(|e| self.error_response(e))
    }

    /// Store a batch from a `{"id": ..., "readings": [...]}` body
    pub fn create(&self, body: &[u8]) -> ApiResponse {
        self.try_create(body).unwrap_or_else(|e| self.error_response(e))
    }

    /// Latest reading timestamp of a device
    pub fn latest_timestamp(&self, device_id: &str) -> ApiResponse {
        self.try_latest_timestamp(device_id)
            .unwrap_or_else(|e| self.error_response(e))
    }

    /// Sum of counts over a device's readings
    pub fn cumulative_count(&self, device_id: &str) -> ApiResponse {
        self.try_cumulative_count(device_id)
            .unwrap_or_else(|e| self.error_response(e))
    }

    fn try_create(&self, body: &[u8]) -> Result<ApiResponse, ApiError> {
        let request = parse_object(body)?;

        let device_id = match request.get("id") {
            Some(id) if !is_falsy(id) => id,
            _ => return Err(ApiError::MissingDeviceId),
        };
        let readings = match request.get("readings") {
            Some(Value::Array(readings)) if !readings.is_empty() => readings,
            _ => return Err(ApiError::MissingReadings),
        };
        // Truthy but not a string, e.g. a number
        let device_id = device_id.as_str().ok_or(ReadingError::InvalidDeviceId)?;

        self.store.save_batch_for_device(device_id, readings)?;
        ApiResponse::json(201, &StatusEnvelope::ok())
    }

    fn try_latest_timestamp(&self, device_id: &str) -> Result<ApiResponse, ApiError> {
        let latest = self.store.retrieve_latest_timestamp(device_id)?;
        ApiResponse::json(
            200,
            &TimestampEnvelope {
                timestamp: format_timestamp(&latest),
            },
        )
    }

    fn try_cumulative_count(&self, device_id: &str) -> Result<ApiResponse, ApiError> {
        let cumulative_count = self.store.retrieve_sum_count(device_id)?;
        ApiResponse::json(200, &CumulativeCountEnvelope { cumulative_count })
    }

    fn error_response(&self, err: ApiError) -> ApiResponse {
        let status = err.status_code();

        if err.is_internal() {
            error!("Internal fault: {}", err);
            if !self.config.debug {
                return ApiResponse::error(400, UNKNOWN_ERROR_MESSAGE);
            }
        } else {
            warn!("Request rejected ({}): {}", status, err);
        }

        ApiResponse::error(status, &err.to_string())
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ApiError> {
    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ApiError::InvalidBody),
    }
}

/// JSON values a client would consider "not provided"
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
