//! Common test utilities for route tests
//!
//! A [`TestClient`] drives a [`ReadingsApi`] the way an HTTP server would and
//! keeps a handle on the store for direct seeding and inspection.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::Value;

use readingledger_api::{ApiConfig, ApiResponse, ReadingsApi};
use readingledger_core::{DeviceLedger, ReadingStore};

/// Random canonical UUIDv4 device identifier
pub fn generate_device_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub struct TestClient {
    pub api: ReadingsApi,
    pub store: Arc<ReadingStore>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::with_config(ApiConfig::new())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        let store = Arc::new(ReadingStore::new());
        let api = ReadingsApi::with_config(Arc::clone(&store), config);
        Self { api, store }
    }

    pub fn get(&self, path: &str) -> ApiResponse {
        self.api.handle("GET", path, b"")
    }

    pub fn post_json(&self, path: &str, body: &Value) -> ApiResponse {
        self.api.handle("POST", path, body.to_string().as_bytes())
    }

    pub fn post_raw(&self, path: &str, body: &[u8]) -> ApiResponse {
        self.api.handle("POST", path, body)
    }

    /// Seed readings without going through the route
    pub fn seed(&self, device_id: &str, readings: &[Value]) {
        self.store
            .save_batch_for_device(device_id, readings)
            .expect("seed readings should be valid");
    }

    /// Snapshot of a device's ledger, `None` when nothing is stored
    pub fn ledger(&self, device_id: &str) -> Option<DeviceLedger> {
        self.store
            .with_ledger(device_id, |ledger| ledger.clone())
            .ok()
    }
}
