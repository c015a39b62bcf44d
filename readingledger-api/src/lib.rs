//! Transport-facing request handling for ReadingLedger
//!
//! ## Overview
//!
//! This crate sits between an HTTP framework and the reading store. It does
//! not open sockets; a server forwards each request's method, path and body to
//! [`ReadingsApi::handle`] and writes back the returned status and JSON body.
//!
//! ## Endpoints
//!
//! | Method | Path                                        | Success |
//! |--------|---------------------------------------------|---------|
//! | GET    | `{prefix}/ping`                             | 200     |
//! | POST   | `{prefix}/device-readings/create`           | 201     |
//! | GET    | `{prefix}/device-readings/{id}/latest-timestamp` | 200 |
//! | GET    | `{prefix}/device-readings/{id}/cumulative-count` | 200 |
//!
//! Failures use one envelope:
//!
//! ```text
//! {"status": "error", "error_message": "<message>", "error_code": <status>}
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use readingledger_api::{ApiConfig, ReadingsApi};
//! use readingledger_core::ReadingStore;
//!
//! let api = ReadingsApi::with_config(Arc::new(ReadingStore::new()), ApiConfig::new());
//!
//! let body = br#"{
//!     "id": "36d5658a-6908-479e-887e-a949ec199272",
//!     "readings": [{"timestamp": "2021-09-29T16:08:15+0100", "count": 2}]
//! }"#;
//! let resp = api.handle("POST", "/api/device-readings/create", body);
//! assert_eq!(resp.status, 201);
//!
//! let resp = api.handle(
//!     "GET",
//!     "/api/device-readings/36d5658a-6908-479e-887e-a949ec199272/cumulative-count",
//!     b"",
//! );
//! assert_eq!(resp.body["cumulative_count"], 2);
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod response;
pub mod router;

// Re-export common types
pub use config::ApiConfig;
pub use errors::ApiError;
pub use handlers::ReadingsApi;
pub use response::ApiResponse;
pub use router::Route;
