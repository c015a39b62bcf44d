//! Core reading store for ReadingLedger
//!
//! Ingests time-stamped counts per device and answers two queries: the most
//! recent reading timestamp and the cumulative count. Every reading is
//! validated before any state changes, duplicates (same instant) are dropped,
//! and batches are applied all-or-nothing.
//!
//! Components, leaf to root:
//! - [`device_id`] - canonical UUIDv4 identifier check
//! - [`validators`] / [`reading`] - raw JSON reading to typed [`Reading`]
//! - [`ledger`] - per-device sorted instants plus running sum
//! - [`store`] - keyed ledgers, batch ingestion, the two queries
//!
//! ```no_run
//! use readingledger_core::{time::format_timestamp, ReadingStore};
//! use serde_json::json;
//!
//! let store = ReadingStore::new();
//! let device = "0d2c5b8e-6f0a-4f7e-9c1d-2b3a4c5d6e7f";
//!
//! match store.save_batch_for_device(device, &[json!({"count": 5, "timestamp": "2024-02-02T08:03:29-0600"})]) {
//!     Ok(()) => {}, // Stored
//!     Err(e) => {}, // e.status_code() / e.message() for the client
//! }
//!
//! let total = store.retrieve_sum_count(device);
//! let latest = store.retrieve_latest_timestamp(device).map(|ts| format_timestamp(&ts));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod device_id;
pub mod errors;
pub mod ledger;
pub mod reading;
pub mod store;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use device_id::{is_valid_device_id, DeviceId};
pub use errors::{ReadingError, ReadingResult};
pub use ledger::DeviceLedger;
pub use reading::Reading;
pub use store::{BatchSummary, ReadingStore};
pub use time::{format_timestamp, parse_timestamp, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
