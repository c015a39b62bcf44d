//! Error Types for Reading Ingestion and Queries
//!
//! ## Design Philosophy
//!
//! Every failure the core can report maps onto exactly one externally visible
//! outcome, so the error type carries both the human-readable message and the
//! status code a transport layer should answer with.
//!
//! 1. **Raised Where Detected**: Validators return the error at the first bad
//!    field. Nothing downstream rewrites or recovers it.
//!
//! 2. **Fixed Messages**: Messages are part of the contract that clients match
//!    against, so they are `&'static str` constants rather than formatted text.
//!
//! 3. **Copy Semantics**: Errors are small and `Copy`, which keeps batch
//!    validation free of clones when the first failure short-circuits.
//!
//! ## Error Categories
//!
//! ### Input Rejections (400)
//! - `InvalidDeviceId`: identifier is not a canonical UUIDv4 string
//! - `InvalidReadingCount`: count missing, not an integer, boolean, or `<= 0`
//! - `InvalidReadingTimestamp`: timestamp missing, not a string, or not in the
//!   fixed `YYYY-MM-DDTHH:MM:SS±HHMM` layout
//!
//! ### Lookup Misses (404)
//! - `DeviceNotFound`: well-formed identifier with no accepted readings
//!
//! ### Internal Faults (500)
//! - `Internal`: a lock was poisoned by a panicking writer. Callers should not
//!   leak the detail to clients.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use readingledger_core::{ReadingError, ReadingStore};
//!
//! let store = ReadingStore::new();
//! match store.retrieve_sum_count("wrong-123") {
//!     Ok(total) => println!("total = {total}"),
//!     Err(e @ ReadingError::InvalidDeviceId) => {
//!         assert_eq!(e.status_code(), 400);
//!         assert_eq!(e.message(), "Device ID must be valid UUID string.");
//!     }
//!     Err(e) => println!("{} ({})", e, e.status_code()),
//! }
//! ```

use thiserror::Error;

/// Result type for store and validation operations
pub type ReadingResult<T> = Result<T, ReadingError>;

/// Message for [`ReadingError::InvalidDeviceId`]
pub const INVALID_DEVICE_ID_MESSAGE: &str = "Device ID must be valid UUID string.";

/// Message for [`ReadingError::InvalidReadingCount`]
pub const INVALID_READING_COUNT_MESSAGE: &str =
    "Field 'readings' contains invalid 'count' value. Must be positive integer.";

/// Message for [`ReadingError::InvalidReadingTimestamp`]
pub const INVALID_READING_TIMESTAMP_MESSAGE: &str =
    "Field 'readings' contains invalid 'timestamp' value. Must be ISO-8061 timestamp string.";

/// Message for [`ReadingError::DeviceNotFound`]
pub const DEVICE_NOT_FOUND_MESSAGE: &str = "Device readings not found.";

/// Errors raised by the reading store and its validators
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingError {
    /// Identifier is not a UUID version 4 string in canonical form
    #[error("Device ID must be valid UUID string.")]
    InvalidDeviceId,

    /// Count missing, non-integer, boolean, zero or negative
    #[error("Field 'readings' contains invalid 'count' value. Must be positive integer.")]
    InvalidReadingCount,

    /// Timestamp missing, non-string, or not in the fixed layout
    #[error("Field 'readings' contains invalid 'timestamp' value. Must be ISO-8061 timestamp string.")]
    InvalidReadingTimestamp,

    /// Identifier is well formed but no reading was ever accepted for it
    #[error("Device readings not found.")]
    DeviceNotFound,

    /// Store state could not be accessed (poisoned lock)
    #[error("Internal store error: {reason}")]
    Internal {
        /// Which piece of state was unreachable
        reason: &'static str,
    },
}

impl ReadingError {
    /// Status code a transport layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidDeviceId
            | Self::InvalidReadingCount
            | Self::InvalidReadingTimestamp => 400,
            Self::DeviceNotFound => 404,
            Self::Internal { .. } => 500,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidDeviceId => INVALID_DEVICE_ID_MESSAGE,
            Self::InvalidReadingCount => INVALID_READING_COUNT_MESSAGE,
            Self::InvalidReadingTimestamp => INVALID_READING_TIMESTAMP_MESSAGE,
            Self::DeviceNotFound => DEVICE_NOT_FOUND_MESSAGE,
            Self::Internal { reason } => *reason,
        }
    }

    /// Stable machine-readable name, used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidDeviceId => "InvalidDeviceID",
            Self::InvalidReadingCount => "InvalidReadingCount",
            Self::InvalidReadingTimestamp => "InvalidReadingTimestamp",
            Self::DeviceNotFound => "DeviceNotFoundError",
            Self::Internal { .. } => "Internal",
        }
    }

    /// True for faults that must not be shown verbatim to clients
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}
