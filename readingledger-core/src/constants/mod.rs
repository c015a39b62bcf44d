//! Constants for ReadingLedger Core
//!
//! Text layouts and sizes shared by the validators, the ledger and any
//! transport layer that renders results. Keep magic numbers here.
//!
//! ## Organization
//!
//! - **Time**: the fixed timestamp layout accepted on input and produced on output
//! - **Identifiers**: canonical UUID text shape

/// Timestamp layout constants.
pub mod time;

/// Device identifier constants.
pub mod identifiers;

pub use time::{TIMESTAMP_FORMAT, TIMESTAMP_TEXT_LEN};
pub use identifiers::CANONICAL_UUID_LEN;
