//! Common test utilities for integration tests
//!
//! This module provides:
//! - Fresh device identifiers and raw reading builders
//! - Reference model of the ledger semantics for property tests
//! - Named ingestion scenarios

#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{FixedOffset, TimeZone, Utc};
use serde_json::{json, Value};

use readingledger_core::{format_timestamp, Timestamp};

pub mod scenarios;

/// Random canonical UUIDv4 device identifier
pub fn generate_device_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Raw JSON reading as a client would send it
pub fn raw_reading(count: u64, timestamp: &str) -> Value {
    json!({"count": count, "timestamp": timestamp})
}

/// Build an instant from epoch seconds and an offset in minutes
pub fn instant(epoch_secs: i64, offset_minutes: i32) -> Timestamp {
    let offset = FixedOffset::east_opt(offset_minutes * 60).expect("offset within a day");
    Utc.timestamp_opt(epoch_secs, 0)
        .single()
        .expect("representable instant")
        .with_timezone(&offset)
}

/// Wire text for an instant built by [`instant`]
pub fn instant_text(epoch_secs: i64, offset_minutes: i32) -> String {
    format_timestamp(&instant(epoch_secs, offset_minutes))
}

/// What the store should hold: first count per instant wins
#[derive(Debug, Default)]
pub struct ReferenceLedger {
    by_instant: BTreeMap<i64, (u64, Timestamp)>,
}

impl ReferenceLedger {
    pub fn apply(&mut self, count: u64, timestamp: Timestamp) {
        self.by_instant
            .entry(timestamp.timestamp())
            .or_insert((count, timestamp));
    }

    pub fn sum(&self) -> u128 {
        self.by_instant.values().map(|(count, _)| u128::from(*count)).sum()
    }

    pub fn latest(&self) -> Option<Timestamp> {
        self.by_instant.values().next_back().map(|(_, ts)| *ts)
    }

    pub fn is_empty(&self) -> bool {
        self.by_instant.is_empty()
    }
}
