//! Reading Store
//!
//! ## Overview
//!
//! The [`ReadingStore`] owns every [`DeviceLedger`], keyed by canonical
//! device identifier, and is the only entry point for writes and queries.
//!
//! ## Batch Semantics
//!
//! `save_batch_for_device` is all-or-nothing:
//! 1. the device identifier is validated
//! 2. every raw reading is validated and normalised, stopping at the first bad one
//! 3. only then is the ledger looked up (created if absent) and locked
//! 4. readings are applied in the order given; a later reading with an instant
//!    already present (from an earlier call or earlier in the same batch) is
//!    dropped silently
//!
//! A rejected batch leaves the store exactly as it was. In particular a device
//! whose first batch is rejected stays "not found".
//!
//! ## Concurrency
//!
//! ```text
//! devices: RwLock<HashMap<DeviceId, Arc<Mutex<DeviceLedger>>>>
//!          └─ held only for lookup / create-if-absent
//!                                     └─ held for a whole batch or one query
//! ```
//!
//! Batches for the same device serialise on the ledger mutex, so no reader or
//! writer observes a half-applied batch. Batches for different devices only
//! share the map lock for the duration of a lookup.
//!
//! Reads never create ledgers: an unknown device is reported as
//! `DeviceNotFound` without touching the map.
//!
//! ## Usage Example
//!
//! ```rust
//! use readingledger_core::{time::format_timestamp, ReadingStore};
//! use serde_json::json;
//!
//! let store = ReadingStore::new();
//! let device = "0d2c5b8e-6f0a-4f7e-9c1d-2b3a4c5d6e7f";
//!
//! store.save_batch_for_device(device, &[
//!     json!({"count": 5, "timestamp": "2024-02-02T08:03:29-0600"}),
//!     json!({"count": 4, "timestamp": "2022-12-23T09:18:01-0600"}),
//! ])?;
//!
//! assert_eq!(store.retrieve_sum_count(device)?, 9);
//! let latest = store.retrieve_latest_timestamp(device)?;
//! assert_eq!(format_timestamp(&latest), "2024-02-02T08:03:29-0600");
//! # Ok::<(), readingledger_core::ReadingError>(())
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, error, warn};
use serde_json::Value;

use crate::{
    device_id::DeviceId,
    errors::{ReadingError, ReadingResult},
    ledger::DeviceLedger,
    reading::{normalize_batch, Reading},
    time::Timestamp,
};

type SharedLedger = Arc<Mutex<DeviceLedger>>;

const DEVICE_MAP_POISONED: &str = "Device map lock poisoned";
const LEDGER_POISONED: &str = "Device ledger lock poisoned";

/// Outcome of applying one validated batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Readings added to the ledger
    pub accepted: usize,
    /// Readings dropped because their instant was already present
    pub duplicates: usize,
}

/// Thread-safe in-memory store of per-device ledgers
#[derive(Debug, Default)]
pub struct ReadingStore {
    devices: RwLock<HashMap<DeviceId, SharedLedger>>,
}

impl ReadingStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw batch and apply it to the device's ledger, all-or-nothing
    pub fn save_batch_for_device(&self, device_id: &str, raw_readings: &[Value]) -> ReadingResult<()> {
        let result = DeviceId::parse(device_id).and_then(|id| {
            let readings = normalize_batch(raw_readings)?;
            self.save_readings(id, readings)
        });

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                if e.is_internal() {
                    error!("Failed to save batch for device {}: {}", device_id, e);
                } else {
                    warn!("Rejected batch for device {:?}: {}", device_id, e.kind());
                }
                Err(e)
            }
        }
    }

    /// Apply already-validated readings to a device's ledger
    ///
    /// The ledger is created on first use. An empty batch is a no-op and
    /// creates nothing.
    pub fn save_readings(&self, device_id: DeviceId, readings: Vec<Reading>) -> ReadingResult<BatchSummary> {
        if readings.is_empty() {
            return Ok(BatchSummary::default());
        }

        let shared = self.ledger_for_write(device_id)?;
        let mut ledger = lock_ledger(&shared)?;

        let mut summary = BatchSummary::default();
        for reading in readings {
            if ledger.add_reading(reading) {
                summary.accepted += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        debug!(
            "Saved batch for device {}: {} accepted, {} duplicate(s) dropped, total {}",
            device_id,
            summary.accepted,
            summary.duplicates,
            ledger.cumulative_count()
        );
        Ok(summary)
    }

    /// Most recent accepted instant for a device
    pub fn retrieve_latest_timestamp(&self, device_id: &str) -> ReadingResult<Timestamp> {
        self.with_ledger(device_id, |ledger| ledger.latest_timestamp().copied())?
            .ok_or(ReadingError::DeviceNotFound)
    }

    /// Sum of counts over all accepted readings for a device
    pub fn retrieve_sum_count(&self, device_id: &str) -> ReadingResult<u128> {
        self.with_ledger(device_id, DeviceLedger::cumulative_count)
    }

    /// Run `f` against a device's ledger under its lock
    ///
    /// Fails with `InvalidDeviceId` for a malformed identifier and with
    /// `DeviceNotFound` when the device has no accepted readings. Never
    /// creates a ledger.
    pub fn with_ledger<F, R>(&self, device_id: &str, f: F) -> ReadingResult<R>
    where
        F: FnOnce(&DeviceLedger) -> R,
    {
        let id = DeviceId::parse(device_id)?;
        let shared = self.find_ledger(&id)?.ok_or(ReadingError::DeviceNotFound)?;
        let ledger = lock_ledger(&shared)?;

        if ledger.is_empty() {
            return Err(ReadingError::DeviceNotFound);
        }
        Ok(f(&*ledger))
    }

    /// Whether the device has at least one accepted reading
    pub fn has_readings(&self, device_id: &DeviceId) -> ReadingResult<bool> {
        let Some(shared) = self.find_ledger(device_id)? else {
            return Ok(false);
        };
        let ledger = lock_ledger(&shared)?;
        Ok(!ledger.is_empty())
    }

    /// Number of devices with a ledger
    pub fn device_count(&self) -> ReadingResult<usize> {
        Ok(self.read_devices()?.len())
    }

    fn find_ledger(&self, device_id: &DeviceId) -> ReadingResult<Option<SharedLedger>> {
        Ok(self.read_devices()?.get(device_id).map(Arc::clone))
    }

    fn ledger_for_write(&self, device_id: DeviceId) -> ReadingResult<SharedLedger> {
        if let Some(shared) = self.find_ledger(&device_id)? {
            return Ok(shared);
        }

        // Another writer may have created it between the two locks
        let mut devices = self.write_devices()?;
        Ok(Arc::clone(devices.entry(device_id).or_default()))
    }

    fn read_devices(&self) -> ReadingResult<RwLockReadGuard<'_, HashMap<DeviceId, SharedLedger>>> {
        self.devices
            .read()
            .map_err(|_| ReadingError::Internal { reason: DEVICE_MAP_POISONED })
    }

    fn write_devices(&self) -> ReadingResult<RwLockWriteGuard<'_, HashMap<DeviceId, SharedLedger>>> {
        self.devices
            .write()
            .map_err(|_| ReadingError::Internal { reason: DEVICE_MAP_POISONED })
    }
}

fn lock_ledger(shared: &SharedLedger) -> ReadingResult<MutexGuard<'_, DeviceLedger>> {
    shared
        .lock()
        .map_err(|_| ReadingError::Internal { reason: LEDGER_POISONED })
}
