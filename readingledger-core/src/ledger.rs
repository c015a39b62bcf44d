//! Per-Device Reading Ledger
//!
//! ## Overview
//!
//! A [`DeviceLedger`] holds everything known about one device:
//! - `timestamps`: strictly increasing, duplicate-free instants
//! - `count_sum`: running total of counts over accepted readings
//! - `readings`: accepted readings in acceptance order
//!
//! Both queries read maintained state and never rescan the history:
//! the latest timestamp is the last element of the sorted vector and the
//! cumulative count is a field read.
//!
//! ## Deduplication
//!
//! Two readings are duplicates when their timestamps are the same instant,
//! whatever offset they were written with. A duplicate is dropped silently:
//! its count is not added and it is not recorded. Replaying a timestamp with a
//! different count therefore has no effect after the first acceptance.
//!
//! ## Insertion Cost
//!
//! ```text
//! binary search for position   O(log n)
//! shift tail on insert         O(n)
//! latest_timestamp()           O(1)
//! cumulative_count()           O(1)
//! ```
//!
//! ## Invariants
//!
//! - `timestamps.len() == readings.len()`
//! - `count_sum == readings.iter().map(count).sum()`, exactly; counts are
//!   `u64` and the sum is kept as `u128`
//! - `timestamps` is sorted ascending with no two equal instants
//!
//! ## Thread Safety
//!
//! This type is not thread-safe on its own. The store wraps each ledger in a
//! mutex and holds it for a whole batch.

use crate::{reading::Reading, time::Timestamp};

/// Ordered, de-duplicated readings of one device plus their running total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceLedger {
    /// Distinct instants, sorted ascending
    timestamps: Vec<Timestamp>,

    /// Sum of counts over `readings`
    count_sum: u128,

    /// Accepted readings in acceptance order
    readings: Vec<Reading>,
}

impl DeviceLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Incorporate one validated reading
    ///
    /// Returns `false` when the reading was dropped as a duplicate instant.
    pub fn add_reading(&mut self, reading: Reading) -> bool {
        let position = match self.timestamps.binary_search(reading.timestamp()) {
            Ok(_) => return false,
            Err(position) => position,
        };

        self.timestamps.insert(position, *reading.timestamp());
        self.count_sum += u128::from(reading.count());
        self.readings.push(reading);
        true
    }

    /// Most recent instant, `None` while nothing has been accepted
    pub fn latest_timestamp(&self) -> Option<&Timestamp> {
        self.timestamps.last()
    }

    /// Sum of counts over all accepted readings
    pub fn cumulative_count(&self) -> u128 {
        self.count_sum
    }

    /// Whether a reading at this instant was already accepted
    pub fn contains(&self, timestamp: &Timestamp) -> bool {
        self.timestamps.binary_search(timestamp).is_ok()
    }

    /// Number of accepted readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True until the first reading is accepted
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Accepted instants in ascending order
    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    /// Accepted readings in the order they were accepted
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }
}
