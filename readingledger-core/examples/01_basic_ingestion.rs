//! Basic Reading Ingestion Example
//!
//! This example walks one device through the common ingestion flows:
//! storing a batch, replaying a timestamp, and adding readings that land
//! before and after the current latest.
//!
//! ## What You'll Learn
//!
//! - Saving a batch of raw JSON readings for a device
//! - Querying the latest timestamp and the cumulative count
//! - How duplicate instants are dropped
//! - Why offsets do not matter for ordering or deduplication
//!
//! ## Running the Example
//!
//! ```bash
//! RUST_LOG=debug cargo run --example 01_basic_ingestion
//! ```

use readingledger_core::{format_timestamp, ReadingStore};
use serde_json::{json, Value};

const DEVICE: &str = "36d5658a-6908-479e-887e-a949ec199272";

fn main() {
    env_logger::init();

    println!("ReadingLedger Basic Ingestion Example");
    println!("=====================================\n");

    let store = ReadingStore::new();

    let steps: [(&str, Vec<Value>); 5] = [
        (
            "Initial batch, out of order",
            vec![
                json!({"timestamp": "2021-09-29T16:09:15+0100", "count": 15}),
                json!({"timestamp": "2021-09-29T16:08:15+0100", "count": 2}),
            ],
        ),
        (
            "Replay of an accepted timestamp",
            vec![json!({"timestamp": "2021-09-29T16:09:15+0100", "count": 99})],
        ),
        (
            "Same instant written in UTC",
            vec![json!({"timestamp": "2021-09-29T15:09:15+0000", "count": 40})],
        ),
        (
            "Earlier reading",
            vec![json!({"timestamp": "2021-09-29T16:00:00+0100", "count": 3})],
        ),
        (
            "Later reading in another offset",
            vec![json!({"timestamp": "2021-09-29T10:30:00-0600", "count": 1})],
        ),
    ];

    for (description, batch) in &steps {
        print!("{:.<45} ", description);
        match store.save_batch_for_device(DEVICE, batch) {
            Ok(()) => println!("✓ stored"),
            Err(e) => println!("✗ {} ({})", e.message(), e.status_code()),
        }
        report(&store);
    }

    let history = store
        .with_ledger(DEVICE, |ledger| {
            ledger
                .timestamps()
                .iter()
                .map(format_timestamp)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    println!("\nAccepted instants, ascending:");
    for ts in &history {
        println!("  {}", ts);
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- A timestamp is counted once; later copies are ignored");
    println!("- Offsets change the text, not the instant");
    println!("- The latest timestamp keeps the offset it was first written with");
}

fn report(store: &ReadingStore) {
    let latest = store
        .retrieve_latest_timestamp(DEVICE)
        .map(|ts| format_timestamp(&ts))
        .unwrap_or_else(|e| e.message().to_string());
    let total = store
        .retrieve_sum_count(DEVICE)
        .map(|n| n.to_string())
        .unwrap_or_else(|e| e.message().to_string());
    println!("    latest: {:<26} cumulative count: {}", latest, total);
}
