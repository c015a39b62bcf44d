//! Error Handling Example
//!
//! Shows every rejection the store can produce and what a client would be
//! told about it.
//!
//! ## What You'll Learn
//!
//! - Which inputs are rejected and with which status code
//! - That a single bad reading rejects the whole batch
//! - The difference between a malformed id and an unknown device
//!
//! ## Error Categories
//!
//! 1. **Identifier Errors** - id is not a canonical UUIDv4 string
//! 2. **Reading Errors** - bad `count` or bad `timestamp`
//! 3. **Lookup Errors** - device has no readings yet
//!
//! ## Running the Example
//!
//! ```bash
//! RUST_LOG=warn cargo run --example 02_error_handling
//! ```

use readingledger_core::{ReadingError, ReadingStore};
use serde_json::{json, Value};

const DEVICE: &str = "36d5658a-6908-479e-887e-a949ec199272";

fn main() {
    env_logger::init();

    println!("ReadingLedger Error Handling Example");
    println!("====================================\n");

    let store = ReadingStore::new();

    println!("Rejected batches:\n");

    let cases: [(&str, &str, Vec<Value>); 8] = [
        (
            "Uppercase UUID",
            "36D5658A-6908-479E-887E-A949EC199272",
            vec![json!({"timestamp": "2021-09-29T16:08:15+0100", "count": 2})],
        ),
        (
            "Version 1 UUID",
            "36d5658a-6908-179e-887e-a949ec199272",
            vec![json!({"timestamp": "2021-09-29T16:08:15+0100", "count": 2})],
        ),
        (
            "Zero count",
            DEVICE,
            vec![json!({"timestamp": "2021-09-29T16:08:15+0100", "count": 0})],
        ),
        (
            "Count as string",
            DEVICE,
            vec![json!({"timestamp": "2021-09-29T16:08:15+0100", "count": "2"})],
        ),
        (
            "Fractional count",
            DEVICE,
            vec![json!({"timestamp": "2021-09-29T16:08:15+0100", "count": 2.5})],
        ),
        (
            "Offset with colon",
            DEVICE,
            vec![json!({"timestamp": "2021-09-29T16:08:15+01:00", "count": 2})],
        ),
        (
            "Missing timestamp",
            DEVICE,
            vec![json!({"count": 2})],
        ),
        (
            "Good reading followed by a bad one",
            DEVICE,
            vec![
                json!({"timestamp": "2021-09-29T16:08:15+0100", "count": 2}),
                json!({"timestamp": "yesterday", "count": 2}),
            ],
        ),
    ];

    for (description, device, batch) in &cases {
        print!("{:.<45} ", description);
        match store.save_batch_for_device(device, batch) {
            Ok(()) => println!("✓ stored (unexpected)"),
            Err(e) => println!("✗ {}", format_error(&e)),
        }
    }

    println!("\nQueries before any reading was accepted:\n");
    print!("{:.<45} ", "Latest timestamp");
    if let Err(e) = store.retrieve_latest_timestamp(DEVICE) {
        println!("✗ {}", format_error(&e));
    }
    print!("{:.<45} ", "Malformed id");
    if let Err(e) = store.retrieve_sum_count("not-a-uuid") {
        println!("✗ {}", format_error(&e));
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Nothing from a rejected batch is stored");
    println!("- Invalid ids are reported before the device is looked up");
    println!("- An unknown device is a 404, not a zero count");
}

fn format_error(error: &ReadingError) -> String {
    format!("{} [{}] {}", error.status_code(), error.kind(), error.message())
}
