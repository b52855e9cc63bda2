// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the walnut crate.
//!
//! This example demonstrates:
//! - Loading a walnut file into a `Config`
//! - Typed getters for strings, integers, floats, durations and timestamps
//! - Scoping lookups to a key group with `select`
//! - Listing keys and their literal kinds
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage
//!
//! # Or point it at another file
//! cargo run --example basic_usage -- path/to/settings.walnut
//! ```

use std::env;
use walnut::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Walnut: Basic Usage ===\n");

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/app.walnut").to_string());
    let config = Config::from_file(&path)?;

    println!("Loaded {} keys from {}\n", config.keys().len(), config.source_name());

    // Example 1: Typed getters on full dotted keys
    println!("--- Example 1: Typed Values ---");
    println!("app.name         = {}", config.string("app.name")?);
    println!("app.debug        = {}", config.bool("app.debug")?);
    println!("database.port    = {}", config.int64("database.port")?);
    println!("database.timeout = {:?}", config.duration("database.timeout")?);
    println!("released         = {}", config.timestamp("released")?);

    // Example 2: A scoped view over one key group
    println!("\n--- Example 2: Scoped Access ---");
    let database = config.select("database");
    let pool = database.select("pool");
    println!("host = {}", database.string("host")?);
    println!("pool.size = {}, pool.ratio = {}", pool.int64("size")?, pool.float64("ratio")?);

    // Example 3: Missing keys and wrong types are errors, not defaults
    println!("\n--- Example 3: Lookup Errors ---");
    match config.int64("app.workers") {
        Ok(workers) => println!("app.workers = {}", workers),
        Err(e) => println!("✗ {}", e),
    }
    match config.int64("app.name") {
        Ok(n) => println!("app.name = {}", n),
        Err(e) => println!("✗ {}", e),
    }

    // Example 4: Every key with its literal kind
    println!("\n--- Example 4: All Keys ---");
    for key in config.keys() {
        let literal = config.literal(key)?;
        println!("{:<18} {:<9} {}", key, literal.kind().name(), literal);
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
