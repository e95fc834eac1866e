//! File logging example
//!
//! Configures the process-wide logger to write to a file and stdout, logs
//! from a few places, then flushes on the way out.
//!
//! Run with: cargo run --example file_logging

use global_file_logger::prelude::*;
use global_file_logger::{error, info, warn};

fn process(item: u32) {
    if item == 3 {
        warn!("item {} took longer than expected", item);
    }
    logger().info_with_context("processed item", LogContext::new().with_field("item", item));
}

fn main() -> Result<()> {
    init_logger("debug", "application.log", true)?;
    let _guard = shutdown_guard();

    info!("application started");
    logger().debug("loading configuration...");

    for item in 1..=5 {
        process(item);
    }

    error!("failed to load optional plugin: {}", "metrics");
    logger().trace("not written: below the debug threshold");

    info!("all operations completed");
    println!("Check 'application.log' for the full log output");
    Ok(())
}
