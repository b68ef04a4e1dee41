#![cfg(test)]

//! Unified test logging initialization.
//!
//! One-time, race-safe tracing setup for unit tests. The level is taken
//! from `TEST_LOG`, then `RUST_LOG`, defaulting to `warn`.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceLock<()> = OnceLock::new();

pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer() // cargo/nextest output capture
            .without_time()
            .try_init()
            .ok(); // Never panic if something else already initialized
    });
}
