#![cfg(test)]

//! Unified test logging initialization.
//!
//! One-time, race-safe subscriber setup shared by every test in the
//! crate; auto-invoked from `lib.rs` via `ctor`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent; the level is read from `TEST_LOG`, then `RUST_LOG`, then
/// defaults to `warn`. Uses the test writer so cargo captures output per
/// test, and drops timestamps for stable output.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
