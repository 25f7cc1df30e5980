//! Logging and tracing utilities for the generator.
//!
//! This module provides helpers for setting up structured logging using the
//! `tracing` ecosystem. All logs are written to **stderr**: in a typical
//! generator pipeline, stdout carries the generated source text.
//!
//! # Quick Start
//!
//! ```ignore
//! use tfplugin_schema_gen::{init_logging, Renderer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Initialize logging (reads RUST_LOG env var)
//!     init_logging();
//!
//!     tracing::info!("starting generation");
//!     let renderer = Renderer::new()?;
//!     // ...
//!     Ok(())
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls log levels (e.g., `info`, `debug`,
//!   `tfplugin_schema_gen=trace`). Per-attribute render events are emitted at
//!   `trace`, per-schema events at `debug`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_subscriber(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .try_init()
        .is_ok()
}

/// Initialize the default logging subscriber.
///
/// This sets up a `tracing` subscriber that:
/// - Writes to **stderr** (stdout is reserved for generated output)
/// - Respects the `RUST_LOG` environment variable for filtering
/// - Defaults to `info` level if `RUST_LOG` is not set
/// - Uses a compact, human-readable format
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging() {
    init_logging_with_default("info");
}

/// Initialize logging with a custom default level.
///
/// Like [`init_logging`], but allows specifying a default log level that will
/// be used if `RUST_LOG` is not set.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_logging_with_default(default_level: &str) {
    if !init_subscriber(default_level) {
        panic!("a global tracing subscriber has already been set");
    }
}

/// Try to initialize logging, returning false if already initialized.
///
/// Unlike [`init_logging`], this function does not panic if a subscriber has
/// already been set. This is useful in test scenarios or when the generator
/// might be initialized multiple times.
pub fn try_init_logging() -> bool {
    init_subscriber("info")
}
