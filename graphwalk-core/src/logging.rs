//! Structured logging using **tracing**.
//!
//! The library only emits events; binaries decide where they go by calling
//! [`init_structured_logging`] once at startup.

use tracing::{error, info, warn};

/// Initializes the global tracing subscriber.
///
/// Emits JSON lines on stderr so stdout stays reserved for query output.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=graphwalk_core=debug`)
pub fn init_structured_logging() {
    // try_init: a second call (e.g. from tests) must not panic
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs a warning event.
pub fn log_warn(message: &str) {
    warn!(detail = %message);
}

/// Logs a named event, picking the level from the event name.
pub fn log_event(event: &str, detail: &str) {
    match event.to_uppercase().as_str() {
        "ERROR" => error!(event = %event, detail = %detail),
        "WARN" | "WARNING" => warn!(event = %event, detail = %detail),
        _ => info!(event = %event, detail = %detail),
    }
}
