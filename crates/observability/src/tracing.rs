//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// JSON output with timestamps, filter taken from `RUST_LOG` and falling back
/// to `info`. Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_default("info");
}

/// Install the subscriber with an explicit fallback filter directive.
pub fn init_with_default(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
