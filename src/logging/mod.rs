//! Structured logging for the recent-projects CLI
//!
//! The library only emits `tracing` events; installing a subscriber is up to
//! the binary (or the embedding application).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// - Environment-based filtering via RUST_LOG env var
/// - Default level of DEBUG for this crate in debug builds, INFO in release builds
/// - Output goes to stderr so stdout stays machine-readable
pub fn init() {
    let default_level =
        if cfg!(debug_assertions) { "recent_projects=debug,info" } else { "recent_projects=info,warn" };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .init();
}

/// Initialize logging for tests
///
/// Uses try_init() to avoid panicking if called multiple times.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
