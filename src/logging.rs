//! Tracing subscriber setup for the binary.
//!
//! Logs go to stderr so stdout carries nothing but the transcript.
//! The filter is read from `RUST_LOG`, falling back to `warn`.

use std::panic;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::constants::DEFAULT_LOG_FILTER;

/// Build the filter from `RUST_LOG`, or the default when unset or invalid.
pub fn env_filter() -> EnvFilter {
    parse_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

/// Parse `directives`, falling back to the default filter.
fn parse_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber and a panic hook that logs before unwinding.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn setup() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()?;

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());
        tracing::error!(target: "panic", "panic at {location}");
        default_hook(panic_info);
    }));

    Ok(())
}
