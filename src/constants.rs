//! App-wide constants.
//!
//! Centralises fixed strings and the demo inputs so a change only
//! requires editing this file.

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Title printed between `===` markers on the first transcript line.
pub const TRANSCRIPT_TITLE: &str = "Simple Calculator Test Script";

// ── Demo inputs ─────────────────────────────────────────────────────

pub const DEMO_NUM1: i32 = 20;
pub const DEMO_NUM2: i32 = 5;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";
