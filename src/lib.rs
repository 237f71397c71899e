//! calculator: simple arithmetic service and demo transcript (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod calculator;
pub mod constants;
pub mod demo;
pub mod logging;
pub mod models;
pub mod output;

pub use calculator::{CalcError, Calculator};
