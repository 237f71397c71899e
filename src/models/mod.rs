//! Shared value types used across all modules.
//!
//! Everything here is a small value type. A [`Calculation`] pairs the
//! operands with their outcome for rendering. Other modules import from
//! here rather than reaching into each other's internals.

pub mod operation;

use std::fmt;

pub use operation::Operation;

/// The two integer inputs to an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operands {
    pub a: i32,
    pub b: i32,
}

impl Operands {
    pub fn new(a: i32, b: i32) -> Self {
        Self { a, b }
    }
}

/// Result of a single operation.
///
/// Addition, subtraction and multiplication stay in the integer domain;
/// division is promoted to a double.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Integer(i32),
    Real(f64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Integer(n) => write!(f, "{n}"),
            // Debug keeps the shortest round-trip digits and always a
            // fractional part, so 4.0 prints as "4.0" rather than "4".
            Outcome::Real(x) => write!(f, "{x:?}"),
        }
    }
}

/// One evaluated line of the transcript.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    pub operation: Operation,
    pub operands: Operands,
    pub outcome: Outcome,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {} = {}",
            self.operation,
            self.operands.a,
            self.operation.symbol(),
            self.operands.b,
            self.outcome,
        )
    }
}

/// Inputs plus every calculation made from them, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub operands: Operands,
    pub calculations: Vec<Calculation>,
}
