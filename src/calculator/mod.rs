//! Arithmetic service.
//!
//! A stateless set of operations over two `i32` operands. Integer
//! operations wrap on overflow (two's-complement), matching a native
//! 32-bit `int`. Division promotes both operands to `f64` and is the only
//! operation that can fail.

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Operands, Operation, Outcome};

/// Errors raised by the calculator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

/// Stateless arithmetic service.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        a.wrapping_add(b)
    }

    /// Subtract `b` from `a`.
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        a.wrapping_sub(b)
    }

    /// Multiply two numbers.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        a.wrapping_mul(b)
    }

    /// Divide `a` by `b` in double precision.
    ///
    /// Both operands convert to `f64` exactly, so the result is the double
    /// nearest to the true quotient.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `b == 0`.
    pub fn divide(&self, a: i32, b: i32) -> Result<f64, CalcError> {
        if b == 0 {
            warn!(a, "rejected division by zero");
            return Err(CalcError::DivisionByZero);
        }
        debug!(a, b, "performing division");
        Ok(f64::from(a) / f64::from(b))
    }

    /// Dispatch `operation` over `operands`.
    pub fn evaluate(&self, operation: Operation, operands: Operands) -> Result<Outcome, CalcError> {
        let Operands { a, b } = operands;
        let outcome = match operation {
            Operation::Add => Outcome::Integer(self.add(a, b)),
            Operation::Subtract => Outcome::Integer(self.subtract(a, b)),
            Operation::Multiply => Outcome::Integer(self.multiply(a, b)),
            Operation::Divide => Outcome::Real(self.divide(a, b)?),
        };
        Ok(outcome)
    }
}
