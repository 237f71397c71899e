//! Demo runner.
//!
//! Evaluates every [`Operation`] against a fixed pair of operands and
//! writes the resulting transcript. All calculations are made before
//! anything is written, so a failing operation leaves the writer untouched.

use std::io::{self, Write};

use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::debug;

use crate::calculator::{CalcError, Calculator};
use crate::constants::{DEMO_NUM1, DEMO_NUM2};
use crate::models::{Calculation, Operands, Operation, Transcript};
use crate::output::OutputRenderer;
use crate::output::terminal::TerminalRenderer;

/// Errors from a demo run.
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Calc(#[from] CalcError),

    #[error("failed to write transcript: {0}")]
    Write(#[from] io::Error),
}

/// Runs the four operations over one operand pair.
#[derive(Debug, Clone, Copy)]
pub struct DemoRunner {
    calculator: Calculator,
    operands: Operands,
}

impl Default for DemoRunner {
    /// The fixed demo: `20` and `5`.
    fn default() -> Self {
        Self::new(Calculator::new(), Operands::new(DEMO_NUM1, DEMO_NUM2))
    }
}

impl DemoRunner {
    pub fn new(calculator: Calculator, operands: Operands) -> Self {
        Self {
            calculator,
            operands,
        }
    }

    pub fn operands(&self) -> Operands {
        self.operands
    }

    /// Evaluate add, subtract, multiply and divide, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] if the second operand is zero.
    pub fn calculations(&self) -> Result<Vec<Calculation>, CalcError> {
        Operation::iter()
            .map(|operation| {
                self.calculator
                    .evaluate(operation, self.operands)
                    .map(|outcome| Calculation {
                        operation,
                        operands: self.operands,
                        outcome,
                    })
            })
            .collect()
    }

    /// Build the full transcript for this runner's operands.
    pub fn transcript(&self) -> Result<Transcript, CalcError> {
        Ok(Transcript {
            operands: self.operands,
            calculations: self.calculations()?,
        })
    }

    /// Render the transcript and write it to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<(), DemoError> {
        let transcript = self.transcript()?;
        debug!(
            a = self.operands.a,
            b = self.operands.b,
            calculations = transcript.calculations.len(),
            "rendering transcript"
        );
        let rendered = TerminalRenderer.render(&transcript);
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
