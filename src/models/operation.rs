//! The four supported arithmetic operations.

use strum::{Display, EnumIter};

/// An arithmetic operation understood by the calculator.
///
/// The `Display` impl yields the transcript label (`Addition`, ...).
/// Variant order is the order the demo runner evaluates them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Operation {
    #[strum(to_string = "Addition")]
    Add,
    #[strum(to_string = "Subtraction")]
    Subtract,
    #[strum(to_string = "Multiplication")]
    Multiply,
    #[strum(to_string = "Division")]
    Divide,
}

impl Operation {
    /// Infix symbol used when printing `a <symbol> b`.
    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }
}
