//! Errors raised by operator application.

use thiserror::Error;

/// An error produced while applying a binary operator to two operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division or remainder with a zero divisor, or a percentage of a
    /// zero whole.
    #[error("division by zero")]
    DivisionByZero,

    /// The operator symbol is not present in the registry.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}
