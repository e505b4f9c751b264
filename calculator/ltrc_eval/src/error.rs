//! Error taxonomy for expression evaluation.

use ltrc_ops::ArithmeticError;
use ltrc_parser::parser::ValidationReport;
use thiserror::Error;

/// An error produced while validating or evaluating an expression.
///
/// All variants are fail-fast: validation errors are detected before any
/// arithmetic is attempted, and arithmetic errors abort the remaining
/// reduction. No retries, no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The expression failed validation. The report says which of the two
    /// independent checks rejected it.
    #[error("invalid expression: {0}")]
    InvalidExpression(ValidationReport),

    /// A division, remainder, or percentage hit a zero divisor during
    /// reduction.
    #[error("division by zero")]
    DivisionByZero,

    /// A token stream carried an operator symbol the registry does not
    /// know. Cannot happen for input that passed validation; handled
    /// defensively anyway.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    /// A flat token stream violated the operand/operator alternation
    /// contract. Internal misuse, not a user error.
    #[error("malformed token stream: {0}")]
    MalformedStream(&'static str),
}

impl From<ArithmeticError> for CalcError {
    fn from(err: ArithmeticError) -> Self {
        match err {
            ArithmeticError::DivisionByZero => CalcError::DivisionByZero,
            ArithmeticError::UnknownOperator(symbol) => CalcError::UnknownOperator(symbol),
        }
    }
}
