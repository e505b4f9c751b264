//! Left-to-right expression evaluation.
//!
//! Ties the pipeline together: lex the raw expression, run the two
//! independent validation checks (token grammar, bracket pairing),
//! resolve parenthesized groups innermost-first, and reduce the flat
//! remainder strictly left to right. There is no operator precedence
//! anywhere: `2 + 3 * 4` is `20`.

pub mod calculator;
pub mod error;
pub mod evaluator;

pub use calculator::LtrCalculator;
pub use error::CalcError;
pub use evaluator::{LeftToRightEvaluator, StreamToken};

use lazy_static::lazy_static;

lazy_static! {
    /// Process-wide calculator over the standard operator set.
    static ref DEFAULT_CALCULATOR: LtrCalculator = LtrCalculator::new();
}

/// Evaluate `expression` with the standard operator set.
///
/// Convenience wrapper over a lazily constructed, shared
/// [`LtrCalculator`]; registry and validator are built once per process
/// and are read-only afterwards.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    DEFAULT_CALCULATOR.evaluate(expression)
}
