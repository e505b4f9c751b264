//! Strict left-to-right reduction of a flat token stream.

use std::sync::Arc;

use ltrc_ops::OperatorRegistry;

use crate::error::CalcError;

/// An item of the flat stream fed to the evaluator. Parentheses have
/// already been resolved into plain operands by this point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StreamToken {
    /// A numeric operand
    Operand(f64),
    /// A registered operator symbol
    Operator(&'static str),
}

/// Evaluates flat expressions strictly from left to right.
///
/// Intentionally ignores operator precedence and does not support
/// parentheses: `2 + 3 * 4` reduces to `20`, not `14`. This type only
/// orchestrates evaluation order; the actual computation is delegated to
/// the operator registry.
pub struct LeftToRightEvaluator {
    operators: Arc<OperatorRegistry>,
}

impl LeftToRightEvaluator {
    /// Create an evaluator dispatching through the given registry.
    pub fn new(operators: Arc<OperatorRegistry>) -> Self {
        LeftToRightEvaluator { operators }
    }

    /// Reduce a flat token stream to a single value.
    ///
    /// The accumulator starts at the first operand; each following
    /// (operator, operand) pair is applied in textual order. A division by
    /// zero aborts the reduction at the step where it occurs.
    ///
    /// The stream must alternate operand/operator and start and end with
    /// an operand. Anything else is a caller bug, reported defensively as
    /// [`CalcError::MalformedStream`] rather than evaluated partially.
    pub fn evaluate(&self, stream: &[StreamToken]) -> Result<f64, CalcError> {
        let mut items = stream.iter();

        let mut accumulator = match items.next() {
            Some(StreamToken::Operand(value)) => *value,
            Some(StreamToken::Operator(_)) => {
                return Err(CalcError::MalformedStream("stream starts with an operator"))
            }
            None => return Err(CalcError::MalformedStream("empty stream")),
        };

        loop {
            let symbol = match items.next() {
                Some(StreamToken::Operator(symbol)) => *symbol,
                Some(StreamToken::Operand(_)) => {
                    return Err(CalcError::MalformedStream("adjacent operands"))
                }
                None => break,
            };
            let operand = match items.next() {
                Some(StreamToken::Operand(value)) => *value,
                Some(StreamToken::Operator(_)) => {
                    return Err(CalcError::MalformedStream("adjacent operators"))
                }
                None => return Err(CalcError::MalformedStream("trailing operator")),
            };

            log::trace!("reduce: {} {} {}", accumulator, symbol, operand);
            accumulator = self.operators.apply(symbol, accumulator, operand)?;
        }

        Ok(accumulator)
    }
}
