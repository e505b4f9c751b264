//! The calculator: validation gate, bracket resolution, reduction.

use std::sync::Arc;

use ltrc_lexer::{Lexer, Token, TokenType};
use ltrc_ops::OperatorRegistry;
use ltrc_parser::parser::{brackets, ExpressionValidator, ValidationReport};

use crate::error::CalcError;
use crate::evaluator::{LeftToRightEvaluator, StreamToken};

/// Left-to-right arithmetic expression calculator.
///
/// Evaluates expressions strictly from left to right, ignoring standard
/// operator precedence, while handling parentheses by recursive
/// innermost-first resolution.
///
/// Construction wires one operator registry into both the validator and
/// the evaluator. The calculator holds no per-call state, so one instance
/// can serve any number of threads once built.
pub struct LtrCalculator {
    validator: ExpressionValidator,
    evaluator: LeftToRightEvaluator,
}

impl LtrCalculator {
    /// Calculator over the standard operator set.
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::new())
    }

    /// Calculator over a caller-supplied operator set.
    pub fn with_registry(registry: OperatorRegistry) -> Self {
        let registry = Arc::new(registry);
        LtrCalculator {
            validator: ExpressionValidator::new(Arc::clone(&registry)),
            evaluator: LeftToRightEvaluator::new(registry),
        }
    }

    /// Run both validation checks without evaluating.
    ///
    /// The checks are computed independently, never short-circuited, so
    /// the report names every failing check.
    pub fn validate(&self, expression: &str) -> ValidationReport {
        ValidationReport {
            syntax: self.validator.check_arithmetic_expr(expression),
            brackets: brackets::check(expression),
        }
    }

    /// Evaluate an arithmetic expression.
    ///
    /// Lexes the input (whitespace disappears between tokens here), runs
    /// both validation checks, resolves parenthesized groups
    /// innermost-first, and reduces the flat remainder left to right.
    pub fn evaluate(&self, expression: &str) -> Result<f64, CalcError> {
        let tokens = Lexer::tokenize(expression);

        let report = ValidationReport {
            syntax: self.validator.check_tokens(&tokens),
            brackets: brackets::check(expression),
        };
        if !report.is_valid() {
            log::debug!("rejected {:?}: {}", expression, report);
            return Err(CalcError::InvalidExpression(report));
        }

        self.evaluate_tokens(&tokens)
    }

    /// Evaluate a validated token slice: flatten bracketed groups into
    /// scalars, then reduce.
    fn evaluate_tokens(&self, tokens: &[Token]) -> Result<f64, CalcError> {
        let stream = self.flatten(tokens)?;
        self.evaluator.evaluate(&stream)
    }

    /// Resolve bracketed groups and signs into plain operands.
    ///
    /// Walks the tokens left to right. Each group's interior is evaluated
    /// recursively (innermost groups bottom out first) and the numeric
    /// value is substituted directly into the stream; substituting the
    /// scalar rather than its rendering avoids round-tripping sub-results
    /// through text. A sign at operand position folds into the number that
    /// follows it. Termination: every recursion strips one bracket pair.
    ///
    /// Input is already validated; the error paths below guard against
    /// internal misuse only.
    fn flatten(&self, tokens: &[Token]) -> Result<Vec<StreamToken>, CalcError> {
        let mut stream = Vec::new();
        let mut expect_operand = true;
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];
            match &token.token_type {
                TokenType::LeftParen if expect_operand => {
                    let close = matching_bracket(tokens, index)?;
                    let value = self.evaluate_tokens(&tokens[index + 1..close])?;
                    stream.push(StreamToken::Operand(value));
                    expect_operand = false;
                    index = close + 1;
                }

                TokenType::Plus | TokenType::Minus if expect_operand => {
                    let sign = if token.token_type == TokenType::Minus {
                        -1.0
                    } else {
                        1.0
                    };
                    match tokens.get(index + 1).map(|t| &t.token_type) {
                        Some(TokenType::Number(value)) => {
                            stream.push(StreamToken::Operand(sign * value));
                            expect_operand = false;
                            index += 2;
                        }
                        _ => return Err(CalcError::MalformedStream("sign without a number")),
                    }
                }

                TokenType::Number(value) if expect_operand => {
                    stream.push(StreamToken::Operand(*value));
                    expect_operand = false;
                    index += 1;
                }

                other if !expect_operand => match other.operator_symbol() {
                    Some(symbol) => {
                        stream.push(StreamToken::Operator(symbol));
                        expect_operand = true;
                        index += 1;
                    }
                    None => {
                        return Err(CalcError::MalformedStream(
                            "operator position held no operator",
                        ))
                    }
                },

                _ => {
                    return Err(CalcError::MalformedStream(
                        "operand position held no operand",
                    ))
                }
            }
        }

        if expect_operand {
            return Err(CalcError::MalformedStream("trailing operator"));
        }

        Ok(stream)
    }
}

impl Default for LtrCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the `)` matching the `(` at `open`.
fn matching_bracket(tokens: &[Token], open: usize) -> Result<usize, CalcError> {
    let mut depth = 0i32;
    for (index, token) in tokens.iter().enumerate().skip(open) {
        match token.token_type {
            TokenType::LeftParen => depth += 1,
            TokenType::RightParen => {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            }
            _ => {}
        }
    }
    Err(CalcError::MalformedStream("unclosed bracket"))
}
