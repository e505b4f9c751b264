//! Library half of the `ltrc` command-line calculator.

use ltrc_eval::LtrCalculator;
use serde::Serialize;

/// Machine-readable outcome of evaluating one expression.
#[derive(Debug, Serialize)]
pub struct EvalReport {
    /// The computed value, absent on any error
    pub result: Option<f64>,
    /// Human-readable error descriptions, empty on success
    pub errors: Vec<String>,
    /// Result of the token-grammar syntax check
    pub syntax_valid: bool,
    /// Result of the bracket-pairing check
    pub brackets_paired: bool,
}

/// Evaluate a source string and report the outcome without raising,
/// including the per-check validation detail.
pub fn analyze_expression(source: &str) -> EvalReport {
    let calculator = LtrCalculator::new();
    let validation = calculator.validate(source);

    match calculator.evaluate(source) {
        Ok(value) => EvalReport {
            result: Some(value),
            errors: Vec::new(),
            syntax_valid: validation.syntax,
            brackets_paired: validation.brackets,
        },
        Err(err) => EvalReport {
            result: None,
            errors: vec![err.to_string()],
            syntax_valid: validation.syntax,
            brackets_paired: validation.brackets,
        },
    }
}
