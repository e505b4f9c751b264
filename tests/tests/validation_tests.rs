//! Tests for the two independent validation checks.

use std::sync::Arc;

use ltrc_eval::LtrCalculator;
use ltrc_lexer::Lexer;
use ltrc_ops::{Operator, OperatorRegistry};
use ltrc_parser::parser::{brackets, BracketError, ExpressionValidator, ValidationReport};
use pretty_assertions::assert_eq;

#[test]
fn both_checks_are_always_computed() {
    let calc = LtrCalculator::new();

    // fails both at once; neither check masks the other
    let report = calc.validate(") + (");
    assert_eq!(
        report,
        ValidationReport {
            syntax: false,
            brackets: false,
        }
    );
    assert!(!report.is_valid());
}

#[test]
fn bracket_errors_carry_offsets() {
    assert_eq!(
        brackets::verify("(10 + 20))))"),
        Err(BracketError::UnmatchedClose { offset: 9 })
    );
    assert_eq!(
        brackets::verify("((3+2) + 5"),
        Err(BracketError::UnclosedOpen { offset: 0 })
    );
    assert_eq!(brackets::verify("(1 + 2) * 3"), Ok(()));
}

#[test]
fn bracket_check_is_purely_structural() {
    // nonsense between brackets is fine for this check
    assert!(brackets::check("() + 10 (/) 20"));
    assert!(brackets::check("(/)(((*)))"));
}

#[test]
fn syntax_check_accepts_what_the_lexer_and_grammar_accept() {
    let validator = ExpressionValidator::new(Arc::new(OperatorRegistry::new()));

    assert!(validator.check_arithmetic_expr("1 + 2.5 * (3 - 4)"));
    assert!(!validator.check_arithmetic_expr("one + two"));
    assert!(!validator.check_arithmetic_expr("1 ++ + 2"));
}

#[test]
fn registry_extension_extends_the_grammar() {
    // the validator derives its operator alphabet from the registry
    let small = OperatorRegistry::with_operators(vec![Operator {
        symbol: "+",
        apply: |left, right| Ok(left + right),
    }]);
    let validator = ExpressionValidator::new(Arc::new(small));
    assert!(validator.check_arithmetic_expr("1 + 2"));
    assert!(!validator.check_arithmetic_expr("1 - 2"));

    let full = ExpressionValidator::new(Arc::new(OperatorRegistry::new()));
    assert!(full.check_arithmetic_expr("1 - 2"));
}

#[test]
fn check_tokens_matches_check_arithmetic_expr() {
    let validator = ExpressionValidator::new(Arc::new(OperatorRegistry::new()));

    for expr in ["(1 + 2) * 3", "4 + 2   5", "2 ** -3", ""] {
        let tokens = Lexer::tokenize(expr);
        assert_eq!(
            validator.check_tokens(&tokens),
            validator.check_arithmetic_expr(expr),
            "disagreement on {:?}",
            expr
        );
    }
}
