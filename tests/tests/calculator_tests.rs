//! End-to-end tests for the evaluation pipeline.

use std::sync::Arc;
use std::thread;

use ltrc_eval::{evaluate, CalcError, LtrCalculator};
use ltrc_parser::parser::ValidationReport;
use pretty_assertions::assert_eq;

#[test]
fn evaluates_strictly_left_to_right() {
    // (2 + 3) * 4, never 2 + (3 * 4)
    assert_eq!(evaluate("2+3*4"), Ok(20.0));
    assert_eq!(evaluate("2 + 3 * 4"), Ok(20.0));
    assert_eq!(evaluate("10 - 4 - 3"), Ok(3.0));
    assert_eq!(evaluate("12 / 4 * 3"), Ok(9.0));
    assert_eq!(evaluate("2 ** 3 ** 2"), Ok(64.0));
}

#[test]
fn resolves_nested_parentheses() {
    assert_eq!(
        evaluate("(3 + (2 * 10 / (40 - 20)) + (3 * 4)) * 10"),
        Ok(160.0)
    );
    assert_eq!(evaluate("((((5))))"), Ok(5.0));
    assert_eq!(evaluate("2 * (3 + 1)"), Ok(8.0));
}

#[test]
fn unbalanced_brackets_are_invalid() {
    assert_eq!(
        evaluate("(10 + 20))))"),
        Err(CalcError::InvalidExpression(ValidationReport {
            syntax: true,
            brackets: false,
        }))
    );
    assert_eq!(
        evaluate("((3+2) + 5"),
        Err(CalcError::InvalidExpression(ValidationReport {
            syntax: true,
            brackets: false,
        }))
    );
}

#[test]
fn broken_syntax_is_invalid_even_with_paired_brackets() {
    assert_eq!(
        evaluate("() + 10 (/) 20"),
        Err(CalcError::InvalidExpression(ValidationReport {
            syntax: false,
            brackets: true,
        }))
    );
    assert_eq!(
        evaluate("4 + 2   5"),
        Err(CalcError::InvalidExpression(ValidationReport {
            syntax: false,
            brackets: true,
        }))
    );
}

#[test]
fn division_by_zero_surfaces_at_the_point_of_reduction() {
    // the inner group reduces to 0.0 first
    assert_eq!(
        evaluate("4 + 2 / (20 / 20 - 1)"),
        Err(CalcError::DivisionByZero)
    );
    assert_eq!(evaluate("1 / 0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("5 % 0"), Err(CalcError::DivisionByZero));
    assert_eq!(evaluate("0 %% 5"), Err(CalcError::DivisionByZero));
}

#[test]
fn whitespace_never_changes_a_result() {
    assert_eq!(evaluate("1+2*3"), evaluate(" 1 + 2 * 3 "));
    assert_eq!(evaluate("(1+2)*3"), evaluate("( 1 + 2 ) * 3"));
    assert_eq!(evaluate("10.5+1"), evaluate("10.5 + 1"));
}

#[test]
fn signed_operands_evaluate() {
    assert_eq!(evaluate("-5"), Ok(-5.0));
    assert_eq!(evaluate("+5"), Ok(5.0));
    assert_eq!(evaluate("2 + -3"), Ok(-1.0));
    assert_eq!(evaluate("2--3"), Ok(5.0));
    assert_eq!(evaluate("(-3 + 2) * 4"), Ok(-4.0));
}

#[test]
fn extended_operator_set() {
    assert_eq!(evaluate("2 ** 10"), Ok(1024.0));
    assert_eq!(evaluate("7 % 4"), Ok(3.0));
    // 10 is 20% of 50
    assert_eq!(evaluate("50 %% 10"), Ok(20.0));
    // left to right: (100 %% 50) = 50, then 50 %% 25 = 50
    assert_eq!(evaluate("100 %% 50 %% 25"), Ok(50.0));
}

#[test]
fn accepted_expressions_yield_finite_results() {
    for expr in [
        "1",
        "2 + 3 * 4",
        "(1 + 2) * (3 + 4)",
        "10 / 4 + 2.5",
        "100 %% 3",
    ] {
        let value = evaluate(expr).unwrap();
        assert!(value.is_finite(), "{expr} produced {value}");
    }
}

#[test]
fn nesting_depth_is_unbounded() {
    let depth = 256;
    let expression = format!("{}42{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&expression), Ok(42.0));
}

#[test]
fn one_calculator_serves_many_threads() {
    let calculator = Arc::new(LtrCalculator::new());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let calculator = Arc::clone(&calculator);
            thread::spawn(move || {
                let expression = format!("({i} + 1) * 10");
                calculator.evaluate(&expression)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let value = handle.join().expect("worker panicked");
        assert_eq!(value, Ok((i as f64 + 1.0) * 10.0));
    }
}
