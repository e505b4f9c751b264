//! The operator registry: symbols and their computation rules.

use crate::error::ArithmeticError;

/// Result of applying a binary operator to two operands.
pub type ApplyResult = Result<f64, ArithmeticError>;

/// Implementation of a binary operator.
pub type BinaryFn = fn(f64, f64) -> ApplyResult;

/// A registered binary operator: the symbol it is written as and the
/// computation rule behind it.
#[derive(Debug, Clone, Copy)]
pub struct Operator {
    /// The symbol as it appears in an expression (`+`, `**`, ...).
    pub symbol: &'static str,
    /// The computation rule for the operator.
    pub apply: BinaryFn,
}

impl Operator {
    /// Every registered operator takes exactly two operands.
    pub const ARITY: usize = 2;
}

fn add(left: f64, right: f64) -> ApplyResult {
    Ok(left + right)
}

fn sub(left: f64, right: f64) -> ApplyResult {
    Ok(left - right)
}

fn mul(left: f64, right: f64) -> ApplyResult {
    Ok(left * right)
}

fn div(left: f64, right: f64) -> ApplyResult {
    if right == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(left / right)
}

fn pow(left: f64, right: f64) -> ApplyResult {
    Ok(left.powf(right))
}

fn rem(left: f64, right: f64) -> ApplyResult {
    if right == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(left % right)
}

/// What percentage `part` is of `whole`.
fn percent_of(whole: f64, part: f64) -> ApplyResult {
    if whole == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(part * 100.0 / whole)
}

/// Registry of the binary operators supported by the calculator.
///
/// Holds an ordered collection of [`Operator`]s and provides a uniform
/// interface for lookup and execution. Registration order is preserved;
/// [`OperatorRegistry::symbols`] reorders longest-first so that
/// multi-character symbols are never shadowed by their single-character
/// prefixes (`**` before `*`).
///
/// The registry holds no per-call state, so a single instance can be shared
/// across threads once constructed.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    operators: Vec<Operator>,
}

impl OperatorRegistry {
    /// Create a registry with the standard operator set.
    pub fn new() -> Self {
        OperatorRegistry {
            operators: vec![
                Operator { symbol: "+", apply: add },
                Operator { symbol: "-", apply: sub },
                Operator { symbol: "*", apply: mul },
                Operator { symbol: "/", apply: div },
                Operator { symbol: "**", apply: pow },
                Operator { symbol: "%", apply: rem },
                // Percentage: `whole %% part` computes what percentage
                // `part` is of `whole`.
                Operator { symbol: "%%", apply: percent_of },
            ],
        }
    }

    /// Create a registry from an explicit operator set.
    ///
    /// Registration order is preserved and matters only for symbols of
    /// equal length in [`OperatorRegistry::symbols`].
    pub fn with_operators(operators: Vec<Operator>) -> Self {
        OperatorRegistry { operators }
    }

    /// Supported operator symbols, ordered by descending length.
    ///
    /// Longest-first ordering keeps `**` from being matched as two `*`
    /// when the alphabet is used to drive matching. Symbols of equal
    /// length keep their registration order.
    pub fn symbols(&self) -> Vec<&'static str> {
        let mut symbols: Vec<&'static str> =
            self.operators.iter().map(|op| op.symbol).collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));
        symbols
    }

    /// Look up an operator by its symbol.
    pub fn get(&self, symbol: &str) -> Option<&Operator> {
        self.operators.iter().find(|op| op.symbol == symbol)
    }

    /// True if `symbol` names a registered operator.
    pub fn contains(&self, symbol: &str) -> bool {
        self.get(symbol).is_some()
    }

    /// Apply the operator named by `symbol` to `left` and `right`.
    ///
    /// Fails with [`ArithmeticError::UnknownOperator`] if the symbol is not
    /// registered, and propagates whatever the operator itself raises.
    pub fn apply(&self, symbol: &str, left: f64, right: f64) -> ApplyResult {
        let operator = self
            .get(symbol)
            .ok_or_else(|| ArithmeticError::UnknownOperator(symbol.to_string()))?;
        (operator.apply)(left, right)
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
