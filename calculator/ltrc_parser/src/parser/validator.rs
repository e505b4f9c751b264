//! Token-grammar syntax check, driven by the operator registry.

use std::fmt;
use std::sync::Arc;

use ltrc_lexer::{Lexer, Token, TokenType};
use ltrc_ops::OperatorRegistry;
use nom::IResult;

use super::{take_token_if, TokenSlice};

/// Outcome of the two independent validation checks.
///
/// Both checks are always computed; overall validity is their conjunction.
/// Keeping the results separate lets callers say which check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    /// Result of the token-grammar syntax check
    pub syntax: bool,
    /// Result of the bracket-pairing check
    pub brackets: bool,
}

impl ValidationReport {
    /// True iff both checks passed.
    pub fn is_valid(&self) -> bool {
        self.syntax && self.brackets
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.syntax, self.brackets) {
            (true, true) => write!(f, "syntax and bracket pairing ok"),
            (false, true) => write!(f, "syntax check failed"),
            (true, false) => write!(f, "bracket pairing check failed"),
            (false, false) => write!(f, "syntax and bracket pairing checks failed"),
        }
    }
}

/// Syntax validator for arithmetic expressions.
///
/// Accepts the token-level grammar
///
/// ```text
/// expression := operand (operator operand)*
/// operand    := '('* sign? number ')'*
/// sign       := '+' | '-'
/// ```
///
/// where `operator` is any symbol registered in the [`OperatorRegistry`]:
/// extending the registry extends the accepted grammar without touching
/// this code.
///
/// The check is syntax-only. Brackets decorate operands freely here
/// (`"(10 + 20))))"` passes), and pairing is left entirely to
/// [`super::brackets`], so the two checks stay independent and can both be
/// reported. Conjoined, they accept exactly the recursively nested
/// expressions the evaluator understands: balanced brackets force every
/// group interior to start at an operand and end after one, so the
/// interior satisfies the same grammar.
pub struct ExpressionValidator {
    operators: Arc<OperatorRegistry>,
}

impl ExpressionValidator {
    /// Create a validator over the given operator registry.
    pub fn new(operators: Arc<OperatorRegistry>) -> Self {
        ExpressionValidator { operators }
    }

    /// Check the syntax of a raw expression string.
    ///
    /// Lexes internally; anything the lexer cannot recognise fails the
    /// check. Returns a bare boolean and never raises: how a failure is
    /// signalled is the caller's decision.
    pub fn check_arithmetic_expr(&self, expression: &str) -> bool {
        let tokens = Lexer::tokenize(expression);
        self.check_tokens(&tokens)
    }

    /// Check the syntax of an already-lexed expression.
    pub fn check_tokens(&self, tokens: &[Token]) -> bool {
        if let Some(bad) = tokens
            .iter()
            .find(|t| t.token_type == TokenType::LexerError)
        {
            log::debug!("syntax check failed: unrecognised input {}", bad);
            return false;
        }

        match self.expression(TokenSlice::new(tokens)) {
            Ok((rest, ())) if rest.is_empty() => true,
            Ok((rest, ())) => {
                // rest is non-empty here, the guard above took the clean exit
                if let Some(token) = rest.first() {
                    log::debug!("syntax check failed: unexpected {}", token);
                }
                false
            }
            Err(_) => {
                log::debug!("syntax check failed: no operand where one was required");
                false
            }
        }
    }

    /// `expression := operand (operator operand)*`
    fn expression<'a>(&self, input: TokenSlice<'a>) -> IResult<TokenSlice<'a>, ()> {
        let (mut input, ()) = self.operand(input)?;

        while let Ok((next, _)) = self.operator(input) {
            let (next, ()) = self.operand(next)?;
            input = next;
        }

        Ok((input, ()))
    }

    /// `operand := '('* sign? number ')'*`
    ///
    /// The bracket decoration is deliberately unpaired: pairing is the
    /// bracket checker's job.
    fn operand<'a>(&self, input: TokenSlice<'a>) -> IResult<TokenSlice<'a>, ()> {
        let mut input = input;

        while let Ok((next, _)) =
            take_token_if(|t| t.token_type == TokenType::LeftParen)(input)
        {
            input = next;
        }

        // Optional sign directly before the number
        if let Ok((next, _)) =
            take_token_if(|t| matches!(t.token_type, TokenType::Plus | TokenType::Minus))(input)
        {
            input = next;
        }

        let (mut input, _) =
            take_token_if(|t| matches!(t.token_type, TokenType::Number(_)))(input)?;

        while let Ok((next, _)) =
            take_token_if(|t| t.token_type == TokenType::RightParen)(input)
        {
            input = next;
        }

        Ok((input, ()))
    }

    /// A single operator token whose symbol is registered.
    fn operator<'a>(&self, input: TokenSlice<'a>) -> IResult<TokenSlice<'a>, &'a Token> {
        take_token_if(|t| {
            t.token_type
                .operator_symbol()
                .map(|symbol| self.operators.contains(symbol))
                .unwrap_or(false)
        })(input)
    }
}
