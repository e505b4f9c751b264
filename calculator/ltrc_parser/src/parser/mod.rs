//! Validation for arithmetic expressions.
//!
//! Two independent checks live here: the structural bracket-pairing check
//! in [`brackets`] and the token-grammar syntax check in [`validator`].
//! Both are always computed; an expression is accepted only when both pass.

pub mod brackets;
pub mod validator;


pub use brackets::BracketError;
pub use validator::{ExpressionValidator, ValidationReport};

use ltrc_lexer::Token;
use nom::error::{Error as NomError, ErrorKind};
use nom::{Err as NomErr, IResult};

/// A view over the token stream being validated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSlice<'a>(pub &'a [Token]);

impl<'a> TokenSlice<'a> {
    /// Create a new token slice
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenSlice(tokens)
    }

    /// The slice with its first token removed
    pub fn advance(&self) -> Self {
        TokenSlice(self.0.get(1..).unwrap_or(&[]))
    }

    /// The current token without advancing
    pub fn first(&self) -> Option<&'a Token> {
        self.0.first()
    }

    /// True if no tokens remain
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tokens remaining
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Consume the first token if it satisfies `pred`.
pub fn take_token_if<'a, F>(
    pred: F,
) -> impl Fn(TokenSlice<'a>) -> IResult<TokenSlice<'a>, &'a Token>
where
    F: Fn(&Token) -> bool,
{
    move |input: TokenSlice<'a>| match input.first() {
        Some(token) if pred(token) => Ok((input.advance(), token)),
        _ => Err(NomErr::Error(NomError::new(input, ErrorKind::Tag))),
    }
}
