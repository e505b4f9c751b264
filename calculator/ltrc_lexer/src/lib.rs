//! Lexical analysis for left-to-right arithmetic expressions.
//!
//! Converts a raw expression string into a stream of tokens for the
//! validator and evaluator. Whitespace separates tokens and is dropped
//! here, which is the calculator's whitespace-normalization step: spaces
//! around tokens never change the token stream, and a space can never
//! occur inside a number literal.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod token;

// Re-export the main types for convenience
pub use lexer::Lexer;
pub use logos_token::LogosToken;
pub use token::{Location, Token, TokenType};
