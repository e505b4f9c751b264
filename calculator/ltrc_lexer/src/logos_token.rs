//! Raw token definitions for the generated lexer.

use logos::Logos;

/// Raw tokens produced by the generated lexer.
///
/// Number literals are unsigned at this level: a leading `+` or `-` is
/// lexed as its own token and attached to the operand by the grammar.
/// Lexing `5-3` as `5` and `-3` would turn a subtraction into two adjacent
/// operands.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    // Two-character operators (higher priority so they are matched before
    // their single-character prefixes)
    #[token("**", priority = 1000)]
    DoubleStar,
    #[token("%%", priority = 1000)]
    DoublePercent,

    // Single-character operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Unsigned integer and decimal literals; a decimal point must be
    // followed by at least one digit
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse().ok())]
    Number(f64),

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,

    // Whitespace (skipped)
    #[regex(r"[ \t\n\r]+", logos::skip)]
    Whitespace,
}
