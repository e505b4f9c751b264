//! Lexer implementation for arithmetic expressions.
//!
//! Wraps the generated Logos lexer and converts its raw tokens into
//! semantic [`Token`]s with line/column/offset locations.

use logos::Logos;
use std::ops::Range;

use crate::logos_token::LogosToken;
use crate::token::{Location, Token, TokenType};

/// The main lexer struct that holds the state of the lexing process.
pub struct Lexer<'a> {
    /// The expression being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The current byte offset in the source
    offset: usize,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given expression.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            inner: LogosToken::lexer(source),
        }
    }

    /// Lex an expression to completion.
    pub fn tokenize(source: &'a str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    /// Advance the tracked position to the start of `span`, counting
    /// newlines in whatever was skipped in between.
    fn sync_position_to(&mut self, span: &Range<usize>) {
        let text = &self.source[self.offset..span.start];

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // Windows line endings (\r\n) count as one newline
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset = span.start;
    }

    /// Convert a raw Logos result to a semantic token at `span`.
    fn convert_token(
        &mut self,
        raw: Result<LogosToken, ()>,
        lexeme: &str,
        span: &Range<usize>,
    ) -> Token {
        self.sync_position_to(span);

        let location = Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        };

        let token_type = match raw {
            Ok(LogosToken::Number(value)) => TokenType::Number(value),
            Ok(LogosToken::Plus) => TokenType::Plus,
            Ok(LogosToken::Minus) => TokenType::Minus,
            Ok(LogosToken::Star) => TokenType::Star,
            Ok(LogosToken::Slash) => TokenType::Slash,
            Ok(LogosToken::Percent) => TokenType::Percent,
            Ok(LogosToken::DoubleStar) => TokenType::DoubleStar,
            Ok(LogosToken::DoublePercent) => TokenType::DoublePercent,
            Ok(LogosToken::LeftParen) => TokenType::LeftParen,
            Ok(LogosToken::RightParen) => TokenType::RightParen,

            // Whitespace is skipped by the generated lexer and never
            // reaches this point
            Ok(LogosToken::Whitespace) => TokenType::LexerError,

            Err(()) => {
                log::debug!("unrecognised input {:?} at {}", lexeme, location);
                TokenType::LexerError
            }
        };

        Token::new(token_type, lexeme, location)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let raw = self.inner.next()?;
        let span = self.inner.span();
        let lexeme = &self.source[span.clone()];
        Some(self.convert_token(raw, lexeme, &span))
    }
}
