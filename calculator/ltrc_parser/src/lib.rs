//! Validation layer for left-to-right arithmetic expressions.

pub mod parser;
