//! Lexical analysis of record lines

pub mod analyzer;

pub use analyzer::{Lexer, LexerError, LexicalMetrics};
