//! Token definitions and classification

pub mod token;

pub use token::{classify_word, Token, TokenClass, TokenKind};
