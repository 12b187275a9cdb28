//! Token system for the record language
//!
//! A closed token inventory: four keywords, three punctuation marks, integer
//! literals, and the end-of-line sentinel. Integer literals carry the raw
//! digit string; numeric interpretation is the parser's job.
use crate::grammar::keywords::{CubeColor, Keyword};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tokens produced by the lexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    // === KEYWORDS ===
    /// The `Game` record marker
    Game,
    /// Color keywords
    Red,
    Green,
    Blue,

    // === PUNCTUATION ===
    Colon,     // :
    Semicolon, // ;
    Comma,     // ,

    // === LITERALS ===
    /// Integer literal, raw digit string as scanned
    Int(String),

    // === STRUCTURE ===
    /// End of line marker, returned indefinitely once the input is exhausted
    EndOfLine,
}

impl Token {
    /// Create a token from a keyword table entry
    pub fn from_keyword(keyword: Keyword) -> Self {
        match keyword {
            Keyword::Game => Self::Game,
            Keyword::Red => Self::Red,
            Keyword::Green => Self::Green,
            Keyword::Blue => Self::Blue,
        }
    }

    /// Get the fieldless kind of this token, used for parser expectations
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Game => TokenKind::Game,
            Self::Red => TokenKind::Red,
            Self::Green => TokenKind::Green,
            Self::Blue => TokenKind::Blue,
            Self::Colon => TokenKind::Colon,
            Self::Semicolon => TokenKind::Semicolon,
            Self::Comma => TokenKind::Comma,
            Self::Int(_) => TokenKind::Int,
            Self::EndOfLine => TokenKind::EndOfLine,
        }
    }

    /// Check if this token is a color keyword
    pub fn is_color(&self) -> bool {
        matches!(self, Self::Red | Self::Green | Self::Blue)
    }

    /// Get the cube color if this token is a color keyword
    pub fn color(&self) -> Option<CubeColor> {
        match self {
            Self::Red => Some(CubeColor::Red),
            Self::Green => Some(CubeColor::Green),
            Self::Blue => Some(CubeColor::Blue),
            _ => None,
        }
    }

    /// Check if this token is an integer literal
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Get the digit string if this token is an integer literal
    pub fn as_int_literal(&self) -> Option<&str> {
        match self {
            Self::Int(digits) => Some(digits),
            _ => None,
        }
    }

    /// Check if this token marks the end of the line
    pub fn is_end_of_line(&self) -> bool {
        matches!(self, Self::EndOfLine)
    }

    /// Get the token as it appears in record source
    pub fn as_source_string(&self) -> String {
        match self {
            Self::Game => "Game".to_string(),
            Self::Red => "red".to_string(),
            Self::Green => "green".to_string(),
            Self::Blue => "blue".to_string(),
            Self::Colon => ":".to_string(),
            Self::Semicolon => ";".to_string(),
            Self::Comma => ",".to_string(),
            Self::Int(digits) => digits.clone(),
            Self::EndOfLine => "<EOL>".to_string(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_source_string())
    }
}

/// Fieldless token discriminant for parser expectations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Game,
    Red,
    Green,
    Blue,
    Colon,
    Semicolon,
    Comma,
    Int,
    EndOfLine,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "'Game'",
            Self::Red => "'red'",
            Self::Green => "'green'",
            Self::Blue => "'blue'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Int => "integer",
            Self::EndOfLine => "end of line",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Token classification for metrics collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// The `Game` record marker
    Marker,
    /// Color keywords
    Color,
    /// Integer literals
    Literal,
    /// Separators and the colon
    Punctuation,
    /// End of line sentinel
    Terminator,
}

impl Token {
    /// Get the classification of this token
    pub fn token_class(&self) -> TokenClass {
        match self {
            Self::Game => TokenClass::Marker,
            Self::Red | Self::Green | Self::Blue => TokenClass::Color,
            Self::Int(_) => TokenClass::Literal,
            Self::Colon | Self::Semicolon | Self::Comma => TokenClass::Punctuation,
            Self::EndOfLine => TokenClass::Terminator,
        }
    }
}

/// Classify a letter run against the keyword table
pub fn classify_word(word: &str) -> Option<Token> {
    Keyword::from_str(word).map(Token::from_keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_word() {
        assert_eq!(classify_word("Game"), Some(Token::Game));
        assert_eq!(classify_word("red"), Some(Token::Red));
        assert_eq!(classify_word("green"), Some(Token::Green));
        assert_eq!(classify_word("blue"), Some(Token::Blue));
        assert_eq!(classify_word("purple"), None);
        assert_eq!(classify_word(""), None);
    }

    #[test]
    fn test_token_kinds() {
        assert_eq!(Token::Int("12".to_string()).kind(), TokenKind::Int);
        assert_eq!(Token::Colon.kind(), TokenKind::Colon);
        assert_eq!(Token::EndOfLine.kind(), TokenKind::EndOfLine);
    }

    #[test]
    fn test_color_accessor() {
        assert_eq!(Token::Red.color(), Some(CubeColor::Red));
        assert_eq!(Token::Green.color(), Some(CubeColor::Green));
        assert_eq!(Token::Blue.color(), Some(CubeColor::Blue));
        assert_eq!(Token::Game.color(), None);
        assert_eq!(Token::Int("3".to_string()).color(), None);
    }

    #[test]
    fn test_int_literal_accessor() {
        let token = Token::Int("42".to_string());
        assert!(token.is_int());
        assert_eq!(token.as_int_literal(), Some("42"));
        assert_eq!(Token::Comma.as_int_literal(), None);
    }

    #[test]
    fn test_source_string() {
        assert_eq!(Token::Game.as_source_string(), "Game");
        assert_eq!(Token::Semicolon.as_source_string(), ";");
        assert_eq!(Token::Int("7".to_string()).as_source_string(), "7");
        assert_eq!(Token::EndOfLine.as_source_string(), "<EOL>");
    }

    #[test]
    fn test_token_classes() {
        assert_eq!(Token::Game.token_class(), TokenClass::Marker);
        assert_eq!(Token::Blue.token_class(), TokenClass::Color);
        assert_eq!(Token::Int("1".to_string()).token_class(), TokenClass::Literal);
        assert_eq!(Token::Comma.token_class(), TokenClass::Punctuation);
        assert_eq!(Token::EndOfLine.token_class(), TokenClass::Terminator);
    }
}
