//! Keyword table for the record language
//!
//! The language has exactly four keywords: the `Game` record marker and the
//! three color names. Any other letter run in the input is rejected by the
//! lexer.
use serde::{Deserialize, Serialize};

/// Record language keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    Game,
    Red,
    Green,
    Blue,
}

impl Keyword {
    /// Get the exact string representation as it appears in record source
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Game => "Game",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Look up a word in the keyword table
    pub fn from_str(word: &str) -> Option<Self> {
        match word {
            "Game" => Some(Self::Game),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            _ => None,
        }
    }

    /// Check if this keyword names a cube color
    pub fn is_color(self) -> bool {
        !matches!(self, Self::Game)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cube color, the aggregation key for reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CubeColor {
    Red,
    Green,
    Blue,
}

impl CubeColor {
    /// All colors, in canonical order
    pub const ALL: [CubeColor; 3] = [CubeColor::Red, CubeColor::Green, CubeColor::Blue];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }

    /// Get the color named by a keyword, if any
    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Red => Some(Self::Red),
            Keyword::Green => Some(Self::Green),
            Keyword::Blue => Some(Self::Blue),
            Keyword::Game => None,
        }
    }
}

impl std::fmt::Display for CubeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
