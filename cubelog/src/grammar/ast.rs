//! AST node definitions for parsed game records
//!
//! A record line parses into one `GameStatement` holding the ordered subsets
//! exactly as they appear in the source. Each subset is a list of raw reveals;
//! summation into per-color totals happens in the evaluation stage, not here.
use super::keywords::CubeColor;
use serde::{Deserialize, Serialize};

/// A single `<amount> <color>` reveal within a subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealStatement {
    pub color: CubeColor,
    pub amount: u32,
}

/// One semicolon-delimited subset of reveals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubsetStatement {
    pub reveals: Vec<RevealStatement>,
}

impl SubsetStatement {
    pub fn reveal_count(&self) -> usize {
        self.reveals.len()
    }
}

/// A complete `Game <id>: ...` record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatement {
    pub game_id: u32,
    pub subsets: Vec<SubsetStatement>,
}

impl GameStatement {
    pub fn subset_count(&self) -> usize {
        self.subsets.len()
    }

    /// Total number of reveals across all subsets
    pub fn reveal_count(&self) -> usize {
        self.subsets.iter().map(SubsetStatement::reveal_count).sum()
    }
}
