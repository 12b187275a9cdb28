//! Validity checking against a cube predicate

use super::aggregate::CubeSet;
use serde::{Deserialize, Serialize};

/// Maximum cubes of each color the bag is assumed to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubePredicate {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Default for CubePredicate {
    fn default() -> Self {
        Self {
            red: 12,
            green: 13,
            blue: 14,
        }
    }
}

/// Check whether every subset fits within the predicate
///
/// A game with no subsets is vacuously valid. Checking short-circuits on
/// the first subset that exceeds any color.
pub fn is_valid_game(subsets: &[CubeSet], predicate: &CubePredicate) -> bool {
    subsets.iter().all(|subset| {
        subset.red <= predicate.red
            && subset.green <= predicate.green
            && subset.blue <= predicate.blue
    })
}
