//! Per-subset aggregation of reveal statements

use crate::grammar::{CubeColor, GameStatement};
use crate::log_error;
use crate::logging::codes;
use serde::{Deserialize, Serialize};

/// Total cubes of each color shown in one subset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CubeSet {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl CubeSet {
    /// Add an amount to one color's total
    ///
    /// Repeated reveals of the same color within a subset accumulate.
    /// Totals saturate at u32::MAX rather than wrapping.
    pub fn add(&mut self, color: CubeColor, amount: u32) {
        let slot = match color {
            CubeColor::Red => &mut self.red,
            CubeColor::Green => &mut self.green,
            CubeColor::Blue => &mut self.blue,
        };

        match slot.checked_add(amount) {
            Some(total) => *slot = total,
            None => {
                log_error!(
                    codes::evaluation::AMOUNT_OVERFLOW,
                    "Cube amount total overflowed, clamping",
                    "color" => color,
                    "amount" => amount
                );
                *slot = u32::MAX;
            }
        }
    }

    /// Get the total for one color
    pub fn get(&self, color: CubeColor) -> u32 {
        match color {
            CubeColor::Red => self.red,
            CubeColor::Green => self.green,
            CubeColor::Blue => self.blue,
        }
    }
}

/// Aggregated view of one parsed game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub game_id: u32,
    pub subsets: Vec<CubeSet>,
}

/// Aggregate each subset's reveals into color totals
pub fn aggregate_game(statement: &GameStatement) -> GameSummary {
    let subsets = statement
        .subsets
        .iter()
        .map(|subset| {
            let mut totals = CubeSet::default();
            for reveal in &subset.reveals {
                totals.add(reveal.color, reveal.amount);
            }
            totals
        })
        .collect();

    GameSummary {
        game_id: statement.game_id,
        subsets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{RevealStatement, SubsetStatement};

    fn game(game_id: u32, subsets: Vec<Vec<(CubeColor, u32)>>) -> GameStatement {
        GameStatement {
            game_id,
            subsets: subsets
                .into_iter()
                .map(|reveals| SubsetStatement {
                    reveals: reveals
                        .into_iter()
                        .map(|(color, amount)| RevealStatement { color, amount })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_aggregate_single_subset() {
        let statement = game(1, vec![vec![(CubeColor::Blue, 3), (CubeColor::Red, 4)]]);
        let summary = aggregate_game(&statement);

        assert_eq!(summary.game_id, 1);
        assert_eq!(
            summary.subsets,
            vec![CubeSet {
                red: 4,
                green: 0,
                blue: 3,
            }]
        );
    }

    #[test]
    fn test_repeated_color_accumulates() {
        let statement = game(7, vec![vec![(CubeColor::Red, 2), (CubeColor::Red, 3)]]);
        let summary = aggregate_game(&statement);

        assert_eq!(summary.subsets[0].red, 5);
    }

    #[test]
    fn test_subsets_stay_separate() {
        let statement = game(
            2,
            vec![
                vec![(CubeColor::Green, 1)],
                vec![(CubeColor::Green, 4), (CubeColor::Blue, 2)],
            ],
        );
        let summary = aggregate_game(&statement);

        assert_eq!(summary.subsets.len(), 2);
        assert_eq!(summary.subsets[0].green, 1);
        assert_eq!(summary.subsets[1].green, 4);
        assert_eq!(summary.subsets[1].blue, 2);
    }

    #[test]
    fn test_add_saturates_instead_of_wrapping() {
        let mut set = CubeSet::default();
        set.add(CubeColor::Red, u32::MAX);
        set.add(CubeColor::Red, 1);

        assert_eq!(set.red, u32::MAX);
    }

    #[test]
    fn test_cube_set_get() {
        let mut set = CubeSet::default();
        set.add(CubeColor::Blue, 6);

        assert_eq!(set.get(CubeColor::Blue), 6);
        assert_eq!(set.get(CubeColor::Red), 0);
    }
}
