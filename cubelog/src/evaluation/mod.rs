//! Evaluation of parsed game statements
//!
//! Turns reveal statements into per-subset totals, checks them against a
//! cube predicate, and computes the power of the minimal viable bag.

pub mod aggregate;
pub mod power;
pub mod threshold;

pub use aggregate::{aggregate_game, CubeSet, GameSummary};
pub use power::calculate_power;
pub use threshold::{is_valid_game, CubePredicate};
