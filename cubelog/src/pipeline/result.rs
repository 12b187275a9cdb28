//! Result types produced by the pipeline

use crate::evaluation::GameSummary;
use serde::Serialize;

/// Outcome of evaluating one record line
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    pub summary: GameSummary,
    pub valid: bool,
    pub power: u64,
    pub token_count: usize,
}

/// Accumulated totals for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Lines that parsed and evaluated successfully
    pub games_processed: usize,
    /// Lines skipped in keep-going mode
    pub lines_failed: usize,
    /// Sum of game ids whose subsets all fit the predicate
    pub valid_id_sum: u64,
    /// Sum of minimal-bag powers across all processed games
    pub power_sum: u64,
}

impl RunReport {
    /// Check whether any lines were skipped
    pub fn has_failures(&self) -> bool {
        self.lines_failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_report_is_empty() {
        let report = RunReport::default();
        assert_eq!(report.games_processed, 0);
        assert!(!report.has_failures());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = RunReport {
            games_processed: 5,
            lines_failed: 0,
            valid_id_sum: 8,
            power_sum: 2286,
        };

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"valid_id_sum\":8"));
        assert!(json.contains("\"power_sum\":2286"));
    }
}
