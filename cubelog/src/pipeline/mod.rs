//! Processing pipeline from record text to run totals
//!
//! Each line flows through lexing, parsing, aggregation, validity checking,
//! and power calculation. The run either stops at the first failing line or
//! skips it, depending on the keep-going option.

pub mod error;
pub mod result;

pub use error::{pipeline_error, PipelineError};
pub use result::{GameOutcome, RunReport};

use crate::config::runtime::RunPreferences;
use crate::evaluation::{aggregate_game, calculate_power, is_valid_game, CubePredicate};
use crate::lexical::Lexer;
use crate::logging::{self, codes};
use crate::syntax::Parser;
use crate::{log_debug, log_success};

/// Options controlling a run
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub predicate: CubePredicate,
    pub keep_going: bool,
    pub log_line_success: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        let prefs = RunPreferences::default();
        Self {
            predicate: CubePredicate::default(),
            keep_going: prefs.keep_going,
            log_line_success: prefs.log_line_success,
        }
    }
}

/// Process one record line into a game outcome
pub fn process_line(
    line: &str,
    line_number: u32,
    options: &RunOptions,
) -> Result<GameOutcome, PipelineError> {
    logging::with_line_context(line_number, || {
        log_debug!("Processing record line", "length" => line.len());

        let lexer = Lexer::with_line(line, line_number);
        let mut parser = Parser::new(lexer)?;

        let mut statements = parser.parse_record()?;
        let token_count = parser.metrics().total_tokens;

        // The grammar admits exactly one game per line
        let statement = match statements.pop() {
            Some(statement) => statement,
            None => return Err(pipeline_error("record produced no statements")),
        };

        let summary = aggregate_game(&statement);
        let valid = is_valid_game(&summary.subsets, &options.predicate);
        let power = calculate_power(&summary.subsets);

        let outcome = GameOutcome {
            summary,
            valid,
            power,
            token_count,
        };

        if options.log_line_success {
            log_success!(
                codes::success::LINE_EVALUATION_COMPLETE,
                "Line evaluated",
                "game_id" => outcome.summary.game_id,
                "valid" => outcome.valid,
                "power" => outcome.power
            );
        }

        Ok(outcome)
    })
}

/// Process every line and accumulate the run totals
///
/// In strict mode the first failing line aborts the run. With keep_going
/// set, recoverable failures are counted and skipped; errors that require
/// halting still abort.
pub fn run_lines(lines: &[String], options: &RunOptions) -> Result<RunReport, PipelineError> {
    let mut report = RunReport::default();

    for (index, line) in lines.iter().enumerate() {
        let line_number = index as u32 + 1;

        match process_line(line, line_number, options) {
            Ok(outcome) => {
                report.games_processed += 1;
                if outcome.valid {
                    report.valid_id_sum = report
                        .valid_id_sum
                        .saturating_add(outcome.summary.game_id as u64);
                }
                // Powers are already clamped, so the run total saturates too
                report.power_sum = report.power_sum.saturating_add(outcome.power);
            }
            Err(error) => {
                if !options.keep_going || error.requires_halt() {
                    return Err(error);
                }
                report.lines_failed += 1;
            }
        }
    }

    log_success!(
        codes::success::RUN_COMPLETED_SUCCESSFULLY,
        "Run completed",
        "games" => report.games_processed,
        "failed_lines" => report.lines_failed,
        "valid_id_sum" => report.valid_id_sum,
        "power_sum" => report.power_sum
    );

    Ok(report)
}
