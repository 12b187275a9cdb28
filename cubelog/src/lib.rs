// Internal modules
pub mod config;
pub mod evaluation;
pub mod grammar;
pub mod input;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod pipeline;
pub mod syntax;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use evaluation::{CubePredicate, CubeSet, GameSummary};
pub use pipeline::{GameOutcome, PipelineError, RunOptions, RunReport};
