//! Pipeline error type covering all processing stages

use crate::config::SettingsError;
use crate::input::InputError;
use crate::logging::codes;
use crate::syntax::SyntaxError;

/// Error from any stage of the processing pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("Configuration error: {0}")]
    Config(#[from] SettingsError),

    #[error("Pipeline error: {message}")]
    Pipeline { message: String },
}

impl PipelineError {
    /// Get the error code for this error
    pub fn error_code(&self) -> codes::Code {
        match self {
            PipelineError::Input(error) => error.error_code(),
            PipelineError::Syntax(error) => error.error_code(),
            PipelineError::Config(_) => codes::input::CONFIG_ERROR,
            PipelineError::Pipeline { .. } => codes::system::INTERNAL_ERROR,
        }
    }

    /// Check if this error requires halting even in keep-going mode
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }
}

/// Create a general pipeline error
pub fn pipeline_error(message: impl Into<String>) -> PipelineError {
    PipelineError::Pipeline {
        message: message.into(),
    }
}
