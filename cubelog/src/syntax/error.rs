//! Parser error types and helpers

use crate::lexical::LexerError;
use crate::logging::codes;
use crate::utils::Span;

/// Result type for syntax analysis
pub type SyntaxResult<T> = Result<T, SyntaxError>;

/// Errors produced during parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("Expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("Expected game statement, found {found}")]
    UnexpectedStatement { found: String, span: Span },

    #[error("Invalid integer literal '{literal}'")]
    InvalidInteger { literal: String, span: Span },

    #[error("Record line contains no statements")]
    EmptyRecord,

    #[error(transparent)]
    Lexical(#[from] LexerError),
}

impl SyntaxError {
    /// Get the error code for this error
    pub fn error_code(&self) -> codes::Code {
        match self {
            SyntaxError::UnexpectedToken { .. } => codes::syntax::UNEXPECTED_TOKEN,
            SyntaxError::UnexpectedStatement { .. } => codes::syntax::UNEXPECTED_STATEMENT,
            SyntaxError::InvalidInteger { .. } => codes::syntax::INVALID_INTEGER,
            SyntaxError::EmptyRecord => codes::syntax::EMPTY_RECORD,
            SyntaxError::Lexical(error) => error.error_code(),
        }
    }

    /// Get the source span, when one is available
    pub fn span(&self) -> Option<Span> {
        match self {
            SyntaxError::UnexpectedToken { span, .. } => Some(*span),
            SyntaxError::UnexpectedStatement { span, .. } => Some(*span),
            SyntaxError::InvalidInteger { span, .. } => Some(*span),
            SyntaxError::EmptyRecord => None,
            SyntaxError::Lexical(error) => error.span(),
        }
    }

    /// Check if this error requires halting the run
    pub fn requires_halt(&self) -> bool {
        codes::requires_halt(self.error_code().as_str())
    }

    /// Check if this error is recoverable in keep-going mode
    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

/// Create an unexpected token error
pub fn unexpected_token(
    expected: impl Into<String>,
    found: impl Into<String>,
    span: Span,
) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        expected: expected.into(),
        found: found.into(),
        span,
    }
}

/// Create an unexpected statement error
pub fn unexpected_statement(found: impl Into<String>, span: Span) -> SyntaxError {
    SyntaxError::UnexpectedStatement {
        found: found.into(),
        span,
    }
}

/// Create an invalid integer error
pub fn invalid_integer(literal: impl Into<String>, span: Span) -> SyntaxError {
    SyntaxError::InvalidInteger {
        literal: literal.into(),
        span,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let error = unexpected_token("':'", "';'", Span::dummy());
        assert_eq!(error.error_code().as_str(), "E040");

        let error = unexpected_statement("integer", Span::dummy());
        assert_eq!(error.error_code().as_str(), "E041");

        assert_eq!(SyntaxError::EmptyRecord.error_code().as_str(), "E043");
    }

    #[test]
    fn test_lexical_error_passthrough() {
        let lexer_error = LexerError::UnknownChar {
            character: '?',
            line: 1,
            column: 3,
        };
        let error: SyntaxError = lexer_error.into();

        assert_eq!(error.error_code().as_str(), "E020");
        assert!(error.span().is_some());
    }

    #[test]
    fn test_error_display() {
        let error = unexpected_token("color", "'17'", Span::dummy());
        assert_eq!(error.to_string(), "Expected color, found '17'");
    }

    #[test]
    fn test_recoverability() {
        let error = SyntaxError::EmptyRecord;
        assert!(error.is_recoverable());
        assert!(!error.requires_halt());
    }
}
