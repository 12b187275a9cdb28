//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.
//! This module combines code constants with their behavioral metadata in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Input handling error codes
pub mod input {
    use super::Code;

    pub const FILE_NOT_FOUND: Code = Code::new("E005");
    pub const IO_ERROR: Code = Code::new("E006");
    pub const LINE_TOO_LONG: Code = Code::new("E007");
    pub const TOO_MANY_LINES: Code = Code::new("E008");
    pub const CONFIG_ERROR: Code = Code::new("E009");
}

/// Lexical analysis error codes
pub mod lexical {
    use super::Code;

    pub const INVALID_CHARACTER: Code = Code::new("E020");
    pub const UNKNOWN_IDENTIFIER: Code = Code::new("E021");
    pub const IDENTIFIER_TOO_LONG: Code = Code::new("E022");
    pub const TOO_MANY_TOKENS: Code = Code::new("E023");
}

/// Syntax analysis error codes
pub mod syntax {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E040");
    pub const UNEXPECTED_STATEMENT: Code = Code::new("E041");
    pub const INVALID_INTEGER: Code = Code::new("E042");
    pub const EMPTY_RECORD: Code = Code::new("E043");
}

/// Evaluation error codes
pub mod evaluation {
    use super::Code;

    pub const AMOUNT_OVERFLOW: Code = Code::new("E060");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const RUN_COMPLETED_SUCCESSFULLY: Code = Code::new("I002");
    pub const LINE_EVALUATION_COMPLETE: Code = Code::new("I060");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "File a bug report with the failing input",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check logging configuration and environment variables",
            ),
        );

        // Input errors
        registry.insert(
            "E005",
            ErrorMetadata::new(
                "E005",
                "Input",
                Severity::Medium,
                false,
                true,
                "Record file not found at specified path",
                "Check file path and ensure file exists",
            ),
        );
        registry.insert(
            "E006",
            ErrorMetadata::new(
                "E006",
                "Input",
                Severity::Medium,
                false,
                true,
                "I/O error while reading record input",
                "Check disk space, permissions, and file system integrity",
            ),
        );
        registry.insert(
            "E007",
            ErrorMetadata::new(
                "E007",
                "Input",
                Severity::Medium,
                false,
                true,
                "Record line exceeds maximum allowed length",
                "Split the record or increase input limits",
            ),
        );
        registry.insert(
            "E008",
            ErrorMetadata::new(
                "E008",
                "Input",
                Severity::Medium,
                false,
                true,
                "Record file contains too many lines",
                "Reduce record count or increase input limits",
            ),
        );
        registry.insert(
            "E009",
            ErrorMetadata::new(
                "E009",
                "Input",
                Severity::Medium,
                false,
                true,
                "Run configuration file could not be loaded",
                "Check TOML syntax and threshold field types",
            ),
        );

        // Lexical analysis errors
        registry.insert(
            "E020",
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Invalid character found in record line",
                "Remove characters outside the record alphabet",
            ),
        );
        registry.insert(
            "E021",
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::Medium,
                true,
                false,
                "Word is not a recognized keyword or color",
                "Use 'Game' or one of the colors red, green, blue",
            ),
        );
        registry.insert(
            "E022",
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Identifier exceeds maximum allowed length",
                "Reduce identifier length to 255 characters or less",
            ),
        );
        registry.insert(
            "E023",
            ErrorMetadata::new(
                "E023",
                "Lexical",
                Severity::High,
                false,
                true,
                "Line contains too many tokens",
                "Reduce line complexity or increase token limits",
            ),
        );

        // Syntax analysis errors
        registry.insert(
            "E040",
            ErrorMetadata::new(
                "E040",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Unexpected token during parsing",
                "Check record structure against the expected grammar",
            ),
        );
        registry.insert(
            "E041",
            ErrorMetadata::new(
                "E041",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Record does not begin with a game statement",
                "Start each record line with 'Game <id>:'",
            ),
        );
        registry.insert(
            "E042",
            ErrorMetadata::new(
                "E042",
                "Syntax",
                Severity::Low,
                true,
                false,
                "Integer literal could not be parsed",
                "Use decimal integers within the supported range",
            ),
        );
        registry.insert(
            "E043",
            ErrorMetadata::new(
                "E043",
                "Syntax",
                Severity::Medium,
                true,
                false,
                "Record line contains no statements",
                "Provide at least one game statement per line",
            ),
        );

        // Evaluation errors
        registry.insert(
            "E060",
            ErrorMetadata::new(
                "E060",
                "Evaluation",
                Severity::Medium,
                true,
                false,
                "Cube amount arithmetic overflowed",
                "Check record amounts for unreasonably large values",
            ),
        );

        // Success codes carried in the registry for summary reporting
        registry.insert(
            "I001",
            ErrorMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I002",
            ErrorMetadata::new(
                "I002",
                "System",
                Severity::Low,
                true,
                false,
                "Record run completed successfully",
                "Review run totals",
            ),
        );
        registry.insert(
            "I060",
            ErrorMetadata::new(
                "I060",
                "Evaluation",
                Severity::Low,
                true,
                false,
                "Line evaluation completed successfully",
                "Continue to next record line",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_constant_has_metadata() {
        let codes = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            input::FILE_NOT_FOUND,
            input::IO_ERROR,
            input::LINE_TOO_LONG,
            input::TOO_MANY_LINES,
            input::CONFIG_ERROR,
            lexical::INVALID_CHARACTER,
            lexical::UNKNOWN_IDENTIFIER,
            lexical::IDENTIFIER_TOO_LONG,
            lexical::TOO_MANY_TOKENS,
            syntax::UNEXPECTED_TOKEN,
            syntax::UNEXPECTED_STATEMENT,
            syntax::INVALID_INTEGER,
            syntax::EMPTY_RECORD,
            evaluation::AMOUNT_OVERFLOW,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::RUN_COMPLETED_SUCCESSFULLY,
            success::LINE_EVALUATION_COMPLETE,
        ];

        for code in codes {
            assert!(
                get_error_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_severity_classification() {
        assert_eq!(get_severity("ERR001"), Severity::Critical);
        assert_eq!(get_severity("E023"), Severity::High);
        assert_eq!(get_severity("E040"), Severity::Medium);
        assert_eq!(get_severity("unknown"), Severity::Medium);
    }

    #[test]
    fn test_halt_and_recovery_classification() {
        assert!(requires_halt("E023"));
        assert!(!requires_halt("E040"));
        assert!(is_recoverable("E040"));
        assert!(!is_recoverable("E005"));
    }

    #[test]
    fn test_severity_round_trip() {
        for severity in [
            Severity::Critical,
            Severity::High,
            Severity::Medium,
            Severity::Low,
        ] {
            assert_eq!(Severity::from_str(severity.as_str()), Some(severity));
        }
    }
}
