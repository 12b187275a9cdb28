//! Global logging module for record processing
//!
//! Provides thread-safe global logging with line-aware run processing,
//! cargo-style error reporting, and a clean macro interface.

pub mod codes;
pub mod collector;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use collector::{ErrorCollector, LineContext, RunSummary};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();
static GLOBAL_ERROR_COLLECTOR: OnceLock<Arc<ErrorCollector>> = OnceLock::new();

thread_local! {
    static LINE_CONTEXT: RefCell<Option<LineContext>> = RefCell::new(None);
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());
    let error_collector = Arc::new(ErrorCollector::new());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    GLOBAL_ERROR_COLLECTOR
        .set(error_collector)
        .map_err(|_| "Global error collector already initialized")?;

    // Validate error code system
    let test_codes = ["ERR001", "E005", "E020", "E040"];
    for &code in &test_codes {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    let event = events::LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );
    logging_service.log_event(event);

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    let error_collector = Arc::new(ErrorCollector::new());

    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    GLOBAL_ERROR_COLLECTOR
        .set(error_collector)
        .map_err(|_| "Global error collector already initialized")?;

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some() && GLOBAL_ERROR_COLLECTOR.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Safe access to global error collector
pub fn try_get_global_error_collector() -> Option<&'static ErrorCollector> {
    GLOBAL_ERROR_COLLECTOR
        .get()
        .map(|collector| collector.as_ref())
}

// ============================================================================
// LINE CONTEXT MANAGEMENT
// ============================================================================

/// Set line context for current thread
pub fn set_line_context(line_number: u32) {
    let context = LineContext::new(line_number);

    LINE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(context);
    });
}

/// Clear line context for current thread
pub fn clear_line_context() {
    LINE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with line context
pub fn with_line_context<F, R>(line_number: u32, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_line_context(line_number);
    let result = f();
    clear_line_context();
    result
}

/// Get current line context (used by macros)
pub fn get_current_line_context() -> Option<LineContext> {
    LINE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    span: Option<crate::utils::Span>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);

    if let Some(s) = span {
        event = event.with_span(s);
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(line_ctx) = get_current_line_context() {
        event = event.with_line_number(line_ctx.line_number);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event.clone());
    }

    if let Some(line_ctx) = get_current_line_context() {
        if let Some(collector) = try_get_global_error_collector() {
            collector.record_event(line_ctx.line_number, event);
        }
    }
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::success(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(line_ctx) = get_current_line_context() {
        event = event.with_line_number(line_ctx.line_number);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::info(message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(line_ctx) = get_current_line_context() {
        event = event.with_line_number(line_ctx.line_number);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

// ============================================================================
// RUN REPORTING
// ============================================================================

/// Get run summary from the global collector
pub fn get_run_summary() -> RunSummary {
    try_get_global_error_collector()
        .map(|collector| collector.get_summary())
        .unwrap_or_default()
}

/// Get errors for a specific record line
pub fn get_line_errors(line_number: u32) -> Vec<LogEvent> {
    try_get_global_error_collector()
        .map(|collector| collector.get_line_errors(line_number))
        .unwrap_or_default()
}

/// Print cargo-style summary
pub fn print_cargo_style_summary() {
    if let Some(collector) = try_get_global_error_collector() {
        println!("{}", collector::format_cargo_style_errors(collector));
    } else {
        println!("No error collector available for summary");
    }
}

/// Clear all collected errors
pub fn clear_error_collection() {
    if let Some(collector) = try_get_global_error_collector() {
        collector.clear();
    }
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        let event = LogEvent::error(code, message);
        logger.log_event(event);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Safe critical error logging
pub fn safe_log_critical(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        let event = LogEvent::error(code, message);
        logger.log_event(event);
    }
    // Always log critical errors to stderr regardless
    eprintln!("CRITICAL ERROR [{}]: {}", code.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_context_management() {
        assert!(get_current_line_context().is_none());

        set_line_context(7);
        let context = get_current_line_context();
        assert!(context.is_some());
        assert_eq!(context.unwrap().line_number, 7);

        clear_line_context();
        assert!(get_current_line_context().is_none());
    }

    #[test]
    fn test_with_line_context() {
        let result = with_line_context(3, || {
            let context = get_current_line_context();
            assert!(context.is_some());
            assert_eq!(context.unwrap().line_number, 3);
            42
        });

        assert_eq!(result, 42);
        assert!(get_current_line_context().is_none());
    }

    #[test]
    fn test_safe_logging() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
        safe_log_critical(codes::system::INTERNAL_ERROR, "Test critical error");
        // Should not panic even if global logging is not initialized
    }

    #[test]
    fn test_run_summary_without_collector() {
        // Falls back to an empty default summary when uninitialized
        let summary = get_run_summary();
        assert!(summary.total_errors == 0 || summary.total_lines > 0);
    }
}
