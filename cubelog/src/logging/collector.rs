//! Error collector for multi-line record processing with cargo-style output
//!
//! Provides organized error collection and reporting over a whole run

use super::events::LogEvent;
use crate::config::compile_time::logging::*;
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

// ============================================================================
// LINE PROCESSING CONTEXT
// ============================================================================

/// Context information for processing one record line
#[derive(Debug, Clone)]
pub struct LineContext {
    pub line_number: u32,
    pub start_time: Instant,
}

impl LineContext {
    pub fn new(line_number: u32) -> Self {
        Self {
            line_number,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

// ============================================================================
// RUN SUMMARY
// ============================================================================

/// Summary of a whole-run processing result
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total_lines: usize,
    pub successful_lines: usize,
    pub failed_lines: usize,
    pub lines_with_warnings: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
    pub total_processing_time: Duration,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            successful_lines: 0,
            failed_lines: 0,
            lines_with_warnings: 0,
            total_errors: 0,
            total_warnings: 0,
            total_processing_time: Duration::new(0, 0),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.total_errors > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.total_warnings > 0
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ERROR COLLECTOR
// ============================================================================

/// Thread-safe error collector keyed by record line number
pub struct ErrorCollector {
    /// Events organized by line number for cargo-style output
    line_events: Mutex<BTreeMap<u32, Vec<LogEvent>>>,

    /// Global processing start time
    processing_start: Instant,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self {
            line_events: Mutex::new(BTreeMap::new()),
            processing_start: Instant::now(),
        }
    }

    /// Record an event for a specific record line
    pub fn record_event(&self, line_number: u32, event: LogEvent) {
        let mut events = self.line_events.lock().unwrap();

        let max_events_per_line = MAX_LOG_EVENTS_PER_LINE;

        let line_events = events.entry(line_number).or_insert_with(Vec::new);

        if line_events.len() < max_events_per_line {
            line_events.push(event);
        } else if line_events.len() == max_events_per_line {
            let summary_event = LogEvent::warning(&format!(
                "Too many events for line (limit: {})",
                max_events_per_line
            ));
            line_events.push(summary_event);
        }
    }

    /// Get all events for a specific line
    pub fn get_line_events(&self, line_number: u32) -> Vec<LogEvent> {
        let events = self.line_events.lock().unwrap();
        events.get(&line_number).cloned().unwrap_or_default()
    }

    /// Get errors for a specific line
    pub fn get_line_errors(&self, line_number: u32) -> Vec<LogEvent> {
        let events = self.line_events.lock().unwrap();
        events
            .get(&line_number)
            .map(|events| events.iter().filter(|e| e.is_error()).cloned().collect())
            .unwrap_or_default()
    }

    /// Get all line events (for cargo-style output)
    pub fn get_all_line_events(&self) -> BTreeMap<u32, Vec<LogEvent>> {
        self.line_events.lock().unwrap().clone()
    }

    /// Get run summary
    pub fn get_summary(&self) -> RunSummary {
        let events = self.line_events.lock().unwrap();

        let mut summary = RunSummary::new();
        summary.total_lines = events.len();
        summary.total_processing_time = self.processing_start.elapsed();

        for line_events in events.values() {
            let has_errors = line_events.iter().any(|e| e.is_error());
            let has_warnings = line_events.iter().any(|e| e.is_warning());

            if has_errors {
                summary.failed_lines += 1;
            } else if has_warnings {
                summary.lines_with_warnings += 1;
            } else {
                summary.successful_lines += 1;
            }

            for event in line_events {
                if event.is_error() {
                    summary.total_errors += 1;
                } else if event.is_warning() {
                    summary.total_warnings += 1;
                }
            }
        }

        summary
    }

    /// Get error count for a specific line
    pub fn get_line_error_count(&self, line_number: u32) -> usize {
        let events = self.line_events.lock().unwrap();
        events
            .get(&line_number)
            .map(|events| events.iter().filter(|e| e.is_error()).count())
            .unwrap_or(0)
    }

    /// Check if a line has any errors
    pub fn line_has_errors(&self, line_number: u32) -> bool {
        self.get_line_error_count(line_number) > 0
    }

    /// Get line numbers with errors
    pub fn get_lines_with_errors(&self) -> Vec<u32> {
        let events = self.line_events.lock().unwrap();
        events
            .iter()
            .filter(|(_, events)| events.iter().any(|e| e.is_error()))
            .map(|(line, _)| *line)
            .collect()
    }

    /// Get critical errors (errors that require halting)
    pub fn get_critical_errors(&self) -> Vec<(u32, LogEvent)> {
        let events = self.line_events.lock().unwrap();
        let mut critical_errors = Vec::new();

        for (line, line_events) in events.iter() {
            for event in line_events {
                if event.is_error() && event.requires_halt() {
                    critical_errors.push((*line, event.clone()));
                }
            }
        }

        critical_errors
    }

    /// Clear all collected data
    pub fn clear(&self) {
        let mut events = self.line_events.lock().unwrap();
        events.clear();
    }

    /// Get total event count across all lines
    pub fn total_event_count(&self) -> usize {
        let events = self.line_events.lock().unwrap();
        events.values().map(|v| v.len()).sum()
    }

    /// Check if collector is near capacity
    pub fn is_near_capacity(&self) -> bool {
        let total_events = self.total_event_count();
        let max_events = LOG_BUFFER_SIZE;
        total_events > (max_events * 80 / 100) // 80% threshold
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CARGO-STYLE FORMATTING
// ============================================================================

/// Format errors in cargo-style output grouped by line number
pub fn format_cargo_style_errors(collector: &ErrorCollector) -> String {
    let mut output = String::new();
    let all_events = collector.get_all_line_events();

    for (line_number, events) in &all_events {
        let error_events: Vec<_> = events.iter().filter(|e| e.is_error()).collect();
        let warning_events: Vec<_> = events.iter().filter(|e| e.is_warning()).collect();

        if !error_events.is_empty() || !warning_events.is_empty() {
            output.push_str(&format!("Checking line {}...\n", line_number));

            for event in error_events {
                let span_info = event
                    .span
                    .as_ref()
                    .map(|s| format!(" --> {}:{}", line_number, s.start().column))
                    .unwrap_or_default();

                output.push_str(&format!(
                    "error[{}]: {}{}\n",
                    event.code.as_str(),
                    event.message,
                    span_info
                ));

                output.push_str(&format!(
                    "  = severity: {}, category: {}\n",
                    event.severity(),
                    event.category()
                ));

                if !event.context.is_empty() {
                    output.push_str("  |\n");
                    for (key, value) in &event.context {
                        if key != "line_number" {
                            output.push_str(&format!("  = {}: {}\n", key, value));
                        }
                    }
                }

                let action = event.recommended_action();
                if action != "No specific action available" {
                    output.push_str(&format!("  = help: {}\n", action));
                }
            }

            for event in warning_events {
                output.push_str(&format!(
                    "warning[{}]: {}\n",
                    event.code.as_str(),
                    event.message
                ));
            }

            output.push('\n');
        }
    }

    let summary = collector.get_summary();

    if summary.total_errors > 0 {
        output.push_str(&format!("\nTotal errors: {}\n", summary.total_errors));
    }
    if summary.total_warnings > 0 {
        output.push_str(&format!("Total warnings: {}\n", summary.total_warnings));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::codes;

    #[test]
    fn test_error_collector_basic() {
        let collector = ErrorCollector::new();

        let event = LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "Test error");
        collector.record_event(3, event);

        let events = collector.get_line_events(3);
        assert_eq!(events.len(), 1);
        assert!(collector.line_has_errors(3));
        assert!(!collector.line_has_errors(4));
    }

    #[test]
    fn test_run_summary() {
        let collector = ErrorCollector::new();

        collector.record_event(
            1,
            LogEvent::error(codes::lexical::INVALID_CHARACTER, "Error"),
        );
        collector.record_event(2, LogEvent::warning("Warning"));

        let summary = collector.get_summary();
        assert_eq!(summary.total_lines, 2);
        assert_eq!(summary.failed_lines, 1);
        assert_eq!(summary.lines_with_warnings, 1);
        assert_eq!(summary.total_errors, 1);
        assert_eq!(summary.total_warnings, 1);
    }

    #[test]
    fn test_critical_errors() {
        let collector = ErrorCollector::new();

        let critical_event = LogEvent::error(codes::system::INTERNAL_ERROR, "Critical error");
        let normal_event = LogEvent::error(codes::lexical::INVALID_CHARACTER, "Normal error");

        collector.record_event(1, critical_event);
        collector.record_event(1, normal_event);

        let critical_errors = collector.get_critical_errors();
        assert_eq!(critical_errors.len(), 1);
        assert_eq!(critical_errors[0].1.code.as_str(), "ERR001");
    }

    #[test]
    fn test_cargo_style_formatting() {
        let collector = ErrorCollector::new();

        collector.record_event(
            5,
            LogEvent::error(codes::syntax::UNEXPECTED_TOKEN, "Expected ':'"),
        );

        let output = format_cargo_style_errors(&collector);
        assert!(output.contains("Checking line 5"));
        assert!(output.contains("error[E040]"));
        assert!(output.contains("Total errors: 1"));
    }

    #[test]
    fn test_event_limit_per_line() {
        let collector = ErrorCollector::new();

        for _ in 0..(MAX_LOG_EVENTS_PER_LINE + 10) {
            collector.record_event(1, LogEvent::warning("Repeated warning"));
        }

        let events = collector.get_line_events(1);
        assert_eq!(events.len(), MAX_LOG_EVENTS_PER_LINE + 1);
    }
}
