//! Record input loading with size limits

use crate::config::compile_time::input::*;
use crate::logging::codes;
use crate::{log_error, log_info};
use std::io::BufRead;
use std::path::Path;

/// Errors produced while reading record input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read record input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line_number} is {length} bytes, exceeding limit (max {MAX_LINE_LENGTH})")]
    LineTooLong { line_number: u32, length: usize },

    #[error("Input contains {count} lines, exceeding limit (max {MAX_LINE_COUNT})")]
    TooManyLines { count: usize },
}

impl InputError {
    /// Get the error code for this error
    pub fn error_code(&self) -> codes::Code {
        match self {
            InputError::Io(error) if error.kind() == std::io::ErrorKind::NotFound => {
                codes::input::FILE_NOT_FOUND
            }
            InputError::Io(_) => codes::input::IO_ERROR,
            InputError::LineTooLong { .. } => codes::input::LINE_TOO_LONG,
            InputError::TooManyLines { .. } => codes::input::TOO_MANY_LINES,
        }
    }
}

/// Read record lines from a file
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, InputError> {
    let file = std::fs::File::open(&path).map_err(|error| {
        let input_error = InputError::Io(error);
        log_error!(
            input_error.error_code(),
            &input_error.to_string(),
            "path" => path.as_ref().display()
        );
        input_error
    })?;

    read_lines_from(std::io::BufReader::new(file))
}

/// Read record lines from any buffered reader
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index as u32 + 1;

        if line.len() > MAX_LINE_LENGTH {
            let error = InputError::LineTooLong {
                line_number,
                length: line.len(),
            };
            log_error!(error.error_code(), &error.to_string());
            return Err(error);
        }

        lines.push(line);

        if lines.len() > MAX_LINE_COUNT {
            let error = InputError::TooManyLines { count: lines.len() };
            log_error!(error.error_code(), &error.to_string());
            return Err(error);
        }
    }

    log_info!("Loaded record input", "lines" => lines.len());
    Ok(lines)
}
