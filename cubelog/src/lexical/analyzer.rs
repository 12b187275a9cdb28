//! Character-level lexer for cube game record lines
//!
//! Converts one record line into a stream of spanned tokens. The lexer is
//! line-oriented: once the input is exhausted it yields EndOfLine forever,
//! which lets the parser keep a two-token lookahead without special cases.

use crate::config::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::tokens::{classify_word, Token, TokenClass};
use crate::utils::{Position, Span, Spanned};
use crate::{log_debug, log_error};

// ============================================================================
// LEXER ERRORS
// ============================================================================

/// Errors produced during lexical analysis
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexerError {
    #[error("Invalid character '{character}' at {line}:{column}")]
    UnknownChar {
        character: char,
        line: u32,
        column: u32,
    },

    #[error("Unknown identifier '{word}'")]
    UnknownIdentifier { word: String, span: Span },

    #[error("Identifier of length {length} exceeds maximum (max {MAX_IDENTIFIER_LENGTH})")]
    IdentifierTooLong { length: usize, span: Span },

    #[error("Line produced {count} tokens, exceeding limit (max {MAX_TOKENS_PER_LINE})")]
    TooManyTokens { count: usize },
}

impl LexerError {
    /// Get the error code for this error
    pub fn error_code(&self) -> codes::Code {
        match self {
            LexerError::UnknownChar { .. } => codes::lexical::INVALID_CHARACTER,
            LexerError::UnknownIdentifier { .. } => codes::lexical::UNKNOWN_IDENTIFIER,
            LexerError::IdentifierTooLong { .. } => codes::lexical::IDENTIFIER_TOO_LONG,
            LexerError::TooManyTokens { .. } => codes::lexical::TOO_MANY_TOKENS,
        }
    }

    /// Get the source span, when one is available
    pub fn span(&self) -> Option<Span> {
        match self {
            LexerError::UnknownChar { line, column, .. } => Some(Span::single(Position::new(
                (*column as usize).saturating_sub(1),
                *line,
                *column,
            ))),
            LexerError::UnknownIdentifier { span, .. } => Some(*span),
            LexerError::IdentifierTooLong { span, .. } => Some(*span),
            LexerError::TooManyTokens { .. } => None,
        }
    }
}

// ============================================================================
// LEXICAL METRICS
// ============================================================================

/// Token statistics gathered during lexing
#[derive(Debug, Clone, Default)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub marker_tokens: usize,
    pub color_tokens: usize,
    pub integer_tokens: usize,
    pub punctuation_tokens: usize,
    pub max_identifier_length: usize,
}

impl LexicalMetrics {
    fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.token_class() {
            TokenClass::Marker => self.marker_tokens += 1,
            TokenClass::Color => self.color_tokens += 1,
            TokenClass::Literal => self.integer_tokens += 1,
            TokenClass::Punctuation => self.punctuation_tokens += 1,
            TokenClass::Terminator => {}
        }
    }
}

// ============================================================================
// LEXER
// ============================================================================

/// Lexer over a single record line
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    read_position: usize,
    ch: Option<char>,
    line: u32,
    tokens_produced: usize,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl Lexer {
    /// Create a lexer for a line, reported as line 1
    pub fn new(input: &str) -> Self {
        Self::with_line(input, 1)
    }

    /// Create a lexer for a line at a specific line number
    pub fn with_line(input: &str, line: u32) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: None,
            line,
            tokens_produced: 0,
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        };
        lexer.read_char();
        lexer
    }

    /// Create a lexer with explicit preferences
    pub fn with_preferences(input: &str, line: u32, preferences: LexicalPreferences) -> Self {
        let mut lexer = Self::with_line(input, line);
        lexer.preferences = preferences;
        lexer
    }

    /// Metrics gathered so far
    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    fn read_char(&mut self) {
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn current_position(&self) -> Position {
        Position::new(self.position, self.line, self.position as u32 + 1)
    }

    fn skip_spaces(&mut self) {
        while self.ch == Some(' ') {
            self.read_char();
        }
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while matches!(self.ch, Some(c) if c.is_ascii_digit()) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while matches!(self.ch, Some(c) if c.is_ascii_alphabetic()) {
            self.read_char();
        }
        self.input[start..self.position].iter().collect()
    }

    /// Produce the next token from the line
    ///
    /// After the line is exhausted, this returns EndOfLine on every call.
    pub fn next_token(&mut self) -> Result<Spanned<Token>, LexerError> {
        self.skip_spaces();

        let start = self.current_position();

        let token = match self.ch {
            None => {
                // EndOfLine repeats forever and does not count toward limits
                return Ok(Spanned::new(Token::EndOfLine, Span::new(start, start)));
            }
            Some(':') => {
                self.read_char();
                Token::Colon
            }
            Some(';') => {
                self.read_char();
                Token::Semicolon
            }
            Some(',') => {
                self.read_char();
                Token::Comma
            }
            Some(c) if c.is_ascii_digit() => Token::Int(self.read_number()),
            Some(c) if c.is_ascii_alphabetic() => {
                let word = self.read_identifier();
                let span = Span::new(start, self.current_position());

                if word.len() > MAX_IDENTIFIER_LENGTH {
                    let error = LexerError::IdentifierTooLong {
                        length: word.len(),
                        span,
                    };
                    log_error!(error.error_code(), &error.to_string(), span = span);
                    return Err(error);
                }

                self.metrics.max_identifier_length =
                    self.metrics.max_identifier_length.max(word.len());

                match classify_word(&word) {
                    Some(token) => token,
                    None => {
                        let error = LexerError::UnknownIdentifier { word, span };
                        if self.preferences.include_position_in_errors {
                            log_error!(error.error_code(), &error.to_string(), span = span);
                        } else {
                            log_error!(error.error_code(), &error.to_string());
                        }
                        return Err(error);
                    }
                }
            }
            Some(c) => {
                let error = LexerError::UnknownChar {
                    character: c,
                    line: self.line,
                    column: start.column,
                };
                log_error!(error.error_code(), &error.to_string(),
                    "character" => c,
                    "column" => start.column
                );
                return Err(error);
            }
        };

        self.tokens_produced += 1;
        if self.tokens_produced > MAX_TOKENS_PER_LINE {
            let error = LexerError::TooManyTokens {
                count: self.tokens_produced,
            };
            log_error!(error.error_code(), &error.to_string());
            return Err(error);
        }

        self.metrics.record_token(&token, &self.preferences);

        let span = Span::new(start, self.current_position());
        log_debug!("Produced token", "token" => token.as_source_string(), "span" => span);

        Ok(Spanned::new(token, span))
    }

    /// Tokenize the whole line, including the trailing EndOfLine
    pub fn tokenize(&mut self) -> Result<Vec<Spanned<Token>>, LexerError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.value.is_end_of_line();
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::CubeColor;
    use assert_matches::assert_matches;

    fn token_values(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.value)
            .collect()
    }

    #[test]
    fn test_simple_record_token_sequence() {
        let tokens = token_values("Game 1: 3 blue, 4 red");
        assert_eq!(
            tokens,
            vec![
                Token::Game,
                Token::Int("1".to_string()),
                Token::Colon,
                Token::Int("3".to_string()),
                Token::Blue,
                Token::Comma,
                Token::Int("4".to_string()),
                Token::Red,
                Token::EndOfLine,
            ]
        );
    }

    #[test]
    fn test_multi_subset_record() {
        let tokens = token_values("Game 2: 1 green; 2 red");
        assert_eq!(
            tokens,
            vec![
                Token::Game,
                Token::Int("2".to_string()),
                Token::Colon,
                Token::Int("1".to_string()),
                Token::Green,
                Token::Semicolon,
                Token::Int("2".to_string()),
                Token::Red,
                Token::EndOfLine,
            ]
        );
    }

    #[test]
    fn test_end_of_line_repeats() {
        let mut lexer = Lexer::new("");
        for _ in 0..5 {
            let token = lexer.next_token().unwrap();
            assert!(token.value.is_end_of_line());
        }
    }

    #[test]
    fn test_unknown_identifier() {
        let mut lexer = Lexer::new("3 purple");
        assert_matches!(lexer.next_token(), Ok(t) if t.value.is_int());

        let error = lexer.next_token().unwrap_err();
        assert_matches!(error, LexerError::UnknownIdentifier { ref word, .. } if word == "purple");
        assert_eq!(error.error_code().as_str(), "E021");
    }

    #[test]
    fn test_unknown_character() {
        let mut lexer = Lexer::new("Game 1! 3 blue");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();

        let error = lexer.next_token().unwrap_err();
        assert_matches!(
            error,
            LexerError::UnknownChar {
                character: '!',
                line: 1,
                column: 7,
            }
        );
    }

    #[test]
    fn test_keywords_are_case_sensitive() {
        let mut lexer = Lexer::new("game");
        let error = lexer.next_token().unwrap_err();
        assert_matches!(error, LexerError::UnknownIdentifier { ref word, .. } if word == "game");
    }

    #[test]
    fn test_spans_track_columns() {
        let mut lexer = Lexer::new("Game 12:");
        let game = lexer.next_token().unwrap();
        assert_eq!(game.span.start.column, 1);
        assert_eq!(game.span.end.column, 5);

        let id = lexer.next_token().unwrap();
        assert_eq!(id.value, Token::Int("12".to_string()));
        assert_eq!(id.span.start.column, 6);
        assert_eq!(id.span.end.column, 8);
    }

    #[test]
    fn test_line_number_propagates_to_spans() {
        let mut lexer = Lexer::with_line("Game 1:", 42);
        let token = lexer.next_token().unwrap();
        assert_eq!(token.span.start.line, 42);
    }

    #[test]
    fn test_identifier_too_long() {
        let long_word = "a".repeat(MAX_IDENTIFIER_LENGTH + 1);
        let mut lexer = Lexer::new(&long_word);

        let error = lexer.next_token().unwrap_err();
        assert_matches!(
            error,
            LexerError::IdentifierTooLong { length, .. } if length == MAX_IDENTIFIER_LENGTH + 1
        );
    }

    #[test]
    fn test_metrics_collection() {
        let preferences = LexicalPreferences {
            collect_detailed_metrics: true,
            ..Default::default()
        };
        let mut lexer = Lexer::with_preferences("Game 1: 3 blue, 4 red", 1, preferences);
        lexer.tokenize().unwrap();

        let metrics = lexer.metrics();
        assert_eq!(metrics.total_tokens, 8);
        assert_eq!(metrics.marker_tokens, 1);
        assert_eq!(metrics.color_tokens, 2);
        assert_eq!(metrics.integer_tokens, 3);
        assert_eq!(metrics.punctuation_tokens, 2);
    }

    #[test]
    fn test_color_tokens_map_to_colors() {
        let tokens = token_values("1 red, 2 green, 3 blue");
        let colors: Vec<CubeColor> = tokens.iter().filter_map(|t| t.color()).collect();
        assert_eq!(
            colors,
            vec![CubeColor::Red, CubeColor::Green, CubeColor::Blue]
        );
    }
}
