//! Recursive descent parser with two-token lookahead
//!
//! Grammar for one record line:
//!
//! ```text
//! record  := game
//! game    := 'Game' INT ':' subsets
//! subsets := subset (';' subset)*
//! subset  := reveal (',' reveal)*
//! reveal  := INT color
//! color   := 'red' | 'green' | 'blue'
//! ```
//!
//! The parser keeps a current and a peek token. Separators are not consumed
//! by the construct they terminate: a subset ends with the semicolon still
//! current, and the next reveal's integer lookup is what consumes it.

use super::error::{invalid_integer, unexpected_statement, unexpected_token, SyntaxResult};
use crate::grammar::{GameStatement, RevealStatement, SubsetStatement};
use crate::lexical::Lexer;
use crate::logging::codes;
use crate::syntax::error::SyntaxError;
use crate::tokens::{Token, TokenKind};
use crate::utils::Spanned;
use crate::{log_debug, log_error};

pub struct Parser {
    lexer: Lexer,
    cur: Spanned<Token>,
    peek: Spanned<Token>,
}

impl Parser {
    /// Create a parser, pulling the first two tokens from the lexer
    pub fn new(mut lexer: Lexer) -> SyntaxResult<Self> {
        let cur = lexer.next_token()?;
        let peek = lexer.next_token()?;
        Ok(Self { lexer, cur, peek })
    }

    /// Token metrics gathered by the underlying lexer
    pub fn metrics(&self) -> &crate::lexical::LexicalMetrics {
        self.lexer.metrics()
    }

    fn advance(&mut self) -> SyntaxResult<()> {
        let next = self.lexer.next_token()?;
        self.cur = std::mem::replace(&mut self.peek, next);
        Ok(())
    }

    fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.value.kind() == kind
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.value.kind() == kind
    }

    /// Advance if the peek token matches, error otherwise
    fn expect_peek(&mut self, kind: TokenKind) -> SyntaxResult<()> {
        if self.peek_is(kind) {
            self.advance()
        } else {
            let error = unexpected_token(
                kind.as_str(),
                format!("'{}'", self.peek.value.as_source_string()),
                self.peek.span,
            );
            log_error!(
                error.error_code(),
                &error.to_string(),
                span = self.peek.span
            );
            Err(error)
        }
    }

    /// Parse a whole record line
    pub fn parse_record(&mut self) -> SyntaxResult<Vec<GameStatement>> {
        let mut statements = Vec::new();

        while !self.cur.value.is_end_of_line() {
            statements.push(self.parse_game_statement()?);
        }

        if statements.is_empty() {
            let error = SyntaxError::EmptyRecord;
            log_error!(error.error_code(), &error.to_string());
            return Err(error);
        }

        log_debug!("Parsed record", "statements" => statements.len());
        Ok(statements)
    }

    fn parse_game_statement(&mut self) -> SyntaxResult<GameStatement> {
        if !self.cur_is(TokenKind::Game) {
            let error = unexpected_statement(
                format!("'{}'", self.cur.value.as_source_string()),
                self.cur.span,
            );
            log_error!(error.error_code(), &error.to_string(), span = self.cur.span);
            return Err(error);
        }

        self.expect_peek(TokenKind::Int)?;
        let game_id = self.parse_int_literal()?;

        self.expect_peek(TokenKind::Colon)?;

        // The colon stays current; the first reveal consumes it
        let subsets = self.parse_subset_statements()?;

        log_debug!("Parsed game statement",
            "game_id" => game_id,
            "subsets" => subsets.len()
        );

        Ok(GameStatement { game_id, subsets })
    }

    fn parse_subset_statements(&mut self) -> SyntaxResult<Vec<SubsetStatement>> {
        let mut subsets = Vec::new();

        while !self.cur.value.is_end_of_line() {
            subsets.push(self.parse_subset_statement()?);
        }

        Ok(subsets)
    }

    fn parse_subset_statement(&mut self) -> SyntaxResult<SubsetStatement> {
        let mut subset = SubsetStatement::default();

        while !self.cur.value.is_end_of_line() {
            let reveal = self.parse_reveal_statement()?;
            subset.reveals.push(reveal);

            // A semicolon ends the subset but stays current; the next
            // subset's first reveal consumes it
            if self.cur_is(TokenKind::Semicolon) {
                break;
            }
        }

        Ok(subset)
    }

    fn parse_reveal_statement(&mut self) -> SyntaxResult<RevealStatement> {
        // Consumes the pending separator (':', ',' or ';')
        self.expect_peek(TokenKind::Int)?;
        let amount = self.parse_int_literal()?;

        if self.peek.value.is_color() {
            self.advance()?;
        }

        let color = match self.cur.value.color() {
            Some(color) => color,
            None => {
                let error = unexpected_token(
                    "color",
                    format!("'{}'", self.cur.value.as_source_string()),
                    self.cur.span,
                );
                log_error!(error.error_code(), &error.to_string(), span = self.cur.span);
                return Err(error);
            }
        };

        // Move past the color onto the separator or end of line
        self.advance()?;

        Ok(RevealStatement { color, amount })
    }

    /// Parse the current token as a u32 integer literal
    fn parse_int_literal(&mut self) -> SyntaxResult<u32> {
        let literal = match self.cur.value.as_int_literal() {
            Some(literal) => literal,
            None => {
                // expect_peek guarantees an Int token here
                let error = unexpected_token(
                    TokenKind::Int.as_str(),
                    format!("'{}'", self.cur.value.as_source_string()),
                    self.cur.span,
                );
                log_error!(codes::system::INTERNAL_ERROR, &error.to_string());
                return Err(error);
            }
        };

        literal.parse::<u32>().map_err(|_| {
            let error = invalid_integer(literal, self.cur.span);
            log_error!(error.error_code(), &error.to_string(), span = self.cur.span);
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::CubeColor;
    use crate::lexical::LexerError;
    use assert_matches::assert_matches;

    fn parse(input: &str) -> SyntaxResult<Vec<GameStatement>> {
        let mut parser = Parser::new(Lexer::new(input))?;
        parser.parse_record()
    }

    fn reveal(color: CubeColor, amount: u32) -> RevealStatement {
        RevealStatement { color, amount }
    }

    #[test]
    fn test_single_subset_record() {
        let statements = parse("Game 1: 3 blue, 4 red").unwrap();

        assert_eq!(statements.len(), 1);
        let game = &statements[0];
        assert_eq!(game.game_id, 1);
        assert_eq!(game.subsets.len(), 1);
        assert_eq!(
            game.subsets[0].reveals,
            vec![reveal(CubeColor::Blue, 3), reveal(CubeColor::Red, 4)]
        );
    }

    #[test]
    fn test_multi_subset_record() {
        let statements = parse("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();

        let game = &statements[0];
        assert_eq!(game.subsets.len(), 3);
        assert_eq!(game.subsets[0].reveals.len(), 2);
        assert_eq!(game.subsets[1].reveals.len(), 3);
        assert_eq!(
            game.subsets[2].reveals,
            vec![reveal(CubeColor::Green, 2)]
        );
    }

    #[test]
    fn test_repeated_color_within_subset() {
        let statements = parse("Game 7: 2 red, 3 red").unwrap();

        let subset = &statements[0].subsets[0];
        assert_eq!(
            subset.reveals,
            vec![reveal(CubeColor::Red, 2), reveal(CubeColor::Red, 3)]
        );
    }

    #[test]
    fn test_large_game_id() {
        let statements = parse("Game 100: 1 blue").unwrap();
        assert_eq!(statements[0].game_id, 100);
    }

    #[test]
    fn test_missing_game_keyword() {
        let error = parse("1: 3 blue").unwrap_err();
        assert_matches!(error, SyntaxError::UnexpectedStatement { ref found, .. } if found == "'1'");
    }

    #[test]
    fn test_missing_game_id() {
        let error = parse("Game : 3 blue").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken { ref expected, ref found, .. }
                if expected == "integer" && found == "':'"
        );
    }

    #[test]
    fn test_missing_colon() {
        let error = parse("Game 1 3 blue").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken { ref expected, .. } if expected == "':'"
        );
    }

    #[test]
    fn test_reveal_without_color() {
        let error = parse("Game 1: 3").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken { ref expected, ref found, .. }
                if expected == "color" && found == "'3'"
        );
    }

    #[test]
    fn test_reveal_without_amount() {
        let error = parse("Game 1: blue").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken { ref expected, ref found, .. }
                if expected == "integer" && found == "'blue'"
        );
    }

    #[test]
    fn test_empty_record() {
        let error = parse("").unwrap_err();
        assert_matches!(error, SyntaxError::EmptyRecord);
    }

    #[test]
    fn test_blank_record() {
        let error = parse("   ").unwrap_err();
        assert_matches!(error, SyntaxError::EmptyRecord);
    }

    #[test]
    fn test_integer_overflow() {
        let error = parse("Game 99999999999: 3 blue").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::InvalidInteger { ref literal, .. } if literal == "99999999999"
        );
    }

    #[test]
    fn test_lexical_error_surfaces() {
        let error = parse("Game 1: 3 purple").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::Lexical(LexerError::UnknownIdentifier { ref word, .. })
                if word == "purple"
        );
    }

    #[test]
    fn test_trailing_semicolon_requires_subset() {
        // The semicolon promises another subset whose reveal never arrives
        let error = parse("Game 1: 3 blue;").unwrap_err();
        assert_matches!(
            error,
            SyntaxError::UnexpectedToken { ref expected, .. } if expected == "integer"
        );
    }
}
