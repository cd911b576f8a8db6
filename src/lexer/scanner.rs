//! The single-pass tolerant scanner.
use crate::diagnostics::{DiagnosticKind, Reporter};

use super::cursor::Cursor;
use super::tokens::{keyword, Token, TokenType};

/// Scans `source` into a token sequence, routing every malformed construct
/// into `reporter`. The returned sequence is always terminated by an
/// [`TokenType::Eof`] token, even when the source is empty or entirely
/// invalid.
pub fn scan(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan()
}

/// Consumes the bound source text exactly once, left to right.
///
/// Each loop iteration handles exactly one lexical item: a token is
/// appended, or whitespace/a comment is discarded, or a diagnostic is
/// reported. The cursor strictly advances on every path, so scanning
/// terminates on any finite input.
pub struct Scanner<'s, 'r> {
    source: &'s str,
    cursor: Cursor<'s>,
    tokens: Vec<Token>,
    reporter: &'r mut Reporter,
}

impl<'s, 'r> Scanner<'s, 'r> {
    pub fn new(source: &'s str, reporter: &'r mut Reporter) -> Self {
        Self {
            source,
            cursor: Cursor::new(source),
            tokens: vec![],
            reporter,
        }
    }

    /// Runs the scan to completion and consumes the scanner, producing the
    /// token sequence. Never fails; errors are discoverable only through the
    /// reporter afterwards.
    pub fn scan(mut self) -> Vec<Token> {
        while !self.cursor.is_at_end() {
            self.scan_one();
        }

        let line = self.cursor.line();
        self.tokens.push(Token::new(TokenType::Eof, "", line));
        self.tokens
    }

    /// Attempts to read a single lexical item.
    fn scan_one(&mut self) {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let Some(c) = self.cursor.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenType::LeftParen, start, line),
            ')' => self.add_token(TokenType::RightParen, start, line),
            '{' => self.add_token(TokenType::LeftBrace, start, line),
            '}' => self.add_token(TokenType::RightBrace, start, line),
            ',' => self.add_token(TokenType::Comma, start, line),
            '.' => self.add_token(TokenType::Dot, start, line),
            '-' => self.add_token(TokenType::Minus, start, line),
            '+' => self.add_token(TokenType::Plus, start, line),
            ';' => self.add_token(TokenType::Semicolon, start, line),
            '*' => self.add_token(TokenType::Star, start, line),
            '/' => self.add_token(TokenType::Slash, start, line),

            // `#` starts a line comment: discard up to, but not including,
            // the next newline. The newline itself is handled by the next
            // iteration so the line counter stays in one place.
            '#' => {
                while matches!(self.cursor.peek(), Some(ch) if ch != '\n') {
                    self.cursor.advance();
                }
            }

            '!' => self.one_or_two(TokenType::Bang, TokenType::BangEqual, start, line),
            '=' => self.one_or_two(TokenType::Equal, TokenType::EqualEqual, start, line),
            '>' => self.one_or_two(TokenType::Greater, TokenType::GreaterEqual, start, line),
            '<' => self.one_or_two(TokenType::Less, TokenType::LessEqual, start, line),

            '"' => self.string_literal(line),

            '0'..='9' => self.number(start, line),

            ch if ch.is_ascii_alphabetic() || ch == '_' => self.identifier(start, line),

            // Whitespace emits nothing. The cursor already bumped the line
            // counter if this was a newline.
            ' ' | '\t' | '\r' | '\n' => {}

            _ => {
                self.reporter
                    .report(DiagnosticKind::UnexpectedCharacter(c), line, column);
            }
        }
    }

    /// Emits a token whose lexeme spans from `start` to the cursor's current
    /// position. Lexemes are always literal substrings of the source.
    fn add_token(&mut self, kind: TokenType, start: usize, line: usize) {
        let lexeme = &self.source[start..self.cursor.position()];
        self.tokens.push(Token::new(kind, lexeme, line));
    }

    /// Decides between a one-character and a two-character operator by
    /// looking ahead for `=`. The lookahead consumes nothing on a mismatch.
    fn one_or_two(&mut self, single: TokenType, double: TokenType, start: usize, line: usize) {
        let kind = if self.cursor.match_next('=') {
            double
        } else {
            single
        };
        self.add_token(kind, start, line);
    }

    /// Scans a string literal, starting just after the opening quote.
    ///
    /// A newline or end of input before the closing quote abandons the
    /// literal: an `UnterminatedString` diagnostic is reported and no token
    /// is emitted. In the newline case the newline is consumed before the
    /// main loop resumes, so recovery always makes forward progress.
    fn string_literal(&mut self, line: usize) {
        let content_start = self.cursor.position();

        loop {
            match self.cursor.peek() {
                Some('"') => {
                    let content_end = self.cursor.position();
                    self.cursor.advance();
                    let lexeme = &self.source[content_start..content_end];
                    self.tokens.push(Token::new(TokenType::String, lexeme, line));
                    return;
                }
                Some('\n') => {
                    self.reporter.report(
                        DiagnosticKind::UnterminatedString,
                        self.cursor.line(),
                        self.cursor.column(),
                    );
                    self.cursor.advance();
                    return;
                }
                Some(_) => {
                    self.cursor.advance();
                }
                None => {
                    self.reporter.report(
                        DiagnosticKind::UnterminatedString,
                        self.cursor.line(),
                        self.cursor.column(),
                    );
                    return;
                }
            }
        }
    }

    /// Scans a number: a maximal digit run, optionally followed by a `.`
    /// and at least one more digit, then another maximal digit run.
    /// A trailing `.` is left for the next iteration (`12.` scans as the
    /// number `12` followed by a dot).
    fn number(&mut self, start: usize, line: usize) {
        while matches!(self.cursor.peek(), Some(ch) if ch.is_ascii_digit()) {
            self.cursor.advance();
        }

        if self.cursor.peek() == Some('.')
            && matches!(self.cursor.peek_second(), Some(ch) if ch.is_ascii_digit())
        {
            self.cursor.advance();
            while matches!(self.cursor.peek(), Some(ch) if ch.is_ascii_digit()) {
                self.cursor.advance();
            }
        }

        self.add_token(TokenType::Number, start, line);
    }

    /// Scans a maximal identifier-shaped run and classifies it against the
    /// keyword table.
    fn identifier(&mut self, start: usize, line: usize) {
        while matches!(self.cursor.peek(), Some(ch) if ch.is_ascii_alphanumeric() || ch == '_') {
            self.cursor.advance();
        }

        let text = &self.source[start..self.cursor.position()];
        let kind = keyword(text).unwrap_or(TokenType::Identifier);
        self.tokens.push(Token::new(kind, text, line));
    }
}
