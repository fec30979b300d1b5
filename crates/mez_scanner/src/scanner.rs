//! The mez scanner/lexer.
//!
//! One pass over the source text: a cursor walks the characters, dispatches
//! on the current one, and either emits a token, skips trivia, or reports a
//! diagnostic. The token sequence always ends in a single EOF token, except
//! when an unterminated string literal aborts the scan.

use crate::char_codes::{is_digit, is_identifier_part, is_identifier_start};
use crate::token::{Token, TokenKind};
use mez_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// The outcome of scanning one source text.
///
/// `tokens` is `Some` with an EOF-terminated sequence on normal completion,
/// and `None` when an unterminated string aborted the scan. Diagnostics come
/// back either way: a complete sequence can still carry errors, so callers
/// check [`ScanResult::had_error`] rather than the sequence alone.
#[derive(Debug)]
pub struct ScanResult {
    /// Tokens in source order, EOF last; absent when the scan aborted.
    pub tokens: Option<Vec<Token>>,
    /// Every diagnostic reported during the scan.
    pub diagnostics: DiagnosticCollection,
}

impl ScanResult {
    /// Whether any error diagnostic was reported during the scan.
    pub fn had_error(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Scan a complete source text.
pub fn scan(source: &str) -> ScanResult {
    Scanner::new(source).scan_tokens()
}

/// The scanner converts mez source text into tokens.
///
/// Cursor state lives only for one scan call; [`Scanner::scan_tokens`]
/// consumes the scanner and returns the result.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Current position in the text.
    pos: usize,
    /// Start of the current token.
    token_start: usize,
    /// Line of the current token's first character, 1-based.
    token_line: u32,
    /// Current 1-based line number.
    line: u32,
    /// Position of the first character of the current line.
    line_start: usize,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.chars().collect(),
            pos: 0,
            token_start: 0,
            token_line: 1,
            line: 1,
            line_start: 0,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Scan the whole text into a token sequence.
    ///
    /// Dispatch order follows the grammar: trivia first, then string,
    /// single-character operators, `<`/`<=`, comments, numbers,
    /// identifiers, and finally the unexpected-character report.
    pub fn scan_tokens(mut self) -> ScanResult {
        let mut tokens = Vec::new();

        while !self.is_eof() {
            self.token_start = self.pos;
            self.token_line = self.line;
            let ch = self.text[self.pos];
            self.pos += 1;

            match ch {
                ' ' | '\t' | '\r' => {}
                '\\' if self.current_char() == Some('s') => {
                    self.pos += 1;
                }
                // Reserved but currently inert.
                '.' => {}
                '\n' => self.new_line(),
                '`' => match self.scan_string() {
                    Some(token) => tokens.push(token),
                    // Unterminated string: the one fatal path. The whole
                    // scan is abandoned, not just the current token.
                    None => {
                        return ScanResult {
                            tokens: None,
                            diagnostics: self.diagnostics,
                        }
                    }
                },
                '+' => tokens.push(self.make_token(TokenKind::Plus)),
                '-' => tokens.push(self.make_token(TokenKind::Minus)),
                '*' => tokens.push(self.make_token(TokenKind::Asterisk)),
                '<' => {
                    let kind = if self.match_char('=') {
                        TokenKind::LessEqual
                    } else {
                        TokenKind::Less
                    };
                    tokens.push(self.make_token(kind));
                }
                '~' => self.skip_line_comment(),
                '0'..='9' => tokens.push(self.scan_number()),
                c if is_identifier_start(c) => tokens.push(self.scan_identifier()),
                c => self.report_unexpected_character(c),
            }
        }

        tokens.push(Token::eof(self.line));
        ScanResult {
            tokens: Some(tokens),
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Token-specific scanning methods
    // ========================================================================

    /// Scan a backtick-delimited string literal; the opening backtick has
    /// been consumed. Returns `None` if input ran out before the closing
    /// backtick.
    fn scan_string(&mut self) -> Option<Token> {
        while let Some(ch) = self.current_char() {
            if ch == '`' {
                break;
            }
            self.pos += 1;
            if ch == '\n' {
                self.new_line();
            }
        }

        if self.is_eof() {
            self.diagnostics
                .add(Diagnostic::at_line(self.line, &messages::UNTERMINATED_STRING, &[]));
            return None;
        }

        self.pos += 1; // closing backtick

        let value = self.chars_to_string(self.token_start + 1, self.pos - 1);
        Some(self.make_token(TokenKind::String).with_literal(value))
    }

    /// Scan a number literal; the first digit has been consumed.
    fn scan_number(&mut self) -> Token {
        while self.current_char().map_or(false, is_digit) {
            self.pos += 1;
        }

        // A fractional part only counts when a digit follows the dot. A
        // trailing dot is left unconsumed for the dispatch loop.
        if self.current_char() == Some('.') && self.char_at(1).map_or(false, is_digit) {
            self.pos += 1;
            while self.current_char().map_or(false, is_digit) {
                self.pos += 1;
            }
        }

        let text = self.chars_to_string(self.token_start, self.pos);
        self.make_token(TokenKind::Number).with_literal(text)
    }

    /// Scan an identifier or reserved word; the first character has been
    /// consumed.
    fn scan_identifier(&mut self) -> Token {
        while self.current_char().map_or(false, is_identifier_part) {
            self.pos += 1;
        }

        let text = self.chars_to_string(self.token_start, self.pos);
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }

    /// Skip a `~` comment up to (not including) the newline, so the main
    /// loop counts the line.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn report_unexpected_character(&mut self, ch: char) {
        let column = self.token_start - self.line_start + 1;
        self.diagnostics.add(Diagnostic::at_line(
            self.line,
            &messages::UNEXPECTED_CHARACTER,
            &[&ch.to_string(), &column.to_string()],
        ));
    }

    // ========================================================================
    // Cursor helpers
    // ========================================================================

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos).copied()
    }

    /// Look at the character at position pos + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.pos + offset).copied()
    }

    /// Consume the next character if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Record a newline that was just consumed.
    fn new_line(&mut self) {
        self.line += 1;
        self.line_start = self.pos;
    }

    /// Build a token from the current lexeme range.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.chars_to_string(self.token_start, self.pos),
            self.token_line,
        )
    }

    /// Convert a range of chars to a String.
    fn chars_to_string(&self, start: usize, end: usize) -> String {
        self.text[start..end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source)
            .tokens
            .expect("scan aborted")
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_scan_operators() {
        assert_eq!(
            kinds("+ - * < <="),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Asterisk,
                TokenKind::Less,
                TokenKind::LessEqual,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_scan_keyword_and_identifier() {
        let result = scan("print total");
        let tokens = result.tokens.unwrap();
        assert_eq!(tokens[0].kind, TokenKind::PrintKeyword);
        assert_eq!(tokens[0].lexeme, "print");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].lexeme, "total");
    }

    #[test]
    fn test_scan_number() {
        let result = scan("12.5");
        let tokens = result.tokens.unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number);
        assert_eq!(tokens[0].lexeme, "12.5");
        assert_eq!(tokens[0].literal.as_deref(), Some("12.5"));
    }

    #[test]
    fn test_scan_string() {
        let result = scan("`hello`");
        let tokens = result.tokens.unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, "`hello`");
        assert_eq!(tokens[0].literal.as_deref(), Some("hello"));
    }

    #[test]
    fn test_unterminated_string_aborts() {
        let result = scan("`abc");
        assert!(result.tokens.is_none());
        assert!(result.had_error());
        assert_eq!(result.diagnostics.len(), 1);
    }

    #[test]
    fn test_unexpected_character_continues() {
        let result = scan("@ +");
        assert!(result.had_error());
        let tokens = result.tokens.unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Plus);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }
}
