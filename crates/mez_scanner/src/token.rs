//! Token values produced by the scanner.

use serde::Serialize;
use std::fmt;

/// The kind of a lexical token.
///
/// This is a closed set: reserved words get their own kind instead of a
/// generic keyword kind carrying a sub-tag, and adding a reserved word means
/// extending both this enum and [`TokenKind::from_keyword`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    Eof = 0,

    // Punctuation
    Plus,
    Minus,
    Asterisk,
    Less,
    LessEqual,

    // Literals
    String,
    Number,

    Identifier,

    // Reserved words
    PrintKeyword,
}

impl TokenKind {
    /// Whether this kind is a reserved word.
    pub fn is_keyword(self) -> bool {
        matches!(self, TokenKind::PrintKeyword)
    }

    /// Whether this kind carries a literal value.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Number)
    }

    /// The source text of a reserved word kind.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::PrintKeyword => Some("print"),
            _ => None,
        }
    }

    /// Look up the kind for a reserved word, if the text is one.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "print" => Some(TokenKind::PrintKeyword),
            _ => None,
        }
    }

    /// The source text of a punctuation kind.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Less => Some("<"),
            TokenKind::LessEqual => Some("<="),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Eof => "EOF",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Asterisk => "Asterisk",
            TokenKind::Less => "Less",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Identifier => "Identifier",
            TokenKind::PrintKeyword => "PrintKeyword",
        };
        write!(f, "{}", text)
    }
}

/// A scanned token: a classified, immutable fragment of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact source substring that produced the token (empty for EOF).
    pub lexeme: String,
    /// Decoded value: string contents without delimiters, or the numeric
    /// text. Absent for every other kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
    /// 1-based line where the token's first character appeared.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal: None,
            line,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    /// The end-of-input marker appended after the last real token.
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, "", line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind,
            self.lexeme,
            self.literal.as_deref().unwrap_or("null")
        )
    }
}
