//! Token types for the tokenizer.
//!
//! Vocabulary tokens carry **registry-backed IDs**:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators
//! - `Punctuation(PunctuationId)` for punctuation
//!
//! ## Notes
//! - Every token keeps the exact text it was scanned from; identifiers and literals carry no separate payload.
//! - `Error` tokens stand in for anything lexically malformed; the matching diagnostic has already been reported.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use std::fmt;

use minicpp_core::lang::keywords::{self, KeywordId};
use minicpp_core::lang::operators::OperatorId;
use minicpp_core::lang::punctuation::PunctuationId;

/// Numeric literal base, decided by the literal's prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Leading `0`: `0`, `017`.
    Octal,
    /// Leading nonzero digit: `42`.
    Decimal,
    /// Leading `0x` / `0X`: `0xFF`.
    Hex,
}

/// Kind of token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and literals ==========
    Ident,
    Number(Radix),

    // ========== Special ==========
    End,   // sentinel reached, empty text
    Error, // malformed input, diagnostic already reported
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(_) => write!(f, "keyword"),
            TokenKind::Operator(_) => write!(f, "operator"),
            TokenKind::Punctuation(_) => write!(f, "punctuation"),
            TokenKind::Ident => write!(f, "identifier"),
            TokenKind::Number(Radix::Octal) => write!(f, "octal constant"),
            TokenKind::Number(Radix::Decimal) => write!(f, "decimal constant"),
            TokenKind::Number(Radix::Hex) => write!(f, "hex constant"),
            TokenKind::End => write!(f, "end of source"),
            TokenKind::Error => write!(f, "error"),
        }
    }
}

/// A token with its kind, exact text and 1-based starting location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}

/// Token-dump line: `'while' (type: keyword) (line: 2, column: 5)`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' (type: {}) (line: {}, column: {})",
            self.text, self.kind, self.line, self.column
        )
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
