//! Tokenizer for mini-C++ source text.
//!
//! Pull-based: every call to [`Lexer::next_token`] skips trivia and classifies the next character run. The cursor is
//! a plain [`Position`] value, so the parser can save it, read ahead speculatively and restore it.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, Radix)
//! - `numbers` - Numeric literal scanning
//!
//! ## Notes
//! - Lexical anomalies are reported to the injected [`DiagnosticSink`] and always produce an `Error` token; the
//!   tokenizer never stops early and always makes progress.
//! - Once the sentinel is reached every call yields `End` without moving the cursor.
//! - Each anomaly is reported once even when backtracking re-scans it (see [`Lexer::restore_position`]).

mod numbers;
pub mod tokens;

pub use tokens::{Radix, Token, TokenKind, keyword_id};

use minicpp_core::lang::operators;
use minicpp_core::lang::punctuation;

use crate::config::Limits;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::position::Position;
use crate::source::{SENTINEL, SourceBuffer};

pub(crate) const TOO_LONG_TOKEN: &str = "too long token";
const UNCLOSED_COMMENT: &str = "unclosed multiline comment";

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Per call, in priority order:
//
// [trivia] spaces / newlines / `//...` / `/*...*/` → (unclosed `/*` → Error "/*")
//     ↓
// letter or `_` → identifier / keyword
//     ↓
// digit → octal / decimal / hex constant
//     ↓
// operator / punctuation / sentinel (→ End, cursor stays)
//     ↓
// anything else → single-char Error
// ============================================================================

/// Opaque snapshot of the tokenizer cursor, used only to backtrack.
#[derive(Debug, Clone, Copy)]
pub struct LexerPosition(Position);

/// Tokenizer over a [`SourceBuffer`].
pub struct Lexer<'src, 'sink> {
    buffer: &'src SourceBuffer,
    pos: Position,
    max_token_len: usize,
    /// Furthest offset ever scanned past; anomalies before it were already reported.
    reported_until: usize,
    sink: &'sink mut dyn DiagnosticSink,
}

impl<'src, 'sink> Lexer<'src, 'sink> {
    /// Create a tokenizer with the default [`Limits`].
    pub fn new(buffer: &'src SourceBuffer, sink: &'sink mut dyn DiagnosticSink) -> Self {
        Self::with_limits(buffer, sink, &Limits::default())
    }

    /// Create a tokenizer using `limits.max_token_len` as the identifier/literal cap.
    pub fn with_limits(buffer: &'src SourceBuffer, sink: &'sink mut dyn DiagnosticSink, limits: &Limits) -> Self {
        Self {
            buffer,
            pos: Position::START,
            max_token_len: limits.max_token_len,
            reported_until: 0,
            sink,
        }
    }

    /// The buffer being tokenized.
    pub fn buffer(&self) -> &'src SourceBuffer {
        self.buffer
    }

    /// The live cursor.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Snapshot the cursor.
    pub fn save_position(&self) -> LexerPosition {
        LexerPosition(self.pos.snapshot())
    }

    /// Replace the cursor with a snapshot taken earlier.
    ///
    /// Only the cursor is restored. The record of already-reported anomalies is kept, so re-reading tokens after a
    /// restore does not repeat their diagnostics.
    pub fn restore_position(&mut self, saved: LexerPosition) {
        tracing::trace!(from = %self.pos, to = %saved.0, "restore lexer position");
        self.pos.restore(saved.0);
    }

    /// Discard the next `amount` tokens.
    pub fn skip(&mut self, amount: usize) -> &mut Self {
        for _ in 0..amount {
            self.next_token();
        }
        self
    }

    pub(crate) fn sink(&mut self) -> &mut dyn DiagnosticSink {
        &mut *self.sink
    }

    /// Scan and return the next token.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        self.reported_until = self.reported_until.max(self.pos.offset());
        token
    }

    /// Collect every token up to and including the end-marker.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let at_end = token.kind == TokenKind::End;
            tokens.push(token);
            if at_end {
                return tokens;
            }
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn current(&self) -> char {
        self.buffer.char_at(self.pos.offset())
    }

    fn lookahead(&self) -> char {
        self.buffer.char_at(self.pos.offset() + 1)
    }

    fn report(&mut self, at: Position, message: impl Into<String>) {
        if at.offset() < self.reported_until {
            return;
        }
        let message = message.into();
        tracing::debug!(line = at.line(), column = at.column(), %message, "lexical anomaly");
        self.sink.report(Diagnostic::error(message, at.line(), at.column()));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) -> Token {
        if let Some(token) = self.skip_trivia() {
            return token;
        }

        let c = self.current();
        if is_ident_start(c) {
            return self.scan_identifier();
        }
        if c.is_ascii_digit() {
            return self.scan_number();
        }
        if let Some(token) = self.scan_symbol() {
            return token;
        }

        let start = self.pos;
        self.report(start, format!("token not found for char '{}'", c.escape_debug()));
        self.pos.advance_column(1);
        Token::new(TokenKind::Error, c, start.line(), start.column())
    }

    /// Skip whitespace and comments. Returns an `Error` token only for an unclosed block comment.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match self.current() {
                ' ' | '\t' => self.pos.advance_column(1),
                '\n' => self.pos.advance_line(1),
                '/' if self.lookahead() == '/' => {
                    self.pos.advance_column(2);
                    while !matches!(self.current(), SENTINEL | '\n') {
                        self.pos.advance_column(1);
                    }
                }
                '/' if self.lookahead() == '*' => {
                    let begin = self.pos;
                    self.pos.advance_column(2);
                    while self.current() != SENTINEL && !(self.current() == '*' && self.lookahead() == '/') {
                        if self.current() == '\n' {
                            self.pos.advance_line(1);
                        } else {
                            self.pos.advance_column(1);
                        }
                    }

                    if self.current() == SENTINEL {
                        self.report(begin, UNCLOSED_COMMENT);
                        return Some(Token::new(TokenKind::Error, "/*", begin.line(), begin.column()));
                    }
                    self.pos.advance_column(2);
                }
                _ => return None,
            }
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self) -> Token {
        let start = self.pos;
        while is_ident_continue(self.current()) && self.pos.offset() - start.offset() <= self.max_token_len {
            self.pos.advance_column(1);
        }

        let text = self.buffer.slice(start.offset(), self.pos.offset());
        let kind = if self.pos.offset() - start.offset() > self.max_token_len {
            self.report(start, TOO_LONG_TOKEN);
            TokenKind::Error
        } else if let Some(id) = keyword_id(&text) {
            // Look up identifier spelling in the reserved-word registry.
            TokenKind::Keyword(id)
        } else {
            TokenKind::Ident
        };

        Token::new(kind, text, start.line(), start.column())
    }

    // ========================================================================
    // Operators, punctuation and the end-marker
    // ========================================================================

    fn scan_symbol(&mut self) -> Option<Token> {
        let start = self.pos;
        let c = self.current();

        if c == SENTINEL {
            return Some(Token::new(TokenKind::End, "", start.line(), start.column()));
        }

        let pair = format!("{c}{}", self.lookahead());
        let (kind, width) = if let Some(id) = operators::from_str(&pair) {
            (TokenKind::Operator(id), 2)
        } else if c == '!' {
            self.report(start, "invalid token '!'");
            (TokenKind::Error, 1)
        } else if let Some(id) = operators::from_str(c.encode_utf8(&mut [0; 4])) {
            (TokenKind::Operator(id), 1)
        } else if let Some(id) = punctuation::from_char(c) {
            (TokenKind::Punctuation(id), 1)
        } else {
            return None;
        };

        self.pos.advance_column(width);
        let text = self.buffer.slice(start.offset(), self.pos.offset());
        Some(Token::new(kind, text, start.line(), start.column()))
    }
}

// ============================================================================
// Helper functions
// ============================================================================

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to tokenize a whole buffer.
///
/// This is a shorthand for `Lexer::new(buffer, sink).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = buffer.len()))]
pub fn tokenize(buffer: &SourceBuffer, sink: &mut dyn DiagnosticSink) -> Vec<Token> {
    Lexer::new(buffer, sink).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
