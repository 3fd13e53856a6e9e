//! Diagnostics: lexical anomalies, structural (syntax) errors, and the sink that receives them.
//!
//! ## Notes
//! - Lexical anomalies are plain [`Diagnostic`] values pushed into a [`DiagnosticSink`]; they never stop anything.
//! - A [`SyntaxError`] is the single structural failure of a parse. The parser reports it to the sink as
//!   `syntax error: ...` and also returns it to the caller.
//! - Setup failures live in [`crate::source::SourceError`], so "never started" and "started and found problems" stay
//!   distinguishable.

use std::fmt;

use miette::SourceSpan;
use thiserror::Error;

use crate::lexer::Token;

/// How a diagnostic should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message (e.g. the parser's success verdict).
    Info,
    /// Lexical anomaly or structural error.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "log"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// 1-based source location of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// One message delivered to a [`DiagnosticSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: Some(Location { line, column }),
        }
    }

    pub fn error_unlocated(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            location: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            location: None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Renders in the log-line format: `[error] message (line: 3, column: 7)`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)?;
        if let Some(Location { line, column }) = self.location {
            write!(f, " (line: {line}, column: {column})")?;
        }
        Ok(())
    }
}

/// Destination for diagnostics, in discovery order.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// The first structural violation found by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Error, miette::Diagnostic)]
#[error("wrong token '{image}' at {line}:{column}; {expected}")]
#[diagnostic(code(minicpp::syntax))]
pub struct SyntaxError {
    /// Exact text of the offending token (empty for the end-marker).
    pub image: String,
    pub line: usize,
    pub column: usize,
    /// Human-readable expectation, e.g. `';' expected`.
    pub expected: String,
    #[label("unexpected token")]
    pub span: SourceSpan,
}

impl SyntaxError {
    pub fn new(token: &Token, expected: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            image: token.text.clone(),
            line: token.line,
            column: token.column,
            expected: expected.into(),
            span,
        }
    }

    /// The message reported to the sink.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error_unlocated(format!("syntax error: {self}"))
    }
}
