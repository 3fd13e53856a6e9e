//! Backtracking recursive-descent recognizer for mini-C++.
//!
//! Pulls tokens lazily from a [`Lexer`] and validates them against the grammar. No tree is built: the outcome of a
//! parse is accept/reject plus the diagnostics delivered to the sink.
//!
//! ## Examples
//!
//! ```rust
//! use minicpp_syntax::{diagnostics::Diagnostic, parser, source::SourceBuffer};
//!
//! let buffer = SourceBuffer::new("int main() { int x; x = 1 return x; }").unwrap();
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! let err = parser::check(&buffer, &mut diagnostics).unwrap_err();
//! assert_eq!(err.to_string(), "wrong token 'return' at 1:27; ';' expected");
//! ```

use crate::config::Limits;
use crate::diagnostics::{Diagnostic, DiagnosticSink, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind};
use crate::source::SourceBuffer;
use minicpp_core::lang::keywords::KeywordId;
use minicpp_core::lang::operators::{self, OperatorCategory, OperatorId};
use minicpp_core::lang::punctuation::PunctuationId;

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
