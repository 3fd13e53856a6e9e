//! Syntax frontend for the mini-C++ recognizer: source buffer, tokenizer, backtracking parser, diagnostics.
//!
//! The crate answers one question about a source text: does it belong to the language? It builds no syntax tree.
//! Its only observable artifacts are the token stream and the diagnostics delivered to a [`DiagnosticSink`].
//!
//! ## Notes
//! - Lexical anomalies are non-fatal: the tokenizer always yields a token and always makes progress.
//! - Structural errors are fail-fast: the first one ends the parse and is reported exactly once.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `minicpp_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use minicpp_syntax::{diagnostics::Diagnostic, parser, source::SourceBuffer};
//!
//! let buffer = SourceBuffer::new("int main() { return 0; }").unwrap();
//! let mut diagnostics: Vec<Diagnostic> = Vec::new();
//! assert!(parser::check(&buffer, &mut diagnostics).is_ok());
//! assert_eq!(diagnostics.len(), 1); // "parser has no errors"
//! ```
//!
//! [`DiagnosticSink`]: diagnostics::DiagnosticSink

pub mod config;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod source;
pub mod token_helpers;

pub use config::Limits;
