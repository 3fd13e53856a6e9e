#![forbid(unsafe_code)]
//! mini-C++ recognizer
//!
//! Decides whether a source text belongs to a small C++-like language. This crate is the driver around the
//! `minicpp_syntax` core: it loads source files, routes diagnostics to writers and exposes the `minicpp` CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a programming error (e.g. a registry entry missing for an ID), use
//!   `.expect("INVARIANT: reason")` with a clear explanation.

pub mod cli;
pub mod loader;
pub mod sinks;

pub use minicpp_syntax::diagnostics;
pub use minicpp_syntax::lexer;
pub use minicpp_syntax::parser;
pub use minicpp_syntax::source;
pub use minicpp_syntax::{Limits, config};

pub use loader::{LoadError, load_file};
pub use sinks::WriterSink;
