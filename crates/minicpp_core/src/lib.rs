//! Canonical vocabulary for the mini-C++ recognizer.
//!
//! This crate is intentionally small and dependency-free. It holds the closed sets of reserved words, operators and
//! punctuation that the tokenizer classifies character runs into, so that the tokenizer and the parser both speak in
//! stable IDs instead of spellings.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, no token or grammar types.
//! - Syntax rules are enforced by `minicpp_syntax`; the registries only record spellings and metadata.

pub mod lang;
