//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `Int` is an identifier, `int` is a keyword.
//! - `short` and `long` may be followed by `int` as part of the same type name; that pairing is a grammar rule and
//!   lives in the parser, not here.
//!
//! ## Examples
//! ```rust
//! use minicpp_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("short"), Some(KeywordId::Short));
//! assert_eq!(keywords::category(KeywordId::Short), KeywordCategory::BasicType);
//! assert!(keywords::from_str("Short").is_none());
//! ```

/// Broad grouping for reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Builtin data types: `char`, `short`, `long`, `int`.
    BasicType,
    /// Declaration markers: `class`, `main`.
    Declaration,
    /// Statement introducers: `while`, `return`.
    Statement,
}

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Basic types
    Char,
    Short,
    Long,
    Int,

    // Declarations
    Class,
    Main,

    // Statements
    While,
    Return,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Char, "char", KeywordCategory::BasicType, "character type"),
    info(KeywordId::Short, "short", KeywordCategory::BasicType, "short integer type, optionally `short int`"),
    info(KeywordId::Long, "long", KeywordCategory::BasicType, "long integer type, optionally `long int`"),
    info(KeywordId::Int, "int", KeywordCategory::BasicType, "integer type"),
    info(KeywordId::Class, "class", KeywordCategory::Declaration, "class declaration"),
    info(KeywordId::Main, "main", KeywordCategory::Declaration, "program entry function name"),
    info(KeywordId::While, "while", KeywordCategory::Statement, "loop statement"),
    info(KeywordId::Return, "return", KeywordCategory::Statement, "return statement"),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if `id` names a builtin data type.
pub fn is_basic_type(id: KeywordId) -> bool {
    category(id) == KeywordCategory::BasicType
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling is reserved, `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
    }
}
