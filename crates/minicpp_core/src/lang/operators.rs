//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the expression grammar is driven by:
//! which binary precedence level an operator belongs to, and whether it may appear as a prefix or postfix operator.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact: `"=="` resolves, `"= ="` does not.
//! - `!` on its own is not an operator; only `!=` is.
//!
//! ## Examples
//! ```rust
//! use minicpp_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("<<"), Some(OperatorId::Shl));
//! assert_eq!(operators::category(OperatorId::Shl), OperatorCategory::Shift);
//! assert!(operators::info_for(OperatorId::Minus).prefix);
//! ```

/// Grouping of operators by role; binary categories double as precedence levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    /// `=`
    Assignment,
    /// `==` `!=`
    Equality,
    /// `<` `>` `<=` `>=`
    Relational,
    /// `<<` `>>`
    Shift,
    /// `+` `-`
    Additive,
    /// `*` `/` `%`
    Multiplicative,
    /// `++` `--`
    Step,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Assign,

    // Equality / relational
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Shifts
    Shl,
    Shr,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Increment / decrement
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub canonical: &'static str,
    pub category: OperatorCategory,
    /// Binding strength; higher binds tighter. Only meaningful for binary categories.
    pub precedence: u8,
    /// May appear before an operand (`-x`, `++x`).
    pub prefix: bool,
    /// May appear after an operand (`x++`).
    pub postfix: bool,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Assign, "=", OperatorCategory::Assignment, 0, false, false),
    op(OperatorId::EqEq, "==", OperatorCategory::Equality, 10, false, false),
    op(OperatorId::NotEq, "!=", OperatorCategory::Equality, 10, false, false),
    op(OperatorId::Lt, "<", OperatorCategory::Relational, 20, false, false),
    op(OperatorId::Gt, ">", OperatorCategory::Relational, 20, false, false),
    op(OperatorId::LtEq, "<=", OperatorCategory::Relational, 20, false, false),
    op(OperatorId::GtEq, ">=", OperatorCategory::Relational, 20, false, false),
    op(OperatorId::Shl, "<<", OperatorCategory::Shift, 30, false, false),
    op(OperatorId::Shr, ">>", OperatorCategory::Shift, 30, false, false),
    op(OperatorId::Plus, "+", OperatorCategory::Additive, 40, true, false),
    op(OperatorId::Minus, "-", OperatorCategory::Additive, 40, true, false),
    op(OperatorId::Star, "*", OperatorCategory::Multiplicative, 50, false, false),
    op(OperatorId::Slash, "/", OperatorCategory::Multiplicative, 50, false, false),
    op(OperatorId::Percent, "%", OperatorCategory::Multiplicative, 50, false, false),
    op(OperatorId::PlusPlus, "++", OperatorCategory::Step, 60, true, true),
    op(OperatorId::MinusMinus, "--", OperatorCategory::Step, 60, true, true),
];

/// Binary precedence levels from loosest to tightest.
pub const BINARY_LEVELS: &[OperatorCategory] = &[
    OperatorCategory::Equality,
    OperatorCategory::Relational,
    OperatorCategory::Shift,
    OperatorCategory::Additive,
    OperatorCategory::Multiplicative,
];

/// Canonical spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Return the operators of one category, in registry order.
pub fn in_category(category: OperatorCategory) -> impl Iterator<Item = OperatorId> {
    OPERATORS
        .iter()
        .filter(move |o| o.category == category)
        .map(|o| o.id)
}

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.canonical == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    canonical: &'static str,
    category: OperatorCategory,
    precedence: u8,
    prefix: bool,
    postfix: bool,
) -> OperatorInfo {
    OperatorInfo {
        id,
        canonical,
        category,
        precedence,
        prefix,
        postfix,
    }
}
