//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! They keep the parser's grammar functions free of repetitive `matches!(...)` over ID-based tokens.

use crate::lexer::{Token, TokenKind};
use minicpp_core::lang::keywords::{self, KeywordId};
use minicpp_core::lang::operators::{self, OperatorCategory, OperatorId};
use minicpp_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return the keyword id, if this is a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return `true` for `char`, `short`, `long` and `int`.
    pub fn is_basic_type(&self) -> bool {
        self.keyword_id().is_some_and(keywords::is_basic_type)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return the operator id if this operator belongs to `category`.
    pub fn operator_in(&self, category: OperatorCategory) -> Option<OperatorId> {
        self.operator_id().filter(|id| operators::category(*id) == category)
    }

    /// Return `true` for operators allowed before an operand (`+ - ++ --`).
    pub fn is_prefix_operator(&self) -> bool {
        self.operator_id().is_some_and(|id| operators::info_for(id).prefix)
    }

    /// Return `true` for operators allowed after an operand (`++ --`).
    pub fn is_postfix_operator(&self) -> bool {
        self.operator_id().is_some_and(|id| operators::info_for(id).postfix)
    }

    /// Return the punctuation id, if this is a punctuation token.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` for octal, decimal and hex constants.
    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Number(_))
    }
}

impl Token {
    /// Convenience wrapper for `self.kind.keyword_id()`.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    /// Convenience wrapper for `self.kind.operator_id()`.
    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    /// Convenience wrapper for `self.kind.punctuation_id()`.
    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    pub fn is_ident(&self) -> bool {
        self.kind == TokenKind::Ident
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}
