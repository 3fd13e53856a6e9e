//! Normalized source text with the end-of-source sentinel appended.
//!
//! ## Notes
//! - Every `'\r'` is dropped, so CRLF and lone CR line endings both collapse to LF.
//! - Two [`SENTINEL`] characters are appended. The tokenizer never moves past the first one, so peeking one character
//!   beyond any real character is always in bounds.
//! - Offsets, lines and columns count Unicode scalar values, not bytes.

use miette::SourceSpan;
use thiserror::Error;

use crate::config::Limits;

/// Reserved end-of-source marker, appended twice.
pub const SENTINEL: char = '\0';

/// Setup failures raised before any tokenizing starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("source text is too long: {len} characters, the limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("source text contains the reserved end-of-source character at {line}:{column}")]
    EmbeddedSentinel { line: usize, column: usize },
}

/// Immutable, sentinel-terminated source text.
#[derive(Debug, Clone)]
pub struct SourceBuffer {
    chars: Vec<char>,
    text: String,
}

impl SourceBuffer {
    /// Prepare `raw` with the default [`Limits`].
    pub fn new(raw: &str) -> Result<Self, SourceError> {
        Self::with_limits(raw, &Limits::default())
    }

    /// Normalize `raw`, append the sentinels and enforce `limits.max_source_len`.
    ///
    /// ## Errors
    /// - [`SourceError::TooLong`] if the prepared buffer exceeds the limit.
    /// - [`SourceError::EmbeddedSentinel`] if `raw` already contains [`SENTINEL`].
    pub fn with_limits(raw: &str, limits: &Limits) -> Result<Self, SourceError> {
        let text = raw.replace('\r', "");

        let mut chars: Vec<char> = text.chars().collect();
        chars.push(SENTINEL);
        chars.push(SENTINEL);

        if chars.len() > limits.max_source_len {
            return Err(SourceError::TooLong {
                len: chars.len(),
                max: limits.max_source_len,
            });
        }

        if let Some(offset) = text.find(SENTINEL) {
            let before = &text[..offset];
            let line = before.matches('\n').count() + 1;
            let line_start = before.rfind('\n').map_or(0, |i| i + 1);
            let column = before[line_start..].chars().count() + 1;
            return Err(SourceError::EmbeddedSentinel { line, column });
        }

        Ok(Self { chars, text })
    }

    /// Normalized text without the sentinels.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, sentinels included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Return `true` if the buffer holds nothing but the sentinels.
    pub fn is_empty(&self) -> bool {
        self.chars.len() == 2
    }

    /// Character at `offset`; anything past the end reads as [`SENTINEL`].
    pub fn char_at(&self, offset: usize) -> char {
        self.chars.get(offset).copied().unwrap_or(SENTINEL)
    }

    /// Characters in `start..end` as an owned string.
    pub fn slice(&self, start: usize, end: usize) -> String {
        self.chars
            .get(start..end)
            .map(|chars| chars.iter().collect())
            .unwrap_or_default()
    }

    /// Text of a 1-based line, without its newline.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.text.split('\n').nth(line.checked_sub(1)?)
    }

    /// Byte span of `len` characters starting at a 1-based line/column, for diagnostic labels.
    pub fn span_of(&self, line: usize, column: usize, len: usize) -> SourceSpan {
        let line_start: usize = self
            .text
            .split_inclusive('\n')
            .take(line.saturating_sub(1))
            .map(str::len)
            .sum();
        let start = line_start
            + self.text[line_start..]
                .chars()
                .take(column.saturating_sub(1))
                .map(char::len_utf8)
                .sum::<usize>();
        let width = self.text[start..].chars().take(len).map(char::len_utf8).sum::<usize>();
        (start, width).into()
    }
}
