//! Cursor over a [`SourceBuffer`](crate::source::SourceBuffer).
//!
//! A [`Position`] is a plain value: copying it is a snapshot, assigning a copy back is a restore. No component shares
//! a mutable position with another; each one that needs a cursor owns its own.

use std::fmt;

/// Character offset plus 1-based line and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    offset: usize,
    line: usize,
    column: usize,
}

impl Position {
    /// The position of the first character of a buffer.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Character index into the source buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Move `n` characters forward on the current line.
    pub fn advance_column(&mut self, n: usize) {
        self.offset += n;
        self.column += n;
    }

    /// Consume `n` newline characters; the column resets to 1.
    pub fn advance_line(&mut self, n: usize) {
        self.offset += n;
        self.line += n;
        self.column = 1;
    }

    /// Return a copy of the cursor for later [`restore`](Self::restore).
    pub fn snapshot(&self) -> Position {
        *self
    }

    /// Replace the whole cursor with a previous snapshot.
    pub fn restore(&mut self, snapshot: Position) {
        *self = snapshot;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_column() {
        let mut pos = Position::START;
        pos.advance_column(3);
        assert_eq!((pos.offset(), pos.line(), pos.column()), (3, 1, 4));
    }

    #[test]
    fn test_advance_line_resets_column() {
        let mut pos = Position::START;
        pos.advance_column(5);
        pos.advance_line(1);
        assert_eq!((pos.offset(), pos.line(), pos.column()), (6, 2, 1));
        pos.advance_line(2);
        assert_eq!((pos.offset(), pos.line(), pos.column()), (8, 4, 1));
    }

    #[test]
    fn test_restore_replaces_every_field() {
        let mut pos = Position::START;
        pos.advance_column(2);
        let saved = pos.snapshot();
        pos.advance_line(1);
        pos.advance_column(7);
        pos.restore(saved);
        assert_eq!(pos, saved);
        assert_eq!(pos.to_string(), "1:3");
    }
}
