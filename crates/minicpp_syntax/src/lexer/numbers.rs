//! Numeric literal scanning.
//!
//! Classifies octal (`0`, `017`), decimal (`42`) and hexadecimal (`0xFF`) constants. The scan never consumes a digit
//! that does not belong to the literal's base: in `08` the `8` is left for the next token.

use super::tokens::{Radix, Token, TokenKind};
use super::{Lexer, TOO_LONG_TOKEN};

impl<'src, 'sink> Lexer<'src, 'sink> {
    pub(super) fn scan_number(&mut self) -> Token {
        let start = self.pos;

        let mut radix = if self.current() == '0' {
            if matches!(self.lookahead(), 'x' | 'X') {
                self.pos.advance_column(2);
                if self.current().is_ascii_hexdigit() {
                    Some(Radix::Hex)
                } else {
                    let message = format!("invalid digit '{}' in hex constant", self.current().escape_debug());
                    self.report(start, message);
                    None
                }
            } else {
                self.pos.advance_column(1);
                Some(Radix::Octal)
            }
        } else {
            Some(Radix::Decimal)
        };

        match radix {
            Some(Radix::Octal) => {
                self.eat_digits(start.offset(), is_octal_digit);
                if matches!(self.current(), '8' | '9') {
                    let message = format!("invalid digit '{}' in octal constant", self.current());
                    self.report(start, message);
                    radix = None;
                }
            }
            Some(Radix::Decimal) => self.eat_digits(start.offset(), |c| c.is_ascii_digit()),
            Some(Radix::Hex) => self.eat_digits(start.offset(), |c| c.is_ascii_hexdigit()),
            None => {}
        }

        let len = self.pos.offset() - start.offset();
        if len > self.max_token_len {
            self.report(start, TOO_LONG_TOKEN);
            radix = None;
        }

        let kind = radix.map_or(TokenKind::Error, TokenKind::Number);
        let text = self.buffer.slice(start.offset(), self.pos.offset());
        Token::new(kind, text, start.line(), start.column())
    }

    /// Consume digits accepted by `is_digit`, stopping once the literal is one character over the length cap.
    fn eat_digits(&mut self, begin: usize, is_digit: impl Fn(char) -> bool) {
        while is_digit(self.current()) && self.pos.offset() - begin <= self.max_token_len {
            self.pos.advance_column(1);
        }
    }
}

fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}
