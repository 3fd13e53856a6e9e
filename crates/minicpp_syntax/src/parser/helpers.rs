/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking via save/restore (`peek`, `peek_second`)
/// - Matching / expecting keywords, operators, punctuation and identifiers
/// - The nesting guard (`nested`)
impl<'src, 'sink> Parser<'src, 'sink> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Consume and return the next token.
    fn advance(&mut self) -> Token {
        self.lexer.next_token()
    }

    /// Return the next token without consuming it.
    fn peek(&mut self) -> Token {
        let saved = self.lexer.save_position();
        let token = self.lexer.next_token();
        self.lexer.restore_position(saved);
        token
    }

    /// Return the token after the next one without consuming either.
    fn peek_second(&mut self) -> Token {
        let saved = self.lexer.save_position();
        let token = self.lexer.skip(1).next_token();
        self.lexer.restore_position(saved);
        token
    }

    fn error(&self, token: &Token, expected: impl Into<String>) -> SyntaxError {
        let span = self
            .lexer
            .buffer()
            .span_of(token.line, token.column, token.text.chars().count());
        SyntaxError::new(token, expected, span)
    }

    /// Consume the next token if it satisfies `pred`, otherwise fail with `expected` at that token.
    fn expect(&mut self, pred: impl FnOnce(&TokenKind) -> bool, expected: &str) -> PResult<Token> {
        let token = self.advance();
        if pred(&token.kind) {
            Ok(token)
        } else {
            Err(self.error(&token, expected))
        }
    }

    fn expect_punct(&mut self, id: PunctuationId, expected: &str) -> PResult<Token> {
        self.expect(|k| k.is_punctuation(id), expected)
    }

    fn expect_keyword(&mut self, id: KeywordId, expected: &str) -> PResult<Token> {
        self.expect(|k| k.is_keyword(id), expected)
    }

    fn expect_op(&mut self, id: OperatorId, expected: &str) -> PResult<Token> {
        self.expect(|k| k.is_operator(id), expected)
    }

    fn expect_ident(&mut self) -> PResult<Token> {
        self.expect(|k| *k == TokenKind::Ident, "identifier expected")
    }

    /// Consume the next token only if it satisfies `pred`.
    fn match_with(&mut self, pred: impl FnOnce(&TokenKind) -> bool) -> bool {
        let saved = self.lexer.save_position();
        if pred(&self.lexer.next_token().kind) {
            true
        } else {
            self.lexer.restore_position(saved);
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        self.match_with(|k| k.is_punctuation(id))
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        self.match_with(|k| k.is_keyword(id))
    }

    fn match_op(&mut self, id: OperatorId) -> bool {
        self.match_with(|k| k.is_operator(id))
    }

    /// Consume the next token if it is an operator of `category`.
    fn match_category(&mut self, category: OperatorCategory) -> bool {
        self.match_with(|k| k.operator_in(category).is_some())
    }

    /// Run `f` one nesting level deeper, failing once the configured depth is exceeded.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.max_nesting {
            let token = self.peek();
            return Err(self.error(&token, "nesting is too deep"));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}
