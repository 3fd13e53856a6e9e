/// Expression parsing.
///
/// Binary levels come from `operators::BINARY_LEVELS` (loosest first) and share one left-associative loop; below
/// them sit `prefix`, `postfix` and `primary`.
impl<'src, 'sink> Parser<'src, 'sink> {
    fn expression(&mut self) -> PResult {
        self.binary_level(0)
    }

    /// Parse `operand (op operand)*` for the level at `index`, where operands are the next tighter level.
    fn binary_level(&mut self, index: usize) -> PResult {
        let Some(&category) = operators::BINARY_LEVELS.get(index) else {
            return self.prefix();
        };
        self.binary_level(index + 1)?;
        while self.match_category(category) {
            self.binary_level(index + 1)?;
        }
        Ok(())
    }

    /// `("+" | "-" | "++" | "--")? postfix`
    fn prefix(&mut self) -> PResult {
        self.match_with(TokenKind::is_prefix_operator);
        self.postfix()
    }

    /// `primary ("++" | "--")?`
    fn postfix(&mut self) -> PResult {
        self.primary()?;
        self.match_with(TokenKind::is_postfix_operator);
        Ok(())
    }

    fn primary(&mut self) -> PResult {
        match self.peek().kind {
            TokenKind::Ident => self.left_value(),
            TokenKind::Punctuation(PunctuationId::LParen) => {
                self.advance();
                self.nested(Self::expression)?;
                self.expect_punct(PunctuationId::RParen, "')' expected")?;
                Ok(())
            }
            _ => self.constant(),
        }
    }

    fn constant(&mut self) -> PResult {
        self.expect(TokenKind::is_number, "octal, decimal or hex constant expected")?;
        Ok(())
    }

    /// `IDENTIFIER index? ("." IDENTIFIER index?)*`
    fn left_value(&mut self) -> PResult {
        self.expect_ident()?;
        self.index_suffix()?;
        while self.match_punct(PunctuationId::Dot) {
            self.expect_ident()?;
            self.index_suffix()?;
        }
        Ok(())
    }

    fn index_suffix(&mut self) -> PResult {
        if self.match_punct(PunctuationId::LBracket) {
            self.nested(Self::expression)?;
            self.expect_punct(PunctuationId::RBracket, "']' expected")?;
        }
        Ok(())
    }
}
