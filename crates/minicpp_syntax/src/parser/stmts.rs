/// Block and statement parsing.
impl<'src, 'sink> Parser<'src, 'sink> {
    /// `"{" (declaration | statement)* "}"`
    fn block(&mut self) -> PResult {
        self.expect_punct(PunctuationId::LBrace, "'{' expected")?;
        self.nested(Self::block_items)
    }

    fn block_items(&mut self) -> PResult {
        loop {
            let saved = self.lexer.save_position();
            let first = self.advance();
            if first.kind.is_punctuation(PunctuationId::RBrace) {
                return Ok(());
            }
            if first.kind == TokenKind::End {
                return Err(self.error(&first, "'}' expected"));
            }
            let second = self.advance();
            self.lexer.restore_position(saved);

            // `Foo x;` declares, `x = 1;` assigns: only two identifiers in a row mean a user-typed declaration.
            let is_declaration = first.kind.is_keyword(KeywordId::Class)
                || first.kind.is_basic_type()
                || (first.is_ident() && second.is_ident());
            if is_declaration {
                self.declaration()?;
            } else {
                self.statement()?;
            }
        }
    }

    fn statement(&mut self) -> PResult {
        match self.peek().kind {
            TokenKind::Keyword(KeywordId::While) => self.while_statement(),
            TokenKind::Punctuation(PunctuationId::LBrace) => self.block(),
            TokenKind::Ident => {
                self.left_value()?;
                self.expect_op(OperatorId::Assign, "'=' expected")?;
                self.expression()?;
                self.expect_punct(PunctuationId::Semicolon, "';' expected")?;
                Ok(())
            }
            TokenKind::Keyword(KeywordId::Return) => {
                self.advance();
                self.expression()?;
                self.expect_punct(PunctuationId::Semicolon, "';' expected")?;
                Ok(())
            }
            _ => {
                self.expect_punct(PunctuationId::Semicolon, "';' expected")?;
                Ok(())
            }
        }
    }

    /// `"while" "(" expression ")" statement`
    fn while_statement(&mut self) -> PResult {
        self.expect_keyword(KeywordId::While, "'while' keyword expected")?;
        self.expect_punct(PunctuationId::LParen, "'(' expected")?;
        self.expression()?;
        self.expect_punct(PunctuationId::RParen, "')' expected")?;
        self.nested(Self::statement)
    }
}
