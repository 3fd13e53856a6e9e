/// Program-level and declaration parsing.
///
/// - `program := { declaration | mainFunction } END`
/// - `declaration := (basicType ["int"] | IDENTIFIER) [declarator-list] ";" | classDecl ";"`
/// - `classDecl := "class" IDENTIFIER "{" declaration* "}"`
/// - `mainFunction := "int" "main" "(" ")" block`
impl<'src, 'sink> Parser<'src, 'sink> {
    fn program(&mut self) -> PResult {
        loop {
            if self.peek().kind == TokenKind::End {
                return Ok(());
            }
            // `int main` and `int x` share their first token.
            if self.peek_second().kind.is_keyword(KeywordId::Main) {
                self.main_function()?;
            } else {
                self.declaration()?;
            }
        }
    }

    fn main_function(&mut self) -> PResult {
        self.expect_keyword(KeywordId::Int, "'int' keyword expected before 'main'")?;
        self.expect_keyword(KeywordId::Main, "'main' keyword expected")?;
        self.expect_punct(PunctuationId::LParen, "'(' expected")?;
        self.expect_punct(PunctuationId::RParen, "')' expected")?;
        self.block()
    }

    fn declaration(&mut self) -> PResult {
        let saved = self.lexer.save_position();
        let head = self.advance();
        match head.kind {
            TokenKind::Keyword(KeywordId::Class) => {
                self.lexer.restore_position(saved);
                self.class_declaration()?;
            }
            TokenKind::Keyword(KeywordId::Short | KeywordId::Long) => {
                self.match_keyword(KeywordId::Int);
                self.declarator_list()?;
            }
            kind if kind.is_basic_type() || kind == TokenKind::Ident => self.declarator_list()?,
            _ => return Err(self.error(&head, "data type or 'class' keyword expected")),
        }
        self.expect_punct(PunctuationId::Semicolon, "';' expected")?;
        Ok(())
    }

    /// `declarator ("," declarator)*`, or nothing when the type is directly followed by `;`.
    fn declarator_list(&mut self) -> PResult {
        if self.peek().kind.is_punctuation(PunctuationId::Semicolon) {
            return Ok(());
        }
        loop {
            self.declarator()?;
            if !self.match_punct(PunctuationId::Comma) {
                return Ok(());
            }
        }
    }

    /// `IDENTIFIER ("=" expression | "[" constant "]")?`
    fn declarator(&mut self) -> PResult {
        self.expect_ident()?;
        if self.match_op(OperatorId::Assign) {
            self.expression()?;
        } else if self.match_punct(PunctuationId::LBracket) {
            self.constant()?;
            self.expect_punct(PunctuationId::RBracket, "']' expected")?;
        }
        Ok(())
    }

    fn class_declaration(&mut self) -> PResult {
        self.expect_keyword(KeywordId::Class, "'class' keyword expected")?;
        self.expect_ident()?;
        self.expect_punct(PunctuationId::LBrace, "'{' expected")?;
        self.nested(|p| loop {
            let next = p.peek();
            if next.kind.is_punctuation(PunctuationId::RBrace) {
                p.advance();
                return Ok(());
            }
            if next.kind == TokenKind::End {
                return Err(p.error(&next, "'}' expected"));
            }
            p.declaration()?;
        })
    }
}
