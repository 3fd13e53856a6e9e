/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse_program()` entrypoint.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module.
type PResult<T = ()> = Result<T, SyntaxError>;

const NO_ERRORS: &str = "parser has no errors";

/// Parser state.
///
/// ## Notes
/// - Fail-fast: the first structural error unwinds through `?` to [`Parser::parse_program`]. There is no recovery.
/// - Lookahead is done by saving the lexer cursor, reading ahead and restoring it.
pub struct Parser<'src, 'sink> {
    lexer: Lexer<'src, 'sink>,
    max_nesting: usize,
    depth: usize,
}

impl<'src, 'sink> Parser<'src, 'sink> {
    /// Create a parser over `buffer` with the default [`Limits`].
    pub fn new(buffer: &'src SourceBuffer, sink: &'sink mut dyn DiagnosticSink) -> Self {
        Self::with_limits(buffer, sink, &Limits::default())
    }

    /// Create a parser with explicit token-length and nesting limits.
    pub fn with_limits(buffer: &'src SourceBuffer, sink: &'sink mut dyn DiagnosticSink, limits: &Limits) -> Self {
        Self {
            lexer: Lexer::with_limits(buffer, sink, limits),
            max_nesting: limits.max_nesting,
            depth: 0,
        }
    }

    /// Validate the whole token stream.
    ///
    /// Exactly one verdict reaches the sink: `parser has no errors` on success, `syntax error: ...` otherwise.
    /// Lexical anomalies found along the way were already reported by the lexer and do not fail the parse
    /// by themselves.
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`] encountered.
    pub fn parse_program(&mut self) -> Result<(), SyntaxError> {
        let verdict = self.program();
        match &verdict {
            Ok(()) => {
                tracing::debug!("program accepted");
                self.lexer.sink().report(Diagnostic::info(NO_ERRORS));
            }
            Err(err) => {
                tracing::debug!(line = err.line, column = err.column, expected = %err.expected, "program rejected");
                self.lexer.sink().report(err.to_diagnostic());
            }
        }
        verdict
    }
}
