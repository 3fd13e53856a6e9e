/// Check a source buffer against the grammar with the default [`Limits`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Errors
/// Returns the first [`SyntaxError`]; the same error has already been reported to `sink`.
pub fn check(buffer: &SourceBuffer, sink: &mut dyn DiagnosticSink) -> Result<(), SyntaxError> {
    check_with_limits(buffer, sink, &Limits::default())
}

/// Same as [`check`], with explicit limits.
#[tracing::instrument(skip_all, fields(source_len = buffer.len(), max_nesting = limits.max_nesting))]
pub fn check_with_limits(
    buffer: &SourceBuffer,
    sink: &mut dyn DiagnosticSink,
    limits: &Limits,
) -> Result<(), SyntaxError> {
    Parser::with_limits(buffer, sink, limits).parse_program()
}
