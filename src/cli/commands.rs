//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.
//!
//! `lex_file`/`parse_file` resolve paths and open destinations; `lex_buffer`/`parse_buffer` do the work against
//! arbitrary writers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use miette::{NamedSource, Report};
use minicpp_syntax::Limits;
use minicpp_syntax::diagnostics::{Diagnostic, DiagnosticSink, SyntaxError};
use minicpp_syntax::lexer::{Lexer, Token};
use minicpp_syntax::parser;
use minicpp_syntax::source::SourceBuffer;

use super::{CliError, CliResult, ExitCode};
use crate::loader;
use crate::sinks::WriterSink;

// ============================================================================
// Shared helpers
// ============================================================================

/// Load a source file, mapping setup failures to a CLI error.
fn load(file: &Path, limits: &Limits) -> CliResult<SourceBuffer> {
    loader::load_file(file, limits).map_err(|e| CliError::failure(format!("Error: {e}")))
}

/// Open `path` for writing, or fall back to `default`.
fn open_output(path: Option<&Path>, default: impl FnOnce() -> Box<dyn Write>) -> CliResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| CliError::failure(format!("Error creating '{}': {e}", path.display())))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(default()),
    }
}

fn output_error(err: io::Error) -> CliError {
    CliError::failure(format!("Error writing output: {err}"))
}

/// `true` if the token's text is exactly the source text at its line/column.
fn matches_source(buffer: &SourceBuffer, token: &Token) -> bool {
    let Some(line) = buffer.line_text(token.line) else {
        return false;
    };
    let found: String = line
        .chars()
        .skip(token.column.saturating_sub(1))
        .take(token.text.chars().count())
        .collect();
    found == token.text
}

// ============================================================================
// Commands
// ============================================================================

/// Tokenize a file and dump its tokens.
pub fn lex_file(
    file: &Path,
    tokens_out: Option<&Path>,
    errors_out: Option<&Path>,
    limits: &Limits,
) -> CliResult<ExitCode> {
    let buffer = load(file, limits)?;
    let mut tokens = open_output(tokens_out, || Box::new(io::stdout().lock()))?;
    let mut errors = open_output(errors_out, || Box::new(io::stderr().lock()))?;
    lex_buffer(&buffer, limits, &mut tokens, &mut errors)
}

/// Dump every token of `buffer` (end-marker included) to `tokens_out`, one per line.
///
/// Lexical diagnostics go to `errors_out`. Each token is also checked against the source text at its position; a
/// mismatch is reported as `wrong token position <token>` and fails the command.
pub fn lex_buffer(
    buffer: &SourceBuffer,
    limits: &Limits,
    tokens_out: &mut dyn Write,
    errors_out: &mut dyn Write,
) -> CliResult<ExitCode> {
    let mut sink = WriterSink::new(errors_out);
    let mut misplaced = Vec::new();
    {
        let mut lexer = Lexer::with_limits(buffer, &mut sink, limits);
        loop {
            let token = lexer.next_token();
            writeln!(tokens_out, "{token}").map_err(output_error)?;
            if token.is_end() {
                break;
            }
            if !matches_source(buffer, &token) {
                misplaced.push(token);
            }
        }
    }

    for token in &misplaced {
        sink.report(Diagnostic::error_unlocated(format!("wrong token position {token}")));
    }
    tokens_out.flush().map_err(output_error)?;
    sink.finish().map_err(output_error)?;

    if misplaced.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::failure(format!(
            "Error: {} token(s) do not match the source text at their position",
            misplaced.len()
        )))
    }
}

/// Check a file against the grammar.
///
/// A syntax error is additionally rendered to stderr with the offending token labelled.
pub fn parse_file(file: &Path, log_out: Option<&Path>, limits: &Limits) -> CliResult<ExitCode> {
    let buffer = load(file, limits)?;
    let mut log = open_output(log_out, || Box::new(io::stdout().lock()))?;

    match parse_buffer(&buffer, limits, &mut log)? {
        None => Ok(ExitCode::SUCCESS),
        Some(err) => {
            let source = NamedSource::new(file.display().to_string(), buffer.text().to_string());
            eprintln!("{:?}", Report::new(err).with_source_code(source));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Run the parser over `buffer`, writing every diagnostic to `log_out`.
///
/// Returns the syntax error, if any; it has already been written to the log.
pub fn parse_buffer(buffer: &SourceBuffer, limits: &Limits, log_out: &mut dyn Write) -> CliResult<Option<SyntaxError>> {
    let mut sink = WriterSink::new(log_out);
    let verdict = parser::check_with_limits(buffer, &mut sink, limits);
    sink.finish().map_err(output_error)?;
    Ok(verdict.err())
}
