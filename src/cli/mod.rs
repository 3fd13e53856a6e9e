//! CLI module for the mini-C++ recognizer
//!
//! ## Commands
//!
//! - `lex <file>` - Dump every token with its location
//! - `parse <file>` - Check the file against the grammar
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use minicpp_syntax::Limits;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Tokenizer and syntax checker for mini-C++
#[derive(Parser, Debug)]
#[command(name = "minicpp")]
#[command(version = VERSION)]
#[command(about = "Tokenizer and syntax checker for mini-C++", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Tokenize a file and dump every token with its location
    Lex {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Token dump destination (default: stdout)
        #[arg(short = 'o', long = "tokens", value_name = "PATH")]
        tokens: Option<PathBuf>,
        /// Diagnostic destination (default: stderr)
        #[arg(short = 'e', long = "errors", value_name = "PATH")]
        errors: Option<PathBuf>,
        /// Maximum identifier/literal length
        #[arg(long, value_name = "N")]
        max_token_len: Option<usize>,
    },

    /// Check a file against the grammar
    Parse {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Log destination for all diagnostics (default: stdout)
        #[arg(short = 'o', long = "log", value_name = "PATH")]
        log: Option<PathBuf>,
        /// Maximum nesting depth of blocks and bracketed expressions
        #[arg(long, value_name = "N")]
        max_nesting: Option<usize>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Lex {
            file,
            tokens,
            errors,
            max_token_len,
        } => {
            let mut limits = Limits::default();
            if let Some(len) = max_token_len {
                limits = limits.with_max_token_len(len);
            }
            commands::lex_file(&file, tokens.as_deref(), errors.as_deref(), &limits)
        }
        Command::Parse { file, log, max_nesting } => {
            let mut limits = Limits::default();
            if let Some(depth) = max_nesting {
                limits = limits.with_max_nesting(depth);
            }
            commands::parse_file(&file, log.as_deref(), &limits)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_lex() {
        let cli = Cli::try_parse_from(["minicpp", "lex", "prog.mcpp"]).unwrap();
        if let Command::Lex {
            file, tokens, errors, ..
        } = cli.command
        {
            assert_eq!(file, PathBuf::from("prog.mcpp"));
            assert!(tokens.is_none());
            assert!(errors.is_none());
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_lex_destinations() {
        let cli = Cli::try_parse_from([
            "minicpp",
            "lex",
            "prog.mcpp",
            "-o",
            "tokens.txt",
            "--errors",
            "errors.txt",
            "--max-token-len",
            "31",
        ])
        .unwrap();
        if let Command::Lex {
            tokens,
            errors,
            max_token_len,
            ..
        } = cli.command
        {
            assert_eq!(tokens, Some(PathBuf::from("tokens.txt")));
            assert_eq!(errors, Some(PathBuf::from("errors.txt")));
            assert_eq!(max_token_len, Some(31));
        } else {
            panic!("Expected Lex command");
        }
    }

    #[test]
    fn test_cli_parse_parse() {
        let cli = Cli::try_parse_from(["minicpp", "parse", "prog.mcpp", "--log", "log.txt", "--max-nesting", "8"])
            .unwrap();
        if let Command::Parse { log, max_nesting, .. } = cli.command {
            assert_eq!(log, Some(PathBuf::from("log.txt")));
            assert_eq!(max_nesting, Some(8));
        } else {
            panic!("Expected Parse command");
        }
    }

    #[test]
    fn test_cli_requires_subcommand_and_file() {
        assert!(Cli::try_parse_from(["minicpp"]).is_err());
        assert!(Cli::try_parse_from(["minicpp", "parse"]).is_err());
        assert!(Cli::try_parse_from(["minicpp", "lex", "a", "--max-nesting", "3"]).is_err());
    }

    #[test]
    fn test_execute_missing_file_fails() {
        let cli = Cli::try_parse_from(["minicpp", "parse", "/nonexistent/minicpp/prog.mcpp"]).unwrap();
        let err = execute(cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("cannot read"));
    }
}
