//! CLI module for the Quartz front-end
//!
//! ## Commands
//!
//! - `levels <file>` - Print the indent level of every significant line
//! - `check <file>` - Verify that the indentation of a file is consistent
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

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use quartz_syntax::IndentConfig;
use quartz_syntax::config::DEFAULT_ANNOTATION_MARKER;
use thiserror::Error;

use crate::version::QUARTZ_VERSION;

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
#[derive(Debug, Error)]
#[error("{message}")]
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

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// The Quartz language front-end
#[derive(Parser, Debug)]
#[command(name = "quartz")]
#[command(version = QUARTZ_VERSION)]
#[command(about = "Resolve Quartz indentation into block nesting levels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the indent level of every significant line
    Levels(SourceArgs),

    /// Check that indentation is consistent
    Check(SourceArgs),
}

/// Arguments shared by every command that reads a source file.
#[derive(Args, Debug)]
pub struct SourceArgs {
    /// Source file to analyze
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// First non-whitespace character of annotation lines
    #[arg(long, value_name = "CHAR", default_value_t = DEFAULT_ANNOTATION_MARKER)]
    pub marker: char,
}

impl SourceArgs {
    fn config(&self) -> IndentConfig {
        IndentConfig::new().with_annotation_marker(self.marker)
    }
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
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Levels(args) => commands::levels_file(&args.file.to_string_lossy(), &args.config()),
        Command::Check(args) => commands::check_file(&args.file.to_string_lossy(), &args.config()),
    }
}

// ============================================================================
// Tests
// ============================================================================
