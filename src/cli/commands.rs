//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use quartz_syntax::IndentConfig;
use quartz_syntax::indentation::{self, IndentedLine};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Read a source file, rejecting anything over `MAX_SOURCE_SIZE`.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be accessed or read
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    // Check file size before reading
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Resolve `source`, turning an indentation failure into a rendered diagnostic.
fn analyze<'a>(file_path: &str, source: &'a str, config: &IndentConfig) -> CliResult<Vec<IndentedLine<'a>>> {
    indentation::analyze_source(file_path, source, config)
        .map_err(|err| CliError::failure(format!("{:?}", miette::Report::new(err))))
}

/// Render one `line:level text` row per significant line.
pub fn render_levels(lines: &[IndentedLine<'_>]) -> String {
    lines
        .iter()
        .map(|line| format!("{}:{} {}", line.line_number, line.level, line.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print the indent level of every significant line in a file.
pub fn levels_file(file_path: &str, config: &IndentConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let lines = analyze(file_path, &source, config)?;

    if !lines.is_empty() {
        println!("{}", render_levels(&lines));
    }
    Ok(ExitCode::SUCCESS)
}

/// Check that the indentation of a file is consistent.
pub fn check_file(file_path: &str, config: &IndentConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let lines = analyze(file_path, &source, config)?;

    let depth = lines.iter().map(|line| line.level).max().unwrap_or(0);
    tracing::info!(file = file_path, significant = lines.len(), depth, "indentation is consistent");
    println!("✓ {} ({} significant lines, max depth {})", file_path, lines.len(), depth);
    Ok(ExitCode::SUCCESS)
}
