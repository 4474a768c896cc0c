//! Indentation resolution for Quartz source.
//!
//! Turns raw source lines into one indent level per significant line. The downstream token synthesizer uses these
//! levels to emit block-start/block-end tokens.
//!
//! ## Module Structure
//!
//! - `filter` - Step 1, drop blank and annotation lines
//! - `measure` - Step 2, count leading whitespace
//! - `resolve` - Step 3, indentations to indent levels
//!
//! Each step is a pure function over a sequence and can be called on its own;
//! [`apply_indentation_algorithm`] runs all three in order.

mod filter;
mod measure;
mod resolve;

pub use filter::{SignificantLine, filter_code_lines, filter_code_lines_with, is_code, significant_lines};
pub use measure::{measure_leading_whitespaces, measure_line};
pub use resolve::calculate_indent_levels;

use crate::config::IndentConfig;
use crate::diagnostics::SourceIndentError;
use crate::errors::IndentError;

/// A significant line with everything the token synthesizer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentedLine<'a> {
    /// 1-based physical line number in the source text
    pub line_number: usize,
    pub text: &'a str,
    pub indentation: usize,
    pub level: usize,
}

/// Run filter, measure and resolve on `code` with the default configuration.
///
/// Equivalent to `calculate_indent_levels(&measure_leading_whitespaces(&filter_code_lines(code))?)`.
pub fn apply_indentation_algorithm<S: AsRef<str>>(code: &[S]) -> Result<Vec<usize>, IndentError> {
    apply_with(code, &IndentConfig::default())
}

/// [`apply_indentation_algorithm`] with a configured significance rule.
#[tracing::instrument(skip_all, fields(line_count = code.len()))]
pub fn apply_with<S: AsRef<str>>(code: &[S], config: &IndentConfig) -> Result<Vec<usize>, IndentError> {
    let lines = filter_code_lines_with(code, config);
    let indentations = measure_leading_whitespaces(&lines)?;
    calculate_indent_levels(&indentations)
}

/// Split source text into physical lines without their terminators.
///
/// Lines are separated by `\n`; a trailing `\r` is dropped so CRLF sources measure the same as LF ones.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Resolve a whole source text, keeping track of where every significant line came from.
///
/// `name` only labels the diagnostic on failure.
///
/// # Errors
///
/// A [`SourceIndentError`] pointing at the physical line on which resolution failed.
#[tracing::instrument(skip_all, fields(name = name, source_len = source.len()))]
pub fn analyze_source<'a>(
    name: &str,
    source: &'a str,
    config: &IndentConfig,
) -> Result<Vec<IndentedLine<'a>>, SourceIndentError> {
    let raw: Vec<&'a str> = split_lines(source).collect();
    let significant = significant_lines(&raw, config);
    let texts: Vec<&str> = significant.iter().map(|line| line.text).collect();

    let (indentations, levels) = measure_leading_whitespaces(&texts)
        .and_then(|indentations| {
            let levels = calculate_indent_levels(&indentations)?;
            Ok((indentations, levels))
        })
        .map_err(|err| SourceIndentError::locate(name, source, &significant, err))?;
    tracing::debug!(significant = levels.len(), "resolved indent levels");

    Ok(significant
        .iter()
        .zip(indentations)
        .zip(levels)
        .map(|((line, indentation), level)| IndentedLine {
            line_number: line.raw_index + 1,
            text: raw[line.raw_index],
            indentation,
            level,
        })
        .collect())
}
