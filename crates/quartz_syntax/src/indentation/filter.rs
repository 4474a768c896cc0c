//! Step 1: keep only the lines that carry code.

use crate::config::IndentConfig;

/// Whether a line is code, i.e. neither blank nor an annotation line.
///
/// This is the single line-significance rule shared by the whole front-end. It uses the default annotation marker
/// (`@`); see [`IndentConfig::is_code`] for a configured variant.
pub fn is_code(line: &str) -> bool {
    IndentConfig::default().is_code(line)
}

/// A retained line together with its position in the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignificantLine<'a> {
    /// 0-based index of the line in the unfiltered input
    pub raw_index: usize,
    pub text: &'a str,
}

/// Drop blank and annotation lines, preserving the order of the rest.
pub fn filter_code_lines<S: AsRef<str>>(code: &[S]) -> Vec<&str> {
    filter_code_lines_with(code, &IndentConfig::default())
}

/// [`filter_code_lines`] with a configured significance rule.
pub fn filter_code_lines_with<'a, S: AsRef<str>>(code: &'a [S], config: &IndentConfig) -> Vec<&'a str> {
    code.iter().map(AsRef::<str>::as_ref).filter(|line| config.is_code(line)).collect()
}

/// Like [`filter_code_lines_with`], but remembers where each kept line came from.
///
/// Entry `i` of the result corresponds to entry `i` of the measurer and resolver sequences, so an error index from
/// either stage can be mapped back to `raw_index` here.
pub fn significant_lines<'a, S: AsRef<str>>(code: &'a [S], config: &IndentConfig) -> Vec<SignificantLine<'a>> {
    code.iter()
        .map(AsRef::<str>::as_ref)
        .enumerate()
        .filter(|(_, line)| config.is_code(line))
        .map(|(raw_index, text)| SignificantLine { raw_index, text })
        .collect()
}
