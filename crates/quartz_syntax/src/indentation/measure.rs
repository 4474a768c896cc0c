//! Step 2: measure the indentation of each significant line.

use crate::errors::IndentError;

/// Number of leading whitespace characters in `line`.
///
/// Returns `None` for the empty line, whose indentation is undefined. Characters are counted, not bytes, and every
/// whitespace character (tab included) counts as one.
pub fn measure_line(line: &str) -> Option<usize> {
    if line.is_empty() {
        return None;
    }
    Some(line.chars().take_while(|c| c.is_whitespace()).count())
}

/// Measure every line, producing one indentation per line.
///
/// # Errors
///
/// [`IndentError::EmptyLine`] if a line is empty. Input coming out of the line filter never is.
pub fn measure_leading_whitespaces<S: AsRef<str>>(code: &[S]) -> Result<Vec<usize>, IndentError> {
    code.iter()
        .enumerate()
        .map(|(index, line)| measure_line(line.as_ref()).ok_or(IndentError::EmptyLine { index }))
        .collect()
}
