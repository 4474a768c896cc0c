//! Error types for indentation resolution.
//!
//! The resolver has exactly one domain failure, an indentation inconsistency. The measurer adds a second variant for
//! its input contract (it must never be handed an empty line). Both carry the position in the sequence the failing
//! stage was given; mapping that position back to a physical source line is the caller's job (see
//! [`crate::diagnostics`]).

use miette::Diagnostic;
use thiserror::Error;

/// Failure of one of the indentation stages.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum IndentError {
    /// A dedent that does not land exactly on an enclosing block boundary.
    ///
    /// `index` is the position of the offending entry in the resolver input, `previous` and `current` are the
    /// indentations of the line before it and of the line itself.
    #[error("inconsistent indentation: dedent from {previous} to {current} does not match any enclosing block")]
    #[diagnostic(
        code(quartz::indent::inconsistent),
        help("dedent to exactly the indentation of an enclosing block")
    )]
    Inconsistent { index: usize, previous: usize, current: usize },

    /// The measurer was handed an empty line. Filtered input never contains one.
    #[error("cannot measure the indentation of an empty line (entry {index})")]
    #[diagnostic(
        code(quartz::indent::empty_line),
        help("run the line filter before measuring indentation")
    )]
    EmptyLine { index: usize },
}

impl IndentError {
    /// Position of the failing entry in the sequence the failing stage received.
    pub fn index(&self) -> usize {
        match self {
            IndentError::Inconsistent { index, .. } | IndentError::EmptyLine { index } => *index,
        }
    }
}
