//! Source-located indentation diagnostics.
//!
//! The indentation stages only know positions in the sequences they were handed. This module is the boundary where
//! such a position is zipped with the filtered lines and turned into a physical line number and a byte span that
//! `miette` can render against the original text.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::errors::IndentError;
use crate::indentation::SignificantLine;

/// An [`IndentError`] pinned to a line of a named source text.
#[derive(Debug, Error, Diagnostic)]
#[error("indentation error on line {line_number}")]
#[diagnostic(code(quartz::indent))]
pub struct SourceIndentError {
    /// 1-based physical line number of the offending line
    pub line_number: usize,
    #[source]
    pub kind: IndentError,
    #[source_code]
    src: NamedSource<String>,
    #[label("offending indentation")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl SourceIndentError {
    /// Locate `kind` in `source`.
    ///
    /// `significant` must be the filtered line table the failing stage was fed from, so that `kind.index()` addresses
    /// it. If the index is out of range the diagnostic points at the end of the source.
    pub fn locate(name: &str, source: &str, significant: &[SignificantLine<'_>], kind: IndentError) -> Self {
        let (line_number, span) = match significant.get(kind.index()) {
            Some(line) => (line.raw_index + 1, indentation_span(source, line)),
            None => (source.split('\n').count(), SourceSpan::from((source.len(), 0))),
        };
        let help = kind.help().map(|h| h.to_string());

        Self {
            line_number,
            kind,
            src: NamedSource::new(name, source.to_string()),
            span,
            help,
        }
    }

    /// Byte span of the labelled region in the source text.
    pub fn span(&self) -> SourceSpan {
        self.span
    }
}

/// Byte offset at which physical line `raw_index` (0-based) starts.
fn line_start(source: &str, raw_index: usize) -> usize {
    source.split('\n').take(raw_index).map(|line| line.len() + 1).sum()
}

/// Span over the leading whitespace of `line`, or over its first character when it is not indented.
fn indentation_span(source: &str, line: &SignificantLine<'_>) -> SourceSpan {
    let start = line_start(source, line.raw_index);
    let body = line.text.trim_start();
    let len = match line.text.len() - body.len() {
        0 => body.chars().next().map_or(0, char::len_utf8),
        leading => leading,
    };
    SourceSpan::from((start, len))
}
