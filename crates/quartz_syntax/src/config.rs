//! Indentation configuration for Quartz
//!
//! Only the line-significance rule is configurable. Every leading whitespace character counts as one column, so there
//! is no tab width to set.

/// Marker that turns a line into an annotation when it is the first non-whitespace character.
pub const DEFAULT_ANNOTATION_MARKER: char = '@';

/// Indentation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentConfig {
    /// First non-whitespace character of lines that carry no code
    pub annotation_marker: char,
}

impl Default for IndentConfig {
    fn default() -> Self {
        Self {
            annotation_marker: DEFAULT_ANNOTATION_MARKER,
        }
    }
}

impl IndentConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the annotation marker
    pub fn with_annotation_marker(mut self, marker: char) -> Self {
        self.annotation_marker = marker;
        self
    }

    /// Whether `line` is significant under this configuration.
    ///
    /// A line is significant when it has at least one non-whitespace character and that character is not the
    /// annotation marker.
    pub fn is_code(&self, line: &str) -> bool {
        match line.trim_start().chars().next() {
            Some(first) => first != self.annotation_marker,
            None => false,
        }
    }
}
