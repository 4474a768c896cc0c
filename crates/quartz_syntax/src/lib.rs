//! Shared syntax frontend for the Quartz language: indentation resolution.
//!
//! Quartz blocks are delimited by indentation. This crate decides, for every significant source line, how deeply it is
//! nested. The lexer consumes the resulting indent levels to synthesize block-start/block-end tokens.
//!
//! ## Notes
//! - Every stage is a pure function over an in-memory sequence; there is no file I/O and no shared state, so all of
//!   them are safe to call concurrently on independent inputs.
//! - All whitespace characters count alike. Tabs are not expanded.
//! - The first inconsistency aborts the whole resolution. There is no recovery.
//!
//! ## Examples
//! ```rust
//! use quartz_syntax::indentation;
//!
//! let lines = ["def main():", "", "    @ entry point", "    return 0"];
//! let levels = indentation::apply_indentation_algorithm(&lines).unwrap();
//! assert_eq!(levels, vec![0, 1]);
//! ```
//!
//! ## See also
//! - [`diagnostics::SourceIndentError`] for mapping a failure back to a physical source line.

pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod indentation;

pub use config::IndentConfig;
pub use diagnostics::SourceIndentError;
pub use errors::IndentError;
