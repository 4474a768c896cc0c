#![forbid(unsafe_code)]
//! Quartz language front-end
//!
//! Quartz is an indentation-sensitive language. This crate is the command-line front door to its syntax frontend:
//! it reads `.qz` sources and reports the indent level of every significant line, or a located diagnostic when the
//! indentation is inconsistent. The resolution itself lives in `quartz_syntax`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use quartz_syntax::indentation;
pub use quartz_syntax::{IndentConfig, IndentError, SourceIndentError};
