//! Strict template parser.
//!
//! The resolver is forgiving and never fails; this parser is the strict
//! counterpart used by validation, linting and the CLI. It reports the first
//! malformed span with its line and column.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::parse_template;
