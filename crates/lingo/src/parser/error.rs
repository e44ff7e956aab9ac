//! Parse error types for templates.

use thiserror::Error;

/// An error that occurred during strict template parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// A `{{` with no closing `}}`.
    #[error("unterminated placeholder starting at {line}:{column}")]
    UnexpectedEof { line: usize, column: usize },
}

impl ParseError {
    /// The 1-based line and column of the error.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::Syntax { line, column, .. } | ParseError::UnexpectedEof { line, column } => {
                (*line, *column)
            }
        }
    }
}
