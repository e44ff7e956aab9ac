//! Miette diagnostic wrapper for template and JSON errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use lingo::parser::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at a location in source text.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(lingo::syntax))]
pub struct LingoDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl LingoDiagnostic {
    /// Create a diagnostic for a malformed template.
    ///
    /// `name` identifies the template, e.g. `en.json#general.hello`.
    pub fn from_parse_error(name: &str, template: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let help = match err {
            ParseError::UnexpectedEof { .. } => Some("close the placeholder with '}}'".to_string()),
            ParseError::Syntax { message, .. } if message.contains('|') => {
                Some("'|' separates branches inside '(singular|plural)'".to_string())
            }
            ParseError::Syntax { .. } => None,
        };
        LingoDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            span: (char_offset(template, line, column), 1).into(),
            message: format!("syntax error: {err}"),
            help,
        }
    }

    /// Create a diagnostic for an invalid JSON translation file.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        LingoDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (char_offset(content, err.line(), err.column()), 1).into(),
            message: format!("invalid translation file: {err}"),
            help: Some("expected an object of namespaces, each an object of strings".to_string()),
        }
    }
}

/// Convert a 1-based line and character column to a byte offset, clamped
/// to the content length.
fn char_offset(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let within_line: usize = content[line_start.min(content.len())..]
        .chars()
        .take(column.saturating_sub(1))
        .map(char::len_utf8)
        .sum();
    (line_start + within_line).min(content.len())
}

#[cfg(test)]
mod tests {
    use super::char_offset;

    #[test]
    fn offset_of_second_line() {
        assert_eq!(char_offset("ab\ncd", 2, 2), 4);
    }

    #[test]
    fn offset_counts_multibyte_characters() {
        assert_eq!(char_offset("é|", 1, 2), 2);
    }

    #[test]
    fn offset_is_clamped() {
        assert_eq!(char_offset("ab", 9, 9), 2);
    }
}
