//! Error and warning types for translation loading and lookup.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// Errors that occur during translation loading.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a translation file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON error with file location context.
    #[error("{path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Attempted to reload translations that were loaded from a string.
    #[error("cannot reload '{language}': was loaded from string, not file")]
    NoPathForReload { language: String },
}

/// Errors returned by the checked translation entry points.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// No template exists for the namespace and key.
    #[error("no template for '{namespace}.{key}'{}", format_suggestions(suggestions))]
    TemplateNotFound {
        namespace: String,
        key: String,
        suggestions: Vec<String>,
    },

    /// No bundle has been loaded for the language.
    #[error("no translations loaded for language '{language}'")]
    LanguageNotLoaded { language: String },

    /// The variable set does not satisfy the template.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors produced when checking variables against a template.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A placeholder names a variable the caller did not supply.
    #[error("missing variable '{name}'{}", format_suggestions(suggestions))]
    MissingVariable {
        name: String,
        suggestions: Vec<String>,
    },

    /// The template itself is malformed.
    #[error("malformed template: {0}")]
    Parse(#[from] ParseError),
}

/// A non-fatal problem found when comparing two languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// The target language has a key the source language lacks.
    UnknownKey {
        namespace: String,
        key: String,
        language: String,
    },

    /// The source language has a key the target language lacks.
    MissingKey {
        namespace: String,
        key: String,
        language: String,
    },

    /// Both languages define the key but require different variables.
    VariableMismatch {
        namespace: String,
        key: String,
        language: String,
        source_variables: Vec<String>,
        translation_variables: Vec<String>,
    },
}

impl Display for LoadWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            LoadWarning::UnknownKey {
                namespace,
                key,
                language,
            } => write!(
                f,
                "'{namespace}.{key}' in '{language}' does not exist in the source language"
            ),
            LoadWarning::MissingKey {
                namespace,
                key,
                language,
            } => write!(f, "'{namespace}.{key}' is not translated in '{language}'"),
            LoadWarning::VariableMismatch {
                namespace,
                key,
                language,
                source_variables,
                translation_variables,
            } => write!(
                f,
                "'{namespace}.{key}' in '{language}' uses variables [{}], source uses [{}]",
                translation_variables.join(", "),
                source_variables.join(", ")
            ),
        }
    }
}

/// Compute typo suggestions for a name from a set of candidates.
///
/// - Max distance 1 for names of 3 characters or fewer, 2 otherwise
/// - Exact matches are excluded
/// - At most 3 suggestions, closest first
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort();
    suggestions.dedup();
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

/// Render suggestions as a ", did you mean ...?" suffix.
pub(crate) fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(", did you mean '{only}'?"),
        many => format!(
            ", did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{s}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
