//! Static lint rules for translation templates.
//!
//! Reports templates the resolver would accept but degrade: malformed
//! spans, modifiers that are not registered, and alternative branches that
//! can never be selected.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::interpreter::ModifierRegistry;
use crate::interpreter::error::{compute_suggestions, format_suggestions};
use crate::parser::{ParseError, Segment, parse_template};
use crate::types::Translations;

/// A problem found in one template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub namespace: String,
    pub key: String,
    pub kind: LintKind,
}

/// The kind of problem a [`LintWarning`] describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintKind {
    /// The template does not parse strictly.
    Syntax(ParseError),

    /// A placeholder uses a modifier the registry does not define.
    UnknownModifier {
        modifier: String,
        suggestions: Vec<String>,
    },

    /// An alternative has branches past the second, which are never used.
    ExtraBranches { count: usize },
}

impl Display for LintWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}: ", self.namespace, self.key)?;
        match &self.kind {
            LintKind::Syntax(err) => write!(f, "{err}"),
            LintKind::UnknownModifier {
                modifier,
                suggestions,
            } => write!(
                f,
                "unknown modifier '{modifier}'{}",
                format_suggestions(suggestions)
            ),
            LintKind::ExtraBranches { count } => write!(
                f,
                "alternative has {count} branches, only the first two are used"
            ),
        }
    }
}

/// Lint one template.
///
/// Unknown modifiers are only reported when a registry is supplied.
pub fn lint_template(
    namespace: &str,
    key: &str,
    template: &str,
    modifiers: Option<&ModifierRegistry>,
) -> Vec<LintWarning> {
    let warning = |kind: LintKind| LintWarning {
        namespace: namespace.to_string(),
        key: key.to_string(),
        kind,
    };

    let parsed = match parse_template(template) {
        Ok(parsed) => parsed,
        Err(err) => return vec![warning(LintKind::Syntax(err))],
    };

    let mut warnings = Vec::new();
    if let Some(registry) = modifiers {
        for modifier in parsed.modifier_names() {
            if !registry.contains(modifier) {
                warnings.push(warning(LintKind::UnknownModifier {
                    modifier: modifier.to_string(),
                    suggestions: compute_suggestions(modifier, registry.names()),
                }));
            }
        }
    }
    for segment in &parsed.segments {
        match segment {
            Segment::Alternative { branches } if branches.len() > 2 => {
                warnings.push(warning(LintKind::ExtraBranches {
                    count: branches.len(),
                }));
            }
            _ => {}
        }
    }
    warnings
}

/// Lint every template in a table, in namespace and key order.
pub fn lint_translations(
    translations: &Translations,
    modifiers: Option<&ModifierRegistry>,
) -> Vec<LintWarning> {
    translations
        .entries()
        .flat_map(|(namespace, key, template)| lint_template(namespace, key, template, modifiers))
        .collect()
}
