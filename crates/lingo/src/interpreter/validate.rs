//! Runtime checks of a variable set against a template.
//!
//! The resolver silently leaves unresolved placeholders in its output.
//! These checks let callers fail instead, naming the variable that is
//! missing.

use crate::interpreter::error::{ValidationError, compute_suggestions};
use crate::interpreter::resolver::COUNT;
use crate::parser::{ParseError, parse_template};
use crate::types::Variables;

/// Variable names a template requires, in first-seen order.
///
/// `count` is never required since it defaults to `1`.
///
/// # Example
///
/// ```
/// use lingo::interpreter::required_variables;
///
/// let names = required_variables("{{name}} has {{count}} (cat|cats), {{name}}!").unwrap();
/// assert_eq!(names, vec!["name".to_string()]);
/// ```
pub fn required_variables(template: &str) -> Result<Vec<String>, ParseError> {
    let parsed = parse_template(template)?;
    Ok(parsed
        .variable_names()
        .into_iter()
        .filter(|name| *name != COUNT)
        .map(ToString::to_string)
        .collect())
}

/// Check that `variables` supplies every variable `template` requires.
///
/// Returns the first missing variable, with suggestions drawn from the
/// supplied names.
pub fn validate_variables(
    template: &str,
    variables: Option<&Variables>,
) -> Result<(), ValidationError> {
    for name in required_variables(template)? {
        let present = variables.is_some_and(|vars| vars.contains_key(&name));
        if !present {
            let suggestions = variables
                .map(|vars| compute_suggestions(&name, vars.keys().map(String::as_str)))
                .unwrap_or_default();
            return Err(ValidationError::MissingVariable { name, suggestions });
        }
    }
    Ok(())
}
