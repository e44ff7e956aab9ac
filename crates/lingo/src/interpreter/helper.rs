//! Helpers for writing modifier spans in template source.

/// Builds `{{variable:modifier}}` spans for one modifier.
///
/// Input may be a bare variable reference or an already-wrapped span, so
/// helpers compose:
///
/// ```
/// use lingo::ModifierHelper;
///
/// let numeral = ModifierHelper::new("numeral");
/// let capitalize = ModifierHelper::new("capitalize");
///
/// assert_eq!(numeral.apply("count"), "{{count:numeral}}");
/// assert_eq!(numeral.apply("{{count}}"), "{{count:numeral}}");
/// assert_eq!(
///     capitalize.apply(&numeral.apply("count")),
///     "{{count:numeral:capitalize}}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierHelper {
    name: String,
}

impl ModifierHelper {
    /// Create a helper for the named modifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The modifier name this helper appends.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wrap `variable` as a span applying this modifier.
    pub fn apply(&self, variable: &str) -> String {
        format!("{{{{{}:{}}}}}", strip_braces(variable), self.name)
    }
}

/// Remove an optional leading `{{` and trailing `}}`.
///
/// What remains must be non-empty and free of `}`. The leading `{{` is only
/// stripped when that leaves a valid name; if neither reading is valid the
/// input is returned as-is.
fn strip_braces(variable: &str) -> &str {
    fn inner(rest: &str) -> Option<&str> {
        let name = rest.strip_suffix("}}").unwrap_or(rest);
        (!name.is_empty() && !name.contains('}')).then_some(name)
    }
    variable
        .strip_prefix("{{")
        .and_then(inner)
        .or_else(|| inner(variable))
        .unwrap_or(variable)
}

#[cfg(test)]
mod tests {
    use super::strip_braces;

    #[test]
    fn strips_partial_wrapping() {
        assert_eq!(strip_braces("{{x"), "x");
        assert_eq!(strip_braces("x}}"), "x");
        assert_eq!(strip_braces("{{x}}"), "x");
    }

    #[test]
    fn leaves_unmatched_input_alone() {
        assert_eq!(strip_braces("{x}"), "{x}");
        assert_eq!(strip_braces("}}"), "}}");
        assert_eq!(strip_braces("{{}}"), "{{");
    }
}
