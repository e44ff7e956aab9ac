//! Public AST types for templates.
//!
//! These types are public to enable external tooling (linters, validators).
//! The resolver does not build an AST; it scans the raw string.

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text.
    Literal(String),
    /// A placeholder: `{{name:mod1:mod2}}`
    Placeholder {
        /// Variable name.
        name: String,
        /// Modifier names in application order.
        modifiers: Vec<String>,
    },
    /// An alternative: `(singular|plural)`
    ///
    /// Always holds at least two branches. Branches past the second are
    /// ignored during resolution.
    Alternative { branches: Vec<String> },
}

impl Template {
    /// Placeholder variable names in first-seen order, without duplicates.
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Placeholder { name, .. } if !names.contains(&name.as_str()) => {
                    names.push(name);
                }
                _ => {}
            }
        }
        names
    }

    /// Modifier names referenced by any placeholder, in first-seen order.
    pub fn modifier_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder { modifiers, .. } = segment {
                for modifier in modifiers {
                    if !names.contains(&modifier.as_str()) {
                        names.push(modifier);
                    }
                }
            }
        }
        names
    }

    /// Returns true if the template contains an alternative span.
    pub fn has_alternative(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Alternative { .. }))
    }
}
