//! Modifier registry for value transformations.
//!
//! Modifiers are named functions applied by placeholders such as
//! `{{count:numeral:capitalize}}`. A name that is not registered is an
//! identity transform, never an error.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use unicode_segmentation::UnicodeSegmentation;

use crate::interpreter::ModifierHelper;
use crate::types::Value;

/// Modifier function signature.
pub type ModifierFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Registry of named modifier functions.
///
/// Registries are passed explicitly to every resolution call; there is no
/// process-wide registry. Cloning is cheap since functions are shared.
///
/// # Example
///
/// ```
/// use lingo::{ModifierRegistry, Value};
///
/// let mut modifiers = ModifierRegistry::new();
/// modifiers.register("double", |v: Value| match v {
///     Value::Number(n) => Value::Number(n * 2),
///     other => other,
/// });
///
/// assert_eq!(modifiers.apply("double", Value::from(4)), Value::Number(8));
/// assert_eq!(modifiers.apply("unknown", Value::from(4)), Value::Number(4));
/// ```
#[derive(Clone, Default)]
pub struct ModifierRegistry {
    modifiers: BTreeMap<String, ModifierFn>,
}

impl ModifierRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in text modifiers:
    /// `capitalize`, `upper` and `lower`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("capitalize", |v: Value| Value::String(capitalize(&v.to_string())));
        registry.register("upper", |v: Value| Value::String(v.to_string().to_uppercase()));
        registry.register("lower", |v: Value| Value::String(v.to_string().to_lowercase()));
        registry
    }

    /// Register a modifier, replacing any existing one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, modifier: F) -> &mut Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.modifiers.insert(name.into(), Arc::new(modifier));
        self
    }

    /// Get a modifier by name.
    pub fn get(&self, name: &str) -> Option<&ModifierFn> {
        self.modifiers.get(name)
    }

    /// Check if a modifier exists.
    pub fn contains(&self, name: &str) -> bool {
        self.modifiers.contains_key(name)
    }

    /// Apply a modifier by name. Unknown names return the value unchanged.
    pub fn apply(&self, name: &str, value: Value) -> Value {
        match self.modifiers.get(name) {
            Some(modifier) => modifier(value),
            None => value,
        }
    }

    /// Registered modifier names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modifiers.keys().map(String::as_str)
    }

    /// Number of registered modifiers.
    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    /// Returns true if no modifiers are registered.
    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Copy every modifier from `other` into this registry. Names already
    /// present are replaced.
    pub fn extend(&mut self, other: &ModifierRegistry) {
        self.modifiers.extend(
            other
                .modifiers
                .iter()
                .map(|(name, f)| (name.clone(), Arc::clone(f))),
        );
    }

    /// A syntax helper for a registered modifier.
    pub fn helper(&self, name: &str) -> Option<ModifierHelper> {
        self.contains(name).then(|| ModifierHelper::new(name))
    }

    /// One syntax helper per registered modifier, keyed by name.
    pub fn helpers(&self) -> BTreeMap<String, ModifierHelper> {
        self.names()
            .map(|name| (name.to_string(), ModifierHelper::new(name)))
            .collect()
    }
}

impl Debug for ModifierRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ModifierRegistry")
            .field("modifiers", &self.modifiers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Uppercase the first grapheme cluster, leaving the rest unchanged.
fn capitalize(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => {
            let mut result = first.to_uppercase();
            result.push_str(graphemes.as_str());
            result
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_first_grapheme() {
        assert_eq!(capitalize("two"), "Two");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("\u{e9}t\u{e9}"), "\u{c9}t\u{e9}");
        assert_eq!(capitalize("e\u{301}t\u{e9}"), "E\u{301}t\u{e9}");
    }
}
