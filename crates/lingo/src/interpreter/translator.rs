//! Namespace and key lookup over a translation table.

use tracing::warn;

use crate::interpreter::error::{TranslateError, compute_suggestions};
use crate::interpreter::{ModifierRegistry, resolve, validate_variables};
use crate::types::{Translations, Variables};

/// A translation table bound to the modifiers its templates use.
///
/// # Example
///
/// ```
/// use lingo::{ModifierRegistry, Translations, Translator, params};
///
/// let mut table = Translations::new();
/// table.insert("general", "apples", "There is {{count}} (apple|apples) in the basket");
///
/// let t = Translator::new(table, ModifierRegistry::new());
/// assert_eq!(t.translate("general", "apples", None), "There is 1 apple in the basket");
/// assert_eq!(
///     t.translate("general", "apples", Some(&params! { "count" => 2 })),
///     "There is 2 apples in the basket"
/// );
/// assert_eq!(t.translate("general", "missing", None), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Translator {
    translations: Translations,
    modifiers: ModifierRegistry,
}

impl Translator {
    /// Bind a table to a modifier registry.
    pub fn new(translations: Translations, modifiers: ModifierRegistry) -> Self {
        Self {
            translations,
            modifiers,
        }
    }

    /// The underlying translation table.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }

    /// The modifier registry passed to every resolution.
    pub fn modifiers(&self) -> &ModifierRegistry {
        &self.modifiers
    }

    /// Replace the translation table, keeping the modifiers.
    pub fn set_translations(&mut self, translations: Translations) {
        self.translations = translations;
    }

    /// Replace the modifier registry, keeping the table.
    pub fn set_modifiers(&mut self, modifiers: ModifierRegistry) {
        self.modifiers = modifiers;
    }

    /// The raw template for a namespace and key.
    pub fn template(&self, namespace: &str, key: &str) -> Option<&str> {
        self.translations.get(namespace, key)
    }

    /// Resolve the template for a namespace and key.
    ///
    /// A missing template resolves to the empty string.
    pub fn translate(&self, namespace: &str, key: &str, variables: Option<&Variables>) -> String {
        match self.template(namespace, key) {
            Some(template) => resolve(template, variables, Some(&self.modifiers)),
            None => {
                warn!(namespace, key, "no template found");
                String::new()
            }
        }
    }

    /// Resolve the template for a namespace and key, failing if it is
    /// missing.
    pub fn try_translate(
        &self,
        namespace: &str,
        key: &str,
        variables: Option<&Variables>,
    ) -> Result<String, TranslateError> {
        let template = self.require_template(namespace, key)?;
        Ok(resolve(template, variables, Some(&self.modifiers)))
    }

    /// Like [`Translator::try_translate`], but also fails if the variable set
    /// lacks a variable the template uses.
    pub fn translate_checked(
        &self,
        namespace: &str,
        key: &str,
        variables: Option<&Variables>,
    ) -> Result<String, TranslateError> {
        let template = self.require_template(namespace, key)?;
        validate_variables(template, variables)?;
        Ok(resolve(template, variables, Some(&self.modifiers)))
    }

    fn require_template(&self, namespace: &str, key: &str) -> Result<&str, TranslateError> {
        self.template(namespace, key)
            .ok_or_else(|| TranslateError::TemplateNotFound {
                namespace: namespace.to_string(),
                key: key.to_string(),
                suggestions: compute_suggestions(key, self.translations.keys(namespace)),
            })
    }
}
