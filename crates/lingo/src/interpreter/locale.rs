//! Locale management for translation bundles.
//!
//! The Locale struct provides the user-facing API for managing language
//! selection, loading translation tables, and resolving keys.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, warn};

use crate::interpreter::error::{LoadError, LoadWarning, TranslateError};
use crate::interpreter::{ModifierRegistry, Translator, required_variables};
use crate::types::{Translations, Variables};

/// User-facing locale management.
///
/// Locale owns one [`Translator`] per language: a translation table plus the
/// modifiers its templates use. This design provides:
/// - Language-scoped tables (each language has its own bundle)
/// - Per-language modifiers (numerals and pronouns differ between languages)
/// - Clean replacement semantics (loading a language replaces its table)
///
/// # Example
///
/// ```
/// use lingo::Locale;
///
/// let mut locale = Locale::builder()
///     .language("en")
///     .build();
///
/// locale
///     .load_translations_str("en", r#"{ "general": { "hello": "Hello" } }"#)
///     .unwrap();
///
/// assert_eq!(locale.translate("general", "hello", None), "Hello");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct Locale {
    /// Current language code (e.g., "en", "de").
    #[builder(default = "en".to_string())]
    language: String,

    /// Per-language bundles.
    #[builder(skip)]
    bundles: HashMap<String, Translator>,

    /// File paths for hot-reload support: language -> PathBuf.
    /// Only populated for file-loaded translations, not string-loaded.
    #[builder(skip)]
    loaded_paths: HashMap<String, PathBuf>,

    /// Modifiers set for languages with no bundle yet, applied by their
    /// first load.
    #[builder(skip)]
    pending_modifiers: HashMap<String, ModifierRegistry>,

    /// Generation of the most recently issued [`LoadTicket`].
    #[builder(skip)]
    latest_load: u64,
}

/// A claim on a pending bundle load, issued by [`Locale::begin_load`].
///
/// Only the most recently issued ticket can apply its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    language: String,
    generation: u64,
}

impl LoadTicket {
    /// The language this load was requested for.
    pub fn language(&self) -> &str {
        &self.language
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::builder().build()
    }
}

impl Locale {
    /// Create a new Locale with default settings (English).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Locale with the specified language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Locale::builder().language(language.into()).build()
    }

    // =========================================================================
    // Language Management
    // =========================================================================

    /// Get the current language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the current language.
    ///
    /// This does not load anything; the language's bundle must already be
    /// loaded for lookups to succeed.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Languages with a loaded bundle, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    // =========================================================================
    // Bundle Access
    // =========================================================================

    /// The bundle for the current language.
    pub fn translator(&self) -> Option<&Translator> {
        self.bundles.get(&self.language)
    }

    /// The bundle for a specific language.
    pub fn translator_for(&self, language: &str) -> Option<&Translator> {
        self.bundles.get(language)
    }

    /// The translation table for a specific language.
    pub fn translations_for(&self, language: &str) -> Option<&Translations> {
        self.bundles.get(language).map(Translator::translations)
    }

    /// The modifiers for a specific language, including ones still waiting
    /// for the language's first load.
    pub fn modifiers_for(&self, language: &str) -> Option<&ModifierRegistry> {
        self.bundles
            .get(language)
            .map(Translator::modifiers)
            .or_else(|| self.pending_modifiers.get(language))
    }

    /// Set the modifiers for a language, keeping its table.
    ///
    /// If the language has no bundle yet, the modifiers are held until its
    /// translations are loaded; the language does not count as loaded until
    /// then.
    pub fn set_modifiers(&mut self, language: &str, modifiers: ModifierRegistry) {
        match self.bundles.get_mut(language) {
            Some(bundle) => bundle.set_modifiers(modifiers),
            None => {
                self.pending_modifiers.insert(language.to_string(), modifiers);
            }
        }
    }

    /// Install a complete bundle for a language, replacing any existing one.
    pub fn insert_bundle(&mut self, language: impl Into<String>, bundle: Translator) {
        let language = language.into();
        self.loaded_paths.remove(&language);
        self.pending_modifiers.remove(&language);
        self.bundles.insert(language, bundle);
    }

    // =========================================================================
    // Translation Loading
    // =========================================================================

    /// Load a JSON translation table from a file for a specific language.
    ///
    /// The file path is stored for later `reload_translations()` support.
    /// Loading the same language twice **replaces** its table. Returns the
    /// number of templates loaded.
    ///
    /// ```ignore
    /// locale.load_translations("de", "assets/i18n/de.json")?;
    /// ```
    pub fn load_translations(
        &mut self,
        language: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let count = self.load_translations_str_internal(language, &content, Some(path))?;
        self.loaded_paths
            .insert(language.to_string(), path.to_path_buf());
        Ok(count)
    }

    /// Load a JSON translation table from a string for a specific language.
    ///
    /// Translations loaded this way cannot be reloaded via
    /// `reload_translations()`.
    ///
    /// ```
    /// use lingo::Locale;
    ///
    /// let mut locale = Locale::new();
    /// let count = locale.load_translations_str("en", r#"{
    ///     "general": { "hello": "Hello", "bye": "Bye" },
    ///     "menu": { "open": "Open" }
    /// }"#).unwrap();
    /// assert_eq!(count, 3);
    /// ```
    pub fn load_translations_str(
        &mut self,
        language: &str,
        content: &str,
    ) -> Result<usize, LoadError> {
        self.loaded_paths.remove(language);
        self.load_translations_str_internal(language, content, None)
    }

    /// Hot-reload translations from the original file path.
    ///
    /// Returns an error if the translations were loaded from a string.
    pub fn reload_translations(&mut self, language: &str) -> Result<usize, LoadError> {
        let path =
            self.loaded_paths
                .get(language)
                .cloned()
                .ok_or_else(|| LoadError::NoPathForReload {
                    language: language.to_string(),
                })?;

        self.load_translations(language, path)
    }

    fn load_translations_str_internal(
        &mut self,
        language: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<usize, LoadError> {
        let translations: Translations = serde_json::from_str(content).map_err(|e| {
            let default_path = PathBuf::from(format!("<{language}>"));
            LoadError::Parse {
                path: path.map(Path::to_path_buf).unwrap_or(default_path),
                line: e.line(),
                column: e.column(),
                message: e.to_string(),
            }
        })?;

        let count = translations.len();
        match self.bundles.get_mut(language) {
            Some(bundle) => bundle.set_translations(translations),
            None => {
                let modifiers = self.pending_modifiers.remove(language).unwrap_or_default();
                self.bundles
                    .insert(language.to_string(), Translator::new(translations, modifiers));
            }
        }
        debug!(language, count, "loaded translations");
        Ok(count)
    }

    // =========================================================================
    // Asynchronous Loading
    // =========================================================================

    /// Start loading a bundle for `language`.
    ///
    /// Every call supersedes all tickets issued before it. Pass the returned
    /// ticket to [`Locale::finish_load`] once the bundle is available.
    ///
    /// Returns `None` when `language` is already the current language and
    /// its bundle is loaded: there is nothing to fetch, but any in-flight
    /// load of another language is still superseded.
    pub fn begin_load(&mut self, language: impl Into<String>) -> Option<LoadTicket> {
        let language = language.into();
        self.latest_load += 1;
        if language == self.language && self.bundles.contains_key(&language) {
            debug!(language = language.as_str(), "locale already loaded");
            return None;
        }
        let ticket = LoadTicket {
            language,
            generation: self.latest_load,
        };
        debug!(
            language = ticket.language.as_str(),
            generation = ticket.generation,
            "locale load requested"
        );
        Some(ticket)
    }

    /// Apply the result of a load started with [`Locale::begin_load`].
    ///
    /// The bundle is installed and becomes the current language only if
    /// `ticket` is the most recent one issued. `None` means the loader had
    /// nothing to apply. Returns true if the locale changed.
    ///
    /// ```
    /// use lingo::{Locale, Translations, Translator, ModifierRegistry};
    ///
    /// let mut locale = Locale::new();
    /// let slow = locale.begin_load("de").unwrap();
    /// let fast = locale.begin_load("fr").unwrap();
    ///
    /// let bundle = || Translator::new(Translations::new(), ModifierRegistry::new());
    /// assert!(locale.finish_load(fast, Some(bundle())));
    /// assert!(!locale.finish_load(slow, Some(bundle())));
    /// assert_eq!(locale.language(), "fr");
    /// ```
    pub fn finish_load(&mut self, ticket: LoadTicket, bundle: Option<Translator>) -> bool {
        if ticket.generation != self.latest_load {
            warn!(
                language = ticket.language.as_str(),
                generation = ticket.generation,
                latest = self.latest_load,
                "discarding stale locale load"
            );
            return false;
        }
        let Some(bundle) = bundle else {
            debug!(language = ticket.language.as_str(), "locale load returned no data");
            return false;
        };
        self.insert_bundle(ticket.language.clone(), bundle);
        self.language = ticket.language;
        true
    }

    /// Returns true if `ticket` is still the most recent load.
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.latest_load
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Validate a target language's table against a source language's.
    ///
    /// Checks for:
    /// - Keys in the target that do not exist in the source
    /// - Keys in the source that the target lacks
    /// - Keys whose templates require different variables
    ///
    /// Returns an empty vector if either language is not loaded.
    ///
    /// ```
    /// use lingo::{Locale, LoadWarning};
    ///
    /// let mut locale = Locale::new();
    /// locale.load_translations_str("en", r#"{ "g": { "hi": "Hi {{name}}" } }"#).unwrap();
    /// locale.load_translations_str("de", r#"{ "g": { "hi": "Hallo {{name}}", "extra": "x" } }"#).unwrap();
    ///
    /// let warnings = locale.validate_translations("en", "de");
    /// assert_eq!(warnings.len(), 1);
    /// assert!(matches!(warnings[0], LoadWarning::UnknownKey { .. }));
    /// ```
    pub fn validate_translations(
        &self,
        source_language: &str,
        target_language: &str,
    ) -> Vec<LoadWarning> {
        let (Some(source), Some(target)) = (
            self.translations_for(source_language),
            self.translations_for(target_language),
        ) else {
            return Vec::new();
        };

        let mut warnings = Vec::new();
        for (namespace, key, template) in target.entries() {
            let Some(source_template) = source.get(namespace, key) else {
                warnings.push(LoadWarning::UnknownKey {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                    language: target_language.to_string(),
                });
                continue;
            };
            let mut source_variables = required_variables(source_template).unwrap_or_default();
            let mut translation_variables = required_variables(template).unwrap_or_default();
            source_variables.sort();
            translation_variables.sort();
            if source_variables != translation_variables {
                warnings.push(LoadWarning::VariableMismatch {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                    language: target_language.to_string(),
                    source_variables,
                    translation_variables,
                });
            }
        }
        for (namespace, key, _) in source.entries() {
            if !target.contains(namespace, key) {
                warnings.push(LoadWarning::MissingKey {
                    namespace: namespace.to_string(),
                    key: key.to_string(),
                    language: target_language.to_string(),
                });
            }
        }
        warnings
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Resolve a key in the current language.
    ///
    /// Missing languages and missing templates resolve to the empty string.
    pub fn translate(&self, namespace: &str, key: &str, variables: Option<&Variables>) -> String {
        match self.translator() {
            Some(translator) => translator.translate(namespace, key, variables),
            None => {
                warn!(language = self.language.as_str(), "no translations loaded");
                String::new()
            }
        }
    }

    /// Resolve a key in the current language, failing if the language or
    /// template is missing.
    pub fn try_translate(
        &self,
        namespace: &str,
        key: &str,
        variables: Option<&Variables>,
    ) -> Result<String, TranslateError> {
        self.translator()
            .ok_or_else(|| TranslateError::LanguageNotLoaded {
                language: self.language.clone(),
            })?
            .try_translate(namespace, key, variables)
    }
}
