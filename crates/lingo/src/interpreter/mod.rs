//! Template resolution and the lookup layers built on it.
//!
//! [`resolve`] is the core: a forgiving single-pass scanner over one
//! template. [`Translator`] and [`Locale`] add namespace/key lookup and
//! per-language bundles; [`validate_variables`] and [`lint_template`] add
//! the strict checks the resolver deliberately skips.

mod error;
mod helper;
mod lint;
mod locale;
mod modifiers;
mod resolver;
mod translator;
mod validate;

pub use error::{LoadError, LoadWarning, TranslateError, ValidationError, compute_suggestions};
pub use helper::ModifierHelper;
pub use lint::{LintKind, LintWarning, lint_template, lint_translations};
pub use locale::{LoadTicket, Locale};
pub use modifiers::{ModifierFn, ModifierRegistry};
pub use resolver::{COUNT, resolve};
pub use translator::Translator;
pub use validate::{required_variables, validate_variables};
