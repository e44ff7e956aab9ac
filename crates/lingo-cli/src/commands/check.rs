//! Implementation of the `lingo check` command.

use std::path::PathBuf;

use lingo::interpreter::{LintKind, lint_translations};
use lingo::{ModifierRegistry, Value};
use miette::Report;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::read_translations;
use crate::output::LingoDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Translation files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Known modifier names (comma-separated). Enables unknown-modifier checks.
    #[arg(long, value_delimiter = ',')]
    pub modifiers: Vec<String>,

    /// Treat the built-in modifiers as known
    #[arg(long)]
    pub builtins: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one lint warning.
#[derive(Debug, Serialize)]
struct WarningJson {
    file: String,
    namespace: String,
    key: String,
    message: String,
}

/// Build the registry the check compares modifier names against, if any.
fn known_modifiers(args: &CheckArgs) -> Option<ModifierRegistry> {
    if args.modifiers.is_empty() && !args.builtins {
        return None;
    }
    let mut registry = if args.builtins {
        ModifierRegistry::with_builtins()
    } else {
        ModifierRegistry::new()
    };
    for name in &args.modifiers {
        registry.register(name.as_str(), |v: Value| v);
    }
    Some(registry)
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let modifiers = known_modifiers(&args);
    let mut json_warnings = Vec::new();
    let mut total = 0;

    for path in &args.files {
        let translations = read_translations(path)?;
        let warnings = lint_translations(&translations, modifiers.as_ref());
        total += warnings.len();

        for warning in &warnings {
            if args.json {
                json_warnings.push(WarningJson {
                    file: path.display().to_string(),
                    namespace: warning.namespace.clone(),
                    key: warning.key.clone(),
                    message: warning.to_string(),
                });
            } else if let LintKind::Syntax(err) = &warning.kind {
                let template = translations
                    .get(&warning.namespace, &warning.key)
                    .unwrap_or_default();
                let name = format!("{}#{}.{}", path.display(), warning.namespace, warning.key);
                let diagnostic = LingoDiagnostic::from_parse_error(&name, template, err);
                eprintln!("{:?}", Report::new(diagnostic));
            } else {
                eprintln!(
                    "{} {}: {}",
                    "warning:".if_supports_color(Stream::Stderr, |t| t.yellow()),
                    path.display(),
                    warning
                );
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json_warnings)
                .expect("JSON serialization should not fail")
        );
    } else if total == 0 {
        println!(
            "{} {} file(s) checked",
            "ok:".if_supports_color(Stream::Stdout, |t| t.green()),
            args.files.len()
        );
    } else {
        println!("{total} warning(s) found");
    }

    if total == 0 {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
