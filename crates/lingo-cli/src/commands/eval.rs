//! Implementation of the `lingo eval` command.

use std::path::PathBuf;

use lingo::interpreter::validate_variables;
use lingo::{ModifierRegistry, Translator, Value, Variables, resolve};
use serde::Serialize;
use tracing::debug;

use super::read_translations;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Template string to resolve
    #[arg(long, conflicts_with = "key", required_unless_present = "key")]
    pub template: Option<String>,

    /// Translation file (.json) to look the key up in
    #[arg(long, env = "LINGO_TRANSLATIONS")]
    pub translations: Option<PathBuf>,

    /// Namespace of the key
    #[arg(long)]
    pub namespace: Option<String>,

    /// Key to resolve (with --translations)
    #[arg(long, requires_all = ["translations", "namespace"])]
    pub key: Option<String>,

    /// Variables in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// Enable the built-in modifiers (capitalize, upper, lower)
    #[arg(long)]
    pub builtins: bool,

    /// Fail if the template uses a variable that was not supplied
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Convert a command-line value: integers, then floats, then strings.
fn parse_value(raw: String) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = raw.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(raw)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let modifiers = if args.builtins {
        ModifierRegistry::with_builtins()
    } else {
        ModifierRegistry::new()
    };

    let variables: Variables = args
        .params
        .into_iter()
        .map(|(k, v)| (k, parse_value(v)))
        .collect();
    debug!(count = variables.len(), "parsed variables");

    let outcome = match (&args.template, &args.translations, &args.namespace, &args.key) {
        (Some(template), ..) => {
            if args.strict {
                validate_variables(template, Some(&variables))
                    .map(|()| resolve(template, Some(&variables), Some(&modifiers)))
                    .map_err(|e| format!("{e}"))
            } else {
                Ok(resolve(template, Some(&variables), Some(&modifiers)))
            }
        }
        (None, Some(path), Some(namespace), Some(key)) => {
            let translator = Translator::new(read_translations(path)?, modifiers);
            let result = if args.strict {
                translator.translate_checked(namespace, key, Some(&variables))
            } else {
                translator.try_translate(namespace, key, Some(&variables))
            };
            result.map_err(|e| format!("{e}"))
        }
        _ => {
            return Err(miette::miette!(
                "Either --template or --translations, --namespace and --key is required"
            ));
        }
    };

    match outcome {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                println!("{result}");
            }
            Ok(exitcode::OK)
        }
        Err(message) => {
            if args.json {
                let output = serde_json::json!({ "error": message });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output)
                        .expect("JSON serialization should not fail")
                );
            } else {
                eprintln!("Evaluation error: {message}");
            }
            Ok(exitcode::DATAERR)
        }
    }
}
