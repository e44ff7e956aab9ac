//! Coverage command implementation.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use clap::Args;
use lingo::Translations;
use miette::Result;
use serde::Serialize;

use super::read_translations;
use crate::output::table::{LanguageCoverage, format_coverage_table};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language file (e.g., en.json).
    #[arg(long)]
    pub source: PathBuf,

    /// Languages to check coverage for (comma-separated).
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Directory containing translation files. Defaults to source file directory.
    #[arg(long, env = "LINGO_TRANSLATIONS_DIR")]
    pub translations: Option<PathBuf>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Qualified `namespace.key` names of every template in a table.
fn qualified_keys(translations: &Translations) -> BTreeSet<String> {
    translations
        .entries()
        .map(|(namespace, key, _)| format!("{namespace}.{key}"))
        .collect()
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let source_keys = qualified_keys(&read_translations(&args.source)?);
    let source_count = source_keys.len();

    // Determine base directory for translation files
    let base_dir = args
        .translations
        .clone()
        .or_else(|| args.source.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));

    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &args.lang {
        let lang_file = base_dir.join(format!("{lang}.json"));

        let translated_keys = if lang_file.exists() {
            qualified_keys(&read_translations(&lang_file)?)
        } else {
            // File doesn't exist - all keys are missing
            BTreeSet::new()
        };

        let missing: Vec<String> = source_keys.difference(&translated_keys).cloned().collect();
        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated: source_count - missing.len(),
            missing,
        });
    }

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data)
            .expect("JSON serialization should not fail");
        println!("{json_output}");
    } else {
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{table}");

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {name}");
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::qualified_keys;
    use lingo::Translations;

    #[test]
    fn keys_are_namespace_qualified() {
        let mut table = Translations::new();
        table.insert("menu", "open", "Open");
        table.insert("general", "hello", "Hello");
        let keys: Vec<String> = qualified_keys(&table).into_iter().collect();
        assert_eq!(keys, vec!["general.hello", "menu.open"]);
    }
}
