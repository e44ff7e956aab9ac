//! CLI command implementations.

mod check;
mod coverage;
mod eval;

use std::fs::read_to_string;
use std::path::Path;

use lingo::Translations;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::output::LingoDiagnostic;

pub use check::{CheckArgs, run_check};
pub use coverage::{CoverageArgs, run_coverage};
pub use eval::{EvalArgs, run_eval};

/// Read and parse a JSON translation file.
///
/// JSON errors become diagnostics pointing into the file.
pub fn read_translations(path: &Path) -> Result<Translations> {
    let content = read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Cannot read translation file {}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| LingoDiagnostic::from_json_error(path, &content, &e).into())
}
