//! Tests for static template lint rules.

use insta::assert_snapshot;
use lingo::interpreter::{LintKind, lint_template, lint_translations};
use lingo::{ModifierRegistry, Translations, Value};

fn registry() -> ModifierRegistry {
    let mut modifiers = ModifierRegistry::with_builtins();
    modifiers.register("numeral", |v: Value| v);
    modifiers
}

fn render(translations: &Translations, modifiers: Option<&ModifierRegistry>) -> String {
    lint_translations(translations, modifiers)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn clean_template_has_no_warnings() {
    let warnings = lint_template(
        "general",
        "apples",
        "{{count:numeral:capitalize}} (apple|apples)",
        Some(&registry()),
    );
    assert!(warnings.is_empty());
}

#[test]
fn unknown_modifier_with_suggestion() {
    let warnings = lint_template("g", "k", "{{count:numerl}}", Some(&registry()));
    assert_eq!(warnings.len(), 1);
    assert_eq!(
        warnings[0].kind,
        LintKind::UnknownModifier {
            modifier: "numerl".to_string(),
            suggestions: vec!["numeral".to_string()],
        }
    );
}

#[test]
fn modifiers_not_checked_without_registry() {
    assert!(lint_template("g", "k", "{{count:anything}}", None).is_empty());
}

#[test]
fn syntax_error_stops_other_checks() {
    let warnings = lint_template("g", "k", "{{x:nope", Some(&registry()));
    assert_eq!(warnings.len(), 1);
    assert!(matches!(warnings[0].kind, LintKind::Syntax(_)));
}

#[test]
fn lint_report_for_table() {
    let mut table = Translations::new();
    table.insert("general", "apples", "{{count}} (apple|apples|applez)");
    table.insert("general", "hello", "Hello");
    table.insert("general", "name", "My name is {{name:uper}}");
    table.insert("menu", "broken", "Open {{file");
    table.insert("menu", "pipe", "a|b");

    assert_snapshot!(render(&table, Some(&registry())), @r"
    general.apples: alternative has 3 branches, only the first two are used
    general.name: unknown modifier 'uper', did you mean 'upper'?
    menu.broken: unterminated placeholder starting at 1:6
    menu.pipe: syntax error at 1:2: '|' outside of an alternative
    ");
}
