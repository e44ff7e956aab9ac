//! Integration tests for template resolution.

use lingo::{ModifierRegistry, Value, params, resolve};

fn numerals() -> ModifierRegistry {
    let mut modifiers = ModifierRegistry::with_builtins();
    modifiers.register("numeral", |v: Value| {
        let word = match v.as_number() {
            Some(0) => "zero",
            Some(1) => "one",
            Some(2) => "two",
            _ => return v,
        };
        Value::from(word)
    });
    modifiers
}

// =============================================================================
// Plain Text
// =============================================================================

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(resolve("Hello", None, None), "Hello");
}

#[test]
fn empty_template() {
    assert_eq!(resolve("", Some(&params! { "x" => 1 }), None), "");
}

#[test]
fn plain_text_ignores_variables() {
    let vars = params! { "name" => "John", "count" => 5 };
    assert_eq!(
        resolve("Nothing to see here.", Some(&vars), Some(&numerals())),
        "Nothing to see here."
    );
}

#[test]
fn single_braces_are_literal() {
    assert_eq!(resolve("{name} }} {", None, None), "{name} }} {");
}

#[test]
fn parentheses_without_bar_are_literal() {
    assert_eq!(resolve("Done (mostly).", None, None), "Done (mostly).");
}

// =============================================================================
// Placeholders
// =============================================================================

#[test]
fn placeholder_substitutes_string() {
    let vars = params! { "name" => "John" };
    assert_eq!(
        resolve("My name is {{name}}", Some(&vars), None),
        "My name is John"
    );
}

#[test]
fn placeholder_substitutes_numbers() {
    let vars = params! { "n" => 42, "f" => 2.5 };
    assert_eq!(resolve("{{n}}/{{f}}", Some(&vars), None), "42/2.5");
}

#[test]
fn placeholder_repeated_and_adjacent() {
    let vars = params! { "a" => "x", "b" => "y" };
    assert_eq!(resolve("{{a}}{{b}}{{a}}", Some(&vars), None), "xyx");
}

#[test]
fn count_defaults_to_one() {
    assert_eq!(resolve("{{count}}", None, None), "1");
    assert_eq!(resolve("{{count}}", Some(&params! { "other" => 3 }), None), "1");
}

#[test]
fn count_is_an_ordinary_variable() {
    assert_eq!(resolve("{{count}}", Some(&params! { "count" => 7 }), None), "7");
}

#[test]
fn missing_variable_passes_through() {
    assert_eq!(resolve("{{x}}", None, None), "{{x}}");
    assert_eq!(
        resolve("Hi {{x:upper:lower}}!", Some(&params! { "y" => 1 }), None),
        "Hi {{x:upper:lower}}!"
    );
}

#[test]
fn zero_and_empty_string_are_values() {
    let vars = params! { "zero" => 0, "empty" => "" };
    assert_eq!(resolve("[{{zero}}][{{empty}}]", Some(&vars), None), "[0][]");
}

#[test]
fn unicode_around_placeholders() {
    let vars = params! { "name" => "Zoë" };
    assert_eq!(
        resolve("¡Hola, {{name}}! 👋", Some(&vars), None),
        "¡Hola, Zoë! 👋"
    );
}

// =============================================================================
// Modifiers
// =============================================================================

#[test]
fn modifier_chain_applies_left_to_right() {
    let mut modifiers = ModifierRegistry::new();
    modifiers.register("a", |v: Value| Value::String(format!("{v}1")));
    modifiers.register("b", |v: Value| Value::String(format!("{v}2")));
    let vars = params! { "x" => "Z" };
    assert_eq!(resolve("{{x:a:b}}", Some(&vars), Some(&modifiers)), "Z12");
    assert_eq!(resolve("{{x:b:a}}", Some(&vars), Some(&modifiers)), "Z21");
}

#[test]
fn unknown_modifier_is_identity() {
    let vars = params! { "x" => "Z" };
    assert_eq!(resolve("{{x:nope}}", Some(&vars), Some(&numerals())), "Z");
}

#[test]
fn absent_registry_treats_every_modifier_as_unknown() {
    let vars = params! { "x" => "z" };
    assert_eq!(resolve("{{x:upper}}", Some(&vars), None), "z");
}

#[test]
fn numeral_modifier_on_count() {
    let vars = params! { "count" => 0 };
    assert_eq!(
        resolve(
            "{{count:numeral}} (apple|apples) in the basket",
            Some(&vars),
            Some(&numerals())
        ),
        "zero apples in the basket"
    );
}

#[test]
fn numeral_then_capitalize() {
    let vars = params! { "count" => 2 };
    assert_eq!(
        resolve("{{count:numeral:capitalize}}", Some(&vars), Some(&numerals())),
        "Two"
    );
}

#[test]
fn modifier_applies_to_default_count() {
    assert_eq!(
        resolve("{{count:numeral}}", None, Some(&numerals())),
        "one"
    );
}

// =============================================================================
// Alternatives
// =============================================================================

#[test]
fn alternative_selects_by_count() {
    for (count, expected) in [(1, "A"), (0, "B"), (2, "B"), (7, "B"), (-1, "B")] {
        let vars = params! { "count" => count };
        assert_eq!(resolve("(A|B)", Some(&vars), None), expected, "count = {count}");
    }
}

#[test]
fn apples_in_the_basket() {
    let template = "There is {{count}} (apple|apples) in the basket";
    assert_eq!(resolve(template, None, None), "There is 1 apple in the basket");
    assert_eq!(
        resolve(template, Some(&params! {}), None),
        "There is 1 apple in the basket"
    );
    assert_eq!(
        resolve(template, Some(&params! { "count" => 0 }), None),
        "There is 0 apples in the basket"
    );
    assert_eq!(
        resolve(template, Some(&params! { "count" => 2 }), None),
        "There is 2 apples in the basket"
    );
}

#[test]
fn float_one_is_singular() {
    let vars = params! { "count" => 1.0 };
    assert_eq!(resolve("(day|days)", Some(&vars), None), "day");
    let vars = params! { "count" => 1.5 };
    assert_eq!(resolve("(day|days)", Some(&vars), None), "days");
}

#[test]
fn non_numeric_count_is_plural() {
    let vars = params! { "count" => "1" };
    assert_eq!(resolve("(item|items)", Some(&vars), None), "items");
}

#[test]
fn extra_branches_are_ignored() {
    assert_eq!(resolve("(a|b|c)", Some(&params! { "count" => 5 }), None), "b");
    assert_eq!(resolve("(a|b|c)", None, None), "a");
}

#[test]
fn empty_branches() {
    assert_eq!(resolve("item(|s)", Some(&params! { "count" => 3 }), None), "items");
    assert_eq!(resolve("item(|s)", None, None), "item");
}

#[test]
fn several_alternatives_in_one_template() {
    let template = "(There is|There are) {{count}} (cat|cats) here";
    assert_eq!(resolve(template, None, None), "There is 1 cat here");
    assert_eq!(
        resolve(template, Some(&params! { "count" => 3 }), None),
        "There are 3 cats here"
    );
}

#[test]
fn nearest_paren_starts_the_singular_branch() {
    let vars = params! { "count" => 1 };
    assert_eq!(resolve("(note (a|b)", Some(&vars), None), "(note a");
}

#[test]
fn branches_are_raw_text() {
    let vars = params! { "count" => 2, "x" => "X" };
    assert_eq!(resolve("(one|{{x}} more)", Some(&vars), None), "{{x}} more");
}

// =============================================================================
// Malformed Input
// =============================================================================

#[test]
fn unterminated_placeholder_is_literal_to_end() {
    let vars = params! { "name" => "John" };
    assert_eq!(
        resolve("Hi {{name} and (a|b)", Some(&vars), None),
        "Hi {{name} and (a|b)"
    );
}

#[test]
fn placeholder_after_unterminated_alternative_still_resolves() {
    let vars = params! { "name" => "John" };
    assert_eq!(
        resolve("(a|b {{name}}", Some(&vars), None),
        "(a|b John"
    );
}

#[test]
fn bar_without_paren_is_literal() {
    assert_eq!(resolve("a | b", None, None), "a | b");
    assert_eq!(resolve("|", None, None), "|");
}

#[test]
fn bar_after_consumed_alternative_is_literal() {
    assert_eq!(resolve("(a|b) c|d)", None, None), "a c|d)");
}

#[test]
fn empty_placeholder_passes_through() {
    assert_eq!(resolve("{{}}", None, None), "{{}}");
}
