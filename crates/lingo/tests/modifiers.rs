//! Integration tests for modifier registries and syntax helpers.

use lingo::{ModifierHelper, ModifierRegistry, Value, params, resolve};

// =============================================================================
// Registry
// =============================================================================

#[test]
fn empty_registry() {
    let modifiers = ModifierRegistry::new();
    assert!(modifiers.is_empty());
    assert!(!modifiers.contains("upper"));
    assert_eq!(modifiers.apply("upper", Value::from("a")), Value::from("a"));
}

#[test]
fn builtins_are_registered() {
    let modifiers = ModifierRegistry::with_builtins();
    assert_eq!(
        modifiers.names().collect::<Vec<_>>(),
        vec!["capitalize", "lower", "upper"]
    );
}

#[test]
fn register_replaces_existing() {
    let mut modifiers = ModifierRegistry::new();
    modifiers.register("m", |_| Value::from("first"));
    modifiers.register("m", |_| Value::from("second"));
    assert_eq!(modifiers.len(), 1);
    assert_eq!(modifiers.apply("m", Value::from(0)), Value::from("second"));
}

#[test]
fn extend_merges_registries() {
    let mut base = ModifierRegistry::with_builtins();
    let mut extra = ModifierRegistry::new();
    extra.register("upper", |_| Value::from("replaced"));
    extra.register("twice", |v: Value| Value::String(format!("{v}{v}")));
    base.extend(&extra);

    assert_eq!(base.len(), 4);
    assert_eq!(base.apply("upper", Value::from("x")), Value::from("replaced"));
    assert_eq!(base.apply("twice", Value::from(4)), Value::from("44"));
}

#[test]
fn builtins_stringify_numbers() {
    let modifiers = ModifierRegistry::with_builtins();
    assert_eq!(modifiers.apply("upper", Value::from(3)), Value::from("3"));
}

#[test]
fn builtin_case_modifiers() {
    let modifiers = ModifierRegistry::with_builtins();
    let vars = params! { "word" => "straße" };
    assert_eq!(
        resolve("{{word:upper}} {{word:capitalize}}", Some(&vars), Some(&modifiers)),
        "STRASSE Straße"
    );
    let vars = params! { "word" => "LOUD" };
    assert_eq!(
        resolve("{{word:lower}}", Some(&vars), Some(&modifiers)),
        "loud"
    );
}

#[test]
fn capitalize_empty_string() {
    let modifiers = ModifierRegistry::with_builtins();
    assert_eq!(modifiers.apply("capitalize", Value::from("")), Value::from(""));
}

#[test]
fn modifier_may_change_value_type() {
    let mut modifiers = ModifierRegistry::new();
    modifiers.register("len", |v: Value| Value::from(v.to_string().chars().count()));
    modifiers.register("double", |v: Value| match v {
        Value::Number(n) => Value::Number(n * 2),
        other => other,
    });
    let vars = params! { "word" => "hello" };
    assert_eq!(
        resolve("{{word:len:double}}", Some(&vars), Some(&modifiers)),
        "10"
    );
}

#[test]
fn registry_is_shareable_across_threads() {
    let modifiers = ModifierRegistry::with_builtins();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let modifiers = modifiers.clone();
            std::thread::spawn(move || {
                let vars = params! { "n" => i, "w" => "ok" };
                resolve("{{w:upper}} {{n}}", Some(&vars), Some(&modifiers))
            })
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["OK 0", "OK 1", "OK 2", "OK 3"]);
}

// =============================================================================
// Helpers
// =============================================================================

#[test]
fn helper_wraps_bare_and_delimited_names() {
    let numeral = ModifierHelper::new("numeral");
    assert_eq!(numeral.name(), "numeral");
    assert_eq!(numeral.apply("count"), "{{count:numeral}}");
    assert_eq!(numeral.apply("{{count}}"), "{{count:numeral}}");
}

#[test]
fn helpers_compose_into_chains() {
    let numeral = ModifierHelper::new("numeral");
    let capitalize = ModifierHelper::new("capitalize");
    assert_eq!(
        capitalize.apply(&numeral.apply("count")),
        "{{count:numeral:capitalize}}"
    );
}

#[test]
fn registry_helpers_only_for_registered_names() {
    let modifiers = ModifierRegistry::with_builtins();
    assert!(modifiers.helper("upper").is_some());
    assert!(modifiers.helper("numeral").is_none());

    let helpers = modifiers.helpers();
    assert_eq!(helpers.len(), 3);
    assert_eq!(helpers["lower"].apply("x"), "{{x:lower}}");
}

#[test]
fn helper_output_resolves() {
    let modifiers = ModifierRegistry::with_builtins();
    let upper = modifiers.helper("upper").unwrap();
    let template = format!("Hello {}", upper.apply("name"));
    let vars = params! { "name" => "ada" };
    assert_eq!(resolve(&template, Some(&vars), Some(&modifiers)), "Hello ADA");
}
