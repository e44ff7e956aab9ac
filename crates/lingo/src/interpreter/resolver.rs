//! Template resolution engine.
//!
//! A single left-to-right scan over the template that substitutes
//! placeholders, applies modifier chains and selects alternative branches.
//! The scan never fails: malformed spans degrade to literal text.
//!
//! Malformed input is handled as follows:
//! - A `{{` with no later `}}` is copied, with the rest of the template, as
//!   literal text.
//! - A `|` with no preceding plain-text `(` since the last alternative is a
//!   literal `|`.
//! - A `|` with no later `)` is a literal `|`; scanning continues after it.
//! - `count` selects the singular branch only when it is the number one.
//!   Strings (even `"1"`), negative numbers and every other number select
//!   the plural branch.

use std::iter;

use crate::interpreter::ModifierRegistry;
use crate::types::{Value, Variables};

/// Name of the implicit variable that selects alternative branches.
pub const COUNT: &str = "count";

/// Resolve a template against variables and modifiers.
///
/// Absent `variables` behaves as an empty set and absent `modifiers` treats
/// every modifier as unknown. `count` defaults to `1` when not supplied.
///
/// # Example
///
/// ```
/// use lingo::{params, resolve};
///
/// assert_eq!(resolve("Hello", None, None), "Hello");
/// assert_eq!(
///     resolve("There is {{count}} (apple|apples)", Some(&params! { "count" => 0 }), None),
///     "There is 0 apples"
/// );
/// assert_eq!(resolve("There is {{count}} (apple|apples)", None, None), "There is 1 apple");
/// assert_eq!(resolve("Hi {{name}}", None, None), "Hi {{name}}");
/// ```
pub fn resolve(
    template: &str,
    variables: Option<&Variables>,
    modifiers: Option<&ModifierRegistry>,
) -> String {
    Scanner {
        source: template,
        pos: 0,
        output: String::with_capacity(template.len()),
        variables,
        modifiers,
        open_paren: None,
    }
    .run()
}

/// Position of the most recent plain-text `(`.
struct OpenParen {
    /// Output length before the `(` was copied.
    output_len: usize,
    /// Source offset just past the `(`.
    source_pos: usize,
}

struct Scanner<'a> {
    source: &'a str,
    pos: usize,
    output: String,
    variables: Option<&'a Variables>,
    modifiers: Option<&'a ModifierRegistry>,
    open_paren: Option<OpenParen>,
}

impl Scanner<'_> {
    fn run(mut self) -> String {
        while let Some(c) = self.source[self.pos..].chars().next() {
            if self.source[self.pos..].starts_with("{{") {
                self.placeholder();
            } else if c == '|' {
                self.alternative();
            } else {
                if c == '(' {
                    self.open_paren = Some(OpenParen {
                        output_len: self.output.len(),
                        source_pos: self.pos + 1,
                    });
                }
                self.output.push(c);
                self.pos += c.len_utf8();
            }
        }
        self.output
    }

    /// Handle a `{{` at the cursor.
    fn placeholder(&mut self) {
        let body_start = self.pos + 2;
        let Some(body_len) = self.source[body_start..].find("}}") else {
            self.output.push_str(&self.source[self.pos..]);
            self.pos = self.source.len();
            return;
        };
        let body = &self.source[body_start..body_start + body_len];
        self.pos = body_start + body_len + 2;

        let mut parts = body.split(':');
        let name = parts.next().unwrap_or_default();
        match self.lookup(name) {
            Some(value) => {
                let value = parts.fold(value, |value, modifier| match self.modifiers {
                    Some(registry) => registry.apply(modifier, value),
                    None => value,
                });
                self.output.push_str(&value.to_string());
            }
            None => {
                self.output.push_str("{{");
                self.output.push_str(body);
                self.output.push_str("}}");
            }
        }
    }

    /// Handle a `|` at the cursor.
    fn alternative(&mut self) {
        let branches_start = self.pos + 1;
        let close = self.source[branches_start..].find(')');
        let (Some(open), Some(branches_len)) = (self.open_paren.take(), close) else {
            self.output.push('|');
            self.pos = branches_start;
            return;
        };

        let singular = &self.source[open.source_pos..self.pos];
        let rest = &self.source[branches_start..branches_start + branches_len];
        let mut branches = iter::once(singular).chain(rest.split('|'));
        let selected = if self.count_is_one() {
            branches.next()
        } else {
            branches.nth(1)
        };

        self.output.truncate(open.output_len);
        self.output.push_str(selected.unwrap_or_default());
        self.pos = branches_start + branches_len + 1;
    }

    /// Look up a variable, supplying the default `count`.
    fn lookup(&self, name: &str) -> Option<Value> {
        match self.variables.and_then(|vars| vars.get(name)) {
            Some(value) => Some(value.clone()),
            None if name == COUNT => Some(Value::Number(1)),
            None => None,
        }
    }

    fn count_is_one(&self) -> bool {
        self.lookup(COUNT).is_some_and(|count| count.is_one())
    }
}
