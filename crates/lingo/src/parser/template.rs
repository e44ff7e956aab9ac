//! Template string parser using winnow.
//!
//! Parses templates into an AST. Handles:
//! - Literal text segments
//! - Placeholders `{{name}}` and `{{name:mod1:mod2}}`
//! - Alternatives `(singular|plural)` with two or more branches
//!
//! A `(` that does not open a well-formed alternative is literal text, as
//! are lone `)` and `}}`. A `|` outside an alternative is an error.

use super::ast::*;
use super::error::ParseError;
use winnow::combinator::{alt, delimited, not, preceded, repeat, separated};
use winnow::prelude::*;
use winnow::token::{none_of, take_until, take_while};

/// Parse a template string into an AST.
///
/// # Example
///
/// ```
/// use lingo::parser::{parse_template, Segment};
///
/// let template = parse_template("{{count}} (apple|apples)").unwrap();
/// assert_eq!(template.variable_names(), vec!["count"]);
/// assert!(template.has_alternative());
/// assert!(matches!(template.segments[0], Segment::Placeholder { .. }));
/// ```
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                Err(trailing_error(input, remaining))
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Describe why parsing stopped before the end of input.
fn trailing_error(input: &str, remaining: &str) -> ParseError {
    let (line, column) = calculate_position(input, remaining);
    if let Some(rest) = remaining.strip_prefix("{{") {
        if rest.contains("}}") {
            return ParseError::Syntax {
                line,
                column,
                message: "placeholder has no variable name".to_string(),
            };
        }
        return ParseError::UnexpectedEof { line, column };
    }
    let message = match remaining.chars().next() {
        Some('|') => "'|' outside of an alternative".to_string(),
        Some(c) => format!("unexpected character: '{c}'"),
        None => "unexpected end of input".to_string(),
    };
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos + 1..].chars().count() + 1,
        None => consumed_str.chars().count() + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder, alternative, or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, alternative, literal_char)).parse_next(input)
}

/// Parse a placeholder: `{{name}}` or `{{name:mod1:mod2}}`
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("{{", take_until(0.., "}}"), "}}")
        .verify(|content: &str| !content.is_empty() && !content.starts_with(':'))
        .map(|content: &str| {
            let mut parts = content.split(':');
            let name = parts.next().unwrap_or_default().to_string();
            Segment::Placeholder {
                name,
                modifiers: parts.map(ToString::to_string).collect(),
            }
        })
        .parse_next(input)
}

/// Parse an alternative: `(` branch (`|` branch)+ `)`
fn alternative(input: &mut &str) -> ModalResult<Segment> {
    let branches: Vec<&str> = delimited('(', separated(2.., branch, '|'), ')').parse_next(input)?;
    Ok(Segment::Alternative {
        branches: branches.into_iter().map(ToString::to_string).collect(),
    })
}

/// Parse the raw text of one alternative branch.
fn branch<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., |c: char| !matches!(c, '(' | ')' | '|')).parse_next(input)
}

/// Parse a single literal character (not `|`, and not the start of `{{`).
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    preceded(not("{{"), none_of(['|']))
        .map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::calculate_position;

    #[test]
    fn position_counts_characters_not_bytes() {
        let input = "héllo\nwörld|";
        let remaining = &input[input.len() - 1..];
        assert_eq!(calculate_position(input, remaining), (2, 6));
    }

    #[test]
    fn position_on_first_line() {
        assert_eq!(calculate_position("ab|", "|"), (1, 3));
    }
}
