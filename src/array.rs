//! One-dimensional PostgreSQL array literals, e.g. `{1,2,3}` or `{"a","b"}`.
//!
//! Slice payloads travel through the value union as `Text` holding such a
//! literal. NULL elements and nested arrays are not supported.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{Result, TristateError};

/// Joins already formatted elements into a literal.
pub(crate) fn encode<I>(elements: I, quoted: bool) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut literal = String::from("{");
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            literal.push(',');
        }
        if quoted {
            literal.push('"');
            for c in element.chars() {
                if c == '"' || c == '\\' {
                    literal.push('\\');
                }
                literal.push(c);
            }
            literal.push('"');
        } else {
            literal.push_str(&element);
        }
    }
    literal.push('}');
    literal
}

/// Splits a literal into its unescaped elements.
pub(crate) fn decode(literal: &str) -> Result<Vec<String>> {
    let inner = literal
        .trim()
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| malformed(literal, "expected surrounding braces"))?;
    let mut elements = Vec::new();
    if inner.trim().is_empty() {
        return Ok(elements);
    }
    let mut chars = inner.chars().peekable();
    loop {
        skip_whitespace(&mut chars);
        let element = match chars.peek() {
            Some('"') => {
                chars.next();
                quoted(&mut chars, literal)?
            }
            Some('{') => return Err(malformed(literal, "nested arrays are not supported")),
            _ => {
                let element = unquoted(&mut chars, literal)?;
                if element.is_empty() {
                    return Err(malformed(literal, "empty element"));
                }
                if element.eq_ignore_ascii_case("null") {
                    return Err(malformed(literal, "NULL elements are not supported"));
                }
                element
            }
        };
        elements.push(element);
        skip_whitespace(&mut chars);
        match chars.next() {
            None => return Ok(elements),
            Some(',') => continue,
            Some(c) => return Err(malformed(literal, format!("unexpected '{}'", c))),
        }
    }
}

fn quoted(chars: &mut Peekable<Chars>, literal: &str) -> Result<String> {
    let mut element = String::new();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Ok(element),
            '\\' => match chars.next() {
                Some(escaped) => element.push(escaped),
                None => break,
            },
            _ => element.push(c),
        }
    }
    Err(malformed(literal, "unterminated quoted element"))
}

fn unquoted(chars: &mut Peekable<Chars>, literal: &str) -> Result<String> {
    let mut element = String::new();
    while let Some(&c) = chars.peek() {
        match c {
            ',' => break,
            '"' | '{' | '}' => return Err(malformed(literal, format!("unexpected '{}' in unquoted element", c))),
            _ => element.push(c),
        }
        chars.next();
    }
    Ok(element.trim_end().to_string())
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}

fn malformed(literal: &str, reason: impl std::fmt::Display) -> TristateError {
    TristateError::ArrayLiteral(format!("{}: {}", reason, literal))
}
