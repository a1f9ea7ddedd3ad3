//! TypeScript literal grammar.
//!
//! Converts object and array literals in TypeScript/JavaScript source into
//! `serde_json::Value` trees. Only the literal subset authored artifacts use
//! is understood:
//!
//! - `object` → JSON object (`pair` members; shorthand members map to their
//!   own name; methods, spreads, and computed keys are skipped)
//! - `array` → JSON array (punctuation and comments skipped)
//! - `string` / `template_string` → JSON string
//! - `number` and negative `unary_expression` → JSON number
//! - `true` / `false` / `null` / `undefined`
//! - `as` / `satisfies` / non-null / parenthesized wrappers → the wrapped literal
//!
//! Anything else (identifiers, calls, arrow functions) becomes its source text
//! as a string, so a tree is always produced.

use ast_grep_core::Node;
use ast_grep_language::{LanguageExt, SupportLang};
use serde_json::{Map, Number, Value};

/// Parse `source` and return every outermost object or array literal, in
/// source order.
///
/// # Examples
///
/// ```
/// use ast_grep_language::SupportLang;
/// use nqa_parser::literal::parse_literals;
///
/// let values = parse_literals("export const a = { id: 'x', n: 3 }", SupportLang::TypeScript);
/// assert_eq!(values.len(), 1);
/// assert_eq!(values[0]["id"], "x");
/// assert_eq!(values[0]["n"], 3);
/// ```
#[must_use]
pub fn parse_literals(source: &str, lang: SupportLang) -> Vec<Value> {
    let root = lang.ast_grep(source);
    let mut out = Vec::new();
    collect_literals(&root.root(), &mut out);
    out
}

fn collect_literals<D: ast_grep_core::Doc>(node: &Node<D>, out: &mut Vec<Value>) {
    match node.kind().as_ref() {
        "object" | "array" => out.push(convert(node)),
        _ => {
            for child in node.children() {
                collect_literals(&child, out);
            }
        }
    }
}

/// Convert one expression node into a JSON value.
pub fn convert<D: ast_grep_core::Doc>(node: &Node<D>) -> Value {
    match node.kind().as_ref() {
        "object" => convert_object(node),
        "array" => convert_array(node),
        "string" => Value::String(unquote(&node.text())),
        "template_string" => Value::String(unescape(strip_delimiters(&node.text(), '`'))),
        "number" | "unary_expression" => {
            let text = node.text();
            parse_number(&text).unwrap_or_else(|| Value::String(text.to_string()))
        }
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" | "undefined" => Value::Null,
        "as_expression" | "satisfies_expression" | "non_null_expression" => node
            .children()
            .next()
            .map_or(Value::Null, |inner| convert(&inner)),
        "parenthesized_expression" => node
            .children()
            .find(|c| !matches!(c.kind().as_ref(), "(" | ")" | "comment"))
            .map_or(Value::Null, |inner| convert(&inner)),
        _ => Value::String(node.text().to_string()),
    }
}

fn convert_object<D: ast_grep_core::Doc>(node: &Node<D>) -> Value {
    let mut map = Map::new();
    for child in node.children() {
        match child.kind().as_ref() {
            "pair" => {
                let (Some(key), Some(value)) = (child.field("key"), child.field("value")) else {
                    continue;
                };
                if let Some(key) = property_key(&key) {
                    map.insert(key, convert(&value));
                }
            }
            "shorthand_property_identifier" => {
                let name = child.text().to_string();
                map.insert(name.clone(), Value::String(name));
            }
            _ => {}
        }
    }
    Value::Object(map)
}

fn convert_array<D: ast_grep_core::Doc>(node: &Node<D>) -> Value {
    Value::Array(
        node.children()
            .filter(|c| !matches!(c.kind().as_ref(), "[" | "]" | "," | "comment"))
            .map(|c| convert(&c))
            .collect(),
    )
}

fn property_key<D: ast_grep_core::Doc>(key: &Node<D>) -> Option<String> {
    match key.kind().as_ref() {
        "property_identifier" | "number" => Some(key.text().to_string()),
        "string" => Some(unquote(&key.text())),
        _ => None,
    }
}

fn unquote(raw: &str) -> String {
    let trimmed = raw.trim();
    let inner = if trimmed.starts_with('"') {
        strip_delimiters(trimmed, '"')
    } else {
        strip_delimiters(trimmed, '\'')
    };
    unescape(inner)
}

fn strip_delimiters(raw: &str, delimiter: char) -> &str {
    raw.strip_prefix(delimiter)
        .and_then(|rest| rest.strip_suffix(delimiter))
        .unwrap_or(raw)
}

/// Decode JavaScript string escapes.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('0') => out.push('\0'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            // Line continuation.
            Some('\n') => {}
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                push_code_point(&mut out, &hex);
            }
            Some('u') => {
                let hex: String = if chars.peek() == Some(&'{') {
                    chars.next();
                    chars.by_ref().take_while(|c| *c != '}').collect()
                } else {
                    chars.by_ref().take(4).collect()
                };
                push_code_point(&mut out, &hex);
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn push_code_point(out: &mut String, hex: &str) {
    match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
        Some(ch) => out.push(ch),
        None => out.push_str(hex),
    }
}

/// Parse a JavaScript numeric literal (optionally negated).
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn parse_number(raw: &str) -> Option<Value> {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '_' && !c.is_whitespace())
        .collect();
    let (sign, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, cleaned.strip_prefix('+').unwrap_or(&cleaned)),
    };
    if body.is_empty() {
        return None;
    }

    let lower = body.to_ascii_lowercase();
    let radix_int = if let Some(hex) = lower.strip_prefix("0x") {
        Some(i64::from_str_radix(hex, 16).ok()?)
    } else if let Some(bin) = lower.strip_prefix("0b") {
        Some(i64::from_str_radix(bin, 2).ok()?)
    } else if let Some(oct) = lower.strip_prefix("0o") {
        Some(i64::from_str_radix(oct, 8).ok()?)
    } else {
        body.parse::<i64>().ok()
    };
    if let Some(int) = radix_int {
        return Some(Value::from(sign * int));
    }

    let float = body.parse::<f64>().ok()? * sign as f64;
    if float.fract() == 0.0 && float.abs() < 9.0e15 {
        return Some(Value::from(float as i64));
    }
    Number::from_f64(float).map(Value::Number)
}
