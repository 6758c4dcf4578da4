//! Canonical JSRS serialization.

use std::fmt::Write;

use crate::value::Value;

/// Serializes `value` to canonical JSRS text.
///
/// Returns `None` only for function values. Undefined array elements
/// serialize as elisions, object entries holding undefined or function
/// values are omitted, and keys are emitted bare whenever they form an
/// ASCII identifier.
///
/// # Examples
///
/// ```
/// use jsrs::{Value, parse, stringify};
///
/// let v = parse(b"{a: 1, b: 'x\\n', c: [1, 2, , 3]}").unwrap();
/// assert_eq!(stringify(&v).unwrap(), "{a:1,b:'x\\n',c:[1,2,,3]}");
/// ```
#[must_use]
pub fn stringify(value: &Value) -> Option<String> {
    if matches!(value, Value::Function) {
        return None;
    }
    let mut out = String::new();
    write_value(&mut out, value);
    Some(out)
}

fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::Undefined => out.push_str("undefined"),
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Int(v) => write_i32(out, *v),
        Value::Number(v) => write_f64(out, *v),
        Value::String(s) => write_quoted(out, s),
        Value::Date(iso) => {
            out.push('\'');
            out.push_str(iso);
            out.push('\'');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if !matches!(item, Value::Undefined | Value::Function) {
                    write_value(out, item);
                }
                if i != items.len() - 1 {
                    out.push(',');
                }
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            let mut first = true;
            for (key, entry) in map {
                if matches!(entry, Value::Undefined | Value::Function) {
                    continue;
                }
                if !first {
                    out.push(',');
                }
                first = false;
                write_key(out, key);
                out.push(':');
                write_value(out, entry);
            }
            out.push('}');
        }
        Value::Function => {}
    }
}

pub(crate) fn write_i32(out: &mut String, value: i32) {
    let _ = write!(out, "{value}");
}

/// Shortest round-trip decimal form, with the non-finite values spelled
/// the way the parser reads them back.
pub(crate) fn write_f64(out: &mut String, value: f64) {
    if value.is_nan() {
        out.push_str("NaN");
    } else if value == f64::INFINITY {
        out.push_str("Infinity");
    } else if value == f64::NEG_INFINITY {
        out.push_str("-Infinity");
    } else {
        let _ = write!(out, "{value}");
    }
}

/// Single-quoted string literal. Only ASCII control bytes, the backslash
/// and the quote are escaped; multibyte UTF-8 passes through verbatim.
fn write_quoted(out: &mut String, s: &str) {
    out.push('\'');
    for c in s.chars() {
        match c {
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\u{B}' => out.push_str("\\v"),
            '\u{C}' => out.push_str("\\f"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\u{7F}' => out.push_str("\\u007f"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('\'');
}

fn write_key(out: &mut String, key: &str) {
    if is_bare_key(key) {
        out.push_str(key);
    } else {
        write_quoted(out, key);
    }
}

/// A key may be emitted without quotes when it matches
/// `[A-Za-z_][A-Za-z0-9_]*`. The test is ASCII-only even though the
/// parser accepts full Unicode identifiers.
fn is_bare_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == b'_')
        && bytes[1..]
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || b == b'_')
}
