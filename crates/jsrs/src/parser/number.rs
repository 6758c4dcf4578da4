//! Number sub-parser.
//!
//! Four bases, optional sign, `NaN` / `Infinity` keywords, legacy octal
//! detection and overflow promotion to double. The parsed result keeps
//! the integer/float distinction so the caller can apply the 32-bit
//! classification rule.

use crate::error::{ErrorKind, ParseError};
use crate::factory::ValueFactory;
use crate::parser::Parser;

/// Numeric parse result before host-value construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Num {
    Int(i32),
    Float(f64),
}

/// Largest magnitude an `Int` may carry: the literal must sit strictly
/// inside the 32-bit range.
const INT_MAX: i64 = i32::MAX as i64 - 1;
const INT_MIN: i64 = i32::MIN as i64 + 1;

pub(crate) fn parse_number<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    pos: usize,
) -> Result<(Num, usize), ParseError> {
    let input = p.input;
    let mut i = pos;
    let mut negative = false;
    if let Some(b'+' | b'-') = input.get(i).copied() {
        negative = input[i] == b'-';
        i += 1;
    }
    match input.get(i).copied() {
        Some(b'N' | b'I') => keyword_float(p, pos, i, negative),
        Some(b'0') => match input.get(i + 1).copied() {
            Some(b'b') => integer(p, i + 2, 2, negative),
            Some(b'o') => integer(p, i + 2, 8, negative),
            Some(b'x') => integer(p, i + 2, 16, negative),
            Some(d) if d.is_ascii_digit() => noctal(p, pos, i, negative),
            _ => decimal(p, pos),
        },
        _ => decimal(p, pos),
    }
}

/// Strict `NaN` / `Infinity` spelling, sign already consumed.
fn keyword_float<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    start: usize,
    i: usize,
    negative: bool,
) -> Result<(Num, usize), ParseError> {
    let (value, len) = if p.input[i..].starts_with(b"NaN") {
        (f64::NAN, 3)
    } else if p.input[i..].starts_with(b"Infinity") {
        (f64::INFINITY, 8)
    } else {
        return Err(p.err(ErrorKind::Syntax("Invalid format"), start));
    };
    let value = if negative { -value } else { value };
    Ok((Num::Float(value), i + len))
}

/// Base-2/8/16 digits with an `i64` accumulator. Overflow promotes to a
/// double re-accumulated over the same digit set.
fn integer<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    digits: usize,
    base: u32,
    negative: bool,
) -> Result<(Num, usize), ParseError> {
    let input = p.input;
    let mut i = digits;
    let mut acc: i64 = 0;
    let mut promoted: Option<f64> = None;
    while let Some(d) = input.get(i).and_then(|&b| (b as char).to_digit(base)) {
        match &mut promoted {
            None => {
                match acc
                    .checked_mul(i64::from(base))
                    .and_then(|a| a.checked_add(i64::from(d)))
                {
                    Some(a) => acc = a,
                    None => {
                        let mut f = acc as f64;
                        f = f * f64::from(base) + f64::from(d);
                        promoted = Some(f);
                    }
                }
            }
            Some(f) => *f = *f * f64::from(base) + f64::from(d),
        }
        i += 1;
    }
    Ok((classify(acc, promoted, negative), i))
}

/// A leading zero followed by decimal digits: strictly octal spellings are
/// rejected in favor of the `0o` syntax, while any digit above 7 turns the
/// literal into a plain decimal integer.
fn noctal<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    start: usize,
    zero: usize,
    negative: bool,
) -> Result<(Num, usize), ParseError> {
    let input = p.input;
    let mut i = zero;
    let mut octal_only = true;
    while let Some(&b) = input.get(i) {
        if !b.is_ascii_digit() {
            break;
        }
        octal_only &= b <= b'7';
        i += 1;
    }
    if octal_only {
        return Err(p.err(ErrorKind::Syntax("Use new octal literal syntax"), start));
    }
    let mut acc: i64 = 0;
    let mut promoted: Option<f64> = None;
    for &b in &input[zero..i] {
        let d = i64::from(b - b'0');
        match &mut promoted {
            None => match acc.checked_mul(10).and_then(|a| a.checked_add(d)) {
                Some(a) => acc = a,
                None => promoted = Some(acc as f64 * 10.0 + d as f64),
            },
            Some(f) => *f = *f * 10.0 + d as f64,
        }
    }
    Ok((classify(acc, promoted, negative), i))
}

fn classify(acc: i64, promoted: Option<f64>, negative: bool) -> Num {
    match promoted {
        Some(f) => Num::Float(if negative { -f } else { f }),
        None => {
            let value = if negative { -acc } else { acc };
            if (INT_MIN..=INT_MAX).contains(&value) {
                Num::Int(value as i32)
            } else {
                Num::Float(value as f64)
            }
        }
    }
}

/// Base-10 literal: the consumed span is the longest prefix of
/// `[0-9.eE+-]` that still parses as a finite double.
fn decimal<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    start: usize,
) -> Result<(Num, usize), ParseError> {
    let input = p.input;
    let mut span = start;
    while let Some(&b) = input.get(span) {
        if b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-') {
            span += 1;
        } else {
            break;
        }
    }
    let mut end = span;
    let value = loop {
        if end == start {
            return Err(p.err(ErrorKind::Syntax("Invalid format"), start));
        }
        let parsed = core::str::from_utf8(&input[start..end])
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite());
        match parsed {
            Some(v) => break v,
            None => end -= 1,
        }
    };
    let text = &input[start..end];
    let fractional = text
        .iter()
        .any(|&b| matches!(b, b'.' | b'e' | b'E'));
    if fractional {
        return Ok((Num::Float(value), end));
    }
    // A pure-digit literal is an integer when it sits strictly inside the
    // 32-bit range.
    if (INT_MIN as f64..=INT_MAX as f64).contains(&value) {
        Ok((Num::Int(value as i32), end))
    } else {
        Ok((Num::Float(value), end))
    }
}
