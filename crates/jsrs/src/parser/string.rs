//! String sub-parser: quoted literals and escape decoding.
//!
//! The body is borrowed from the input until the first escape; only then
//! is an owned buffer allocated, sized to the remaining span, and the
//! prefix copied over.

use std::borrow::Cow;

use crate::error::{ErrorKind, ParseError};
use crate::factory::ValueFactory;
use crate::parser::Parser;
use crate::unicode::{code_point_to_utf8, line_terminator_len};

/// Parses the quoted string whose opening `'` or `"` sits at `pos`,
/// returning the decoded contents and the position after the closing
/// quote. The quote style is fixed by the opener.
pub(crate) fn parse_string<'src, F: ValueFactory>(
    p: &Parser<'src, '_, F>,
    pos: usize,
) -> Result<(Cow<'src, [u8]>, usize), ParseError> {
    let input = p.input;
    let quote = input[pos];
    let body = pos + 1;
    let mut i = body;
    let mut owned: Option<Vec<u8>> = None;
    loop {
        let Some(&b) = input.get(i) else {
            return Err(p.err(ErrorKind::Syntax("Error while parsing string"), pos));
        };
        if b == quote {
            let bytes = match owned {
                Some(buf) => Cow::Owned(buf),
                None => Cow::Borrowed(&input[body..i]),
            };
            return Ok((bytes, i + 1));
        }
        if b == b'\\' {
            let buf = owned.get_or_insert_with(|| {
                let mut v = Vec::with_capacity(input.len() - body);
                v.extend_from_slice(&input[body..i]);
                v
            });
            if let Some(n) = line_terminator_len(&input[i + 1..]) {
                // Line continuation: the terminator is consumed, nothing
                // is emitted.
                i += 1 + n;
            } else {
                i = unescape(p, i, buf)?;
            }
            continue;
        }
        if line_terminator_len(&input[i..]).is_some() {
            return Err(p.err(ErrorKind::Syntax("Unexpected line end in string"), i));
        }
        if let Some(buf) = &mut owned {
            buf.push(b);
        }
        i += 1;
    }
}

/// Decodes the escape whose backslash sits at `esc`, appending the result
/// to `out` and returning the position after the sequence.
fn unescape<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    esc: usize,
    out: &mut Vec<u8>,
) -> Result<usize, ParseError> {
    let input = p.input;
    let Some(&b) = input.get(esc + 1) else {
        return Err(p.err(ErrorKind::Syntax("Error while parsing string"), esc));
    };
    match b {
        b'b' => out.push(0x08),
        b't' => out.push(0x09),
        b'n' => out.push(0x0A),
        b'v' => out.push(0x0B),
        b'f' => out.push(0x0C),
        b'r' => out.push(0x0D),
        b'0' => out.push(0x00),
        b'x' => {
            let Some(value) = read_hex(input, esc + 2, 2) else {
                return Err(p.err(
                    ErrorKind::UnicodeEscape("Invalid hexadecimal escape sequence"),
                    esc,
                ));
            };
            out.push(value as u8);
            return Ok(esc + 4);
        }
        b'u' => {
            let (cp, end) = read_unicode_escape(p, esc + 2, esc)?;
            // A high surrogate pairs with an immediately following \u low
            // surrogate into one astral code point; an isolated half is
            // left to the encoder's replacement rule.
            if (0xD800..0xDC00).contains(&cp) {
                if input.get(end) == Some(&b'\\') && input.get(end + 1) == Some(&b'u') {
                    if let Some(low) = read_hex(input, end + 2, 4) {
                        if (0xDC00..0xE000).contains(&low) {
                            let astral = 0x1_0000 + ((cp - 0xD800) << 10) + (low - 0xDC00);
                            push_code_point(out, astral);
                            return Ok(end + 6);
                        }
                    }
                }
            }
            push_code_point(out, cp);
            return Ok(end);
        }
        // Any other escaped byte stands for itself.
        other => out.push(other),
    }
    Ok(esc + 2)
}

/// Reads a `\u` escape body starting right after the `u`: either exactly
/// four hex digits, or `{` followed by one to six hex digits and `}`.
/// Returns the code point (possibly a surrogate half) and the position
/// after the sequence. `esc` is the backslash offset, used for errors.
pub(crate) fn read_unicode_escape<F: ValueFactory>(
    p: &Parser<'_, '_, F>,
    pos: usize,
    esc: usize,
) -> Result<(u32, usize), ParseError> {
    let input = p.input;
    if input.get(pos) == Some(&b'{') {
        let mut end = pos + 1;
        while input.get(end).is_some_and(u8::is_ascii_hexdigit) {
            end += 1;
        }
        let digits = end - (pos + 1);
        if input.get(end) != Some(&b'}') || digits == 0 || digits > 6 {
            return Err(p.err(
                ErrorKind::UnicodeEscape("Invalid Unicode code point escape"),
                esc,
            ));
        }
        let mut cp = 0u32;
        for &d in &input[pos + 1..end] {
            cp = cp << 4 | (d as char).to_digit(16).unwrap_or(0);
        }
        Ok((cp, end + 1))
    } else {
        match read_hex(input, pos, 4) {
            Some(cp) => Ok((cp, pos + 4)),
            None => Err(p.err(
                ErrorKind::UnicodeEscape("Invalid Unicode escape sequence"),
                esc,
            )),
        }
    }
}

/// Reads exactly `len` hex digits at `pos`, or `None`.
fn read_hex(input: &[u8], pos: usize, len: usize) -> Option<u32> {
    let digits = input.get(pos..pos + len)?;
    let mut value = 0u32;
    for &d in digits {
        value = value << 4 | (d as char).to_digit(16)?;
    }
    Some(value)
}

fn push_code_point(out: &mut Vec<u8>, cp: u32) {
    let mut utf8 = [0u8; 4];
    let n = code_point_to_utf8(cp, &mut utf8);
    out.extend_from_slice(&utf8[..n]);
}
