//! Recursive-descent JSRS parser.
//!
//! A single significant byte selects the sub-parser (type dispatch, no
//! backtracking); sub-parsers consume their span and hand back the new
//! position, invoking the skipper between every lexical element.

mod number;
mod string;

use std::borrow::Cow;

use crate::error::{ErrorKind, ParseError};
use crate::factory::{StdFactory, ValueFactory};
use crate::skip::skip;
use crate::unicode::{code_point_to_utf8, is_id_part, is_id_start, utf8_to_code_point};
use crate::value::Value;

pub(crate) use number::Num;

/// Value class selected by the leading byte of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Undefined,
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// Parses one complete JSRS record into a [`Value`].
///
/// Leading and trailing whitespace and comments are permitted; anything
/// else around the single value is an error.
///
/// # Examples
///
/// ```
/// use jsrs::{Value, parse};
///
/// let v = parse(b"[1, 'two', // comment\n true]").unwrap();
/// assert_eq!(
///     v,
///     Value::Array(vec![
///         Value::Int(1),
///         Value::String("two".into()),
///         Value::Bool(true),
///     ])
/// );
/// ```
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; the offset points at the
/// offending byte.
pub fn parse(input: &[u8]) -> Result<Value, ParseError> {
    parse_with(input, &StdFactory)
}

/// Parses one complete JSRS record, constructing values through `factory`.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with<F: ValueFactory>(input: &[u8], factory: &F) -> Result<F::Value, ParseError> {
    let parser = Parser {
        input,
        base: 0,
        factory,
    };
    let pos = skip(input, 0);
    let (value, pos, _) = parser.parse_value(pos)?;
    let pos = pos + skip(input, pos);
    if pos != input.len() {
        return Err(parser.err(ErrorKind::Syntax("Invalid format"), pos));
    }
    Ok(value)
}

pub(crate) struct Parser<'src, 'f, F> {
    pub(crate) input: &'src [u8],
    /// Added to every error offset; non-zero when parsing a segment of a
    /// larger buffer.
    pub(crate) base: usize,
    pub(crate) factory: &'f F,
}

impl<'src, F: ValueFactory> Parser<'src, '_, F> {
    pub(crate) fn err(&self, kind: ErrorKind, pos: usize) -> ParseError {
        ParseError {
            kind,
            offset: self.base + pos,
        }
    }

    /// Selects the sub-parser from the byte at `pos`. Keyword-led types
    /// are pre-checked against their full spelling when enough input
    /// remains, so dispatch never backtracks.
    fn classify(&self, pos: usize) -> Result<Kind, ParseError> {
        let rest = &self.input[pos..];
        let kind = match rest.first().copied() {
            Some(b',' | b']') => Kind::Undefined,
            Some(b'{') => Kind::Object,
            Some(b'[') => Kind::Array,
            Some(b'"' | b'\'') => Kind::String,
            Some(b't' | b'f') => Kind::Bool,
            Some(b'n') => {
                if rest.len() >= 4 && &rest[..4] != b"null" {
                    return Err(self.err(ErrorKind::InvalidType, pos));
                }
                Kind::Null
            }
            Some(b'u') => {
                if rest.len() >= 9 && &rest[..9] != b"undefined" {
                    return Err(self.err(ErrorKind::InvalidType, pos));
                }
                Kind::Undefined
            }
            Some(b'N' | b'I') => Kind::Number,
            Some(b) if b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-') => Kind::Number,
            _ => return Err(self.err(ErrorKind::InvalidType, pos)),
        };
        Ok(kind)
    }

    /// Dispatches on the byte at `pos` and parses one value, returning the
    /// value, the position after its span, and the dispatched kind.
    pub(crate) fn parse_value(&self, pos: usize) -> Result<(F::Value, usize, Kind), ParseError> {
        let kind = self.classify(pos)?;
        let (value, end) = match kind {
            Kind::Undefined => self.parse_undefined(pos)?,
            Kind::Null => self.parse_null(pos)?,
            Kind::Bool => self.parse_bool(pos)?,
            Kind::Number => {
                let (num, end) = number::parse_number(self, pos)?;
                let value = match num {
                    Num::Int(v) => self.factory.int(v),
                    Num::Float(v) => self.factory.number(v),
                };
                (value, end)
            }
            Kind::String => {
                let (bytes, end) = string::parse_string(self, pos)?;
                (self.factory.string(&bytes), end)
            }
            Kind::Array => self.parse_array(pos)?,
            Kind::Object => self.parse_object(pos)?,
        };
        Ok((value, end, kind))
    }

    /// `undefined` keyword, or the zero-width elision before `,` / `]`.
    fn parse_undefined(&self, pos: usize) -> Result<(F::Value, usize), ParseError> {
        match self.input[pos] {
            b',' | b']' => Ok((self.factory.undefined(), pos)),
            _ if self.input[pos..].starts_with(b"undefined") => {
                Ok((self.factory.undefined(), pos + 9))
            }
            _ => Err(self.err(ErrorKind::Type("Invalid format of undefined value"), pos)),
        }
    }

    fn parse_null(&self, pos: usize) -> Result<(F::Value, usize), ParseError> {
        if self.input[pos..].starts_with(b"null") {
            Ok((self.factory.null(), pos + 4))
        } else {
            Err(self.err(ErrorKind::Type("Invalid format: expected null"), pos))
        }
    }

    fn parse_bool(&self, pos: usize) -> Result<(F::Value, usize), ParseError> {
        if self.input[pos..].starts_with(b"true") {
            Ok((self.factory.bool(true), pos + 4))
        } else if self.input[pos..].starts_with(b"false") {
            Ok((self.factory.bool(false), pos + 5))
        } else {
            Err(self.err(ErrorKind::Type("Invalid format: expected boolean"), pos))
        }
    }

    /// Array body, `pos` at the opening `[`. A bare `,` in element
    /// position appends an undefined slot; a `]` there closes the array
    /// without appending.
    pub(crate) fn parse_array(&self, pos: usize) -> Result<(F::Value, usize), ParseError> {
        let mut array = self.factory.array_new();
        let mut i = pos + 1;
        loop {
            i += skip(self.input, i);
            match self.input.get(i).copied() {
                None => return Err(self.err(ErrorKind::Syntax("Missing closing bracket"), i)),
                Some(b']') => return Ok((self.factory.array_build(array), i + 1)),
                Some(b',') => {
                    // Elision: the slot is filled, nothing is consumed.
                    self.factory.array_push(&mut array, self.factory.undefined());
                }
                Some(_) => {
                    let (value, end, _) = self.parse_value(i)?;
                    self.factory.array_push(&mut array, value);
                    i = end;
                }
            }
            i += skip(self.input, i);
            match self.input.get(i).copied() {
                Some(b',') => i += 1,
                Some(b']') => return Ok((self.factory.array_build(array), i + 1)),
                Some(_) => {
                    return Err(self.err(
                        ErrorKind::Syntax("Invalid format in array: missed comma"),
                        i,
                    ));
                }
                None => return Err(self.err(ErrorKind::Syntax("Missing closing bracket"), i)),
            }
        }
    }

    /// Object body, `pos` at the opening `{`. Entries whose value is
    /// undefined are not inserted.
    pub(crate) fn parse_object(&self, pos: usize) -> Result<(F::Value, usize), ParseError> {
        let mut object = self.factory.object_new();
        let mut i = pos + 1;
        loop {
            i += skip(self.input, i);
            match self.input.get(i).copied() {
                None => return Err(self.err(ErrorKind::Syntax("Missing closing brace"), i)),
                Some(b'}') => return Ok((self.factory.object_build(object), i + 1)),
                Some(_) => {}
            }
            let (key, after_key) = self.parse_key(i)?;
            i = after_key + skip(self.input, after_key);
            if self.input.get(i) != Some(&b':') {
                return Err(self.err(ErrorKind::Syntax("Unexpected token"), i));
            }
            i += 1;
            i += skip(self.input, i);
            let (value, after_value, kind) = self.parse_value(i)?;
            if kind != Kind::Undefined {
                self.factory
                    .object_set(&mut object, &key, value)
                    .map_err(|_| self.err(ErrorKind::PropertySet, i))?;
            }
            i = after_value + skip(self.input, after_value);
            match self.input.get(i).copied() {
                Some(b',') => i += 1,
                Some(b'}') => return Ok((self.factory.object_build(object), i + 1)),
                Some(_) => {
                    return Err(self.err(ErrorKind::Syntax("Invalid format in object"), i));
                }
                None => return Err(self.err(ErrorKind::Syntax("Missing closing brace"), i)),
            }
        }
    }

    /// One object key: a quoted string, a numeric literal (rendered to its
    /// canonical decimal form), or an identifier.
    fn parse_key(&self, pos: usize) -> Result<(Cow<'src, [u8]>, usize), ParseError> {
        match self.input[pos] {
            b'"' | b'\'' => string::parse_string(self, pos),
            b if b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-') => {
                let (num, end) = number::parse_number(self, pos)?;
                let mut text = String::new();
                match num {
                    Num::Int(v) => crate::serializer::write_i32(&mut text, v),
                    Num::Float(v) => crate::serializer::write_f64(&mut text, v),
                }
                Ok((Cow::Owned(text.into_bytes()), end))
            }
            _ => self.parse_identifier(pos),
        }
    }

    /// Bare identifier: an ID_Start code point (or a `\u` escape decoding
    /// to one) followed by ID_Part code points or escapes. Unescaped
    /// identifiers borrow from the input.
    fn parse_identifier(&self, pos: usize) -> Result<(Cow<'src, [u8]>, usize), ParseError> {
        let mut i = pos;
        let mut decoded: Option<Vec<u8>> = None;
        let mut first = true;
        while let Some(&b) = self.input.get(i) {
            if b == b'\\' {
                if self.input.get(i + 1) != Some(&b'u') {
                    return Err(self.err(
                        ErrorKind::UnicodeEscape("Invalid Unicode escape sequence"),
                        i,
                    ));
                }
                let (cp, end) = string::read_unicode_escape(self, i + 2, i)?;
                if !(if first { is_id_start(cp) } else { is_id_part(cp) }) {
                    return Err(self.err(ErrorKind::Syntax("Unexpected identifier"), i));
                }
                let buf = decoded.get_or_insert_with(|| self.input[pos..i].to_vec());
                let mut utf8 = [0u8; 4];
                let n = code_point_to_utf8(cp, &mut utf8);
                buf.extend_from_slice(&utf8[..n]);
                i = end;
            } else {
                let (cp, len) = utf8_to_code_point(&self.input[i..]);
                if !(if first { is_id_start(cp) } else { is_id_part(cp) }) {
                    break;
                }
                if let Some(buf) = &mut decoded {
                    buf.extend_from_slice(&self.input[i..i + len]);
                }
                i += len;
            }
            first = false;
        }
        if i == pos {
            return Err(self.err(ErrorKind::Syntax("Unexpected identifier"), pos));
        }
        let key = match decoded {
            Some(buf) => Cow::Owned(buf),
            None => Cow::Borrowed(&self.input[pos..i]),
        };
        Ok((key, i))
    }
}
