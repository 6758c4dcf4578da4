//! NUL-delimited record stream driver.

use crate::error::{ErrorKind, ParseError};
use crate::factory::{StdFactory, ValueFactory};
use crate::parser::Parser;
use crate::skip::skip;
use crate::value::Value;

/// Parses a stream of NUL-delimited JSRS object records, appending each
/// parsed record to `sink` and returning the unterminated tail verbatim.
///
/// Every complete segment must hold exactly one `{…}` object, optionally
/// surrounded by whitespace and comments. Bytes past the last NUL are the
/// tail; a buffer without any NUL is all tail.
///
/// # Examples
///
/// ```
/// use jsrs::parse_messages;
///
/// let mut sink = Vec::new();
/// let tail = parse_messages(b"{a:1}\x00{b:2}\x00par", &mut sink).unwrap();
/// assert_eq!(sink.len(), 2);
/// assert_eq!(tail, b"par");
/// ```
///
/// # Errors
///
/// The first failing record aborts the call; `sink` keeps the records
/// parsed before it. Error offsets are absolute in `input`.
pub fn parse_messages<'src>(
    input: &'src [u8],
    sink: &mut Vec<Value>,
) -> Result<&'src [u8], ParseError> {
    parse_messages_with(input, &StdFactory, sink)
}

/// [`parse_messages`] constructing records through `factory`.
///
/// # Errors
///
/// See [`parse_messages`].
pub fn parse_messages_with<'src, F: ValueFactory>(
    input: &'src [u8],
    factory: &F,
    sink: &mut Vec<F::Value>,
) -> Result<&'src [u8], ParseError> {
    let mut parsed_length = 0;
    for i in 0..input.len() {
        if input[i] != 0 {
            continue;
        }
        let segment = &input[parsed_length..i];
        let parser = Parser {
            input: segment,
            base: parsed_length,
            factory,
        };
        let pos = skip(segment, 0);
        if segment.get(pos) != Some(&b'{') {
            return Err(parser.err(ErrorKind::Syntax("Invalid message type"), pos));
        }
        let (value, end) = parser.parse_object(pos)?;
        let end = end + skip(segment, end);
        if end != segment.len() {
            return Err(parser.err(ErrorKind::Syntax("Invalid format"), end));
        }
        sink.push(value);
        parsed_length = i + 1;
    }
    Ok(&input[parsed_length..])
}
