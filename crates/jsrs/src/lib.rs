//! Codec for the JSTP Record Serialization (JSRS) format.
//!
//! JSRS is a textual data-interchange format — a strict superset of JSON
//! roughly aligned with ECMAScript object-literal syntax: single- or
//! double-quoted strings with the full escape repertoire, bare identifier
//! keys, numeric literals in four bases, `undefined`, `NaN` and
//! `Infinity`, array elisions, and comments anywhere between tokens.
//!
//! Three entry points:
//!
//! - [`parse`] turns one UTF-8 encoded record into a [`Value`] tree,
//! - [`stringify`] renders a [`Value`] back to canonical JSRS text,
//! - [`parse_messages`] segments a buffer of NUL-delimited records,
//!   parsing each one and returning the unterminated tail.
//!
//! ```
//! use jsrs::{parse, stringify};
//!
//! let value = parse(b"{a: 0x10, b: [1, , 'two'], /* skipped */ c: null}").unwrap();
//! assert_eq!(stringify(&value).unwrap(), "{a:16,b:[1,,'two'],c:null}");
//! ```
//!
//! Hosts with their own value representation implement [`ValueFactory`]
//! and drive [`parse_with`] / [`parse_messages_with`] instead.

mod error;
mod factory;
mod messages;
mod parser;
mod serializer;
mod skip;
mod unicode;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, ParseError};
pub use factory::{SetError, StdFactory, ValueFactory};
pub use messages::{parse_messages, parse_messages_with};
pub use parser::{parse, parse_with};
pub use serializer::stringify;
pub use value::{Array, Map, Value};
