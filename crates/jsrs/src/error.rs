use thiserror::Error;

/// Error returned by [`parse`](crate::parse) and
/// [`parse_messages`](crate::parse_messages).
///
/// `offset` is the byte position in the input at which parsing failed.
/// Recovery is never attempted: the first error aborts the whole call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub offset: usize,
}

/// The classes of parse failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The first significant byte of a value does not begin any JSRS type.
    #[error("Invalid type")]
    InvalidType,
    /// Malformed literal, missing separator or unterminated construct.
    #[error("{0}")]
    Syntax(&'static str),
    /// A keyword-shaped token failed its strict match.
    #[error("{0}")]
    Type(&'static str),
    /// Invalid `\x` or `\u` escape sequence.
    #[error("{0}")]
    UnicodeEscape(&'static str),
    /// The value builder rejected a property set.
    #[error("Cannot add property to object")]
    PropertySet,
}
