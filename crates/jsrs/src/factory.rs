//! Abstraction over value construction.
//!
//! The parser never touches a concrete value representation: it drives a
//! [`ValueFactory`], so the same parsing core can populate a host engine's
//! heap as easily as the crate's own [`Value`] tree.

use bstr::ByteSlice;

use crate::value::{Map, Value};

/// Returned by [`ValueFactory::object_set`] when the host rejects a
/// property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetError;

/// Builder interface the parser drives to construct values.
///
/// String and key payloads arrive as decoded UTF-8 bytes: escape sequences
/// have already been resolved, but the input may have smuggled in invalid
/// sequences, so implementations decide how to handle them (the bundled
/// [`StdFactory`] substitutes U+FFFD).
pub trait ValueFactory {
    type Value;
    type Array;
    type Object;

    fn undefined(&self) -> Self::Value;
    fn null(&self) -> Self::Value;
    fn bool(&self, value: bool) -> Self::Value;
    fn int(&self, value: i32) -> Self::Value;
    fn number(&self, value: f64) -> Self::Value;
    fn string(&self, bytes: &[u8]) -> Self::Value;

    fn array_new(&self) -> Self::Array;
    fn array_push(&self, array: &mut Self::Array, value: Self::Value);
    fn array_build(&self, array: Self::Array) -> Self::Value;

    fn object_new(&self) -> Self::Object;
    /// Inserts an entry, replacing any previous value for `key`.
    ///
    /// # Errors
    ///
    /// Hosts may refuse a set; the parser surfaces that as a
    /// [`PropertySet`](crate::ErrorKind::PropertySet) error.
    fn object_set(
        &self,
        object: &mut Self::Object,
        key: &[u8],
        value: Self::Value,
    ) -> Result<(), SetError>;
    fn object_build(&self, object: Self::Object) -> Self::Value;
}

/// Factory producing the crate's own [`Value`] tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdFactory;

impl ValueFactory for StdFactory {
    type Value = Value;
    type Array = Vec<Value>;
    type Object = Map;

    #[inline]
    fn undefined(&self) -> Value {
        Value::Undefined
    }

    #[inline]
    fn null(&self) -> Value {
        Value::Null
    }

    #[inline]
    fn bool(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    #[inline]
    fn int(&self, value: i32) -> Value {
        Value::Int(value)
    }

    #[inline]
    fn number(&self, value: f64) -> Value {
        Value::Number(value)
    }

    #[inline]
    fn string(&self, bytes: &[u8]) -> Value {
        Value::String(bytes.to_str_lossy().into_owned())
    }

    #[inline]
    fn array_new(&self) -> Vec<Value> {
        Vec::new()
    }

    #[inline]
    fn array_push(&self, array: &mut Vec<Value>, value: Value) {
        array.push(value);
    }

    #[inline]
    fn array_build(&self, array: Vec<Value>) -> Value {
        Value::Array(array)
    }

    #[inline]
    fn object_new(&self) -> Map {
        Map::new()
    }

    #[inline]
    fn object_set(&self, object: &mut Map, key: &[u8], value: Value) -> Result<(), SetError> {
        object.insert(key.to_str_lossy().into_owned(), value);
        Ok(())
    }

    #[inline]
    fn object_build(&self, object: Map) -> Value {
        Value::Object(object)
    }
}
