//! The in-memory JSRS value tree.
//!
//! [`Value`] is the representation produced by [`parse`](crate::parse) via
//! [`StdFactory`](crate::StdFactory) and consumed by
//! [`stringify`](crate::stringify). Hosts with their own heap plug in
//! through the [`ValueFactory`](crate::ValueFactory) trait instead.

use indexmap::IndexMap;

/// Insertion-ordered object map, matching the key order of the source text.
pub type Map = IndexMap<String, Value>;
pub type Array = Vec<Value>;

/// A JSRS value.
///
/// # Examples
///
/// ```
/// use jsrs::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".to_string(), Value::String("value".into()));
/// let v = Value::Object(map);
/// assert_eq!(v.to_string(), "{key:'value'}");
/// ```
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The `undefined` literal; also an array elision slot.
    Undefined,
    Null,
    Bool(bool),
    /// 32-bit integer, produced for integer literals that fit strictly
    /// inside the 32-bit range.
    Int(i32),
    /// Double-precision float, including `NaN` and the infinities.
    Number(f64),
    /// Decoded string contents; escape sequences are already resolved.
    String(String),
    Array(Array),
    Object(Map),
    /// An ISO-8601 instant. Serialize-only: the parser represents ISO
    /// strings as [`Value::String`].
    Date(String),
    /// Opaque host function marker. Serializes to nothing.
    Function,
}

impl Default for Value {
    fn default() -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Undefined`].
    ///
    /// [`Undefined`]: Value::Undefined
    ///
    /// # Examples
    ///
    /// ```
    /// use jsrs::Value;
    ///
    /// assert!(Value::Undefined.is_undefined());
    /// assert!(!Value::Null.is_undefined());
    /// ```
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Int`] or [`Number`].
    ///
    /// [`Int`]: Value::Int
    /// [`Number`]: Value::Number
    ///
    /// # Examples
    ///
    /// ```
    /// use jsrs::Value;
    ///
    /// assert!(Value::Int(42).is_number());
    /// assert!(Value::Number(42.5).is_number());
    /// assert!(!Value::Null.is_number());
    /// ```
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(..) | Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The string contents, if the value is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self { Some(s) } else { None }
    }

    /// The numeric value as an `f64`, covering both [`Int`] and [`Number`].
    ///
    /// [`Int`]: Value::Int
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(f64::from(*v)),
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The integer value, if the value is an [`Int`].
    ///
    /// [`Int`]: Value::Int
    #[must_use]
    pub fn as_i32(&self) -> Option<i32> {
        if let Self::Int(v) = self { Some(*v) } else { None }
    }

    /// The elements, if the value is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        if let Self::Array(a) = self { Some(a) } else { None }
    }

    /// The entries, if the value is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(o) = self { Some(o) } else { None }
    }
}

impl core::fmt::Display for Value {
    /// Writes the canonical JSRS text. Function values write nothing.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match crate::serializer::stringify(self) {
            Some(text) => f.write_str(&text),
            None => Ok(()),
        }
    }
}
