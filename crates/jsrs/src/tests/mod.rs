mod parse_bad;
mod parse_good;

use crate::value::{Map, Value};

/// Builds an object value from literal entries.
pub(crate) fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.to_string(), value);
    }
    Value::Object(map)
}
