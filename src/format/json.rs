use alloc::string::ToString;
use alloc::vec::Vec;

use serde_core::Serialize;
use serde_core::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{Format, FormatError};

impl Format for Value {
    #[inline]
    fn object() -> Self {
        Value::Object(Map::new())
    }

    #[inline]
    fn array() -> Self {
        Value::Array(Vec::new())
    }

    fn contains(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }

    fn get(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn set(&mut self, key: &str, value: Self) {
        if !self.is_object() {
            *self = Self::object();
        }
        if let Value::Object(map) = self {
            map.insert(key.to_string(), value);
        }
    }

    fn push(&mut self, value: Self) {
        if !self.is_array() {
            *self = Self::array();
        }
        if let Value::Array(items) = self {
            items.push(value);
        }
    }

    fn items(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }

    fn encode<T: Serialize>(value: &T) -> Result<Self, FormatError> {
        serde_json::to_value(value).map_err(|err| FormatError::Encode(err.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self) -> Result<T, FormatError> {
        serde_json::from_value(self.clone()).map_err(|err| FormatError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::Format;

    #[test]
    fn set_revives_non_objects() {
        let mut doc = Value::Null;
        doc.set("a", Value::from(1));
        assert_eq!(doc, json!({ "a": 1 }));
    }

    #[test]
    fn push_revives_non_arrays() {
        let mut doc = Value::from("scalar");
        doc.push(Value::from(1));
        doc.push(Value::from(2));
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn contains_and_get() {
        let doc = json!({ "a": 1 });
        assert!(doc.contains("a"));
        assert!(!doc.contains("b"));
        assert_eq!(Format::get(&doc, "a"), Some(&json!(1)));
        assert_eq!(Format::get(&doc, "b"), None);
    }

    #[test]
    fn decode_mismatch_is_an_error() {
        let doc = json!("not a number");
        assert!(doc.decode::<u32>().is_err());
    }
}
