//! The document value model.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{DocumentError, Result};

pub type Array = Vec<Value>;
pub type Object = BTreeMap<String, Value>;

/// A single node of a document.
///
/// Objects are kept in a `BTreeMap`, so iteration and serialization always
/// visit keys in lexicographic order.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Array(Array),
    Object(Object),
    Integer(i32),
    Float(f64),
    Bool(bool),
    Text(String),
}

/// Variant tag of a [`Value`], used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Array,
    Object,
    Integer,
    Float,
    Bool,
    Text,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Array => "array",
            ValueKind::Object => "object",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Bool => "boolean",
            ValueKind::Text => "string",
        };
        f.write_str(name)
    }
}

impl Value {
    pub fn empty_array() -> Self {
        Value::Array(Array::new())
    }

    pub fn empty_object() -> Self {
        Value::Object(Object::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Bool(_) => ValueKind::Bool,
            Value::Text(_) => ValueKind::Text,
        }
    }

    fn mismatch(&self, expected: ValueKind) -> DocumentError {
        DocumentError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }

    // ---- Incremental building ----

    /// Append an element to an array value.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        match self {
            Value::Array(items) => {
                items.push(value.into());
                Ok(())
            }
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    /// Assign `key` in an object value, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        match self {
            Value::Object(fields) => {
                fields.insert(key.into(), value.into());
                Ok(())
            }
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    // ---- Accessors ----

    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(other.mismatch(ValueKind::Array)),
        }
    }

    pub fn as_object(&self) -> Result<&Object> {
        match self {
            Value::Object(fields) => Ok(fields),
            other => Err(other.mismatch(ValueKind::Object)),
        }
    }

    pub fn as_int(&self) -> Result<i32> {
        match self {
            Value::Integer(n) => Ok(*n),
            other => Err(other.mismatch(ValueKind::Integer)),
        }
    }

    /// Numeric value as `f64`. Integers are widened.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Float(x) => Ok(*x),
            Value::Integer(n) => Ok(f64::from(*n)),
            other => Err(other.mismatch(ValueKind::Float)),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch(ValueKind::Bool)),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch(ValueKind::Text)),
        }
    }

    /// Look up a field of an object value. Returns `None` for missing keys
    /// and for non-object values.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(key),
            _ => None,
        }
    }
}

impl From<Array> for Value {
    fn from(items: Array) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(fields: Object) -> Self {
        Value::Object(fields)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incremental_building() {
        let mut array = Value::empty_array();
        array.push(1).unwrap();
        array.push("two").unwrap();
        assert_eq!(
            array,
            Value::Array(vec![Value::Integer(1), Value::Text("two".into())])
        );

        let mut object = Value::empty_object();
        object.insert("b", true).unwrap();
        object.insert("a", 1.5).unwrap();
        object.insert("b", false).unwrap();
        let keys: Vec<_> = object.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(object.get("b"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_building_wrong_variant_fails() {
        let mut number = Value::Integer(3);
        let err = number.push(1).unwrap_err();
        assert_eq!(
            err,
            DocumentError::TypeMismatch {
                expected: ValueKind::Array,
                found: ValueKind::Integer,
            }
        );
        assert!(Value::empty_array().insert("k", 1).is_err());
        // Variant is untouched by the failed mutation
        assert_eq!(number, Value::Integer(3));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Integer(7).as_int().unwrap(), 7);
        assert_eq!(Value::Integer(7).as_f64().unwrap(), 7.0);
        assert!(Value::Float(7.0).as_int().is_err());
        assert_eq!(Value::from("x").as_str().unwrap(), "x");
        assert!(Value::Bool(true).as_bool().unwrap());
        assert!(Value::Text("true".into()).as_bool().is_err());
        assert_eq!(Value::Integer(1).get("a"), None);
    }

    #[test]
    fn test_collect_into_array() {
        let value: Value = ["a", "b"].into_iter().collect();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }
}
