//! Item, attribute and call operations on [`Value`].

use alloc::format;
use alloc::string::ToString;

use crate::{HashKey, HostError, Value};

// -----------------------------------------------------------------------------
// Helpers

/// Resolves a (possibly negative) sequence index against `len`.
fn sequence_index(len: usize, key: &Value, type_name: &str) -> Result<usize, HostError> {
    let raw = match key {
        Value::Int(v) => *v,
        Value::Bool(v) => i64::from(*v),
        other => {
            return Err(HostError::type_error(format!(
                "{type_name} indices must be integers, not '{}'",
                other.type_name()
            )));
        }
    };

    let index = if raw < 0 {
        usize::try_from(raw.unsigned_abs())
            .ok()
            .and_then(|back| len.checked_sub(back))
    } else {
        usize::try_from(raw).ok().filter(|&i| i < len)
    };

    index.ok_or_else(|| HostError::index(format!("{type_name} index out of range")))
}

// -----------------------------------------------------------------------------
// Operations

impl Value {
    /// Looks up an element by key or index.
    ///
    /// | receiver      | key             | failure                          |
    /// |---------------|-----------------|----------------------------------|
    /// | dict          | hashable value  | `KeyError`, `TypeError` (unhashable) |
    /// | list, tuple   | int (negative from the end) | `IndexError`, `TypeError` |
    /// | str           | int             | `IndexError`, `TypeError`        |
    /// | object        | anything        | whatever [`Object::get_item`] raises |
    /// | anything else | -               | `TypeError`                      |
    ///
    /// [`Object::get_item`]: crate::Object::get_item
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_value::{ErrorKind, Value};
    ///
    /// let v = Value::dict([("a", Value::tuple(["x", "y"]))]);
    ///
    /// let t = v.get_item(&"a".into()).unwrap();
    /// assert_eq!(t.get_item(&Value::from(-2)).unwrap(), Value::from("x"));
    ///
    /// assert_eq!(v.get_item(&"b".into()).unwrap_err().kind(), ErrorKind::Key);
    /// assert_eq!(Value::from(1).get_item(&"a".into()).unwrap_err().kind(), ErrorKind::Type);
    /// ```
    pub fn get_item(&self, key: &Value) -> Result<Value, HostError> {
        match self {
            Value::Dict(dict) => {
                let hash_key = HashKey::try_from(key)?;
                match dict.get(&hash_key) {
                    Some(value) => Ok(value.clone()),
                    None => Err(HostError::key(key.to_string())),
                }
            }
            Value::List(items) => {
                let index = sequence_index(items.len(), key, "list")?;
                Ok(items[index].clone())
            }
            Value::Tuple(items) => {
                let index = sequence_index(items.len(), key, "tuple")?;
                Ok(items[index].clone())
            }
            Value::Str(s) => {
                let index = sequence_index(s.chars().count(), key, "string")?;
                match s.chars().nth(index) {
                    Some(c) => Ok(Value::from(c.to_string())),
                    None => Err(HostError::index("string index out of range")),
                }
            }
            Value::Object(object) => object.get_item(key),
            other => Err(HostError::not_subscriptable(other.type_name())),
        }
    }

    /// Looks up a member by name.
    ///
    /// `name` must be a string, anything else fails with `TypeError`.
    /// Built-in values have no attributes and fail with `AttributeError`;
    /// objects answer through [`Object::get_attr`](crate::Object::get_attr).
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_value::{ErrorKind, Value};
    ///
    /// let err = Value::dict([("a", 1)]).get_attr(&"a".into()).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Attribute);
    ///
    /// let err = Value::None.get_attr(&Value::from(1)).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Type);
    /// ```
    pub fn get_attr(&self, name: &Value) -> Result<Value, HostError> {
        let Value::Str(name) = name else {
            return Err(HostError::type_error(format!(
                "attribute name must be string, not '{}'",
                name.type_name()
            )));
        };

        match self {
            Value::Object(object) => object.get_attr(name),
            other => Err(HostError::no_attribute(other.type_name(), name)),
        }
    }

    /// Invokes the value with no arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_value::{ErrorKind, Value};
    ///
    /// let f = Value::func(|| Ok(Value::list(Vec::<Value>::new())));
    /// assert_eq!(f.call().unwrap(), Value::list(Vec::<Value>::new()));
    ///
    /// assert_eq!(Value::from(7).call().unwrap_err().kind(), ErrorKind::Type);
    /// ```
    pub fn call(&self) -> Result<Value, HostError> {
        match self {
            Value::Func(func) => func.call(),
            Value::Object(object) => object.call(),
            other => Err(HostError::not_callable(other.type_name())),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
