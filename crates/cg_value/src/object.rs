use alloc::sync::Arc;
use core::fmt;

use cg_utils::hash::HashMap;

use crate::{HostError, Value};

// -----------------------------------------------------------------------------
// Object

/// A user-defined value.
///
/// The hooks may run arbitrary code: computed properties, lazy loading, or
/// even nested lookups on other values. Callers must not assume they are pure
/// or cheap.
///
/// # Examples
///
/// ```
/// use cg_value::{ErrorKind, HostError, Object, Value};
///
/// struct Celsius(f64);
///
/// impl Object for Celsius {
///     fn type_name(&self) -> &str {
///         "Celsius"
///     }
///
///     fn get_attr(&self, name: &str) -> Result<Value, HostError> {
///         match name {
///             "fahrenheit" => Ok(Value::from(self.0 * 9.0 / 5.0 + 32.0)),
///             _ => Err(HostError::no_attribute(self.type_name(), name)),
///         }
///     }
/// }
///
/// let t = Value::object(Celsius(100.0));
/// assert_eq!(t.get_attr(&"fahrenheit".into()).unwrap(), Value::from(212.0));
///
/// let err = t.get_item(&Value::from(0)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Type);
/// ```
pub trait Object: Send + Sync + 'static {
    /// The name reported in error messages and displays.
    fn type_name(&self) -> &str;

    /// Looks up a member by name.
    ///
    /// Fails with [`ErrorKind::Attribute`](crate::ErrorKind::Attribute) by default.
    fn get_attr(&self, name: &str) -> Result<Value, HostError> {
        Err(HostError::no_attribute(self.type_name(), name))
    }

    /// Looks up an element by key.
    ///
    /// Fails with [`ErrorKind::Type`](crate::ErrorKind::Type) by default.
    fn get_item(&self, key: &Value) -> Result<Value, HostError> {
        let _ = key;
        Err(HostError::not_subscriptable(self.type_name()))
    }

    /// Invokes the object with no arguments.
    ///
    /// Fails with [`ErrorKind::Type`](crate::ErrorKind::Type) by default.
    fn call(&self) -> Result<Value, HostError> {
        Err(HostError::not_callable(self.type_name()))
    }
}

// -----------------------------------------------------------------------------
// Record

/// A plain object holding named attributes.
///
/// # Examples
///
/// ```
/// use cg_value::{ErrorKind, Record, Value};
///
/// let point = Value::from(Record::new("Point").with("x", 1).with("y", 2));
///
/// assert_eq!(point.get_attr(&"y".into()).unwrap(), Value::from(2));
///
/// let err = point.get_attr(&"z".into()).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Attribute);
/// assert_eq!(err.message(), "'Point' object has no attribute 'z'");
/// ```
#[derive(Clone)]
pub struct Record {
    type_name: Arc<str>,
    attrs: HashMap<Arc<str>, Value>,
}

impl Record {
    #[inline]
    pub fn new(type_name: impl Into<Arc<str>>) -> Self {
        Self {
            type_name: type_name.into(),
            attrs: HashMap::default(),
        }
    }

    /// Builder form of [`Record::set`].
    #[inline]
    pub fn with(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    #[inline]
    pub fn set(&mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Option<Value> {
        self.attrs.insert(name.into(), value.into())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }
}

impl Object for Record {
    #[inline]
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn get_attr(&self, name: &str) -> Result<Value, HostError> {
        match self.attrs.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(HostError::no_attribute(&self.type_name, name)),
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(&self.type_name);
        for (name, value) in &self.attrs {
            s.field(name, value);
        }
        s.finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Record;
    use crate::{ErrorKind, Value};

    #[test]
    fn record_set_replaces() {
        let mut record = Record::new("Obj").with("a", 1);
        assert_eq!(record.set("a", 2), Some(Value::from(1)));
        assert_eq!(record.get("a"), Some(&Value::from(2)));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn record_is_not_subscriptable_or_callable() {
        let record = Value::from(Record::new("Obj").with("a", 1));
        let err = record.get_item(&"a".into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.message(), "'Obj' object is not subscriptable");

        let err = record.call().unwrap_err();
        assert_eq!(err.message(), "'Obj' object is not callable");
    }
}
