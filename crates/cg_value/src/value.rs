use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::{Dict, Func, HashKey, HostError, Object, Record};

// -----------------------------------------------------------------------------
// ValueKind

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Dict,
    Object,
    Func,
}

impl ValueKind {
    /// Returns the type name used in error messages.
    ///
    /// Objects report their own name through [`Value::type_name`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "NoneType",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::List => "list",
            Self::Tuple => "tuple",
            Self::Dict => "dict",
            Self::Object => "object",
            Self::Func => "function",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// -----------------------------------------------------------------------------
// Value

/// A dynamically typed value.
///
/// Cloning never copies payloads: every heap-backed variant is reference
/// counted, and a clone points at the same allocation.
///
/// `None` is the "no value" marker.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Arc<Vec<Value>>),
    Tuple(Arc<[Value]>),
    Dict(Arc<Dict>),
    Object(Arc<dyn Object>),
    Func(Func),
}

impl Value {
    /// Creates a [`Value::List`].
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(Arc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Creates a [`Value::Tuple`].
    pub fn tuple<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Creates a [`Value::Dict`].
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_value::Value;
    ///
    /// let d = Value::dict([("a", 1), ("b", 2)]);
    /// assert_eq!(d.get_item(&"b".into()).unwrap(), Value::from(2));
    /// ```
    pub fn dict<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<HashKey>,
        V: Into<Value>,
    {
        Self::Dict(Arc::new(entries.into_iter().collect()))
    }

    /// Wraps a user-defined [`Object`].
    #[inline]
    pub fn object(object: impl Object) -> Self {
        Self::Object(Arc::new(object))
    }

    /// Wraps a zero-argument callable.
    #[inline]
    pub fn func<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value, HostError> + Send + Sync + 'static,
    {
        Self::Func(Func::new(f))
    }

    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::None => ValueKind::None,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Tuple(_) => ValueKind::Tuple,
            Self::Dict(_) => ValueKind::Dict,
            Self::Object(_) => ValueKind::Object,
            Self::Func(_) => ValueKind::Func,
        }
    }

    /// Returns the type name used in error messages.
    #[inline]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Object(object) => object.type_name(),
            other => other.kind().name(),
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the elements of a list or tuple.
    #[inline]
    pub fn as_slice(&self) -> Option<&[Value]> {
        match self {
            Self::List(v) => Some(v),
            Self::Tuple(v) => Some(v),
            _ => None,
        }
    }

    /// Returns `true` if both values are the same instance.
    ///
    /// Heap-backed values compare by allocation, scalars by value
    /// (floats by bit pattern).
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_value::Value;
    ///
    /// let a = Value::list([1, 2]);
    /// let b = a.clone();
    /// let c = Value::list([1, 2]);
    ///
    /// assert!(a.ptr_eq(&b));
    /// assert!(!a.ptr_eq(&c));
    /// assert_eq!(a, c);
    /// ```
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => Arc::ptr_eq(a, b),
            (Self::List(a), Self::List(b)) => Arc::ptr_eq(a, b),
            (Self::Tuple(a), Self::Tuple(b)) => Arc::ptr_eq(a, b),
            (Self::Dict(a), Self::Dict(b)) => Arc::ptr_eq(a, b),
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Func(a), Self::Func(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Equality

/// Structural equality for data, identity for objects and functions.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Dict(a), Self::Dict(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Func(a), Self::Func(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

// -----------------------------------------------------------------------------
// Display

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(item, f)?;
    }
    Ok(())
}

/// Renders the value the way it would be written as a literal.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "'{v}'"),
            Self::List(items) => {
                f.write_str("[")?;
                write_items(f, items)?;
                f.write_str("]")
            }
            Self::Tuple(items) => {
                f.write_str("(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Self::Dict(dict) => fmt::Display::fmt(dict, f),
            Self::Object(object) => write!(f, "<{} object>", object.type_name()),
            Self::Func(_) => f.write_str("<function>"),
        }
    }
}

impl fmt::Debug for Value {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl From<Arc<str>> for Value {
    #[inline]
    fn from(value: Arc<str>) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Self::List(Arc::new(value))
    }
}

impl From<Dict> for Value {
    #[inline]
    fn from(value: Dict) -> Self {
        Self::Dict(Arc::new(value))
    }
}

impl From<Record> for Value {
    #[inline]
    fn from(value: Record) -> Self {
        Self::Object(Arc::new(value))
    }
}

impl From<Func> for Value {
    #[inline]
    fn from(value: Func) -> Self {
        Self::Func(value)
    }
}

impl From<HashKey> for Value {
    fn from(value: HashKey) -> Self {
        match value {
            HashKey::None => Self::None,
            HashKey::Bool(v) => Self::Bool(v),
            HashKey::Int(v) => Self::Int(v),
            HashKey::Float(bits) => Self::Float(f64::from_bits(bits)),
            HashKey::Str(v) => Self::Str(v),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Self::None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Value, ValueKind};

    #[test]
    fn display() {
        let v = Value::list([
            Value::None,
            Value::from(true),
            Value::from(1.5),
            Value::from("a"),
            Value::tuple([1]),
        ]);
        assert_eq!(v.to_string(), "[None, True, 1.5, 'a', (1,)]");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::None.type_name(), "NoneType");
        assert_eq!(Value::from(1).kind(), ValueKind::Int);
        assert_eq!(Value::dict([("a", 1)]).type_name(), "dict");
        assert_eq!(Value::func(|| Ok(Value::None)).type_name(), "function");
    }

    #[test]
    fn clone_shares_payload() {
        let d = Value::dict([("a", Value::list([1, 2]))]);
        let copy = d.clone();
        assert!(d.ptr_eq(&copy));

        let s = Value::from("key");
        assert!(s.ptr_eq(&s.clone()));
        assert!(!s.ptr_eq(&Value::from("key")));
        assert_eq!(s, Value::from("key"));
    }

    #[test]
    fn accessors() {
        let d = Value::dict([("a", 1)]);
        assert_eq!(d.as_dict().and_then(|d| d.get(&"a".into())), Some(&Value::from(1)));
        assert!(Value::list([1]).as_dict().is_none());

        assert_eq!(Value::list([1, 2]).as_slice(), Some(&[Value::from(1), Value::from(2)][..]));
        assert_eq!(Value::tuple(["a"]).as_slice(), Some(&[Value::from("a")][..]));
        assert!(Value::from("ab").as_slice().is_none());

        assert_eq!(Value::from(0.5).as_float(), Some(0.5));
        assert_eq!(Value::from(1).as_float(), None);
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::from(1).as_bool(), None);
    }

    #[test]
    fn option_conversion() {
        assert!(Value::from(None::<i32>).is_none());
        assert_eq!(Value::from(Some(3)), Value::Int(3));
    }
}
