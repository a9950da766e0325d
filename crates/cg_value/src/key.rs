use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::{HostError, Value};

/// The hashable subset of [`Value`], used as [`Dict`](crate::Dict) keys.
///
/// Numeric keys compare by value, so `True`, `1` and `1.0` name the same
/// entry. Other floats compare by bit pattern, with `-0.0` folded into `0.0`.
/// Tuples are not hashable here.
#[derive(Debug, Clone)]
pub enum HashKey {
    None,
    Bool(bool),
    Int(i64),
    /// Bit pattern of an `f64`.
    Float(u64),
    Str(Arc<str>),
}

impl HashKey {
    #[inline]
    pub fn float(value: f64) -> Self {
        // -0.0 == 0.0, so they must share a key.
        let value = if value == 0.0 { 0.0 } else { value };
        Self::Float(value.to_bits())
    }

    fn numeric(&self) -> Option<Numeric> {
        match *self {
            Self::Bool(v) => Some(Numeric::Int(i64::from(v))),
            Self::Int(v) => Some(Numeric::Int(v)),
            Self::Float(bits) => {
                let v = f64::from_bits(bits);
                // 2^63 saturates to i64::MAX and would round-trip.
                if v < 9_223_372_036_854_775_808.0 && v as i64 as f64 == v {
                    Some(Numeric::Int(v as i64))
                } else {
                    Some(Numeric::Float(bits))
                }
            }
            Self::None | Self::Str(_) => None,
        }
    }
}

#[derive(PartialEq, Eq, Hash)]
enum Numeric {
    Int(i64),
    Float(u64),
}

impl PartialEq for HashKey {
    fn eq(&self, other: &Self) -> bool {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => match (self, other) {
                (Self::None, Self::None) => true,
                (Self::Str(a), Self::Str(b)) => a == b,
                _ => false,
            },
            _ => false,
        }
    }
}

impl Eq for HashKey {}

impl Hash for HashKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match (self.numeric(), self) {
            (Some(n), _) => n.hash(state),
            (None, Self::Str(v)) => v.hash(state),
            (None, _) => state.write_u8(0),
        }
    }
}

impl TryFrom<&Value> for HashKey {
    type Error = HostError;

    /// Fails with `TypeError` for lists, dicts, objects and functions.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::None => Ok(Self::None),
            Value::Bool(v) => Ok(Self::Bool(*v)),
            Value::Int(v) => Ok(Self::Int(*v)),
            Value::Float(v) => Ok(Self::float(*v)),
            Value::Str(v) => Ok(Self::Str(v.clone())),
            other => Err(HostError::type_error(format!(
                "unhashable type: '{}'",
                other.type_name()
            ))),
        }
    }
}

impl From<&str> for HashKey {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl From<String> for HashKey {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl From<Arc<str>> for HashKey {
    #[inline]
    fn from(value: Arc<str>) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for HashKey {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for HashKey {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for HashKey {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(bits) => write!(f, "{:?}", f64::from_bits(*bits)),
            Self::Str(v) => write!(f, "'{v}'"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use crate::{Dict, ErrorKind, HashKey, Value};

    #[test]
    fn unhashable() {
        for value in [
            Value::list([1]),
            Value::dict([("a", 1)]),
            Value::func(|| Ok(Value::None)),
        ] {
            let err = HashKey::try_from(&value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type);
        }
    }

    #[test]
    fn zero_folding() {
        assert_eq!(HashKey::float(-0.0), HashKey::float(0.0));
        assert_eq!(HashKey::float(-0.0), HashKey::from(0));
    }

    #[test]
    fn numeric_keys_compare_by_value() {
        assert_eq!(HashKey::from(true), HashKey::from(1));
        assert_eq!(HashKey::from(false), HashKey::float(0.0));
        assert_eq!(HashKey::float(2.0), HashKey::from(2));
        assert_eq!(HashKey::float(-3.0), HashKey::from(-3));

        assert_ne!(HashKey::float(1.5), HashKey::from(1));
        assert_ne!(HashKey::float(f64::NAN), HashKey::from(0));
        assert_ne!(HashKey::float(9_223_372_036_854_775_808.0), HashKey::from(i64::MAX));
        assert_ne!(HashKey::from("1"), HashKey::from(1));
        assert_ne!(HashKey::None, HashKey::from(0));
    }

    #[test]
    fn numeric_keys_share_dict_entries() {
        let d = Value::dict([(1, "one")]);

        for key in [Value::from(1), Value::from(true), Value::from(1.0)] {
            assert_eq!(d.get_item(&key).unwrap(), Value::from("one"));
        }
        assert_eq!(d.get_item(&Value::from(1.5)).unwrap_err().kind(), ErrorKind::Key);

        let mut dict = Dict::new();
        dict.insert(true, "first");
        assert_eq!(dict.insert(1, "second"), Some(Value::from("first")));
        assert_eq!(dict.len(), 1);
        // The first key is kept.
        assert_eq!(dict.iter().next().map(|(k, _)| k.to_string()), Some("True".to_string()));
    }
}
