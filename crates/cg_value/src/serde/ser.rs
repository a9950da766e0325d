use alloc::format;

use serde_core::ser::{Error, SerializeMap, SerializeSeq};
use serde_core::{Serialize, Serializer};

use crate::{HashKey, Value};

fn serialize_items<S: Serializer>(items: &[Value], serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_seq(Some(items.len()))?;
    for item in items {
        state.serialize_element(item)?;
    }
    state.end()
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::Str(v) => serializer.serialize_str(v),
            Value::List(items) => serialize_items(items, serializer),
            Value::Tuple(items) => serialize_items(items, serializer),
            Value::Dict(dict) => {
                let mut state = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict.iter() {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Value::Object(_) | Value::Func(_) => Err(S::Error::custom(format!(
                "cannot serialize '{}' object",
                self.type_name()
            ))),
        }
    }
}

impl Serialize for HashKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            HashKey::None => serializer.serialize_unit(),
            HashKey::Bool(v) => serializer.serialize_bool(*v),
            HashKey::Int(v) => serializer.serialize_i64(*v),
            HashKey::Float(bits) => serializer.serialize_f64(f64::from_bits(*bits)),
            HashKey::Str(v) => serializer.serialize_str(v),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
