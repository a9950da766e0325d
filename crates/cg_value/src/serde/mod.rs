//! Serde support for [`Value`](crate::Value).
//!
//! Data values serialize as their natural serde counterparts: `None` as unit,
//! lists and tuples as sequences, dicts as maps. Objects and functions have no
//! data representation and fail to serialize.
//!
//! Deserializing produces `Dict` for maps, `List` for sequences and `None` for
//! unit or missing optionals, which makes it a convenient way to load
//! loosely-typed input data.
//!
//! ```
//! use cg_value::Value;
//!
//! let v: Value = serde_json::from_str(r#"{"a": [1, null, "x"]}"#).unwrap();
//! let a = v.get_item(&"a".into()).unwrap();
//!
//! assert!(a.get_item(&Value::from(1)).unwrap().is_none());
//! assert_eq!(serde_json::to_string(&a).unwrap(), r#"[1,null,"x"]"#);
//! ```

mod de;
mod ser;
