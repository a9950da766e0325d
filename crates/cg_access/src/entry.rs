//! Public entry points.
//!
//! The argument-list functions take `[root, steps..., fallback]` and are the
//! shape a dynamic caller (an interpreter, generated code) works with. The
//! `resolve_*` functions take the three parts separately.

use cg_value::{HostError, Value};

use crate::{AccessError, Attribute, Call, Factory, Index, Static, walk};

// -----------------------------------------------------------------------------
// Argument lists

/// Splits `[root, steps..., fallback]`, requiring at least one step.
#[inline]
fn split_args(args: &[Value]) -> Result<(&Value, &[Value], &Value), AccessError> {
    match args {
        [root, steps @ .., fallback] if !steps.is_empty() => Ok((root, steps, fallback)),
        _ => Err(AccessError::Arity(args.len())),
    }
}

/// Item lookups with a default value.
///
/// `args` is `[root, key..., default]`.
///
/// # Examples
///
/// ```
/// use cg_access::item_or_default;
/// use cg_value::Value;
///
/// let data = Value::dict([("a", Value::dict([("b", 5)]))]);
/// let zero = Value::from(0);
///
/// let args = [data.clone(), "a".into(), "b".into(), zero.clone()];
/// assert_eq!(item_or_default(&args).unwrap(), Value::from(5));
///
/// let args = [data.clone(), "a".into(), "x".into(), zero.clone()];
/// assert_eq!(item_or_default(&args).unwrap(), zero);
/// ```
pub fn item_or_default(args: &[Value]) -> Result<Value, AccessError> {
    let (root, steps, default) = split_args(args)?;
    Ok(walk(root, steps, Index, Static(default))?)
}

/// Item lookups with a default factory.
///
/// `args` is `[root, key..., factory]`; the factory is called with no
/// arguments each time the walk short-circuits.
pub fn item_or_else(args: &[Value]) -> Result<Value, AccessError> {
    let (root, steps, factory) = split_args(args)?;
    Ok(walk(root, steps, Index, Call(factory))?)
}

/// Attribute lookups with a default value.
///
/// `args` is `[root, name..., default]`.
pub fn attr_or_default(args: &[Value]) -> Result<Value, AccessError> {
    let (root, steps, default) = split_args(args)?;
    Ok(walk(root, steps, Attribute, Static(default))?)
}

/// Attribute lookups with a default factory.
///
/// `args` is `[root, name..., factory]`.
pub fn attr_or_else(args: &[Value]) -> Result<Value, AccessError> {
    let (root, steps, factory) = split_args(args)?;
    Ok(walk(root, steps, Attribute, Call(factory))?)
}

// -----------------------------------------------------------------------------
// Typed

/// Item lookups from `root` through `steps`, or `default`.
#[inline]
pub fn resolve_item(root: &Value, steps: &[Value], default: &Value) -> Result<Value, HostError> {
    walk(root, steps, Index, Static(default))
}

/// Item lookups from `root` through `steps`, or the result of `f`.
#[inline]
pub fn resolve_item_with<F>(root: &Value, steps: &[Value], f: F) -> Result<Value, HostError>
where
    F: FnOnce() -> Result<Value, HostError>,
{
    walk(root, steps, Index, Factory(f))
}

/// Attribute lookups from `root` through `steps`, or `default`.
#[inline]
pub fn resolve_attr(root: &Value, steps: &[Value], default: &Value) -> Result<Value, HostError> {
    walk(root, steps, Attribute, Static(default))
}

/// Attribute lookups from `root` through `steps`, or the result of `f`.
#[inline]
pub fn resolve_attr_with<F>(root: &Value, steps: &[Value], f: F) -> Result<Value, HostError>
where
    F: FnOnce() -> Result<Value, HostError>,
{
    walk(root, steps, Attribute, Factory(f))
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use cg_value::{ErrorKind, HostError, Record, Value};

    use super::*;

    fn data(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    fn counting_factory(value: i64) -> (Value, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let factory = Value::func(move || {
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(Value::from(value))
        });
        (factory, calls)
    }

    #[test]
    fn nested_dict() {
        let args = [data(r#"{"a": {"b": 5}}"#), "a".into(), "b".into(), Value::from(0)];
        assert_eq!(item_or_default(&args).unwrap(), Value::from(5));
    }

    #[test]
    fn none_before_last_step() {
        let args = [data(r#"{"a": null}"#), "a".into(), "b".into(), Value::from(0)];
        assert_eq!(item_or_default(&args).unwrap(), Value::from(0));
    }

    #[test]
    fn missing_key() {
        let args = [data(r#"{"a": {}}"#), "a".into(), "b".into(), Value::from(0)];
        assert_eq!(item_or_default(&args).unwrap(), Value::from(0));
    }

    #[test]
    fn indexing_an_int_is_a_miss() {
        let args = [data(r#"{"a": 1}"#), "a".into(), "b".into(), Value::from(0)];
        assert_eq!(item_or_default(&args).unwrap(), Value::from(0));
    }

    #[test]
    fn int_keys_and_identity() {
        let d = Value::dict([(1, Value::dict([("2", Value::dict(Vec::<(&str, Value)>::new()))]))]);
        let seven = Value::from(7);
        let inner = d.get_item(&Value::from(1)).unwrap();

        let res = item_or_default(&[d.clone(), Value::from(1), seven.clone()]).unwrap();
        assert!(res.ptr_eq(&inner));
        let res = item_or_default(&[d.clone(), Value::from(2), seven.clone()]).unwrap();
        assert!(res.ptr_eq(&seven));

        let (factory, calls) = counting_factory(-1);
        let res = item_or_else(&[d.clone(), Value::from(1), "2".into(), factory.clone()]).unwrap();
        assert!(res.ptr_eq(&inner.get_item(&"2".into()).unwrap()));
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        let res = item_or_else(&[d.clone(), Value::from(1), "3".into(), factory]).unwrap();
        assert_eq!(res, Value::from(-1));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn attribute_chains() {
        let obj = |attr: &str, value: Value| Value::from(Record::new("Obj").with(attr, value));

        let a_b = obj("a", obj("b", Value::from(1)));
        let a_x = obj("a", obj("x", Value::from(1)));
        let x_x = obj("x", obj("x", Value::from(1)));
        let seven = Value::from(7);

        for (root, expected) in [(&a_b, 1), (&a_x, 7), (&x_x, 7)] {
            let args = [root.clone(), "a".into(), "b".into(), seven.clone()];
            assert_eq!(attr_or_default(&args).unwrap(), Value::from(expected));
        }

        let (factory, calls) = counting_factory(0);
        for (root, expected) in [(&a_b, 1), (&a_x, 0), (&x_x, 0)] {
            let args = [root.clone(), "a".into(), "b".into(), factory.clone()];
            assert_eq!(attr_or_else(&args).unwrap(), Value::from(expected));
        }
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn factory_builds_fresh_values() {
        let root = Value::from(Record::new("Obj").with("attr1", Value::from(Record::new("Inner"))));
        let factory = Value::func(|| Ok(Value::list(Vec::<Value>::new())));
        let args = [root, "attr1".into(), "attr2".into(), factory];

        let first = attr_or_else(&args).unwrap();
        let second = attr_or_else(&args).unwrap();
        assert_eq!(first, Value::list(Vec::<Value>::new()));
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn arity() {
        let d = Value::dict(Vec::<(&str, Value)>::new());
        assert_eq!(item_or_default(&[]).unwrap_err(), AccessError::Arity(0));
        assert_eq!(item_or_default(&[d.clone()]).unwrap_err(), AccessError::Arity(1));

        let two = [d, Value::from(0)];
        for f in [item_or_default, item_or_else, attr_or_default, attr_or_else] {
            let err = f(&two).unwrap_err();
            assert!(err.is_arity());
            assert_eq!(err.into_host(), None);
        }
    }

    #[test]
    fn arity_error_even_for_none_root() {
        let err = item_or_default(&[Value::None, Value::func(|| Ok(Value::None))]).unwrap_err();
        assert_eq!(err, AccessError::Arity(2));
    }

    #[test]
    fn non_callable_factory() {
        let args = [Value::None, "a".into(), Value::from(3)];
        let err = item_or_else(&args).unwrap_err().into_host().unwrap();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.message(), "'int' object is not callable");

        // Never touched when the chain succeeds.
        let args = [data(r#"{"a": 1}"#), "a".into(), Value::from(3)];
        assert_eq!(item_or_else(&args).unwrap(), Value::from(1));
    }

    #[test]
    fn host_errors_cross_unchanged() {
        let factory = Value::func(|| Err(HostError::runtime("factory failed")));
        let err = attr_or_else(&[Value::None, "a".into(), factory]).unwrap_err();
        assert_eq!(err, AccessError::Host(HostError::runtime("factory failed")));
        assert_eq!(err.to_string(), "RuntimeError: factory failed");
    }

    #[test]
    fn typed_entry_points() {
        let root = data(r#"{"a": [10, 20]}"#);
        let default = Value::from(0);

        let steps = [Value::from("a"), Value::from(-1)];
        assert_eq!(resolve_item(&root, &steps, &default).unwrap(), Value::from(20));

        let steps = [Value::from("a"), Value::from(2)];
        assert!(resolve_item(&root, &steps, &default).unwrap().ptr_eq(&default));
        assert_eq!(
            resolve_item_with(&root, &steps, || Ok(Value::from(1))).unwrap(),
            Value::from(1)
        );

        let obj = Value::from(Record::new("Obj").with("a", 1));
        assert_eq!(resolve_attr(&obj, &["b".into()], &default).unwrap(), default);
        assert_eq!(
            resolve_attr_with(&obj, &["a".into()], || Ok(Value::None)).unwrap(),
            Value::from(1)
        );
    }
}
