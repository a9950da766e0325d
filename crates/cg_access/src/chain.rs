//! Reusable multi-step accessor.

use alloc::boxed::Box;
use core::fmt;

use cg_utils::vec::FastVec;
use cg_value::{HostError, Value};

use crate::{Attribute, Call, Factory, Index, Static, Step, walk, walk_strict};

/// A chain of keys walked with one kind of [`Step`], a thin wrapper over
/// `Box<[Value]>`.
///
/// The keys are collected once and the chain can then be applied to any
/// number of roots. Whether a lookup falls back to a value or to a factory is
/// decided by the method used, so each call site fixes its strategy once.
///
/// An empty chain returns the root from every method.
///
/// # Examples
///
/// ```
/// use cg_access::Chain;
/// use cg_value::Value;
///
/// let chain = Chain::items(["users", "0", "name"]);
/// assert_eq!(chain.to_string(), "['users']['0']['name']");
///
/// let chain = Chain::items([Value::from("users"), Value::from(0), Value::from("name")]);
///
/// let data = Value::dict([(
///     "users",
///     Value::list([Value::dict([("name", "ann")])]),
/// )]);
/// assert_eq!(chain.get_or(&data, &Value::None).unwrap(), Value::from("ann"));
///
/// let empty = Value::dict([("users", Value::list(Vec::<Value>::new()))]);
/// assert!(chain.get_or(&empty, &Value::None).unwrap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<S: Step> {
    keys: Box<[Value]>,
    step: S,
}

impl Chain<Index> {
    /// Creates a chain of item lookups.
    #[inline]
    pub fn items<K: Into<Value>>(keys: impl IntoIterator<Item = K>) -> Self {
        Self::new(keys, Index)
    }
}

impl Chain<Attribute> {
    /// Creates a chain of attribute lookups.
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_access::Chain;
    /// use cg_value::{Record, Value};
    ///
    /// let chain = Chain::attrs(["owner", "email"]);
    /// assert_eq!(chain.to_string(), ".owner.email");
    ///
    /// let repo = Value::from(Record::new("Repo").with("owner", Value::None));
    /// let fallback = chain.get_or_else(&repo, || Ok(Value::from("-"))).unwrap();
    /// assert_eq!(fallback, Value::from("-"));
    /// ```
    #[inline]
    pub fn attrs<K: Into<Value>>(names: impl IntoIterator<Item = K>) -> Self {
        Self::new(names, Attribute)
    }
}

impl<S: Step> Chain<S> {
    /// Creates a chain walked with `step`.
    pub fn new<K: Into<Value>>(keys: impl IntoIterator<Item = K>, step: S) -> Self {
        let mut vec: FastVec<Value, 8> = FastVec::new();
        let data = vec.data();

        for key in keys {
            data.push(key.into());
        }

        Self {
            keys: vec.into_boxed_slice(),
            step,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn keys(&self) -> &[Value] {
        &self.keys
    }

    /// Walks the chain without a fallback.
    ///
    /// Every step failure is returned, and `None` is not special: stepping
    /// into `None` fails like stepping into any other value that lacks the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_access::Chain;
    /// use cg_value::{ErrorKind, Value};
    ///
    /// let chain = Chain::items(["a", "b"]);
    /// let data = Value::dict([("a", Value::dict([("c", 1)]))]);
    ///
    /// assert_eq!(chain.get(&data).unwrap_err().kind(), ErrorKind::Key);
    /// ```
    #[inline]
    pub fn get(&self, root: &Value) -> Result<Value, HostError> {
        walk_strict(root, &self.keys, self.step)
    }

    /// Walks the chain, returning a shared clone of `default` on a
    /// short-circuit.
    #[inline]
    pub fn get_or(&self, root: &Value, default: &Value) -> Result<Value, HostError> {
        walk(root, &self.keys, self.step, Static(default))
    }

    /// Walks the chain, returning the result of `f` on a short-circuit.
    #[inline]
    pub fn get_or_else<F>(&self, root: &Value, f: F) -> Result<Value, HostError>
    where
        F: FnOnce() -> Result<Value, HostError>,
    {
        walk(root, &self.keys, self.step, Factory(f))
    }

    /// Walks the chain, calling `factory` on a short-circuit.
    #[inline]
    pub fn get_or_call(&self, root: &Value, factory: &Value) -> Result<Value, HostError> {
        walk(root, &self.keys, self.step, Call(factory))
    }

    /// Appends the keys of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cg_access::Chain;
    ///
    /// let chain = Chain::items(["a"]).concat(Chain::items([0, 1]));
    /// assert_eq!(chain.len(), 3);
    /// assert_eq!(chain.to_string(), "['a'][0][1]");
    /// ```
    pub fn concat(self, other: Chain<S>) -> Self {
        let mut vec: FastVec<Value, 12> = FastVec::new();
        let data = vec.data();
        data.extend(self.keys);
        data.extend(other.keys);

        Self {
            keys: vec.into_boxed_slice(),
            step: self.step,
        }
    }
}

impl<S: Step> fmt::Display for Chain<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in &self.keys {
            S::fmt_key(key, f)?;
        }
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use cg_value::{ErrorKind, Record, Value};

    use super::Chain;

    #[test]
    fn reuse_across_roots() {
        let chain = Chain::items(["a", "b"]);
        let default = Value::from(0);

        let roots = [
            (Value::dict([("a", Value::dict([("b", 5)]))]), Value::from(5)),
            (Value::dict([("a", Value::None)]), default.clone()),
            (Value::dict([("a", Value::list([1]))]), default.clone()),
            (Value::None, default.clone()),
        ];
        for (root, expected) in roots {
            assert_eq!(chain.get_or(&root, &default).unwrap(), expected);
        }
    }

    #[test]
    fn empty_chain_returns_root() {
        let chain = Chain::items(core::iter::empty::<Value>());
        let root = Value::list([1]);

        assert_eq!(chain.len(), 0);
        assert!(chain.get(&root).unwrap().ptr_eq(&root));
        assert!(chain.get_or(&root, &Value::None).unwrap().ptr_eq(&root));
        assert!(chain.get_or(&Value::None, &Value::from(1)).unwrap().is_none());
    }

    #[test]
    fn strict_get_on_none() {
        let chain = Chain::items(["a", "b"]);
        let err = chain.get(&Value::dict([("a", Value::None)])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.message(), "'NoneType' object is not subscriptable");

        let chain = Chain::attrs(["a"]);
        let err = chain.get(&Value::None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Attribute);
    }

    #[test]
    fn get_or_call_counts() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let factory = Value::func(move || {
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(Value::from("new"))
        });

        let chain = Chain::attrs(["a", "b"]);
        let hit = Value::from(Record::new("Obj").with("a", Record::new("Obj").with("b", 1)));
        let miss = Value::from(Record::new("Obj").with("a", 1));

        assert_eq!(chain.get_or_call(&hit, &factory).unwrap(), Value::from(1));
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        assert_eq!(chain.get_or_call(&miss, &factory).unwrap(), Value::from("new"));
        assert_eq!(chain.get_or_call(&miss, &factory).unwrap(), Value::from("new"));
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Chain::items([Value::from(0), Value::None]).to_string(), "[0][None]");
        assert_eq!(Chain::items([Value::from("a"), Value::from(0)]).to_string(), "['a'][0]");
        assert_eq!(Chain::attrs([Value::from("a"), Value::from(1)]).to_string(), ".a.<1>");
    }

    #[test]
    fn keys_are_kept_in_order() {
        let chain = Chain::items(["a", "b", "c"]).concat(Chain::items(["d"]));
        let keys: alloc::vec::Vec<_> = chain.keys().iter().filter_map(Value::as_str).collect();
        assert_eq!(keys, ["a", "b", "c", "d"]);
    }
}
