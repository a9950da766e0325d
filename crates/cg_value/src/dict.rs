use core::fmt;

use cg_utils::hash::{HashMap, hash_map};

use crate::{HashKey, Value};

/// A mapping from [`HashKey`] to [`Value`].
///
/// Iteration order is unspecified but stable for the same contents, since the
/// hasher uses a fixed seed.
#[derive(Clone, Default, PartialEq)]
pub struct Dict {
    entries: HashMap<HashKey, Value>,
}

impl Dict {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Inserts a key-value pair, returning the previous value for that key.
    #[inline]
    pub fn insert(&mut self, key: impl Into<HashKey>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &HashKey) -> Option<&Value> {
        self.entries.get(key)
    }

    #[inline]
    pub fn contains_key(&self, key: &HashKey) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, HashKey, Value> {
        self.entries.iter()
    }
}

impl<K: Into<HashKey>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut dict = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a HashKey, &'a Value);
    type IntoIter = hash_map::Iter<'a, HashKey, Value>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Dict {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// -----------------------------------------------------------------------------
// Tests
