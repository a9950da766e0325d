//! Re-export [`hashbrown::HashMap`] with [`FixedHashState`] as the default hasher.

use hashbrown::hash_map as hb;

use super::FixedHashState;

/// A [`hashbrown::HashMap`] whose default hash state is [`FixedHashState`].
///
/// # Examples
///
/// ```
/// use cg_utils::hash::HashMap;
///
/// let mut map: HashMap<&str, i32> = HashMap::default();
/// map.insert("a", 1);
///
/// assert_eq!(map.get("a"), Some(&1));
/// assert_eq!(map.get("b"), None);
/// ```
pub type HashMap<K, V, S = FixedHashState> = hb::HashMap<K, V, S>;

pub use hb::Iter;
