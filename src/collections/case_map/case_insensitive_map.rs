use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, RandomState};

use super::{CaseKey, CaseStr, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::ArrayMap;

/// A map with string keys whose lookup ignores case, preserving insertion order and positional
/// access by delegating storage to [`ArrayMap`].
///
/// Keys are matched by Unicode simple folding, so `"Content-Type"`, `"content-type"` and
/// `"CONTENT-TYPE"` all address the same entry. The casing of the first insertion is the one
/// stored; replacing a value never changes the stored casing.
pub struct CaseInsensitiveMap<V, B: BuildHasher = RandomState> {
    pub(crate) inner: ArrayMap<CaseKey, V, B>,
}

impl<V> CaseInsensitiveMap<V> {
    /// Creates a new empty CaseInsensitiveMap.
    pub fn new() -> CaseInsensitiveMap<V> {
        CaseInsensitiveMap { inner: ArrayMap::new() }
    }

    /// Creates a new CaseInsensitiveMap able to hold `cap` entries without reallocating.
    pub fn with_cap(cap: usize) -> CaseInsensitiveMap<V> {
        CaseInsensitiveMap { inner: ArrayMap::with_cap(cap) }
    }
}

impl<V, B: BuildHasher> CaseInsensitiveMap<V, B> {
    /// Creates a new CaseInsensitiveMap with the provided `hasher`.
    pub fn with_hasher(hasher: B) -> CaseInsensitiveMap<V, B> {
        CaseInsensitiveMap { inner: ArrayMap::with_hasher(hasher) }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Inserts the provided `key`-`value` pair. If a case-equivalent key is already present,
    /// its value is replaced, the previous value returned, and the stored casing kept.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.inner.insert(CaseKey(key.into()), value)
    }

    /// Returns a reference to the value for the case-equivalent of `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.inner.get(CaseStr::new(key))
    }

    /// Returns a mutable reference to the value for the case-equivalent of `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.inner.get_mut(CaseStr::new(key))
    }

    /// Returns the entry for the case-equivalent of `key`, with the stored casing.
    pub fn get_entry(&self, key: &str) -> Option<(&str, &V)> {
        let (k, v) = self.inner.get_entry(CaseStr::new(key))?;
        Some((k.as_str(), v))
    }

    /// Returns the position of the case-equivalent of `key` in insertion order.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.inner.index_of(CaseStr::new(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(CaseStr::new(key))
    }

    /// Returns the entry at `index` in insertion order.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See
    /// [`try_get_at`](CaseInsensitiveMap::try_get_at) for a non-panicking alternative.
    pub fn get_at(&self, index: usize) -> (&str, &V) {
        let (k, v) = self.inner.get_at(index);
        (k.as_str(), v)
    }

    pub fn try_get_at(&self, index: usize) -> Option<(&str, &V)> {
        let (k, v) = self.inner.try_get_at(index)?;
        Some((k.as_str(), v))
    }

    /// Replaces the value at `index` in insertion order, returning the previous value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set_at(&mut self, index: usize, value: V) -> V {
        self.inner.set_at(index, value)
    }

    /// Removes the entry for the case-equivalent of `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.inner.remove(CaseStr::new(key))
    }

    /// Removes the entry for the case-equivalent of `key`, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &str) -> Option<(String, V)> {
        let (k, v) = self.inner.remove_entry(CaseStr::new(key))?;
        Some((k.0, v))
    }

    /// Removes the entry at `index` in insertion order, returning it.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See
    /// [`try_remove_at`](CaseInsensitiveMap::try_remove_at) for a non-panicking alternative.
    pub fn remove_at(&mut self, index: usize) -> (String, V) {
        let (k, v) = self.inner.remove_at(index);
        (k.0, v)
    }

    pub fn try_remove_at(&mut self, index: usize) -> Option<(String, V)> {
        let (k, v) = self.inner.try_remove_at(index)?;
        Some((k.0, v))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the entries in insertion order, with stored casing.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over the entries in insertion order, with values mutable.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        self.into_iter()
    }

    /// Returns an iterator over the stored keys in insertion order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> Values<'_, V> {
        Values(self.iter())
    }

    /// Returns an iterator over the values in insertion order, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut(self.iter_mut())
    }
}

impl<V, B: BuildHasher + Default> Default for CaseInsensitiveMap<V, B> {
    fn default() -> Self {
        CaseInsensitiveMap::with_hasher(B::default())
    }
}

impl<V: Clone, B: BuildHasher + Clone> Clone for CaseInsensitiveMap<V, B> {
    fn clone(&self) -> Self {
        CaseInsensitiveMap { inner: self.inner.clone() }
    }
}

impl<V: PartialEq, B: BuildHasher> PartialEq for CaseInsensitiveMap<V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<V: Eq, B: BuildHasher> Eq for CaseInsensitiveMap<V, B> {}

impl<V, B: BuildHasher> Extend<(String, V)> for CaseInsensitiveMap<V, B> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V, B: BuildHasher + Default> FromIterator<(String, V)> for CaseInsensitiveMap<V, B> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = CaseInsensitiveMap::with_hasher(B::default());
        map.extend(iter);
        map
    }
}

impl<V, const N: usize> From<[(&str, V); N]> for CaseInsensitiveMap<V> {
    fn from(entries: [(&str, V); N]) -> Self {
        entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

impl<V: Debug, B: BuildHasher> Debug for CaseInsensitiveMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseInsensitiveMap")
            .field("inner", &self.inner)
            .finish()
    }
}

impl<V: Debug, B: BuildHasher> Display for CaseInsensitiveMap<V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
