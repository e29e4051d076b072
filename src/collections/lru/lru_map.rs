use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::mem;
use std::num::NonZero;

use super::Iter;
use crate::util::fmt::DebugRaw;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map with a fixed capacity that keeps its entries in access order and evicts the
/// least-recently used entry when a new key would exceed the capacity.
///
/// Entries live in slots carrying two sets of intrusive links: a bucket chain for hash lookup
/// and a recency ring ordered from least- to most-recently used. Every access that counts as a
/// "use" ([`get`](LruMap::get), [`get_mut`](LruMap::get_mut), [`insert`](LruMap::insert)) moves
/// the entry to the most-recently-used end; [`peek`](LruMap::peek) and
/// [`contains_key`](LruMap::contains_key) do not. Slot reclamation swaps the last slot into the
/// gap, so every operation is `O(1)` on average.
///
/// The capacity is fixed at construction and can never be zero; the bucket table is sized once
/// from it and never grows.
///
/// It is a logic error for keys in an LruMap to be manipulated in a way that changes their
/// hash. Because of this, LruMap's API prevents mutable access to its keys.
pub struct LruMap<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    pub(crate) buckets: Box<[Option<usize>]>,
    pub(crate) slots: Vec<Slot<K, V>>,
    /// The least-recently used slot.
    pub(crate) head: Option<usize>,
    /// The most-recently used slot.
    pub(crate) tail: Option<usize>,
    pub(crate) cap: NonZero<usize>,
    pub(crate) hasher: B,
}

pub(crate) struct Slot<K, V> {
    pub(crate) hash: u64,
    pub(crate) key: K,
    pub(crate) value: V,
    /// The neighboring slot toward the LRU end.
    pub(crate) prev: Option<usize>,
    /// The neighboring slot toward the MRU end.
    pub(crate) next: Option<usize>,
    pub(crate) chain: Option<usize>,
}

impl<K: Hash + Eq, V> LruMap<K, V> {
    /// Creates an LruMap holding at most `cap` entries, with the default hasher.
    pub fn new(cap: NonZero<usize>) -> LruMap<K, V> {
        LruMap::with_hasher(cap, RandomState::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> LruMap<K, V, B> {
    /// Creates an LruMap holding at most `cap` entries, with the provided `hasher`.
    pub fn with_hasher(cap: NonZero<usize>, hasher: B) -> LruMap<K, V, B> {
        // Size the table once so the load factor holds at full capacity, and keep it odd so
        // `hash % cap` spreads entries even for hashers with poor low bits.
        let buckets = (cap.get() * LOAD_FACTOR_DENOMINATOR / LOAD_FACTOR_NUMERATOR) | 1;

        LruMap {
            buckets: vec![None; buckets].into_boxed_slice(),
            slots: Vec::with_capacity(cap.get()),
            head: None,
            tail: None,
            cap,
            hasher,
        }
    }

    /// Returns the number of entries currently in the LruMap.
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the fixed capacity.
    pub const fn cap(&self) -> NonZero<usize> {
        self.cap
    }

    /// Inserts the provided `key`-`value` pair and marks it most-recently used. If the key was
    /// already present, its value is replaced and the previous value returned. Otherwise, if
    /// the map is full, the least-recently used entry is evicted and dropped.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.push(key, value).map(|(_, v)| v)
    }

    /// Like [`insert`](LruMap::insert), but returns the displaced entry: the previous pair for
    /// an existing key, or the evicted least-recently used pair if the insertion overflowed.
    pub fn push(&mut self, key: K, value: V) -> Option<(K, V)> {
        let hash = self.hasher.hash_one(&key);

        if let Some(index) = self.find_hashed(hash, &key) {
            let old = mem::replace(&mut self.slots[index].value, value);
            self.touch(index);
            // The stored key is retained; the caller gets their own copy back.
            return Some((key, old));
        }

        let evicted = if self.len() == self.cap.get() {
            self.pop_lru()
        } else {
            None
        };

        let bucket = self.bucket_for(hash);
        let index = self.slots.len();
        self.slots.push(Slot {
            hash,
            key,
            value,
            prev: None,
            next: None,
            chain: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(index);
        self.push_mru(index);

        evicted
    }

    /// Returns a reference to the value for `key` and marks the entry most-recently used.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(key)?;
        self.touch(index);
        Some(&self.slots[index].value)
    }

    /// Returns a mutable reference to the value for `key` and marks the entry most-recently
    /// used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(key)?;
        self.touch(index);
        Some(&mut self.slots[index].value)
    }

    /// Returns a reference to the value for `key` without affecting the access order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Some(&self.slots[self.find(key)?].value)
    }

    /// Returns the least-recently used entry without affecting the access order.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let slot = &self.slots[self.head?];
        Some((&slot.key, &slot.value))
    }

    /// Removes and returns the least-recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let head = self.head?;
        Some(self.remove_slot(head))
    }

    /// Removes the entry for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find(key)?;
        Some(self.remove_slot(index).1)
    }

    /// Returns true if `key` is present, without affecting the access order.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.buckets.fill(None);
        self.head = None;
        self.tail = None;
    }

    /// Returns an iterator over the entries from least- to most-recently used, without
    /// affecting the access order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> LruMap<K, V, B> {
    pub(crate) fn bucket_for(&self, hash: u64) -> usize {
        // The bucket table is never empty; its size comes from a NonZero capacity.
        (hash % self.buckets.len() as u64) as usize
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_hashed(self.hasher.hash_one(key), key)
    }

    pub(crate) fn find_hashed<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut curr = self.buckets[self.bucket_for(hash)];

        while let Some(index) = curr {
            let slot = &self.slots[index];
            if slot.hash == hash && slot.key.borrow() == key {
                return Some(index);
            }
            curr = slot.chain;
        }

        None
    }

    /// Moves the slot at `index` to the most-recently-used end of the ring.
    pub(crate) fn touch(&mut self, index: usize) {
        if self.tail == Some(index) {
            return;
        }
        self.unlink_ring(index);
        self.push_mru(index);
    }

    /// Appends the slot at `index` at the most-recently-used end of the ring.
    pub(crate) fn push_mru(&mut self, index: usize) {
        self.slots[index].prev = self.tail;
        self.slots[index].next = None;
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    /// Detaches the slot at `index` from the recency ring, repairing its neighbors.
    pub(crate) fn unlink_ring(&mut self, index: usize) {
        let (prev, next) = (self.slots[index].prev, self.slots[index].next);
        match prev {
            Some(p) => self.slots[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slots[n].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Detaches the slot at `index` from its bucket chain.
    pub(crate) fn unlink_chain(&mut self, index: usize) {
        let bucket = self.bucket_for(self.slots[index].hash);

        let mut prev: Option<usize> = None;
        let mut curr = self.buckets[bucket];
        while let Some(i) = curr {
            if i == index {
                let next = self.slots[i].chain;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(p) => self.slots[p].chain = next,
                }
                return;
            }
            prev = curr;
            curr = self.slots[i].chain;
        }
    }

    /// Fully removes the slot at `index` and returns its entry. The last slot is swapped into
    /// the gap and every link that referred to it is redirected.
    pub(crate) fn remove_slot(&mut self, index: usize) -> (K, V) {
        self.unlink_ring(index);
        self.unlink_chain(index);

        let last = self.slots.len() - 1;
        let slot = self.slots.swap_remove(index);
        if index != last {
            self.redirect(last, index);
        }

        (slot.key, slot.value)
    }

    /// Redirects every link that pointed at slot `from` to point at slot `to`, after a
    /// `swap_remove` moved it.
    pub(crate) fn redirect(&mut self, from: usize, to: usize) {
        let (hash, prev, next) = {
            let moved = &self.slots[to];
            (moved.hash, moved.prev, moved.next)
        };

        // The moved slot's bucket chain holds exactly one link to its old position.
        let bucket = self.bucket_for(hash);
        if self.buckets[bucket] == Some(from) {
            self.buckets[bucket] = Some(to);
        } else {
            let mut curr = self.buckets[bucket];
            while let Some(i) = curr {
                if self.slots[i].chain == Some(from) {
                    self.slots[i].chain = Some(to);
                    break;
                }
                curr = self.slots[i].chain;
            }
        }

        match prev {
            Some(p) => self.slots[p].next = Some(to),
            None => self.head = Some(to),
        }
        match next {
            Some(n) => self.slots[n].prev = Some(to),
            None => self.tail = Some(to),
        }
    }

    /// Walks the recency ring and the bucket chains and asserts they both describe every slot
    /// exactly once. Test support.
    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        let mut visited = 0;
        let mut curr = self.head;
        let mut prev = None;
        while let Some(index) = curr {
            assert_eq!(self.slots[index].prev, prev, "Ring links disagree at slot {index}!");
            visited += 1;
            prev = curr;
            curr = self.slots[index].next;
        }
        assert_eq!(self.tail, prev, "The ring doesn't end at the tail!");
        assert_eq!(visited, self.len(), "The ring doesn't thread every slot!");

        let mut seen = vec![false; self.slots.len()];
        for head in self.buckets.iter() {
            let mut curr = *head;
            while let Some(index) = curr {
                assert!(!seen[index], "Slot {index} is reachable through two chains!");
                seen[index] = true;
                curr = self.slots[index].chain;
            }
        }
        assert!(seen.iter().all(|s| *s), "Some slot is unreachable by hashing!");
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for LruMap<K, V, B> {
    fn clone(&self) -> Self {
        let mut map = LruMap::with_hasher(self.cap, self.hasher.clone());
        // Re-inserting in ring order reproduces the access order exactly.
        for (key, value) in self.iter() {
            map.push(key.clone(), value.clone());
        }
        map
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for LruMap<K, V, B> {
    /// Equality follows the standard map contract and ignores access order.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(k, v)| other.peek(k).is_some_and(|o| *v == *o))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for LruMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for LruMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruMap")
            .field("entries", &DebugRaw(format!(
                "[{}]",
                self.iter()
                    .map(|(k, v)| format!("({k:?}: {v:?})"))
                    .collect::<Vec<_>>()
                    .join(" <- ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap.get())
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for LruMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
