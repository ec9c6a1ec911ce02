//! Module implement ordered maps over [RbTree].
//!
//! Entries are stored as `(key, value)` pairs ordered by key. [Map] keeps
//! one entry per key, [MultiMap] keeps every inserted entry and orders
//! entries of equivalent keys by insertion.

use std::{cmp::Ordering, fmt, iter::FromIterator, mem};

use crate::{
    config::Config,
    rbtree::{Compare, Cursor, First, IntoIter, Iter, Natural, RbTree, Stats},
    Result,
};

/// Ordered map with unique keys.
pub struct Map<K, T, C = Natural> {
    tree: RbTree<(K, T), First, C>,
}

ordered_container!(Map, <K, T>, (K, T), K, First, validate_unique, "map");

impl<K, T, C> Map<K, T, C>
where
    C: Compare<K>,
{
    // Cursor to the entry for `key` and true, else to the position where
    // `key` belongs and false.
    fn locate(&self, key: &K) -> (Cursor, bool) {
        let cursor = self.tree.lower_bound(key);
        match self.tree.get(cursor) {
            Some((k, _)) if !self.tree.key_compare().less(key, k) => (cursor, true),
            _ => (cursor, false),
        }
    }

    /// Insert `value` under `key`. If `key` is already present its value
    /// is replaced and the old value returned, the stored key is kept.
    pub fn insert(&mut self, key: K, value: T) -> Option<T> {
        match self.locate(&key) {
            (cursor, true) => self
                .tree
                .get_mut(cursor)
                .map(|entry| mem::replace(&mut entry.1, value)),
            (hint, false) => {
                self.tree.insert_unique_hint(hint, (key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&T> {
        self.tree.get(self.tree.find(key)).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut T> {
        let cursor = self.tree.find(key);
        self.tree.get_mut(cursor).map(|(_, value)| value)
    }

    /// Return the value under `key`, inserting `T::default()` if `key` is
    /// not present.
    pub fn entry_or_default(&mut self, key: K) -> &mut T
    where
        T: Default,
    {
        let cursor = match self.locate(&key) {
            (cursor, true) => cursor,
            (hint, false) => self.tree.insert_unique_hint(hint, (key, T::default())),
        };
        match self.tree.get_mut(cursor) {
            Some((_, value)) => value,
            None => panic!("entry_or_default(): lost {:?} ? call-the-programmer", cursor),
        }
    }

    /// Remove entry for `key` and return its value.
    pub fn remove(&mut self, key: &K) -> Option<T> {
        let cursor = self.tree.find(key);
        self.tree.erase(cursor).map(|(_, value)| value)
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.tree.iter().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.tree.iter().map(|(_, value)| value)
    }
}

impl<K, T, C> Extend<(K, T)> for Map<K, T, C>
where
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, T, C> FromIterator<(K, T)> for Map<K, T, C>
where
    C: Compare<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, T, C> fmt::Debug for Map<K, T, C>
where
    K: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// Ordered map allowing several entries per key.
pub struct MultiMap<K, T, C = Natural> {
    tree: RbTree<(K, T), First, C>,
}

ordered_container!(MultiMap, <K, T>, (K, T), K, First, validate, "multimap");

impl<K, T, C> MultiMap<K, T, C>
where
    C: Compare<K>,
{
    /// Insert entry after all entries with key equivalent to `key`.
    pub fn insert(&mut self, key: K, value: T) -> Cursor {
        self.tree.insert_equal((key, value))
    }

    /// Insert entry using `hint` as the position right after it.
    pub fn insert_hint(&mut self, hint: Cursor, key: K, value: T) -> Cursor {
        self.tree.insert_equal_hint(hint, (key, value))
    }

    /// Values of all entries under `key`, in insertion order.
    pub fn get_all(&self, key: &K) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        let (first, last) = self.tree.equal_range(key);
        self.tree.range(first, last).map(|(_, value)| value)
    }

    /// Remove all entries under `key`, return the number removed.
    pub fn remove(&mut self, key: &K) -> usize {
        self.tree.erase_key(key)
    }
}

impl<K, T, C> Extend<(K, T)> for MultiMap<K, T, C>
where
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        self.tree.extend_equal(iter)
    }
}

impl<K, T, C> FromIterator<(K, T)> for MultiMap<K, T, C>
where
    C: Compare<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, T, C> fmt::Debug for MultiMap<K, T, C>
where
    K: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "map_test.rs"]
mod map_test;
