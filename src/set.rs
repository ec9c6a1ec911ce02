//! Module implement ordered sets over [RbTree].
//!
//! [Set] keeps unique keys, [MultiSet] keeps every inserted key and
//! orders equivalent keys by insertion.

use std::{cmp::Ordering, fmt, iter::FromIterator};

use crate::{
    config::Config,
    rbtree::{Compare, Cursor, Identity, IntoIter, Iter, Natural, RbTree, Stats},
    Result,
};

/// Ordered set of unique keys.
pub struct Set<K, C = Natural> {
    tree: RbTree<K, Identity, C>,
}

ordered_container!(Set, <K>, K, K, Identity, validate_unique, "set");

impl<K, C> Set<K, C>
where
    C: Compare<K>,
{
    /// Insert `key`, return false if an equivalent key is already present,
    /// in which case the set is left unchanged.
    pub fn insert(&mut self, key: K) -> bool {
        self.tree.insert_unique(key).1
    }

    /// Insert `key` using `hint` as the position right after it.
    pub fn insert_hint(&mut self, hint: Cursor, key: K) -> Cursor {
        self.tree.insert_unique_hint(hint, key)
    }

    /// Return the stored key equivalent to `key`.
    pub fn get(&self, key: &K) -> Option<&K> {
        self.tree.get(self.tree.find(key))
    }

    /// Remove key equivalent to `key`, return whether it was present.
    pub fn remove(&mut self, key: &K) -> bool {
        self.tree.erase_key(key) > 0
    }

    pub fn pop_first(&mut self) -> Option<K> {
        let cursor = self.tree.begin();
        self.tree.erase(cursor)
    }

    pub fn pop_last(&mut self) -> Option<K> {
        let cursor = self.tree.prev(Cursor::End);
        self.tree.erase(cursor)
    }
}

impl<K, C> Extend<K> for Set<K, C>
where
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.tree.extend_unique(iter);
    }
}

impl<K, C> FromIterator<K> for Set<K, C>
where
    C: Compare<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<K, C> fmt::Debug for Set<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Ordered collection of keys, equivalent keys are kept in insertion
/// order.
pub struct MultiSet<K, C = Natural> {
    tree: RbTree<K, Identity, C>,
}

ordered_container!(MultiSet, <K>, K, K, Identity, validate, "multiset");

impl<K, C> MultiSet<K, C>
where
    C: Compare<K>,
{
    /// Insert `key` after all keys equivalent to it.
    pub fn insert(&mut self, key: K) -> Cursor {
        self.tree.insert_equal(key)
    }

    /// Insert `key` using `hint` as the position right after it.
    pub fn insert_hint(&mut self, hint: Cursor, key: K) -> Cursor {
        self.tree.insert_equal_hint(hint, key)
    }

    /// Remove all keys equivalent to `key`, return the number removed.
    pub fn remove(&mut self, key: &K) -> usize {
        self.tree.erase_key(key)
    }
}

impl<K, C> Extend<K> for MultiSet<K, C>
where
    C: Compare<K>,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.tree.extend_equal(iter)
    }
}

impl<K, C> FromIterator<K> for MultiSet<K, C>
where
    C: Compare<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<K, C> fmt::Debug for MultiSet<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "set_test.rs"]
mod set_test;
