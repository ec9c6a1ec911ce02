// Module ``index`` implement the tree container over RawTree.
//
// RbTree own the raw tree, along with the key extractor and the
// comparator supplied at construction. Every mutation is a raw
// structural insert or erase, immediately followed by the matching
// rebalance, refer to `insert.rs` and `delete.rs`.
//
// **Insert policies**:
//
// *unique*, an equivalent key already present rejects the new value,
// and the cursor to the existing value is returned.
//
// *equal*, new value is always inserted after all of its equivalents,
// hence a run of equivalent keys is kept in insertion order.

use log::{debug, info};
use rand::Rng;

use std::{cmp::Ordering, fmt, marker, mem};

use crate::{
    config::Config,
    rbtree::{
        cursor::{IntoIter, Iter},
        key::{Compare, Identity, KeyOf, Natural, ValueCompare},
        node::NodeId,
        raw::{RawTree, Side},
        Cursor,
    },
};

/// Ordered index of values using red-black tree.
///
/// Values are ordered by the key that `X` extracts out of them, compared
/// with `C`. Defaults to a set of [Ord] values.
pub struct RbTree<V, X = Identity, C = Natural> {
    name: String,
    max_depth: usize,
    key_of: X,
    cmp: C,
    pub(crate) raw: RawTree<V>,
}

impl<V> RbTree<V, Identity, Natural>
where
    V: Ord,
{
    /// Create an empty tree of [Ord] values, identified by `name`.
    pub fn new(name: &str) -> RbTree<V, Identity, Natural> {
        RbTree::from_config(&Config::new(name), Identity, Natural)
    }
}

impl<V, X, C> RbTree<V, X, C>
where
    X: KeyOf<V>,
    C: Compare<X::Key>,
{
    /// Create an empty tree identified by `name`, ordering values by the
    /// key extracted with `key_of` and compared with `cmp`.
    pub fn with_compare(name: &str, key_of: X, cmp: C) -> RbTree<V, X, C> {
        RbTree::from_config(&Config::new(name), key_of, cmp)
    }

    /// Create an empty tree using configuration.
    pub fn from_config(config: &Config, key_of: X, cmp: C) -> RbTree<V, X, C> {
        debug!(
            target: "rbtree",
            "{:?}, new index capacity:{} max_depth:{}",
            config.name, config.capacity, config.max_depth
        );

        RbTree {
            name: config.name.clone(),
            max_depth: config.max_depth,
            key_of,
            cmp,
            raw: RawTree::with_capacity(config.capacity),
        }
    }
}

/// Maintenance API.
impl<V, X, C> RbTree<V, X, C> {
    /// Identify this instance.
    pub fn to_name(&self) -> String {
        self.name.clone()
    }

    /// Return number of values in this index.
    #[inline]
    pub fn len(&self) -> usize {
        self.raw.n_count
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.n_count == 0
    }

    /// Maximum tree depth tolerated by [RbTree::validate].
    pub fn to_max_depth(&self) -> usize {
        self.max_depth
    }

    /// Return the key extractor supplied at construction.
    pub fn key_extractor(&self) -> &X {
        &self.key_of
    }

    /// Return the comparator supplied at construction.
    pub fn key_compare(&self) -> &C {
        &self.cmp
    }

    /// Return a comparator over stored values.
    pub fn value_compare(&self) -> ValueCompare<'_, V, X, C> {
        ValueCompare {
            key_of: &self.key_of,
            cmp: &self.cmp,
            _value: marker::PhantomData,
        }
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        debug!(target: "rbtree", "{:?}, clear {} items", self.name, self.len());
        self.raw.clear()
    }

    /// Exchange contents with `other` in O(1). Name, key extractor and
    /// comparator travel with the contents.
    pub fn swap(&mut self, other: &mut RbTree<V, X, C>) {
        debug!(target: "rbtree", "{:?}, swap with {:?}", self.name, other.name);
        mem::swap(self, other)
    }
}

/// Cursor API.
impl<V, X, C> RbTree<V, X, C> {
    /// Cursor to the first value, or `End` for empty tree.
    #[inline]
    pub fn begin(&self) -> Cursor {
        self.raw.begin()
    }

    /// Cursor one past the last value.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::End
    }

    /// Step cursor forward.
    #[inline]
    pub fn next(&self, cursor: Cursor) -> Cursor {
        self.raw.next(cursor)
    }

    /// Step cursor backward, stepping back from `End` gives the last value.
    #[inline]
    pub fn prev(&self, cursor: Cursor) -> Cursor {
        self.raw.prev(cursor)
    }

    /// Value at cursor, None for `End` or erased cursors. Slot of an
    /// erased node is reused by later inserts, hence a stale cursor may
    /// name a newer value.
    #[inline]
    pub fn get(&self, cursor: Cursor) -> Option<&V> {
        self.raw.get(cursor)
    }

    /// Mutable value at cursor. Caller must not change the value's key in
    /// a way that changes its order.
    #[inline]
    pub fn get_mut(&mut self, cursor: Cursor) -> Option<&mut V> {
        self.raw.get_mut(cursor)
    }

    /// First value in order.
    pub fn first(&self) -> Option<&V> {
        self.raw.leftmost.map(|id| self.raw.value(id))
    }

    /// Last value in order.
    pub fn last(&self) -> Option<&V> {
        self.raw.rightmost.map(|id| self.raw.value(id))
    }

    /// Iterate over all values in order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.raw, self.begin(), Cursor::End, self.len())
    }

    /// Iterate over values from `first` upto, but excluding, `last`.
    pub fn range(&self, first: Cursor, last: Cursor) -> Iter<'_, V> {
        let n = self.raw.distance(first, last);
        Iter::new(&self.raw, first, last, n)
    }

    /// Number of steps from `first` to `last`.
    pub fn distance(&self, first: Cursor, last: Cursor) -> usize {
        self.raw.distance(first, last)
    }

    /// Pick a value by walking down from root along random branches.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&V> {
        let mut node = self.raw.root?;
        let at_depth = rng.gen::<u8>() % 40;
        for _ in 0..at_depth {
            let next = if rng.gen::<bool>() {
                self.raw.left(node)
            } else {
                self.raw.right(node)
            };
            match next {
                Some(next) => node = next,
                None => break,
            }
        }
        Some(self.raw.value(node))
    }
}

/// Search API.
impl<V, X, C> RbTree<V, X, C>
where
    X: KeyOf<V>,
    C: Compare<X::Key>,
{
    #[inline]
    fn key(&self, id: NodeId) -> &X::Key {
        self.key_of.key_of(self.raw.value(id))
    }

    /// Cursor to the first value equivalent to `key`, else `End`.
    pub fn find(&self, key: &X::Key) -> Cursor {
        match self.lower_bound(key) {
            Cursor::At(id) if !self.cmp.less(key, self.key(id)) => Cursor::At(id),
            _ => Cursor::End,
        }
    }

    /// Check whether a value equivalent to `key` is present.
    pub fn contains(&self, key: &X::Key) -> bool {
        !self.find(key).is_end()
    }

    /// Cursor to the first value whose key is not less than `key`.
    pub fn lower_bound(&self, key: &X::Key) -> Cursor {
        let (mut node, mut found) = (self.raw.root, None);
        while let Some(id) = node {
            if self.cmp.less(self.key(id), key) {
                node = self.raw.right(id);
            } else {
                found = Some(id);
                node = self.raw.left(id);
            }
        }
        found.into()
    }

    /// Cursor to the first value whose key is greater than `key`.
    pub fn upper_bound(&self, key: &X::Key) -> Cursor {
        let (mut node, mut found) = (self.raw.root, None);
        while let Some(id) = node {
            if self.cmp.less(key, self.key(id)) {
                found = Some(id);
                node = self.raw.left(id);
            } else {
                node = self.raw.right(id);
            }
        }
        found.into()
    }

    /// Return `(lower_bound, upper_bound)`, the run of values equivalent
    /// to `key`.
    pub fn equal_range(&self, key: &X::Key) -> (Cursor, Cursor) {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Number of values equivalent to `key`.
    pub fn count(&self, key: &X::Key) -> usize {
        let (first, last) = self.equal_range(key);
        self.raw.distance(first, last)
    }
}

/// Mutation API.
impl<V, X, C> RbTree<V, X, C>
where
    X: KeyOf<V>,
    C: Compare<X::Key>,
{
    /// Insert `value` unless an equivalent key is present. Return the
    /// cursor to the new value and true, or to the existing value and
    /// false.
    pub fn insert_unique(&mut self, value: V) -> (Cursor, bool) {
        let (mut parent, mut side) = (None, Side::Left);
        let mut node = self.raw.root;
        while let Some(id) = node {
            parent = Some(id);
            let key = self.key_of.key_of(&value);
            if self.cmp.less(key, self.key(id)) {
                side = Side::Left;
                node = self.raw.left(id);
            } else if !self.cmp.less(self.key(id), key) {
                // report the first of a run of equivalents.
                return (self.lower_bound(key), false);
            } else {
                side = Side::Right;
                node = self.raw.right(id);
            }
        }
        (Cursor::At(self.raw.attach(parent, side, value)), true)
    }

    /// Insert `value` after all values equivalent to it.
    pub fn insert_equal(&mut self, value: V) -> Cursor {
        let (mut parent, mut side) = (None, Side::Left);
        let mut node = self.raw.root;
        while let Some(id) = node {
            parent = Some(id);
            if self.cmp.less(self.key_of.key_of(&value), self.key(id)) {
                side = Side::Left;
                node = self.raw.left(id);
            } else {
                side = Side::Right;
                node = self.raw.right(id);
            }
        }
        Cursor::At(self.raw.attach(parent, side, value))
    }

    /// Insert `value` unless an equivalent key is present, using `hint`
    /// as the position right after the value. Correct hint avoids the
    /// descent from root, wrong hint falls back to [RbTree::insert_unique].
    /// Return cursor to the inserted or the existing value.
    pub fn insert_unique_hint(&mut self, hint: Cursor, value: V) -> Cursor {
        let key = self.key_of.key_of(&value);
        let slot = self.hint_slot(hint, |cmp, before, after| {
            before.map_or(true, |b| cmp.less(b, key)) && after.map_or(true, |a| cmp.less(key, a))
        });
        match slot {
            Some((at, side)) => Cursor::At(self.raw.attach(Some(at), side, value)),
            None => self.insert_unique(value).0,
        }
    }

    /// Insert `value`, using `hint` as the position right after the value.
    /// Correct hint avoids the descent from root, wrong hint falls back
    /// to [RbTree::insert_equal].
    pub fn insert_equal_hint(&mut self, hint: Cursor, value: V) -> Cursor {
        let key = self.key_of.key_of(&value);
        let slot = self.hint_slot(hint, |cmp, before, after| {
            before.map_or(true, |b| !cmp.less(key, b)) && after.map_or(true, |a| !cmp.less(a, key))
        });
        match slot {
            Some((at, side)) => Cursor::At(self.raw.attach(Some(at), side, value)),
            None => self.insert_equal(value),
        }
    }

    // Locate an empty child slot between prev(hint) and hint, provided
    // `fits` accepts the keys on either side. The predecessor of a node
    // either has no right child, or the node has no left child.
    fn hint_slot<F>(&self, hint: Cursor, fits: F) -> Option<(NodeId, Side)>
    where
        F: Fn(&C, Option<&X::Key>, Option<&X::Key>) -> bool,
    {
        if self.is_empty() {
            return None;
        }

        let after = match hint {
            Cursor::At(id) if self.raw.nodes.get(id).is_some() => Some(id),
            Cursor::At(_) => return None,
            Cursor::End => None,
        };
        let before = self.raw.prev(hint).to_node();

        let (bkey, akey) = (before.map(|b| self.key(b)), after.map(|a| self.key(a)));
        if !fits(&self.cmp, bkey, akey) {
            return None;
        }

        match (before, after) {
            (Some(b), _) if self.raw.right(b).is_none() => Some((b, Side::Right)),
            (_, Some(a)) if self.raw.left(a).is_none() => Some((a, Side::Left)),
            _ => None,
        }
    }

    /// Insert values from `iter`, skipping equivalents already present.
    /// Return number of values inserted.
    pub fn extend_unique<I>(&mut self, iter: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        iter.into_iter()
            .map(|value| self.insert_unique(value).1)
            .filter(|inserted| *inserted)
            .count()
    }

    /// Insert all values from `iter`.
    pub fn extend_equal<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = V>,
    {
        for value in iter {
            self.insert_equal(value);
        }
    }

    /// Erase value at `cursor` and return it. `End` and erased cursors
    /// are ignored.
    pub fn erase(&mut self, cursor: Cursor) -> Option<V> {
        match cursor {
            Cursor::At(id) if self.raw.nodes.get(id).is_some() => Some(self.raw.unlink(id)),
            _ => None,
        }
    }

    /// Erase values from `first` upto, but excluding, `last`. Return
    /// number of values erased.
    pub fn erase_range(&mut self, mut first: Cursor, last: Cursor) -> usize {
        if first == self.begin() && last.is_end() {
            let n = self.len();
            self.clear();
            return n;
        }

        let mut n = 0;
        while first != last && !first.is_end() {
            // successor is relinked, never moved, by erase.
            let next = self.raw.next(first);
            if self.erase(first).is_some() {
                n += 1;
            }
            first = next;
        }
        n
    }

    /// Erase all values equivalent to `key`, return number of values
    /// erased.
    pub fn erase_key(&mut self, key: &X::Key) -> usize {
        let (first, last) = self.equal_range(key);
        self.erase_range(first, last)
    }

    /// Erase all values equivalent to any of the `keys`.
    pub fn erase_keys<'a, I>(&mut self, keys: I) -> usize
    where
        I: IntoIterator<Item = &'a X::Key>,
        X::Key: 'a,
    {
        keys.into_iter().map(|key| self.erase_key(key)).sum()
    }
}

/// Copy API.
impl<V, X, C> RbTree<V, X, C>
where
    V: Clone,
{
    /// Replace contents with a structural copy of `other`. Destination
    /// keeps its name, key extractor and comparator.
    pub fn assign(&mut self, other: &RbTree<V, X, C>) {
        info!(
            target: "rbtree",
            "{:?}, assign {} items from {:?}",
            self.name,
            other.len(),
            other.name
        );
        other.raw.copy_into(&mut self.raw)
    }
}

impl<V, X, C> Clone for RbTree<V, X, C>
where
    V: Clone,
    X: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        let mut raw = RawTree::with_capacity(self.len());
        self.raw.copy_into(&mut raw);
        RbTree {
            name: self.name.clone(),
            max_depth: self.max_depth,
            key_of: self.key_of.clone(),
            cmp: self.cmp.clone(),
            raw,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.name = source.name.clone();
        self.max_depth = source.max_depth;
        self.key_of = source.key_of.clone();
        self.cmp = source.cmp.clone();
        source.raw.copy_into(&mut self.raw)
    }
}

impl<V, X, C> PartialEq for RbTree<V, X, C>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<V, X, C> Eq for RbTree<V, X, C> where V: Eq {}

impl<V, X, C> PartialOrd for RbTree<V, X, C>
where
    V: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<V, X, C> Ord for RbTree<V, X, C>
where
    V: Ord,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<V, X, C> fmt::Debug for RbTree<V, X, C>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, V, X, C> IntoIterator for &'a RbTree<V, X, C> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Iter<'a, V> {
        self.iter()
    }
}

impl<V, X, C> IntoIterator for RbTree<V, X, C> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> IntoIter<V> {
        IntoIter::new(self.raw)
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
