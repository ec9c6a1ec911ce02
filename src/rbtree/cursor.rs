use std::{iter::FusedIterator, vec};

use crate::rbtree::{node::NodeId, raw::RawTree};

/// Cursor names a position in the tree, either a node or the end of the
/// sequence.
///
/// Cursor is a plain handle, it does not borrow the tree and must be
/// moved and dereferenced through the tree that produced it. Erasing a
/// node invalidates only the cursors naming that node. Equality is
/// identity of the named node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Position of a node holding a value.
    At(NodeId),
    /// One past the last value.
    End,
}

impl Cursor {
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self, Cursor::End)
    }

    #[inline]
    pub(crate) fn to_node(self) -> Option<NodeId> {
        match self {
            Cursor::At(id) => Some(id),
            Cursor::End => None,
        }
    }
}

impl From<Option<NodeId>> for Cursor {
    fn from(id: Option<NodeId>) -> Cursor {
        match id {
            Some(id) => Cursor::At(id),
            None => Cursor::End,
        }
    }
}

impl<V> RawTree<V> {
    pub(crate) fn begin(&self) -> Cursor {
        self.leftmost.into()
    }

    /// Right subtree's minimum, else the first ancestor reached from a
    /// left child. Incrementing the last node or `End` gives `End`.
    pub(crate) fn next(&self, cursor: Cursor) -> Cursor {
        match cursor {
            Cursor::At(id) if self.nodes.get(id).is_some() => self.successor(id).into(),
            _ => Cursor::End,
        }
    }

    /// Decrementing `End` gives the last node. Otherwise left subtree's
    /// maximum, else the first ancestor reached from a right child.
    /// Decrementing the first node gives `End`.
    pub(crate) fn prev(&self, cursor: Cursor) -> Cursor {
        match cursor {
            Cursor::End => self.rightmost.into(),
            Cursor::At(id) if self.nodes.get(id).is_some() => self.predecessor(id).into(),
            Cursor::At(_) => Cursor::End,
        }
    }

    pub(crate) fn get(&self, cursor: Cursor) -> Option<&V> {
        let id = cursor.to_node()?;
        self.nodes.get(id).map(|node| &node.value)
    }

    pub(crate) fn get_mut(&mut self, cursor: Cursor) -> Option<&mut V> {
        let id = cursor.to_node()?;
        self.nodes.get_mut(id).map(|node| &mut node.value)
    }

    /// Number of steps from `first` to `last`.
    pub(crate) fn distance(&self, mut first: Cursor, last: Cursor) -> usize {
        let mut n = 0;
        while first != last && !first.is_end() {
            first = self.next(first);
            n += 1;
        }
        n
    }
}

/// Iterator over values between a pair of cursors, `[front, back)`.
pub struct Iter<'a, V> {
    tree: &'a RawTree<V>,
    front: Cursor,
    back: Cursor,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    // `remaining` is the number of steps from front to back.
    pub(crate) fn new(
        tree: &'a RawTree<V>,
        front: Cursor,
        back: Cursor,
        remaining: usize,
    ) -> Iter<'a, V> {
        Iter {
            tree,
            front,
            back,
            remaining,
        }
    }

    /// Cursor to the value that shall be returned by the next call
    /// to `next()`.
    pub fn cursor(&self) -> Cursor {
        self.front
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let value = self.tree.get(self.front)?;
        self.front = self.tree.next(self.front);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> DoubleEndedIterator for Iter<'a, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.tree.prev(self.back);
        self.remaining -= 1;
        self.tree.get(self.back)
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V> FusedIterator for Iter<'a, V> {}

impl<'a, V> Clone for Iter<'a, V> {
    fn clone(&self) -> Self {
        Iter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator, yield values in order.
pub struct IntoIter<V> {
    values: vec::IntoIter<V>,
}

impl<V> IntoIter<V> {
    pub(crate) fn new(tree: RawTree<V>) -> IntoIter<V> {
        IntoIter {
            values: tree.into_values().into_iter(),
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoIter<V> {
    fn next_back(&mut self) -> Option<V> {
        self.values.next_back()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
