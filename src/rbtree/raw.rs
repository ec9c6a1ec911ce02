// Module implement the comparator agnostic part of RbTree.
//
// RawTree hold the node arena and the tree header, root, cached minimum
// and cached maximum. Rotations, rebalancing, cursor movement and
// structural copy operate only on links and colors, hence they are
// implemented here without any knowledge of keys. Rebalancing lives in
// sibling modules as further `impl RawTree` blocks.

use crate::rbtree::{
    arena::Arena,
    node::{Color, Node, NodeId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn flip(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

pub(crate) struct RawTree<V> {
    pub(crate) nodes: Arena<V>,
    pub(crate) root: Option<NodeId>,
    pub(crate) leftmost: Option<NodeId>,
    pub(crate) rightmost: Option<NodeId>,
    pub(crate) n_count: usize,
}

impl<V> RawTree<V> {
    pub(crate) fn with_capacity(capacity: usize) -> RawTree<V> {
        RawTree {
            nodes: Arena::with_capacity(capacity),
            root: None,
            leftmost: None,
            rightmost: None,
            n_count: 0,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self, id: Option<NodeId>) -> bool {
        id.map_or(false, |id| self.nodes[id].is_red())
    }

    #[inline]
    pub(crate) fn is_black(&self, id: Option<NodeId>) -> bool {
        id.map_or(true, |id| self.nodes[id].is_black())
    }

    #[inline]
    pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left
    }

    #[inline]
    pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].right
    }

    #[inline]
    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    #[inline]
    pub(crate) fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    #[inline]
    pub(crate) fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, id: Option<NodeId>, parent: Option<NodeId>) {
        if let Some(id) = id {
            self.nodes[id].parent = parent
        }
    }

    #[inline]
    pub(crate) fn set_color(&mut self, id: Option<NodeId>, color: Color) {
        if let Some(id) = id {
            self.nodes[id].color = color
        }
    }

    #[inline]
    pub(crate) fn value(&self, id: NodeId) -> &V {
        &self.nodes[id].value
    }

    /// Which side of its parent is `id` hanging from, None for root.
    pub(crate) fn side_of(&self, id: NodeId) -> Option<Side> {
        let parent = self.parent(id)?;
        if self.left(parent) == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Make `new` take the place of `old` under old's parent, or as root.
    /// Only the parent's child link and the root are updated.
    pub(crate) fn replace_child(&mut self, old: NodeId, new: Option<NodeId>) {
        match (self.parent(old), self.side_of(old)) {
            (Some(parent), Some(side)) => self.set_child(parent, side, new),
            _ => self.root = new,
        }
    }

    pub(crate) fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.left(id) {
            id = left
        }
        id
    }

    pub(crate) fn maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.right(id) {
            id = right
        }
        id
    }

    /// In-order successor, None when `id` is the last node.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.right(id) {
            return Some(self.minimum(right));
        }
        let mut node = id;
        loop {
            let parent = self.parent(node)?;
            if self.left(parent) == Some(node) {
                break Some(parent);
            }
            node = parent;
        }
    }

    /// In-order predecessor, None when `id` is the first node.
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.left(id) {
            return Some(self.maximum(left));
        }
        let mut node = id;
        loop {
            let parent = self.parent(node)?;
            if self.right(parent) == Some(node) {
                break Some(parent);
            }
            node = parent;
        }
    }

    /// Recompute cached extremes from the root.
    pub(crate) fn reset_extremes(&mut self) {
        self.leftmost = self.root.map(|root| self.minimum(root));
        self.rightmost = self.root.map(|root| self.maximum(root));
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.leftmost = None;
        self.rightmost = None;
        self.n_count = 0;
    }

    /// Clone nodes one by one, preserving shape and colors, into a
    /// compacted arena. Walk uses an explicit stack of (source, clone)
    /// pairs instead of recursion.
    pub(crate) fn copy_into(&self, dst: &mut RawTree<V>)
    where
        V: Clone,
    {
        dst.clear();

        if let Some(root) = self.root {
            let top = dst.nodes.alloc(self.clone_node(root, None));
            dst.root = Some(top);

            let mut stack = vec![(root, top)];
            while let Some((src, cur)) = stack.pop() {
                if let Some(right) = self.right(src) {
                    let id = dst.nodes.alloc(self.clone_node(right, Some(cur)));
                    dst.nodes[cur].right = Some(id);
                    stack.push((right, id));
                }
                if let Some(left) = self.left(src) {
                    let id = dst.nodes.alloc(self.clone_node(left, Some(cur)));
                    dst.nodes[cur].left = Some(id);
                    stack.push((left, id));
                }
            }
        }

        dst.n_count = self.n_count;
        dst.reset_extremes();
    }

    fn clone_node(&self, id: NodeId, parent: Option<NodeId>) -> Node<V>
    where
        V: Clone,
    {
        let src = &self.nodes[id];
        Node {
            color: src.color,
            parent,
            left: None,
            right: None,
            value: src.value.clone(),
        }
    }

    /// Node handles in in-order sequence.
    pub(crate) fn in_order(&self) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(self.n_count);
        let mut node = self.leftmost;
        while let Some(id) = node {
            ids.push(id);
            node = self.successor(id);
        }
        ids
    }

    /// Consume the tree, returning values in in-order sequence.
    pub(crate) fn into_values(mut self) -> Vec<V> {
        let ids = self.in_order();
        let mut slots = self.nodes.take_slots();
        ids.into_iter()
            .filter_map(|id| slots[id.0].take().map(|node| node.value))
            .collect()
    }
}

// Load values through a plain binary-search descent, equal values go
// right, and rebalance after each insert.
#[cfg(test)]
pub(crate) fn load_raw<V>(values: &[V]) -> RawTree<V>
where
    V: Clone + Ord,
{
    let mut raw = RawTree::with_capacity(values.len());
    for value in values.iter().cloned() {
        let (mut parent, mut side, mut node) = (None, Side::Left, raw.root);
        while let Some(id) = node {
            parent = Some(id);
            if value < *raw.value(id) {
                side = Side::Left;
                node = raw.left(id);
            } else {
                side = Side::Right;
                node = raw.right(id);
            }
        }
        raw.attach(parent, side, value);
    }
    raw
}

// Check links, colors and black-height of the whole tree, return
// the in-order values. Panics on the first violation.
#[cfg(test)]
pub(crate) fn check_raw<V>(raw: &RawTree<V>) -> Vec<V>
where
    V: Clone + Ord + std::fmt::Debug,
{
    let mut blacks = None;
    let mut stack: Vec<(NodeId, usize)> = raw.root.iter().map(|id| (*id, 0)).collect();
    assert!(raw.is_black(raw.root), "root must be black");
    while let Some((id, mut n_blacks)) = stack.pop() {
        if raw.nodes[id].is_black() {
            n_blacks += 1;
        }
        for child in [raw.left(id), raw.right(id)].iter() {
            match child {
                Some(child) => {
                    assert_eq!(raw.parent(*child), Some(id));
                    assert!(!(raw.is_red(Some(id)) && raw.is_red(Some(*child))));
                    stack.push((*child, n_blacks));
                }
                None => match blacks {
                    None => blacks = Some(n_blacks),
                    Some(b) => assert_eq!(b, n_blacks, "unbalanced blacks"),
                },
            }
        }
    }

    let values: Vec<V> = raw.in_order().into_iter().map(|id| raw.value(id).clone()).collect();
    assert_eq!(values.len(), raw.n_count);
    assert_eq!(raw.nodes.len(), raw.n_count);
    assert!(values.windows(2).all(|w| w[0] <= w[1]), "{:?}", values);
    assert_eq!(raw.leftmost, raw.root.map(|r| raw.minimum(r)));
    assert_eq!(raw.rightmost, raw.root.map(|r| raw.maximum(r)));
    values
}

#[cfg(test)]
#[path = "raw_test.rs"]
mod raw_test;
