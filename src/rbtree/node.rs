use std::fmt;

/// Color of a tree node. Absent children are treated as black.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// Handle to a node slot in the tree's arena.
///
/// Handles stay stable for the node's lifetime, rotations and
/// rebalancing only relink nodes, they never move values between slots.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// Node corresponds to a single value in RbTree instance.
//
// Child links are the only way to reach a node from the root, parent
// link is a back reference used for rotations and cursor movement.
#[derive(Clone)]
pub(crate) struct Node<V> {
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) value: V,
}

impl<V> Node<V> {
    // new nodes are always red leaves.
    pub(crate) fn new(value: V) -> Node<V> {
        Node {
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
            value,
        }
    }

    #[inline]
    pub(crate) fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[cfg(test)]
    pub(crate) fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[cfg(test)]
    pub(crate) fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
