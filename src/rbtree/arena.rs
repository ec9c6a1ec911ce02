// Module implement node storage for RbTree.
//
// Nodes live in a flat vector of slots, released slots are kept in a
// free list and reused by later allocations. Every node of a tree is owned
// by its arena, links between nodes are plain slot handles.

use std::ops::{Index, IndexMut};

use crate::rbtree::node::{Node, NodeId};

#[derive(Clone)]
pub(crate) struct Arena<V> {
    slots: Vec<Option<Node<V>>>,
    free: Vec<usize>,
}

impl<V> Arena<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Arena<V> {
        Arena {
            slots: Vec::with_capacity(capacity),
            free: Vec::default(),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub(crate) fn alloc(&mut self, node: Node<V>) -> NodeId {
        match self.free.pop() {
            Some(off) => {
                self.slots[off] = Some(node);
                NodeId(off)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Release the slot and return its node. Panics if slot is not live.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<V> {
        match self.slots.get_mut(id.0).and_then(Option::take) {
            Some(node) => {
                self.free.push(id.0);
                node
            }
            None => panic!("release(): dead slot {:?} ? call-the-programmer", id),
        }
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<V>> {
        self.slots.get(id.0).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.slots.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Drop all nodes, keeping the allocated capacity.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }

    /// Take out all live nodes in slot order, leaving the arena empty.
    pub(crate) fn take_slots(&mut self) -> Vec<Option<Node<V>>> {
        self.free.clear();
        std::mem::take(&mut self.slots)
    }
}

impl<V> Index<NodeId> for Arena<V> {
    type Output = Node<V>;

    fn index(&self, id: NodeId) -> &Node<V> {
        match self.get(id) {
            Some(node) => node,
            None => panic!("index(): dead slot {:?} ? call-the-programmer", id),
        }
    }
}

impl<V> IndexMut<NodeId> for Arena<V> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<V> {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("index_mut(): dead slot {:?} ? call-the-programmer", id),
        }
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;
