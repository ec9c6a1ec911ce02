use log::error;

use std::{fmt, mem};

use crate::{
    rbtree::{
        key::{Compare, KeyOf},
        node::NodeId,
        stats::{Depth, Stats},
        RbTree,
    },
    Result,
};

impl<V, X, C> RbTree<V, X, C>
where
    X: KeyOf<V>,
    C: Compare<X::Key>,
    X::Key: fmt::Debug,
{
    /// Validate the tree against all red-black invariants, intended for
    /// tests and tooling.
    ///
    /// * root node must be black, and must not have a parent.
    /// * no red node shall have a red child.
    /// * every path from a node to a nil child shall pass through the
    ///   same number of black nodes.
    /// * in-order walk shall be sorted, non-decreasing, by key.
    /// * cached minimum and maximum shall be the first and last nodes.
    /// * node count shall match the nodes reachable from root, and the
    ///   live nodes in the arena.
    /// * child and parent links shall agree.
    /// * tree depth shall not exceed configured `max_depth`.
    pub fn validate(&self) -> Result<()> {
        self.validate_with(false)
    }

    /// Same as [RbTree::validate], additionally in-order walk shall be
    /// strictly increasing, no two values shall have equivalent keys.
    /// Applicable to trees populated only with unique inserts.
    pub fn validate_unique(&self) -> Result<()> {
        self.validate_with(true)
    }

    fn validate_with(&self, strict: bool) -> Result<()> {
        match self.do_validate(strict) {
            Ok(_) => Ok(()),
            Err(err) => {
                error!(target: "rbtree", "{:?}, validate {}", self.to_name(), err);
                Err(err)
            }
        }
    }

    /// Return statistics, computed by a full validation walk.
    pub fn to_stats(&self) -> Result<Stats> {
        let (blacks, depths) = self.do_validate(false)?;
        Ok(Stats {
            name: self.to_name(),
            n_count: self.len(),
            node_size: mem::size_of::<Option<crate::rbtree::node::Node<V>>>(),
            capacity: self.raw.nodes.capacity(),
            blacks,
            depths,
        })
    }

    fn do_validate(&self, strict: bool) -> Result<(usize, Depth)> {
        let raw = &self.raw;
        let mut depths = Depth::default();

        let root = match raw.root {
            Some(root) => root,
            None => {
                if raw.n_count != 0 || raw.nodes.len() != 0 {
                    err_at!(Fatal, msg: "empty tree with n_count {}", raw.n_count)?;
                }
                if raw.leftmost.is_some() || raw.rightmost.is_some() {
                    err_at!(Fatal, msg: "empty tree with cached extremes")?;
                }
                return Ok((0, depths));
            }
        };

        if raw.nodes[root].is_red() {
            err_at!(Fatal, msg: "root node must be black")?;
        }
        if raw.parent(root).is_some() {
            err_at!(Fatal, msg: "root node has parent {:?}", raw.parent(root))?;
        }
        if raw.leftmost != Some(raw.minimum(root)) {
            err_at!(Fatal, msg: "leftmost {:?} is not minimum", raw.leftmost)?;
        }
        if raw.rightmost != Some(raw.maximum(root)) {
            err_at!(Fatal, msg: "rightmost {:?} is not maximum", raw.rightmost)?;
        }

        // walk with explicit stack, carrying (node, depth, blacks-so-far).
        let mut blacks: Option<usize> = None;
        let mut n_count = 0;
        let mut stack: Vec<(NodeId, usize, usize)> = vec![(root, 1, 0)];
        while let Some((id, depth, mut n_blacks)) = stack.pop() {
            n_count += 1;
            let node = &raw.nodes[id];
            if node.is_black() {
                n_blacks += 1;
            }
            if depth > self.to_max_depth() {
                err_at!(Fatal, msg: "tree exceeds max_depth {}", depth)?;
            }

            for child in [node.left, node.right].iter() {
                let child = match child {
                    Some(child) => *child,
                    None => {
                        // path ends at nil child.
                        match blacks {
                            None => blacks = Some(n_blacks),
                            Some(b) if b != n_blacks => {
                                err_at!(Fatal, msg: "unbalanced blacks {} != {}", b, n_blacks)?
                            }
                            Some(_) => (),
                        }
                        continue;
                    }
                };
                if raw.parent(child) != Some(id) {
                    let parent = raw.parent(child);
                    err_at!(Fatal, msg: "{:?} parent {:?} != {:?}", child, parent, id)?;
                }
                if node.is_red() && raw.nodes[child].is_red() {
                    err_at!(Fatal, msg: "consecutive reds at {:?} {:?}", id, child)?;
                }
                stack.push((child, depth + 1, n_blacks));
            }

            if node.is_leaf() {
                depths.sample(depth);
            }
        }

        if n_count != raw.n_count {
            err_at!(Fatal, msg: "n_count {} != {}", n_count, raw.n_count)?;
        }
        if raw.nodes.len() != raw.n_count {
            err_at!(Fatal, msg: "arena holds {} != {}", raw.nodes.len(), raw.n_count)?;
        }

        // confirm sort order in the tree.
        let mut node = raw.leftmost;
        while let Some(id) = node {
            let next = raw.successor(id);
            if let Some(nx) = next {
                let (key, nkey) = (self.key_of_node(id), self.key_of_node(nx));
                if self.key_compare().less(nkey, key) {
                    err_at!(Fatal, msg: "sort order {:?} > {:?}", key, nkey)?;
                }
                if strict && !self.key_compare().less(key, nkey) {
                    err_at!(Fatal, msg: "duplicate key {:?}", nkey)?;
                }
            }
            node = next;
        }

        Ok((blacks.unwrap_or(0), depths))
    }

    #[inline]
    fn key_of_node(&self, id: NodeId) -> &X::Key {
        self.key_extractor().key_of(self.raw.value(id))
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;
