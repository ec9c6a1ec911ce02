use crate::rbtree::{
    node::{Color, Node, NodeId},
    raw::{RawTree, Side},
};

impl<V> RawTree<V> {
    /// Attach `value` as a red leaf under `parent` on `side`, or as root
    /// when `parent` is None, then rebalance. Caller guarantees that the
    /// child slot is empty and that the position respects the ordering.
    pub(crate) fn attach(&mut self, parent: Option<NodeId>, side: Side, value: V) -> NodeId {
        let mut node = Node::new(value);
        node.parent = parent;
        let id = self.nodes.alloc(node);

        match parent {
            None => {
                self.root = Some(id);
                self.leftmost = Some(id);
                self.rightmost = Some(id);
            }
            Some(parent) => {
                self.set_child(parent, side, Some(id));
                if side == Side::Left && self.leftmost == Some(parent) {
                    self.leftmost = Some(id);
                }
                if side == Side::Right && self.rightmost == Some(parent) {
                    self.rightmost = Some(id);
                }
            }
        }

        self.insert_fixup(id);
        self.n_count += 1;
        id
    }

    //                 (g)                  (g)*
    //                 / \                  / \
    //              (p)r  (u)r    =>     (p)b  (u)b
    //               |                    |
    //              (n)r                 (n)r
    //
    /// Restore red-black invariants after `node` was linked in as a red
    /// leaf. Red uncles recolor and move the violation two levels up,
    /// black uncles are resolved with one or two rotations.
    pub(crate) fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = match self.parent(node) {
                Some(parent) if self.nodes[parent].is_red() => parent,
                _ => break,
            };
            // a red parent is never the root, grandparent exists.
            let grand = match self.parent(parent) {
                Some(grand) => grand,
                None => break,
            };

            let pside = if self.left(grand) == Some(parent) {
                Side::Left
            } else {
                Side::Right
            };
            let uncle = match pside {
                Side::Left => self.right(grand),
                Side::Right => self.left(grand),
            };

            if self.is_red(uncle) {
                self.set_color(Some(parent), Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(Some(grand), Color::Red);
                node = grand;
                continue;
            }

            // inner child, rotate it to the outside first.
            let mut parent = parent;
            if self.child(parent, pside) != Some(node) {
                match pside {
                    Side::Left => self.rotate_left(parent),
                    Side::Right => self.rotate_right(parent),
                }
                node = parent;
                parent = match self.parent(node) {
                    Some(parent) => parent,
                    None => break,
                };
            }

            self.set_color(Some(parent), Color::Black);
            self.set_color(Some(grand), Color::Red);
            match pside {
                Side::Left => self.rotate_right(grand),
                Side::Right => self.rotate_left(grand),
            }
        }

        let root = self.root;
        self.set_color(root, Color::Black);
    }
}
