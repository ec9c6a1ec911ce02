use crate::rbtree::{
    node::NodeId,
    raw::{RawTree, Side},
};

impl<V> RawTree<V> {
    /// Rotate `node` down toward `side`, its child on the other side
    /// takes its place.
    pub(crate) fn rotate(&mut self, node: NodeId, side: Side) {
        match side {
            Side::Left => self.rotate_left(node),
            Side::Right => self.rotate_right(node),
        }
    }

    //              (p)                       (p)
    //               |                         |
    //              node                     right
    //              /  \                      / \
    //             /    \                    /   \
    //            /      \                  /     \
    //          left     right           node     r-r
    //                    / \            /  \
    //                 r-l  r-r       left  r-l
    //
    /// Promote right child of `node` above it. Colors are not touched.
    pub(crate) fn rotate_left(&mut self, node: NodeId) {
        let right = match self.right(node) {
            Some(right) => right,
            None => panic!("rotate_left(): missing right child ? call-the-programmer"),
        };

        let rl = self.left(right);
        self.nodes[node].right = rl;
        self.set_parent(rl, Some(node));

        self.replace_child(node, Some(right));
        self.nodes[right].parent = self.parent(node);

        self.nodes[right].left = Some(node);
        self.nodes[node].parent = Some(right);
    }

    //              (p)                       (p)
    //               |                         |
    //              node                      left
    //              /  \                      / \
    //             /    \                    /   \
    //            /      \                  /     \
    //         left     right            l-l      node
    //         / \                                / \
    //      l-l  l-r                            l-r  right
    //
    /// Promote left child of `node` above it. Colors are not touched.
    pub(crate) fn rotate_right(&mut self, node: NodeId) {
        let left = match self.left(node) {
            Some(left) => left,
            None => panic!("rotate_right(): missing left child ? call-the-programmer"),
        };

        let lr = self.right(left);
        self.nodes[node].left = lr;
        self.set_parent(lr, Some(node));

        self.replace_child(node, Some(left));
        self.nodes[left].parent = self.parent(node);

        self.nodes[left].right = Some(node);
        self.nodes[node].parent = Some(left);
    }
}

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;
