use crate::rbtree::{
    node::{Color, NodeId},
    raw::{RawTree, Side},
};

impl<V> RawTree<V> {
    /// Splice node `z` out of the tree, rebalance, release its slot and
    /// return its value.
    ///
    /// A node with two children is replaced by its in-order successor. The
    /// successor is relinked into z's position, it is not copied, so
    /// handles naming the successor stay valid.
    pub(crate) fn unlink(&mut self, z: NodeId) -> V {
        let (zl, zr) = (self.left(z), self.right(z));

        // x takes the place of the physically removed position, x_parent
        // is tracked separately because x may be nil.
        let (x, x_parent, removed) = match (zl, zr) {
            (Some(zl), Some(zr)) => {
                let y = self.minimum(zr);
                let x = self.right(y);
                let x_parent = if y == zr {
                    Some(y)
                } else {
                    let yp = self.parent(y);
                    self.set_parent(x, yp);
                    if let Some(yp) = yp {
                        self.nodes[yp].left = x;
                    }
                    self.nodes[y].right = Some(zr);
                    self.nodes[zr].parent = Some(y);
                    yp
                };

                self.nodes[y].left = Some(zl);
                self.nodes[zl].parent = Some(y);
                self.replace_child(z, Some(y));
                self.nodes[y].parent = self.parent(z);

                // y inherits z's color, removed position had y's color.
                let removed = self.nodes[y].color;
                self.nodes[y].color = self.nodes[z].color;
                (x, x_parent, removed)
            }
            (l, r) => {
                let x = l.or(r);
                let x_parent = self.parent(z);
                self.set_parent(x, x_parent);
                self.replace_child(z, x);

                if self.leftmost == Some(z) {
                    self.leftmost = x.map(|x| self.minimum(x)).or(x_parent);
                }
                if self.rightmost == Some(z) {
                    self.rightmost = x.map(|x| self.maximum(x)).or(x_parent);
                }
                (x, x_parent, self.nodes[z].color)
            }
        };

        if removed == Color::Black {
            self.delete_fixup(x, x_parent);
        }

        self.n_count -= 1;
        self.nodes.release(z).value
    }

    /// Resolve the double-black at `x`, a possibly nil node whose parent
    /// is `x_parent`.
    ///
    /// 1. red sibling: recolor, rotate parent toward x, refresh sibling.
    /// 2. black sibling, both nephews black: sibling red, move up.
    /// 3. black sibling, near nephew red, far black: rotate sibling away.
    /// 4. black sibling, far nephew red: recolor, rotate parent, done.
    pub(crate) fn delete_fixup(&mut self, mut x: Option<NodeId>, mut x_parent: Option<NodeId>) {
        while x != self.root && self.is_black(x) {
            let parent = match x_parent {
                Some(parent) => parent,
                None => break,
            };
            let side = if self.left(parent) == x {
                Side::Left
            } else {
                Side::Right
            };
            let far = side.flip();

            let mut w = self.child(parent, far);
            if self.is_red(w) {
                self.set_color(w, Color::Black);
                self.set_color(Some(parent), Color::Red);
                self.rotate(parent, side);
                w = self.child(parent, far);
            }
            // black-height of x's side is short by one, sibling exists.
            let w = match w {
                Some(w) => w,
                None => break,
            };

            let (near_n, far_n) = (self.child(w, side), self.child(w, far));
            if self.is_black(near_n) && self.is_black(far_n) {
                self.set_color(Some(w), Color::Red);
                x = Some(parent);
                x_parent = self.parent(parent);
                continue;
            }

            let w = if self.is_black(far_n) {
                self.set_color(near_n, Color::Black);
                self.set_color(Some(w), Color::Red);
                self.rotate(w, far);
                match self.child(parent, far) {
                    Some(w) => w,
                    None => break,
                }
            } else {
                w
            };

            let pcolor = self.nodes[parent].color;
            self.set_color(Some(w), pcolor);
            self.set_color(Some(parent), Color::Black);
            let far_n = self.child(w, far);
            self.set_color(far_n, Color::Black);
            self.rotate(parent, side);
            x = self.root;
            break;
        }

        self.set_color(x, Color::Black);
    }
}

#[cfg(test)]
#[path = "delete_test.rs"]
mod delete_test;
