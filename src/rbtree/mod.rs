//! Module implement red-black tree, an ordered index with cursor based
//! traversal.
//!
//! Nodes are held in an arena owned by the tree. Child links own the
//! subtree structurally, parent links are back references used to walk
//! up for rotations and for cursor movement, hence cursors need no
//! auxiliary stack to move forward or backward.

mod arena;
mod cursor;
mod delete;
mod index;
mod insert;
mod key;
mod node;
mod raw;
mod rotate;
mod stats;
mod validate;

pub use cursor::{Cursor, IntoIter, Iter};
pub use index::RbTree;
pub use key::{Compare, First, Identity, KeyOf, Natural, Reverse, ValueCompare};
pub use node::NodeId;
pub use stats::{Depth, Stats};
