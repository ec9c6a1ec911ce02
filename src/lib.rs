//! Package implement an ordered associative index using [red-black][rbtree]
//! tree.
//!
//! The core type is [rbtree::RbTree], a balanced binary search tree that
//! stores key-bearing values in sorted order. Inserts, lookups and erases
//! are O(log n). Values are retrieved through [rbtree::Cursor] handles,
//! which name a single node, or the end of the sequence, and can be moved
//! forward and backward without any auxiliary stack.
//!
//! Every tree is configured with two projections, fixed for its lifetime:
//!
//! * A [rbtree::KeyOf] extractor, that picks the ordering key out of a
//!   stored value.
//! * A [rbtree::Compare] comparator, a strict weak order over keys. Two
//!   values are _equivalent_ when neither is less than the other.
//!
//! Two insert policies are supported, _unique_ where an equivalent key
//! rejects the new value, and _equal_ where duplicates are appended after
//! their equivalents, preserving insertion order.
//!
//! Ordered containers [Set], [MultiSet], [Map] and [MultiMap] are thin
//! adapters over the tree.
//!
//! [rbtree]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

/// Short form to compose Error values.
///
/// Here are few possible ways:
///
/// ```ignore
/// use crate::Error;
/// err_at!(Fatal, msg: "bad argument");
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(IOError, std::fs::read(file_path));
/// ```
///
/// ```ignore
/// use crate::Error;
/// err_at!(InvalidConfig, toml::from_str(text), "config {}", name);
/// ```
#[macro_export]
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err($crate::Error::$v(prefix, format!($($arg),+)))
    }};
    ($v:ident, $e:expr) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                Err($crate::Error::$v(prefix, format!("{}", err)))
            }
        }
    }};
    ($v:ident, $e:expr, $($arg:expr),+) => {{
        match $e {
            Ok(val) => Ok(val),
            Err(err) => {
                let prefix = format!("{}:{}", file!(), line!());
                let msg = format!($($arg),+);
                Err($crate::Error::$v(prefix, format!("{} {}", err, msg)))
            }
        }
    }};
}

// API shared by ordered containers. Container `$name` shall wrap
// `tree: RbTree<$value, $extract, C>` ordering values by `$key`, and
// check itself with `RbTree::$validate`.
macro_rules! ordered_container {
    (
        $name:ident, <$($g:ident),+>, $value:ty, $key:ty, $extract:ident,
        $validate:ident, $dflt:expr
    ) => {
        impl<$($g),+> $name<$($g,)+ Natural>
        where
            $key: Ord,
        {
            /// Create an empty container ordered by [Ord].
            pub fn new() -> Self {
                Self::with_compare(Natural)
            }
        }

        impl<$($g,)+ C> $name<$($g,)+ C>
        where
            C: Compare<$key>,
        {
            /// Create an empty container ordered by `cmp`.
            pub fn with_compare(cmp: C) -> Self {
                $name {
                    tree: RbTree::with_compare($dflt, $extract, cmp),
                }
            }

            /// Create an empty container using configuration.
            pub fn from_config(config: &Config, cmp: C) -> Self {
                $name {
                    tree: RbTree::from_config(config, $extract, cmp),
                }
            }

            /// Cursor to the first entry equivalent to `key`, else `End`.
            pub fn find(&self, key: &$key) -> Cursor {
                self.tree.find(key)
            }

            pub fn contains(&self, key: &$key) -> bool {
                self.tree.contains(key)
            }

            pub fn lower_bound(&self, key: &$key) -> Cursor {
                self.tree.lower_bound(key)
            }

            pub fn upper_bound(&self, key: &$key) -> Cursor {
                self.tree.upper_bound(key)
            }

            pub fn equal_range(&self, key: &$key) -> (Cursor, Cursor) {
                self.tree.equal_range(key)
            }

            /// Number of entries equivalent to `key`.
            pub fn count(&self, key: &$key) -> usize {
                self.tree.count(key)
            }

            /// Erase entry at `cursor` and return it.
            pub fn erase(&mut self, cursor: Cursor) -> Option<$value> {
                self.tree.erase(cursor)
            }

            /// Erase entries in `[first, last)`, return the number erased.
            pub fn erase_range(&mut self, first: Cursor, last: Cursor) -> usize {
                self.tree.erase_range(first, last)
            }
        }

        impl<$($g,)+ C> $name<$($g,)+ C>
        where
            C: Compare<$key>,
            $key: fmt::Debug,
        {
            /// Validate the underlying tree, refer to [RbTree::validate]
            /// and [RbTree::validate_unique].
            pub fn validate(&self) -> Result<()> {
                self.tree.$validate()
            }

            pub fn to_stats(&self) -> Result<Stats> {
                self.tree.to_stats()
            }
        }

        impl<$($g,)+ C> $name<$($g,)+ C> {
            pub fn to_name(&self) -> String {
                self.tree.to_name()
            }

            #[inline]
            pub fn len(&self) -> usize {
                self.tree.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.tree.is_empty()
            }

            pub fn clear(&mut self) {
                self.tree.clear()
            }

            /// Exchange contents with `other` in O(1).
            pub fn swap(&mut self, other: &mut Self) {
                self.tree.swap(&mut other.tree)
            }

            pub fn begin(&self) -> Cursor {
                self.tree.begin()
            }

            pub fn end(&self) -> Cursor {
                self.tree.end()
            }

            pub fn next(&self, cursor: Cursor) -> Cursor {
                self.tree.next(cursor)
            }

            pub fn prev(&self, cursor: Cursor) -> Cursor {
                self.tree.prev(cursor)
            }

            /// Entry at `cursor`, None for `End`.
            pub fn value_at(&self, cursor: Cursor) -> Option<&$value> {
                self.tree.get(cursor)
            }

            pub fn first(&self) -> Option<&$value> {
                self.tree.first()
            }

            pub fn last(&self) -> Option<&$value> {
                self.tree.last()
            }

            pub fn iter(&self) -> Iter<'_, $value> {
                self.tree.iter()
            }

            pub fn range(&self, first: Cursor, last: Cursor) -> Iter<'_, $value> {
                self.tree.range(first, last)
            }

            /// Return the underlying tree.
            pub fn as_tree(&self) -> &RbTree<$value, $extract, C> {
                &self.tree
            }
        }

        impl<$($g,)+ C> Default for $name<$($g,)+ C>
        where
            C: Compare<$key> + Default,
        {
            fn default() -> Self {
                Self::with_compare(C::default())
            }
        }

        impl<$($g,)+ C> Clone for $name<$($g,)+ C>
        where
            $value: Clone,
            C: Clone,
        {
            fn clone(&self) -> Self {
                $name {
                    tree: self.tree.clone(),
                }
            }

            fn clone_from(&mut self, source: &Self) {
                self.tree.clone_from(&source.tree)
            }
        }

        impl<$($g,)+ C> PartialEq for $name<$($g,)+ C>
        where
            $value: PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                self.tree == other.tree
            }
        }

        impl<$($g,)+ C> Eq for $name<$($g,)+ C> where $value: Eq {}

        impl<$($g,)+ C> PartialOrd for $name<$($g,)+ C>
        where
            $value: PartialOrd,
        {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                self.tree.partial_cmp(&other.tree)
            }
        }

        impl<$($g,)+ C> Ord for $name<$($g,)+ C>
        where
            $value: Ord,
        {
            fn cmp(&self, other: &Self) -> Ordering {
                self.tree.cmp(&other.tree)
            }
        }

        impl<'a, $($g,)+ C> IntoIterator for &'a $name<$($g,)+ C> {
            type Item = &'a $value;
            type IntoIter = Iter<'a, $value>;

            fn into_iter(self) -> Self::IntoIter {
                self.tree.iter()
            }
        }

        impl<$($g,)+ C> IntoIterator for $name<$($g,)+ C> {
            type Item = $value;
            type IntoIter = IntoIter<$value>;

            fn into_iter(self) -> Self::IntoIter {
                self.tree.into_iter()
            }
        }
    };
}

pub mod config;
pub mod map;
pub mod rbtree;
pub mod set;

pub use crate::config::Config;
pub use crate::map::{Map, MultiMap};
pub use crate::rbtree::{Compare, Cursor, First, Identity, KeyOf, Natural, RbTree, Reverse};
pub use crate::set::{MultiSet, Set};

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;

/// Error variants that can be returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location, and a message describing the failure.
pub enum Error {
    /// Tree failed one of the red-black invariants, or its bookkeeping
    /// does not match the tree. Returned by `validate()`.
    Fatal(String, String),
    /// Configuration text could not be parsed, or carries a bad value.
    InvalidConfig(String, String),
    /// Configuration file could not be read.
    IOError(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            InvalidConfig(p, msg) => write!(f, "{} InvalidConfig: {}", p, msg),
            IOError(p, msg) => write!(f, "{} IOError: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}
