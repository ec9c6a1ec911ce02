use std::marker;

/// Extract the ordering key from a stored value.
///
/// Extraction must be pure, it is called on every ordering decision and
/// must return the same key for the same value throughout the value's
/// life in the tree.
pub trait KeyOf<V> {
    type Key: ?Sized;

    fn key_of<'a>(&self, value: &'a V) -> &'a Self::Key;
}

/// Strict weak ordering over keys.
///
/// `less` must be irreflexive, asymmetric and transitive. Two keys are
/// equivalent when neither is less than the other, no other relational
/// operator is assumed.
pub trait Compare<K: ?Sized> {
    fn less(&self, a: &K, b: &K) -> bool;

    /// Neither key is less than the other.
    #[inline]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Value is its own key, used by sets.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<V> KeyOf<V> for Identity {
    type Key = V;

    #[inline]
    fn key_of<'a>(&self, value: &'a V) -> &'a V {
        value
    }
}

/// Key is the first member of a `(key, value)` pair, used by maps.
#[derive(Clone, Copy, Debug, Default)]
pub struct First;

impl<K, T> KeyOf<(K, T)> for First {
    type Key = K;

    #[inline]
    fn key_of<'a>(&self, value: &'a (K, T)) -> &'a K {
        &value.0
    }
}

/// Ascending order of [Ord] keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<K> Compare<K> for Natural
where
    K: Ord + ?Sized,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Descending order of [Ord] keys.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

impl<K> Compare<K> for Reverse
where
    K: Ord + ?Sized,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        b < a
    }
}

impl<K, F> Compare<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> bool,
{
    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        self(a, b)
    }
}

/// Order values with comparator `C` applied to keys extracted by `X`.
///
/// Used to compare a pair of stored values, like `value_comp` of the
/// ordered containers.
pub struct ValueCompare<'a, V, X, C> {
    pub(crate) key_of: &'a X,
    pub(crate) cmp: &'a C,
    pub(crate) _value: marker::PhantomData<V>,
}

impl<'a, V, X, C> ValueCompare<'a, V, X, C>
where
    X: KeyOf<V>,
    C: Compare<X::Key>,
{
    pub fn less(&self, a: &V, b: &V) -> bool {
        self.cmp.less(self.key_of.key_of(a), self.key_of.key_of(b))
    }
}

#[cfg(test)]
#[path = "key_test.rs"]
mod key_test;
