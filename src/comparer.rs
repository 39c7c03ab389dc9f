//! Comparers of the ChunkedList and ChunkedHashSet.

use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

/// Comparer
///
/// There are two important hooks for looking up elements:
/// -   The equality, used by `ChunkedList` to find an element and by `ChunkedHashSet` to detect duplicates.
/// -   The hashing algorithm, used by `ChunkedHashSet` to pick a chain.
///
/// Two elements which are equal must have the same hash.
///
/// Also see DefaultComparer for the default, relying on `Eq` and `Hash`.
pub trait Comparer<T: ?Sized> {
    /// Returns whether `left` and `right` are equal.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Returns the hash of `value`.
    fn hash(&self, value: &T) -> u64;
}

impl<T: ?Sized, C: Comparer<T> + ?Sized> Comparer<T> for &C {
    fn equals(&self, left: &T, right: &T) -> bool { (**self).equals(left, right) }

    fn hash(&self, value: &T) -> u64 { (**self).hash(value) }
}

/// DefaultComparer
///
/// Default comparer:
/// -   deferring equality to `Eq`.
/// -   deferring hashing to `Hash`, with a hasher built by `S`.
#[derive(Clone, Debug, Default)]
pub struct DefaultComparer<S = RandomState>(S);

impl<S> DefaultComparer<S> {
    /// Creates an instance hashing with hashers built by `build_hasher`.
    pub fn with_hasher(build_hasher: S) -> Self { Self(build_hasher) }
}

impl<T: ?Sized + Eq + Hash, S: BuildHasher> Comparer<T> for DefaultComparer<S> {
    fn equals(&self, left: &T, right: &T) -> bool { left == right }

    fn hash(&self, value: &T) -> u64 { self.0.hash_one(value) }
}
