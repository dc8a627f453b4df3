use std::collections::hash_map::{IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::Set;

impl<V: Hash + Eq, S: BuildHasher> IntoIterator for Set<V, S> {
    type Item = V;

    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// An owned iterator over the elements of a [`Set`].
pub struct IntoIter<V>(pub(crate) IntoKeys<V, ()>);

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}

impl<V> FusedIterator for IntoIter<V> {}

impl<'a, V: Hash + Eq, S: BuildHasher> IntoIterator for &'a Set<V, S> {
    type Item = &'a V;

    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A borrowed iterator over the elements of a [`Set`].
pub struct Iter<'a, V>(pub(crate) Keys<'a, V, ()>);

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// Elements of one Set that are absent from another, see [`Set::iter_difference`].
pub struct Difference<'a, V: Hash + Eq, S: BuildHasher> {
    pub(crate) inner: Iter<'a, V>,
    pub(crate) other: &'a Set<V, S>,
}

impl<'a, V: Hash + Eq, S: BuildHasher> Iterator for Difference<'a, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| !other.contains(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<V: Hash + Eq, S: BuildHasher> FusedIterator for Difference<'_, V, S> {}

/// Elements present in both of two Sets, see [`Set::iter_intersection`].
pub struct Intersection<'a, V: Hash + Eq, S: BuildHasher> {
    pub(crate) inner: Iter<'a, V>,
    pub(crate) other: &'a Set<V, S>,
}

impl<'a, V: Hash + Eq, S: BuildHasher> Iterator for Intersection<'a, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(*item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<V: Hash + Eq, S: BuildHasher> FusedIterator for Intersection<'_, V, S> {}

/// Elements present in exactly one of two Sets, see [`Set::iter_symmetric_difference`].
pub struct SymmetricDifference<'a, V: Hash + Eq, S: BuildHasher> {
    pub(crate) left: Difference<'a, V, S>,
    pub(crate) right: Difference<'a, V, S>,
}

impl<'a, V: Hash + Eq, S: BuildHasher> Iterator for SymmetricDifference<'a, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.left.next().or_else(|| self.right.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.left.size_hint().1.zip(self.right.size_hint().1);
        (0, upper.and_then(|(l, r)| l.checked_add(r)))
    }
}

impl<V: Hash + Eq, S: BuildHasher> FusedIterator for SymmetricDifference<'_, V, S> {}

/// Elements present in either of two Sets, each yielded once, see [`Set::iter_union`].
pub struct Union<'a, V: Hash + Eq, S: BuildHasher> {
    // Everything from the first Set, then whatever the second adds.
    pub(crate) left: Iter<'a, V>,
    pub(crate) right: Difference<'a, V, S>,
}

impl<'a, V: Hash + Eq, S: BuildHasher> Iterator for Union<'a, V, S> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.left.next().or_else(|| self.right.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every element of the left Set is yielded, the right side only adds to that.
        let lower = self.left.len();
        let upper = self.right.size_hint().1.and_then(|r| lower.checked_add(r));
        (lower, upper)
    }
}

impl<V: Hash + Eq, S: BuildHasher> FusedIterator for Union<'_, V, S> {}
