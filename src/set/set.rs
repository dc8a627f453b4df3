use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};

/// An unordered collection of unique values, stored as the keys of a [`HashMap`] whose values are
/// the unit type.
///
/// Mutation happens in place through `&mut self`: [`insert`](Set::insert),
/// [`remove`](Set::remove) and [`merge`](Set::merge). The algebraic operations borrow both
/// operands and return a new Set, leaving the operands untouched.
///
/// No order is defined between the elements. Iteration, [`to_vec`](Set::to_vec) and the encoded
/// form may list them in any order, which can differ between two sets holding equal elements.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the Set. Because of this, Set never hands out mutable references to its
/// elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in `self`.
/// - `m`: The number of elements in `other`.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `merge` | `O(m)`* |
/// | `contains_all` | `O(m)`* |
/// | `equals` | `O(m)`* |
/// | `intersects` | `O(min(n, m))`* |
/// | `intersect` | `O(min(n, m))`* |
/// | `union` | `O(n + m)`* |
/// | `minus` | `O(n)`* |
///
/// \* Expected time. Hash collisions make individual lookups slower.
pub struct Set<V: Hash + Eq, S: BuildHasher = RandomState> {
    // The unit type makes the map's values zero-sized presence markers.
    pub(crate) inner: HashMap<V, (), S>,
}

impl<V: Hash + Eq> Set<V> {
    /// Creates a new, empty Set. No memory is allocated until the first insertion.
    pub fn new() -> Set<V> {
        Set {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty Set which can hold at least `cap` elements without reallocating.
    pub fn with_capacity(cap: usize) -> Set<V> {
        Set {
            inner: HashMap::with_capacity(cap),
        }
    }

    /// Creates a Set holding every provided value once. Duplicate values collapse silently.
    ///
    /// To use a custom hasher, collect into the Set instead.
    pub fn from_values<I: IntoIterator<Item = V>>(values: I) -> Set<V> {
        values.into_iter().collect()
    }
}

impl<V: Hash + Eq, S: BuildHasher> Set<V, S> {
    /// Creates a new, empty Set which will use the provided `hasher`.
    pub fn with_hasher(hasher: S) -> Set<V, S> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new, empty Set with at least the provided `cap`acity, using `hasher`.
    pub fn with_capacity_and_hasher(cap: usize, hasher: S) -> Set<V, S> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the Set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the Set's [`BuildHasher`].
    pub fn hasher(&self) -> &S {
        self.inner.hasher()
    }

    /// Adds `value` to the Set, returning true if it wasn't already present.
    ///
    /// If an equal value is already present, the Set is left unchanged and `value` is dropped.
    pub fn insert(&mut self, value: V) -> bool {
        // The map keeps its existing key when an equal one is inserted.
        self.inner.insert(value, ()).is_none()
    }

    /// Removes `value` from the Set, returning true if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(value).is_some()
    }

    /// Removes and returns the element equal to `value`, if there is one.
    pub fn take<Q>(&mut self, value: &Q) -> Option<V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(value).map(|(v, ())| v)
    }

    /// Returns true if the Set contains an element equal to `value`.
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        // Q is a borrowed form of V, for which hashing and equality carry over the borrow.
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(value)
    }

    /// Returns a reference to the element equal to `value`, if there is one.
    pub fn get<Q>(&self, value: &Q) -> Option<&V>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(value).map(|(v, _)| v)
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Reserves capacity for at least `extra` more elements.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Keeps only the elements for which `keep` returns true.
    pub fn retain<F: FnMut(&V) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|v, _| keep(v))
    }

    /// Adds every element of `other` to `self`. `other` is left as it was.
    ///
    /// To merge an owned Set without cloning its elements, use `|=` or [`Extend`].
    pub fn merge(&mut self, other: &Set<V, S>)
    where
        V: Clone,
    {
        self.extend(other.iter().cloned())
    }

    /// Returns an iterator over all elements of the Set, in no particular order.
    pub fn iter(&self) -> Iter<'_, V> {
        self.into_iter()
    }

    /// Returns a snapshot of the Set's elements as a [`Vec`], in no particular order.
    pub fn to_vec(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns true if every element of `other` is also in `self`. (`self ⊇ other`)
    pub fn contains_all(&self, other: &Set<V, S>) -> bool {
        other.len() <= self.len() && other.iter().all(|v| self.contains(v))
    }

    /// Returns true if `self` contains every element of `other`. (`self ⊇ other`)
    ///
    /// This is the same check as [`contains_all`](Set::contains_all).
    pub fn is_superset(&self, other: &Set<V, S>) -> bool {
        self.contains_all(other)
    }

    /// Returns true if every element of `self` is also in `other`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &Set<V, S>) -> bool {
        other.contains_all(self)
    }

    /// Returns true if `self` and `other` contain exactly the same elements, regardless of the
    /// order in which they were inserted.
    pub fn equals(&self, other: &Set<V, S>) -> bool {
        // With no duplicates, equal lengths and one-way inclusion imply inclusion both ways.
        self.len() == other.len() && self.contains_all(other)
    }

    /// Returns true if at least one element is in both `self` and `other`, stopping at the first
    /// shared element.
    pub fn intersects(&self, other: &Set<V, S>) -> bool {
        let (small, large) = smaller_first(self, other);
        small.iter().any(|v| large.contains(v))
    }

    /// Returns true if no element is in both `self` and `other`.
    pub fn is_disjoint(&self, other: &Set<V, S>) -> bool {
        !self.intersects(other)
    }

    /// Creates a borrowed iterator over all elements that are in both `self` and `other`.
    /// (`self ∩ other`)
    ///
    /// The smaller of the two Sets is iterated, so the elements yielded may be borrowed from
    /// either of them.
    pub fn iter_intersection<'a>(&'a self, other: &'a Set<V, S>) -> Intersection<'a, V, S> {
        let (small, large) = smaller_first(self, other);
        Intersection {
            inner: small.iter(),
            other: large,
        }
    }

    /// Creates a borrowed iterator over all elements that are in either `self` or `other`,
    /// yielding each element once. (`self ∪ other`)
    pub fn iter_union<'a>(&'a self, other: &'a Set<V, S>) -> Union<'a, V, S> {
        Union {
            left: self.iter(),
            right: other.iter_difference(self),
        }
    }

    /// Creates a borrowed iterator over all elements that are in `self` but not `other`.
    /// (`self \ other`)
    pub fn iter_difference<'a>(&'a self, other: &'a Set<V, S>) -> Difference<'a, V, S> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all elements that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn iter_symmetric_difference<'a>(
        &'a self,
        other: &'a Set<V, S>,
    ) -> SymmetricDifference<'a, V, S> {
        SymmetricDifference {
            left: self.iter_difference(other),
            right: other.iter_difference(self),
        }
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Default> Set<V, S> {
    /// Returns a new Set of the elements in both `self` and `other`. (`self ∩ other`)
    pub fn intersect(&self, other: &Set<V, S>) -> Set<V, S> {
        self.iter_intersection(other).cloned().collect()
    }

    /// Returns a new Set of the elements in either `self` or `other`. (`self ∪ other`)
    pub fn union(&self, other: &Set<V, S>) -> Set<V, S> {
        let mut set = Set::with_capacity_and_hasher(self.len().max(other.len()), S::default());
        set.extend(self.iter_union(other).cloned());
        set
    }

    /// Returns a new Set of the elements in `self` but not in `other`. (`self \ other`)
    pub fn minus(&self, other: &Set<V, S>) -> Set<V, S> {
        self.iter_difference(other).cloned().collect()
    }

    /// Returns a new Set of the elements in exactly one of `self` and `other`. (`self △ other`)
    pub fn symmetric_minus(&self, other: &Set<V, S>) -> Set<V, S> {
        self.iter_symmetric_difference(other).cloned().collect()
    }
}

/// Orders two Sets by length so that loops can iterate the smaller one.
fn smaller_first<'a, V: Hash + Eq, S: BuildHasher>(
    a: &'a Set<V, S>,
    b: &'a Set<V, S>,
) -> (&'a Set<V, S>, &'a Set<V, S>) {
    if a.len() <= b.len() { (a, b) } else { (b, a) }
}

impl<V: Hash + Eq, S: BuildHasher + Default> Default for Set<V, S> {
    fn default() -> Self {
        Set {
            inner: HashMap::default(),
        }
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Clone> Clone for Set<V, S> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<V: Hash + Eq, S: BuildHasher> PartialEq for Set<V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<V: Hash + Eq, S: BuildHasher> Eq for Set<V, S> {}

impl<V: Hash + Eq, S: BuildHasher + Default> FromIterator<V> for Set<V, S> {
    fn from_iter<I: IntoIterator<Item = V>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_capacity_and_hasher(iter.size_hint().0, S::default());
        set.extend(iter);
        set
    }
}

// Fixed to the default hasher so that `Set::from([..])` needs no annotation.
impl<V: Hash + Eq, const N: usize> From<[V; N]> for Set<V, RandomState> {
    fn from(value: [V; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<V: Hash + Eq, S: BuildHasher> Extend<V> for Set<V, S> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, V: Hash + Eq + Copy + 'a, S: BuildHasher> Extend<&'a V> for Set<V, S> {
    fn extend<I: IntoIterator<Item = &'a V>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Default> BitOr for &Set<V, S> {
    type Output = Set<V, S>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<V: Hash + Eq, S: BuildHasher> BitOrAssign for Set<V, S> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.reserve(rhs.len());
        self.extend(rhs)
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Default> BitAnd for &Set<V, S> {
    type Output = Set<V, S>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<V: Hash + Eq, S: BuildHasher> BitAndAssign for Set<V, S> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|v| rhs.contains(v))
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Default> BitXor for &Set<V, S> {
    type Output = Set<V, S>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_minus(rhs)
    }
}

impl<V: Hash + Eq, S: BuildHasher> BitXorAssign for Set<V, S> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for value in rhs {
            if !self.remove(&value) {
                self.insert(value);
            }
        }
    }
}

impl<V: Hash + Eq + Clone, S: BuildHasher + Default> Sub for &Set<V, S> {
    type Output = Set<V, S>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

impl<V: Hash + Eq, S: BuildHasher> SubAssign for Set<V, S> {
    fn sub_assign(&mut self, rhs: Self) {
        for value in rhs {
            self.remove(&value);
        }
    }
}

impl<V: Hash + Eq + Debug, S: BuildHasher> Debug for Set<V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<V: Hash + Eq + Display, S: BuildHasher> Display for Set<V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "}}")
    }
}
