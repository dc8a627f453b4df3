//! A generic hash set built on a key-presence mapping.
//!
//! # Purpose
//! [`Set`] stores each value as a key of a [`HashMap`](std::collections::HashMap) whose values are
//! the unit type, so the map's values carry no information beyond "this key is present". On top of
//! that it offers membership testing, in-place mutation and the usual algebra of sets: union,
//! intersection, difference and the inclusion checks.
//!
//! # Method
//! Mutating methods take `&mut self` and algebraic methods take `&self`, so the operands of a set
//! operation are never changed and the result is always a freshly allocated set. The algebra is
//! also available lazily through borrowing iterators such as [`Set::iter_union`] and through the
//! `|`, `&`, `-` and `^` operators on references.
//!
//! # Serialization
//! With the `serde` feature (enabled by default) a set encodes to, and decodes from, a sequence of
//! its elements. [`Set::to_json`] and [`Set::merge_json`] wrap this for JSON arrays. The order of
//! the encoded elements is whatever order the set iterates in, which isn't specified.
//!
//! # Error Handling
//! Only the serialization surface can fail. Its errors are small typed structs implementing
//! [`Error`](std::error::Error), see [`DecodeError`] and [`EncodeError`].
//!
//! # Example
//! ```
//! use keyset::{set, Set};
//!
//! let mut a: Set<u32> = set![1, 2, 3];
//! a.remove(&2);
//! assert!(!a.contains(&2));
//!
//! let b = set![3, 4];
//! assert_eq!(a.union(&b), set![1, 3, 4]);
//! assert_eq!(&a & &b, set![3]);
//! ```
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod set;

#[doc(inline)]
pub use set::Set;

#[cfg(feature = "serde")]
#[doc(inline)]
pub use set::{DecodeError, EncodeError};

/// Creates a [`Set`] containing the provided values, collapsing duplicates.
///
/// `set![]` creates an empty set with the default hasher.
///
/// ```
/// use keyset::{set, Set};
///
/// let s: Set<&str> = set!["a", "b", "a"];
/// assert_eq!(s.len(), 2);
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Set::from([$($value),+])
    };
}
