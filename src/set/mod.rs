//! A module containing [`Set`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a Set's elements while others are
//! lazy iterators over the result of a set operation on two Sets.
//!
//! There is no mutable iterator over the elements of a Set, because mutating them in place could
//! change their hashes.
//!
//! With the `serde` feature, this module also holds the errors returned by the JSON helpers.
//!
//! [`Set`] is also re-exported at the crate root.

mod iter;
mod set;

#[cfg(feature = "serde")]
mod error;
#[cfg(feature = "serde")]
mod json;

mod tests;

pub use iter::*;
pub use set::*;

#[cfg(feature = "serde")]
pub use error::*;
