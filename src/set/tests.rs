#![cfg(test)]

use std::hash::{BuildHasher, Hasher};

use super::*;
use crate::set;

/// A hasher which maps every value to the same hash, forcing every lookup through a collision.
#[derive(Debug, Default)]
struct CollidingHasher;

impl Hasher for CollidingHasher {
    fn finish(&self) -> u64 {
        0
    }

    fn write(&mut self, _bytes: &[u8]) {}
}

#[derive(Debug, Default, Clone)]
struct CollidingHasherBuilder;

impl BuildHasher for CollidingHasherBuilder {
    type Hasher = CollidingHasher;

    fn build_hasher(&self) -> Self::Hasher {
        CollidingHasher
    }
}

fn sorted<V: Ord + Clone + std::hash::Hash + Eq, S: BuildHasher>(set: &Set<V, S>) -> Vec<V> {
    let mut values = set.iter().cloned().collect::<Vec<_>>();
    values.sort();
    values
}

#[test]
fn test_remove_then_contains() {
    let mut set: Set<i32> = set![1, 2, 3];
    assert!(set.remove(&2));
    assert!(!set.contains(&2));
    assert!(set.contains(&1));
    assert!(set.contains(&3));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_insert_is_idempotent() {
    let mut set = Set::new();
    assert!(set.insert("a"));
    assert!(!set.insert("a"), "A second insert of an equal value should report no change.");
    assert!(set.contains("a"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_remove_absent_is_noop() {
    let mut set: Set<i32> = set![1];
    assert!(!set.remove(&5));
    assert!(!set.remove(&5));
    assert_eq!(set, set![1]);
}

#[test]
fn test_duplicates_collapse_on_construction() {
    let set: Set<i32> = Set::from_values([1, 1, 2, 2, 2, 3]);
    assert_eq!(set.len(), 3);
    assert_eq!(sorted(&set), [1, 2, 3]);

    let set: Set<&str> = set!["x", "x"];
    assert_eq!(set.len(), 1);
}

#[test]
fn test_macro_infers_default_hasher() {
    let set = set![1, 2, 3];
    assert!(set.contains(&1));
    assert!(!set.contains(&4));

    let from_array = Set::from(["a", "b"]);
    assert_eq!(from_array.len(), 2);

    let from_values = Set::from_values(vec![5, 5, 6]);
    assert_eq!(from_values.len(), 2);
}

#[test]
fn test_empty_macro() {
    let set: Set<String> = set![];
    assert!(set.is_empty());
}

#[test]
fn test_contains_borrowed_form() {
    let set: Set<String> = set!["alpha".to_string(), "beta".to_string()];
    assert!(set.contains("alpha"));
    assert!(!set.contains("gamma"));
    assert_eq!(set.get("beta").map(String::as_str), Some("beta"));
}

#[test]
fn test_take() {
    let mut set: Set<String> = set!["a".to_string()];
    assert_eq!(set.take("a"), Some("a".to_string()));
    assert_eq!(set.take("a"), None);
    assert!(set.is_empty());
}

#[test]
fn test_merge_leaves_other_untouched() {
    let mut a: Set<&str> = set!["a", "b"];
    let b: Set<&str> = set!["b", "c"];
    a.merge(&b);

    assert!(a.equals(&set!["a", "b", "c"]));
    assert_eq!(b, set!["b", "c"]);
}

#[test]
fn test_merge_into_self_clone() {
    let mut a: Set<i32> = set![1, 2];
    let copy = a.clone();
    a.merge(&copy);
    assert_eq!(a, copy);
}

#[test]
fn test_subset_directions() {
    let big: Set<i32> = set![1, 2, 3];
    let small: Set<i32> = set![1, 3];

    assert!(big.contains_all(&small));
    assert!(big.is_superset(&small));
    assert!(small.is_subset(&big));

    assert!(!small.contains_all(&big));
    assert!(!big.is_subset(&small));

    let empty: Set<i32> = set![];
    assert!(big.contains_all(&empty), "Every Set contains all of the empty Set.");
    assert!(empty.is_subset(&empty));
}

#[test]
fn test_equals_ignores_insertion_order() {
    let mut a = Set::new();
    let mut b = Set::new();
    for i in 0..100 {
        a.insert(i);
        b.insert(99 - i);
    }
    assert!(a.equals(&b));
    assert_eq!(a, b);

    b.remove(&50);
    assert!(!a.equals(&b));
    assert!(!b.equals(&a));
}

#[test]
fn test_intersects() {
    let a: Set<i32> = set![1, 2, 3];
    assert!(a.intersects(&set![3, 4]));
    assert!(!a.intersects(&set![4, 5]));
    assert!(!a.intersects(&set![]));
    assert!(a.is_disjoint(&set![7]));
}

#[test]
fn test_algebra_leaves_operands_untouched() {
    let a: Set<i32> = set![1, 2, 3, 4];
    let b: Set<i32> = set![3, 4, 5];

    assert_eq!(sorted(&a.intersect(&b)), [3, 4]);
    assert_eq!(sorted(&a.union(&b)), [1, 2, 3, 4, 5]);
    assert_eq!(sorted(&a.minus(&b)), [1, 2]);
    assert_eq!(sorted(&b.minus(&a)), [5]);
    assert_eq!(sorted(&a.symmetric_minus(&b)), [1, 2, 5]);

    assert_eq!(sorted(&a), [1, 2, 3, 4]);
    assert_eq!(sorted(&b), [3, 4, 5]);
}

#[test]
fn test_operators() {
    let a: Set<i32> = set![1, 2, 3];
    let b: Set<i32> = set![2, 3, 4];

    assert_eq!(&a | &b, set![1, 2, 3, 4]);
    assert_eq!(&a & &b, set![2, 3]);
    assert_eq!(&a - &b, set![1]);
    assert_eq!(&a ^ &b, set![1, 4]);

    let mut c = a.clone();
    c |= b.clone();
    assert_eq!(c, set![1, 2, 3, 4]);

    let mut c = a.clone();
    c &= b.clone();
    assert_eq!(c, set![2, 3]);

    let mut c = a.clone();
    c -= b.clone();
    assert_eq!(c, set![1]);

    let mut c = a.clone();
    c ^= b;
    assert_eq!(c, set![1, 4]);
}

#[test]
fn test_lazy_iterators_yield_each_element_once() {
    let a: Set<i32> = set![1, 2, 3];
    let b: Set<i32> = set![3, 4];

    let mut union = a.iter_union(&b).copied().collect::<Vec<_>>();
    union.sort();
    assert_eq!(union, [1, 2, 3, 4]);

    let mut inter = b.iter_intersection(&a).copied().collect::<Vec<_>>();
    inter.sort();
    assert_eq!(inter, [3]);

    assert_eq!(a.iter_difference(&a).count(), 0);

    let mut sym = a.iter_symmetric_difference(&b).copied().collect::<Vec<_>>();
    sym.sort();
    assert_eq!(sym, [1, 2, 4]);

    let (lower, upper) = a.iter_union(&b).size_hint();
    assert_eq!(lower, 3, "A union yields at least every element of the left Set.");
    assert_eq!(upper, Some(5));
}

#[test]
fn test_to_vec_snapshot() {
    let mut set: Set<i32> = set![5, 6, 7];
    let mut snapshot = set.to_vec();
    set.insert(8);

    snapshot.sort();
    assert_eq!(snapshot, [5, 6, 7], "A snapshot shouldn't observe later insertions.");
    assert_eq!(Set::<i32>::new().to_vec(), Vec::<i32>::new());
}

#[test]
fn test_retain_and_clear() {
    let mut set: Set<i32> = (0..10).collect();
    set.retain(|v| v % 2 == 0);
    assert_eq!(sorted(&set), [0, 2, 4, 6, 8]);

    set.clear();
    assert!(set.is_empty());
}

#[test]
fn test_extend_by_reference() {
    let mut set: Set<u8> = set![1];
    let more = [2, 3, 1];
    set.extend(more.iter());
    assert_eq!(sorted(&set), [1, 2, 3]);
}

#[test]
fn test_hash_collisions() {
    let mut set = Set::with_hasher(CollidingHasherBuilder);
    for value in ["zero", "one", "two", "three", "four", "five"] {
        set.insert(value);
    }

    set.remove("zero");
    set.remove("two");

    assert_eq!(
        sorted(&set),
        ["five", "four", "one", "three"],
        "Set should handle hash collisions so that no elements are lost during removal."
    );

    let other: Set<&str, CollidingHasherBuilder> = ["one", "six"].into_iter().collect();
    assert_eq!(sorted(&set.intersect(&other)), ["one"]);
    assert!(set.intersects(&other));
    assert!(!set.contains_all(&other));
}

#[test]
fn test_display() {
    let set: Set<i32> = set![];
    assert_eq!(set.to_string(), "#{}");

    let set: Set<i32> = set![7];
    assert_eq!(set.to_string(), "#{7}");

    let set: Set<i32> = set![1, 2];
    let shown = set.to_string();
    assert!(shown == "#{1, 2}" || shown == "#{2, 1}", "Unexpected Display output: {shown}");
}

#[test]
fn test_debug() {
    let set: Set<&str> = set!["a"];
    assert_eq!(format!("{set:?}"), "{\"a\"}");
}

#[cfg(feature = "serde")]
mod json {
    use super::*;

    #[test]
    fn test_empty_encodes_to_empty_list() {
        let set: Set<i32> = set![];
        assert_eq!(set.to_json().unwrap(), "[]");
    }

    #[test]
    fn test_single_element_encoding() {
        let set: Set<&str> = set!["only"];
        assert_eq!(set.to_json().unwrap(), "[\"only\"]");
    }

    #[test]
    fn test_round_trip() {
        let set: Set<String> = ["a", "b", "c"].into_iter().map(String::from).collect();
        let json = set.to_json().unwrap();

        let mut decoded = Set::new();
        decoded.merge_json(&json).unwrap();
        assert!(decoded.equals(&set));
    }

    #[test]
    fn test_merge_json_keeps_existing() {
        let mut set: Set<i32> = set![1, 2];
        set.merge_json("[2, 3, 3]").unwrap();
        assert_eq!(set, set![1, 2, 3]);
    }

    #[test]
    fn test_decode_non_list_fails_and_leaves_receiver() {
        let mut set: Set<i32> = set![9];

        let error = set.merge_json("{\"a\": 1}").unwrap_err();
        assert!(error.is_type_mismatch());
        assert_eq!(set, set![9], "A failed decode shouldn't modify the receiver.");

        let error = set.merge_json("[1, 2").unwrap_err();
        assert!(error.is_malformed());
        assert_eq!(set, set![9]);
    }

    #[test]
    fn test_decode_wrong_element_type_leaves_receiver() {
        let mut set: Set<i32> = set![];
        // The first element is valid, but nothing should be inserted.
        let error = set.merge_json("[1, \"two\"]").unwrap_err();
        assert!(error.is_type_mismatch());
        assert_eq!(error.line(), 1);
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_json_collapses_duplicates() {
        let set: Set<u8> = Set::from_json("[4, 4, 5]").unwrap();
        assert_eq!(set, set![4, 5]);
        assert!(Set::<u8>::from_json("null").is_err());
    }

    #[test]
    fn test_decode_error_display() {
        let error = Set::<u8>::from_json("7").unwrap_err();
        assert!(error.to_string().starts_with("Unable to decode Set from JSON: "));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_serde_nested_field() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Tags {
            tags: Set<String>,
        }

        let tags: Tags = serde_json::from_str("{\"tags\": [\"x\", \"y\", \"x\"]}").unwrap();
        assert_eq!(tags.tags.len(), 2);

        let json = serde_json::to_string(&Tags { tags: set!["z".to_string()] }).unwrap();
        assert_eq!(json, "{\"tags\":[\"z\"]}");
    }
}
