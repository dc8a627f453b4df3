use std::fmt::{self, Formatter};
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{DecodeError, EncodeError, Set};

// Caps the preallocation driven by an untrusted length hint.
const MAX_PREALLOCATED_CAP: usize = 4096;

impl<V: Hash + Eq, S: BuildHasher> Set<V, S> {
    /// Encodes the Set as a JSON array of its elements, in no particular order.
    ///
    /// An empty Set encodes to `[]`.
    pub fn to_json(&self) -> Result<String, EncodeError>
    where
        V: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes `json` as an array of elements and adds every element to `self`.
    ///
    /// Existing elements are kept, so decoding into a non-empty Set merges the two. The whole input
    /// is decoded before anything is inserted: if this returns an error, `self` is unchanged.
    pub fn merge_json(&mut self, json: &str) -> Result<(), DecodeError>
    where
        V: DeserializeOwned,
    {
        let values: Vec<V> = serde_json::from_str(json)?;
        self.reserve(values.len());
        self.extend(values);
        Ok(())
    }

    /// Decodes a new Set from a JSON array of elements. Duplicate elements collapse.
    pub fn from_json(json: &str) -> Result<Set<V, S>, DecodeError>
    where
        V: DeserializeOwned,
        S: Default,
    {
        Ok(serde_json::from_str(json)?)
    }
}

impl<V: Hash + Eq + Serialize, S: BuildHasher> Serialize for Set<V, S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.collect_seq(self)
    }
}

impl<'de, V, S> Deserialize<'de> for Set<V, S>
where
    V: Hash + Eq + Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor<V, S> {
            _phantom: PhantomData<fn() -> (V, S)>,
        }

        impl<'de, V, S> Visitor<'de> for SetVisitor<V, S>
        where
            V: Hash + Eq + Deserialize<'de>,
            S: BuildHasher + Default,
        {
            type Value = Set<V, S>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a list of set elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let cap = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_CAP);
                let mut set = Set::with_capacity_and_hasher(cap, S::default());

                while let Some(value) = seq.next_element()? {
                    set.insert(value);
                }

                Ok(set)
            }
        }

        deserializer.deserialize_seq(SetVisitor {
            _phantom: PhantomData,
        })
    }
}
