use derive_more::{Display, Error, From};
use serde_json::error::Category;

/// The error returned when a [`Set`](super::Set) can't be decoded from its list representation.
///
/// This happens when the input isn't well-formed JSON, isn't an array, or contains an element that
/// doesn't decode as the Set's element type. The Set being decoded into is left unchanged.
#[derive(Debug, Display, Error, From)]
#[display("Unable to decode Set from JSON: {source}")]
pub struct DecodeError {
    source: serde_json::Error,
}

impl DecodeError {
    /// The line of the input at which decoding failed, starting from 1.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// The column of the input at which decoding failed, starting from 1.
    pub fn column(&self) -> usize {
        self.source.column()
    }

    /// Returns true if the input was valid JSON but not a list of the expected element type.
    pub fn is_type_mismatch(&self) -> bool {
        self.source.classify() == Category::Data
    }

    /// Returns true if the input wasn't valid JSON, including if it ended early.
    pub fn is_malformed(&self) -> bool {
        matches!(self.source.classify(), Category::Syntax | Category::Eof)
    }
}

/// The error returned when a [`Set`](super::Set)'s elements can't be encoded, which can only be
/// caused by the element type's own `Serialize` implementation.
#[derive(Debug, Display, Error, From)]
#[display("Unable to encode Set as JSON: {source}")]
pub struct EncodeError {
    source: serde_json::Error,
}
