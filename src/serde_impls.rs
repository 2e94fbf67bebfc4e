//! Serde support for [`Maybe`], mirroring `Option`'s wire shape.
//!
//! `Known(v)` serializes like `Some(v)` and `Unknown` like `None`, so a
//! `Maybe<T>` field reads and writes the same JSON as an `Option<T>` field.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Known(value) => serializer.serialize_some(value),
            Maybe::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}
