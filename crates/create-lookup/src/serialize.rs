//! Loading and dumping tables through serde.
//!
//! An entry is represented as an optional value: `null` (or any other
//! encoding of `None`) is [`Entry::Absent`]. Producers cannot be
//! deserialized; when serialized they are evaluated once and their current
//! result is written.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entry::Entry;
use crate::lookup::Lookup;

impl<'de, R> Deserialize<'de> for Entry<R>
where
    R: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<R>::deserialize(deserializer).map(Entry::from_option)
    }
}

/// Producers are evaluated once per serialization, even if the table was
/// never resolved. `Value(None)` for an optional `R` reads back as `Absent`.
impl<R> Serialize for Entry<R>
where
    R: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Entry::Value(value) => serializer.serialize_some(value),
            Entry::Producer(producer) => serializer.serialize_some(&producer.call()),
            Entry::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, K, R> Deserialize<'de> for Lookup<K, R>
where
    K: Deserialize<'de> + Eq + Hash,
    R: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        HashMap::<K, Entry<R>>::deserialize(deserializer).map(Lookup::from_table)
    }
}

impl<K, R> Serialize for Lookup<K, R>
where
    K: Serialize + Eq + Hash,
    R: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
