/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! OpenMX input parameters
//!
//! [`Parameters`] is the ordered keyword → value mapping handed to the
//! validator and the writer. Keywords are the upper-case, underscore
//! separated names used by the schema, e.g. `ATOMS_SPECIESANDCOORDINATES`.
//! Insertion order is kept because it is the order in which keywords are
//! written.

pub mod records;
pub mod value;

pub use records::{AtomicSpecies, KPathSegment, PaoBasis, SpeciesCoordinate, SpeciesDefinition};
pub use value::{NdArray, Scalar, Value};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Ordered set of input parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: IndexMap<String, Value>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a keyword, returning the previous value if it was already set.
    ///
    /// Re-inserting an existing keyword keeps its original position.
    pub fn insert(&mut self, keyword: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(keyword.into(), value.into())
    }

    /// Builder form of [`Parameters::insert`]
    pub fn with(mut self, keyword: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(keyword, value);
        self
    }

    pub fn get(&self, keyword: &str) -> Option<&Value> {
        self.entries.get(keyword)
    }

    pub fn contains_key(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    pub fn remove(&mut self, keyword: &str) -> Option<Value> {
        self.entries.shift_remove(keyword)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse parameters from a JSON object, keeping keyword order
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Parameters from an already parsed JSON object
    pub fn from_json(json: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(json)
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Parameters {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
