/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Structure collaborator interface
//!
//! Recommendation lookups only need the chemical symbol of each species in
//! a structure, so any structure type can take part by implementing
//! [`Structure`] and [`Specie`].

use serde::{Deserialize, Serialize};

/// A species that knows its chemical symbol
pub trait Specie {
    fn symbol(&self) -> &str;
}

/// A structure exposing its species
pub trait Structure {
    type Specie: Specie;

    fn species(&self) -> &[Self::Specie];
}

impl Specie for String {
    fn symbol(&self) -> &str {
        self
    }
}

/// Species entry of a [`SpeciesList`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtomicSpecie {
    pub symbol: String,
}

impl Specie for AtomicSpecie {
    fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Minimal structure: the species of each site in order.
///
/// Deserializes from `{"species": [{"symbol": "Fe"}, ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesList {
    pub species: Vec<AtomicSpecie>,
}

impl SpeciesList {
    pub fn from_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            species: symbols
                .into_iter()
                .map(|s| AtomicSpecie { symbol: s.into() })
                .collect(),
        }
    }
}

impl Structure for SpeciesList {
    type Specie = AtomicSpecie;

    fn species(&self) -> &[AtomicSpecie] {
        &self.species
    }
}
