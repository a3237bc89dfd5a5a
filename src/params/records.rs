/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Typed records carried by the structured OpenMX keywords

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Orbital letters in the order used by the PAO basis specification
const ORBITAL_LETTERS: [char; 4] = ['s', 'p', 'd', 'f'];

/// One atom of the `ATOMS_SPECIESANDCOORDINATES` block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesCoordinate {
    /// Species name as defined in `DEFINITION_OF_ATOMIC_SPECIES`
    pub specie: String,
    pub coords: [f64; 3],
    /// Initial spin-up charge
    pub up_charge: f64,
    /// Initial spin-down charge
    pub down_charge: f64,
}

/// Pseudo-atomic orbital basis of a species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaoBasis {
    /// PAO file name without extension, e.g. `H6.0`
    pub file_stem: String,
    /// Number of orbitals per angular momentum, indexed s, p, d, f
    pub orbital_configuration: [u32; 4],
}

impl PaoBasis {
    /// Orbital label such as `s2p2d1`; zero counts are left out
    pub fn orbital_label(&self) -> String {
        self.orbital_configuration
            .iter()
            .zip(ORBITAL_LETTERS)
            .filter(|(count, _)| **count != 0)
            .map(|(count, letter)| format!("{letter}{count}"))
            .collect()
    }

    /// Basis specification as written in the species block, e.g. `H6.0-s2p1`
    pub fn specification(&self) -> String {
        format!("{}-{}", self.file_stem, self.orbital_label())
    }
}

/// Basis and pseudopotential of one species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    pub pao: PaoBasis,
    /// Pseudopotential file name without extension, e.g. `H_PBE19`
    pub pseudo: String,
}

/// Contents of `DEFINITION_OF_ATOMIC_SPECIES`, in species order
pub type AtomicSpecies = IndexMap<String, SpeciesDefinition>;

/// One segment of the band-structure k-path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KPathSegment {
    /// Number of k-points sampled along the segment
    pub n_points: u32,
    /// Fractional start coordinate
    pub start: [f64; 3],
    /// Fractional end coordinate
    pub end: [f64; 3],
    pub start_label: String,
    pub end_label: String,
}
