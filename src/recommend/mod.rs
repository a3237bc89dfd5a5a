/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Pseudo-atomic orbital basis and pseudopotential recommendations
//!
//! Recommendations come from static tables identified by table version,
//! basis precision and pseudopotential hardness. A record can be looked up
//! for a single element or for all species of a structure.

pub mod errors;
pub mod store;
pub mod structure;
pub mod table;

pub use errors::{RecommendError, Result};
pub use store::RecommendationStore;
pub use structure::{AtomicSpecie, Specie, SpeciesList, Structure};
pub use table::{table_id, Hardness, Precision, RecommendationTable, DEFAULT_TABLE_VERSION};
