/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Lookup of stored recommendation tables

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::debug;

use super::errors::{RecommendError, Result};
use super::structure::{Specie, Structure};
use super::table::{table_id, Hardness, Precision, RecommendationTable};

/// Directory of recommendation tables below a data root
const TABLE_DIR: &str = "basis_pseudo";

/// Resolves recommendation tables stored as
/// `{root}/basis_pseudo/{version}_{precision}_{hardness}.json`.
///
/// Tables are read again on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct RecommendationStore {
    root: PathBuf,
}

impl RecommendationStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the table with identifier `id`
    pub fn table_path(&self, id: &str) -> PathBuf {
        self.root.join(TABLE_DIR).join(format!("{id}.json"))
    }

    /// Load the table for a version, precision and hardness
    pub fn load_table(
        &self,
        version: &str,
        precision: Precision,
        hardness: Hardness,
    ) -> Result<(String, RecommendationTable)> {
        let id = table_id(version, precision, hardness);
        let path = self.table_path(&id);
        if !path.is_file() {
            return Err(RecommendError::UnresolvedTable { id, path });
        }

        debug!("Loading recommendations table {} from {}", id, path.display());
        let file = File::open(&path)?;
        let table: RecommendationTable = serde_json::from_reader(BufReader::new(file))?;
        Ok((id, table))
    }

    /// Recommended basis and pseudopotential for one element
    pub fn element_recommendation(
        &self,
        element: &str,
        version: &str,
        precision: Precision,
        hardness: Hardness,
    ) -> Result<serde_json::Value> {
        let (id, table) = self.load_table(version, precision, hardness)?;
        lookup(&table, &id, element).cloned()
    }

    /// Recommendations for every distinct species of a structure, keyed by
    /// symbol in order of first appearance
    pub fn structure_recommendations<S: Structure>(
        &self,
        structure: &S,
        version: &str,
        precision: Precision,
        hardness: Hardness,
    ) -> Result<IndexMap<String, serde_json::Value>> {
        let (id, table) = self.load_table(version, precision, hardness)?;
        let mut recommendations = IndexMap::new();
        for specie in structure.species() {
            let symbol = specie.symbol();
            if recommendations.contains_key(symbol) {
                continue;
            }
            let record = lookup(&table, &id, symbol)?;
            recommendations.insert(symbol.to_string(), record.clone());
        }
        debug!("Resolved {} species from table {}", recommendations.len(), id);
        Ok(recommendations)
    }
}

fn lookup<'t>(
    table: &'t RecommendationTable,
    id: &str,
    element: &str,
) -> Result<&'t serde_json::Value> {
    table.get(element).ok_or_else(|| RecommendError::UnknownElement {
        element: element.to_string(),
        id: id.to_string(),
    })
}
