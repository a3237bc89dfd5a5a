/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Recommendation tables and their identifiers

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::errors::RecommendError;

/// Table version used when none is requested
pub const DEFAULT_TABLE_VERSION: &str = "19";

/// Basis size class of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    Quick,
    #[default]
    Standard,
    Precise,
}

impl Precision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::Quick => "quick",
            Precision::Standard => "standard",
            Precision::Precise => "precise",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "quick" => Ok(Precision::Quick),
            "standard" => Ok(Precision::Standard),
            "precise" => Ok(Precision::Precise),
            _ => Err(RecommendError::UnknownQualifier {
                kind: "precision",
                value: s.to_string(),
            }),
        }
    }
}

/// Pseudopotential hardness of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hardness {
    #[default]
    Soft,
    Hard,
}

impl Hardness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Hardness::Soft => "soft",
            Hardness::Hard => "hard",
        }
    }
}

impl fmt::Display for Hardness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Hardness {
    type Err = RecommendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "soft" => Ok(Hardness::Soft),
            "hard" => Ok(Hardness::Hard),
            _ => Err(RecommendError::UnknownQualifier {
                kind: "hardness",
                value: s.to_string(),
            }),
        }
    }
}

/// Identifier of a stored table, `{version}_{precision}_{hardness}`
pub fn table_id(version: &str, precision: Precision, hardness: Hardness) -> String {
    format!("{version}_{precision}_{hardness}")
}

/// Element symbol → recommendation record.
///
/// Records are passed through untouched; their layout belongs to the table
/// author (usually a `pao`/`pseudo` pair matching the species block).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RecommendationTable {
    entries: IndexMap<String, serde_json::Value>,
}

impl RecommendationTable {
    pub fn get(&self, element: &str) -> Option<&serde_json::Value> {
        self.entries.get(element)
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
