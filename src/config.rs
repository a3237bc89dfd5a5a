/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Data storage configuration

use std::env;
use std::path::PathBuf;

use crate::recommend::{Hardness, Precision, RecommendationStore, DEFAULT_TABLE_VERSION};
use crate::schema::{SchemaStore, DEFAULT_SCHEMA_VERSION};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "OPENMX_INPUT_DATA_DIR";

/// Where schemas and recommendation tables live, and which ones to use
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root holding `schema/` and `basis_pseudo/`
    pub data_dir: PathBuf,
    /// OpenMX schema version, e.g. `3.9`
    pub schema_version: String,
    /// Recommendation table version, e.g. `19`
    pub table_version: String,
    pub precision: Precision,
    pub hardness: Hardness,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            schema_version: DEFAULT_SCHEMA_VERSION.to_string(),
            table_version: DEFAULT_TABLE_VERSION.to_string(),
            precision: Precision::default(),
            hardness: Hardness::default(),
        }
    }
}

impl StorageConfig {
    /// Defaults, with the data directory taken from `OPENMX_INPUT_DATA_DIR` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn recommendation_store(&self) -> RecommendationStore {
        RecommendationStore::new(&self.data_dir)
    }

    pub fn schema_store(&self) -> SchemaStore {
        SchemaStore::new(&self.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorageConfig::default();
        assert_eq!(config.schema_version, "3.9");
        assert_eq!(config.table_version, "19");
        assert_eq!(config.precision, Precision::Standard);
        assert_eq!(config.hardness, Hardness::Soft);
    }

    #[test]
    fn test_stores_share_data_dir() {
        let config = StorageConfig::default().with_data_dir("/opt/openmx/data");
        assert_eq!(config.schema_store().root(), config.recommendation_store().root());
        assert!(config
            .schema_store()
            .schema_path("3.9")
            .ends_with("schema/3.9.json"));
    }
}
