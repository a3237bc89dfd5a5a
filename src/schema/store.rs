/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Versioned schema storage

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;

use super::errors::{Result, SchemaError};
use super::model::Schema;

/// Schema version used when none is requested
pub const DEFAULT_SCHEMA_VERSION: &str = "3.9";

/// Directory of schema documents below a data root
const SCHEMA_DIR: &str = "schema";

/// Loads schema documents stored as `{root}/schema/{version}.json`
#[derive(Debug, Clone)]
pub struct SchemaStore {
    root: PathBuf,
}

impl SchemaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the document for `version`
    pub fn schema_path(&self, version: &str) -> PathBuf {
        self.root.join(SCHEMA_DIR).join(format!("{version}.json"))
    }

    /// Load the schema for an OpenMX version
    pub fn load_schema(&self, version: &str) -> Result<Schema> {
        let path = self.schema_path(version);
        if !path.is_file() {
            return Err(SchemaError::UnresolvedSchema {
                version: version.to_string(),
                path,
            });
        }

        debug!("Loading schema {} from {}", version, path.display());
        let file = File::open(&path)?;
        let schema = Schema::from_reader(BufReader::new(file))?;
        debug!("Schema {} declares {} keywords", version, schema.properties.len());
        Ok(schema)
    }
}
