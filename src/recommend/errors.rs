/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for basis and pseudopotential recommendations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while looking up recommendations
#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("A recommendations table does not exist for {id} (looked for {path})")]
    UnresolvedTable { id: String, path: PathBuf },

    #[error("Element {element} is not in recommendations table {id}")]
    UnknownElement { element: String, id: String },

    #[error("Unknown {kind}: {value}")]
    UnknownQualifier { kind: &'static str, value: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed recommendations table: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for recommendation lookups
pub type Result<T> = std::result::Result<T, RecommendError>;
