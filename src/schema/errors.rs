/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for schema loading and parameter validation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a schema
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("There is no schema available for version {version} (looked for {path})")]
    UnresolvedSchema { version: String, path: PathBuf },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Malformed schema document: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors reported when parameters do not match their schema.
///
/// `path` locates the offending element inside the keyword's value, e.g.
/// `/0/coords`; it is empty when the keyword value itself is at fault.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{keyword}{path}: expected {expected}, found {actual}")]
    TypeMismatch {
        keyword: String,
        path: String,
        expected: String,
        actual: String,
    },

    #[error("{keyword}: required entry is missing")]
    MissingKeyword { keyword: String },

    #[error("{keyword}: entry is not allowed by the schema")]
    UnexpectedKeyword { keyword: String },

    /// A JSON-schema assertion (`constraint` names it, e.g. `minItems`) failed
    #[error("{keyword}{path}: {message}")]
    ConstraintViolation {
        keyword: String,
        path: String,
        constraint: String,
        message: String,
    },

    #[error("Schema cannot be used for validation: {reason}")]
    InvalidSchema { reason: String },
}

impl ValidationError {
    /// Keyword whose value failed validation; empty for schema errors
    pub fn keyword(&self) -> &str {
        match self {
            ValidationError::TypeMismatch { keyword, .. }
            | ValidationError::MissingKeyword { keyword }
            | ValidationError::UnexpectedKeyword { keyword }
            | ValidationError::ConstraintViolation { keyword, .. } => keyword,
            ValidationError::InvalidSchema { .. } => "",
        }
    }
}

/// Result type for schema loading
pub type Result<T> = std::result::Result<T, SchemaError>;
