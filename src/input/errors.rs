/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for OpenMX input writing

use std::io;
use thiserror::Error;

/// Errors that can occur while writing an OpenMX input file
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Keyword {keyword} is not described by the schema")]
    UnknownKeyword { keyword: String },

    #[error("Keyword {keyword} has type '{type_name}' which cannot be written")]
    UnsupportedType { keyword: String, type_name: String },

    #[error("Invalid value for {keyword}: {reason}")]
    InvalidValue { keyword: String, reason: String },

    #[error("Keyword {keyword} holds a complex number with a non-zero imaginary part")]
    NonRealNumber { keyword: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl WriteError {
    pub(crate) fn invalid(keyword: &str, reason: impl Into<String>) -> Self {
        WriteError::InvalidValue {
            keyword: keyword.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for input writing
pub type Result<T> = std::result::Result<T, WriteError>;
