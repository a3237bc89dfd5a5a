/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! OpenMX input file generation
//!
//! This module turns validated [`Parameters`](crate::params::Parameters)
//! into the keyword/block text format read by OpenMX.

pub mod blocks;
pub mod errors;
pub mod format;
pub mod writer;

pub use blocks::{block_writer, BlockWriter, BLOCK_WRITERS};
pub use errors::{Result, WriteError};
pub use writer::write_input;

use std::fs;
use std::path::Path;

use crate::params::Parameters;
use crate::schema::Schema;

/// Render `parameters` and write them to `path`.
///
/// Nothing is written when rendering fails.
pub fn write_input_file<P: AsRef<Path>>(path: P, parameters: &Parameters, schema: &Schema) -> Result<()> {
    let content = write_input(parameters, schema)?;
    fs::write(path, content).map_err(WriteError::IoError)
}
