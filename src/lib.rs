/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # openmx-input
//!
//! Generation and validation of input files for the OpenMX density
//! functional theory code.
//!
//! Parameters are collected in an ordered [`Parameters`] set, checked
//! against a versioned [`Schema`] with [`validate`], and rendered into
//! OpenMX's keyword/block text format with [`write_input`]. Basis set and
//! pseudopotential recommendations for elements and structures are
//! available through [`RecommendationStore`].
//!
//! ```no_run
//! use openmx_input::{validate, write_input, Parameters, SchemaStore};
//!
//! let schema = SchemaStore::new("data").load_schema("3.9")?;
//! let parameters = Parameters::new()
//!     .with("SCF_restart", true)
//!     .with("SCF_Criterion", 1e-6);
//! validate(&schema, &parameters)?;
//! let content = write_input(&parameters, &schema)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod input;
pub mod params;
pub mod recommend;
pub mod schema;

pub use config::StorageConfig;
pub use input::{write_input, write_input_file, WriteError};
pub use params::{Parameters, Scalar, Value};
pub use recommend::{Hardness, Precision, RecommendError, RecommendationStore};
pub use schema::{validate, Schema, SchemaError, SchemaStore, ValidationError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
