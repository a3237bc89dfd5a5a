/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Input schemas and parameter validation
//!
//! Schemas are looked up by OpenMX version from a [`SchemaStore`] and
//! parameters are checked with [`validate`]. Type checking accepts the
//! scalar and array types of the numeric stack as well as plain JSON
//! values (see [`TypeChecker`]).

pub mod checker;
pub mod errors;
pub mod model;
pub mod store;
pub mod validator;

pub use checker::{TypeChecker, TypePredicate};
pub use errors::{Result, SchemaError, ValidationError};
pub use model::{AdditionalProperties, Items, PropertySchema, Schema, SchemaType, TypeSpec};
pub use store::{SchemaStore, DEFAULT_SCHEMA_VERSION};
pub use validator::{validate, Validator};
