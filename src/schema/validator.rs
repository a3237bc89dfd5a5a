/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Parameter validation against an input schema
//!
//! Validation runs in two passes. The [`TypeChecker`] first checks every
//! declared `type` on the parameter values as given, so numeric-library
//! scalars and arrays are judged by their own kind. The parameters are then
//! converted to a JSON instance and checked against the full schema
//! document by `jsonschema`, which covers every other assertion.

use log::{debug, trace};

use super::checker::TypeChecker;
use super::errors::ValidationError;
use super::model::{AdditionalProperties, Items, PropertySchema, Schema};
use crate::params::{Parameters, Value};

/// Validates parameter sets against one compiled schema
pub struct Validator<'s> {
    schema: &'s Schema,
    checker: TypeChecker,
    compiled: jsonschema::Validator,
}

impl<'s> Validator<'s> {
    /// Validator recognizing numeric-library scalars and arrays
    pub fn new(schema: &'s Schema) -> Result<Self, ValidationError> {
        Self::with_type_checker(schema, TypeChecker::numeric())
    }

    /// Compile `schema`, failing when the document is not a valid JSON schema
    pub fn with_type_checker(
        schema: &'s Schema,
        checker: TypeChecker,
    ) -> Result<Self, ValidationError> {
        let invalid = |reason: String| ValidationError::InvalidSchema { reason };
        let document = schema.to_json().map_err(|e| invalid(e.to_string()))?;
        let compiled = jsonschema::validator_for(&document).map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            schema,
            checker,
            compiled,
        })
    }

    /// Check every keyword of `parameters`, stopping at the first error
    pub fn validate(&self, parameters: &Parameters) -> Result<(), ValidationError> {
        for keyword in &self.schema.required {
            if !parameters.contains_key(keyword) {
                return Err(ValidationError::MissingKeyword {
                    keyword: keyword.clone(),
                });
            }
        }

        for (keyword, value) in parameters {
            trace!("Type checking {}", keyword);
            match self.schema.property(keyword) {
                Some(property) => self.check_types(keyword, property, value, "")?,
                None => match &self.schema.additional_properties {
                    Some(AdditionalProperties::Allowed(false))
                        if !self.schema.other.contains_key("patternProperties") =>
                    {
                        return Err(ValidationError::UnexpectedKeyword {
                            keyword: keyword.clone(),
                        });
                    }
                    Some(AdditionalProperties::Schema(property)) => {
                        self.check_types(keyword, property, value, "")?
                    }
                    _ => trace!("{} is not described by the schema", keyword),
                },
            }
        }

        let instance = serde_json::Value::Object(
            parameters
                .iter()
                .map(|(keyword, value)| (keyword.clone(), value.to_instance()))
                .collect(),
        );
        if let Some(error) = self.compiled.iter_errors(&instance).next() {
            return Err(constraint_violation(&error));
        }

        debug!("Validated {} parameters", parameters.len());
        Ok(())
    }

    /// Declared `type` checks, descending into items and members
    fn check_types(
        &self,
        keyword: &str,
        schema: &PropertySchema,
        value: &Value,
        path: &str,
    ) -> Result<(), ValidationError> {
        if let Some(spec) = &schema.kind {
            let matched = spec
                .types()
                .iter()
                .any(|ty| self.checker.is_type(value, ty) == Some(true));
            if !matched {
                return Err(ValidationError::TypeMismatch {
                    keyword: keyword.to_string(),
                    path: path.to_string(),
                    expected: spec.to_string(),
                    actual: value.type_name(),
                });
            }
        }

        if let Some(items) = value.elements() {
            match &schema.items {
                Some(Items::Single(item_schema)) => {
                    for (index, item) in items.iter().enumerate() {
                        self.check_types(keyword, item_schema, item, &format!("{path}/{index}"))?;
                    }
                }
                Some(Items::Tuple(positions)) => {
                    for (index, (item_schema, item)) in positions.iter().zip(&items).enumerate() {
                        self.check_types(keyword, item_schema, item, &format!("{path}/{index}"))?;
                    }
                }
                None => {}
            }
        }

        if let Some(members) = value.as_mapping() {
            for (name, member) in members {
                let member_path = format!("{path}/{name}");
                let property = match (schema.properties.get(name), &schema.additional_properties) {
                    (Some(property), _) => Some(property),
                    (None, Some(AdditionalProperties::Schema(property))) => Some(property.as_ref()),
                    _ => None,
                };
                if let Some(property) = property {
                    self.check_types(keyword, property, member, &member_path)?;
                }
            }
        }

        Ok(())
    }
}

/// Split a `jsonschema` error into the keyword and the path below it
fn constraint_violation(error: &jsonschema::ValidationError<'_>) -> ValidationError {
    let pointer = error.instance_path.to_string();
    let mut segments = pointer.splitn(3, '/').skip(1);
    let keyword = segments.next().map(unescape).unwrap_or_default();
    let path = segments
        .next()
        .map(|rest| format!("/{rest}"))
        .unwrap_or_default();

    let schema_path = error.schema_path.to_string();
    let constraint = schema_path
        .rsplit('/')
        .next()
        .map(unescape)
        .unwrap_or_default();

    ValidationError::ConstraintViolation {
        keyword,
        path,
        constraint,
        message: error.to_string(),
    }
}

/// Decode one JSON-pointer segment
fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Validate `parameters` against `schema` with numeric-library type support
pub fn validate(schema: &Schema, parameters: &Parameters) -> Result<(), ValidationError> {
    Validator::new(schema)?.validate(parameters)
}
