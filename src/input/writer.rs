/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! OpenMX input file writer

use log::{debug, trace};

use super::blocks::{block_writer, BlockWriter};
use super::errors::{Result, WriteError};
use super::format::{format_boolean, keyword_tag, Primitive};
use crate::params::{Parameters, Value};
use crate::schema::{PropertySchema, Schema, SchemaType};

/// How one keyword is rendered
#[derive(Debug, Clone, Copy)]
enum Rendering {
    /// Special-cased structured keyword
    Block(BlockWriter),
    Boolean,
    Scalar(Primitive),
    /// One-dimensional array on a single line
    List(Primitive),
}

impl Rendering {
    /// Pick the rendering of `keyword`: block keywords first, then the
    /// declared schema type
    fn resolve(keyword: &str, property: &PropertySchema) -> Result<Self> {
        let declared = property.primary_type().ok_or_else(|| WriteError::UnsupportedType {
            keyword: keyword.to_string(),
            type_name: "<none>".to_string(),
        })?;
        if !declared.is_recognized() {
            return Err(unsupported(keyword, declared.as_str()));
        }

        if let Some(writer) = block_writer(keyword) {
            return Ok(Rendering::Block(writer));
        }

        match declared {
            SchemaType::Boolean => Ok(Rendering::Boolean),
            SchemaType::Array => {
                let item_type = property
                    .item_type()
                    .ok_or_else(|| unsupported(keyword, "array without item type"))?;
                Primitive::from_schema(item_type)
                    .map(Rendering::List)
                    .ok_or_else(|| unsupported(keyword, &format!("array of {item_type}")))
            }
            other => Primitive::from_schema(other)
                .map(Rendering::Scalar)
                .ok_or_else(|| unsupported(keyword, other.as_str())),
        }
    }

    fn render(self, keyword: &str, value: &Value) -> Result<String> {
        match self {
            Rendering::Block(writer) => writer(keyword, value),
            Rendering::Boolean => Ok(format!(
                "{} {}\n",
                keyword_tag(keyword),
                format_boolean(keyword, value)?
            )),
            Rendering::Scalar(primitive) => Ok(format!(
                "{} {}\n",
                keyword_tag(keyword),
                primitive.format(keyword, value)?
            )),
            Rendering::List(primitive) => {
                let items = value.elements().ok_or_else(|| {
                    WriteError::invalid(
                        keyword,
                        format!("expected an array, found {}", value.type_name()),
                    )
                })?;
                let mut tokens = Vec::with_capacity(items.len() + 1);
                tokens.push(keyword_tag(keyword));
                for item in &items {
                    tokens.push(primitive.format(keyword, item)?);
                }
                Ok(format!("{}\n", tokens.join(" ")))
            }
        }
    }
}

fn unsupported(keyword: &str, type_name: &str) -> WriteError {
    WriteError::UnsupportedType {
        keyword: keyword.to_string(),
        type_name: type_name.to_string(),
    }
}

/// Render `parameters` as the contents of an OpenMX input file.
///
/// Keywords are written in parameter order. Every keyword is resolved
/// against the schema before any text is produced, so an unknown keyword
/// or unwritable type fails without partial output.
pub fn write_input(parameters: &Parameters, schema: &Schema) -> Result<String> {
    let mut plan = Vec::with_capacity(parameters.len());
    for (keyword, value) in parameters {
        let property = schema
            .property(keyword)
            .ok_or_else(|| WriteError::UnknownKeyword {
                keyword: keyword.clone(),
            })?;
        plan.push((keyword, value, Rendering::resolve(keyword, property)?));
    }

    let mut content = String::new();
    for (keyword, value, rendering) in plan {
        trace!("Writing {} as {:?}", keyword, rendering);
        content.push_str(&rendering.render(keyword, value)?);
    }

    debug!(
        "Wrote {} keywords ({} bytes) of OpenMX input",
        parameters.len(),
        content.len()
    );
    Ok(content)
}
