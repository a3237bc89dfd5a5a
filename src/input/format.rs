/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Value formatting rules of the OpenMX input format

use super::errors::{Result, WriteError};
use crate::params::Value;
use crate::schema::SchemaType;

/// Decimal places of general floating point values
pub const NUMBER_PRECISION: usize = 12;

/// Decimal places of the initial spin charges in the coordinates block
pub const CHARGE_PRECISION: usize = 6;

/// Schema types with a single-token representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Number,
    Integer,
    String,
}

impl Primitive {
    pub fn from_schema(ty: &SchemaType) -> Option<Self> {
        match ty {
            SchemaType::Number => Some(Primitive::Number),
            SchemaType::Integer => Some(Primitive::Integer),
            SchemaType::String => Some(Primitive::String),
            _ => None,
        }
    }

    /// Render `value` as a single token
    pub fn format(self, keyword: &str, value: &Value) -> Result<String> {
        match self {
            Primitive::Number => format_number(keyword, value, NUMBER_PRECISION),
            Primitive::Integer => format_integer(keyword, value),
            Primitive::String => value
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| expected(keyword, "a string", value)),
        }
    }
}

/// Real, finite value of a numeric scalar; `None` for non-numeric values
fn real_number(keyword: &str, value: &Value) -> Result<Option<f64>> {
    if value.is_non_real() {
        return Err(WriteError::NonRealNumber {
            keyword: keyword.to_string(),
        });
    }
    match value.as_f64() {
        Some(number) if !number.is_finite() => Err(WriteError::invalid(
            keyword,
            format!("expected a finite number, found {number}"),
        )),
        other => Ok(other),
    }
}

/// Fixed-point rendering with `precision` decimals
pub fn format_number(keyword: &str, value: &Value, precision: usize) -> Result<String> {
    real_number(keyword, value)?
        .map(|number| format!("{number:.precision$}"))
        .ok_or_else(|| expected(keyword, "a number", value))
}

/// Reject complex or non-finite numbers anywhere inside a structured value
pub fn check_numbers(keyword: &str, value: &Value) -> Result<()> {
    if let Some(items) = value.elements() {
        return items.iter().try_for_each(|item| check_numbers(keyword, item));
    }
    if let Some(members) = value.as_mapping() {
        return members
            .values()
            .try_for_each(|member| check_numbers(keyword, member));
    }
    real_number(keyword, value).map(|_| ())
}

pub fn format_integer(keyword: &str, value: &Value) -> Result<String> {
    value
        .as_integer()
        .map(|integer| integer.to_string())
        .ok_or_else(|| expected(keyword, "an integer", value))
}

/// OpenMX spells booleans `on` and `off`
pub fn format_boolean(keyword: &str, value: &Value) -> Result<String> {
    match value.as_bool() {
        Some(true) => Ok("on".to_string()),
        Some(false) => Ok("off".to_string()),
        None => Err(expected(keyword, "a boolean", value)),
    }
}

/// Output tag of a keyword: `SCF_Criterion` becomes `SCF.Criterion`
pub fn keyword_tag(keyword: &str) -> String {
    keyword.replace('_', ".")
}

/// Wrap block lines in `<TAG` / `TAG>` lines
pub fn tag_block(tag: &str, lines: &[String]) -> String {
    format!("<{tag}\n{}\n{tag}>\n", lines.join("\n"))
}

fn expected(keyword: &str, what: &str, value: &Value) -> WriteError {
    WriteError::invalid(keyword, format!("expected {what}, found {}", value.type_name()))
}
