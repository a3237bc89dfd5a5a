/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Schema document model
//!
//! Schemas are JSON-schema documents whose top-level `properties` map each
//! input keyword to a type descriptor. The members the writer and the type
//! checker need are typed; every other member (`pattern`, `anyOf`, `$ref`,
//! `definitions`, ...) is kept verbatim so the document serializes back
//! unchanged for full JSON-schema validation.

use std::fmt;
use std::io::Read;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Type name of a schema entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    Number,
    Integer,
    String,
    Array,
    Boolean,
    Object,
    Null,
    /// A type name this crate does not know how to check or write
    Unrecognized(String),
}

impl SchemaType {
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::Number => "number",
            SchemaType::Integer => "integer",
            SchemaType::String => "string",
            SchemaType::Array => "array",
            SchemaType::Boolean => "boolean",
            SchemaType::Object => "object",
            SchemaType::Null => "null",
            SchemaType::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SchemaType::Unrecognized(_))
    }
}

impl From<String> for SchemaType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "string" => SchemaType::String,
            "array" => SchemaType::Array,
            "boolean" => SchemaType::Boolean,
            "object" => SchemaType::Object,
            "null" => SchemaType::Null,
            _ => SchemaType::Unrecognized(name),
        }
    }
}

impl From<SchemaType> for String {
    fn from(ty: SchemaType) -> Self {
        match ty {
            SchemaType::Unrecognized(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(name: &str) -> Self {
        SchemaType::from(name.to_string())
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` member: a single type name or a list of alternatives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    Single(SchemaType),
    Union(Vec<SchemaType>),
}

impl TypeSpec {
    pub fn types(&self) -> &[SchemaType] {
        match self {
            TypeSpec::Single(ty) => std::slice::from_ref(ty),
            TypeSpec::Union(types) => types,
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.types().iter().map(SchemaType::as_str).collect();
        f.write_str(&names.join(" or "))
    }
}

/// The `additionalProperties` member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Allowed(bool),
    Schema(Box<PropertySchema>),
}

/// The `items` member: one schema for every item, or one per position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Single(Box<PropertySchema>),
    Tuple(Vec<PropertySchema>),
}

/// Type descriptor of one keyword, or of a nested item or member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<TypeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<JsonValue>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Members without a typed field, e.g. `pattern` or `$ref`
    #[serde(flatten)]
    pub other: Map<String, JsonValue>,
}

impl PropertySchema {
    /// Shorthand for a descriptor with only a type
    pub fn of_type(ty: impl Into<SchemaType>) -> Self {
        Self {
            kind: Some(TypeSpec::Single(ty.into())),
            ..Self::default()
        }
    }

    /// Descriptor of an array whose items have the given type
    pub fn array_of(item: PropertySchema) -> Self {
        Self {
            items: Some(Items::Single(Box::new(item))),
            ..Self::of_type(SchemaType::Array)
        }
    }

    /// The declared type used to pick an output format.
    ///
    /// For a union the first alternative wins.
    pub fn primary_type(&self) -> Option<&SchemaType> {
        self.kind.as_ref().and_then(|spec| spec.types().first())
    }

    /// Declared type of the array items, if any.
    ///
    /// A positional `items` list only has one when every position agrees.
    pub fn item_type(&self) -> Option<&SchemaType> {
        match self.items.as_ref()? {
            Items::Single(item) => item.primary_type(),
            Items::Tuple(positions) => {
                let first = positions.first()?.primary_type()?;
                positions
                    .iter()
                    .all(|item| item.primary_type() == Some(first))
                    .then_some(first)
            }
        }
    }
}

/// A versioned OpenMX input schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub dialect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertySchema>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<AdditionalProperties>,
    /// Members without a typed field, e.g. `definitions`
    #[serde(flatten)]
    pub other: Map<String, JsonValue>,
}

impl Schema {
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// The schema as a JSON document
    pub fn to_json(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(self)
    }

    /// Schema entry of a keyword
    pub fn property(&self, keyword: &str) -> Option<&PropertySchema> {
        self.properties.get(keyword)
    }

    /// Builder used mostly by tests and callers assembling schemas in code
    pub fn with_property(mut self, keyword: impl Into<String>, property: PropertySchema) -> Self {
        self.properties.insert(keyword.into(), property);
        self
    }
}
