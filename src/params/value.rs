/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Dynamic parameter values
//!
//! A [`Value`] holds whatever a caller puts under an input keyword: plain
//! JSON-like primitives, ordered records, and the scalar and array types of
//! the numeric stack (`num-complex` scalars, `ndarray` arrays). The schema
//! validator and the input writer both work on this type.

use indexmap::IndexMap;
use ndarray::{Array, ArrayD, Dimension};
use num_complex::{Complex32, Complex64};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Fixed-width numeric scalar, as produced by numeric array code
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    I16(i16),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Complex32(Complex32),
    Complex64(Complex64),
}

impl Scalar {
    /// Name of the element type, e.g. `float64`
    pub fn dtype(&self) -> &'static str {
        match self {
            Scalar::I16(_) => "int16",
            Scalar::I32(_) => "int32",
            Scalar::I64(_) => "int64",
            Scalar::U32(_) => "uint32",
            Scalar::U64(_) => "uint64",
            Scalar::F32(_) => "float32",
            Scalar::F64(_) => "float64",
            Scalar::Complex32(_) => "complex64",
            Scalar::Complex64(_) => "complex128",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Scalar::I16(_) | Scalar::I32(_) | Scalar::I64(_) | Scalar::U32(_) | Scalar::U64(_)
        )
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Scalar::Complex32(_) | Scalar::Complex64(_))
    }

    /// Integer value of an integer scalar
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Scalar::I16(v) => Some(v.into()),
            Scalar::I32(v) => Some(v.into()),
            Scalar::I64(v) => Some(v.into()),
            Scalar::U32(v) => Some(v.into()),
            Scalar::U64(v) => Some(v.into()),
            _ => None,
        }
    }

    /// Real value of the scalar.
    ///
    /// Complex scalars only have one when their imaginary part is zero.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Scalar::I16(v) => Some(v.into()),
            Scalar::I32(v) => Some(v.into()),
            Scalar::I64(v) => Some(v as f64),
            Scalar::U32(v) => Some(v.into()),
            Scalar::U64(v) => Some(v as f64),
            Scalar::F32(v) => Some(v.into()),
            Scalar::F64(v) => Some(v),
            Scalar::Complex32(c) => (c.im == 0.0).then_some(c.re.into()),
            Scalar::Complex64(c) => (c.im == 0.0).then_some(c.re),
        }
    }

    fn to_json(self, complex: ComplexJson) -> serde_json::Value {
        if let Some(v) = self.as_i128() {
            return match i64::try_from(v) {
                Ok(v) => v.into(),
                Err(_) => (v as f64).into(),
            };
        }
        match self {
            Scalar::Complex32(c) => complex.to_json(c.re.into(), c.im.into()),
            Scalar::Complex64(c) => complex.to_json(c.re, c.im),
            other => other.as_f64().map_or(serde_json::Value::Null, real_to_json),
        }
    }
}

/// Integer value of an integral float, if it fits in `i128`
pub(crate) fn integral(v: f64) -> Option<i128> {
    (v.fract() == 0.0 && v >= i128::MIN as f64 && v < i128::MAX as f64).then_some(v as i128)
}

/// Integral floats become JSON integers so typed records decode them
fn real_to_json(v: f64) -> serde_json::Value {
    match integral(v).and_then(|i| i64::try_from(i).ok()) {
        Some(i) => i.into(),
        None => v.into(),
    }
}

/// JSON form of complex numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComplexJson {
    /// `[re, im]` unless the imaginary part is zero
    Pair,
    /// Real part only
    RealPart,
}

impl ComplexJson {
    fn to_json(self, re: f64, im: f64) -> serde_json::Value {
        if im == 0.0 || self == ComplexJson::RealPart {
            real_to_json(re)
        } else {
            serde_json::Value::Array(vec![re.into(), im.into()])
        }
    }
}

/// N-dimensional array from the numeric stack
#[derive(Debug, Clone, PartialEq)]
pub enum NdArray {
    Int(ArrayD<i64>),
    Float(ArrayD<f64>),
    Complex(ArrayD<Complex64>),
}

impl NdArray {
    pub fn ndim(&self) -> usize {
        match self {
            NdArray::Int(a) => a.ndim(),
            NdArray::Float(a) => a.ndim(),
            NdArray::Complex(a) => a.ndim(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            NdArray::Int(a) => a.shape(),
            NdArray::Float(a) => a.shape(),
            NdArray::Complex(a) => a.shape(),
        }
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            NdArray::Int(_) => "int64",
            NdArray::Float(_) => "float64",
            NdArray::Complex(_) => "complex128",
        }
    }

    /// The single element of a zero-dimensional array
    pub fn as_scalar(&self) -> Option<Scalar> {
        if self.ndim() != 0 {
            return None;
        }
        match self {
            NdArray::Int(a) => a.first().map(|v| Scalar::I64(*v)),
            NdArray::Float(a) => a.first().map(|v| Scalar::F64(*v)),
            NdArray::Complex(a) => a.first().map(|v| Scalar::Complex64(*v)),
        }
    }

    /// Sub-values along the first axis: scalars for a 1-D array, arrays otherwise
    pub fn outer(&self) -> Vec<Value> {
        match self {
            NdArray::Int(a) => split_outer(a, Scalar::I64, NdArray::Int),
            NdArray::Float(a) => split_outer(a, Scalar::F64, NdArray::Float),
            NdArray::Complex(a) => split_outer(a, Scalar::Complex64, NdArray::Complex),
        }
    }
}

fn split_outer<A: Clone>(
    array: &ArrayD<A>,
    scalar: impl Fn(A) -> Scalar,
    nested: impl Fn(ArrayD<A>) -> NdArray,
) -> Vec<Value> {
    if array.ndim() == 0 {
        return Vec::new();
    }
    array
        .outer_iter()
        .map(|sub| match sub.first() {
            Some(v) if sub.ndim() == 0 => Value::Scalar(scalar(v.clone())),
            _ => Value::Array(nested(sub.to_owned())),
        })
        .collect()
}

/// A parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
    /// Resizable list
    Sequence(Vec<Value>),
    /// Fixed-length, non-resizable sequence
    Tuple(Box<[Value]>),
    /// Ordered record or name-keyed map
    Mapping(IndexMap<String, Value>),
    Scalar(Scalar),
    Array(NdArray),
}

impl Value {
    /// Human readable type of the value, used in error messages
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "boolean".to_string(),
            Value::Integer(_) => "integer".to_string(),
            Value::Number(_) => "number".to_string(),
            Value::String(_) => "string".to_string(),
            Value::Sequence(_) => "list".to_string(),
            Value::Tuple(items) => format!("tuple of length {}", items.len()),
            Value::Mapping(_) => "object".to_string(),
            Value::Scalar(s) => s.dtype().to_string(),
            Value::Array(a) => format!("ndarray<{}> of shape {:?}", a.dtype(), a.shape()),
        }
    }

    /// Elements of a sequence-like value, or `None` for anything else
    pub fn elements(&self) -> Option<Vec<Value>> {
        match self {
            Value::Sequence(items) => Some(items.clone()),
            Value::Tuple(items) => Some(items.to_vec()),
            Value::Array(a) if a.ndim() > 0 => Some(a.outer()),
            _ => None,
        }
    }

    /// Numeric scalar carried by the value, if any
    pub fn scalar(&self) -> Option<Scalar> {
        match self {
            Value::Integer(v) => Some(Scalar::I64(*v)),
            Value::Number(v) => Some(Scalar::F64(*v)),
            Value::Scalar(s) => Some(*s),
            Value::Array(a) => a.as_scalar(),
            _ => None,
        }
    }

    /// Real number carried by the value
    pub fn as_f64(&self) -> Option<f64> {
        self.scalar().and_then(|s| s.as_f64())
    }

    /// Integer carried by the value; integral floats count
    pub fn as_integer(&self) -> Option<i128> {
        match self.scalar()? {
            Scalar::F64(v) => integral(v),
            Scalar::F32(v) => integral(v.into()),
            s => s.as_i128(),
        }
    }

    /// True for complex values with a non-zero imaginary part
    pub fn is_non_real(&self) -> bool {
        matches!(self.scalar(), Some(s) if s.is_complex() && s.as_f64().is_none())
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    /// Convert to a JSON value, keeping mapping order.
    ///
    /// Integral floats are written as integers; complex numbers with a
    /// non-zero imaginary part become `[re, im]` pairs.
    pub fn to_json(&self) -> serde_json::Value {
        self.json_with(ComplexJson::Pair)
    }

    /// JSON instance checked by schema validation: like [`Value::to_json`],
    /// but complex numbers are represented by their real part
    pub fn to_instance(&self) -> serde_json::Value {
        self.json_with(ComplexJson::RealPart)
    }

    fn json_with(&self, complex: ComplexJson) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => (*b).into(),
            Value::Integer(v) => (*v).into(),
            Value::Number(v) => real_to_json(*v),
            Value::String(s) => s.clone().into(),
            Value::Sequence(items) => items.iter().map(|v| v.json_with(complex)).collect(),
            Value::Tuple(items) => items.iter().map(|v| v.json_with(complex)).collect(),
            Value::Mapping(m) => serde_json::Value::Object(
                m.iter().map(|(k, v)| (k.clone(), v.json_with(complex))).collect(),
            ),
            Value::Scalar(s) => s.to_json(complex),
            Value::Array(a) => match a.as_scalar() {
                Some(s) => s.to_json(complex),
                None => a.outer().iter().map(|v| v.json_with(complex)).collect(),
            },
        }
    }

    /// Decode the value into a typed record
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_json())
    }

    /// Build a value from a serializable record
    pub fn encode<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(record).map(Value::from)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Value::Integer(v)
                } else if let Some(v) = n.as_u64() {
                    Value::Scalar(Scalar::U64(v))
                } else {
                    Value::Number(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Mapping(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<Complex64> for Value {
    fn from(v: Complex64) -> Self {
        Value::Scalar(Scalar::Complex64(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Mapping(map)
    }
}

impl<D: Dimension> From<Array<f64, D>> for Value {
    fn from(a: Array<f64, D>) -> Self {
        Value::Array(NdArray::Float(a.into_dyn()))
    }
}

impl<D: Dimension> From<Array<i64, D>> for Value {
    fn from(a: Array<i64, D>) -> Self {
        Value::Array(NdArray::Int(a.into_dyn()))
    }
}

impl<D: Dimension> From<Array<Complex64, D>> for Value {
    fn from(a: Array<Complex64, D>) -> Self {
        Value::Array(NdArray::Complex(a.into_dyn()))
    }
}
