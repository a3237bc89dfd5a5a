/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Type compatibility predicates used during validation
//!
//! A [`TypeChecker`] maps every schema primitive type to a predicate over
//! [`Value`]. [`TypeChecker::json`] gives plain JSON semantics;
//! [`TypeChecker::numeric`] additionally accepts the fixed-width, complex
//! and `ndarray` representations that parameter values commonly arrive in.

use std::collections::HashMap;

use super::model::SchemaType;
use crate::params::value::integral;
use crate::params::{NdArray, Value};

/// Decides whether a value is an instance of one schema type
pub type TypePredicate = fn(&Value) -> bool;

/// Set of type predicates, one per schema primitive type
#[derive(Debug, Clone)]
pub struct TypeChecker {
    predicates: HashMap<SchemaType, TypePredicate>,
}

impl TypeChecker {
    /// Plain JSON type semantics
    pub fn json() -> Self {
        let mut predicates: HashMap<SchemaType, TypePredicate> = HashMap::new();
        predicates.insert(SchemaType::Null, is_json_null);
        predicates.insert(SchemaType::Boolean, is_json_boolean);
        predicates.insert(SchemaType::Integer, is_json_integer);
        predicates.insert(SchemaType::Number, is_json_number);
        predicates.insert(SchemaType::String, is_json_string);
        predicates.insert(SchemaType::Array, is_json_array);
        predicates.insert(SchemaType::Object, is_json_object);
        Self { predicates }
    }

    /// JSON semantics extended to numeric-library scalars and arrays
    pub fn numeric() -> Self {
        Self::json()
            .redefine(SchemaType::Integer, is_numeric_integer)
            .redefine(SchemaType::Number, is_numeric_number)
            .redefine(SchemaType::Array, is_numeric_array)
    }

    /// Replace (or add) the predicate of one type
    pub fn redefine(mut self, ty: SchemaType, predicate: TypePredicate) -> Self {
        self.predicates.insert(ty, predicate);
        self
    }

    /// Whether `value` is an instance of `ty`; `None` when `ty` has no predicate
    pub fn is_type(&self, value: &Value, ty: &SchemaType) -> Option<bool> {
        self.predicates.get(ty).map(|predicate| predicate(value))
    }
}

impl Default for TypeChecker {
    fn default() -> Self {
        Self::numeric()
    }
}

fn is_json_null(value: &Value) -> bool {
    matches!(value, Value::Null)
}

fn is_json_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

fn is_json_integer(value: &Value) -> bool {
    match value {
        Value::Integer(_) => true,
        Value::Number(v) => integral(*v).is_some(),
        _ => false,
    }
}

fn is_json_number(value: &Value) -> bool {
    matches!(value, Value::Integer(_) | Value::Number(_))
}

fn is_json_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

fn is_json_array(value: &Value) -> bool {
    matches!(value, Value::Sequence(_))
}

fn is_json_object(value: &Value) -> bool {
    matches!(value, Value::Mapping(_))
}

fn is_numeric_integer(value: &Value) -> bool {
    if is_json_integer(value) {
        return true;
    }
    match value {
        Value::Scalar(s) => s.is_integer(),
        Value::Array(a @ NdArray::Int(_)) => a.ndim() == 0,
        _ => false,
    }
}

fn is_numeric_number(value: &Value) -> bool {
    if is_json_number(value) {
        return true;
    }
    match value {
        Value::Scalar(_) => true,
        Value::Array(a) => a.ndim() == 0,
        _ => false,
    }
}

fn is_numeric_array(value: &Value) -> bool {
    match value {
        Value::Sequence(_) | Value::Tuple(_) => true,
        Value::Array(a) => a.ndim() > 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Scalar;
    use ndarray::{arr0, array};
    use num_complex::Complex64;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Integer(3), true)]
    #[case(Value::Number(3.0), true)]
    #[case(Value::Number(3.5), false)]
    #[case(Value::Number(1e40), false)]
    #[case(Value::Scalar(Scalar::I16(3)), true)]
    #[case(Value::Scalar(Scalar::I32(3)), true)]
    #[case(Value::Scalar(Scalar::U64(3)), true)]
    #[case(Value::Scalar(Scalar::F64(3.0)), false)]
    #[case(Value::from(arr0(3_i64)), true)]
    #[case(Value::Bool(true), false)]
    fn test_numeric_integer(#[case] value: Value, #[case] expected: bool) {
        let checker = TypeChecker::numeric();
        assert_eq!(checker.is_type(&value, &SchemaType::Integer), Some(expected));
    }

    #[rstest]
    #[case(Value::Number(1e-6), true)]
    #[case(Value::Integer(2), true)]
    #[case(Value::Scalar(Scalar::F32(0.5)), true)]
    #[case(Value::Scalar(Scalar::F64(0.5)), true)]
    #[case(Value::Scalar(Scalar::I64(2)), true)]
    #[case(Value::from(Complex64::new(1.0, 2.0)), true)]
    #[case(Value::from(arr0(0.5)), true)]
    #[case(Value::from(array![0.5, 1.5]), false)]
    #[case(Value::from("0.5"), false)]
    fn test_numeric_number(#[case] value: Value, #[case] expected: bool) {
        let checker = TypeChecker::numeric();
        assert_eq!(checker.is_type(&value, &SchemaType::Number), Some(expected));
    }

    #[rstest]
    #[case(Value::from(vec![1_i64, 2, 3]), true)]
    #[case(Value::from([1.0, 2.0, 3.0]), true)]
    #[case(Value::from(array![[1.0, 0.0], [0.0, 1.0]]), true)]
    #[case(Value::from(arr0(1.0)), false)]
    #[case(Value::from("abc"), false)]
    fn test_numeric_array(#[case] value: Value, #[case] expected: bool) {
        let checker = TypeChecker::numeric();
        assert_eq!(checker.is_type(&value, &SchemaType::Array), Some(expected));
    }

    #[test]
    fn test_json_checker_rejects_numeric_library_values() {
        let checker = TypeChecker::json();
        let float = Value::Scalar(Scalar::F64(0.5));
        assert_eq!(checker.is_type(&float, &SchemaType::Number), Some(false));
        assert_eq!(checker.is_type(&Value::from([1_i64, 2]), &SchemaType::Array), Some(false));
        assert_eq!(
            checker.is_type(&Value::from(array![1.0, 2.0]), &SchemaType::Array),
            Some(false)
        );
    }

    #[test]
    fn test_unknown_type_has_no_predicate() {
        let checker = TypeChecker::numeric();
        let ty = SchemaType::from("matrix");
        assert_eq!(checker.is_type(&Value::Integer(1), &ty), None);
    }

    #[test]
    fn test_redefine_replaces_predicate() {
        fn never(_: &Value) -> bool {
            false
        }
        let checker = TypeChecker::json().redefine(SchemaType::String, never);
        assert_eq!(checker.is_type(&Value::from("x"), &SchemaType::String), Some(false));
    }
}
