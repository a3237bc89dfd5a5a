/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use ndarray::{arr0, array};
use num_complex::Complex64;
use openmx_input::params::{Scalar, Value};
use openmx_input::schema::{TypeChecker, Validator};
use openmx_input::{
    validate, write_input, Parameters, Schema, SchemaError, SchemaStore, ValidationError, WriteError,
};
use rstest::rstest;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

fn openmx_schema() -> Schema {
    SchemaStore::new(data_dir()).load_schema("3.9").unwrap()
}

#[test]
fn test_load_stored_schema() {
    let schema = openmx_schema();
    assert_eq!(schema.title.as_deref(), Some("OpenMX 3.9 input parameters"));
    assert!(schema.property("ATOMS_SPECIESANDCOORDINATES").is_some());
}

#[test]
fn test_unresolved_schema_version() {
    let result = SchemaStore::new(data_dir()).load_schema("3.7");
    assert!(matches!(result, Err(SchemaError::UnresolvedSchema { .. })));
}

#[rstest]
#[case("SCF_CRITERION", Value::Scalar(Scalar::F64(1e-6)))]
#[case("SCF_CRITERION", Value::Scalar(Scalar::F32(1e-6)))]
#[case("SCF_CRITERION", Value::from(arr0(1e-6)))]
#[case("SCF_ENERGYCUTOFF", Value::Scalar(Scalar::I32(200)))]
#[case("SCF_ENERGYCUTOFF", Value::from(Complex64::new(200.0, 0.0)))]
#[case("SCF_MAXITER", Value::Scalar(Scalar::I64(100)))]
#[case("SCF_MAXITER", Value::Scalar(Scalar::I16(100)))]
#[case("SCF_MAXITER", Value::Number(100.0))]
#[case("SCF_KGRID", Value::from(array![4_i64, 4, 4]))]
#[case("SCF_KGRID", Value::from([4_i64, 4, 4]))]
fn test_numeric_library_values_validate(#[case] keyword: &str, #[case] value: Value) {
    let schema = openmx_schema();
    let params = Parameters::new().with(keyword, value);
    assert!(validate(&schema, &params).is_ok());
}

#[rstest]
#[case("SCF_CRITERION", Value::from("1e-6"), "number", "string")]
#[case("SCF_MAXITER", Value::Number(10.5), "integer", "number")]
#[case("SCF_MAXITER", Value::Scalar(Scalar::F64(10.0)), "integer", "float64")]
#[case("SCF_RESTART", Value::Integer(1), "boolean", "integer")]
#[case("SYSTEM_NAME", Value::Bool(true), "string", "boolean")]
fn test_type_mismatch_names_keyword_and_types(
    #[case] keyword: &str,
    #[case] value: Value,
    #[case] expected: &str,
    #[case] actual: &str,
) {
    let schema = openmx_schema();
    let params = Parameters::new().with(keyword, value);
    assert_eq!(
        validate(&schema, &params),
        Err(ValidationError::TypeMismatch {
            keyword: keyword.to_string(),
            path: String::new(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    );
}

#[test]
fn test_kgrid_shape_is_checked() {
    let schema = openmx_schema();
    let params = Parameters::new().with("SCF_KGRID", array![4_i64, 4]);
    match validate(&schema, &params).unwrap_err() {
        ValidationError::ConstraintViolation {
            keyword,
            path,
            constraint,
            ..
        } => {
            assert_eq!(keyword, "SCF_KGRID");
            assert!(path.is_empty());
            assert_eq!(constraint, "minItems");
        }
        other => panic!("expected a minItems violation, got {:?}", other),
    }
}

#[test]
fn test_unit_cell_row_shape_is_checked() {
    let schema = openmx_schema();
    let params = Parameters::new().with("ATOMS_UNITVECTORS", array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
    let err = validate(&schema, &params).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::ConstraintViolation { ref path, ref constraint, .. }
            if path == "/0" && constraint == "minItems"
    ));
}

#[test]
fn test_species_orbital_configuration_is_checked() {
    let schema = openmx_schema();
    let params = Parameters::from_json(serde_json::json!({
        "DEFINITION_OF_ATOMIC_SPECIES": {
            "H": {"pao": {"file_stem": "H6.0", "orbital_configuration": [2, 1]}, "pseudo": "H_PBE19"}
        }
    }))
    .unwrap();
    let err = validate(&schema, &params).unwrap_err();
    assert_eq!(err.keyword(), "DEFINITION_OF_ATOMIC_SPECIES");
    assert!(err.to_string().starts_with("DEFINITION_OF_ATOMIC_SPECIES/H/pao/orbital_configuration"));
}

#[test]
fn test_enumerated_values() {
    let schema = openmx_schema();
    let ok = Parameters::new().with("SCF_EIGENVALUESOLVER", "Band");
    assert!(validate(&schema, &ok).is_ok());

    let bad = Parameters::new().with("SCF_EIGENVALUESOLVER", "Dense");
    assert!(matches!(
        validate(&schema, &bad),
        Err(ValidationError::ConstraintViolation { ref constraint, .. }) if constraint == "enum"
    ));
}

#[test]
fn test_keywords_outside_schema_are_rejected() {
    let schema = openmx_schema();
    let params = Parameters::new().with("SCF_UNKNOWN", 1);
    assert!(matches!(
        validate(&schema, &params),
        Err(ValidationError::UnexpectedKeyword { .. })
    ));
}

#[test]
fn test_plain_json_checker() {
    let schema = openmx_schema();
    let params = Parameters::new().with("SCF_CRITERION", Value::Scalar(Scalar::F64(1e-6)));
    let validator = Validator::with_type_checker(&schema, TypeChecker::json()).unwrap();
    assert!(validator.validate(&params).is_err());
    assert!(Validator::new(&schema).unwrap().validate(&params).is_ok());
}

#[test]
fn test_out_of_range_integral_float() {
    let schema = openmx_schema();
    let params = Parameters::new().with("SCF_MAXITER", 1e40);
    assert!(matches!(
        validate(&schema, &params),
        Err(ValidationError::TypeMismatch { .. })
    ));
    assert!(matches!(
        write_input(&params, &schema),
        Err(WriteError::InvalidValue { .. })
    ));
}

#[test]
fn test_integral_float_orbital_counts_validate_and_write() {
    let schema = openmx_schema();
    let params = Parameters::from_json(serde_json::json!({
        "DEFINITION_OF_ATOMIC_SPECIES": {
            "H": {"pao": {"file_stem": "H6.0", "orbital_configuration": [2.0, 1.0, 0.0, 0.0]}, "pseudo": "H_PBE19"}
        },
        "BAND_KPATH": [
            {"n_points": 10.0, "start": [0, 0, 0], "end": [0.5, 0, 0], "start_label": "G", "end_label": "X"}
        ]
    }))
    .unwrap();

    validate(&schema, &params).unwrap();
    let content = write_input(&params, &schema).unwrap();
    assert!(content.contains("\tH H6.0-s2p1 H_PBE19\n"));
    assert!(content.contains("\t10 0.000000000000 0.000000000000 0.000000000000 0.500000000000"));
}
