/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use openmx_input::recommend::{
    table_id, Hardness, Precision, RecommendError, RecommendationStore, SpeciesList, Specie,
    Structure,
};
use openmx_input::StorageConfig;
use rstest::rstest;
use serde_json::json;
use std::path::PathBuf;

fn store() -> RecommendationStore {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    StorageConfig::default().with_data_dir(data_dir).recommendation_store()
}

#[rstest]
#[case("H", Precision::Standard, "H6.0", [2, 1, 0, 0])]
#[case("O", Precision::Standard, "O6.0", [2, 2, 1, 0])]
#[case("Fe", Precision::Standard, "Fe6.0S", [3, 2, 1, 0])]
#[case("H", Precision::Quick, "H6.0", [2, 0, 0, 0])]
#[case("Fe", Precision::Quick, "Fe6.0S", [2, 2, 1, 0])]
fn test_element_recommendation(
    #[case] element: &str,
    #[case] precision: Precision,
    #[case] file_stem: &str,
    #[case] orbitals: [u32; 4],
) {
    let record = store()
        .element_recommendation(element, "19", precision, Hardness::Soft)
        .unwrap();
    assert_eq!(record["pao"]["file_stem"], json!(file_stem));
    assert_eq!(record["pao"]["orbital_configuration"], json!(orbitals));
}

#[test]
fn test_record_is_returned_unmodified() {
    let record = store()
        .element_recommendation("Si", "19", Precision::Standard, Hardness::Soft)
        .unwrap();
    assert_eq!(
        record,
        json!({"pao": {"file_stem": "Si7.0", "orbital_configuration": [2, 2, 1, 0]}, "pseudo": "Si_PBE19"})
    );
}

#[rstest]
#[case("19", Precision::Precise, Hardness::Soft)]
#[case("19", Precision::Standard, Hardness::Hard)]
#[case("13", Precision::Standard, Hardness::Soft)]
fn test_missing_table_is_unresolved(
    #[case] version: &str,
    #[case] precision: Precision,
    #[case] hardness: Hardness,
) {
    match store().element_recommendation("H", version, precision, hardness) {
        Err(RecommendError::UnresolvedTable { id, .. }) => {
            assert_eq!(id, table_id(version, precision, hardness))
        }
        other => panic!("expected UnresolvedTable, got {:?}", other),
    }
}

#[test]
fn test_structure_matches_element_lookups() {
    let store = store();
    let structure = SpeciesList::from_symbols(["Fe", "O", "Fe", "O", "H"]);
    let records = store
        .structure_recommendations(&structure, "19", Precision::Standard, Hardness::Soft)
        .unwrap();

    assert_eq!(records.len(), 3);
    for (symbol, record) in &records {
        let single = store
            .element_recommendation(symbol, "19", Precision::Standard, Hardness::Soft)
            .unwrap();
        assert_eq!(record, &single);
    }
}

/// A caller-side structure type
struct Slab {
    layers: Vec<String>,
}

impl Structure for Slab {
    type Specie = String;

    fn species(&self) -> &[String] {
        &self.layers
    }
}

#[test]
fn test_structure_trait_is_polymorphic() {
    let slab = Slab {
        layers: vec!["Si".to_string(), "O".to_string(), "Si".to_string()],
    };
    assert_eq!(slab.species()[1].symbol(), "O");

    let records = store()
        .structure_recommendations(&slab, "19", Precision::Standard, Hardness::Soft)
        .unwrap();
    let symbols: Vec<&str> = records.keys().map(String::as_str).collect();
    assert_eq!(symbols, vec!["Si", "O"]);
}

#[test]
fn test_structure_with_unknown_element() {
    let structure = SpeciesList::from_symbols(["Fe", "Og"]);
    let err = store()
        .structure_recommendations(&structure, "19", Precision::Quick, Hardness::Soft)
        .unwrap_err();
    assert!(matches!(err, RecommendError::UnknownElement { ref element, .. } if element == "Og"));
}
