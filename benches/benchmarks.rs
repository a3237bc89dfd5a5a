/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use openmx_input::{validate, write_input, Parameters, SchemaStore};
use serde_json::json;
use std::path::PathBuf;

fn supercell_parameters(atoms: usize) -> Parameters {
    let coordinates: Vec<_> = (0..atoms)
        .map(|i| {
            let x = (i % 10) as f64 * 0.25;
            let y = ((i / 10) % 10) as f64 * 0.25;
            let z = (i / 100) as f64 * 0.25;
            json!({"specie": "Si", "coords": [x, y, z], "up_charge": 2.0, "down_charge": 2.0})
        })
        .collect();

    let mut parameters = Parameters::from_json(json!({
        "SYSTEM_NAME": "si-supercell",
        "SPECIES_NUMBER": 1,
        "DEFINITION_OF_ATOMIC_SPECIES": {
            "Si": {"pao": {"file_stem": "Si7.0", "orbital_configuration": [2, 2, 1, 0]}, "pseudo": "Si_PBE19"}
        },
        "ATOMS_NUMBER": atoms,
        "ATOMS_SPECIESANDCOORDINATES_UNIT": "FRAC",
        "ATOMS_SPECIESANDCOORDINATES": coordinates,
        "SCF_KGRID": [4, 4, 4],
        "SCF_CRITERION": 1e-6
    }))
    .unwrap();
    parameters.insert("ATOMS_UNITVECTORS", Array2::<f64>::eye(3) * 27.15);
    parameters
}

fn input_writer_benchmark(c: &mut Criterion) {
    let data_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data");
    let schema = SchemaStore::new(data_dir).load_schema("3.9").unwrap();
    let parameters = supercell_parameters(1000);

    let mut group = c.benchmark_group("Input Writer");

    group.bench_function("validate_1000_atoms", |b| {
        b.iter(|| validate(black_box(&schema), black_box(&parameters)))
    });

    group.bench_function("write_1000_atoms", |b| {
        b.iter(|| write_input(black_box(&parameters), black_box(&schema)))
    });

    group.finish();
}

criterion_group!(benches, input_writer_benchmark);
criterion_main!(benches);
