/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use clap::Parser;
use openmx_input::cli::{run, Cli};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn data_dir() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .display()
        .to_string()
}

fn run_cli(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_write_to_stdout() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("params.json");
    fs::write(&params, r#"{"SYSTEM_NAME": "si", "SCF_KGRID": [4, 4, 4], "SCF_RESTART": true}"#).unwrap();

    let data_dir = data_dir();
    let output = run_cli(&[
        "openmx-input",
        "--data-dir",
        &data_dir,
        "write",
        params.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(output, "SYSTEM.NAME si\nSCF.KGRID 4 4 4\nSCF.RESTART on\n");
}

#[test]
fn test_write_to_file() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("params.json");
    let target = dir.path().join("si.dat");
    fs::write(&params, r#"{"SCF_MAXITER": 40}"#).unwrap();

    let data_dir = data_dir();
    let output = run_cli(&[
        "openmx-input",
        "--data-dir",
        &data_dir,
        "write",
        params.to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ])
    .unwrap();
    assert!(output.is_empty());
    assert_eq!(fs::read_to_string(&target).unwrap(), "SCF.MAXITER 40\n");
}

#[test]
fn test_validate_reports_failure() {
    let dir = tempdir().unwrap();
    let params = dir.path().join("params.json");
    fs::write(&params, r#"{"SCF_MAXITER": "forty"}"#).unwrap();

    let data_dir = data_dir();
    let err = run_cli(&[
        "openmx-input",
        "--data-dir",
        &data_dir,
        "validate",
        params.to_str().unwrap(),
    ])
    .unwrap_err();
    assert!(format!("{:#}", err).contains("SCF_MAXITER: expected integer, found string"));
}

#[test]
fn test_recommend_structure() {
    let dir = tempdir().unwrap();
    let structure = dir.path().join("structure.json");
    fs::write(&structure, r#"{"species": [{"symbol": "O"}, {"symbol": "H"}, {"symbol": "H"}]}"#).unwrap();

    let data_dir = data_dir();
    let output = run_cli(&[
        "openmx-input",
        "--data-dir",
        &data_dir,
        "recommend-structure",
        structure.to_str().unwrap(),
    ])
    .unwrap();
    let records: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(records["O"]["pseudo"], "O_PBE19");
    assert_eq!(records["H"]["pseudo"], "H_PBE19");
}

#[test]
fn test_recommend_missing_table() {
    let data_dir = data_dir();
    let result = run_cli(&[
        "openmx-input",
        "--data-dir",
        &data_dir,
        "recommend",
        "H",
        "--hardness",
        "hard",
    ]);
    assert!(result.is_err());
}
