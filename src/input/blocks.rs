/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Writers for the tag-delimited OpenMX blocks
//!
//! Structured keywords are matched by exact name before any schema type is
//! considered. Each writer renders the complete block, tags included.

use super::errors::{Result, WriteError};
use super::format::{check_numbers, format_number, tag_block, CHARGE_PRECISION, NUMBER_PRECISION};
use crate::params::{AtomicSpecies, KPathSegment, SpeciesCoordinate, Value};

/// Renders one structured keyword
pub type BlockWriter = fn(&str, &Value) -> Result<String>;

/// Special-cased keywords and their writers, checked in order
pub const BLOCK_WRITERS: &[(&str, BlockWriter)] = &[
    ("ATOMS_SPECIESANDCOORDINATES", write_species_and_coordinates),
    ("ATOMS_UNITVECTORS", write_unit_vectors),
    ("DEFINITION_OF_ATOMIC_SPECIES", write_atomic_species),
    ("BAND_KPATH", write_band_kpath),
    ("BAND_KPATH_UNITCELL", write_kpath_unit_cell),
];

/// Writer registered for `keyword`, if it is a block keyword
pub fn block_writer(keyword: &str) -> Option<BlockWriter> {
    BLOCK_WRITERS
        .iter()
        .find(|(name, _)| *name == keyword)
        .map(|(_, writer)| *writer)
}

fn decode<T: serde::de::DeserializeOwned>(keyword: &str, value: &Value) -> Result<T> {
    check_numbers(keyword, value)?;
    value
        .decode()
        .map_err(|e| WriteError::invalid(keyword, e.to_string()))
}

fn write_species_and_coordinates(keyword: &str, value: &Value) -> Result<String> {
    let atoms: Vec<SpeciesCoordinate> = decode(keyword, value)?;
    let lines: Vec<String> = atoms
        .iter()
        .enumerate()
        .map(|(i, atom)| {
            let [x, y, z] = atom.coords;
            format!(
                "\t{} {} {x:.n$} {y:.n$} {z:.n$} {:.c$} {:.c$}",
                i + 1,
                atom.specie,
                atom.up_charge,
                atom.down_charge,
                n = NUMBER_PRECISION,
                c = CHARGE_PRECISION,
            )
        })
        .collect();
    Ok(tag_block("ATOMS.SPECIESANDCOORDINATES", &lines))
}

fn write_unit_vectors(keyword: &str, value: &Value) -> Result<String> {
    write_number_rows(keyword, value, "ATOMS.UNITVECTORS")
}

fn write_kpath_unit_cell(keyword: &str, value: &Value) -> Result<String> {
    write_number_rows(keyword, value, "BAND.KPATH.UNITCELL")
}

/// Two-dimensional numeric array, one tab-indented line per row
fn write_number_rows(keyword: &str, value: &Value, tag: &str) -> Result<String> {
    let rows = value
        .elements()
        .ok_or_else(|| WriteError::invalid(keyword, "expected a two-dimensional array"))?;
    let mut lines = Vec::with_capacity(rows.len());
    for row in &rows {
        let items = row
            .elements()
            .ok_or_else(|| WriteError::invalid(keyword, "expected each row to be an array"))?;
        let formatted = items
            .iter()
            .map(|item| format_number(keyword, item, NUMBER_PRECISION))
            .collect::<Result<Vec<_>>>()?;
        lines.push(format!("\t{}", formatted.join(" ")));
    }
    Ok(tag_block(tag, &lines))
}

fn write_atomic_species(keyword: &str, value: &Value) -> Result<String> {
    let species: AtomicSpecies = decode(keyword, value)?;
    let lines: Vec<String> = species
        .iter()
        .map(|(name, definition)| {
            format!("\t{} {} {}", name, definition.pao.specification(), definition.pseudo)
        })
        .collect();
    Ok(tag_block("DEFINITION.OF.ATOMIC.SPECIES", &lines))
}

/// `Band.kpath` lines: point count, start and end fractional coordinates,
/// then the two labels
fn write_band_kpath(keyword: &str, value: &Value) -> Result<String> {
    let segments: Vec<KPathSegment> = decode(keyword, value)?;
    let lines: Vec<String> = segments
        .iter()
        .map(|segment| {
            let [k1, k2, k3] = segment.start;
            let [l1, l2, l3] = segment.end;
            format!(
                "\t{} {k1:.n$} {k2:.n$} {k3:.n$} {l1:.n$} {l2:.n$} {l3:.n$} {} {}",
                segment.n_points,
                segment.start_label,
                segment.end_label,
                n = NUMBER_PRECISION,
            )
        })
        .collect();
    Ok(tag_block("BAND.KPATH", &lines))
}
