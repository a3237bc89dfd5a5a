/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! `openmx-input` validates parameter files, writes OpenMX input files and
//! prints basis/pseudopotential recommendations.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::config::StorageConfig;
use crate::input::write_input;
use crate::params::Parameters;
use crate::recommend::{Hardness, Precision, SpeciesList};
use crate::schema::{validate, Schema};

#[derive(Parser, Debug)]
#[command(name = "openmx-input", version, about = "OpenMX input file generator")]
pub struct Cli {
    /// Directory holding `schema/` and `basis_pseudo/` (defaults to $OPENMX_INPUT_DATA_DIR or ./data)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate parameters and write an OpenMX input file
    Write(WriteArgs),
    /// Validate parameters against a schema
    Validate(ValidateArgs),
    /// Print the recommended basis and pseudopotential of an element
    Recommend(RecommendArgs),
    /// Print recommendations for every species of a structure
    RecommendStructure(RecommendStructureArgs),
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Parameter file (JSON object of keyword → value)
    pub parameters: PathBuf,

    /// Schema version
    #[arg(long)]
    pub schema_version: Option<String>,

    /// Output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip schema validation before writing
    #[arg(long)]
    pub no_validate: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Parameter file (JSON object of keyword → value)
    pub parameters: PathBuf,

    /// Schema version
    #[arg(long)]
    pub schema_version: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    /// Recommendation table version
    #[arg(long = "table-version")]
    pub version: Option<String>,

    /// Basis precision: quick, standard or precise
    #[arg(long)]
    pub precision: Option<Precision>,

    /// Pseudopotential hardness: soft or hard
    #[arg(long)]
    pub hardness: Option<Hardness>,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Element symbol, e.g. Fe
    pub element: String,

    #[command(flatten)]
    pub table: TableArgs,
}

#[derive(Args, Debug)]
pub struct RecommendStructureArgs {
    /// Structure file: {"species": [{"symbol": "Fe"}, ...]}
    pub structure: PathBuf,

    #[command(flatten)]
    pub table: TableArgs,
}

impl Cli {
    /// Storage configuration from the environment and global flags
    pub fn storage_config(&self) -> StorageConfig {
        let config = StorageConfig::from_env();
        match &self.data_dir {
            Some(dir) => config.with_data_dir(dir),
            None => config,
        }
    }
}

/// Run a parsed command, writing results to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let mut config = cli.storage_config();
    match &cli.command {
        Command::Write(args) => {
            if let Some(version) = &args.schema_version {
                config.schema_version = version.clone();
            }
            let parameters = read_parameters(&args.parameters)?;
            let schema = load_schema(&config)?;
            if !args.no_validate {
                validate(&schema, &parameters)
                    .with_context(|| format!("{} failed validation", args.parameters.display()))?;
            }
            let content = write_input(&parameters, &schema)?;
            match &args.output {
                Some(path) => {
                    fs::write(path, &content)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => out.write_all(content.as_bytes())?,
            }
        }
        Command::Validate(args) => {
            if let Some(version) = &args.schema_version {
                config.schema_version = version.clone();
            }
            let parameters = read_parameters(&args.parameters)?;
            let schema = load_schema(&config)?;
            validate(&schema, &parameters)
                .with_context(|| format!("{} failed validation", args.parameters.display()))?;
            writeln!(out, "ok")?;
        }
        Command::Recommend(args) => {
            apply_table_args(&mut config, &args.table);
            let record = config.recommendation_store().element_recommendation(
                &args.element,
                &config.table_version,
                config.precision,
                config.hardness,
            )?;
            writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        }
        Command::RecommendStructure(args) => {
            apply_table_args(&mut config, &args.table);
            let content = fs::read_to_string(&args.structure)
                .with_context(|| format!("failed to read {}", args.structure.display()))?;
            let structure: SpeciesList = serde_json::from_str(&content)
                .with_context(|| format!("{} is not a species list", args.structure.display()))?;
            let records = config.recommendation_store().structure_recommendations(
                &structure,
                &config.table_version,
                config.precision,
                config.hardness,
            )?;
            writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        }
    }
    Ok(())
}

fn apply_table_args(config: &mut StorageConfig, table: &TableArgs) {
    if let Some(version) = &table.version {
        config.table_version = version.clone();
    }
    if let Some(precision) = table.precision {
        config.precision = precision;
    }
    if let Some(hardness) = table.hardness {
        config.hardness = hardness;
    }
}

fn read_parameters(path: &Path) -> anyhow::Result<Parameters> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Parameters::from_json_str(&content)
        .with_context(|| format!("{} is not a JSON object of parameters", path.display()))
}

fn load_schema(config: &StorageConfig) -> anyhow::Result<Schema> {
    Ok(config.schema_store().load_schema(&config.schema_version)?)
}
