//! Synthesize command implementation
//!
//! This module implements the `synthesize` command for generating a
//! synthetic dataset from scratch, without any input data.

use crate::adapters::csv::{read_headers, write_table};
use crate::config::{load_config, ShroudConfig};
use crate::core::synthesis::{validate_row_count, SyntheticDatasetGenerator, ValueDomain};
use clap::{ArgGroup, Args};
use std::path::Path;

/// Arguments for the synthesize command
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("schema").required(true).args(["columns", "like"])))]
pub struct SynthesizeArgs {
    /// Comma-separated column names for the generated dataset
    #[arg(long, value_name = "NAMES")]
    pub columns: Option<String>,

    /// Match the column layout of an existing CSV file
    #[arg(long, value_name = "PATH")]
    pub like: Option<String>,

    /// Number of rows to generate
    #[arg(short, long, value_name = "ROWS")]
    pub rows: Option<i64>,

    /// Override the random seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output CSV file
    #[arg(short, long, default_value = "synthetic.csv")]
    pub output: String,
}

impl SynthesizeArgs {
    /// Execute the synthesize command
    ///
    /// Unlike `anonymize`, this command does not require a configuration
    /// file; defaults are used when none is present.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting synthesize command");

        let config = if Path::new(config_path).exists() {
            load_config(config_path)?
        } else {
            ShroudConfig::default()
        };

        // Resolve the column list
        let columns: Vec<String> = if let Some(names) = &self.columns {
            names
                .split(',')
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect()
        } else if let Some(like_path) = &self.like {
            match read_headers(like_path) {
                Ok(headers) => headers,
                Err(e) => {
                    tracing::error!(error = %e, path = %like_path, "Failed to read schema file");
                    eprintln!("Failed to read schema file: {e}");
                    return Ok(4); // Input error exit code
                }
            }
        } else {
            // clap's ArgGroup guarantees one of the two is present
            Vec::new()
        };

        if columns.is_empty() {
            eprintln!("No column names given");
            return Ok(2); // Configuration error exit code
        }

        // Resolve and validate the row count
        let rows = match validate_row_count(self.rows.unwrap_or(config.synthesis.rows)) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("Invalid row count: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let seed = self.seed.or(config.pipeline.seed);
        let mut generator = match seed {
            Some(seed) => SyntheticDatasetGenerator::from_seed(seed),
            None => SyntheticDatasetGenerator::new(),
        };

        println!(
            "🎲 Generating {} rows across {} columns...",
            rows,
            columns.len()
        );
        println!();
        for column in &columns {
            println!("  {:25} {}", column, ValueDomain::for_column(column));
        }
        println!();

        let table = match generator.generate(&columns, rows) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, "Synthesis failed");
                eprintln!("Synthesis failed: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match write_table(&self.output, &table) {
            Ok(_) => {
                tracing::info!(rows, output = %self.output, "Synthetic dataset written");
                println!("✅ Synthetic data written: {}", self.output);
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, output = %self.output, "Failed to write output file");
                eprintln!("Failed to write output file: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}
