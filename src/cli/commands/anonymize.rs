//! Anonymize command implementation
//!
//! This module implements the `anonymize` command for running the full
//! anonymization pipeline over a CSV file.

use crate::adapters::csv::{read_table, write_table};
use crate::config::load_config;
use crate::core::pipeline::AnonymizationPipeline;
use clap::Args;
use std::path::Path;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input CSV file
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Output CSV file
    #[arg(short, long, default_value = "anonymized.csv")]
    pub output: String,

    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Dry run mode - report what would change without writing output
    #[arg(long)]
    pub dry_run: bool,

    /// Override the k-anonymity threshold
    #[arg(long, value_name = "K")]
    pub k: Option<i64>,

    /// Override the random seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the run report as JSON to this path
    #[arg(long, value_name = "PATH")]
    pub report: Option<String>,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting anonymize command");

        // Load configuration
        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(k) = self.k {
            tracing::info!(k, "Overriding k-anonymity threshold from CLI");
            config.pipeline.k = k;
        }

        if let Some(seed) = self.seed {
            tracing::info!(seed, "Overriding random seed from CLI");
            config.pipeline.seed = Some(seed);
        }

        // Apply dry-run flag from CLI
        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        // Validate configuration after overrides
        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        let dry_run = config.application.dry_run;

        // Dry run mode
        if dry_run {
            tracing::info!("Dry run mode enabled - no data will be written");
            println!("🔍 DRY RUN MODE - No data will be written");
            println!();
        }

        // Confirmation prompt (unless --yes or dry-run)
        if !self.yes && !dry_run {
            println!("Anonymization Configuration:");
            println!("  Input: {}", self.input);
            println!("  Output: {}", self.output);
            println!("  k-anonymity threshold: {}", config.pipeline.k);
            println!("  Numeric columns: {}", config.pipeline.numeric.len());
            println!("  String columns: {}", config.pipeline.string.len());
            println!();
            print!("Proceed with anonymization? [y/N]: ");
            use std::io::{self, Write};
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if !input.trim().eq_ignore_ascii_case("y") {
                println!("Anonymization cancelled.");
                return Ok(0);
            }
        }

        // Read the input table
        let numeric_columns: Vec<String> = config
            .pipeline
            .numeric
            .iter()
            .map(|rule| rule.column.clone())
            .collect();

        let table = match read_table(&self.input, &numeric_columns) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!(error = %e, input = %self.input, "Failed to read input file");
                eprintln!("Failed to read input file: {e}");
                return Ok(4); // Input error exit code
            }
        };

        tracing::info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "Input table loaded"
        );

        // Create the pipeline
        let mut pipeline = match AnonymizationPipeline::new(config.pipeline, dry_run) {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create anonymization pipeline");
                eprintln!("Failed to initialize pipeline: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Execute the run
        println!("🚀 Starting anonymization...");

        let (anonymized, report) = match pipeline.run_with_report(&table) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(error = %e, "Anonymization failed");
                eprintln!("Anonymization failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Display the run report
        println!("{}", report.format_console());

        // Write the report file if requested (allowed in dry-run, it
        // contains summary counts only)
        if let Some(report_path) = &self.report {
            match report.write_to_file(Path::new(report_path)) {
                Ok(_) => println!("✅ Report written: {report_path}"),
                Err(e) => {
                    eprintln!("Failed to write report: {e}");
                    return Ok(5); // Fatal error exit code
                }
            }
        }

        // Write the anonymized table
        if dry_run {
            println!("🔍 Dry run complete - output not written");
            return Ok(0);
        }

        match write_table(&self.output, &anonymized) {
            Ok(_) => {
                println!("✅ Anonymized data written: {}", self.output);
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
