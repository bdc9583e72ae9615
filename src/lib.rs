// Shroud - Tabular Data Anonymization Tool
// Copyright (c) 2025 Shroud Contributors
// Licensed under the MIT License

//! # Shroud - Tabular Data Anonymization
//!
//! Shroud is a command-line tool and library for anonymizing tabular data.
//! It injects Laplace noise into numeric columns, finds rows whose
//! combination of string values is rare enough to re-identify someone, and
//! redacts those rows by suppression, generalization, or synthetic
//! replacement. It can also generate fully synthetic datasets from nothing
//! but a list of column names.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Noise injection** with per-column epsilon (scale is value range / epsilon)
//! - **Risk classification** via k-anonymity over string columns
//! - **Redaction** of risky rows (suppression, generalization, synthetic replacement)
//! - **Synthesis** of artificial datasets from column-name heuristics
//! - **Auditing** runs with SHA-256 value hashes, never plaintext
//!
//! ## Architecture
//!
//! Shroud follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (noise, risk, redaction, synthesis, pipeline)
//! - [`adapters`] - File format integrations (CSV)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shroud::adapters::csv::{read_table, write_table};
//! use shroud::config::load_config;
//! use shroud::core::pipeline::AnonymizationPipeline;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("shroud.toml")?;
//!
//!     // Read the input, parsing configured noise columns as numbers
//!     let numeric: Vec<String> = config
//!         .pipeline
//!         .numeric
//!         .iter()
//!         .map(|rule| rule.column.clone())
//!         .collect();
//!     let table = read_table("data.csv", &numeric)?;
//!
//!     // Run the pipeline
//!     let mut pipeline = AnonymizationPipeline::new(config.pipeline, false)?;
//!     let (anonymized, report) = pipeline.run_with_report(&table)?;
//!
//!     println!("{}", report.format_console());
//!     write_table("anonymized.csv", &anonymized)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! ### Synthetic Datasets
//!
//! Column names choose the generated value domain: a name containing
//! `name` gets person names, `city` gets city names, `email` gets email
//! addresses, and anything else gets numbers.
//!
//! ```rust
//! use shroud::core::synthesis::SyntheticDatasetGenerator;
//!
//! let mut generator = SyntheticDatasetGenerator::from_seed(42);
//! let table = generator
//!     .generate(&["name".to_string(), "email".to_string()], 10)
//!     .unwrap();
//! assert_eq!(table.row_count(), 10);
//! ```
//!
//! ### Reproducible Runs
//!
//! A configured seed makes every run deterministic: noise draws and
//! synthetic replacement values come from independent streams derived
//! from it, so adding a redaction rule never shifts the noise.
//!
//! ## Error Handling
//!
//! Shroud uses the [`domain::ShroudError`] type for all errors:
//!
//! ```rust,no_run
//! use shroud::domain::ShroudError;
//!
//! fn example() -> Result<(), ShroudError> {
//!     // Errors are automatically converted using the ? operator
//!     let _config = shroud::config::load_config("shroud.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Shroud uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting run");
//! warn!(column = "income", "Zero value range, no noise added");
//! error!(error = "column missing", "Run failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
