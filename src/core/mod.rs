//! Core anonymization logic for Shroud.
//!
//! This module contains the anonymization primitives and the pipeline
//! that orchestrates them.
//!
//! # Modules
//!
//! - [`noise`] - Laplace noise injection for numeric columns
//! - [`risk`] - k-anonymity risk classification over quasi-identifiers
//! - [`redaction`] - Redaction strategies for flagged string values
//! - [`synthesis`] - Synthetic value providers and dataset generation
//! - [`pipeline`] - The run orchestrator and its report
//! - [`audit`] - Hashed audit trail of completed runs
//!
//! # Anonymization Workflow
//!
//! The typical run:
//!
//! 1. **Validate**: Check every configured column against the table
//! 2. **Noise**: Add Laplace noise to each configured numeric column
//! 3. **Classify**: Flag rows whose quasi-identifier group is smaller than k
//! 4. **Redact**: Overwrite flagged values in each configured string column
//! 5. **Audit** (optional): Append a hashed record of the run
//! 6. **Report**: Summarize what changed
//!
//! # Example
//!
//! ```rust,no_run
//! use shroud::config::load_config;
//! use shroud::core::pipeline::AnonymizationPipeline;
//! use shroud::domain::Table;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Load configuration
//! let config = load_config("shroud.toml")?;
//!
//! // Create pipeline
//! let mut pipeline = AnonymizationPipeline::new(config.pipeline, config.application.dry_run)?;
//!
//! // Anonymize a table
//! let table = Table::builder()
//!     .numeric("income", vec![52_000.0, 61_500.0])
//!     .build()?;
//! let (anonymized, report) = pipeline.run_with_report(&table)?;
//!
//! println!("Rows: {}", report.rows);
//! println!("Risky: {}", report.risky_rows);
//! println!("Redacted: {}", report.total_cells_redacted());
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod noise;
pub mod pipeline;
pub mod redaction;
pub mod risk;
pub mod synthesis;
