//! Main anonymization pipeline
//!
//! This module provides the core [`AnonymizationPipeline`] that orchestrates
//! noise injection, risk classification, redaction, and audit logging over
//! a tabular dataset.
//!
//! # Architecture
//!
//! The pipeline coordinates four components:
//! - **NoiseInjector**: Adds Laplace noise to configured numeric columns
//! - **RiskClassifier**: Flags rows whose quasi-identifier group is smaller than k
//! - **Redactors**: Overwrite flagged values in configured string columns
//! - **Audit Logger**: Records each run with hashed original values
//!
//! The configured string columns double as the quasi-identifier set, so
//! every string column is redacted against the same risk flags from a
//! single classification pass.
//!
//! # Examples
//!
//! ```
//! use shroud::config::PipelineConfig;
//! use shroud::core::pipeline::AnonymizationPipeline;
//! use shroud::domain::Table;
//!
//! # fn example() -> shroud::domain::Result<()> {
//! let table = Table::builder()
//!     .numeric("income", vec![52_000.0, 61_500.0])
//!     .text("city", vec!["Lisbon".to_string(), "Oslo".to_string()])
//!     .build()?;
//!
//! let config = PipelineConfig::default();
//! let mut pipeline = AnonymizationPipeline::new(config, false)?;
//! let anonymized = pipeline.run(&table)?;
//! assert_eq!(anonymized.row_count(), table.row_count());
//! # Ok(())
//! # }
//! ```

pub mod report;

pub use report::{NoiseSummary, RedactionSummary, RunReport};

use crate::config::schema::PipelineConfig;
use crate::core::audit::{AuditLogger, RedactedColumn, RunRecord};
use crate::core::noise::NoiseInjector;
use crate::core::redaction::{
    redact_flagged, Generalization, RedactionMethod, Redactor, Suppression, SyntheticReplacement,
};
use crate::core::risk::RiskClassifier;
use crate::core::synthesis::{FakerProvider, SyntheticProvider};
use crate::domain::{Result, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Stream separator for the replacement provider's RNG. Synthesis draws
/// from its own stream, so adding a redaction column never shifts the
/// noise values of a seeded run.
const SYNTHESIS_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Main anonymization pipeline
///
/// Orchestrates noise injection, risk classification, redaction, and
/// audit logging for one configured set of columns. The pipeline owns
/// its RNG state, so consecutive runs on the same instance draw fresh
/// noise; build a new instance to replay a seed.
pub struct AnonymizationPipeline {
    config: PipelineConfig,
    dry_run: bool,
    noise_rng: StdRng,
    provider: Box<dyn SyntheticProvider>,
    audit_logger: Option<AuditLogger>,
}

impl std::fmt::Debug for AnonymizationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnonymizationPipeline")
            .field("config", &self.config)
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl AnonymizationPipeline {
    /// Create a new anonymization pipeline
    ///
    /// Initializes the pipeline with the provided configuration, creating:
    /// - Seeded (or entropy-backed) RNGs for noise and synthetic replacement
    /// - Audit logger (if enabled in configuration)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration validation fails
    /// - Audit logger initialization fails
    pub fn new(config: PipelineConfig, dry_run: bool) -> Result<Self> {
        // Validate configuration
        config.validate()?;

        let noise_rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let provider: Box<dyn SyntheticProvider> = match config.seed {
            Some(seed) => Box::new(FakerProvider::from_seed(seed ^ SYNTHESIS_STREAM)),
            None => Box::new(FakerProvider::new()),
        };

        // Create audit logger if enabled
        let audit_logger = if config.audit.enabled {
            Some(AuditLogger::new(
                config.audit.log_path.clone(),
                config.audit.json_format,
                true,
            )?)
        } else {
            None
        };

        Ok(Self {
            config,
            dry_run,
            noise_rng,
            provider,
            audit_logger,
        })
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Anonymize a table
    ///
    /// # Behavior
    ///
    /// 1. Validates every configured column against the table (existence
    ///    and kind) before touching anything
    /// 2. Injects Laplace noise into each configured numeric column
    /// 3. Classifies row risk once, with all configured string columns as
    ///    the quasi-identifier set
    /// 4. Redacts flagged rows in each configured string column
    ///
    /// The input table is never modified; the anonymized copy is
    /// returned. In dry-run mode the returned copy is unmodified and no
    /// audit entry is written.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured column is missing or has the
    /// wrong kind, or if audit logging fails. Errors are raised before
    /// any partial result is observable.
    pub fn run(&mut self, table: &Table) -> Result<Table> {
        self.run_with_report(table).map(|(output, _)| output)
    }

    /// Anonymize a table and describe what was done
    ///
    /// Same behavior as [`run`](Self::run), additionally returning a
    /// [`RunReport`] with per-column noise and redaction summaries. In
    /// dry-run mode the report describes what a live run would change.
    pub fn run_with_report(&mut self, table: &Table) -> Result<(Table, RunReport)> {
        let start = Instant::now();
        let mut report = RunReport::new(self.dry_run);
        report.rows = table.row_count();

        tracing::info!(
            rows = table.row_count(),
            k = self.config.k,
            dry_run = self.dry_run,
            "Starting anonymization run"
        );

        // Validate all referenced columns before any mutation
        self.check_columns(table)?;

        let mut output = table.clone();

        // Noise per configured numeric column
        for rule in &self.config.numeric {
            let injector = NoiseInjector::new(rule.epsilon)?;
            let values = table.numeric(&rule.column)?;
            let scale = injector.scale_for(values);

            if scale == 0.0 && !values.is_empty() {
                report.add_warning(format!(
                    "column '{}' has zero value range, no noise added",
                    rule.column
                ));
            }

            if !self.dry_run {
                let noised = injector.inject(values, &mut self.noise_rng);
                output.replace_numeric(&rule.column, noised)?;
            }

            report.add_noise(rule.column.as_str(), rule.epsilon, scale);
            tracing::debug!(
                column = %rule.column,
                epsilon = rule.epsilon,
                scale,
                "Injected noise"
            );
        }

        // One risk classification over all configured string columns
        let string_columns: Vec<String> =
            self.config.string.iter().map(|r| r.column.clone()).collect();
        let risk_flags = if string_columns.is_empty() {
            Vec::new()
        } else {
            let classifier = RiskClassifier::new(self.config.k as usize)?;
            classifier.classify(&output, &string_columns)?
        };
        report.risky_rows = risk_flags.iter().filter(|&&risky| risky).count();

        if !string_columns.is_empty() {
            tracing::info!(
                k = self.config.k,
                risky_rows = report.risky_rows,
                "Risk classification complete"
            );
        }

        // Redaction per configured string column, against the shared flags
        let mut audit_columns = Vec::new();
        for rule in &self.config.string {
            let method: RedactionMethod = rule.method.parse()?;
            let current = table.text(&rule.column)?;
            let flagged: Vec<String> = current
                .iter()
                .zip(&risk_flags)
                .filter(|&(_, &risky)| risky)
                .map(|(value, _)| value.clone())
                .collect();

            report.add_redaction(rule.column.as_str(), method.to_string(), flagged.len());

            if self.dry_run {
                continue;
            }

            let redacted = {
                let mut redactor: Box<dyn Redactor + '_> = match method {
                    RedactionMethod::Suppression => Box::new(Suppression::new()),
                    RedactionMethod::Generalization => Box::new(Generalization::new(rule.level)?),
                    RedactionMethod::Synthetic => Box::new(SyntheticReplacement::new(
                        &rule.column,
                        self.provider.as_mut(),
                    )),
                };
                redact_flagged(current, &risk_flags, redactor.as_mut())?
            };
            output.replace_text(&rule.column, redacted)?;

            tracing::debug!(
                column = %rule.column,
                method = %method,
                cells = flagged.len(),
                "Redacted column"
            );

            audit_columns.push(RedactedColumn {
                column: rule.column.clone(),
                method: method.to_string(),
                original_values: flagged,
            });
        }

        // Log to audit on live runs only
        if !self.dry_run {
            if let Some(ref logger) = self.audit_logger {
                logger.log_run(&RunRecord {
                    run_id: report.run_id.clone(),
                    timestamp: report.timestamp,
                    k: self.config.k as usize,
                    rows: report.rows,
                    risky_rows: report.risky_rows,
                    columns: audit_columns,
                })?;
            }
        }

        report.processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            run_id = %report.run_id,
            risky_rows = report.risky_rows,
            cells_redacted = report.total_cells_redacted(),
            elapsed_ms = report.processing_time_ms,
            "Anonymization run complete"
        );

        Ok((output, report))
    }

    /// Verify every configured column exists with the expected kind
    fn check_columns(&self, table: &Table) -> Result<()> {
        for rule in &self.config.numeric {
            table.numeric(&rule.column)?;
        }
        for rule in &self.config.string {
            table.text(&rule.column)?;
        }
        Ok(())
    }
}
