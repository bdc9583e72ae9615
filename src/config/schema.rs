//! Configuration schema types
//!
//! This module defines the configuration structure for Shroud.

use crate::core::redaction::RedactionMethod;
use crate::domain::{Result, ShroudError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Main Shroud configuration
///
/// This is the root configuration structure that maps to the TOML file.
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShroudConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Anonymization pipeline settings
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Synthetic dataset generation settings
    #[serde(default)]
    pub synthesis: SynthesisConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShroudConfig {
    /// Validates the configuration
    ///
    /// Validation is fail-fast: the first invalid value is returned and
    /// later sections are not inspected.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<()> {
        self.application.validate()?;
        self.pipeline.validate()?;
        self.synthesis.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (classify and report, but change nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(ShroudError::Configuration(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            )));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Anonymization pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// k-anonymity threshold: rows in groups smaller than this are risky
    ///
    /// Stored as i64 so out-of-range values reach validation instead of
    /// failing TOML deserialization.
    #[serde(default = "default_k")]
    pub k: i64,

    /// RNG seed for reproducible runs (noise and synthetic replacement)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Numeric columns to receive Laplace noise
    #[serde(default)]
    pub numeric: Vec<NumericRule>,

    /// String columns to redact (these also form the quasi-identifier set)
    #[serde(default)]
    pub string: Vec<StringRule>,

    /// Audit trail settings
    #[serde(default)]
    pub audit: AuditConfig,
}

impl PipelineConfig {
    /// Validates the pipeline section
    ///
    /// Also called by the pipeline constructor, so a hand-built config
    /// gets the same checks as a loaded one.
    pub fn validate(&self) -> Result<()> {
        if self.k < 1 {
            return Err(ShroudError::invalid_parameter(
                "pipeline.k",
                format!("must be >= 1, got {}", self.k),
            ));
        }

        let mut seen = HashSet::new();
        for rule in &self.numeric {
            rule.validate()?;
            if !seen.insert(rule.column.as_str()) {
                return Err(ShroudError::Configuration(format!(
                    "Column '{}' is configured more than once in [pipeline]",
                    rule.column
                )));
            }
        }
        for rule in &self.string {
            rule.validate()?;
            if !seen.insert(rule.column.as_str()) {
                return Err(ShroudError::Configuration(format!(
                    "Column '{}' is configured more than once in [pipeline]",
                    rule.column
                )));
            }
        }

        self.audit.validate()?;
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            k: default_k(),
            seed: None,
            numeric: Vec::new(),
            string: Vec::new(),
            audit: AuditConfig::default(),
        }
    }
}

/// Noise settings for one numeric column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericRule {
    /// Column name
    pub column: String,

    /// Privacy parameter: smaller epsilon means more noise
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl NumericRule {
    fn validate(&self) -> Result<()> {
        if self.column.trim().is_empty() {
            return Err(ShroudError::Configuration(
                "pipeline.numeric.column cannot be empty".to_string(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ShroudError::invalid_parameter(
                format!("epsilon for column '{}'", self.column),
                format!("must be a finite value > 0, got {}", self.epsilon),
            ));
        }
        Ok(())
    }
}

/// Redaction settings for one string column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StringRule {
    /// Column name
    pub column: String,

    /// Redaction method (suppression, generalization, synthetic)
    #[serde(default = "default_method")]
    pub method: String,

    /// Leading characters preserved by generalization
    #[serde(default = "default_level")]
    pub level: i64,
}

impl StringRule {
    fn validate(&self) -> Result<()> {
        if self.column.trim().is_empty() {
            return Err(ShroudError::Configuration(
                "pipeline.string.column cannot be empty".to_string(),
            ));
        }

        let method: RedactionMethod = self.method.parse()?;

        // The level only matters for generalization; validate what's active.
        if method == RedactionMethod::Generalization && self.level < 0 {
            return Err(ShroudError::invalid_parameter(
                format!("level for column '{}'", self.column),
                format!("must be >= 0, got {}", self.level),
            ));
        }

        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default)]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl AuditConfig {
    fn validate(&self) -> Result<()> {
        if self.enabled && self.log_path.as_os_str().is_empty() {
            return Err(ShroudError::Configuration(
                "pipeline.audit.log_path cannot be empty when audit is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_path: default_audit_log_path(),
            json_format: default_true(),
        }
    }
}

/// Synthetic dataset generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Rows to generate when not given on the command line
    #[serde(default = "default_synthesis_rows")]
    pub rows: i64,
}

impl SynthesisConfig {
    fn validate(&self) -> Result<()> {
        crate::core::synthesis::validate_row_count(self.rows)?;
        Ok(())
    }
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            rows: default_synthesis_rows(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub file_enabled: bool,

    /// Local log file directory
    #[serde(default = "default_file_path")]
    pub file_path: String,

    /// Log rotation strategy (daily or never)
    #[serde(default = "default_file_rotation")]
    pub file_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<()> {
        let valid_rotations = ["daily", "never"];
        if !valid_rotations.contains(&self.file_rotation.as_str()) {
            return Err(ShroudError::Configuration(format!(
                "Invalid logging.file_rotation '{}'. Must be one of: {}",
                self.file_rotation,
                valid_rotations.join(", ")
            )));
        }

        if self.file_enabled && self.file_path.is_empty() {
            return Err(ShroudError::Configuration(
                "logging.file_path cannot be empty when file logging is enabled".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file_enabled: false,
            file_path: default_file_path(),
            file_rotation: default_file_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_k() -> i64 {
    2
}

fn default_epsilon() -> f64 {
    1.0
}

fn default_method() -> String {
    "suppression".to_string()
}

fn default_level() -> i64 {
    2
}

fn default_true() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/shroud_runs.log")
}

fn default_synthesis_rows() -> i64 {
    crate::core::synthesis::DEFAULT_SYNTHETIC_ROWS as i64
}

fn default_file_path() -> String {
    "./logs".to_string()
}

fn default_file_rotation() -> String {
    "daily".to_string()
}
