//! Audit logger for anonymization runs

use crate::domain::{Result, ShroudError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct AuditLogEntry {
    timestamp: String,
    run_id: String,
    k: usize,
    rows: usize,
    risky_rows: usize,
    columns: Vec<AuditColumn>,
}

/// Per-column audit record (with hashed originals)
#[derive(Debug, Serialize)]
struct AuditColumn {
    column: String,
    method: String,
    cells_redacted: usize,
    /// SHA-256 hashes of overwritten values (never log plaintext)
    value_hashes: Vec<String>,
}

/// One redacted column as handed to the audit trail
#[derive(Debug, Clone)]
pub struct RedactedColumn {
    /// Column name
    pub column: String,
    /// Method applied (suppression, generalization, synthetic)
    pub method: String,
    /// Original values that were overwritten, in row order
    pub original_values: Vec<String>,
}

/// Everything the audit trail records about one run
#[derive(Debug, Clone)]
pub struct RunRecord {
    /// Run id shared with the run report
    pub run_id: String,
    /// When the run started
    pub timestamp: DateTime<Utc>,
    /// Group-size threshold the classification used
    pub k: usize,
    /// Rows in the processed table
    pub rows: usize,
    /// Rows flagged as risky
    pub risky_rows: usize,
    /// Redacted columns with their overwritten originals
    pub columns: Vec<RedactedColumn>,
}

/// Audit logger for anonymization runs
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            // Ensure parent directory exists
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ShroudError::Io(format!(
                        "failed to create audit log directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Log a completed run
    pub fn log_run(&self, record: &RunRecord) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let entry = AuditLogEntry {
            timestamp: record.timestamp.to_rfc3339(),
            run_id: record.run_id.clone(),
            k: record.k,
            rows: record.rows,
            risky_rows: record.risky_rows,
            columns: record
                .columns
                .iter()
                .map(|c| self.create_audit_column(c))
                .collect(),
        };

        self.write_entry(&entry)
    }

    /// Create a per-column entry with hashed original values
    fn create_audit_column(&self, column: &RedactedColumn) -> AuditColumn {
        AuditColumn {
            column: column.column.clone(),
            method: column.method.clone(),
            cells_redacted: column.original_values.len(),
            value_hashes: column
                .original_values
                .iter()
                .map(|v| self.hash_value(v))
                .collect(),
        }
    }

    /// Hash an original value using SHA-256
    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());
        let result = hasher.finalize();
        format!("{result:x}")
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &AuditLogEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| {
                ShroudError::Io(format!(
                    "failed to open audit log {}: {e}",
                    self.log_path.display()
                ))
            })?;

        if self.json_format {
            let json_line = serde_json::to_string(entry)?;
            writeln!(file, "{json_line}")
                .map_err(|e| ShroudError::Io(format!("failed to write audit entry: {e}")))?;
        } else {
            // Plain text format
            writeln!(
                file,
                "[{}] Run: {} | Rows: {} | Risky: {} | Redacted columns: {}",
                entry.timestamp,
                entry.run_id,
                entry.rows,
                entry.risky_rows,
                entry.columns.len()
            )
            .map_err(|e| ShroudError::Io(format!("failed to write audit entry: {e}")))?;
        }

        Ok(())
    }
}
