//! Run reporting for the anonymization pipeline
//!
//! This module provides formatted reports describing a pipeline run: how
//! many rows were at risk, what noise was injected where, and which
//! columns were redacted how. The same report shape serves live runs and
//! dry runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Report describing a single pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique id of this run
    pub run_id: String,

    /// When the run started
    pub timestamp: DateTime<Utc>,

    /// Whether this was a dry run (no values changed)
    pub dry_run: bool,

    /// Rows in the processed table
    pub rows: usize,

    /// Rows flagged as re-identifiable
    pub risky_rows: usize,

    /// Per-column noise summaries
    pub noise: Vec<NoiseSummary>,

    /// Per-column redaction summaries
    pub redaction: Vec<RedactionSummary>,

    /// Warnings raised during the run
    pub warnings: Vec<String>,

    /// Wall-clock processing time (ms)
    pub processing_time_ms: u64,
}

/// Noise applied to one numeric column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoiseSummary {
    /// Column the noise was applied to
    pub column: String,

    /// Privacy parameter used for the column
    pub epsilon: f64,

    /// Laplace scale derived from the column's value range
    pub scale: f64,
}

/// Redaction applied to one string column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionSummary {
    /// Column the redaction was applied to
    pub column: String,

    /// Method name (suppression, generalization, synthetic)
    pub method: String,

    /// Number of cells overwritten (flagged rows)
    pub cells_redacted: usize,
}

impl RunReport {
    /// Create a new empty report with a fresh run id
    pub fn new(dry_run: bool) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            dry_run,
            rows: 0,
            risky_rows: 0,
            noise: Vec::new(),
            redaction: Vec::new(),
            warnings: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Record noise injection on a column
    pub fn add_noise(&mut self, column: impl Into<String>, epsilon: f64, scale: f64) {
        self.noise.push(NoiseSummary {
            column: column.into(),
            epsilon,
            scale,
        });
    }

    /// Record redaction on a column
    pub fn add_redaction(
        &mut self,
        column: impl Into<String>,
        method: impl Into<String>,
        cells_redacted: usize,
    ) {
        self.redaction.push(RedactionSummary {
            column: column.into(),
            method: method.into(),
            cells_redacted,
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Total cells overwritten across all redacted columns
    pub fn total_cells_redacted(&self) -> usize {
        self.redaction.iter().map(|r| r.cells_redacted).sum()
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        if self.dry_run {
            output.push_str("                ANONYMIZATION DRY-RUN REPORT                   \n");
        } else {
            output.push_str("                  ANONYMIZATION RUN REPORT                     \n");
        }
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        // Summary statistics
        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Run ID:            {}\n", self.run_id));
        output.push_str(&format!(
            "  Mode:              {}\n",
            if self.dry_run { "dry-run" } else { "live" }
        ));
        output.push_str(&format!("  Rows Processed:    {}\n", self.rows));
        output.push_str(&format!("  Risky Rows:        {}\n", self.risky_rows));
        output.push_str(&format!(
            "  Cells Redacted:    {}\n",
            self.total_cells_redacted()
        ));
        output.push_str(&format!(
            "  Processing Time:   {} ms\n",
            self.processing_time_ms
        ));
        output.push('\n');

        // Noise per numeric column
        if !self.noise.is_empty() {
            output.push_str("📈 NOISE INJECTION\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for summary in &self.noise {
                output.push_str(&format!(
                    "  {:25} epsilon {:<10} scale {:.4}\n",
                    summary.column, summary.epsilon, summary.scale
                ));
            }
            output.push('\n');
        }

        // Redaction per string column
        if !self.redaction.is_empty() {
            output.push_str("🔒 REDACTION\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for summary in &self.redaction {
                output.push_str(&format!(
                    "  {:25} {:16} {:>5} cells\n",
                    summary.column, summary.method, summary.cells_redacted
                ));
            }
            output.push('\n');
        }

        // Warnings
        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {}\n", warning));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for RunReport {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = RunReport::new(false);
        assert!(!report.dry_run);
        assert_eq!(report.rows, 0);
        assert_eq!(report.risky_rows, 0);
        assert!(report.noise.is_empty());
        assert!(report.redaction.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_run_ids_are_unique() {
        let a = RunReport::new(false);
        let b = RunReport::new(false);
        assert_ne!(a.run_id, b.run_id);
    }

    #[test]
    fn test_add_summaries() {
        let mut report = RunReport::new(false);
        report.add_noise("income", 1.0, 12.5);
        report.add_redaction("city", "suppression", 3);
        report.add_redaction("name", "synthetic", 3);

        assert_eq!(report.noise.len(), 1);
        assert_eq!(report.redaction.len(), 2);
        assert_eq!(report.total_cells_redacted(), 6);
    }

    #[test]
    fn test_format_console() {
        let mut report = RunReport::new(false);
        report.rows = 10;
        report.risky_rows = 3;
        report.add_noise("income", 0.5, 180.0);
        report.add_redaction("city", "generalization", 3);
        report.add_warning("column 'age' has zero value range, no noise added".to_string());

        let output = report.format_console();
        assert!(output.contains("ANONYMIZATION RUN REPORT"));
        assert!(output.contains("Rows Processed:    10"));
        assert!(output.contains("Risky Rows:        3"));
        assert!(output.contains("income"));
        assert!(output.contains("generalization"));
        assert!(output.contains("zero value range"));
    }

    #[test]
    fn test_dry_run_title() {
        let report = RunReport::new(true);
        let output = report.format_console();
        assert!(output.contains("DRY-RUN REPORT"));
        assert!(output.contains("dry-run"));
    }

    #[test]
    fn test_format_json_round_trip() {
        let mut report = RunReport::new(false);
        report.rows = 4;
        report.add_noise("salary", 2.0, 5.0);

        let json = report.format_json().unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.rows, 4);
        assert_eq!(parsed.noise.len(), 1);
        assert_eq!(parsed.run_id, report.run_id);
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let report = RunReport::new(true);
        report.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains(&report.run_id));
    }
}
