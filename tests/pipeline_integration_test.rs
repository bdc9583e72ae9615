//! End-to-end tests for the anonymization pipeline

use sha2::{Digest, Sha256};
use shroud::config::{AuditConfig, NumericRule, PipelineConfig, StringRule};
use shroud::core::pipeline::AnonymizationPipeline;
use shroud::domain::{ShroudError, Table};

/// Six people across three cities. With k = 2 the single Bern resident
/// is the only risky row.
fn people_table() -> Table {
    Table::builder()
        .text(
            "name",
            vec![
                "Alice Johnson".to_string(),
                "Bruno Costa".to_string(),
                "Chen Wei".to_string(),
                "Dana Smith".to_string(),
                "Erik Olsen".to_string(),
                "Frida Keller".to_string(),
            ],
        )
        .text(
            "city",
            vec![
                "Lisbon".to_string(),
                "Lisbon".to_string(),
                "Lisbon".to_string(),
                "Oslo".to_string(),
                "Oslo".to_string(),
                "Bern".to_string(),
            ],
        )
        .numeric(
            "income",
            vec![48_000.0, 52_000.0, 50_000.0, 61_000.0, 59_000.0, 75_000.0],
        )
        .build()
        .unwrap()
}

fn city_config(k: i64, method: &str, level: i64) -> PipelineConfig {
    PipelineConfig {
        k,
        seed: Some(7),
        numeric: vec![NumericRule {
            column: "income".to_string(),
            epsilon: 1.0,
        }],
        string: vec![StringRule {
            column: "city".to_string(),
            method: method.to_string(),
            level,
        }],
        audit: AuditConfig::default(),
    }
}

#[test]
fn test_full_run_with_suppression() {
    let table = people_table();
    let mut pipeline =
        AnonymizationPipeline::new(city_config(2, "suppression", 2), false).unwrap();

    let (output, report) = pipeline.run_with_report(&table).unwrap();

    // Shape is preserved
    assert_eq!(output.row_count(), 6);
    assert_eq!(output.column_names(), table.column_names());

    // Only the Bern row is risky; its city is masked
    assert_eq!(
        output.text("city").unwrap(),
        &["Lisbon", "Lisbon", "Lisbon", "Oslo", "Oslo", "*"]
    );

    // The name column is not configured and passes through untouched
    assert_eq!(output.text("name").unwrap(), table.text("name").unwrap());

    // Noise was applied to the income column
    assert_ne!(
        output.numeric("income").unwrap(),
        table.numeric("income").unwrap()
    );

    // Report reflects the run
    assert_eq!(report.rows, 6);
    assert_eq!(report.risky_rows, 1);
    assert!(!report.dry_run);
    assert_eq!(report.noise.len(), 1);
    assert_eq!(report.noise[0].column, "income");
    assert_eq!(report.redaction.len(), 1);
    assert_eq!(report.redaction[0].cells_redacted, 1);
    assert_eq!(report.total_cells_redacted(), 1);
}

#[test]
fn test_full_run_with_generalization() {
    let table = people_table();
    let mut pipeline =
        AnonymizationPipeline::new(city_config(2, "generalization", 2), false).unwrap();

    let (output, _report) = pipeline.run_with_report(&table).unwrap();

    assert_eq!(
        output.text("city").unwrap(),
        &["Lisbon", "Lisbon", "Lisbon", "Oslo", "Oslo", "Be**"]
    );
}

#[test]
fn test_full_run_with_synthetic_replacement() {
    // With both string columns configured, every quasi-identifier
    // combination is unique, so every row is risky.
    let config = PipelineConfig {
        k: 2,
        seed: Some(11),
        numeric: vec![],
        string: vec![
            StringRule {
                column: "name".to_string(),
                method: "synthetic".to_string(),
                level: 2,
            },
            StringRule {
                column: "city".to_string(),
                method: "suppression".to_string(),
                level: 2,
            },
        ],
        audit: AuditConfig::default(),
    };

    let table = people_table();
    let mut pipeline = AnonymizationPipeline::new(config, false).unwrap();
    let (output, report) = pipeline.run_with_report(&table).unwrap();

    assert_eq!(report.risky_rows, 6);
    assert_eq!(output.text("city").unwrap(), &["*"; 6]);

    let original_names = table.text("name").unwrap();
    let new_names = output.text("name").unwrap();
    assert_ne!(new_names, original_names, "risky names should be replaced");
    for name in new_names {
        assert!(!name.is_empty());
    }
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let table = people_table();

    let mut first = AnonymizationPipeline::new(city_config(2, "suppression", 2), false).unwrap();
    let mut second = AnonymizationPipeline::new(city_config(2, "suppression", 2), false).unwrap();

    let (output_a, _) = first.run_with_report(&table).unwrap();
    let (output_b, _) = second.run_with_report(&table).unwrap();

    assert_eq!(output_a, output_b);

    // A different seed produces different noise
    let mut config = city_config(2, "suppression", 2);
    config.seed = Some(8);
    let mut third = AnonymizationPipeline::new(config, false).unwrap();
    let (output_c, _) = third.run_with_report(&table).unwrap();
    assert_ne!(
        output_a.numeric("income").unwrap(),
        output_c.numeric("income").unwrap()
    );
}

#[test]
fn test_dry_run_changes_nothing() {
    let table = people_table();
    let mut pipeline = AnonymizationPipeline::new(city_config(2, "suppression", 2), true).unwrap();

    let (output, report) = pipeline.run_with_report(&table).unwrap();

    assert_eq!(output, table);
    assert!(report.dry_run);
    assert_eq!(report.risky_rows, 1);
    // The report still counts the cells a live run would redact
    assert_eq!(report.redaction[0].cells_redacted, 1);
}

#[test]
fn test_audit_trail_hashes_but_never_plaintext() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit").join("runs.log");

    let mut config = city_config(2, "suppression", 2);
    config.audit = AuditConfig {
        enabled: true,
        log_path: log_path.clone(),
        json_format: true,
    };

    let table = people_table();
    let mut pipeline = AnonymizationPipeline::new(config, false).unwrap();
    let (_, report) = pipeline.run_with_report(&table).unwrap();

    let content = std::fs::read_to_string(&log_path).expect("audit log should exist");
    assert_eq!(content.lines().count(), 1);

    // The entry is valid JSON and carries the run id
    let entry: serde_json::Value = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(entry["run_id"], report.run_id);
    assert_eq!(entry["k"], 2);

    // The redacted value appears only as its SHA-256 hash
    let bern_hash = format!("{:x}", Sha256::digest(b"Bern"));
    assert!(content.contains(&bern_hash));
    assert!(!content.contains("Bern"));
}

#[test]
fn test_dry_run_writes_no_audit_entry() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("audit").join("runs.log");

    let mut config = city_config(2, "suppression", 2);
    config.audit = AuditConfig {
        enabled: true,
        log_path: log_path.clone(),
        json_format: true,
    };

    let table = people_table();
    let mut pipeline = AnonymizationPipeline::new(config, true).unwrap();
    pipeline.run_with_report(&table).unwrap();

    assert!(!log_path.exists());
}

#[test]
fn test_missing_column_fails() {
    let mut config = city_config(2, "suppression", 2);
    config.numeric[0].column = "salary".to_string();

    let table = people_table();
    let mut pipeline = AnonymizationPipeline::new(config, false).unwrap();
    let err = pipeline.run_with_report(&table).unwrap_err();

    assert!(matches!(err, ShroudError::ColumnNotFound { ref column } if column == "salary"));
}

#[test]
fn test_k_larger_than_table_redacts_everything() {
    let table = people_table();
    let mut pipeline =
        AnonymizationPipeline::new(city_config(10, "suppression", 2), false).unwrap();

    let (output, report) = pipeline.run_with_report(&table).unwrap();

    assert_eq!(report.risky_rows, 6);
    assert_eq!(output.text("city").unwrap(), &["*"; 6]);
}

#[test]
fn test_k_of_one_marks_nothing_risky() {
    let table = people_table();
    let mut pipeline = AnonymizationPipeline::new(city_config(1, "suppression", 2), false).unwrap();

    let (output, report) = pipeline.run_with_report(&table).unwrap();

    assert_eq!(report.risky_rows, 0);
    assert_eq!(output.text("city").unwrap(), table.text("city").unwrap());
    // Noise is still applied regardless of risk
    assert_ne!(
        output.numeric("income").unwrap(),
        table.numeric("income").unwrap()
    );
}

#[test]
fn test_invalid_k_rejected_at_construction() {
    let err = AnonymizationPipeline::new(city_config(0, "suppression", 2), false).unwrap_err();
    assert!(matches!(err, ShroudError::InvalidParameter { .. }));
}

#[test]
fn test_unknown_method_rejected_at_construction() {
    let err = AnonymizationPipeline::new(city_config(2, "scramble", 2), false).unwrap_err();
    assert!(matches!(err, ShroudError::UnsupportedStrategy(ref m) if m == "scramble"));
}
