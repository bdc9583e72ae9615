//! CSV file adapter
//!
//! Reads CSV files with a header row into the column-major [`Table`] and
//! writes tables back out. Column kinds are not inferred: the caller
//! names the columns to parse as numbers and every other column is kept
//! as text, so a numeric-looking postcode stays a string unless asked
//! for.

use crate::domain::{ColumnData, Result, ShroudError, Table};
use std::collections::HashSet;
use std::path::Path;

/// Reads a CSV file into a table
///
/// The first row is taken as the header. Columns listed in
/// `numeric_columns` are parsed as `f64`; all others are kept verbatim
/// as text.
///
/// # Errors
///
/// Returns `ColumnNotFound` when a declared numeric column is not in the
/// header, and `Csv` for unreadable files, ragged rows, or cells that do
/// not parse as numbers.
pub fn read_table(path: impl AsRef<Path>, numeric_columns: &[String]) -> Result<Table> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ShroudError::Csv(format!("failed to open {}: {e}", path.display())))?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    for declared in numeric_columns {
        if !headers.iter().any(|h| h == declared) {
            return Err(ShroudError::column_not_found(declared.as_str()));
        }
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (i, field) in record.iter().enumerate() {
            cells[i].push(field.to_string());
        }
    }

    let numeric: HashSet<&str> = numeric_columns.iter().map(String::as_str).collect();
    let mut builder = Table::builder();
    for (name, values) in headers.iter().zip(cells) {
        builder = if numeric.contains(name.as_str()) {
            let parsed = values
                .iter()
                .enumerate()
                .map(|(row, raw)| {
                    raw.trim().parse::<f64>().map_err(|_| {
                        ShroudError::Csv(format!(
                            "column '{}' row {}: cannot parse '{}' as a number",
                            name,
                            row + 1,
                            raw
                        ))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            builder.numeric(name.clone(), parsed)
        } else {
            builder.text(name.clone(), values)
        };
    }

    builder.build()
}

/// Reads only the header row of a CSV file
pub fn read_headers(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ShroudError::Csv(format!("failed to open {}: {e}", path.display())))?;

    Ok(reader.headers()?.iter().map(|h| h.to_string()).collect())
}

/// Writes a table to a CSV file
///
/// Column order is preserved. Numeric values are written in their
/// shortest round-trippable form, so an integral value carries no
/// trailing `.0`.
pub fn write_table(path: impl AsRef<Path>, table: &Table) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| ShroudError::Csv(format!("failed to create {}: {e}", path.display())))?;

    writer.write_record(table.column_names())?;

    for row in 0..table.row_count() {
        let record: Vec<String> = table
            .columns()
            .iter()
            .map(|column| match &column.data {
                ColumnData::Numeric(values) => values[row].to_string(),
                ColumnData::Text(values) => values[row].clone(),
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
