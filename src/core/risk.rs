//! k-anonymity risk classification
//!
//! Rows are grouped by the exact combination of their values across the
//! quasi-identifier columns. A row is risky when its group has fewer than
//! k members, because that combination narrows the row down to a small
//! set of individuals.

use crate::domain::{ColumnData, Result, ShroudError, Table};
use std::collections::HashMap;

/// Hashable projection of a single cell for grouping
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CellKey<'a> {
    Text(&'a str),
    /// Bit pattern of an f64, so numeric cells group by exact value
    Bits(u64),
}

/// Flags rows whose quasi-identifier combination occurs in fewer than k rows
///
/// # Examples
///
/// ```
/// use shroud::core::risk::RiskClassifier;
/// use shroud::domain::Table;
///
/// # fn example() -> shroud::domain::Result<()> {
/// let table = Table::builder()
///     .text("city", vec![
///         "Lisbon".to_string(),
///         "Lisbon".to_string(),
///         "Oslo".to_string(),
///     ])
///     .build()?;
///
/// let classifier = RiskClassifier::new(2)?;
/// let flags = classifier.classify(&table, &["city".to_string()])?;
/// assert_eq!(flags, vec![false, false, true]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RiskClassifier {
    k: usize,
}

impl RiskClassifier {
    /// Creates a classifier with the given group-size threshold
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when k is zero.
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(ShroudError::invalid_parameter("k", "must be >= 1"));
        }
        Ok(Self { k })
    }

    /// The configured group-size threshold
    pub fn k(&self) -> usize {
        self.k
    }

    /// Classifies every row of the table
    ///
    /// Returns one flag per row, `true` where the row's combination of
    /// values across the quasi-identifier columns is shared by fewer than
    /// k rows. Text cells compare verbatim, numeric cells bit-exactly.
    /// With an empty quasi-identifier set every row falls into a single
    /// group.
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` when a quasi-identifier names a column
    /// the table does not have.
    pub fn classify(&self, table: &Table, quasi_identifiers: &[String]) -> Result<Vec<bool>> {
        let mut key_columns = Vec::with_capacity(quasi_identifiers.len());
        for name in quasi_identifiers {
            key_columns.push(&table.column(name)?.data);
        }

        let rows = table.row_count();
        let keys: Vec<Vec<CellKey>> = (0..rows).map(|row| row_key(&key_columns, row)).collect();

        let mut group_sizes: HashMap<&[CellKey], usize> = HashMap::new();
        for key in &keys {
            *group_sizes.entry(key.as_slice()).or_insert(0) += 1;
        }

        Ok(keys
            .iter()
            .map(|key| group_sizes.get(key.as_slice()).copied().unwrap_or(0) < self.k)
            .collect())
    }
}

fn row_key<'a>(columns: &[&'a ColumnData], row: usize) -> Vec<CellKey<'a>> {
    columns
        .iter()
        .map(|data| match data {
            ColumnData::Text(values) => CellKey::Text(&values[row]),
            ColumnData::Numeric(values) => CellKey::Bits(values[row].to_bits()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Table;

    fn cities(values: &[&str]) -> Table {
        Table::builder()
            .text("city", values.iter().map(|s| s.to_string()).collect())
            .build()
            .unwrap()
    }

    #[test]
    fn test_rejects_zero_k() {
        let err = RiskClassifier::new(0).unwrap_err();
        assert!(matches!(err, ShroudError::InvalidParameter { .. }));
    }

    #[test]
    fn test_small_groups_are_risky() {
        let table = cities(&["Lisbon", "Lisbon", "Lisbon", "Oslo"]);
        let classifier = RiskClassifier::new(2).unwrap();
        let flags = classifier.classify(&table, &["city".to_string()]).unwrap();
        assert_eq!(flags, vec![false, false, false, true]);
    }

    #[test]
    fn test_k_one_flags_nothing() {
        let table = cities(&["a", "b", "c"]);
        let classifier = RiskClassifier::new(1).unwrap();
        let flags = classifier.classify(&table, &["city".to_string()]).unwrap();
        assert_eq!(flags, vec![false, false, false]);
    }

    #[test]
    fn test_row_order_does_not_matter() {
        let classifier = RiskClassifier::new(2).unwrap();
        let qis = vec!["city".to_string()];

        let flags_a = classifier
            .classify(&cities(&["Oslo", "Lisbon", "Lisbon"]), &qis)
            .unwrap();
        let flags_b = classifier
            .classify(&cities(&["Lisbon", "Oslo", "Lisbon"]), &qis)
            .unwrap();

        assert_eq!(flags_a, vec![true, false, false]);
        assert_eq!(flags_b, vec![false, true, false]);
    }

    #[test]
    fn test_combination_of_columns() {
        // Each city is common, but one (city, role) pair is unique.
        let table = Table::builder()
            .text(
                "city",
                vec!["Lisbon".into(), "Lisbon".into(), "Lisbon".into()],
            )
            .text("role", vec!["nurse".into(), "nurse".into(), "pilot".into()])
            .build()
            .unwrap();

        let classifier = RiskClassifier::new(2).unwrap();
        let flags = classifier
            .classify(&table, &["city".to_string(), "role".to_string()])
            .unwrap();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_numeric_quasi_identifier() {
        let table = Table::builder()
            .numeric("age", vec![30.0, 30.0, 31.0])
            .build()
            .unwrap();

        let classifier = RiskClassifier::new(2).unwrap();
        let flags = classifier.classify(&table, &["age".to_string()]).unwrap();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_empty_quasi_identifier_set() {
        let table = cities(&["a", "b", "c", "d"]);

        // One group of four rows: safe for k <= 4, risky beyond.
        let flags = RiskClassifier::new(3)
            .unwrap()
            .classify(&table, &[])
            .unwrap();
        assert_eq!(flags, vec![false; 4]);

        let flags = RiskClassifier::new(5)
            .unwrap()
            .classify(&table, &[])
            .unwrap();
        assert_eq!(flags, vec![true; 4]);
    }

    #[test]
    fn test_missing_column() {
        let table = cities(&["a"]);
        let classifier = RiskClassifier::new(2).unwrap();
        let err = classifier
            .classify(&table, &["country".to_string()])
            .unwrap_err();
        assert!(matches!(err, ShroudError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_empty_table() {
        let table = Table::builder().text("city", vec![]).build().unwrap();
        let classifier = RiskClassifier::new(2).unwrap();
        let flags = classifier.classify(&table, &["city".to_string()]).unwrap();
        assert!(flags.is_empty());
    }
}
