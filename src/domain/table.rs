//! Column-major table model
//!
//! A [`Table`] is an ordered set of named columns, each holding either
//! numeric or text values. Column kinds are declared by the caller, never
//! inferred from content. All columns in a table have the same length.

use crate::domain::errors::ShroudError;
use crate::domain::result::Result;

/// The declared kind of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Floating point values
    Numeric,
    /// String values
    Text,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

/// Cell storage for a single column
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Numeric cells
    Numeric(Vec<f64>),
    /// Text cells
    Text(Vec<String>),
}

impl ColumnData {
    /// Number of cells in the column
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(values) => values.len(),
            ColumnData::Text(values) => values.len(),
        }
    }

    /// True when the column has no cells
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The kind of values this column holds
    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Numeric(_) => ColumnKind::Numeric,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }
}

/// A named column and its values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, unique within a table
    pub name: String,
    /// The column's cells
    pub data: ColumnData,
}

impl Column {
    /// Creates a numeric column
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Creates a text column
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    /// The kind of values this column holds
    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    /// Number of cells in the column
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the column has no cells
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// An ordered collection of equally sized named columns
///
/// Construct through [`Table::builder`], which rejects duplicate column
/// names and mismatched column lengths. Anonymization operations only ever
/// overwrite cell values; they never add or remove rows or columns.
///
/// # Examples
///
/// ```
/// use shroud::domain::Table;
///
/// # fn example() -> shroud::domain::Result<()> {
/// let table = Table::builder()
///     .numeric("income", vec![50_000.0, 62_000.0])
///     .text("city", vec!["Lisbon".to_string(), "Oslo".to_string()])
///     .build()?;
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.column_names(), vec!["income", "city"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Creates a builder for a new table
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Number of rows (zero for a table without columns)
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names in table order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// All columns in table order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// True when a column with this name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Looks up a column by name
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| ShroudError::column_not_found(name))
    }

    /// The values of a numeric column
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` when no column has this name and
    /// `InvalidParameter` when the column holds text values.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match &self.column(name)?.data {
            ColumnData::Numeric(values) => Ok(values),
            ColumnData::Text(_) => Err(ShroudError::invalid_parameter(
                format!("column '{name}'"),
                "expected numeric values, found text",
            )),
        }
    }

    /// The values of a text column
    ///
    /// # Errors
    ///
    /// Returns `ColumnNotFound` when no column has this name and
    /// `InvalidParameter` when the column holds numeric values.
    pub fn text(&self, name: &str) -> Result<&[String]> {
        match &self.column(name)?.data {
            ColumnData::Text(values) => Ok(values),
            ColumnData::Numeric(_) => Err(ShroudError::invalid_parameter(
                format!("column '{name}'"),
                "expected text values, found numeric",
            )),
        }
    }

    /// Overwrites the values of a numeric column
    ///
    /// The replacement must have exactly as many cells as the table has rows.
    pub fn replace_numeric(&mut self, name: &str, values: Vec<f64>) -> Result<()> {
        let rows = self.row_count();
        if values.len() != rows {
            return Err(ShroudError::Schema(format!(
                "replacement for column '{name}' has {} cells, table has {rows} rows",
                values.len()
            )));
        }
        // verify kind before touching anything
        self.numeric(name)?;
        if let Some(column) = self.columns.iter_mut().find(|c| c.name == name) {
            column.data = ColumnData::Numeric(values);
        }
        Ok(())
    }

    /// Overwrites the values of a text column
    ///
    /// The replacement must have exactly as many cells as the table has rows.
    pub fn replace_text(&mut self, name: &str, values: Vec<String>) -> Result<()> {
        let rows = self.row_count();
        if values.len() != rows {
            return Err(ShroudError::Schema(format!(
                "replacement for column '{name}' has {} cells, table has {rows} rows",
                values.len()
            )));
        }
        self.text(name)?;
        if let Some(column) = self.columns.iter_mut().find(|c| c.name == name) {
            column.data = ColumnData::Text(values);
        }
        Ok(())
    }
}

/// Builder for [`Table`]
///
/// Columns are added in order; [`build`](TableBuilder::build) validates
/// shape rules once all columns are present.
#[derive(Debug, Default)]
pub struct TableBuilder {
    columns: Vec<Column>,
}

impl TableBuilder {
    /// Creates an empty builder
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Adds a numeric column
    pub fn numeric(self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.column(Column::numeric(name, values))
    }

    /// Adds a text column
    pub fn text(self, name: impl Into<String>, values: Vec<String>) -> Self {
        self.column(Column::text(name, values))
    }

    /// Adds an already constructed column
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Builds the table
    ///
    /// # Errors
    ///
    /// Returns a `Schema` error when a column name is empty or duplicated,
    /// or when columns have different lengths.
    pub fn build(self) -> Result<Table> {
        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            if column.name.is_empty() {
                return Err(ShroudError::Schema(
                    "column names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(column.name.as_str()) {
                return Err(ShroudError::Schema(format!(
                    "duplicate column name '{}'",
                    column.name
                )));
            }
        }

        if let Some(first) = self.columns.first() {
            let rows = first.len();
            for column in &self.columns {
                if column.len() != rows {
                    return Err(ShroudError::Schema(format!(
                        "column '{}' has {} cells, expected {rows}",
                        column.name,
                        column.len()
                    )));
                }
            }
        }

        Ok(Table {
            columns: self.columns,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table::builder()
            .numeric("income", vec![50_000.0, 62_000.0, 58_000.0])
            .text(
                "city",
                vec!["Lisbon".to_string(), "Oslo".to_string(), "Lisbon".to_string()],
            )
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_shapes() {
        let table = sample_table();
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names(), vec!["income", "city"]);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::builder().build().unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_builder_rejects_duplicate_names() {
        let result = Table::builder()
            .numeric("age", vec![1.0])
            .text("age", vec!["x".to_string()])
            .build();
        assert!(matches!(result, Err(ShroudError::Schema(_))));
    }

    #[test]
    fn test_builder_rejects_empty_name() {
        let result = Table::builder().text("", vec![]).build();
        assert!(matches!(result, Err(ShroudError::Schema(_))));
    }

    #[test]
    fn test_builder_rejects_mismatched_lengths() {
        let result = Table::builder()
            .numeric("a", vec![1.0, 2.0])
            .text("b", vec!["x".to_string()])
            .build();
        assert!(matches!(result, Err(ShroudError::Schema(_))));
    }

    #[test]
    fn test_column_not_found() {
        let table = sample_table();
        let err = table.column("missing").unwrap_err();
        assert!(matches!(err, ShroudError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_kind_mismatch() {
        let table = sample_table();
        assert!(matches!(
            table.numeric("city"),
            Err(ShroudError::InvalidParameter { .. })
        ));
        assert!(matches!(
            table.text("income"),
            Err(ShroudError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_typed_accessors() {
        let table = sample_table();
        assert_eq!(table.numeric("income").unwrap().len(), 3);
        assert_eq!(table.text("city").unwrap()[0], "Lisbon");
    }

    #[test]
    fn test_replace_checks_length() {
        let mut table = sample_table();
        let err = table.replace_numeric("income", vec![1.0]).unwrap_err();
        assert!(matches!(err, ShroudError::Schema(_)));

        table
            .replace_numeric("income", vec![1.0, 2.0, 3.0])
            .unwrap();
        assert_eq!(table.numeric("income").unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_replace_checks_kind() {
        let mut table = sample_table();
        let err = table
            .replace_text("income", vec!["a".into(), "b".into(), "c".into()])
            .unwrap_err();
        assert!(matches!(err, ShroudError::InvalidParameter { .. }));
    }

    #[test]
    fn test_column_kind_display() {
        assert_eq!(ColumnKind::Numeric.to_string(), "numeric");
        assert_eq!(ColumnKind::Text.to_string(), "text");
    }
}
