//! External data formats for Shroud.
//!
//! This module provides adapters between the on-disk world and the
//! column-major [`Table`](crate::domain::Table) the core works on:
//!
//! - [`csv`] - CSV files with a header row
//!
//! # Design Pattern
//!
//! Adapters keep file I/O out of the core: the pipeline only ever sees a
//! typed `Table`, and everything about parsing, kind selection, and
//! formatting lives here.
//!
//! # CSV Adapter
//!
//! ```rust,no_run
//! use shroud::adapters::csv::{read_table, write_table};
//!
//! # fn example() -> shroud::domain::Result<()> {
//! // Columns named here are parsed as numbers, the rest stay text
//! let numeric = vec!["income".to_string(), "age".to_string()];
//! let table = read_table("data.csv", &numeric)?;
//!
//! write_table("anonymized.csv", &table)?;
//! # Ok(())
//! # }
//! ```

pub mod csv;
