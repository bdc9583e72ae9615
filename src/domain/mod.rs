//! Domain models and types for Shroud.
//!
//! This module contains the core domain models, types, and business rules
//! for Shroud.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **The table model** ([`Table`], [`Column`], [`ColumnData`], [`ColumnKind`])
//! - **Error types** ([`ShroudError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use shroud::domain::{Result, ShroudError, Table};
//!
//! fn first_income(table: &Table) -> Result<f64> {
//!     let values = table.numeric("income")?;
//!     values
//!         .first()
//!         .copied()
//!         .ok_or_else(|| ShroudError::Schema("table has no rows".to_string()))
//! }
//! ```
//!
//! # Builder Pattern
//!
//! Tables are constructed through a validating builder:
//!
//! ```rust
//! use shroud::domain::Table;
//!
//! # fn example() -> shroud::domain::Result<()> {
//! let table = Table::builder()
//!     .text("name", vec!["Ada".to_string()])
//!     .numeric("age", vec![36.0])
//!     .build()?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use errors::ShroudError;
pub use result::Result;
pub use table::{Column, ColumnData, ColumnKind, Table, TableBuilder};
