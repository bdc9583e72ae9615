//! Synthetic dataset generation
//!
//! Builds whole tables of generated values from column names alone. Each
//! column's value domain is chosen by the same name heuristic used for
//! synthetic replacement, so a column called `email` gets addresses and
//! an unrecognized column gets integers.

pub mod provider;

pub use provider::{validate_row_count, FakerProvider, SyntheticProvider, ValueDomain};

use crate::domain::{Result, Table};

/// Row count used when the caller does not specify one
pub const DEFAULT_SYNTHETIC_ROWS: usize = 50;

/// Generates complete synthetic tables from column names
pub struct SyntheticDatasetGenerator {
    provider: Box<dyn SyntheticProvider>,
}

impl SyntheticDatasetGenerator {
    /// Creates a generator with the default entropy-seeded provider
    pub fn new() -> Self {
        Self {
            provider: Box::new(FakerProvider::new()),
        }
    }

    /// Creates a generator with a fixed seed for reproducible datasets
    pub fn from_seed(seed: u64) -> Self {
        Self {
            provider: Box::new(FakerProvider::from_seed(seed)),
        }
    }

    /// Creates a generator with a custom provider
    pub fn with_provider(provider: Box<dyn SyntheticProvider>) -> Self {
        Self { provider }
    }

    /// Generates a table with the given columns and row count
    ///
    /// Every value is drawn independently from the column's domain.
    /// Number-domain columns come out numeric, the rest come out as
    /// text. A row count of zero yields an empty table with the full
    /// column set intact.
    ///
    /// # Errors
    ///
    /// Returns `Schema` when the column list contains duplicates or an
    /// empty name.
    pub fn generate(&mut self, columns: &[String], rows: usize) -> Result<Table> {
        let mut builder = Table::builder();

        for name in columns {
            let domain = ValueDomain::for_column(name);
            builder = match domain {
                ValueDomain::Number => {
                    let values: Vec<f64> = (0..rows).map(|_| self.provider.number()).collect();
                    builder.numeric(name.clone(), values)
                }
                _ => {
                    let values: Vec<String> =
                        (0..rows).map(|_| self.provider.value(domain)).collect();
                    builder.text(name.clone(), values)
                }
            };
        }

        builder.build()
    }
}

impl Default for SyntheticDatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
