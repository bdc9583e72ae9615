//! Generalization strategy
//!
//! Keeps a leading prefix of each flagged value and masks the rest, so
//! coarse structure (say, a postcode region or a name's initial letters)
//! survives while the identifying suffix does not. The output always has
//! the same character count as the input.

use crate::core::redaction::{Redactor, MASK};
use crate::domain::{Result, ShroudError};

/// Masks everything past a fixed prefix length
#[derive(Debug, Clone, Copy)]
pub struct Generalization {
    level: usize,
}

impl Generalization {
    /// Creates a generalization redactor keeping `level` leading characters
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when `level` is negative.
    pub fn new(level: i64) -> Result<Self> {
        if level < 0 {
            return Err(ShroudError::invalid_parameter(
                "generalization_level",
                format!("must be >= 0, got {level}"),
            ));
        }
        Ok(Self {
            level: level as usize,
        })
    }

    /// The number of leading characters preserved
    pub fn level(&self) -> usize {
        self.level
    }
}

impl Redactor for Generalization {
    fn redact(&mut self, value: &str) -> Result<String> {
        let total = value.chars().count();
        if self.level >= total {
            return Ok(value.to_string());
        }

        // Operate on characters, not bytes, so multi-byte input cannot
        // be split mid-character.
        let mut result: String = value.chars().take(self.level).collect();
        for _ in self.level..total {
            result.push_str(MASK);
        }
        Ok(result)
    }
}
