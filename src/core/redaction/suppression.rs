//! Suppression strategy
//!
//! The strongest redaction: every flagged value is replaced by the mask
//! token outright, so nothing of the original survives.

use crate::core::redaction::{Redactor, MASK};
use crate::domain::Result;

/// Replaces values with the mask token
#[derive(Debug, Clone, Copy, Default)]
pub struct Suppression;

impl Suppression {
    /// Creates a suppression redactor
    pub fn new() -> Self {
        Self
    }
}

impl Redactor for Suppression {
    fn redact(&mut self, _value: &str) -> Result<String> {
        Ok(MASK.to_string())
    }
}
