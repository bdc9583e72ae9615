//! Redaction strategies for risky string values
//!
//! Provides the [`Redactor`] trait and the closed set of strategies used
//! to overwrite values in rows flagged by the risk classifier: masking
//! the whole value, masking everything past a prefix, or replacing the
//! value with a generated one.

pub mod generalization;
pub mod suppression;
pub mod synthetic;

pub use generalization::Generalization;
pub use suppression::Suppression;
pub use synthetic::SyntheticReplacement;

use crate::domain::{Result, ShroudError};
use std::fmt;
use std::str::FromStr;

/// Mask token used by suppression and generalization
pub const MASK: &str = "*";

/// Trait for redaction strategy implementations
pub trait Redactor: Send + Sync {
    /// Redact a single cell value
    fn redact(&mut self, value: &str) -> Result<String>;
}

/// The closed set of supported redaction methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedactionMethod {
    /// Replace the value with the mask token
    Suppression,
    /// Keep a leading prefix, mask the rest
    Generalization,
    /// Replace the value with a freshly generated one
    Synthetic,
}

impl FromStr for RedactionMethod {
    type Err = ShroudError;

    /// Parses a method selector
    ///
    /// Matching is case-insensitive and tolerates spaces and hyphens in
    /// place of underscores. Anything outside the supported set is an
    /// `UnsupportedStrategy` error; this is the only boundary where an
    /// out-of-set selector can enter the system.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "suppression" | "suppress" => Ok(Self::Suppression),
            "generalization" | "generalize" => Ok(Self::Generalization),
            "synthetic" | "synthetic_replacement" => Ok(Self::Synthetic),
            _ => Err(ShroudError::UnsupportedStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for RedactionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedactionMethod::Suppression => write!(f, "suppression"),
            RedactionMethod::Generalization => write!(f, "generalization"),
            RedactionMethod::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Applies a redactor to exactly the flagged values
///
/// Values whose flag is `false` are copied through unchanged; flagged
/// values are replaced by the redactor's output. The result has the same
/// length and order as the input.
///
/// # Errors
///
/// Returns `InvalidParameter` when the flag vector and the values differ
/// in length, and propagates any redactor failure.
pub fn redact_flagged(
    values: &[String],
    risk_flags: &[bool],
    redactor: &mut dyn Redactor,
) -> Result<Vec<String>> {
    if values.len() != risk_flags.len() {
        return Err(ShroudError::invalid_parameter(
            "risk_flags",
            format!("expected {} flags, got {}", values.len(), risk_flags.len()),
        ));
    }

    values
        .iter()
        .zip(risk_flags)
        .map(|(value, &risky)| {
            if risky {
                redactor.redact(value)
            } else {
                Ok(value.clone())
            }
        })
        .collect()
}
