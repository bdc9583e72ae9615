//! Synthetic replacement strategy
//!
//! Replaces each flagged value with a freshly generated one from the
//! value domain matching the column's name. Replacements carry no
//! correlation with the originals and make no uniqueness guarantee.

use crate::core::redaction::Redactor;
use crate::core::synthesis::{SyntheticProvider, ValueDomain};
use crate::domain::Result;

/// Replaces values with generated ones from a borrowed provider
pub struct SyntheticReplacement<'a> {
    domain: ValueDomain,
    provider: &'a mut dyn SyntheticProvider,
}

impl<'a> SyntheticReplacement<'a> {
    /// Creates a replacement redactor for the named column
    ///
    /// The value domain is selected from the column name once, up front;
    /// every redacted cell in the column draws from that domain.
    pub fn new(column_name: &str, provider: &'a mut dyn SyntheticProvider) -> Self {
        Self {
            domain: ValueDomain::for_column(column_name),
            provider,
        }
    }

    /// The domain replacements are drawn from
    pub fn domain(&self) -> ValueDomain {
        self.domain
    }
}

impl Redactor for SyntheticReplacement<'_> {
    fn redact(&mut self, _value: &str) -> Result<String> {
        Ok(self.provider.value(self.domain))
    }
}
