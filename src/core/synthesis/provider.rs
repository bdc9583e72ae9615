//! Pluggable synthetic value providers
//!
//! A [`SyntheticProvider`] turns a value domain into a freshly generated
//! value. The default implementation draws from the `fake` crate with an
//! owned RNG so generation can be seeded for reproducible output.

use crate::domain::Result;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Bounds for the numeric fallback domain
const NUMBER_RANGE: std::ops::Range<i64> = 10..100;

/// Value domains a provider can generate from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    /// A person's full name
    PersonName,
    /// A city name
    City,
    /// An email address
    Email,
    /// An integral number in [10, 100)
    Number,
}

impl ValueDomain {
    /// Selects the domain for a column by its name
    ///
    /// Matching is case-insensitive substring search, first match wins:
    /// "name" before "city" before "email", with the numeric domain as
    /// the fallback for everything else.
    pub fn for_column(column_name: &str) -> Self {
        let lower = column_name.to_lowercase();
        if lower.contains("name") {
            Self::PersonName
        } else if lower.contains("city") {
            Self::City
        } else if lower.contains("email") {
            Self::Email
        } else {
            Self::Number
        }
    }
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueDomain::PersonName => write!(f, "person_name"),
            ValueDomain::City => write!(f, "city"),
            ValueDomain::Email => write!(f, "email"),
            ValueDomain::Number => write!(f, "number"),
        }
    }
}

/// Source of generated values for synthesis and replacement
pub trait SyntheticProvider: Send + Sync {
    /// Generates a person's full name
    fn full_name(&mut self) -> String;

    /// Generates a city name
    fn city(&mut self) -> String;

    /// Generates an email address
    fn email(&mut self) -> String;

    /// Generates an integral number in [10, 100)
    fn number(&mut self) -> f64;

    /// Generates a value from the given domain, rendered as a string
    ///
    /// Numbers are rendered in their shortest decimal form, so an
    /// integral draw carries no trailing `.0`.
    fn value(&mut self, domain: ValueDomain) -> String {
        match domain {
            ValueDomain::PersonName => self.full_name(),
            ValueDomain::City => self.city(),
            ValueDomain::Email => self.email(),
            ValueDomain::Number => self.number().to_string(),
        }
    }
}

/// Default provider backed by the `fake` crate
#[derive(Debug)]
pub struct FakerProvider {
    rng: StdRng,
}

impl FakerProvider {
    /// Creates a provider with an entropy-seeded RNG
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a provider with a fixed seed for reproducible output
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for FakerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticProvider for FakerProvider {
    fn full_name(&mut self) -> String {
        Name().fake_with_rng::<String, _>(&mut self.rng)
    }

    fn city(&mut self) -> String {
        CityName().fake_with_rng::<String, _>(&mut self.rng)
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng::<String, _>(&mut self.rng)
    }

    fn number(&mut self) -> f64 {
        self.rng.gen_range(NUMBER_RANGE) as f64
    }
}

/// Shared row-count guard for the config and CLI layers
///
/// # Errors
///
/// Returns `InvalidParameter` when `rows` is negative.
pub fn validate_row_count(rows: i64) -> Result<usize> {
    if rows < 0 {
        return Err(crate::domain::ShroudError::invalid_parameter(
            "rows",
            format!("must be >= 0, got {rows}"),
        ));
    }
    Ok(rows as usize)
}
