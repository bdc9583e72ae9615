//! Laplace noise injection for numeric columns
//!
//! Perturbs numeric values with zero-mean Laplace noise whose scale is
//! derived from the column's observed value range and the privacy
//! parameter epsilon: `scale = (max - min) / epsilon`. Smaller epsilon
//! means stronger perturbation.

use crate::domain::{Result, ShroudError};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

/// Additive Laplace noise scaled to a column's value range
///
/// Randomness is injected by the caller, which keeps runs reproducible
/// when a seeded generator is supplied.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use shroud::core::noise::NoiseInjector;
///
/// # fn example() -> shroud::domain::Result<()> {
/// let injector = NoiseInjector::new(1.0)?;
/// let mut rng = StdRng::seed_from_u64(7);
/// let noised = injector.inject(&[50_000.0, 62_000.0, 58_000.0], &mut rng);
/// assert_eq!(noised.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NoiseInjector {
    epsilon: f64,
}

impl NoiseInjector {
    /// Creates a noise injector with the given privacy parameter
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when epsilon is zero, negative, or not
    /// finite.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ShroudError::invalid_parameter(
                "epsilon",
                format!("must be a finite value > 0, got {epsilon}"),
            ));
        }
        Ok(Self { epsilon })
    }

    /// The configured privacy parameter
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Noise scale for the given values: `(max - min) / epsilon`
    ///
    /// Empty input and columns where every value is equal both yield 0.
    pub fn scale_for(&self, values: &[f64]) -> f64 {
        match value_range(values) {
            Some(range) => range / self.epsilon,
            None => 0.0,
        }
    }

    /// Adds one independent Laplace draw to every value
    ///
    /// Returns a new vector; the input is never modified. A zero scale
    /// (empty input or constant column) returns the values unchanged
    /// without drawing from the generator.
    pub fn inject<R: Rng + ?Sized>(&self, values: &[f64], rng: &mut R) -> Vec<f64> {
        let scale = self.scale_for(values);
        if scale == 0.0 {
            return values.to_vec();
        }

        let uniform = Uniform::new(-0.5f64, 0.5f64);
        values
            .iter()
            .map(|v| v + laplace_draw(scale, uniform.sample(rng)))
            .collect()
    }
}

/// Observed `max - min`, or `None` for an empty slice
fn value_range(values: &[f64]) -> Option<f64> {
    let first = *values.first()?;
    let (min, max) = values
        .iter()
        .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Some(max - min)
}

/// Inverse-CDF Laplace sample from a uniform draw in (-0.5, 0.5)
fn laplace_draw(scale: f64, u: f64) -> f64 {
    -scale * u.signum() * (1.0 - 2.0 * u.abs()).ln()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_case::test_case;

    #[test_case(0.0; "zero")]
    #[test_case(-1.0; "negative")]
    #[test_case(f64::NAN; "nan")]
    #[test_case(f64::INFINITY; "infinite")]
    fn test_rejects_invalid_epsilon(epsilon: f64) {
        let err = NoiseInjector::new(epsilon).unwrap_err();
        assert!(matches!(err, ShroudError::InvalidParameter { .. }));
    }

    #[test]
    fn test_preserves_length() {
        let injector = NoiseInjector::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let values = vec![1.0, 5.0, 9.0, 2.0];
        assert_eq!(injector.inject(&values, &mut rng).len(), values.len());
    }

    #[test]
    fn test_empty_input() {
        let injector = NoiseInjector::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(injector.inject(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_constant_column_unchanged() {
        let injector = NoiseInjector::new(0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let values = vec![7.0, 7.0, 7.0];
        assert_eq!(injector.inject(&values, &mut rng), values);
    }

    #[test]
    fn test_single_value_unchanged() {
        let injector = NoiseInjector::new(0.5).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(injector.inject(&[42.0], &mut rng), vec![42.0]);
    }

    #[test]
    fn test_seeded_runs_are_deterministic() {
        let injector = NoiseInjector::new(1.0).unwrap();
        let values = vec![10.0, 20.0, 30.0];

        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        assert_eq!(
            injector.inject(&values, &mut rng_a),
            injector.inject(&values, &mut rng_b)
        );
    }

    #[test]
    fn test_noise_magnitude_scales_inversely_with_epsilon() {
        // Same seed means identical uniform draws, so per-value noise
        // differs exactly by the ratio of scales.
        let values = vec![10.0, 20.0, 30.0, 40.0];
        let small_eps = NoiseInjector::new(0.1).unwrap();
        let large_eps = NoiseInjector::new(10.0).unwrap();

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let noisy_small = small_eps.inject(&values, &mut rng_a);
        let noisy_large = large_eps.inject(&values, &mut rng_b);

        for i in 0..values.len() {
            let noise_small = noisy_small[i] - values[i];
            let noise_large = noisy_large[i] - values[i];
            assert!((noise_small - noise_large * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_scale_for() {
        let injector = NoiseInjector::new(2.0).unwrap();
        assert_eq!(injector.scale_for(&[0.0, 10.0]), 5.0);
        assert_eq!(injector.scale_for(&[3.0, 3.0]), 0.0);
        assert_eq!(injector.scale_for(&[]), 0.0);
    }

    #[test]
    fn test_negative_values_in_range() {
        let injector = NoiseInjector::new(1.0).unwrap();
        assert_eq!(injector.scale_for(&[-10.0, 10.0]), 20.0);
    }
}
