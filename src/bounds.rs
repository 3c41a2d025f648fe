//! Gene bound intervals.
//!
//! Every gene of every individual lives in one closed interval `[lo, hi]`.
//! Initialization samples from it, uniform reset mutation resamples from
//! it, and the multiplicative NSGA-II mutation clamps back into it, so the
//! interval is an invariant of the whole run.

use crate::error::ConfigError;
use rand::Rng;

/// A closed interval `[lo, hi]` that all genes must stay inside.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub lo: f64,
    pub hi: f64,
}

impl Bounds {
    /// Creates a bound interval, rejecting empty or non-finite intervals.
    pub fn new(lo: f64, hi: f64) -> Result<Self, ConfigError> {
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ConfigError::InvalidBounds { lo, hi });
        }
        Ok(Bounds { lo, hi })
    }

    /// Draws one gene uniformly from the interval.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        rng.random_range(self.lo..self.hi)
    }

    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.lo, self.hi)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        Bounds::new(self.lo, self.hi).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_new_rejects_bad_intervals() {
        assert!(Bounds::new(1.0, 1.0).is_err());
        assert!(Bounds::new(2.0, -2.0).is_err());
        assert!(Bounds::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(Bounds::new(0.0, f64::NAN).is_err());
        assert!(Bounds::new(-4.0, 4.0).is_ok());
    }

    #[test]
    fn test_sample_stays_inside() {
        let bounds = Bounds::new(-7.0, 4.0).unwrap();
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            assert!(bounds.contains(bounds.sample(&mut rng)));
        }
    }

    #[test]
    fn test_clamp() {
        let bounds = Bounds::new(-4.0, 4.0).unwrap();
        assert_eq!(bounds.clamp(-9.0), -4.0);
        assert_eq!(bounds.clamp(9.0), 4.0);
        assert_eq!(bounds.clamp(0.5), 0.5);
    }
}
