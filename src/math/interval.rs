use std::fmt;

use rand::Rng;
use serde::{
    Deserialize,
    Serialize
};

use crate::sampler::samplererror::SamplerError;

/// Closed range `[min, max]` of finite values.
///
/// `min == max` is accepted; sampling such a range always yields `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct Interval {
    min: f64,
    max: f64
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Result<Interval, SamplerError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SamplerError::config(format!(
                "range bounds must be finite, got ({}, {})", min, max
            )));
        }
        if min > max {
            return Err(SamplerError::config(format!(
                "range lower bound {} exceeds upper bound {}", min, max
            )));
        }
        // Sampling needs a finite width, quadratic anchors need finite squares.
        if !(max - min).is_finite() || !(min * min).is_finite() || !(max * max).is_finite() {
            return Err(SamplerError::config(format!(
                "range ({}, {}) is too wide to sample", min, max
            )));
        }
        Ok(Interval { min, max })
    }

    /// The `[0, 1]` unit interval used by the default configuration.
    pub fn unit() -> Interval {
        Interval { min: 0.0, max: 1.0 }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Pins `value` to the nearest bound when it falls outside the range.
    pub fn clip(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Whether `value` sits exactly on one of the bounds.
    pub fn on_bound(&self, value: f64) -> bool {
        value == self.min || value == self.max
    }

    /// Uniform draw over the closed range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.is_degenerate() {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::unit()
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = SamplerError;

    fn try_from(bounds: (f64, f64)) -> Result<Self, Self::Error> {
        Interval::new(bounds.0, bounds.1)
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.min, interval.max)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}, {:.2}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rejects_inverted_and_non_finite_bounds() {
        assert!(matches!(Interval::new(1.0, 0.0), Err(SamplerError::ConfigError(_))));
        assert!(matches!(Interval::new(f64::NAN, 1.0), Err(SamplerError::ConfigError(_))));
        assert!(matches!(Interval::new(0.0, f64::INFINITY), Err(SamplerError::ConfigError(_))));
        assert!(Interval::new(0.5, 0.5).is_ok());
    }

    #[test]
    fn rejects_ranges_too_wide_to_sample() {
        assert!(matches!(Interval::new(-f64::MAX, f64::MAX), Err(SamplerError::ConfigError(_))));
        assert!(matches!(Interval::new(-1e200, 1e200), Err(SamplerError::ConfigError(_))));
        assert!(matches!(Interval::new(0.0, 1e160), Err(SamplerError::ConfigError(_))));
        assert!(serde_json::from_str::<Interval>("[-1e200, 1e200]").is_err());

        let wide = Interval::new(-1e100, 1e100).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(wide.contains(wide.sample(&mut rng)));
    }

    #[test]
    fn clip_pins_to_nearest_bound() {
        let interval = Interval::new(-1.0, 2.0).unwrap();
        assert_eq!(interval.clip(-3.0), -1.0);
        assert_eq!(interval.clip(5.0), 2.0);
        assert_eq!(interval.clip(0.25), 0.25);
        assert!(interval.on_bound(interval.clip(10.0)));
    }

    #[test]
    fn mid_and_width() {
        let interval = Interval::new(2.0, 6.0).unwrap();
        assert_eq!(interval.mid(), 4.0);
        assert_eq!(interval.width(), 4.0);
        assert!(!interval.is_degenerate());
    }

    #[test]
    fn samples_stay_inside() {
        let mut rng = StdRng::seed_from_u64(42);
        let interval = Interval::new(-0.5, 0.5).unwrap();
        for _ in 0..1_000 {
            assert!(interval.contains(interval.sample(&mut rng)));
        }

        let point = Interval::new(3.0, 3.0).unwrap();
        assert_eq!(point.sample(&mut rng), 3.0);
    }

    #[test]
    fn deserializes_from_pair() {
        let interval: Interval = serde_json::from_str("[0, 10]").unwrap();
        assert_eq!(interval, Interval::new(0.0, 10.0).unwrap());
        assert!(serde_json::from_str::<Interval>("[1, 0]").is_err());
        assert_eq!(serde_json::to_string(&interval).unwrap(), "[0.0,10.0]");
    }
}
