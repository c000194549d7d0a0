use std::fs::File;
use std::io::{
    BufReader,
    Read
};
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};

use crate::math::curve::polynomialdegree::PolynomialDegree;
use crate::math::interval::Interval;
use crate::sampler::samplererror::SamplerError;


/// Parameters driving a `CurveSampler`.
///
/// Missing JSON fields fall back to the values of `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfiguration {
    polynomial_degree: i32,
    data_size: usize,
    noise_level: f64,
    seed: Option<u64>,
    x_range: Interval,
    y_range: Interval
}

impl Default for SamplerConfiguration {
    fn default() -> Self {
        SamplerConfiguration {
            polynomial_degree: 0,
            data_size: 100,
            noise_level: 0.1,
            seed: Some(42),
            x_range: Interval::unit(),
            y_range: Interval::unit()
        }
    }
}

impl SamplerConfiguration {
    pub fn new(polynomial_degree: i32,
               data_size: usize,
               noise_level: f64,
               seed: Option<u64>,
               x_range: Interval,
               y_range: Interval) -> SamplerConfiguration {
        SamplerConfiguration {
            polynomial_degree,
            data_size,
            noise_level,
            seed,
            x_range,
            y_range
        }
    }

    pub fn polynomial_degree(&self) -> i32 {
        self.polynomial_degree
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }

    pub fn noise_level(&self) -> f64 {
        self.noise_level
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn x_range(&self) -> &Interval {
        &self.x_range
    }

    pub fn y_range(&self) -> &Interval {
        &self.y_range
    }

    pub fn with_polynomial_degree(mut self, polynomial_degree: i32) -> SamplerConfiguration {
        self.polynomial_degree = polynomial_degree;
        self
    }

    pub fn with_data_size(mut self, data_size: usize) -> SamplerConfiguration {
        self.data_size = data_size;
        self
    }

    pub fn with_noise_level(mut self, noise_level: f64) -> SamplerConfiguration {
        self.noise_level = noise_level;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> SamplerConfiguration {
        self.seed = seed;
        self
    }

    pub fn with_x_range(mut self, x_range: Interval) -> SamplerConfiguration {
        self.x_range = x_range;
        self
    }

    pub fn with_y_range(mut self, y_range: Interval) -> SamplerConfiguration {
        self.y_range = y_range;
        self
    }

    /// Typed degree; fails for degrees outside 0..=2.
    pub fn degree(&self) -> Result<PolynomialDegree, SamplerError> {
        PolynomialDegree::try_from(self.polynomial_degree)
    }

    /// Checks everything bulk generation relies on.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.data_size == 0 {
            return Err(SamplerError::config("data size must be positive"));
        }
        self.degree()?;
        if !self.noise_level.is_finite() {
            return Err(SamplerError::config(format!(
                "noise level must be finite, got {}", self.noise_level
            )));
        }
        Ok(())
    }

    pub(crate) fn set_polynomial_degree(&mut self, polynomial_degree: i32) {
        self.polynomial_degree = polynomial_degree;
    }

    pub(crate) fn set_noise_level(&mut self, noise_level: f64) {
        self.noise_level = noise_level;
    }

    pub(crate) fn set_data_size(&mut self, data_size: usize) {
        self.data_size = data_size;
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<SamplerConfiguration, SamplerError> {
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<SamplerConfiguration, SamplerError> {
        let file = File::open(file_path)?;
        SamplerConfiguration::from_json_reader(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let config = SamplerConfiguration::default();
        assert_eq!(config.polynomial_degree(), 0);
        assert_eq!(config.data_size(), 100);
        assert_eq!(config.noise_level(), 0.1);
        assert_eq!(config.seed(), Some(42));
        assert_eq!(*config.x_range(), Interval::unit());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = SamplerConfiguration::default();
        assert!(matches!(
            config.clone().with_data_size(0).validate(),
            Err(SamplerError::ConfigError(_))
        ));
        assert!(matches!(
            config.clone().with_polynomial_degree(-1).validate(),
            Err(SamplerError::ConfigError(_))
        ));
        assert!(matches!(
            config.clone().with_polynomial_degree(3).validate(),
            Err(SamplerError::UnsupportedDegreeError(3))
        ));
        assert!(matches!(
            config.with_noise_level(f64::NAN).validate(),
            Err(SamplerError::ConfigError(_))
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{ "polynomial_degree": 2, "x_range": [-1, 1], "seed": null }"#;
        let config = SamplerConfiguration::from_json_reader(json.as_bytes()).unwrap();
        assert_eq!(config.polynomial_degree(), 2);
        assert_eq!(config.data_size(), 100);
        assert_eq!(config.seed(), None);
        assert_eq!(config.x_range().min(), -1.0);
        assert_eq!(*config.y_range(), Interval::unit());
    }

    #[test]
    fn json_with_inverted_range_fails() {
        let json = r#"{ "y_range": [1, 0] }"#;
        assert!(matches!(
            SamplerConfiguration::from_json_reader(json.as_bytes()),
            Err(SamplerError::JsonParseError(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            SamplerConfiguration::from_reader("/nonexistent/polysampler.json"),
            Err(SamplerError::IOError(_))
        ));
    }
}
