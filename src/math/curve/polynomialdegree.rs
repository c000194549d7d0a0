use std::fmt;

use crate::sampler::samplererror::SamplerError;

/// Degree of the generating polynomial. Only 0, 1 and 2 are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PolynomialDegree {
    Constant,
    Linear,
    Quadratic
}

impl PolynomialDegree {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 2;

    pub fn as_i32(&self) -> i32 {
        match self {
            PolynomialDegree::Constant => 0,
            PolynomialDegree::Linear => 1,
            PolynomialDegree::Quadratic => 2
        }
    }

    /// Pins a raw degree into the supported range.
    pub fn clamped(degree: i32) -> PolynomialDegree {
        match degree.clamp(Self::MIN, Self::MAX) {
            0 => PolynomialDegree::Constant,
            1 => PolynomialDegree::Linear,
            _ => PolynomialDegree::Quadratic
        }
    }
}

impl TryFrom<i32> for PolynomialDegree {
    type Error = SamplerError;

    fn try_from(degree: i32) -> Result<Self, Self::Error> {
        if degree < Self::MIN {
            Err(SamplerError::config(format!(
                "polynomial degree must be non-negative, got {}", degree
            )))
        } else if degree > Self::MAX {
            Err(SamplerError::UnsupportedDegreeError(degree))
        } else {
            Ok(PolynomialDegree::clamped(degree))
        }
    }
}

impl fmt::Display for PolynomialDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolynomialDegree::Constant => "constant",
            PolynomialDegree::Linear => "linear",
            PolynomialDegree::Quadratic => "quadratic"
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_supported_degrees() {
        assert_eq!(PolynomialDegree::try_from(0).unwrap(), PolynomialDegree::Constant);
        assert_eq!(PolynomialDegree::try_from(1).unwrap(), PolynomialDegree::Linear);
        assert_eq!(PolynomialDegree::try_from(2).unwrap(), PolynomialDegree::Quadratic);
        assert_eq!(PolynomialDegree::Quadratic.as_i32(), 2);
    }

    #[test]
    fn rejects_out_of_range_degrees() {
        assert!(matches!(PolynomialDegree::try_from(-1), Err(SamplerError::ConfigError(_))));
        assert!(matches!(
            PolynomialDegree::try_from(3),
            Err(SamplerError::UnsupportedDegreeError(3))
        ));
    }

    #[test]
    fn clamped_pins_to_bounds() {
        assert_eq!(PolynomialDegree::clamped(-4), PolynomialDegree::Constant);
        assert_eq!(PolynomialDegree::clamped(9), PolynomialDegree::Quadratic);
    }
}
