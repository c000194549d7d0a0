use thiserror::Error;

/// Errors surfaced by configuration loading and bulk generation.
///
/// Incremental edits on a `CurveSampler` never produce one of these; they
/// report their outcome as a `bool` instead.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("invalid configuration: {0}")]
    ConfigError(String),
    #[error("polynomial degree {0} is not supported (maximum is 2)")]
    UnsupportedDegreeError(i32),
    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("json parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

impl SamplerError {
    pub fn config(message: impl Into<String>) -> SamplerError {
        SamplerError::ConfigError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SamplerError::config("data size must be positive").to_string(),
            "invalid configuration: data size must be positive"
        );
        assert_eq!(
            SamplerError::UnsupportedDegreeError(3).to_string(),
            "polynomial degree 3 is not supported (maximum is 2)"
        );
    }

    #[test]
    fn json_errors_convert() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SamplerError = parse_error.into();
        assert!(matches!(error, SamplerError::JsonParseError(_)));
    }
}
