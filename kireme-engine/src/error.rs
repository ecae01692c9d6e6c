//! Engine-level error types

use kireme_core::{BreakError, ResourceError};
use thiserror::Error;

/// Errors raised while building or running a phrase segmenter
#[derive(Error, Debug)]
pub enum EngineError {
    /// Break detection failed inside the core engine
    #[error("break detection failed: {0}")]
    Break(#[from] BreakError),

    /// The model resource could not be loaded
    #[error("model resource error: {0}")]
    Resource(#[from] ResourceError),

    /// Configuration error
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_converts() {
        let err: EngineError = ResourceError::DuplicateKey("UW3:は".into()).into();
        assert!(matches!(err, EngineError::Resource(_)));
        assert!(err.to_string().starts_with("model resource error"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: EngineError = io.into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }

    #[test]
    fn test_toml_error_is_config_error() {
        let err: EngineError = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert!(matches!(err, EngineError::ConfigError(_)));
    }
}
