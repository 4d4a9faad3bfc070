//! Domain error types
//!
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main error type used throughout the crate.
#[derive(Debug, Error)]
pub enum AnonimError {
    /// Strategy value outside the closed `tag`/`replace`/`remove` set
    #[error("Invalid anonymization strategy: {0:?} (expected \"tag\", \"replace\" or \"remove\")")]
    InvalidStrategy(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library loading or compilation errors
    #[error("Pattern library error: {0}")]
    PatternLibrary(String),

    /// Gazetteer loading or validation errors
    #[error("Gazetteer error: {0}")]
    Gazetteer(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AnonimError {
    fn from(err: std::io::Error) -> Self {
        AnonimError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnonimError {
    fn from(err: serde_json::Error) -> Self {
        AnonimError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AnonimError {
    fn from(err: toml::de::Error) -> Self {
        AnonimError::Configuration(format!("TOML parse error: {err}"))
    }
}
