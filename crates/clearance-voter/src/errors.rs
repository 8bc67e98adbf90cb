//! Configuration error handling
//!
//! Vote evaluation is infallible; only loading and validating configuration can fail.

use std::path::Path;

/// Error raised while loading or validating voter configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {message}")]
    Io {
        /// Path that was being read
        path: String,
        /// Underlying I/O error message
        message: String,
    },

    /// Configuration text is not valid TOML or has unexpected keys
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Error message from the TOML decoder
        message: String,
    },

    /// Configuration parsed but holds an unusable value
    #[error("Invalid config: {message}")]
    Invalid {
        /// Error message describing the invalid value
        message: String,
    },
}

impl ConfigError {
    /// Create an I/O error for `path`
    pub fn io(path: &Path, err: &std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
