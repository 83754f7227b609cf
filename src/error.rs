//! Error types for net generation and output

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or writing a net drawing
#[derive(Debug, Error)]
pub enum NetError {
    /// A configuration value failed validation
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Reading a net file or writing the drawing failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A net file could not be parsed
    #[error("failed to parse net file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl NetError {
    /// Create an invalid configuration error
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    /// Wrap an I/O error together with the path it concerns
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
