// SPDX-License-Identifier: MIT OR Apache-2.0

//! DynField Core Error Types
//!
//! Crate-wide error handling for configuration and data-source operations.

use thiserror::Error;

/// Result type for DynField operations
pub type DynFieldResult<T> = Result<T, DynFieldError>;

/// Crate-wide DynField error types
#[derive(Error, Debug)]
pub enum DynFieldError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        config_key: Option<String>,
    },

    #[error("Data source error: {message}")]
    DataSource {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Custom error creation helpers
impl DynFieldError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: None,
        }
    }

    /// Create a configuration error with a specific key
    pub fn configuration_with_key(message: impl Into<String>, config_key: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            config_key: Some(config_key.into()),
        }
    }

    /// Create a data source error
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
            source: None,
        }
    }

    /// Create a data source error with the underlying failure attached
    pub fn data_source_with_source(
        message: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        Self::DataSource {
            message: message.into(),
            source: Some(source),
        }
    }
}
