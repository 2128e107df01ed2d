// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! Loading a document can fail with [`ConfigError::Io`] or
//! [`ConfigError::ParseError`]; reading a typed value can fail with
//! [`ConfigError::NotFound`] or [`ConfigError::TypeMismatch`]. All errors use
//! `thiserror` and are returned to the caller, never logged and swallowed.

use crate::domain::target_type::TargetType;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use typecfg::domain::errors::ConfigError;
///
/// fn get_port() -> Result<i64, ConfigError> {
///     Err(ConfigError::NotFound {
///         key: "port".to_string(),
///     })
/// }
///
/// assert_eq!(
///     get_port().unwrap_err().to_string(),
///     "Configuration key not found: port"
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    Io {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The source text is not well-formed, or its top-level value is not a mapping.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested key is absent from the document.
    #[error("Configuration key not found: {key}")]
    NotFound {
        /// The key that was not found
        key: String,
    },

    /// The value stored under the key cannot be coerced to the requested type.
    #[error("Type mismatch: value for key '{key}' cannot be read as {target}")]
    TypeMismatch {
        /// The key being read
        key: String,
        /// The requested type
        target: TargetType,
        /// The underlying conversion error, when text parsing or a range check failed
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ConfigError {
    /// Creates a `NotFound` error for `key`.
    pub fn not_found(key: &str) -> Self {
        ConfigError::NotFound {
            key: key.to_string(),
        }
    }

    /// Creates a `TypeMismatch` error for an unsupported value/type pairing.
    pub fn type_mismatch(key: &str, target: TargetType) -> Self {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            target,
            source: None,
        }
    }

    /// Creates a `TypeMismatch` error caused by a failed parse or range check.
    pub fn type_mismatch_from<E>(key: &str, target: TargetType, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            target,
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `ParseError` with a message and no underlying cause.
    pub fn parse(message: impl Into<String>) -> Self {
        ConfigError::ParseError {
            message: message.into(),
            source: None,
        }
    }

    /// Returns `true` if this is a `NotFound` error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::NotFound { .. })
    }

    /// Returns `true` if this is a `TypeMismatch` error.
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ConfigError::TypeMismatch { .. })
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
