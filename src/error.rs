// src/error.rs

//! Unified error handling for the profile search pipeline.

use std::fmt;

use thiserror::Error;

/// Result type alias for prospector operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
///
/// Short queries and malformed hit fields are not errors: the former are
/// skipped by the dispatcher, the latter fall back to defaults in the
/// normalizer. Only configuration, I/O and provider failures end up here.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Suffix pattern failed to compile
    #[error("Invalid pattern '{pattern}': {message}")]
    Regex { pattern: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Search provider rejected the request or returned an unusable response
    #[error("Search provider error: {0}")]
    Provider(String),
}

impl AppError {
    /// Create a pattern compilation error.
    pub fn regex(pattern: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Regex {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a provider error.
    pub fn provider(message: impl fmt::Display) -> Self {
        Self::Provider(message.to_string())
    }
}
