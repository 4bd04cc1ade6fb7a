//! Error types for the TMDB API client.
//!
//! This module contains error types used throughout the crate for configuration
//! and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use tmdb_api::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid TMDB API key.")]
    EmptyApiKey,

    /// Read access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid TMDB read access token.")]
    EmptyAccessToken,

    /// A session or guest session identifier cannot be empty.
    #[error("{kind} cannot be empty.")]
    EmptySessionId {
        /// Which kind of session identifier was empty.
        kind: &'static str,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.themoviedb.org/3').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
