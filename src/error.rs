//! Error types for client configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid values are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use postgrest_builder::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBaseUrl)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`PostgrestConfig`](crate::PostgrestConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Base URL cannot be empty.
    #[error("Base URL cannot be empty. Please provide the root URL of the PostgREST server.")]
    EmptyBaseUrl,

    /// Base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}'. Expected an absolute http or https URL (e.g., 'http://localhost:3000').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Bearer token cannot be empty.
    #[error("Bearer token cannot be empty.")]
    EmptyBearerToken,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_url_error_message() {
        let message = ConfigError::EmptyBaseUrl.to_string();
        assert!(message.contains("Base URL cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_includes_url() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://db".to_string(),
        };
        assert!(error.to_string().contains("ftp://db"));
    }

    #[test]
    fn test_missing_field_error_names_field() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        assert!(error.to_string().contains("'base_url'"));
    }

    #[test]
    fn test_config_error_implements_std_error() {
        let error: &dyn std::error::Error = &ConfigError::EmptyBearerToken;
        assert_eq!(error.to_string(), "Bearer token cannot be empty.");
    }
}
