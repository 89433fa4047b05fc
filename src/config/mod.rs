//! Configuration types for PostgREST clients.
//!
//! # Overview
//!
//! - [`PostgrestConfig`]: The settings shared by every request a client mints
//! - [`PostgrestConfigBuilder`]: A builder for constructing [`PostgrestConfig`] instances
//! - [`BaseUrl`]: A validated server root URL
//! - [`BearerToken`]: A bearer token with masked debug output
//!
//! # Example
//!
//! ```rust
//! use postgrest_builder::{BaseUrl, BearerToken, PostgrestConfig};
//!
//! let config = PostgrestConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
//!     .bearer_token(BearerToken::new("eyJ...").unwrap())
//!     .header("Prefer", "count=exact")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "http://localhost:3000");
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, BearerToken};

use crate::error::ConfigError;

/// Configuration for a [`PostgrestClient`](crate::PostgrestClient).
///
/// `PostgrestConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct PostgrestConfig {
    base_url: BaseUrl,
    bearer_token: Option<BearerToken>,
    default_headers: Vec<(String, String)>,
    user_agent_prefix: Option<String>,
}

impl PostgrestConfig {
    /// Creates a new builder for constructing a `PostgrestConfig`.
    #[must_use]
    pub fn builder() -> PostgrestConfigBuilder {
        PostgrestConfigBuilder::new()
    }

    /// Returns the server root URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the bearer token applied to every request, if configured.
    #[must_use]
    pub const fn bearer_token(&self) -> Option<&BearerToken> {
        self.bearer_token.as_ref()
    }

    /// Returns the headers appended to every request, in insertion order.
    #[must_use]
    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    /// Returns the User-Agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify PostgrestConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PostgrestConfig>();
};

/// Builder for constructing [`PostgrestConfig`] instances.
///
/// `base_url` is required; everything else is optional.
#[derive(Debug, Default)]
pub struct PostgrestConfigBuilder {
    base_url: Option<BaseUrl>,
    bearer_token: Option<BearerToken>,
    default_headers: Vec<(String, String)>,
    user_agent_prefix: Option<String>,
}

impl PostgrestConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server root URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets a bearer token sent as `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer_token(mut self, token: BearerToken) -> Self {
        self.bearer_token = Some(token);
        self
    }

    /// Appends a header sent with every request.
    ///
    /// Repeated names are kept side by side, not replaced.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`PostgrestConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` was not set.
    pub fn build(self) -> Result<PostgrestConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(PostgrestConfig {
            base_url,
            bearer_token: self.bearer_token,
            default_headers: self.default_headers,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new("http://localhost:3000").unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = PostgrestConfigBuilder::new().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = PostgrestConfig::builder().base_url(base_url()).build().unwrap();

        assert!(config.bearer_token().is_none());
        assert!(config.default_headers().is_empty());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_keeps_repeated_headers_in_order() {
        let config = PostgrestConfig::builder()
            .base_url(base_url())
            .header("Prefer", "count=exact")
            .header("Prefer", "return=representation")
            .build()
            .unwrap();

        assert_eq!(
            config.default_headers(),
            &[
                ("Prefer".to_string(), "count=exact".to_string()),
                ("Prefer".to_string(), "return=representation".to_string()),
            ]
        );
    }

    #[test]
    fn test_builder_with_all_fields() {
        let config = PostgrestConfig::builder()
            .base_url(base_url())
            .bearer_token(BearerToken::new("token").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.bearer_token().map(AsRef::<str>::as_ref), Some("token"));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_is_clone() {
        let config = PostgrestConfig::builder().base_url(base_url()).build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.base_url(), config.base_url());
    }
}
