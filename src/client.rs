//! The entry point that mints request builders for one PostgREST server.

use std::fmt;
use std::sync::Arc;

use crate::builder::RequestBuilder;
use crate::clients::{HttpMethod, HttpTransport, Transport, TransportError};
use crate::config::PostgrestConfig;

/// A configured PostgREST client.
///
/// Each call to [`from`](Self::from) or [`request`](Self::request) returns
/// a fresh [`RequestBuilder`] for `<base_url>/<path>`, pre-loaded with the
/// configured default headers and bearer token. Builders share the client's
/// transport.
///
/// # Example
///
/// ```rust,ignore
/// use postgrest_builder::{BaseUrl, PostgrestClient, PostgrestConfig};
///
/// let config = PostgrestConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:3000")?)
///     .build()?;
/// let client = PostgrestClient::new(config)?;
///
/// let todos = client.from("todos").select("id,title").eq("done", false).await?;
/// ```
#[derive(Clone)]
pub struct PostgrestClient {
    config: PostgrestConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for PostgrestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostgrestClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// Verify PostgrestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PostgrestClient>();
};

impl PostgrestClient {
    /// Creates a client backed by an [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the HTTP client cannot be created.
    pub fn new(config: PostgrestConfig) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(config.user_agent_prefix())?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends every request through `transport`.
    #[must_use]
    pub fn with_transport(config: PostgrestConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &PostgrestConfig {
        &self.config
    }

    /// Starts a `GET` request against the table or view `table`.
    #[must_use]
    pub fn from(&self, table: &str) -> RequestBuilder {
        self.request(HttpMethod::Get, table)
    }

    /// Starts a request with an arbitrary method against `path`.
    #[must_use]
    pub fn request(&self, method: HttpMethod, path: &str) -> RequestBuilder {
        let url = self.config.base_url().join(path);
        let mut builder = RequestBuilder::new(method, url, Arc::clone(&self.transport));

        for (name, value) in self.config.default_headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(token) = self.config.bearer_token() {
            builder = builder.auth(token);
        }

        builder
    }
}
