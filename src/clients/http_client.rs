//! The transport boundary and its reqwest-backed implementation.
//!
//! A [`Transport`] takes a fully serialized [`HttpRequest`] and returns the
//! raw [`HttpResponse`]. Request builders never talk to the network
//! directly, so tests can swap in an in-memory transport.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Executes serialized requests.
///
/// Implementations must send every header pair in order, keeping repeated
/// names as separate header lines, and must not send a request body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs one HTTP call.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the call could not be completed. An
    /// HTTP error status is not a transport error.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Transport backed by a shared [`reqwest::Client`].
///
/// `HttpTransport` is `Send + Sync` and cheap to clone.
///
/// # Example
///
/// ```rust,ignore
/// use postgrest_builder::clients::{HttpMethod, HttpRequest, HttpTransport, Transport};
///
/// let transport = HttpTransport::new(Some("MyApp/1.0"))?;
/// let response = transport
///     .execute(HttpRequest {
///         method: HttpMethod::Get,
///         url: "http://localhost:3000/todos".to_string(),
///         headers: vec![("Accept".to_string(), "application/json".to_string())],
///     })
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport with a User-Agent of the form
    /// `[<prefix> | ]PostgREST Builder v<version> | Rust <rust-version>`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Network`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(user_agent_prefix: Option<&str>) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(Self::user_agent(user_agent_prefix))
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an already configured reqwest client.
    #[must_use]
    pub const fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn user_agent(prefix: Option<&str>) -> String {
        let prefix = prefix.map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        format!("{prefix}PostgREST Builder v{SDK_VERSION} | Rust {rust_version}")
    }

    /// Parses response headers into a `HashMap` keyed by lower-cased name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::from_client(reqwest::Client::new())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut req_builder = self.client.request(request.method.into(), &request.url);

        // reqwest appends, so repeated names become separate header lines
        for (name, value) in &request.headers {
            req_builder = req_builder.header(name.as_str(), value.as_str());
        }

        let res = req_builder.send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::debug!(
            status,
            content_range = ?headers.get("content-range"),
            "Received response from {}",
            request.url
        );

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        let user_agent = HttpTransport::user_agent(None);
        assert!(user_agent.starts_with("PostgREST Builder v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let user_agent = HttpTransport::user_agent(Some("MyApp/1.0"));
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("PostgREST Builder"));
    }

    #[test]
    fn test_transport_construction() {
        assert!(HttpTransport::new(None).is_ok());
        assert!(HttpTransport::new(Some("MyApp/1.0")).is_ok());
    }

    #[test]
    fn test_parse_response_headers_groups_duplicates() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append("content-range", "0-9/42".parse().unwrap());
        headers.append("set-cookie", "a=1".parse().unwrap());
        headers.append("set-cookie", "b=2".parse().unwrap());

        let parsed = HttpTransport::parse_response_headers(&headers);
        assert_eq!(parsed.get("content-range"), Some(&vec!["0-9/42".to_string()]));
        assert_eq!(parsed.get("set-cookie").map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_response_headers_keeps_non_ascii_values() {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.append(
            "content-disposition",
            reqwest::header::HeaderValue::from_bytes(b"inline; filename=caf\xc3\xa9.json")
                .unwrap(),
        );
        headers.append(
            "x-legacy",
            reqwest::header::HeaderValue::from_bytes(b"caf\xe9").unwrap(),
        );

        let parsed = HttpTransport::parse_response_headers(&headers);
        assert_eq!(
            parsed.get("content-disposition"),
            Some(&vec!["inline; filename=caf\u{e9}.json".to_string()])
        );
        assert_eq!(parsed.get("x-legacy"), Some(&vec!["caf\u{fffd}".to_string()]));
    }

    #[test]
    fn test_transport_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpTransport>();
    }
}
