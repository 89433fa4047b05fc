//! Error types for request execution.
//!
//! # Error Handling
//!
//! - [`TransportError`]: The underlying transport could not complete the call
//! - [`RequestError`]: Unified error returned by terminal execution
//!
//! HTTP status codes are never turned into errors here: a PostgREST error
//! payload with a 4xx/5xx status resolves as a normal response.
//!
//! # Example
//!
//! ```rust,ignore
//! use postgrest_builder::RequestError;
//!
//! match client.from("todos").select("id,title").await {
//!     Ok(response) => println!("{} rows", response.body),
//!     Err(RequestError::Transport(e)) => println!("Transport failed: {e}"),
//!     Err(RequestError::Parse(e)) => println!("Body was not JSON: {e}"),
//!     Err(RequestError::Deserialize(e)) => println!("Unexpected shape: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error raised by a [`Transport`](crate::clients::Transport) implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error from the reqwest-backed transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Failure reported by a custom transport.
    #[error("Transport error: {0}")]
    Other(String),
}

/// Unified error type for terminal execution of a request builder.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The transport call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not valid JSON.
    #[error("Failed to parse response body as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The JSON body does not match the requested Rust type.
    #[error("Failed to deserialize response body: {0}")]
    Deserialize(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_other_message() {
        let error = TransportError::Other("connection reset".to_string());
        assert_eq!(error.to_string(), "Transport error: connection reset");
    }

    #[test]
    fn test_request_error_is_transparent_over_transport() {
        let error = RequestError::from(TransportError::Other("boom".to_string()));
        assert_eq!(error.to_string(), "Transport error: boom");
        assert!(matches!(error, RequestError::Transport(_)));
    }

    #[test]
    fn test_parse_error_from_serde_json() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = RequestError::from(source);
        assert!(matches!(error, RequestError::Parse(_)));
        assert!(error.to_string().starts_with("Failed to parse response body"));
    }

    #[test]
    fn test_error_types_implement_std_error() {
        let transport: &dyn std::error::Error = &TransportError::Other("x".to_string());
        let _ = transport;

        let request: &dyn std::error::Error =
            &RequestError::Transport(TransportError::Other("x".to_string()));
        assert!(request.source().is_none());
    }
}
