//! Transport layer for PostgREST requests.
//!
//! # Overview
//!
//! - [`Transport`]: The pluggable "request in, response out" boundary
//! - [`HttpTransport`]: The reqwest-backed transport used by default
//! - [`HttpRequest`]: A fully serialized request (method, URL, ordered headers)
//! - [`HttpResponse`]: A raw response (status, headers, body text)
//! - [`ContentRange`]: Parsed `Content-Range` pagination header
//! - [`HttpMethod`]: Supported HTTP methods
//! - [`RequestError`] / [`TransportError`]: Errors surfaced by terminal execution
//!
//! The transport does not retry, does not interpret status codes and sends
//! no request body.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{RequestError, TransportError};
pub use http_client::{HttpTransport, Transport, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::{ContentRange, HttpResponse};
