//! # PostgREST Request Builder
//!
//! A fluent request builder for PostgREST-style HTTP APIs. Configuration
//! calls accumulate method, path, headers and query state; terminal
//! execution serializes that state into one HTTP request, issues it, and
//! post-processes the JSON response (including the total row count from a
//! `Content-Range` header).
//!
//! ## Overview
//!
//! - [`RequestBuilder`]: chainable request state with terminal execution
//! - [`FilterOperator`]: the fixed table of filter operators
//! - [`ApiResponse`]: the parsed body plus `full_length` pagination metadata
//! - [`PostgrestClient`] / [`PostgrestConfig`]: mint builders for one server
//! - [`clients::Transport`]: the pluggable HTTP boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use postgrest_builder::{BaseUrl, PostgrestClient, PostgrestConfig};
//!
//! let config = PostgrestConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
//!     .build()
//!     .unwrap();
//! let client = PostgrestClient::new(config).unwrap();
//!
//! let request = client
//!     .from("users")
//!     .select("id, name")
//!     .order("name", true, false)
//!     .to_request();
//!
//! assert_eq!(
//!     request.url,
//!     "http://localhost:3000/users?order=name.asc.nullslast&select=id%2Cname"
//! );
//! ```
//!
//! ## Executing Requests
//!
//! ```rust,ignore
//! // Await the builder directly
//! let page = client.from("users").range(Some(0), Some(24)).await?;
//! println!("{} users in total", page.full_length.unwrap_or_default());
//!
//! // Or route the outcome through callbacks
//! let count = client
//!     .from("users")
//!     .then(|res| res.full_length, |_| None)
//!     .await;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **No status interpretation**: PostgREST error bodies resolve like any other body
//! - **No retries or caching**: every execution issues exactly one transport call
//! - **Thread-safe**: all public types are `Send + Sync`

mod builder;
mod client;
pub mod clients;
pub mod config;
pub mod error;

pub use builder::{
    ApiResponse, FilterOperator, FilterValue, ParseFilterOperatorError, QueryInput, QueryMap,
    RequestBuilder, ACCEPT_JSON, ACCEPT_SINGLE_OBJECT,
};
pub use client::PostgrestClient;
pub use config::{BaseUrl, BearerToken, PostgrestConfig, PostgrestConfigBuilder};
pub use error::ConfigError;

// Re-export transport types
pub use clients::{
    ContentRange, HttpMethod, HttpRequest, HttpResponse, HttpTransport, RequestError, Transport,
    TransportError,
};
