//! Post-processing of raw responses.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::clients::{ContentRange, HttpResponse, RequestError};

/// The resolved result of executing a [`RequestBuilder`](crate::RequestBuilder).
///
/// The status code is not interpreted: PostgREST error payloads arrive here
/// like any other body. Use [`ApiResponse::is_ok`] to check for success.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lower-cased name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body.
    pub body: Value,
    /// Total row count reported by `Content-Range`.
    ///
    /// Only set when the body is a JSON array and the header has the exact
    /// `<start>-<end>/<total>` shape.
    pub full_length: Option<u64>,
}

impl ApiResponse {
    /// Parses the body and attaches the pagination total when applicable.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Parse`] if the body is not valid JSON.
    pub fn from_http(response: HttpResponse) -> Result<Self, RequestError> {
        let body: Value = serde_json::from_str(&response.body)?;

        let full_length = match (&body, response.header("content-range")) {
            (Value::Array(_), Some(header)) => {
                let total = response.content_range().map(|range| range.total);
                if total.is_none() {
                    tracing::trace!(content_range = header, "Ignoring malformed Content-Range");
                }
                total
            }
            (_, Some(header)) => {
                tracing::trace!(
                    content_range = header,
                    "Ignoring Content-Range on non-array body"
                );
                None
            }
            (_, None) => None,
        };

        Ok(Self {
            status: response.status,
            headers: response.headers,
            body,
            full_length,
        })
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of the header `name`, compared case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the parsed `Content-Range` header, if present and well-formed.
    ///
    /// Unlike [`full_length`](Self::full_length) this does not depend on the
    /// body shape, so the row window of a single-object read is visible too.
    #[must_use]
    pub fn content_range(&self) -> Option<ContentRange> {
        self.header("content-range").and_then(ContentRange::parse)
    }

    /// Deserializes the body as a list of rows without consuming the response.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Deserialize`] if the body is not an array of `T`.
    pub fn rows<T: DeserializeOwned>(&self) -> Result<Vec<T>, RequestError> {
        Vec::<T>::deserialize(&self.body).map_err(RequestError::Deserialize)
    }

    /// Consumes the response and deserializes the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Deserialize`] if the body does not match `T`.
    pub fn into_body<T: DeserializeOwned>(self) -> Result<T, RequestError> {
        serde_json::from_value(self.body).map_err(RequestError::Deserialize)
    }
}
