//! Raw HTTP response types.
//!
//! [`HttpResponse`] is what a transport hands back: status, headers and the
//! unparsed body text. [`ContentRange`] parses PostgREST's pagination header.

use std::collections::HashMap;

/// Pagination metadata parsed from the `Content-Range` response header.
///
/// The accepted format is exactly `<start>-<end>/<total>` with three
/// non-negative base-10 integers. PostgREST also emits shapes such as
/// `*/0` or `0-9/*`; those do not parse.
///
/// # Example
///
/// ```rust
/// use postgrest_builder::clients::ContentRange;
///
/// let range = ContentRange::parse("0-9/42").unwrap();
/// assert_eq!(range.start, 0);
/// assert_eq!(range.end, 9);
/// assert_eq!(range.total, 42);
///
/// assert!(ContentRange::parse("0-9/*").is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentRange {
    /// Index of the first row returned.
    pub start: u64,
    /// Index of the last row returned.
    pub end: u64,
    /// Total number of rows matching the query.
    pub total: u64,
}

impl ContentRange {
    /// Parses the header value.
    ///
    /// # Returns
    ///
    /// `Some(ContentRange)` if the value has the exact three-integer shape,
    /// `None` otherwise.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (range, total) = header_value.split_once('/')?;
        let (start, end) = range.split_once('-')?;

        Some(Self {
            start: parse_unsigned(start)?,
            end: parse_unsigned(end)?,
            total: parse_unsigned(total)?,
        })
    }
}

// `u64::from_str` accepts a leading '+', which the header grammar does not.
fn parse_unsigned(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// A raw HTTP response returned by a transport.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers keyed by lower-cased name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The unparsed response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response, lower-casing header names.
    #[must_use]
    pub fn new<I, K, V>(status: u16, headers: I, body: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            map.entry(name.as_ref().to_ascii_lowercase())
                .or_default()
                .push(value.into());
        }

        Self {
            status,
            headers: map,
            body: body.into(),
        }
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
    #[must_use]
    pub fn content_range(&self) -> Option<ContentRange> {
        self.header("content-range").and_then(ContentRange::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_range_parses_three_integers() {
        assert_eq!(
            ContentRange::parse("0-9/42"),
            Some(ContentRange {
                start: 0,
                end: 9,
                total: 42
            })
        );
        assert_eq!(ContentRange::parse("100-199/1000").map(|r| r.total), Some(1000));
    }

    #[test]
    fn test_content_range_rejects_malformed_values() {
        assert!(ContentRange::parse("").is_none());
        assert!(ContentRange::parse("*/42").is_none());
        assert!(ContentRange::parse("0-9/*").is_none());
        assert!(ContentRange::parse("0-9").is_none());
        assert!(ContentRange::parse("0-9/42/1").is_none());
        assert!(ContentRange::parse("+0-9/42").is_none());
        assert!(ContentRange::parse("0--9/42").is_none());
        assert!(ContentRange::parse(" 0-9/42").is_none());
        assert!(ContentRange::parse("items 0-9/42").is_none());
        assert!(ContentRange::parse("0-9/99999999999999999999999").is_none());
    }

    #[test]
    fn test_response_headers_are_case_insensitive() {
        let response = HttpResponse::new(
            206,
            [("Content-Range", "0-1/2"), ("X-Extra", "a"), ("x-extra", "b")],
            "[]",
        );

        assert_eq!(response.header("content-range"), Some("0-1/2"));
        assert_eq!(response.header("CONTENT-RANGE"), Some("0-1/2"));
        assert_eq!(response.headers.get("x-extra").map(Vec::len), Some(2));
        assert_eq!(response.content_range().map(|r| r.total), Some(2));
    }

    #[test]
    fn test_response_without_content_range() {
        let response = HttpResponse::new(200, Vec::<(String, String)>::new(), "{}");
        assert!(response.header("content-range").is_none());
        assert!(response.content_range().is_none());
    }
}
