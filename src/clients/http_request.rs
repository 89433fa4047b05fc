//! Serialized HTTP request types.
//!
//! An [`HttpRequest`] is the fully derived output of a request builder:
//! method, final URL and the ordered header list. It carries no body.

use std::fmt;

/// HTTP methods a request builder can be constructed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for reading rows.
    Get,
    /// HTTP HEAD method, used to read counts without rows.
    Head,
    /// HTTP POST method.
    Post,
    /// HTTP PATCH method.
    Patch,
    /// HTTP PUT method.
    Put,
    /// HTTP DELETE method for removing rows.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method token as sent on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Head => Self::HEAD,
            HttpMethod::Post => Self::POST,
            HttpMethod::Patch => Self::PATCH,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request ready to hand to a [`Transport`](crate::clients::Transport).
///
/// Headers are kept as an ordered list so that repeated names are sent
/// as separate header lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL including the query string.
    pub url: String,
    /// Headers in the order they were appended.
    pub headers: Vec<(String, String)>,
}

impl HttpRequest {
    /// Returns every value sent for `name`, compared case-insensitively.
    #[must_use]
    pub fn header_values(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Returns the last value sent for `name`, if any.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).last().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Head.to_string(), "HEAD");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_into_reqwest() {
        assert_eq!(reqwest::Method::from(HttpMethod::Patch), reqwest::Method::PATCH);
        assert_eq!(reqwest::Method::from(HttpMethod::Head), reqwest::Method::HEAD);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive_and_keeps_duplicates() {
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:3000/todos".to_string(),
            headers: vec![
                ("Accept".to_string(), "text/csv".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
                ("accept".to_string(), "application/json".to_string()),
            ],
        };

        assert_eq!(
            request.header_values("ACCEPT"),
            vec!["text/csv", "application/json"]
        );
        assert_eq!(request.header("Accept"), Some("application/json"));
        assert_eq!(request.header("Range"), None);
    }
}
