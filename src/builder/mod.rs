//! The fluent PostgREST request builder.
//!
//! A [`RequestBuilder`] accumulates headers and query state through chained
//! calls, then serializes that state into one HTTP request on terminal
//! execution.
//!
//! # Serialization
//!
//! The final URL is `path`, then `?` plus the verbatim fragments joined by
//! `&`, then the percent-encoded keyed map (prefixed with `?` if no
//! fragments were written, `&` otherwise). `Accept` is appended last:
//! `application/vnd.pgrst.object+json` in single-row mode, otherwise
//! `application/json`.
//!
//! # Example
//!
//! ```rust,ignore
//! let response = client
//!     .from("todos")
//!     .select("id, title, done")
//!     .eq("done", false)
//!     .order("id", true, false)
//!     .range(Some(0), Some(9))
//!     .await?;
//!
//! println!("page of {:?} rows", response.full_length);
//! ```

mod filter;
mod query;
mod response;

pub use filter::{FilterOperator, FilterValue, ParseFilterOperatorError};
pub use query::{QueryInput, QueryMap};
pub use response::ApiResponse;

use std::fmt;
use std::fmt::Display;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use crate::clients::{HttpMethod, HttpRequest, RequestError, Transport};

/// `Accept` value requesting a JSON array of rows.
pub const ACCEPT_JSON: &str = "application/json";

/// `Accept` value requesting exactly one JSON object.
pub const ACCEPT_SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

/// Accumulates the state of a single PostgREST request.
///
/// Configuration methods consume and return the builder so calls chain.
/// Terminal execution ([`end`](Self::end), [`then`](Self::then),
/// [`catch`](Self::catch), or `.await`) derives the request from the
/// accumulated state and performs one transport call per invocation.
///
/// `method` and `path` are fixed at construction. Headers are append-only;
/// single-row mode can only be switched on.
#[derive(Clone)]
pub struct RequestBuilder {
    method: HttpMethod,
    path: String,
    headers: Vec<(String, String)>,
    query_fragments: Vec<String>,
    query_map: QueryMap,
    single_row: bool,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("headers", &self.headers)
            .field("query_fragments", &self.query_fragments)
            .field("query_map", &self.query_map)
            .field("single_row", &self.single_row)
            .finish_non_exhaustive()
    }
}

// Verify RequestBuilder is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestBuilder>();
};

impl RequestBuilder {
    /// Creates a builder for `method` against the absolute URL `path`.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: Vec::new(),
            query_fragments: Vec::new(),
            query_map: QueryMap::new(),
            single_row: false,
            transport,
        }
    }

    /// Returns the HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the base path the query string is appended to.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the headers appended so far, in order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the verbatim query fragments, in order.
    #[must_use]
    pub fn query_fragments(&self) -> &[String] {
        &self.query_fragments
    }

    /// Returns the keyed query map.
    #[must_use]
    pub const fn query_map(&self) -> &QueryMap {
        &self.query_map
    }

    /// Returns `true` once [`single`](Self::single) has been called.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.single_row
    }

    /// Appends a header. Earlier headers with the same name are kept.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds query state.
    ///
    /// A string is pushed verbatim onto the fragment list; a key/value
    /// collection is merged into the keyed map, later keys overwriting
    /// earlier ones.
    #[must_use]
    pub fn query(mut self, input: impl Into<QueryInput>) -> Self {
        match input.into() {
            QueryInput::Fragment(fragment) => self.query_fragments.push(fragment),
            QueryInput::Map(entries) => self.query_map.extend(entries),
        }
        self
    }

    /// Appends `Authorization: Bearer <token>`.
    #[must_use]
    pub fn auth(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header("Authorization", value)
    }

    /// Adds an `eq.` filter for every column/value pair.
    ///
    /// Each entry becomes the keyed query entry `column = "eq." + value`.
    #[must_use]
    pub fn match_<I, K, V>(self, criteria: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        let entries: Vec<(String, String)> = criteria
            .into_iter()
            .map(|(column, value)| (column.into(), format!("eq.{value}")))
            .collect();
        self.query(QueryInput::Map(entries))
    }

    /// Sets the `select` column list with all whitespace removed.
    ///
    /// An empty string leaves the query untouched.
    #[must_use]
    pub fn select(self, columns: impl AsRef<str>) -> Self {
        let columns = columns.as_ref();
        if columns.is_empty() {
            return self;
        }
        let stripped: String = columns.chars().filter(|c| !c.is_whitespace()).collect();
        self.query([("select", stripped)])
    }

    /// Adds the fragment `order=<property>.<asc|desc>.<nullsfirst|nullslast>`.
    ///
    /// `ascending = false` sorts descending.
    #[must_use]
    pub fn order(self, property: &str, ascending: bool, nulls_first: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        let nulls = if nulls_first { "nullsfirst" } else { "nullslast" };
        self.query(format!("order={property}.{direction}.{nulls}"))
    }

    /// Orders by `property` with both flags unset: descending, nulls last.
    #[must_use]
    pub fn order_by(self, property: &str) -> Self {
        self.order(property, false, false)
    }

    /// Appends `Range-Unit: items` and `Range: <from>-<to>`.
    ///
    /// A missing `from` is `0`; a missing `to` leaves the range open-ended.
    /// Only `None` is missing: `Some(0)` is sent as `0`, so
    /// `range(Some(0), Some(0))` selects the first row.
    /// Calling this twice sends two `Range` headers.
    #[must_use]
    pub fn range(self, from: Option<u64>, to: Option<u64>) -> Self {
        let from = from.unwrap_or(0);
        let to = to.map(|to| to.to_string()).unwrap_or_default();
        self.header("Range-Unit", "items")
            .header("Range", format!("{from}-{to}"))
    }

    /// Requests a single object instead of an array.
    #[must_use]
    pub const fn single(mut self) -> Self {
        self.single_row = true;
        self
    }

    /// Adds the fragment `<column>=<op>.<value>`.
    #[must_use]
    pub fn filter(self, column: &str, op: FilterOperator, value: impl Into<FilterValue>) -> Self {
        let fragment = op.format(column, &value.into());
        self.query(fragment)
    }

    /// `<column>=eq.<value>`
    #[must_use]
    pub fn eq(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Eq, value)
    }

    /// `<column>=gt.<value>`
    #[must_use]
    pub fn gt(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Gt, value)
    }

    /// `<column>=lt.<value>`
    #[must_use]
    pub fn lt(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Lt, value)
    }

    /// `<column>=gte.<value>`
    #[must_use]
    pub fn gte(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Gte, value)
    }

    /// `<column>=lte.<value>`
    #[must_use]
    pub fn lte(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Lte, value)
    }

    /// `<column>=like.<pattern>`
    #[must_use]
    pub fn like(self, column: &str, pattern: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Like, pattern)
    }

    /// `<column>=ilike.<pattern>`
    #[must_use]
    pub fn ilike(self, column: &str, pattern: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Ilike, pattern)
    }

    /// `<column>=is.<value>`
    #[must_use]
    pub fn is(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Is, value)
    }

    /// `<column>=in.<v1>,<v2>,...`
    #[must_use]
    pub fn in_(self, column: &str, values: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::In, values)
    }

    /// `<column>=not.<value>`
    #[must_use]
    pub fn not(self, column: &str, value: impl Into<FilterValue>) -> Self {
        self.filter(column, FilterOperator::Not, value)
    }

    /// Returns the final URL without performing any I/O.
    #[must_use]
    pub fn url(&self) -> String {
        let mut url = self.path.clone();

        if !self.query_fragments.is_empty() {
            url.push('?');
            url.push_str(&self.query_fragments.join("&"));
        }

        if !self.query_map.is_empty() {
            url.push(if self.query_fragments.is_empty() { '?' } else { '&' });
            url.push_str(&self.query_map.encode());
        }

        url
    }

    /// Serializes the accumulated state into a request.
    ///
    /// The builder itself is not modified, so repeated calls yield the same
    /// request.
    #[must_use]
    pub fn to_request(&self) -> HttpRequest {
        let accept = if self.single_row {
            ACCEPT_SINGLE_OBJECT
        } else {
            ACCEPT_JSON
        };

        let mut headers = self.headers.clone();
        headers.push(("Accept".to_string(), accept.to_string()));

        HttpRequest {
            method: self.method,
            url: self.url(),
            headers,
        }
    }

    /// Performs the request and post-processes the response.
    ///
    /// Every call issues a fresh transport call; nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`] if the transport fails and
    /// [`RequestError::Parse`] if the body is not valid JSON. HTTP error
    /// statuses are not errors.
    pub async fn end(&self) -> Result<ApiResponse, RequestError> {
        let request = self.to_request();
        tracing::debug!(method = %request.method, url = %request.url, "Sending PostgREST request");

        let response = self.transport.execute(request).await?;
        ApiResponse::from_http(response)
    }

    /// Executes once and routes the outcome to `on_resolve` or `on_reject`.
    pub async fn then<T, R, E>(&self, on_resolve: R, on_reject: E) -> T
    where
        R: FnOnce(ApiResponse) -> T,
        E: FnOnce(RequestError) -> T,
    {
        match self.end().await {
            Ok(response) => on_resolve(response),
            Err(error) => on_reject(error),
        }
    }

    /// Executes once, recovering a failure through `on_reject`.
    pub async fn catch<E>(&self, on_reject: E) -> ApiResponse
    where
        E: FnOnce(RequestError) -> ApiResponse,
    {
        self.end().await.unwrap_or_else(on_reject)
    }
}

impl IntoFuture for RequestBuilder {
    type Output = Result<ApiResponse, RequestError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.end().await })
    }
}
