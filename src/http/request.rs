/// HTTP request methods.
///
/// The server only ever serves GET. Anything else on the request line is
/// rejected by the parser before a `Method` is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a file
    GET,
}

impl Method {
    /// Parses an HTTP method from a request line token.
    ///
    /// # Arguments
    ///
    /// * `s` - The first token of the request line (case-sensitive)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the token names a supported method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use docroot::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// assert_eq!(Method::from_str("POST"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            _ => None,
        }
    }
}

/// A request as far as this server cares about it.
///
/// Header lines are read off the wire but never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    /// The request method
    pub method: Method,
    /// The requested path with one leading `/` removed (e.g. "index.html")
    pub target: String,
    /// The raw first line, kept for diagnostics
    pub request_line: String,
}

impl ParsedRequest {
    /// Builds a request, stripping a single leading `/` from `target`.
    pub fn new(method: Method, target: &str, request_line: impl Into<String>) -> Self {
        Self {
            method,
            target: strip_leading_slash(target).to_string(),
            request_line: request_line.into(),
        }
    }
}

/// Removes exactly one leading `/`. No further normalisation happens here.
pub fn strip_leading_slash(target: &str) -> &str {
    target.strip_prefix('/').unwrap_or(target)
}
