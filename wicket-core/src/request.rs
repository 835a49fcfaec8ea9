//! Request context for page routing.
//!
//! A [`PageRequest`] is built explicitly at the serving boundary and passed
//! by reference through the router into the matched handler. Handlers read
//! everything they need from it; there is no ambient request state.

use std::collections::HashMap;

/// Query parameter conventionally carrying the page path.
///
/// Front-ends that rewrite pretty URLs translate the rewritten segment into
/// this parameter before routing runs.
pub const PATH_PARAM: &str = "q";

/// The inbound request consumed by the router and handlers.
///
/// Carries the path identifier used for registry lookup, the remaining
/// query parameters, and optionally the original request URI (used only by
/// redirect-style not-found fallbacks to reconstruct the URL).
///
/// # Example
///
/// ```
/// use wicket_core::PageRequest;
///
/// let request = PageRequest::new("survey/view").with_param("id", "7");
/// assert_eq!(request.path(), Some("survey/view"));
/// assert_eq!(request.param("id"), Some("7"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PageRequest {
    path: Option<String>,
    query: HashMap<String, String>,
    uri: Option<String>,
}

impl PageRequest {
    /// Create a request for the given page path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            query: HashMap::new(),
            uri: None,
        }
    }

    /// Create a request with no path identifier.
    ///
    /// Such a request always routes to `NotFound`; it exists so callers can
    /// still run the fallback machinery for path-less requests.
    pub fn without_path() -> Self {
        Self::default()
    }

    /// Parse a request from a raw query string (without the leading `?`).
    ///
    /// The page path is taken from the [`PATH_PARAM`] pair; all other pairs
    /// become query parameters. Values are kept as-is — percent-decoding is
    /// the front-end's job. Later duplicates of a key override earlier ones.
    ///
    /// # Example
    ///
    /// ```
    /// use wicket_core::PageRequest;
    ///
    /// let request = PageRequest::from_query("q=survey/view&id=7");
    /// assert_eq!(request.path(), Some("survey/view"));
    /// assert_eq!(request.param("id"), Some("7"));
    /// ```
    pub fn from_query(raw: &str) -> Self {
        let mut path = None;
        let mut query = HashMap::new();
        for pair in raw.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = match pair.split_once('=') {
                Some((k, v)) => (k, v),
                None => (pair, ""),
            };
            if key == PATH_PARAM {
                path = Some(value.to_string());
            } else {
                query.insert(key.to_string(), value.to_string());
            }
        }
        Self {
            path,
            query,
            uri: None,
        }
    }

    /// Add a query parameter.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Record the original request URI.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// The path identifier to match against the registry, if any.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Look up a single query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// All query parameters.
    pub fn query(&self) -> &HashMap<String, String> {
        &self.query
    }

    /// The original request URI, if the boundary recorded one.
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::PageRequest;

    #[test]
    fn test_from_query_extracts_path() {
        let request = PageRequest::from_query("q=survey/view&id=7&tab=2");
        assert_eq!(request.path(), Some("survey/view"));
        assert_eq!(request.param("id"), Some("7"));
        assert_eq!(request.param("tab"), Some("2"));
        assert_eq!(request.param("q"), None);
    }

    #[test]
    fn test_from_query_without_path() {
        let request = PageRequest::from_query("id=7");
        assert_eq!(request.path(), None);
        assert_eq!(request.param("id"), Some("7"));
    }

    #[test]
    fn test_from_query_valueless_pair() {
        let request = PageRequest::from_query("not_found&q=home");
        assert_eq!(request.path(), Some("home"));
        assert_eq!(request.param("not_found"), Some(""));
    }

    #[test]
    fn test_from_query_empty() {
        let request = PageRequest::from_query("");
        assert_eq!(request.path(), None);
        assert!(request.query().is_empty());
    }
}
