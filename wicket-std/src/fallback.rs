//! Redirect-style not-found fallback.
//!
//! The primary not-found signal is the explicit `Outcome::NotFound`
//! returned to the caller. Deployments that signal not-found by reissuing
//! the original URL with a marker parameter can keep that protocol through
//! [`RedirectFallback`]: the marker is checked before re-routing, so a
//! request already carrying it is never dispatched through the router a
//! second time.

use wicket_core::PageRequest;

/// Query parameter marking a request as the second pass of a redirect
/// fallback.
pub const NOT_FOUND_PARAM: &str = "not_found";

/// Caller-side helper for redirect-based not-found signaling.
#[derive(Clone, Debug)]
pub struct RedirectFallback {
    marker: String,
}

impl Default for RedirectFallback {
    fn default() -> Self {
        Self {
            marker: NOT_FOUND_PARAM.to_string(),
        }
    }
}

impl RedirectFallback {
    /// Create a fallback using the standard [`NOT_FOUND_PARAM`] marker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fallback using a custom marker parameter.
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Check whether the request already carries the loop-guard marker.
    ///
    /// A marked request is on its second pass and must not be re-dispatched.
    pub fn is_marked(&self, request: &PageRequest) -> bool {
        request
            .param(&self.marker)
            .is_some_and(|value| !value.is_empty())
    }

    /// The URL to reissue the request at, with the marker appended.
    ///
    /// Returns `None` for a marked request (loop guard) and for requests
    /// whose boundary recorded no original URI. The marker joins with `?`
    /// or `&` depending on whether the URI already carries a query string.
    pub fn redirect_target(&self, request: &PageRequest) -> Option<String> {
        if self.is_marked(request) {
            return None;
        }
        let uri = request.uri()?;
        let separator = if uri.contains('?') { '&' } else { '?' };
        Some(format!("{uri}{separator}{}=1", self.marker))
    }
}

#[cfg(test)]
mod tests {
    use super::RedirectFallback;
    use wicket_core::PageRequest;

    #[test]
    fn test_redirect_appends_marker() {
        let fallback = RedirectFallback::new();
        let request = PageRequest::new("missing/page").with_uri("/app/router?q=missing/page");
        assert_eq!(
            fallback.redirect_target(&request).as_deref(),
            Some("/app/router?q=missing/page&not_found=1")
        );
    }

    #[test]
    fn test_redirect_without_query_string() {
        let fallback = RedirectFallback::new();
        let request = PageRequest::new("missing/page").with_uri("/app/missing/page");
        assert_eq!(
            fallback.redirect_target(&request).as_deref(),
            Some("/app/missing/page?not_found=1")
        );
    }

    #[test]
    fn test_marked_request_is_not_redirected() {
        let fallback = RedirectFallback::new();
        let request = PageRequest::new("missing/page")
            .with_uri("/app/router?q=missing/page&not_found=1")
            .with_param("not_found", "1");
        assert!(fallback.is_marked(&request));
        assert_eq!(fallback.redirect_target(&request), None);
    }

    #[test]
    fn test_empty_marker_value_does_not_guard() {
        let fallback = RedirectFallback::new();
        let request = PageRequest::from_query("q=missing/page&not_found")
            .with_uri("/app/router?q=missing/page&not_found");
        assert!(!fallback.is_marked(&request));
        assert!(fallback.redirect_target(&request).is_some());
    }

    #[test]
    fn test_no_uri_no_redirect() {
        let fallback = RedirectFallback::new();
        let request = PageRequest::new("missing/page");
        assert_eq!(fallback.redirect_target(&request), None);
    }

    #[test]
    fn test_custom_marker() {
        let fallback = RedirectFallback::with_marker("missed");
        let request = PageRequest::new("p").with_uri("/r?q=p");
        assert_eq!(
            fallback.redirect_target(&request).as_deref(),
            Some("/r?q=p&missed=1")
        );
    }
}
