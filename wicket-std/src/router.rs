//! The provider-driven path router.

use crate::provider::PageProvider;
use wicket_core::{BoxError, Outcome, PageRequest, Router};

/// A router that resolves pages through a [`PageProvider`].
///
/// Each dispatch re-fetches the registry from the provider, looks the
/// request path up by exact match, and invokes the single resolved handler.
/// The router holds no cross-request state, so one value is safely shared
/// across concurrent requests.
pub struct PathRouter<P> {
    provider: P,
}

impl<P> PathRouter<P> {
    /// Create a router over the given provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Access the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Consume the router, returning the provider.
    pub fn into_inner(self) -> P {
        self.provider
    }
}

impl<P: PageProvider> Router for PathRouter<P> {
    async fn dispatch(&self, request: &PageRequest) -> Result<Outcome, BoxError> {
        // Empty path short-circuits before the lookup so a handler bound to
        // the empty key can never run.
        let Some(path) = request.path().filter(|p| !p.is_empty()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!("request carries no page path");
            return Ok(Outcome::NotFound);
        };

        let Some(pages) = self.provider.pages().filter(|p| !p.is_empty()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(path, "no pages available");
            return Ok(Outcome::NotFound);
        };

        let Some(handler) = pages.get(path).and_then(|binding| binding.resolve()) else {
            #[cfg(feature = "tracing")]
            tracing::debug!(path, "no live page bound for path");
            return Ok(Outcome::NotFound);
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(path, "dispatching page");
        let response = handler.render_dyn(request.clone()).await?;
        Ok(Outcome::Dispatched(response))
    }
}
