//! Registry providers.
//!
//! A provider is the router's only collaborator: a no-argument operation
//! returning the current path→handler registry. Providers are queried once
//! per request, so registry contents may change freely between requests
//! without touching the router.

use crate::registry::PageRegistry;

/// Source of the per-request registry snapshot.
///
/// `None` covers "no extensions enabled", "none expose pages", and
/// "provider unavailable" alike — implementations map their own failures to
/// `None`, and the router folds every absent or empty result into
/// `NotFound`.
pub trait PageProvider: Send + Sync {
    /// Produce the current registry snapshot.
    fn pages(&self) -> Option<PageRegistry>;
}

// Blanket impl for closures
impl<F> PageProvider for F
where
    F: Fn() -> Option<PageRegistry> + Send + Sync,
{
    fn pages(&self) -> Option<PageRegistry> {
        (self)()
    }
}

/// A provider serving a fixed registry snapshot.
///
/// Useful for tests and for deployments whose page set is known at startup.
#[derive(Clone, Debug, Default)]
pub struct StaticPages {
    registry: PageRegistry,
}

impl StaticPages {
    /// Create a provider serving the given registry.
    pub fn new(registry: PageRegistry) -> Self {
        Self { registry }
    }
}

impl PageProvider for StaticPages {
    fn pages(&self) -> Option<PageRegistry> {
        if self.registry.is_empty() {
            None
        } else {
            Some(self.registry.clone())
        }
    }
}
