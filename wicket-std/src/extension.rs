//! Extension model.
//!
//! Extensions are independently-loaded contributors of page bindings. An
//! [`ExtensionSet`] assembles the registry fresh per request from the
//! extensions currently enabled, so enabling or disabling an extension
//! takes effect on the next request without touching the router.

use crate::{binding::PageBinding, provider::PageProvider, registry::PageRegistry};
use std::{collections::HashMap, sync::Arc};

/// An independently-loaded contributor of page bindings.
pub trait Extension: Send + Sync + 'static {
    /// The extension's name, for diagnostics.
    fn name(&self) -> &str;

    /// Whether the extension is currently enabled.
    ///
    /// Disabled extensions contribute no pages. Consulted on every registry
    /// snapshot, so the answer may change between requests.
    fn enabled(&self) -> bool {
        true
    }

    /// The path→binding contributions of this extension.
    fn pages(&self) -> Vec<(String, PageBinding)>;
}

/// A provider assembling the registry from a set of extensions.
///
/// On each [`pages`](PageProvider::pages) call, the contributions of all
/// enabled extensions are folded into a fresh registry. When several
/// extensions bind the same path, the last registered wins — the router
/// only ever sees one resolved binding per path.
#[derive(Clone, Default)]
pub struct ExtensionSet {
    extensions: Vec<Arc<dyn Extension>>,
}

impl ExtensionSet {
    /// Create an empty extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension, consuming the set.
    #[must_use]
    pub fn with(mut self, extension: impl Extension) -> Self {
        self.register(Arc::new(extension));
        self
    }

    /// Add a shared extension.
    pub fn register(&mut self, extension: Arc<dyn Extension>) {
        self.extensions.push(extension);
    }

    /// The number of registered extensions, enabled or not.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Check if no extensions are registered.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl PageProvider for ExtensionSet {
    fn pages(&self) -> Option<PageRegistry> {
        let mut pages: HashMap<String, PageBinding> = HashMap::new();
        for extension in self.extensions.iter().filter(|e| e.enabled()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(extension = extension.name(), "collecting pages");
            for (path, binding) in extension.pages() {
                pages.insert(path, binding);
            }
        }
        if pages.is_empty() {
            None
        } else {
            Some(PageRegistry::from(pages))
        }
    }
}
