//! # Extension Discovery via Inventory Collection
//!
//! This module provides a provider that automatically collects extensions
//! registered via the `inventory` crate, so statically linked extensions
//! self-register without a hand-maintained [`ExtensionSet`].
//!
//! # Example
//!
//! ```rust,ignore
//! use wicket_std::discover::{DiscoveredExtensions, ExtensionRegistration};
//!
//! struct SurveyExtension;
//! impl Extension for SurveyExtension { /* ... */ }
//!
//! static SURVEY: SurveyExtension = SurveyExtension;
//! inventory::submit! {
//!     ExtensionRegistration { extension: &SURVEY }
//! }
//!
//! let router = PathRouter::new(DiscoveredExtensions::new());
//! ```
//!
//! [`ExtensionSet`]: crate::extension::ExtensionSet

use crate::{binding::PageBinding, extension::Extension, provider::PageProvider, registry::PageRegistry};
use std::collections::HashMap;

/// Registration entry for an extension in the global registry.
///
/// This struct is submitted to `inventory` for automatic collection.
pub struct ExtensionRegistration {
    /// The registered extension.
    pub extension: &'static (dyn Extension + Send + Sync),
}

inventory::collect!(ExtensionRegistration);

/// A provider that collects extensions registered via `inventory`.
///
/// Like any provider, it is queried once per request: enabled/disabled
/// state and page contributions are re-read on every snapshot, while the
/// set of registered extensions is fixed at link time.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscoveredExtensions;

impl DiscoveredExtensions {
    /// Create a provider over the globally registered extensions.
    pub fn new() -> Self {
        Self
    }

    /// The number of globally registered extensions, enabled or not.
    pub fn extension_count() -> usize {
        inventory::iter::<ExtensionRegistration>.into_iter().count()
    }
}

impl PageProvider for DiscoveredExtensions {
    fn pages(&self) -> Option<PageRegistry> {
        let mut pages: HashMap<String, PageBinding> = HashMap::new();
        for registration in inventory::iter::<ExtensionRegistration> {
            let extension = registration.extension;
            if !extension.enabled() {
                continue;
            }
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
