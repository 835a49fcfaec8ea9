use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use wicket::{Extension, PageBinding};

// ============================================================================
// Test Extensions
// ============================================================================

/// An extension with a fixed page list and a runtime enable toggle.
pub struct PagesExtension {
    pub name: &'static str,
    pub enabled: Arc<AtomicBool>,
    pub pages: Vec<(String, PageBinding)>,
}

impl PagesExtension {
    pub fn new(name: &'static str, pages: Vec<(String, PageBinding)>) -> Self {
        Self {
            name,
            enabled: Arc::new(AtomicBool::new(true)),
            pages,
        }
    }

    /// Handle to flip the extension on and off after registration.
    pub fn toggle(&self) -> Arc<AtomicBool> {
        self.enabled.clone()
    }
}

impl Extension for PagesExtension {
    fn name(&self) -> &str {
        self.name
    }

    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn pages(&self) -> Vec<(String, PageBinding)> {
        self.pages.clone()
    }
}

/// One owned page binding under the given path.
pub fn page(path: &str, body: &'static str) -> (String, PageBinding) {
    (
        path.to_string(),
        PageBinding::owned(move |_request: wicket::PageRequest| async move { body }),
    )
}
