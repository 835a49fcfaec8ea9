//! The path→handler registry and its builder.

use crate::binding::PageBinding;
use std::collections::HashMap;
use wicket_core::{PageHandler, RegistryError};

/// A snapshot of path→handler bindings for one request.
///
/// Keys are unique and matched by exact string comparison; insertion order
/// is irrelevant. Providers assemble a fresh registry per request; the
/// router never caches or mutates one.
#[derive(Clone, Debug, Default)]
pub struct PageRegistry {
    pages: HashMap<String, PageBinding>,
}

impl PageRegistry {
    /// Look up the binding for a path (exact match).
    pub fn get(&self, path: &str) -> Option<&PageBinding> {
        self.pages.get(path)
    }

    /// Check if a path is bound.
    pub fn contains(&self, path: &str) -> bool {
        self.pages.contains_key(path)
    }

    /// The number of bound paths.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Check if the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over the bound paths.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }
}

impl From<HashMap<String, PageBinding>> for PageRegistry {
    fn from(pages: HashMap<String, PageBinding>) -> Self {
        Self { pages }
    }
}

/// Builder for [`PageRegistry`].
///
/// Rejects duplicate paths unless [`last_wins`](RegistryBuilder::last_wins)
/// is selected. Conflict resolution is a provider concern — the router only
/// ever sees one resolved binding per path.
#[derive(Default)]
pub struct RegistryBuilder {
    pages: HashMap<String, PageBinding>,
    last_wins: bool,
}

impl RegistryBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow duplicate paths; later bindings override earlier ones.
    #[must_use]
    pub fn last_wins(mut self) -> Self {
        self.last_wins = true;
        self
    }

    /// Bind a path to an existing binding.
    pub fn bind(
        mut self,
        path: impl Into<String>,
        binding: PageBinding,
    ) -> Result<Self, RegistryError> {
        let path = path.into();
        if !self.last_wins && self.pages.contains_key(&path) {
            return Err(RegistryError::DuplicatePath(path));
        }
        self.pages.insert(path, binding);
        Ok(self)
    }

    /// Bind a path to a handler, taking ownership of it.
    pub fn page<H: PageHandler>(
        self,
        path: impl Into<String>,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.bind(path, PageBinding::owned(handler))
    }

    /// Build the registry.
    pub fn build(self) -> PageRegistry {
        PageRegistry { pages: self.pages }
    }
}

#[cfg(test)]
mod tests {
    use super::{PageBinding, RegistryBuilder};
    use wicket_core::{PageRequest, RegistryError};

    async fn view(_request: PageRequest) -> &'static str {
        "view"
    }

    async fn edit(_request: PageRequest) -> &'static str {
        "edit"
    }

    #[test]
    fn test_basic_lookup() {
        let registry = RegistryBuilder::new()
            .page("survey/view", view)
            .unwrap()
            .page("survey/edit", edit)
            .unwrap()
            .build();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("survey/view"));
        assert!(registry.get("survey/edit").is_some());
        assert!(registry.get("survey/delete").is_none());
    }

    #[test]
    fn test_duplicate_path_error() {
        let builder = RegistryBuilder::new().page("survey/view", view).unwrap();
        let result = builder.bind("survey/view", PageBinding::owned(edit));
        assert!(matches!(result, Err(RegistryError::DuplicatePath(_))));
    }

    #[test]
    fn test_last_wins() {
        let registry = RegistryBuilder::new()
            .last_wins()
            .page("survey/view", view)
            .unwrap()
            .page("survey/view", edit)
            .unwrap()
            .build();

        assert_eq!(registry.len(), 1);
        assert!(registry.get("survey/view").unwrap().is_live());
    }
}
