//! Handler bindings for registry entries.
//!
//! A registry maps each path to a [`PageBinding`] rather than to a handler
//! directly. The binding either owns its handler or holds a weak reference
//! tied to the extension that registered it, so a path can go stale between
//! registration and dispatch when its extension is unloaded.

use std::sync::{Arc, Weak};
use wicket_core::{DynPageHandler, PageHandler};

/// A reference to the handler bound to one path identifier.
///
/// Bindings are read-only to the router and held only for the duration of
/// one request. [`resolve`](PageBinding::resolve) is the invocability
/// check: an owned binding always resolves; a shared binding resolves only
/// while the contributing extension still holds the handler alive.
#[derive(Clone)]
pub struct PageBinding {
    handler: BindingRef,
}

#[derive(Clone)]
enum BindingRef {
    Owned(Arc<dyn DynPageHandler>),
    Shared(Weak<dyn DynPageHandler>),
}

impl PageBinding {
    /// Bind a handler owned by the registry entry itself.
    pub fn owned<H: PageHandler>(handler: H) -> Self {
        Self::from_arc(Arc::new(handler))
    }

    /// Bind an already shared handler, keeping it alive through the binding.
    pub fn from_arc(handler: Arc<dyn DynPageHandler>) -> Self {
        Self {
            handler: BindingRef::Owned(handler),
        }
    }

    /// Bind a handler whose lifetime stays with the contributing extension.
    ///
    /// The binding does not keep the handler alive: once the extension
    /// drops its `Arc` (e.g. it is unloaded), the binding is stale and the
    /// bound path routes to `NotFound`.
    pub fn shared(handler: &Arc<dyn DynPageHandler>) -> Self {
        Self {
            handler: BindingRef::Shared(Arc::downgrade(handler)),
        }
    }

    /// Resolve the binding to a live handler, if it still has one.
    pub fn resolve(&self) -> Option<Arc<dyn DynPageHandler>> {
        match &self.handler {
            BindingRef::Owned(handler) => Some(Arc::clone(handler)),
            BindingRef::Shared(handler) => handler.upgrade(),
        }
    }

    /// Returns true if [`resolve`](PageBinding::resolve) would succeed.
    pub fn is_live(&self) -> bool {
        match &self.handler {
            BindingRef::Owned(_) => true,
            BindingRef::Shared(handler) => handler.strong_count() > 0,
        }
    }
}

impl std::fmt::Debug for PageBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.handler {
            BindingRef::Owned(_) => f.write_str("PageBinding::Owned"),
            BindingRef::Shared(handler) => {
                if handler.strong_count() > 0 {
                    f.write_str("PageBinding::Shared(live)")
                } else {
                    f.write_str("PageBinding::Shared(stale)")
                }
            }
        }
    }
}
