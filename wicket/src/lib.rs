//! # wicket - Path-Based Page Dispatch
//!
//! `wicket` maps an incoming request path to a page handler contributed by
//! one of several independently-loaded extensions, falling back to an
//! explicit not-found outcome when no handler matches.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wicket::{PageRequest, PathRouter, RegistryBuilder, Router, StaticPages};
//!
//! let registry = RegistryBuilder::new()
//!     .page("survey/view", |request: PageRequest| async move {
//!         format!("survey {}", request.param("id").unwrap_or("?"))
//!     })?
//!     .build();
//!
//! let router = PathRouter::new(StaticPages::new(registry));
//! let outcome = router.dispatch(&PageRequest::from_query("q=survey/view&id=7")).await?;
//! assert!(outcome.is_dispatched());
//! ```
//!
//! ## Routing Rules
//!
//! Matching is exact-string and single-key: no prefixes, no wildcards, no
//! priorities. A request resolves to at most one handler; an absent or
//! empty path, a missing registry, an unknown path, and a stale binding all
//! fold into the same [`Outcome::NotFound`]. The registry is re-fetched
//! from the provider on every request, never cached.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use wicket_core::{
    // Errors
    BoxError,
    // Handler
    DynPageHandler,
    IntoPageResponse,
    // Routing decision
    Outcome,
    PATH_PARAM,
    PageHandler,
    // Request / Response
    PageRequest,
    PageResponse,
    RegistryError,
    Router,
};

pub use wicket_std::{
    binding::PageBinding,
    extension::{Extension, ExtensionSet},
    fallback::{NOT_FOUND_PARAM, RedirectFallback},
    provider::{PageProvider, StaticPages},
    registry::{PageRegistry, RegistryBuilder},
    router::PathRouter,
};

/// Extension discovery support (feature `inventory`).
#[cfg(feature = "inventory")]
pub mod discover {
    pub use wicket_std::discover::{DiscoveredExtensions, ExtensionRegistration};
}

/// Testing utilities.
pub mod testing {
    pub use wicket_std::testing::{CountingHandler, FailingHandler, RecordingHandler};
}

/// Prelude module - common imports for Wicket.
///
/// # Usage
///
/// ```rust,ignore
/// use wicket::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Extension, Outcome, PageBinding, PageHandler, PageProvider, PageRequest,
        PageResponse, PathRouter, RegistryBuilder, Router,
    };
}

#[cfg(feature = "inventory")]
pub use inventory;
