//! # wicket-std
//!
//! Standard implementations for the Wicket page routing library.
//!
//! This crate provides:
//! - **Registry**: [`PageRegistry`], [`RegistryBuilder`], [`PageBinding`]
//! - **Providers**: [`PageProvider`], [`StaticPages`], [`ExtensionSet`]
//! - **Routing**: [`PathRouter`]
//! - **Fallback**: [`RedirectFallback`] for redirect-style deployments
//! - **Discovery**: inventory-based extension registration (feature `inventory`)
//!
//! [`PageRegistry`]: registry::PageRegistry
//! [`RegistryBuilder`]: registry::RegistryBuilder
//! [`PageBinding`]: binding::PageBinding
//! [`PageProvider`]: provider::PageProvider
//! [`StaticPages`]: provider::StaticPages
//! [`ExtensionSet`]: extension::ExtensionSet
//! [`PathRouter`]: router::PathRouter
//! [`RedirectFallback`]: fallback::RedirectFallback

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use wicket_core;

// Modules
pub mod binding;
pub mod extension;
pub mod fallback;
pub mod provider;
pub mod registry;
pub mod router;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod discover;

#[cfg(feature = "inventory")]
pub use inventory;
