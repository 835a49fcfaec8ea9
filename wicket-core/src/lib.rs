//! # wicket-core
//!
//! Core traits and types for the Wicket page routing library.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! extensions that contribute pages but don't need the full `wicket-std`
//! implementation.
//!
//! # Routing Model
//!
//! Wicket dispatches one request to at most one page handler:
//!
//! 1. A [`PageRequest`] carries the path identifier and query parameters,
//!    built explicitly at the boundary — handlers never read ambient
//!    request globals.
//! 2. A [`Router`] looks the path up in a registry assembled fresh for the
//!    request and either invokes the matched handler or reports
//!    [`Outcome::NotFound`].
//! 3. The invoked [`PageHandler`] owns the rest of the response lifecycle;
//!    the router carries its [`PageResponse`] back without inspecting it.
//!
//! # Error Types
//!
//! - [`BoxError`] - Dynamic error type for handler faults
//! - [`RegistryError`] - Registry construction errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
mod outcome;
mod request;
mod response;
mod router;

// Re-exports
pub use error::{BoxError, RegistryError};
pub use handler::{DynPageHandler, PageHandler};
pub use outcome::Outcome;
pub use request::{PATH_PARAM, PageRequest};
pub use response::{IntoPageResponse, PageResponse};
pub use router::Router;
