//! The dispatch decision interface.
//!
//! A router accepts a request and either invokes the single matched page
//! handler or reports [`Outcome::NotFound`]. It holds no cross-request
//! state: implementations re-fetch their registry per request, so one
//! router value is safely shared across concurrent requests.

use crate::{error::BoxError, outcome::Outcome, request::PageRequest};
use std::future::Future;

/// The path routing interface.
///
/// `dispatch` resolves the request path against a registry snapshot and
/// returns the terminal [`Outcome`]. The `Err` arm exists solely for
/// faults raised by an invoked handler, which propagate unchanged; none of
/// the not-found conditions ever produce an error.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot route page requests",
    label = "missing `Router` implementation",
    note = "Implement `Router` to make the per-request dispatch decision."
)]
pub trait Router: Send + Sync {
    /// Resolve and, on a match, invoke the handler for this request.
    fn dispatch(
        &self,
        request: &PageRequest,
    ) -> impl Future<Output = Result<Outcome, BoxError>> + Send;
}
