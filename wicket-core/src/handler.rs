//! Page handlers — the terminal point of the routing pipeline.
//!
//! A handler is the unit of logic an extension binds to one path
//! identifier. Once the router invokes a handler, it owns the rest of the
//! response lifecycle: the router performs no further processing, shaping,
//! or fallthrough.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|request| async move { "page body" }`
//! 2. **Struct implementation**: `impl PageHandler for SurveyPage`
//!
//! # Static vs Dynamic Dispatch
//!
//! [`PageHandler`] uses native `async fn` for zero-cost static dispatch.
//! Registries store handlers behind [`DynPageHandler`], the object-safe
//! variant; the blanket impl converts automatically.

use crate::{
    error::BoxError,
    request::PageRequest,
    response::{IntoPageResponse, PageResponse},
};
use std::{future::Future, pin::Pin};

/// A unit of logic bound to one path identifier.
///
/// Handlers receive a fully owned request context and produce a full
/// response. Any fault a handler raises propagates unchanged to the
/// router's caller — the router's contract ends at "handler was invoked".
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot serve pages",
    label = "missing `PageHandler` implementation",
    note = "Page handlers must implement `render` returning an `IntoPageResponse` value."
)]
pub trait PageHandler: Send + Sync + 'static {
    /// The output type, converted into a [`PageResponse`] at the dispatch
    /// boundary.
    type Output: IntoPageResponse;

    /// Produce the page for the given request.
    fn render(&self, request: PageRequest) -> impl Future<Output = Self::Output> + Send;
}

// Blanket impl for closures
impl<F, Out, Fut> PageHandler for F
where
    F: Fn(PageRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Out> + Send,
    Out: IntoPageResponse,
{
    type Output = Out;

    fn render(&self, request: PageRequest) -> impl Future<Output = Self::Output> + Send {
        (self)(request)
    }
}

/// Dynamic object-safe version of [`PageHandler`].
///
/// Use this trait when you need runtime polymorphism — registries store
/// bindings as `dyn DynPageHandler` so pages of different concrete types
/// live in one mapping.
pub trait DynPageHandler: Send + Sync + 'static {
    /// Produce the page for the given request (dynamic dispatch version).
    fn render_dyn(
        &self,
        request: PageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PageResponse, BoxError>> + Send + '_>>;
}

// Blanket implementation: any PageHandler implements DynPageHandler
// automatically, converting its output at the boundary.
impl<H: PageHandler> DynPageHandler for H {
    fn render_dyn(
        &self,
        request: PageRequest,
    ) -> Pin<Box<dyn Future<Output = Result<PageResponse, BoxError>> + Send + '_>> {
        Box::pin(async move { self.render(request).await.into_page_response() })
    }
}
