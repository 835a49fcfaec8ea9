//! Response type and conversion traits.

/// The finished output of a page handler.
///
/// The router treats this as opaque: it carries the response back to the
/// hosting layer inside [`Outcome::Dispatched`] without inspecting or
/// reshaping it.
///
/// [`Outcome::Dispatched`]: crate::Outcome::Dispatched
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageResponse {
    body: String,
}

impl PageResponse {
    /// Create a response with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// The response body.
    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Trait for converting a handler's output into a [`PageResponse`].
///
/// # Default Implementations
///
/// - `PageResponse` → As is
/// - `String` / `&'static str` → Body text
/// - `()` → Empty response (the handler emitted its output elsewhere)
/// - `Result<T, E>` → Delegates to inner `T` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoPageResponse`",
    label = "missing `IntoPageResponse` implementation",
    note = "Page handlers must return a type convertible into a `PageResponse`."
)]
pub trait IntoPageResponse {
    /// Convert the output into a response, or propagate a handler fault.
    fn into_page_response(
        self,
    ) -> Result<PageResponse, Box<dyn std::error::Error + Send + Sync>>;
}

impl IntoPageResponse for PageResponse {
    fn into_page_response(
        self,
    ) -> Result<PageResponse, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self)
    }
}

impl IntoPageResponse for String {
    fn into_page_response(
        self,
    ) -> Result<PageResponse, Box<dyn std::error::Error + Send + Sync>> {
        Ok(PageResponse::new(self))
    }
}

impl IntoPageResponse for &'static str {
    fn into_page_response(
        self,
    ) -> Result<PageResponse, Box<dyn std::error::Error + Send + Sync>> {
        Ok(PageResponse::new(self))
    }
}

impl IntoPageResponse for () {
    fn into_page_response(
        self,
    ) -> Result<PageResponse, Box<dyn std::error::Error + Send + Sync>> {
        Ok(PageResponse::default())
    }
}

impl<T, E> IntoPageResponse for Result<T, E>
where
    T: IntoPageResponse,
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_page_response(
        self,
    ) -> Result<PageResponse, Box<dyn std::error::Error + Send + Sync>> {
        match self {
            Ok(t) => t.into_page_response(),
            Err(e) => Err(Box::new(e)),
        }
    }
}
