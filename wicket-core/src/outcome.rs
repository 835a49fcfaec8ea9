//! Terminal routing outcomes.

use crate::response::PageResponse;

/// The router's terminal decision for one request.
///
/// Every request ends in exactly one of these two states; there are no
/// intermediate or suspended states. All four failure conditions (missing
/// path, absent registry, unknown path, stale binding) fold into
/// [`Outcome::NotFound`] so callers have one failure path to handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A handler matched and ran; carries its response uninspected.
    Dispatched(PageResponse),
    /// No handler ran. The caller owns the user-visible not-found response.
    NotFound,
}

impl Outcome {
    /// Returns true if a handler ran.
    pub fn is_dispatched(&self) -> bool {
        matches!(self, Outcome::Dispatched(_))
    }

    /// Returns true if no handler ran.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Outcome::NotFound)
    }

    /// Returns the dispatched response, if any.
    pub fn into_response(self) -> Option<PageResponse> {
        match self {
            Outcome::Dispatched(response) => Some(response),
            Outcome::NotFound => None,
        }
    }
}
