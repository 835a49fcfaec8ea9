//! Error types for Wicket.
//!
//! Routing failures are not errors: the router folds every unroutable
//! request into [`Outcome::NotFound`]. The types here cover the two things
//! that remain — faults raised by invoked handlers ([`BoxError`]) and
//! registry construction misuse ([`RegistryError`]).
//!
//! [`Outcome::NotFound`]: crate::Outcome::NotFound

use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// Handler faults cross the dispatch boundary as this type, untranslated.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while assembling a page registry.
///
/// These surface to the extension subsystem at build time and never cross
/// the router boundary.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A path was bound twice while the builder forbids duplicates.
    #[error("page already bound for path: {0}")]
    DuplicatePath(String),
}
