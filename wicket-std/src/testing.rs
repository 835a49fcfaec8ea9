//! Testing utilities for Wicket.
//!
//! This module provides spies to make testing routers and providers easier:
//!
//! - [`RecordingHandler`]: records every request it renders
//! - [`CountingHandler`]: counts invocations
//! - [`FailingHandler`]: always raises a handler fault

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use wicket_core::{PageHandler, PageRequest, PageResponse};

/// A handler that records all requests it receives.
///
/// Useful for verifying that requests are being routed correctly.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new("body");
/// let recorder_clone = recorder.clone();
///
/// // Bind in a registry, dispatch...
///
/// assert_eq!(recorder_clone.count(), 1);
/// ```
pub struct RecordingHandler {
    requests: Arc<Mutex<Vec<PageRequest>>>,
    body: String,
}

impl RecordingHandler {
    /// Create a recording handler responding with the given body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            body: body.into(),
        }
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get the number of recorded requests.
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Clone for RecordingHandler {
    fn clone(&self) -> Self {
        Self {
            requests: self.requests.clone(),
            body: self.body.clone(),
        }
    }
}

impl PageHandler for RecordingHandler {
    type Output = PageResponse;

    async fn render(&self, request: PageRequest) -> Self::Output {
        self.requests.lock().unwrap().push(request);
        PageResponse::new(self.body.clone())
    }
}

/// A handler that counts invocations.
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingHandler {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl PageHandler for CountingHandler {
    type Output = PageResponse;

    async fn render(&self, _request: PageRequest) -> Self::Output {
        self.count.fetch_add(1, Ordering::SeqCst);
        PageResponse::default()
    }
}

/// A handler that always fails, for fault propagation tests.
pub struct FailingHandler {
    message: &'static str,
}

impl FailingHandler {
    /// Create a failing handler with the given fault message.
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

impl PageHandler for FailingHandler {
    type Output = Result<PageResponse, std::io::Error>;

    async fn render(&self, _request: PageRequest) -> Self::Output {
        Err(std::io::Error::other(self.message))
    }
}
