//! Recording router for testing.
//!
//! Provides [`RecordingRouter`] so components that issue navigation
//! requests can be tested without a navigation host.

use std::sync::Mutex;

use crate::router::Router;

/// A single recorded navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Requested route path.
    pub path: String,
}

/// Test double that records every navigation request in order.
///
/// # Example
///
/// ```
/// use pagekit_nav::{RecordingRouter, Router};
///
/// let router = RecordingRouter::new();
/// router.navigate("/about/contact");
/// assert_eq!(router.paths(), vec!["/about/contact"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingRouter {
    requests: Mutex<Vec<NavigationRequest>>,
}

impl RecordingRouter {
    /// Create a router with no recorded requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded requests, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<NavigationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded request paths, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|request| request.path.clone())
            .collect()
    }

    /// Number of recorded requests.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Router for RecordingRouter {
    fn navigate(&self, path: &str) {
        self.requests.lock().unwrap().push(NavigationRequest {
            path: path.to_owned(),
        });
    }
}
