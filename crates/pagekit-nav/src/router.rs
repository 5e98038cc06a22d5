//! Router trait and shipped implementations.

use std::collections::HashSet;
use std::sync::Arc;

/// Capability for requesting client-side route transitions.
///
/// A navigation request is fire-and-forget: the call returns once the
/// request has been handed to the router. Callers do not await, retry,
/// cancel or observe the resulting transition. Every call issues exactly
/// one request; routers must not debounce or coalesce.
pub trait Router: Send + Sync {
    /// Request a transition to the given route path.
    ///
    /// # Arguments
    ///
    /// * `path` - Route path with leading slash (e.g., "/about/contact")
    fn navigate(&self, path: &str);
}

/// No-op [`Router`] that drops every request.
///
/// Useful as a default when rendering without a navigation host.
pub struct NullRouter;

impl Router for NullRouter {
    fn navigate(&self, _path: &str) {}
}

/// [`Router`] that checks targets against a route table before forwarding.
///
/// Unregistered targets are the router's problem, not the caller's: the
/// request is logged with a warning and still forwarded, so the inner
/// router owns the not-found behavior. Each incoming request produces
/// exactly one forwarded request.
pub struct SiteRouter {
    routes: HashSet<String>,
    inner: Arc<dyn Router>,
}

impl SiteRouter {
    /// Create a router for the given route table, forwarding to `inner`.
    #[must_use]
    pub fn new(routes: impl IntoIterator<Item = String>, inner: Arc<dyn Router>) -> Self {
        Self {
            routes: routes.into_iter().collect(),
            inner,
        }
    }

    /// True if the path is present in the route table.
    #[must_use]
    pub fn resolves(&self, path: &str) -> bool {
        self.routes.contains(path)
    }
}

impl Router for SiteRouter {
    fn navigate(&self, path: &str) {
        if self.resolves(path) {
            tracing::debug!(path, "navigation requested");
        } else {
            tracing::warn!(path, "navigation target not in route table");
        }
        self.inner.navigate(path);
    }
}
