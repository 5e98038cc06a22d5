//! Route registry.
//!
//! [`SiteMap`] stores page composers in a flat list with an index keyed by
//! route path, giving O(1) lookups. Paths are validated on registration:
//! they must start with `/` and contain no empty, `.` or `..` segments,
//! so an exported site can never write outside its output directory.

use std::collections::HashMap;
use std::sync::Arc;

use pagekit_nav::{Router, SiteRouter};

use crate::pages::{AboutPage, ContactPage, PageComposer};

/// Site assembly error.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A page was registered twice under the same path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    /// A route path failed validation.
    #[error("invalid route path {path:?}: {reason}")]
    InvalidPath {
        /// The rejected path.
        path: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Registry of page composers keyed by route path.
pub struct SiteMap {
    composers: Vec<Arc<dyn PageComposer>>,
    path_index: HashMap<String, usize>,
}

impl Default for SiteMap {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteMap {
    /// Create an empty site map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            composers: Vec::new(),
            path_index: HashMap::new(),
        }
    }

    /// The site map with the bundled pages registered.
    ///
    /// # Panics
    ///
    /// Panics if the bundled page paths collide, which would be a bug in
    /// this crate.
    #[must_use]
    pub fn bundled() -> Self {
        let mut site = Self::new();
        site.register(Arc::new(AboutPage))
            .expect("bundled page paths are valid and unique");
        site.register(Arc::new(ContactPage))
            .expect("bundled page paths are valid and unique");
        site
    }

    /// Register a page composer.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::InvalidPath` if the composer's path does not
    /// start with `/` or contains empty, `.` or `..` segments.
    /// Returns `SiteError::DuplicatePath` if the path is already taken.
    pub fn register(&mut self, composer: Arc<dyn PageComposer>) -> Result<(), SiteError> {
        let path = composer.path().to_owned();
        validate_path(&path)?;

        if self.path_index.contains_key(&path) {
            return Err(SiteError::DuplicatePath(path));
        }

        tracing::debug!(path = %path, title = %composer.title(), "page registered");
        self.path_index.insert(path, self.composers.len());
        self.composers.push(composer);
        Ok(())
    }

    /// Get the composer registered for a path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&dyn PageComposer> {
        self.path_index
            .get(path)
            .map(|&i| self.composers[i].as_ref())
    }

    /// True if a page is registered for the path.
    #[must_use]
    pub fn resolves(&self, path: &str) -> bool {
        self.path_index.contains_key(path)
    }

    /// Registered paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.path_index.keys().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Iterate over composers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn PageComposer> {
        self.composers.iter().map(|composer| composer.as_ref())
    }

    /// Number of registered pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.composers.len()
    }

    /// True if no pages are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.composers.is_empty()
    }

    /// Build a [`SiteRouter`] over this site's route table.
    #[must_use]
    pub fn router(&self, inner: Arc<dyn Router>) -> SiteRouter {
        SiteRouter::new(self.path_index.keys().cloned(), inner)
    }
}

/// Validate a route path for registration.
fn validate_path(path: &str) -> Result<(), SiteError> {
    let invalid = |reason: &str| SiteError::InvalidPath {
        path: path.to_owned(),
        reason: reason.to_owned(),
    };

    if path == "/" {
        return Ok(());
    }
    let Some(rest) = path.strip_prefix('/') else {
        return Err(invalid("must start with '/'"));
    };
    for segment in rest.split('/') {
        match segment {
            "" => return Err(invalid("empty segment")),
            "." | ".." => return Err(invalid("relative segment")),
            _ => {}
        }
    }
    Ok(())
}
