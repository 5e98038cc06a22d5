//! Site assembly and bundled pages for pagekit.
//!
//! This crate provides:
//! - [`PageComposer`]: the contract a page fulfills (path, title, compose)
//! - [`SiteMap`]: route registry with O(1) path lookups
//! - [`render_document`]: wraps a composed fragment in an HTML shell
//! - The bundled pages: [`AboutPage`] and [`ContactPage`]
//!
//! # Quick Start
//!
//! ```
//! use pagekit_site::{PageComposer, SiteMap};
//!
//! let site = SiteMap::bundled();
//! assert!(site.resolves("/about/contact"));
//!
//! let about = site.get("/about").unwrap();
//! let fragment = about.compose();
//! assert!(fragment.to_html().contains("This is truly about"));
//! ```

mod document;
mod pages;
mod registry;

pub use document::render_document;
pub use pages::{AboutPage, ContactPage, PageComposer};
pub use registry::{SiteError, SiteMap};
