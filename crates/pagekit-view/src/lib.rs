//! Declarative view tree for pagekit.
//!
//! This crate provides [`ViewNode`], a pure-data description of a view
//! fragment, and HTML rendering on top of it.
//!
//! # Architecture
//!
//! A view is described as a tree of values rather than built imperatively:
//! - [`ViewNode::Text`]: a literal text node
//! - [`ViewNode::Element`]: a tagged element with attributes, inline styles
//!   and children
//! - [`ViewNode::Fragment`]: an unwrapped sequence of sibling nodes
//!
//! Composition is a pure function: the same inputs always produce a
//! structurally identical tree, and rendering a tree has no side effects.
//!
//! # Example
//!
//! ```
//! use pagekit_view::{Element, ViewNode};
//!
//! let node = ViewNode::Element(
//!     Element::new("a")
//!         .attr("href", "/about/contact")
//!         .style("text-decoration", "none")
//!         .child(ViewNode::text("Contact")),
//! );
//! assert_eq!(
//!     node.to_html(),
//!     r#"<a href="/about/contact" style="text-decoration: none">Contact</a>"#
//! );
//! ```

mod html;
mod node;

pub use html::escape_html;
pub use node::{Element, ViewNode};
