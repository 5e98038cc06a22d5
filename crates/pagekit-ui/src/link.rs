//! Navigational affordance primitive.
//!
//! [`Link`] wraps one owned child node and carries a [`NavigationTarget`].
//! Activation forwards a single fire-and-forget request to an injected
//! [`Router`]; the link never observes whether the transition completed.

use pagekit_nav::Router;
use pagekit_view::{Element, ViewNode};

/// Target of a navigational affordance.
///
/// Constructed from literals at compose time and never mutated. Whether
/// `path` resolves in the hosting route table is a caller obligation; the
/// link does not validate it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Route path with leading slash (e.g., "/about/contact").
    pub path: String,
    /// Suppress the default hyperlink underline on render.
    pub disable_underline: bool,
}

/// A navigational affordance wrapping a single child node.
///
/// The link is purely a transport mechanism: it delegates the activation
/// event from its child and must not compete visually with it, which is
/// why the default underline can be suppressed.
///
/// Per activation the link has two states: rendered and awaiting
/// activation, then handed off to the router. There is no third state; the
/// link does not track the transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    target: NavigationTarget,
    child: ViewNode,
}

impl Link {
    /// Create a link to the given path with an empty child.
    #[must_use]
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            target: NavigationTarget {
                path: path.into(),
                disable_underline: false,
            },
            child: ViewNode::Fragment(Vec::new()),
        }
    }

    /// Suppress the default hyperlink underline.
    #[must_use]
    pub fn without_underline(mut self) -> Self {
        self.target.disable_underline = true;
        self
    }

    /// Set the wrapped child node.
    #[must_use]
    pub fn wrapping(mut self, child: impl Into<ViewNode>) -> Self {
        self.child = child.into();
        self
    }

    /// Target of this link.
    #[must_use]
    pub fn target(&self) -> &NavigationTarget {
        &self.target
    }

    /// Target route path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.target.path
    }

    /// Produce the view node for this link.
    ///
    /// Pure and deterministic: repeated calls yield identical nodes. The
    /// anchor carries `text-decoration: none` when the underline is
    /// suppressed.
    #[must_use]
    pub fn render(&self) -> ViewNode {
        let mut anchor = Element::new("a").attr("href", &self.target.path);
        if self.target.disable_underline {
            anchor = anchor.style("text-decoration", "none");
        }
        anchor.child(self.child.clone()).into()
    }

    /// Activate the link, issuing exactly one navigation request.
    ///
    /// Fire-and-forget: ownership of the transition passes to the router
    /// and this link does not observe its resolution. Repeated activations
    /// each issue their own request; there is no debouncing.
    pub fn activate(&self, router: &dyn Router) {
        tracing::debug!(path = %self.target.path, "link activated");
        router.navigate(&self.target.path);
    }
}

#[cfg(test)]
mod tests {
    use pagekit_nav::RecordingRouter;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::Button;

    fn contact_link() -> Link {
        Link::to("/about/contact")
            .without_underline()
            .wrapping(Button::contained("Contact").render())
    }

    #[test]
    fn test_target_holds_path_and_underline_flag() {
        let link = contact_link();

        assert_eq!(
            link.target(),
            &NavigationTarget {
                path: "/about/contact".to_owned(),
                disable_underline: true,
            }
        );
    }

    #[test]
    fn test_render_anchor_with_href() {
        let node = Link::to("/about").wrapping(ViewNode::text("About")).render();

        let anchors = node.elements_by_tag("a");
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].attr_value("href"), Some("/about"));
    }

    #[test]
    fn test_render_suppresses_underline() {
        let node = contact_link().render();

        let anchors = node.elements_by_tag("a");
        assert_eq!(anchors[0].style_value("text-decoration"), Some("none"));
    }

    #[test]
    fn test_render_default_keeps_underline() {
        let node = Link::to("/about").render();

        let anchors = node.elements_by_tag("a");
        assert_eq!(anchors[0].style_value("text-decoration"), None);
    }

    #[test]
    fn test_render_wraps_child() {
        let node = contact_link().render();

        let buttons = node.elements_by_tag("button");
        assert_eq!(buttons.len(), 1);
        assert_eq!(node.text_content(), "Contact");
    }

    #[test]
    fn test_render_is_idempotent() {
        let link = contact_link();
        assert_eq!(link.render(), link.render());
    }

    #[test]
    fn test_activate_issues_single_request() {
        let router = RecordingRouter::new();
        let link = contact_link();

        link.activate(&router);

        assert_eq!(router.paths(), vec!["/about/contact"]);
    }

    #[test]
    fn test_rapid_activation_issues_one_request_each() {
        let router = RecordingRouter::new();
        let link = contact_link();

        link.activate(&router);
        link.activate(&router);
        link.activate(&router);

        assert_eq!(router.request_count(), 3);
        assert!(router.paths().iter().all(|path| path == "/about/contact"));
    }

    #[test]
    fn test_unresolvable_target_does_not_error() {
        let router = RecordingRouter::new();
        let link = Link::to("/nowhere").wrapping(ViewNode::text("x"));

        // The link does not validate the path; the router owns failures.
        link.activate(&router);

        assert_eq!(router.paths(), vec!["/nowhere"]);
    }
}
