//! Page composers.
//!
//! A page is a pure function from nothing to a view fragment: no inputs,
//! no external data, no side effects at compose time. The only effect a
//! page can cause happens later, when the user activates an affordance the
//! page composed.

use pagekit_ui::{Button, Link};
use pagekit_view::ViewNode;

/// Contract a page fulfills.
pub trait PageComposer: Send + Sync {
    /// Route path of this page, with leading slash.
    fn path(&self) -> &str;

    /// Page title for the document shell.
    fn title(&self) -> &str;

    /// Compose the page's view fragment.
    ///
    /// Must be deterministic and idempotent: repeated calls yield
    /// structurally identical trees.
    fn compose(&self) -> ViewNode;
}

/// The about page.
///
/// Renders a static text node followed by a navigational affordance to
/// the nested contact route. The affordance suppresses the hyperlink
/// underline because the visible interactive element is the filled button
/// it wraps, not text.
pub struct AboutPage;

impl AboutPage {
    /// The affordance this page embeds.
    ///
    /// Exposed so hosts and tests can drive activation directly; compose
    /// uses the same value, so the rendered anchor and the activation
    /// behavior cannot drift apart.
    #[must_use]
    pub fn contact_link(&self) -> Link {
        Link::to("/about/contact")
            .without_underline()
            .wrapping(Button::contained("Contact").render())
    }
}

impl PageComposer for AboutPage {
    fn path(&self) -> &str {
        "/about"
    }

    fn title(&self) -> &str {
        "About"
    }

    fn compose(&self) -> ViewNode {
        ViewNode::fragment(vec![
            ViewNode::text("This is truly about"),
            self.contact_link().render(),
        ])
    }
}

/// The contact page, target of the about page's affordance.
pub struct ContactPage;

impl PageComposer for ContactPage {
    fn path(&self) -> &str {
        "/about/contact"
    }

    fn title(&self) -> &str {
        "Contact"
    }

    fn compose(&self) -> ViewNode {
        ViewNode::text("This is the contact page")
    }
}
