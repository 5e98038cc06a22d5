//! Interactive view primitives for pagekit.
//!
//! Two primitives cover the composition pattern pagekit pages use:
//!
//! - [`Button`]: a focusable action control with a visual variant
//! - [`Link`]: a navigational affordance that wraps one child node and, on
//!   activation, forwards a single request to an injected
//!   [`Router`](pagekit_nav::Router)
//!
//! A link wrapping a button is composition, not inheritance: the link is
//! purely a transport mechanism for its child and can suppress the default
//! hyperlink underline so the wrapped control owns the visual treatment.

mod button;
mod link;

pub use button::{Button, ButtonVariant};
pub use link::{Link, NavigationTarget};
