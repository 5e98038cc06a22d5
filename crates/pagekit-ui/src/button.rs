//! Action control primitive.

use pagekit_view::{Element, ViewNode};

/// Visual variant of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled background. Visually distinct from surrounding text.
    Contained,
    /// Outlined with transparent background.
    Outlined,
    /// Plain text, no background or border.
    #[default]
    Text,
}

impl ButtonVariant {
    /// CSS class suffix for this variant.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Contained => "contained",
            Self::Outlined => "outlined",
            Self::Text => "text",
        }
    }
}

/// A focusable, labeled action control.
///
/// Renders as a `<button type="button">` carrying a variant class, so an
/// activation event (click, tap, keyboard enter) can be intercepted by
/// whatever wraps it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    label: String,
    variant: ButtonVariant,
}

impl Button {
    /// Create a button with the default (text) variant.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
        }
    }

    /// Create a filled ("contained") button.
    #[must_use]
    pub fn contained(label: impl Into<String>) -> Self {
        Self::new(label).with_variant(ButtonVariant::Contained)
    }

    /// Set the visual variant.
    #[must_use]
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Visual variant.
    #[must_use]
    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    /// Produce the view node for this button.
    ///
    /// Pure and deterministic: repeated calls yield identical nodes.
    #[must_use]
    pub fn render(&self) -> ViewNode {
        Element::new("button")
            .attr("type", "button")
            .attr("class", format!("btn btn-{}", self.variant.class_suffix()))
            .child(ViewNode::text(&self.label))
            .into()
    }
}
