//! View tree node types.
//!
//! [`ViewNode`] is the pure data representation of a view fragment.
//! Nodes are cheap to clone and compare, which keeps structural
//! assertions in tests direct: compose twice, compare the trees.

/// A node in a view tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ViewNode {
    /// Literal text content. Escaped on render.
    Text(String),
    /// A tagged element with attributes, styles and children.
    Element(Element),
    /// A sequence of sibling nodes with no wrapping element.
    Fragment(Vec<ViewNode>),
}

impl ViewNode {
    /// Create a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a fragment from a list of nodes.
    #[must_use]
    pub fn fragment(children: Vec<ViewNode>) -> Self {
        Self::Fragment(children)
    }

    /// Collect references to all elements with the given tag, in document
    /// order, descending through fragments and element children.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(tag, &mut found);
        found
    }

    fn collect_elements<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        match self {
            Self::Text(_) => {}
            Self::Element(element) => {
                if element.tag() == tag {
                    found.push(element);
                }
                for child in element.children() {
                    child.collect_elements(tag, found);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_elements(tag, found);
                }
            }
        }
    }

    /// Concatenate all text content in document order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(content),
            Self::Element(element) => {
                for child in element.children() {
                    child.collect_text(out);
                }
            }
            Self::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for ViewNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// A tagged element in a view tree.
///
/// Attributes and inline style declarations keep insertion order so that
/// rendering the same element always produces the same markup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    children: Vec<ViewNode>,
}

impl Element {
    /// Create an element with the given tag and no attributes or children.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Append an inline style declaration.
    ///
    /// Declarations render as a single `style` attribute after the regular
    /// attributes, in insertion order.
    #[must_use]
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<ViewNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Element tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute value by name.
    ///
    /// Returns the first matching attribute if one was set multiple times.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Look up an inline style value by property name.
    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(prop, _)| prop == property)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order.
    #[must_use]
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Inline style declarations in insertion order.
    #[must_use]
    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[ViewNode] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_text_node() {
        let node = ViewNode::text("hello");
        assert_eq!(node, ViewNode::Text("hello".to_owned()));
    }

    #[test]
    fn test_element_builder() {
        let element = Element::new("a")
            .attr("href", "/guide")
            .style("text-decoration", "none")
            .child(ViewNode::text("Guide"));

        assert_eq!(element.tag(), "a");
        assert_eq!(element.attr_value("href"), Some("/guide"));
        assert_eq!(element.style_value("text-decoration"), Some("none"));
        assert_eq!(element.children().len(), 1);
    }

    #[test]
    fn test_attr_value_missing() {
        let element = Element::new("button");
        assert_eq!(element.attr_value("class"), None);
    }

    #[test]
    fn test_attr_value_first_wins() {
        let element = Element::new("div").attr("class", "a").attr("class", "b");
        assert_eq!(element.attr_value("class"), Some("a"));
    }

    #[test]
    fn test_elements_by_tag_descends_fragments_and_elements() {
        let tree = ViewNode::fragment(vec![
            ViewNode::text("intro"),
            Element::new("a")
                .attr("href", "/x")
                .child(Element::new("button").child(ViewNode::text("Go")))
                .into(),
            Element::new("button").child(ViewNode::text("Other")).into(),
        ]);

        let anchors = tree.elements_by_tag("a");
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].attr_value("href"), Some("/x"));

        let buttons = tree.elements_by_tag("button");
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].text_content_of(), "Go");
    }

    #[test]
    fn test_elements_by_tag_document_order() {
        let tree = ViewNode::fragment(vec![
            Element::new("p").attr("id", "first").into(),
            Element::new("p").attr("id", "second").into(),
        ]);

        let paragraphs = tree.elements_by_tag("p");
        assert_eq!(paragraphs[0].attr_value("id"), Some("first"));
        assert_eq!(paragraphs[1].attr_value("id"), Some("second"));
    }

    #[test]
    fn test_text_content_concatenates_in_order() {
        let tree = ViewNode::fragment(vec![
            ViewNode::text("a"),
            Element::new("span").child(ViewNode::text("b")).into(),
            ViewNode::text("c"),
        ]);

        assert_eq!(tree.text_content(), "abc");
    }

    #[test]
    fn test_clone_equals_original() {
        let tree = ViewNode::fragment(vec![
            ViewNode::text("hello"),
            Element::new("a").attr("href", "/x").into(),
        ]);

        assert_eq!(tree.clone(), tree);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_text_node() {
        let node = ViewNode::text("hello");
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["text"], "hello");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_element() {
        let node: ViewNode = Element::new("a").attr("href", "/x").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["element"]["tag"], "a");
        assert_eq!(json["element"]["attrs"][0][0], "href");
        assert_eq!(json["element"]["attrs"][0][1], "/x");
    }

    impl Element {
        /// Test helper: text content of this element's subtree.
        fn text_content_of(&self) -> String {
            let mut out = String::new();
            for child in self.children() {
                out.push_str(&child.text_content());
            }
            out
        }
    }
}
