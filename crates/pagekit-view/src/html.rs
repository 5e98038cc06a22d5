//! HTML rendering for view trees.
//!
//! Produces deterministic markup: attributes and style declarations render
//! in insertion order, text is escaped, and rendering the same tree twice
//! yields byte-identical output.

use std::fmt::Write;

use crate::node::{Element, ViewNode};

/// Tags that render without a closing tag and must not have children.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl ViewNode {
    /// Render this node to an HTML string.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Render this node into an existing buffer.
    pub fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(content) => out.push_str(&escape_html(content)),
            Self::Element(element) => element.write_html(out),
            Self::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

impl Element {
    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());

        for (name, value) in self.attrs() {
            write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
        }

        if !self.styles().is_empty() {
            out.push_str(r#" style=""#);
            for (i, (property, value)) in self.styles().iter().enumerate() {
                if i > 0 {
                    out.push_str("; ");
                }
                write!(out, "{property}: {}", escape_html(value)).unwrap();
            }
            out.push('"');
        }

        if VOID_TAGS.contains(&self.tag()) {
            out.push('>');
            return;
        }

        out.push('>');
        for child in self.children() {
            child.write_html(out);
        }
        write!(out, "</{}>", self.tag()).unwrap();
    }
}

/// Escape HTML special characters in text content and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
