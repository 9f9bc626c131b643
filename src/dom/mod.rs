//! In-memory host page
//!
//! The drawer never owns the page it lives in. It discovers a handful of
//! elements by selector and mutates their classes, attributes and inline
//! styles. This module is that page: an arena of elements addressed by
//! `NodeId`, with just enough layout to answer "what is this element's
//! computed width".
//!
//! ## Architecture
//!
//! - `Element`: tag, id, classes, attributes, inline style, layout width
//! - `Document`: element arena plus tree links, queries and serialization
//! - `Selector`: compound selector used for discovery
//! - `NodeSpec`: serde description of an element tree (fixtures, scenarios)

mod fixture;
mod selector;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::util::{format_px, parse_int_prefix};

pub use fixture::NodeSpec;
pub use selector::Selector;

/// Index of an element in its `Document`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A single element of the host page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Inline style declarations (`style="..."`)
    pub style: BTreeMap<String, String>,
    /// Width the host layout engine reports when no inline width applies
    pub layout_width: Option<f64>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.set_style(property, value);
        self
    }

    pub fn with_layout_width(mut self, width: f64) -> Self {
        self.layout_width = Some(width);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Computed `width`, as the host would report it
    ///
    /// An inline width that parses as a number wins; otherwise the layout
    /// width is used. Elements with neither have no computed width.
    pub fn computed_width(&self) -> Option<String> {
        if let Some(inline) = self.style("width") {
            if let Some(px) = parse_int_prefix(inline) {
                return Some(format_px(px));
            }
        }
        self.layout_width.map(|w| format!("{}px", w))
    }
}

/// Arena-backed element tree rooted at `<body>`
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `<body>`
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0)
    }

    /// Append `element` as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, mut element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        element.parent = Some(parent);
        element.children.clear();
        self.nodes.push(element);
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.push(id);
        }
        id
    }

    /// Remove `id` (and its subtree) from the tree
    ///
    /// The arena slot stays allocated so other `NodeId`s remain valid.
    pub fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.get(id).and_then(Element::parent) else {
            return;
        };
        if let Some(p) = self.nodes.get_mut(parent.0) {
            p.children.retain(|c| *c != id);
        }
        if let Some(el) = self.nodes.get_mut(id.0) {
            el.parent = None;
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Element::parent)
    }

    /// Last child element of `id`
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|el| el.children.last().copied())
    }

    /// `id` followed by each of its ancestors up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.get(id).map(|_| id), move |&n| self.parent(n))
    }

    /// Whether `id` is attached to the tree under the root
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.ancestors(id).any(|n| n == self.root())
    }

    /// Attached elements in document order (pre-order, root first)
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(el) = self.get(id) {
                stack.extend(el.children.iter().rev().copied());
            }
        }
        order
    }

    /// First attached element matching `selector`, in document order
    pub fn query_selector(&self, selector: &Selector) -> Option<NodeId> {
        self.descendants()
            .into_iter()
            .find(|&id| self.get(id).is_some_and(|el| selector.matches(el)))
    }

    /// All attached elements matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(|el| selector.matches(el)))
            .collect()
    }

    pub fn computed_width(&self, id: NodeId) -> Option<String> {
        self.get(id).and_then(Element::computed_width)
    }

    /// Serialize the attached tree as indented HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(self.root(), 0, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, depth: usize, out: &mut String) {
        let Some(el) = self.get(id) else {
            return;
        };
        let indent = "  ".repeat(depth);

        out.push_str(&indent);
        out.push('<');
        out.push_str(&el.tag);
        if let Some(elem_id) = &el.id {
            push_attr(out, "id", elem_id);
        }
        if !el.classes.is_empty() {
            push_attr(out, "class", &el.classes.join(" "));
        }
        if !el.style.is_empty() {
            let style = el
                .style
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect::<Vec<_>>()
                .join("; ");
            push_attr(out, "style", &style);
        }
        for (name, value) in &el.attributes {
            push_attr(out, name, value);
        }

        if el.children.is_empty() {
            out.push_str(&format!("></{}>\n", el.tag));
            return;
        }

        out.push_str(">\n");
        for &child in &el.children {
            self.write_html(child, depth + 1, out);
        }
        out.push_str(&indent);
        out.push_str(&format!("</{}>\n", el.tag));
    }
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
    out.push('"');
}
