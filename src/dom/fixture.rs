//! Serializable element trees
//!
//! Used by scenario files and tests to describe a page up front:
//!
//! ```yaml
//! tag: div
//! class: [q-drawer-container]
//! children:
//!   - tag: aside
//!     class: [q-drawer]
//!     width: 300
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Document, Element, NodeId};

/// Description of one element and its subtree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    /// Layout width reported by the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    fn to_element(&self) -> Element {
        let tag = if self.tag.is_empty() { "div" } else { &self.tag };
        Element {
            id: self.id.clone(),
            classes: self.class.clone(),
            attributes: self.attributes.clone(),
            style: self.style.clone(),
            layout_width: self.width,
            ..Element::new(tag)
        }
    }

    /// Append this subtree under `parent`, returning the new element's id
    pub fn build_into(&self, doc: &mut Document, parent: NodeId) -> NodeId {
        let id = doc.append_child(parent, self.to_element());
        for child in &self.children {
            child.build_into(doc, id);
        }
        id
    }
}

impl Document {
    /// Build a document whose `<body>` contains the given trees
    pub fn from_specs(specs: &[NodeSpec]) -> Self {
        let mut doc = Document::new();
        let root = doc.root();
        for spec in specs {
            spec.build_into(&mut doc, root);
        }
        doc
    }
}
