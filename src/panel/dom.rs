//! `PanelHandle` over an in-memory document

use crate::config::Selectors;
use crate::dom::{Document, Element, NodeId};
use crate::util::{format_px, parse_int_prefix, parse_measured};

use super::PanelHandle;

/// The panel element of a `Document`, located by selector
pub struct DomPanel<'a> {
    doc: &'a mut Document,
    selectors: &'a Selectors,
    panel: NodeId,
}

impl<'a> DomPanel<'a> {
    /// Discover the panel, or `None` if the page has no drawer
    pub fn find(doc: &'a mut Document, selectors: &'a Selectors) -> Option<Self> {
        let panel = doc.query_selector(&selectors.panel)?;
        Some(Self {
            doc,
            selectors,
            panel,
        })
    }

    pub fn node(&self) -> NodeId {
        self.panel
    }

    fn element(&self) -> Option<&Element> {
        self.doc.get(self.panel)
    }

    fn element_mut(&mut self) -> Option<&mut Element> {
        self.doc.get_mut(self.panel)
    }
}

/// The drag handle element already attached to the handle host, if any
pub fn find_handle(doc: &Document, selectors: &Selectors) -> Option<NodeId> {
    let host = doc.query_selector(&selectors.handle_host)?;
    doc.get(host)?.children().iter().copied().find(|&child| {
        doc.get(child)
            .is_some_and(|el| el.has_class(&selectors.handle_class))
    })
}

impl PanelHandle for DomPanel<'_> {
    fn width(&self) -> Option<i32> {
        self.doc
            .computed_width(self.panel)
            .and_then(|w| parse_measured(&w))
    }

    fn set_width(&mut self, px: i32) {
        if let Some(el) = self.element_mut() {
            el.set_style("width", &format_px(px));
        }
    }

    fn stored_width(&self) -> Option<i32> {
        self.element()?
            .attribute(&self.selectors.width_attribute)
            .and_then(parse_int_prefix)
    }

    fn set_stored_width(&mut self, px: i32) {
        let selectors = self.selectors;
        if let Some(el) = self.element_mut() {
            el.set_attribute(&selectors.width_attribute, &px.to_string());
        }
    }

    fn is_open(&self) -> bool {
        self.element()
            .is_some_and(|el| !el.has_class(&self.selectors.closed_class))
    }

    fn container_width(&self) -> Option<i32> {
        let host = self.doc.query_selector(&self.selectors.handle_host)?;
        let container = self.doc.parent(host)?;
        self.doc
            .computed_width(container)
            .and_then(|w| parse_int_prefix(&w))
    }

    fn install_handle(&mut self) -> bool {
        let Some(host) = self.doc.query_selector(&self.selectors.handle_host) else {
            tracing::debug!(
                selector = %self.selectors.handle_host,
                "No handle host on page, drag handle not installed"
            );
            return false;
        };
        if find_handle(self.doc, self.selectors).is_some() {
            return false;
        }

        if let Some(el) = self.doc.get_mut(host) {
            el.set_style("position", "relative");
        }
        let handle = Element::new("div").with_class(&self.selectors.handle_class);
        self.doc.append_child(host, handle);
        true
    }

    fn set_content_offset(&mut self, px: i32) -> bool {
        let Some(content) = self.doc.query_selector(&self.selectors.content) else {
            return false;
        };
        match self.doc.get_mut(content) {
            Some(el) => {
                el.set_style("padding-left", &format_px(px));
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(with_content: bool) -> Document {
        let mut doc = Document::new();
        let root = doc.root();
        let container = doc.append_child(root, Element::new("div").with_class("q-drawer-container"));
        let panel = doc.append_child(
            container,
            Element::new("aside")
                .with_class("q-drawer")
                .with_layout_width(300.0),
        );
        doc.append_child(panel, Element::new("div").with_class("nicegui-drawer"));
        if with_content {
            doc.append_child(root, Element::new("div").with_class("q-page-container"));
        }
        doc
    }

    #[test]
    fn test_find_requires_panel() {
        let selectors = Selectors::default();
        let mut empty = Document::new();
        assert!(DomPanel::find(&mut empty, &selectors).is_none());

        let mut doc = page(true);
        assert!(DomPanel::find(&mut doc, &selectors).is_some());
    }

    #[test]
    fn test_width_and_stored_width() {
        let selectors = Selectors::default();
        let mut doc = page(true);
        let mut panel = DomPanel::find(&mut doc, &selectors).unwrap();

        assert_eq!(panel.width(), Some(300));
        assert_eq!(panel.stored_width(), None);
        assert_eq!(panel.container_width(), Some(300));

        panel.apply_width(330);
        assert_eq!(panel.width(), Some(330));
        assert_eq!(panel.stored_width(), Some(330));

        let node = panel.node();
        let el = doc.get(node).unwrap();
        assert_eq!(el.style("width"), Some("330px"));
        assert_eq!(el.attribute("data-drawer-width"), Some("330"));
    }

    #[test]
    fn test_is_open_follows_marker() {
        let selectors = Selectors::default();
        let mut doc = page(false);
        let node = doc.query_selector(&selectors.panel).unwrap();
        {
            let panel = DomPanel::find(&mut doc, &selectors).unwrap();
            assert!(panel.is_open());
        }
        doc.get_mut(node).unwrap().add_class("q-layout--prevent-focus");
        let panel = DomPanel::find(&mut doc, &selectors).unwrap();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_install_handle_once() {
        let selectors = Selectors::default();
        let mut doc = page(false);
        {
            let mut panel = DomPanel::find(&mut doc, &selectors).unwrap();
            assert!(panel.install_handle());
            assert!(!panel.install_handle());
        }

        let host = doc.query_selector(&selectors.handle_host).unwrap();
        let handle = find_handle(&doc, &selectors).unwrap();
        assert_eq!(doc.last_child(host), Some(handle));
        assert_eq!(doc.get(host).unwrap().style("position"), Some("relative"));
        assert_eq!(
            doc.query_selector_all(&crate::dom::Selector::class("drawer-resizer"))
                .len(),
            1
        );
    }

    #[test]
    fn test_content_offset_without_region() {
        let selectors = Selectors::default();
        let mut doc = page(false);
        let mut panel = DomPanel::find(&mut doc, &selectors).unwrap();
        assert!(!panel.set_content_offset(100));
    }

    #[test]
    fn test_content_offset_sets_padding() {
        let selectors = Selectors::default();
        let mut doc = page(true);
        let mut panel = DomPanel::find(&mut doc, &selectors).unwrap();
        assert!(panel.set_content_offset(250));

        let content = doc.query_selector(&selectors.content).unwrap();
        assert_eq!(
            doc.get(content).unwrap().style("padding-left"),
            Some("250px")
        );
    }
}
