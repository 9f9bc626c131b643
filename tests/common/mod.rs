//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use drawer::config::DrawerConfig;
use drawer::dom::{Document, Element, NodeId};
use drawer::model::AppModel;
use drawer::panel::PanelHandle;
use drawer::runtime::Runtime;
use drawer::util::parse_int_prefix;

/// Build the host page layout: a drawer container holding the sized
/// `.q-drawer` panel (layout width `width`) whose content element hosts the
/// drag handle, followed by the `.q-page-container` content region.
pub fn drawer_page(width: f64) -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let container = doc.append_child(
        root,
        Element::new("div").with_class("q-drawer-container"),
    );
    let panel = doc.append_child(
        container,
        Element::new("aside")
            .with_class("q-drawer")
            .with_class("q-drawer--left")
            .with_layout_width(width),
    );
    doc.append_child(
        panel,
        Element::new("div")
            .with_class("q-drawer__content")
            .with_class("nicegui-drawer"),
    );
    doc.append_child(root, Element::new("div").with_class("q-page-container"));
    doc
}

/// Same as `drawer_page` without the content region
pub fn drawer_page_without_content(width: f64) -> Document {
    let mut doc = drawer_page(width);
    let content = doc
        .query_selector(&drawer::dom::Selector::class("q-page-container"))
        .unwrap();
    doc.detach(content);
    doc
}

/// A page with no drawer at all
pub fn plain_page() -> Document {
    let mut doc = Document::new();
    let root = doc.root();
    let main = doc.append_child(root, Element::new("main"));
    doc.append_child(main, Element::new("div").with_class("q-page-container"));
    doc
}

/// Runtime over `drawer_page(width)` with default config, page-ready delivered
pub fn ready_runtime(width: f64) -> Runtime {
    let mut rt = Runtime::new(drawer_page(width), DrawerConfig::default());
    rt.ready();
    rt
}

pub fn panel_node(rt: &Runtime) -> NodeId {
    rt.panel_node().expect("page has a panel")
}

/// Panel inline width, parsed
pub fn panel_width(rt: &Runtime) -> Option<i32> {
    rt.snapshot().panel_width.as_deref().and_then(parse_int_prefix)
}

/// Content region leading offset, parsed
pub fn content_offset(rt: &Runtime) -> Option<i32> {
    rt.snapshot().content_offset.as_deref().and_then(parse_int_prefix)
}

/// Stored-width attribute, parsed
pub fn stored_width(rt: &Runtime) -> Option<i32> {
    rt.snapshot().stored_width.as_deref().and_then(parse_int_prefix)
}

/// Write recorded by `FakePanel`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelWrite {
    Width(i32),
    StoredWidth(i32),
    ContentOffset(i32),
    Handle,
}

/// In-memory `PanelHandle` that records every write
#[derive(Debug, Clone)]
pub struct FakePanel {
    pub rendered: Option<i32>,
    pub stored: Option<String>,
    pub open: bool,
    pub container: Option<i32>,
    pub has_host: bool,
    pub has_content: bool,
    pub handles: usize,
    pub offset: Option<i32>,
    pub writes: Vec<PanelWrite>,
}

impl FakePanel {
    pub fn new(rendered: i32) -> Self {
        Self {
            rendered: Some(rendered),
            stored: None,
            open: true,
            container: Some(rendered),
            has_host: true,
            has_content: true,
            handles: 0,
            offset: None,
            writes: Vec::new(),
        }
    }

    pub fn closed(mut self) -> Self {
        self.open = false;
        self
    }

    pub fn with_stored(mut self, stored: &str) -> Self {
        self.stored = Some(stored.to_string());
        self
    }
}

impl PanelHandle for FakePanel {
    fn width(&self) -> Option<i32> {
        self.rendered.filter(|&w| w != 0)
    }

    fn set_width(&mut self, px: i32) {
        self.rendered = Some(px);
        self.writes.push(PanelWrite::Width(px));
    }

    fn stored_width(&self) -> Option<i32> {
        self.stored.as_deref().and_then(parse_int_prefix)
    }

    fn set_stored_width(&mut self, px: i32) {
        self.stored = Some(px.to_string());
        self.writes.push(PanelWrite::StoredWidth(px));
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn container_width(&self) -> Option<i32> {
        self.container
    }

    fn install_handle(&mut self) -> bool {
        if !self.has_host || self.handles > 0 {
            return false;
        }
        self.handles += 1;
        self.writes.push(PanelWrite::Handle);
        true
    }

    fn set_content_offset(&mut self, px: i32) -> bool {
        if !self.has_content {
            return false;
        }
        self.offset = Some(px);
        self.writes.push(PanelWrite::ContentOffset(px));
        true
    }
}

pub fn test_model() -> AppModel {
    AppModel::new(DrawerConfig::default())
}
