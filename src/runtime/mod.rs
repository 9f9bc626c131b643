//! Event-loop driver for the drawer
//!
//! `Runtime` stands in for the browser: it owns the page, keeps the listener
//! registry, delivers events along their bubbling path, runs `update` and
//! carries out the returned commands. Everything runs synchronously on the
//! caller's thread; each event is fully applied before the next one.

mod event;

pub use event::{DomEvent, EventKind, ListenTarget, Listener, ListenerRole};

use serde::Serialize;

use crate::commands::Cmd;
use crate::config::{DrawerConfig, Selectors};
use crate::dom::{Document, NodeId};
use crate::messages::{DragMsg, Msg, PageMsg};
use crate::model::{AppModel, DrawerState};
use crate::panel::{find_handle, DomPanel, PanelHandle};
use crate::update::update;

/// Counters for what the runtime has done so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeStats {
    /// Events delivered through `dispatch`
    pub events: u64,
    /// Messages passed to `update`
    pub updates: u64,
    /// `Cmd::Redraw` requests
    pub redraws: u64,
    /// Pointer moves dropped in favour of a later one
    pub coalesced: u64,
}

/// Observable drawer state, for printing and assertions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub panel_width: Option<String>,
    pub stored_width: Option<String>,
    pub content_offset: Option<String>,
    pub is_open: Option<bool>,
    pub dragging: bool,
    pub handles: usize,
    pub listeners: usize,
    pub global_listeners: usize,
    pub drawer: DrawerState,
}

/// Host page plus drawer model, driven one event at a time
pub struct Runtime {
    document: Document,
    model: AppModel,
    selectors: Selectors,
    listeners: Vec<Listener>,
    pending_move: Option<i32>,
    stats: RuntimeStats,
}

impl Runtime {
    pub fn new(document: Document, config: DrawerConfig) -> Self {
        Self {
            document,
            selectors: config.selectors.clone(),
            model: AppModel::new(config),
            listeners: Vec::new(),
            pending_move: None,
            stats: RuntimeStats::default(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable page access, for the host's own changes (layout, classes)
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn stats(&self) -> RuntimeStats {
        self.stats
    }

    pub fn panel_node(&self) -> Option<NodeId> {
        self.document.query_selector(&self.selectors.panel)
    }

    pub fn handle_node(&self) -> Option<NodeId> {
        find_handle(&self.document, &self.selectors)
    }

    pub fn content_node(&self) -> Option<NodeId> {
        self.document.query_selector(&self.selectors.content)
    }

    /// Deliver the page-ready signal
    pub fn ready(&mut self) {
        self.flush_pending_move();
        self.run(PageMsg::Ready.into());
    }

    /// Deliver an event to every listener on its bubbling path
    ///
    /// Listeners are collected before any of them runs, so listeners added
    /// while handling the event only see later events.
    pub fn dispatch(&mut self, event: DomEvent) {
        #[cfg(feature = "profile-tracing")]
        let _span = tracing::trace_span!("dispatch", kind = ?event.kind).entered();

        self.stats.events += 1;

        let mut path: Vec<ListenTarget> = self
            .document
            .ancestors(event.target)
            .map(ListenTarget::Node)
            .collect();
        path.push(ListenTarget::Document);

        let roles: Vec<ListenerRole> = path
            .iter()
            .flat_map(|target| {
                self.listeners
                    .iter()
                    .filter(move |l| l.target == *target && l.role.kind() == event.kind)
                    .map(|l| l.role)
            })
            .collect();

        for role in roles {
            let msg = role.to_msg(&event);
            match msg {
                Msg::Drag(DragMsg::Move { x }) if self.model.config.coalesce_moves => {
                    if self.pending_move.replace(x).is_some() {
                        self.stats.coalesced += 1;
                    }
                }
                Msg::Drag(DragMsg::Move { .. }) => self.run(msg),
                // Anything else sees the drawer as if every move had applied
                _ => {
                    self.flush_pending_move();
                    self.run(msg);
                }
            }
        }
    }

    /// Apply the latest coalesced pointer move, if any
    pub fn animation_frame(&mut self) {
        self.flush_pending_move();
    }

    fn flush_pending_move(&mut self) {
        if let Some(x) = self.pending_move.take() {
            self.run(DragMsg::Move { x }.into());
        }
    }

    /// Press the drag handle at `x`, returning false when there is no handle
    pub fn press_handle(&mut self, x: i32) -> bool {
        let Some(handle) = self.handle_node() else {
            return false;
        };
        self.dispatch(DomEvent::new(EventKind::MouseDown, handle, x));
        true
    }

    /// Move the pointer over the page body
    pub fn pointer_move(&mut self, x: i32) {
        let root = self.document.root();
        self.dispatch(DomEvent::new(EventKind::MouseMove, root, x));
    }

    /// Release the pointer over the page body
    pub fn pointer_release(&mut self, x: i32) {
        let root = self.document.root();
        self.dispatch(DomEvent::new(EventKind::MouseUp, root, x));
    }

    /// Fire transition-end on `target`
    pub fn transition_end(&mut self, target: NodeId) {
        self.dispatch(DomEvent::new(EventKind::TransitionEnd, target, 0));
    }

    /// Open or close the panel the way the host layout does: toggle the
    /// closed marker, then finish the slide transition
    pub fn set_open(&mut self, open: bool) {
        let Some(panel) = self.panel_node() else {
            return;
        };
        if let Some(el) = self.document.get_mut(panel) {
            if open {
                el.remove_class(&self.selectors.closed_class);
            } else {
                el.add_class(&self.selectors.closed_class);
            }
        }
        self.transition_end(panel);
    }

    fn run(&mut self, msg: Msg) {
        self.stats.updates += 1;
        let cmd = {
            let mut panel = DomPanel::find(&mut self.document, &self.selectors);
            update(
                &mut self.model,
                panel.as_mut().map(|p| p as &mut dyn PanelHandle),
                msg,
            )
        };
        if let Some(cmd) = cmd {
            for cmd in cmd.flatten() {
                self.perform(cmd);
            }
        }
    }

    fn perform(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Batch(_) => {}
            Cmd::Redraw => self.stats.redraws += 1,
            Cmd::ListenHandle => {
                if let Some(handle) = self.handle_node() {
                    self.listen(Listener::new(
                        ListenTarget::Node(handle),
                        ListenerRole::HandlePress,
                    ));
                }
            }
            Cmd::ListenTransitions => {
                if let Some(panel) = self.panel_node() {
                    self.listen(Listener::new(
                        ListenTarget::Node(panel),
                        ListenerRole::PanelTransition,
                    ));
                }
            }
            Cmd::ListenGlobal => {
                self.listen(Listener::new(ListenTarget::Document, ListenerRole::GlobalMove));
                self.listen(Listener::new(
                    ListenTarget::Document,
                    ListenerRole::GlobalRelease,
                ));
            }
            Cmd::UnlistenGlobal => {
                self.listeners.retain(|l| !l.is_global());
                self.pending_move = None;
            }
        }
    }

    fn listen(&mut self, listener: Listener) {
        if !self.listeners.contains(&listener) {
            tracing::trace!(?listener, "Listener added");
            self.listeners.push(listener);
        }
    }

    /// Capture the observable drawer state
    pub fn snapshot(&self) -> Snapshot {
        let panel = self.panel_node().and_then(|n| self.document.get(n));
        let content = self.content_node().and_then(|n| self.document.get(n));
        let handles = self
            .document
            .query_selector_all(&crate::dom::Selector::class(&self.selectors.handle_class))
            .len();

        Snapshot {
            panel_width: panel.and_then(|el| el.style("width")).map(str::to_string),
            stored_width: panel
                .and_then(|el| el.attribute(&self.selectors.width_attribute))
                .map(str::to_string),
            content_offset: content
                .and_then(|el| el.style("padding-left"))
                .map(str::to_string),
            is_open: panel.map(|el| !el.has_class(&self.selectors.closed_class)),
            dragging: self.model.resize.is_dragging(),
            handles,
            listeners: self.listeners.len(),
            global_listeners: self.listeners.iter().filter(|l| l.is_global()).count(),
            drawer: self.model.drawer,
        }
    }
}
