//! Page events and listener registrations

use crate::dom::NodeId;
use crate::messages::{DragMsg, Msg, PageMsg};

/// Kind of page event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MouseDown,
    MouseMove,
    MouseUp,
    TransitionEnd,
}

/// A page event, delivered at `target` and bubbling up to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: NodeId,
    pub page_x: i32,
}

impl DomEvent {
    pub fn new(kind: EventKind, target: NodeId, page_x: i32) -> Self {
        Self {
            kind,
            target,
            page_x,
        }
    }
}

/// Where a listener is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenTarget {
    /// Page-global: sees every event after it bubbles past the root
    Document,
    Node(NodeId),
}

/// What a listener turns its events into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerRole {
    HandlePress,
    GlobalMove,
    GlobalRelease,
    PanelTransition,
}

impl ListenerRole {
    pub fn kind(&self) -> EventKind {
        match self {
            ListenerRole::HandlePress => EventKind::MouseDown,
            ListenerRole::GlobalMove => EventKind::MouseMove,
            ListenerRole::GlobalRelease => EventKind::MouseUp,
            ListenerRole::PanelTransition => EventKind::TransitionEnd,
        }
    }

    pub fn to_msg(&self, event: &DomEvent) -> Msg {
        match self {
            ListenerRole::HandlePress => DragMsg::Press { x: event.page_x }.into(),
            ListenerRole::GlobalMove => DragMsg::Move { x: event.page_x }.into(),
            ListenerRole::GlobalRelease => DragMsg::Release.into(),
            ListenerRole::PanelTransition => PageMsg::TransitionEnd.into(),
        }
    }
}

/// A registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Listener {
    pub target: ListenTarget,
    pub role: ListenerRole,
}

impl Listener {
    pub fn new(target: ListenTarget, role: ListenerRole) -> Self {
        Self { target, role }
    }

    pub fn is_global(&self) -> bool {
        matches!(
            self.role,
            ListenerRole::GlobalMove | ListenerRole::GlobalRelease
        )
    }
}
