//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Page lifecycle signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMsg {
    /// Document finished loading (fires once)
    Ready,
    /// A visual transition on the panel (or anything inside it) completed
    TransitionEnd,
}

/// Drag-handle pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMsg {
    /// Pointer pressed on the drag handle at page X
    Press { x: i32 },
    /// Pointer moved anywhere on the page
    Move { x: i32 },
    /// Pointer released anywhere on the page
    Release,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Page(PageMsg),
    Drag(DragMsg),
}

impl From<PageMsg> for Msg {
    fn from(msg: PageMsg) -> Self {
        Msg::Page(msg)
    }
}

impl From<DragMsg> for Msg {
    fn from(msg: DragMsg) -> Self {
        Msg::Drag(msg)
    }
}
