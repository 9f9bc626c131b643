//! Drawer width state and drag sessions

use serde::Serialize;

/// Effective drawer state shared by the synchronizer and the resize controller
///
/// `width` is the last width the drawer settled on. It starts unknown and is
/// only replaced by a stored or usable measured width, so a failed
/// measurement keeps the previous value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DrawerState {
    pub width: Option<i32>,
    pub is_open: bool,
}

impl DrawerState {
    /// Leading offset the content region should have
    ///
    /// `Some(0)` when closed, the width when open, `None` when open with no
    /// known width.
    pub fn content_offset(&self) -> Option<i32> {
        if self.is_open {
            self.width
        } else {
            Some(0)
        }
    }
}

/// One resize gesture, from press to release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragSession {
    /// Pointer X at press
    pub start_x: i32,
    /// Container width at press
    pub start_width: i32,
}

impl DragSession {
    pub fn begin(origin_x: i32, start_width: i32) -> Self {
        Self {
            start_x: origin_x,
            start_width,
        }
    }

    /// Width for a pointer at `x`: baseline plus horizontal travel
    pub fn update(&self, x: i32) -> i32 {
        self.start_width.saturating_add(x.saturating_sub(self.start_x))
    }
}

/// Idle/Dragging state machine for the drag handle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResizeState {
    session: Option<DragSession>,
}

impl ResizeState {
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start (or restart) a session, returning true if one was already active
    pub fn begin(&mut self, session: DragSession) -> bool {
        self.session.replace(session).is_some()
    }

    /// End the active session, if any
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
