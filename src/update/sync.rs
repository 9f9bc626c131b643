//! Width synchronizer
//!
//! Re-establishes "content offset == panel open ? width : 0" at page-ready
//! and after every transition-end on the panel. Transition-end fires for any
//! finished transition inside the panel, so everything here is cheap and
//! idempotent.

use crate::commands::Cmd;
use crate::model::AppModel;
use crate::panel::PanelHandle;

/// When the target width is written back to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidthGate {
    /// Write even while the panel is closed (page-ready default)
    Always,
    /// Write only while the panel is open
    WhenOpen,
}

/// Pick the width to apply: stored attribute, else a usable measurement,
/// else whatever the drawer last settled on
fn target_width(model: &mut AppModel, panel: &dyn PanelHandle) -> Option<i32> {
    if let Some(width) = panel.stored_width().or_else(|| panel.width()) {
        model.drawer.width = Some(width);
    }
    model.drawer.width
}

/// Reconcile panel width and content offset with the panel's open state
pub fn reconcile_with(model: &mut AppModel, panel: &mut dyn PanelHandle, gate: WidthGate) -> Cmd {
    let width = target_width(model, panel);
    model.drawer.is_open = panel.is_open();

    match width {
        Some(px) if gate == WidthGate::Always || model.drawer.is_open => {
            panel.apply_width(px);
        }
        Some(_) => {}
        None => tracing::debug!("No stored or measurable panel width, width left unchanged"),
    }

    match model.drawer.content_offset() {
        Some(offset) => {
            if !panel.set_content_offset(offset) {
                tracing::debug!("No content region on page, offset skipped");
            }
        }
        None => tracing::debug!("Panel open with unknown width, offset skipped"),
    }

    tracing::debug!(
        width = ?model.drawer.width,
        is_open = model.drawer.is_open,
        "Reconciled drawer"
    );
    Cmd::Redraw
}

/// Reconcile, writing the width only while the panel is open
pub fn reconcile(model: &mut AppModel, panel: &mut dyn PanelHandle) -> Cmd {
    reconcile_with(model, panel, WidthGate::WhenOpen)
}

/// Establish the baseline at page-ready
pub fn on_ready(model: &mut AppModel, panel: &mut dyn PanelHandle) -> Cmd {
    let gate = if model.config.gate_width_on_load {
        WidthGate::WhenOpen
    } else {
        WidthGate::Always
    };
    reconcile_with(model, panel, gate)
}

/// Panel finished a transition (open, close, or anything else)
pub fn on_transition_end(model: &mut AppModel, panel: &mut dyn PanelHandle) -> Cmd {
    reconcile(model, panel)
}
