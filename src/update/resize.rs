//! Resize controller
//!
//! Installs the drag handle and drives the Idle/Dragging state machine.
//! Page-global move/release listeners exist only while a session is active;
//! they are requested with `Cmd::ListenGlobal` on press and dropped with
//! `Cmd::UnlistenGlobal` on release.

use crate::commands::Cmd;
use crate::messages::DragMsg;
use crate::model::{AppModel, DragSession};
use crate::panel::PanelHandle;

/// Attach the drag handle once per page
pub fn setup(model: &mut AppModel, panel: &mut dyn PanelHandle) -> Cmd {
    if model.handle_installed {
        return Cmd::None;
    }
    if !panel.install_handle() {
        return Cmd::None;
    }
    model.handle_installed = true;
    tracing::info!("Drag handle installed");
    Cmd::ListenHandle
}

/// Update function for drag messages
pub fn update_resize(
    model: &mut AppModel,
    panel: Option<&mut dyn PanelHandle>,
    msg: DragMsg,
) -> Option<Cmd> {
    match msg {
        DragMsg::Press { x } => {
            let panel = panel?;
            let Some(start_width) = panel.container_width() else {
                tracing::debug!("Container width unmeasurable, drag not started");
                return None;
            };

            let restarted = model.resize.begin(DragSession::begin(x, start_width));
            tracing::info!(start_x = x, start_width, restarted, "Drag session started");

            // Listeners from the interrupted session are still attached
            if restarted {
                None
            } else {
                Some(Cmd::ListenGlobal)
            }
        }

        DragMsg::Move { x } => {
            let session = *model.resize.session()?;
            let Some(panel) = panel else {
                tracing::debug!("Panel gone mid-drag, move ignored");
                return None;
            };

            let width = model.config.clamp_width(session.update(x));
            panel.apply_width(width);
            model.drawer.width = Some(width);
            if !panel.set_content_offset(width) {
                tracing::trace!("No content region on page, offset skipped");
            }

            tracing::trace!(x, width, "Drag move");
            Some(Cmd::Redraw)
        }

        DragMsg::Release => {
            let session = model.resize.end()?;
            tracing::info!(
                start_x = session.start_x,
                width = ?model.drawer.width,
                "Drag session ended"
            );
            Some(Cmd::UnlistenGlobal)
        }
    }
}
