//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. The panel is
//! passed in already discovered; `None` means the page has no drawer and
//! every message becomes a silent no-op.

pub mod resize;
pub mod sync;

use crate::commands::Cmd;
use crate::messages::{Msg, PageMsg};
use crate::model::AppModel;
use crate::panel::PanelHandle;

pub use resize::update_resize;
pub use sync::{reconcile, WidthGate};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, panel: Option<&mut dyn PanelHandle>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Page(m) => update_page(model, panel, m),
        Msg::Drag(m) => update_resize(model, panel, m),
    }
}

/// Handle page lifecycle messages
pub fn update_page(
    model: &mut AppModel,
    panel: Option<&mut dyn PanelHandle>,
    msg: PageMsg,
) -> Option<Cmd> {
    match msg {
        PageMsg::Ready => {
            if model.ready {
                tracing::debug!("Page-ready already handled");
                return None;
            }
            model.ready = true;

            let Some(panel) = panel else {
                tracing::debug!("No drawer panel on page, drawer inactive");
                return None;
            };

            let sync_cmd = sync::on_ready(model, &mut *panel);
            let setup_cmd = resize::setup(model, &mut *panel);
            Some(Cmd::Batch(vec![sync_cmd, setup_cmd, Cmd::ListenTransitions]))
        }

        PageMsg::TransitionEnd => {
            let Some(panel) = panel else {
                tracing::debug!("Transition-end without a panel, ignored");
                return None;
            };
            Some(sync::on_transition_end(model, panel))
        }
    }
}
