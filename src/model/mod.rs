//! Model types for the Elm-style architecture
//!
//! - `drawer` - `DrawerState`, `DragSession`, `ResizeState`
//! - `AppModel` - everything the update functions read and write

pub mod drawer;

pub use drawer::{DragSession, DrawerState, ResizeState};

use crate::config::DrawerConfig;

/// Complete drawer model
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    pub config: DrawerConfig,
    pub drawer: DrawerState,
    pub resize: ResizeState,
    /// Drag handle has been attached to the panel
    pub handle_installed: bool,
    /// Page-ready has been handled
    pub ready: bool,
}

impl AppModel {
    pub fn new(config: DrawerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }
}
