//! Drawer - drag-resizable side panel
//!
//! This crate provides a resize controller and a width synchronizer for a
//! collapsible side drawer, implementing the Elm Architecture pattern over
//! an in-memory host page.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod dom;
pub mod messages;
pub mod model;
pub mod panel;
pub mod runtime;
pub mod scenario;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::DrawerConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use panel::PanelHandle;
pub use runtime::Runtime;
