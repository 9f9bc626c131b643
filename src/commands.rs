//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host must perform after an update.
//! The update functions never touch listener registration directly; they
//! ask for it here and the runtime carries it out.

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Panel or content region was mutated
    Redraw,
    /// Listen for presses on the drag handle
    ListenHandle,
    /// Listen for transition-end on the panel
    ListenTransitions,
    /// Listen for page-global pointer move/release (drag session started)
    ListenGlobal,
    /// Stop listening for page-global pointer move/release
    UnlistenGlobal,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Flatten into the list of leaf commands, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Whether this command (or any nested one) is `cmd`
    pub fn contains(&self, cmd: &Cmd) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.contains(cmd)),
            other => other == cmd,
        }
    }
}
