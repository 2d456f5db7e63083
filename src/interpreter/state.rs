//! Interpreter State
//!
//! Mutable state owned by one shell session. The working directory and the
//! exported environment live in the process itself, where children inherit
//! them directly; only the variable store and the last exit status are
//! shell-local.

use crate::interpreter::vars::VarStore;

#[derive(Debug, Default, Clone)]
pub struct ShellState {
    /// Shell variables set by assignment lines.
    pub vars: VarStore,
    /// Exit code of the most recently completed command.
    pub last_exit_code: i32,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }
}
