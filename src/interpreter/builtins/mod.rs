//! Builtin Commands
//!
//! Commands handled in-process, dispatched on `argv[0]`. Builtins write to
//! the session's own standard output (collected as text and printed by the
//! session); redirection directives on a builtin line are parsed but not
//! applied.

pub mod cd_cmd;
pub mod echo_cmd;
pub mod exit_cmd;
pub mod export_cmd;
pub mod printenv_cmd;
pub mod pwd_cmd;

pub use cd_cmd::handle_cd;
pub use echo_cmd::handle_echo;
pub use exit_cmd::{handle_exit, FAREWELL};
pub use export_cmd::handle_export;
pub use printenv_cmd::handle_printenv;
pub use pwd_cmd::handle_pwd;

/// Output of a builtin invocation.
///
/// `stdout` is printed verbatim by the session. `exit` asks the session
/// loop to stop after printing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuiltinOutput {
    pub stdout: String,
    pub exit: bool,
}

impl BuiltinOutput {
    /// Success with no output.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Success with collected stdout text.
    pub fn with_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit: false,
        }
    }
}
