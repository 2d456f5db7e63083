//! Builtin Dispatch
//!
//! Routes a parsed command to its builtin handler by exact `argv[0]` match.
//! `None` means the name is not a builtin and the command falls through to
//! the process executor; a path like `/bin/echo` is never a builtin.

use crate::interpreter::builtins::{
    handle_cd, handle_echo, handle_exit, handle_export, handle_printenv, handle_pwd,
    BuiltinOutput,
};
use crate::interpreter::errors::ShellError;
use crate::interpreter::state::ShellState;
use crate::parser::types::Command;

/// Dispatch `command` to a builtin handler, if `argv[0]` names one.
pub fn dispatch_builtin(
    state: &ShellState,
    command: &Command,
) -> Option<Result<BuiltinOutput, ShellError>> {
    let name = command.program()?;
    let args = &command.argv[1..];
    let result = match name {
        "exit" => Ok(handle_exit(args)),
        "echo" => Ok(handle_echo(args)),
        "pwd" => handle_pwd(),
        "cd" => handle_cd(args),
        "export" => handle_export(state, args),
        "printenv" => Ok(handle_printenv()),
        _ => return None,
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(argv: &[&str]) -> Command {
        Command {
            argv: argv.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_unknown_name_falls_through() {
        let state = ShellState::new();
        assert!(dispatch_builtin(&state, &command(&["ls", "-l"])).is_none());
    }

    #[test]
    fn test_builtin_match_is_exact() {
        let state = ShellState::new();
        assert!(dispatch_builtin(&state, &command(&["/bin/echo", "hi"])).is_none());
        assert!(dispatch_builtin(&state, &command(&["Echo"])).is_none());
        assert!(dispatch_builtin(&state, &command(&["echoo"])).is_none());
    }

    #[test]
    fn test_empty_command_is_not_dispatched() {
        let state = ShellState::new();
        assert!(dispatch_builtin(&state, &Command::default()).is_none());
    }

    #[test]
    fn test_echo_dispatches_with_its_arguments() {
        let state = ShellState::new();
        let result = dispatch_builtin(&state, &command(&["echo", "a", "b"])).unwrap();
        assert_eq!(result.unwrap().stdout, "a b \n");
    }

    #[test]
    fn test_builtin_errors_surface_through_dispatch() {
        let state = ShellState::new();
        let result = dispatch_builtin(&state, &command(&["cd", "a", "b"])).unwrap();
        assert!(matches!(result, Err(ShellError::BuiltinArity { .. })));
    }
}
