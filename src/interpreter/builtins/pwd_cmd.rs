//! pwd - Print working directory builtin
//!
//! Reads the real process working directory; there is no shell-side copy.
//! Failure to read it back (directory deleted underneath the session) is
//! reported, not fatal.

use crate::interpreter::errors::ShellError;

use super::BuiltinOutput;

/// Handle the pwd builtin.
pub fn handle_pwd() -> Result<BuiltinOutput, ShellError> {
    let cwd = std::env::current_dir().map_err(ShellError::CurrentDir)?;
    Ok(BuiltinOutput::with_stdout(format!("{}\n", cwd.display())))
}
