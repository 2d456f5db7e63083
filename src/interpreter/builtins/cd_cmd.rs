//! cd - Change directory builtin
//!
//! With no argument, changes to `$HOME`; with one argument, to that path.
//! Two or more arguments is an arity error. The change applies to the real
//! process working directory, so later children and relative redirection
//! paths resolve from there.

use crate::interpreter::errors::ShellError;

use super::BuiltinOutput;

/// Handle the cd builtin.
pub fn handle_cd(args: &[String]) -> Result<BuiltinOutput, ShellError> {
    if args.len() > 1 {
        return Err(ShellError::BuiltinArity { builtin: "cd" });
    }
    let target = match args.first() {
        Some(path) => path.clone(),
        None => std::env::var("HOME").map_err(|_| ShellError::HomeNotSet)?,
    };
    std::env::set_current_dir(&target)
        .map_err(|source| ShellError::DirectoryChange { target, source })?;
    Ok(BuiltinOutput::ok())
}
