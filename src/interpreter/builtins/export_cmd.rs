//! export - Publish a shell variable builtin
//!
//! `export NAME` copies the stored value of NAME into the process
//! environment, so programs launched from then on inherit it. Exactly one
//! argument is required, and the name must already be in the store.

use crate::interpreter::errors::ShellError;
use crate::interpreter::state::ShellState;

use super::BuiltinOutput;

/// Handle the export builtin.
pub fn handle_export(state: &ShellState, args: &[String]) -> Result<BuiltinOutput, ShellError> {
    if args.len() != 1 {
        return Err(ShellError::BuiltinArity { builtin: "export" });
    }
    state.vars.export(&args[0])?;
    Ok(BuiltinOutput::ok())
}
