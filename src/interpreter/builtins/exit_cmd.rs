//! exit - Terminate the session builtin
//!
//! Prints the farewell line and asks the session loop to stop. Arguments
//! are ignored; the session always terminates successfully.

use super::BuiltinOutput;

/// Farewell line printed by `exit`, and by the session on end of input.
pub const FAREWELL: &str = "Good Bye :)";

/// Handle the exit builtin.
pub fn handle_exit(_args: &[String]) -> BuiltinOutput {
    BuiltinOutput {
        stdout: format!("{}\n", FAREWELL),
        exit: true,
    }
}
