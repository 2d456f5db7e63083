//! echo - Print arguments builtin
//!
//! Prints each argument followed by a single space, then ends the line.
//! The separator follows every argument including the last, so `echo a b`
//! prints `a b ` before the newline. With no arguments the output is a
//! bare newline.

use super::BuiltinOutput;

/// Handle the echo builtin. Never fails.
pub fn handle_echo(args: &[String]) -> BuiltinOutput {
    let mut out = String::new();
    for arg in args {
        out.push_str(arg);
        out.push(' ');
    }
    out.push('\n');
    BuiltinOutput::with_stdout(out)
}
