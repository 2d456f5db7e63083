//! printenv - Print the process environment builtin
//!
//! One `NAME=VALUE` line per environment entry, in the order the platform
//! reports them. Read-only: shell variables that were never exported do
//! not appear. Arguments are ignored.

use super::BuiltinOutput;

/// Handle the printenv builtin.
pub fn handle_printenv() -> BuiltinOutput {
    let mut out = String::new();
    for (name, value) in std::env::vars_os() {
        out.push_str(&name.to_string_lossy());
        out.push('=');
        out.push_str(&value.to_string_lossy());
        out.push('\n');
    }
    BuiltinOutput::with_stdout(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printenv_lists_exported_entries() {
        std::env::set_var("NANOSH_TEST_PRINTENV", "visible");
        let out = handle_printenv();
        assert!(out.stdout.contains("NANOSH_TEST_PRINTENV=visible\n"));
        std::env::remove_var("NANOSH_TEST_PRINTENV");
    }

    #[test]
    fn test_printenv_lines_are_name_value_pairs() {
        std::env::set_var("NANOSH_TEST_PRINTENV_SHAPE", "a b");
        let out = handle_printenv();
        let line = out
            .stdout
            .lines()
            .find(|l| l.starts_with("NANOSH_TEST_PRINTENV_SHAPE="))
            .unwrap();
        assert_eq!(line, "NANOSH_TEST_PRINTENV_SHAPE=a b");
        std::env::remove_var("NANOSH_TEST_PRINTENV_SHAPE");
    }
}
