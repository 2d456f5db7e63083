//! Tokenizer
//!
//! Splits a substituted line on whitespace runs into argv tokens, treating
//! `<`, `>`, and `2>` as redirection directives:
//! - An operator must stand alone as a token; `>out` is an ordinary argument
//! - The first non-operator token after an operator is the target path and
//!   is kept out of argv
//! - Operator recognition takes precedence over path consumption, so an
//!   operator directly after another operator re-switches the pending mode
//! - A trailing operator with no path token is a silent no-op
//!
//! Reaching the argv bound stops the scan: the remainder of the line is
//! discarded and the command collected so far is returned with `truncated`
//! set, so the caller can warn and still run it.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::parser::types::{is_delimiter, Command, Tokenized};

/// Stream selected by a redirection operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RedirectMode {
    Input,
    Output,
    Error,
}

lazy_static! {
    /// Operator tokens and the stream each one selects.
    static ref REDIRECT_OPS: HashMap<&'static str, RedirectMode> = {
        let mut ops = HashMap::new();
        ops.insert("<", RedirectMode::Input);
        ops.insert(">", RedirectMode::Output);
        ops.insert("2>", RedirectMode::Error);
        ops
    };
}

/// Split `line` into a command, collecting at most `max_args` argv entries.
pub fn tokenize(line: &str, max_args: usize) -> Tokenized {
    let mut command = Command::default();
    let mut truncated = false;
    let mut pending: Option<RedirectMode> = None;

    for token in line.split(is_delimiter).filter(|t| !t.is_empty()) {
        if let Some(&mode) = REDIRECT_OPS.get(token) {
            pending = Some(mode);
            continue;
        }
        if let Some(mode) = pending.take() {
            let slot = match mode {
                RedirectMode::Input => &mut command.redirect.input,
                RedirectMode::Output => &mut command.redirect.output,
                RedirectMode::Error => &mut command.redirect.error,
            };
            *slot = Some(token.to_string());
            continue;
        }
        command.argv.push(token.to_string());
        if command.argv.len() >= max_args {
            truncated = true;
            break;
        }
    }

    Tokenized { command, truncated }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::types::MAX_ARGS;

    fn argv(tokenized: &Tokenized) -> Vec<&str> {
        tokenized.command.argv.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_splits_on_whitespace_runs() {
        let t = tokenize("a   b\tc", MAX_ARGS);
        assert_eq!(argv(&t), ["a", "b", "c"]);
        assert!(t.command.redirect.is_empty());
        assert!(!t.truncated);
    }

    #[test]
    fn test_empty_line_yields_empty_command() {
        let t = tokenize("", MAX_ARGS);
        assert!(t.command.argv.is_empty());
        assert!(!t.truncated);
        let t = tokenize("   \t  ", MAX_ARGS);
        assert!(t.command.argv.is_empty());
    }

    #[test]
    fn test_output_redirection() {
        let t = tokenize("ls -l > out.txt", MAX_ARGS);
        assert_eq!(argv(&t), ["ls", "-l"]);
        assert_eq!(t.command.redirect.output.as_deref(), Some("out.txt"));
        assert_eq!(t.command.redirect.input, None);
    }

    #[test]
    fn test_input_and_error_redirection() {
        let t = tokenize("sort < in.txt 2> err.txt", MAX_ARGS);
        assert_eq!(argv(&t), ["sort"]);
        assert_eq!(t.command.redirect.input.as_deref(), Some("in.txt"));
        assert_eq!(t.command.redirect.error.as_deref(), Some("err.txt"));
    }

    #[test]
    fn test_operator_must_stand_alone() {
        let t = tokenize("cmd >out.txt", MAX_ARGS);
        assert_eq!(argv(&t), ["cmd", ">out.txt"]);
        assert!(t.command.redirect.is_empty());
    }

    #[test]
    fn test_last_redirection_wins() {
        let t = tokenize("cmd > a.txt > b.txt", MAX_ARGS);
        assert_eq!(argv(&t), ["cmd"]);
        assert_eq!(t.command.redirect.output.as_deref(), Some("b.txt"));
    }

    #[test]
    fn test_operator_after_operator_switches_mode() {
        // `<` never receives a path; `>` claims the following token.
        let t = tokenize("cmd < > f", MAX_ARGS);
        assert_eq!(argv(&t), ["cmd"]);
        assert_eq!(t.command.redirect.input, None);
        assert_eq!(t.command.redirect.output.as_deref(), Some("f"));
    }

    #[test]
    fn test_trailing_operator_is_a_no_op() {
        let t = tokenize("cmd arg >", MAX_ARGS);
        assert_eq!(argv(&t), ["cmd", "arg"]);
        assert!(t.command.redirect.is_empty());
    }

    #[test]
    fn test_redirection_without_argv() {
        let t = tokenize("> f", MAX_ARGS);
        assert!(t.command.argv.is_empty());
        assert_eq!(t.command.redirect.output.as_deref(), Some("f"));
    }

    #[test]
    fn test_path_tokens_stay_out_of_argv() {
        let t = tokenize("wc -l < in > out 2> err", MAX_ARGS);
        assert_eq!(argv(&t), ["wc", "-l"]);
        assert_eq!(t.command.redirect.input.as_deref(), Some("in"));
        assert_eq!(t.command.redirect.output.as_deref(), Some("out"));
        assert_eq!(t.command.redirect.error.as_deref(), Some("err"));
    }

    #[test]
    fn test_argv_bound_truncates_rest_of_line() {
        let line = (0..70).map(|i| format!("a{}", i)).collect::<Vec<_>>().join(" ");
        let t = tokenize(&line, MAX_ARGS);
        assert_eq!(t.command.argv.len(), MAX_ARGS);
        assert!(t.truncated);
    }

    #[test]
    fn test_bound_discards_trailing_redirection() {
        let t = tokenize("cmd a b > out.txt", 3);
        assert_eq!(argv(&t), ["cmd", "a", "b"]);
        assert!(t.truncated);
        assert!(t.command.redirect.is_empty());
    }

    #[test]
    fn test_bound_flag_set_even_on_last_token() {
        let t = tokenize("a b c", 3);
        assert_eq!(argv(&t), ["a", "b", "c"]);
        assert!(t.truncated);
    }

    #[test]
    fn test_redirection_paths_do_not_count_toward_bound() {
        let t = tokenize("cmd a < in > out", 3);
        assert_eq!(argv(&t), ["cmd", "a"]);
        assert_eq!(t.command.redirect.input.as_deref(), Some("in"));
        assert_eq!(t.command.redirect.output.as_deref(), Some("out"));
        assert!(!t.truncated);
    }
}
