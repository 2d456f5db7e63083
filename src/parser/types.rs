//! Parser Types and Constants
//!
//! Shared definitions for the line pipeline:
//! - Token delimiters and the argv bound
//! - `Command`: argv plus redirection slots, as produced by the tokenizer
//! - `Tokenized`: a command together with its truncation flag

/// Default upper bound on argv entries for one command line.
pub const MAX_ARGS: usize = 64;

/// Whitespace that separates tokens and terminates `$NAME` references.
pub const DELIMITERS: [char; 4] = [' ', '\t', '\r', '\n'];

/// True for characters in [`DELIMITERS`].
pub fn is_delimiter(c: char) -> bool {
    DELIMITERS.contains(&c)
}

/// Redirection targets requested for one command.
///
/// Each stream holds at most one path; a repeated directive overwrites the
/// earlier one, so the last occurrence on the line wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectionSpec {
    /// `< FILE`: read standard input from FILE (must already exist).
    pub input: Option<String>,
    /// `> FILE`: write standard output to FILE (created or truncated).
    pub output: Option<String>,
    /// `2> FILE`: write standard error to FILE (created or truncated).
    pub error: Option<String>,
}

impl RedirectionSpec {
    /// True when no stream is redirected.
    pub fn is_empty(&self) -> bool {
        self.input.is_none() && self.output.is_none() && self.error.is_none()
    }
}

/// One parsed command line.
///
/// `argv[0]` names the builtin or external program. Redirection operators
/// and their path tokens never appear in `argv`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub argv: Vec<String>,
    pub redirect: RedirectionSpec,
}

impl Command {
    /// The program or builtin name, if the line produced any tokens.
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }
}

/// Tokenizer output: the command plus a flag recording that the argv bound
/// was reached and the remainder of the line was discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized {
    pub command: Command,
    pub truncated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirection_spec_is_empty() {
        assert!(RedirectionSpec::default().is_empty());
        let spec = RedirectionSpec {
            output: Some("out.txt".to_string()),
            ..Default::default()
        };
        assert!(!spec.is_empty());
    }

    #[test]
    fn test_command_program() {
        let cmd = Command {
            argv: vec!["ls".to_string(), "-l".to_string()],
            redirect: RedirectionSpec::default(),
        };
        assert_eq!(cmd.program(), Some("ls"));
        assert_eq!(Command::default().program(), None);
    }

    #[test]
    fn test_delimiters() {
        assert!(is_delimiter(' '));
        assert!(is_delimiter('\t'));
        assert!(is_delimiter('\r'));
        assert!(is_delimiter('\n'));
        assert!(!is_delimiter('a'));
        assert!(!is_delimiter('$'));
    }
}
