//! Interpreter Errors
//!
//! The per-line error taxonomy. Every variant here is recoverable: the
//! session reports it and returns to the prompt with its state intact.
//! A child's non-zero exit is a printed notice, not an error, and memory
//! exhaustion is left to the allocator's abort.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    /// The line contains `=` but is not a well-formed `NAME=VALUE`.
    #[error("invalid assignment")]
    InvalidAssignment,

    /// The tokenizer hit the argv bound and discarded the rest of the line.
    #[error("too many arguments, extra input ignored")]
    TooManyArguments,

    /// A builtin saw the wrong number of arguments.
    #[error("{builtin}: wrong number of arguments")]
    BuiltinArity { builtin: &'static str },

    /// The working directory could not be read back.
    #[error("pwd: {0}")]
    CurrentDir(io::Error),

    /// `cd` with no argument, but `HOME` is absent from the environment.
    #[error("cd: HOME is not set")]
    HomeNotSet,

    /// The working directory could not be changed.
    #[error("cd: {target}: {source}")]
    DirectoryChange { target: String, source: io::Error },

    /// `export` named a variable the store does not hold.
    #[error("export: variable not found: {0}")]
    ExportNotFound(String),

    /// A redirection target could not be opened.
    #[error("cannot open {path}: {source}")]
    RedirectionOpen { path: String, source: io::Error },

    /// The external program could not be spawned.
    #[error("failed to launch {program}: {source}")]
    ChildLaunch { program: String, source: io::Error },
}
