//! Shell Session
//!
//! The front door of the crate: one `Shell` per session, one `run_line`
//! call per input line. Each line flows through assignment detection,
//! variable substitution, tokenization, builtin dispatch, and finally
//! external execution, with all session state owned here.

use std::io::Write;

use crate::interpreter::builtins::BuiltinOutput;
use crate::interpreter::executor::status_code;
use crate::interpreter::{dispatch_builtin, run_external, substitute, ShellError, ShellState};
use crate::parser::types::MAX_ARGS;
use crate::parser::{check_assignment, tokenize, AssignmentCheck};

/// Options for creating a shell session.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Upper bound on argv entries per command line. Tokens beyond it are
    /// discarded with a warning; the truncated command still runs.
    pub max_args: usize,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self { max_args: MAX_ARGS }
    }
}

/// Verdict of one processed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    /// Keep reading input.
    Continue,
    /// The `exit` builtin ran; the session is over.
    Exit,
}

/// An interactive shell session.
///
/// Holds the variable store and the last exit status. The working
/// directory and the exported environment are process-global, so children
/// inherit them without any hand-off.
pub struct Shell {
    options: ShellOptions,
    state: ShellState,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}

impl Shell {
    pub fn new(options: ShellOptions) -> Self {
        Self {
            options,
            state: ShellState::new(),
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Execute one input line (line terminator already stripped).
    ///
    /// Errors are recoverable: the caller reports them and keeps reading,
    /// and the session state stays intact across them.
    pub fn run_line(&mut self, line: &str) -> Result<LineStatus, ShellError> {
        // Assignment lines are consumed whole, before substitution ever
        // runs, so the stored value keeps `$` references literal.
        match check_assignment(line) {
            AssignmentCheck::Assignment { name, value } => {
                log::debug!("assign {}={}", name, value);
                self.state.vars.set(name, value);
                return Ok(LineStatus::Continue);
            }
            AssignmentCheck::Invalid => return Err(ShellError::InvalidAssignment),
            AssignmentCheck::NotAssignment => {}
        }

        let expanded = substitute(line, &self.state.vars);
        let tokenized = tokenize(&expanded, self.options.max_args);
        if tokenized.truncated {
            // Warn and run what was collected.
            eprintln!("{}", ShellError::TooManyArguments);
            log::warn!("argv bound ({}) reached, rest of line ignored", self.options.max_args);
        }

        let command = tokenized.command;
        let program = match command.program() {
            Some(program) => program.to_string(),
            // Blank lines, and lines whose every token fed a redirection,
            // execute nothing; no target file is opened.
            None => return Ok(LineStatus::Continue),
        };

        if let Some(result) = dispatch_builtin(&self.state, &command) {
            return self.finish_builtin(result?);
        }

        let status = run_external(&program, &command.argv[1..], &command.redirect)?;
        self.state.last_exit_code = status_code(status);
        if !status.success() {
            eprintln!("command failed");
        }
        Ok(LineStatus::Continue)
    }

    fn finish_builtin(&mut self, output: BuiltinOutput) -> Result<LineStatus, ShellError> {
        print!("{}", output.stdout);
        let _ = std::io::stdout().flush();
        self.state.last_exit_code = 0;
        if output.exit {
            Ok(LineStatus::Exit)
        } else {
            Ok(LineStatus::Continue)
        }
    }
}
