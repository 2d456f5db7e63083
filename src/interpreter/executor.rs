//! External Command Execution
//!
//! Spawns the program named by `argv[0]` and waits for it synchronously.
//! Name resolution follows `PATH` unless the name contains a separator.
//! Redirection files are opened before the child is spawned, so an open
//! failure aborts the attempt without launching anything, and no failure
//! on this path disturbs the session itself.

use std::fs::{File, OpenOptions};
use std::process::{Command as StdCommand, ExitStatus, Stdio};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::interpreter::errors::ShellError;
use crate::parser::types::RedirectionSpec;

/// Mode bits for created redirection targets (rw-r--r--).
#[cfg(unix)]
const REDIRECT_FILE_MODE: u32 = 0o644;

/// Run an external program and wait for it to finish.
///
/// Streams named in `redirect` are rebound to their files; the rest are
/// inherited from the session. The returned status is the child's own; a
/// non-zero status is the caller's to report.
pub fn run_external(
    program: &str,
    args: &[String],
    redirect: &RedirectionSpec,
) -> Result<ExitStatus, ShellError> {
    let mut cmd = StdCommand::new(program);
    cmd.args(args);

    if let Some(path) = &redirect.input {
        cmd.stdin(Stdio::from(open_input(path)?));
    }
    if let Some(path) = &redirect.output {
        cmd.stdout(Stdio::from(open_target(path)?));
    }
    if let Some(path) = &redirect.error {
        cmd.stderr(Stdio::from(open_target(path)?));
    }

    log::debug!("spawning `{}` with {} argument(s)", program, args.len());
    let status = cmd.status().map_err(|source| ShellError::ChildLaunch {
        program: program.to_string(),
        source,
    })?;
    log::debug!("`{}` finished: {}", program, status);
    Ok(status)
}

/// Exit code to record for `status`. A signal death maps to 128 plus the
/// signal number, like common shells report it.
#[cfg(unix)]
pub fn status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(-1)
}

#[cfg(not(unix))]
pub fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Open an input redirection source. The file must already exist.
fn open_input(path: &str) -> Result<File, ShellError> {
    File::open(path).map_err(|source| ShellError::RedirectionOpen {
        path: path.to_string(),
        source,
    })
}

/// Open an output or error redirection target, creating or truncating it.
fn open_target(path: &str) -> Result<File, ShellError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(REDIRECT_FILE_MODE);
    options.open(path).map_err(|source| ShellError::RedirectionOpen {
        path: path.to_string(),
        source,
    })
}
