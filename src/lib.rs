//! nanosh - a miniature interactive shell
//!
//! This library implements the interpreter core: session-local variables
//! with `$NAME` substitution, whitespace tokenization with `<` / `>` / `2>`
//! redirection, in-process builtins, and synchronous external command
//! execution via the operating system's process machinery.
//!
//! The embedding surface is [`Shell`]: feed it one line at a time and act
//! on the returned [`LineStatus`].

pub mod interpreter;
pub mod parser;
pub mod shell;

pub use interpreter::errors::ShellError;
pub use shell::{LineStatus, Shell, ShellOptions};
