//! Interpreter module
//!
//! Everything after the parser: variable storage and substitution, builtin
//! dispatch, and synchronous external process execution.

pub mod builtins;
pub mod dispatch;
pub mod errors;
pub mod executor;
pub mod state;
pub mod substitution;
pub mod vars;

pub use dispatch::dispatch_builtin;
pub use errors::ShellError;
pub use executor::run_external;
pub use state::ShellState;
pub use substitution::substitute;
pub use vars::VarStore;
