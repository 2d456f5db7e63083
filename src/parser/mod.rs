//! Parser module
//!
//! Line-level analysis: assignment detection and whitespace tokenization
//! with redirection directives. Variable substitution happens in the
//! interpreter, between these two steps.

pub mod assignment;
pub mod tokenizer;
pub mod types;

pub use assignment::{check_assignment, AssignmentCheck};
pub use tokenizer::tokenize;
pub use types::{Command, RedirectionSpec, Tokenized};
