//! Variable Substitution
//!
//! Rewrites one input line, replacing each `$NAME` reference with the
//! store's value for NAME before the line is tokenized:
//! - A reference is `$` plus the maximal run of non-whitespace characters
//!   after it, so `$A$B` is a single reference named `A$B`
//! - Undefined names expand to nothing
//! - The scan makes a single pass and never rescans substituted text; a
//!   value containing `$` or redirection characters passes through inert
//!
//! The result is built in a growable buffer, so values longer than their
//! references are fine.

use crate::interpreter::vars::VarStore;
use crate::parser::types::is_delimiter;

/// Expand every `$NAME` reference in `line` against `vars`.
pub fn substitute(line: &str, vars: &VarStore) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            out.push(c);
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if is_delimiter(next) {
                break;
            }
            name.push(next);
            chars.next();
        }
        if let Some(value) = vars.get(&name) {
            out.push_str(value);
        }
    }
    out
}
