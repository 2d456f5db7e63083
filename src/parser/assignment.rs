//! Assignment Detection
//!
//! Classifies a raw input line before substitution or tokenization runs.
//! Any line containing `=` is either a well-formed `NAME=VALUE` assignment
//! or an error; it is never executed as a command.
//!
//! A well-formed assignment has exactly one `=`, with no space or tab
//! anywhere before it. The name is everything left of the `=` and the value
//! is everything right of it, taken verbatim. Either side may be empty, and
//! the value may contain spaces or `$` characters; no substitution is
//! applied to it.

/// Classification of one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentCheck {
    /// The line contains no `=` and continues down the command pipeline.
    NotAssignment,
    /// A well-formed `NAME=VALUE` line.
    Assignment { name: String, value: String },
    /// The line contains `=` but breaks the assignment shape.
    Invalid,
}

/// Classify `line`, splitting out name and value when it is an assignment.
pub fn check_assignment(line: &str) -> AssignmentCheck {
    let eq = match line.find('=') {
        Some(pos) => pos,
        None => return AssignmentCheck::NotAssignment,
    };
    let (name, value) = (&line[..eq], &line[eq + 1..]);
    if value.contains('=') {
        return AssignmentCheck::Invalid;
    }
    if name.contains([' ', '\t']) {
        return AssignmentCheck::Invalid;
    }
    AssignmentCheck::Assignment {
        name: name.to_string(),
        value: value.to_string(),
    }
}
