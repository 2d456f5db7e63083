//! Variable Store
//!
//! Session-local shell variables. Assignments land here and stay invisible
//! to child processes until `export` copies them into the real process
//! environment. Lookups are exact-name; re-assignment overwrites in place,
//! so each name holds at most one entry.

use indexmap::IndexMap;

use crate::interpreter::errors::ShellError;

/// Insertion-ordered store of shell variables.
#[derive(Debug, Default, Clone)]
pub struct VarStore {
    vars: IndexMap<String, String>,
}

impl VarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the mapping for `name`. An overwrite keeps the
    /// entry's original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Publish `name` into the process environment, so programs spawned
    /// from now on inherit it.
    pub fn export(&self, name: &str) -> Result<(), ShellError> {
        match self.vars.get(name) {
            Some(value) => {
                std::env::set_var(name, value);
                Ok(())
            }
            None => Err(ShellError::ExportNotFound(name.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}
