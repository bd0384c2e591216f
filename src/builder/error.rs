//! Build errors for transition tables.

use thiserror::Error;

/// Errors that can occur when building a transition table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No transitions defined. Add at least one with .on(from, input, output)")]
    NoTransitions,

    #[error("Transition from '{from}' on '{input}' is defined more than once")]
    DuplicateTransition { from: String, input: String },
}
