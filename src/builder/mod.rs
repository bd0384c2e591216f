//! Builder API for defining states and transition tables.
//!
//! This module provides the `state_enum!` macro for enumerable state types
//! and a fluent builder for table-driven transitions, so that transition
//! functions can be a single table lookup.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::{TransitionTable, TransitionTableBuilder};
