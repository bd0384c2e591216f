//! NonStandard: small utilities missing from the standard library
//!
//! # Contents
//!
//! - **SafeIndex**: predecessor/successor lookup that never leaves bounds
//! - **ExpiringValue**: a value that reads as absent once its duration elapses
//! - **UndoRedo**: a linear history with undo, redo and redo-discarding writes
//! - **StateMachine**: a finite-state machine contract with classifier,
//!   acceptor, Mealy, Moore and generator flavors
//!
//! Everything is single-threaded and in-memory. Nothing here spawns timers,
//! performs I/O or returns errors from its core operations; boundary cases
//! degrade to no-ops, absent values or the end of a sequence.
//!
//! # Example
//!
//! ```rust
//! use nonstandard::{SafeIndex, UndoRedo};
//!
//! let mut history = UndoRedo::new(1);
//! history.set(2);
//! history.set(3);
//! history.undo();
//! assert_eq!(*history.value(), 2);
//!
//! assert_eq!(history.entries().safe_index_after(2), None);
//! ```

pub mod builder;
pub mod core;
pub mod expiring;
pub mod fsm;
pub mod history;
pub mod index;

// Re-export commonly used types
pub use crate::core::{State, StateMachine};
pub use expiring::ExpiringValue;
pub use history::UndoRedo;
pub use index::SafeIndex;
