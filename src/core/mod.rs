//! Core state machine types and logic.
//!
//! This module contains the generic machine contract:
//! - State definitions via the `State` trait
//! - The `StateMachine` trait with its pure transition function
//! - Blanket conveniences for default contexts, input-free machines and
//!   machines whose output is the next state
//!
//! Transition logic here is pure. The only mutation is writing the current
//! state back into a machine.

mod machine;
mod state;

pub use machine::{DefaultContext, Deterministic, Inputless, StateMachine};
pub use state::State;
