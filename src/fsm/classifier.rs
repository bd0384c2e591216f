//! Classifier machines.

use crate::core::{Deterministic, StateMachine};

/// Machine that ends in one of several labelled final states.
///
/// The transition output is the next state and the context is unit, so a
/// classifier is driven with [`Deterministic::advance`]. Which states are
/// final is up to the implementor's [`StateMachine::is_final`].
pub trait Classifier: Deterministic + StateMachine<InitialContext = ()> {
    /// Label reported once the machine is finished.
    type FinalOutput;

    /// `None` while the machine is unfinished.
    fn final_output(&self) -> Option<Self::FinalOutput>;
}
