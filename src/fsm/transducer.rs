//! Transducer machines: Mealy and Moore.
//!
//! A transducer's transition output is the next state paired with an entry
//! action. Any machine with that output shape is a transducer; the traits
//! here are implemented automatically.

use crate::core::{State, StateMachine};
use tracing::trace;

/// Machine whose transition yields `(next_state, entry_action)`.
pub trait Transducer: StateMachine {
    type EntryAction;
}

impl<M, S, A> Transducer for M
where
    M: StateMachine<State = S, Output = (S, A)>,
    S: State,
{
    type EntryAction = A;
}

/// Transducer whose action depends on the input as well as the state.
pub trait Mealy: Transducer {
    /// Transition on `input`, store the next state and return its action.
    fn feed(&mut self, input: Self::Input) -> Self::EntryAction;
}

impl<M, S, A> Mealy for M
where
    M: StateMachine<State = S, Output = (S, A)>,
    S: State,
{
    fn feed(&mut self, input: Self::Input) -> Self::EntryAction {
        let (state, action) = Self::transition(self.current_state(), input);
        trace!(state = state.name(), "mealy_transition");
        self.set_current_state(state);
        action
    }
}

/// Input-free transducer. The action is determined by the state entered.
pub trait Moore: Transducer + StateMachine<Input = ()> {
    /// Transition once, store the next state and return its entry action.
    fn step(&mut self) -> Self::EntryAction;
}

impl<M, S, A> Moore for M
where
    M: StateMachine<State = S, Input = (), Output = (S, A)>,
    S: State,
{
    fn step(&mut self) -> Self::EntryAction {
        let (state, action) = Self::transition(self.current_state(), ());
        trace!(state = state.name(), "moore_transition");
        self.set_current_state(state);
        action
    }
}
