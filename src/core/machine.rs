//! The generic state machine contract.
//!
//! A machine is described by four associated types and three pure
//! associated functions (initial state, finality, transition). The only
//! instance data is the current state. Computing a transition never touches
//! a machine instance, so transition functions can be exercised on their own;
//! writing the result back is a separate step.
//!
//! The blanket traits at the bottom of this module add the conveniences
//! that only make sense for particular shapes of machine.

use super::state::State;
use tracing::trace;

/// Finite-state machine contract.
///
/// Implementors provide the transition table through the associated
/// functions and storage for the current state through
/// [`from_state`](Self::from_state), [`current_state`](Self::current_state)
/// and [`set_current_state`](Self::set_current_state).
///
/// A state enum can be its own machine by setting `type State = Self`.
///
/// Not synchronized: sharing one machine across threads is the caller's
/// responsibility.
///
/// # Example
///
/// ```rust
/// use nonstandard::core::{Deterministic, StateMachine};
/// use nonstandard::state_enum;
///
/// state_enum! {
///     enum Turnstile {
///         Locked,
///         Unlocked,
///     }
/// }
///
/// enum Event {
///     Coin,
///     Push,
/// }
///
/// impl StateMachine for Turnstile {
///     type State = Self;
///     type Input = Event;
///     type Output = Self;
///     type InitialContext = ();
///
///     fn initial_state(_: &()) -> Self {
///         Self::Locked
///     }
///
///     fn is_final(_: &Self) -> bool {
///         false
///     }
///
///     fn transition(_: &Self, input: Event) -> Self {
///         match input {
///             Event::Coin => Self::Unlocked,
///             Event::Push => Self::Locked,
///         }
///     }
///
///     fn from_state(state: Self) -> Self {
///         state
///     }
///
///     fn current_state(&self) -> &Self {
///         self
///     }
///
///     fn set_current_state(&mut self, state: Self) {
///         *self = state;
///     }
/// }
///
/// let mut turnstile = Turnstile::from_context(&());
/// turnstile.advance(Event::Coin);
/// assert_eq!(turnstile, Turnstile::Unlocked);
/// turnstile.advance(Event::Push);
/// assert_eq!(turnstile, Turnstile::Locked);
/// ```
pub trait StateMachine: Sized {
    type State: State;
    type Input;
    type Output;
    type InitialContext;

    /// Starting state derived from a context.
    fn initial_state(context: &Self::InitialContext) -> Self::State;

    /// Whether `state` is terminal.
    fn is_final(state: &Self::State) -> bool;

    /// Pure transition from `state` on `input`.
    fn transition(state: &Self::State, input: Self::Input) -> Self::Output;

    /// Build a machine sitting in `state`.
    fn from_state(state: Self::State) -> Self;

    fn current_state(&self) -> &Self::State;

    fn set_current_state(&mut self, state: Self::State);

    /// Every state the machine can be in.
    fn all_states() -> Vec<Self::State> {
        Self::State::all()
    }

    /// Build a machine in the initial state for `context`.
    fn from_context(context: &Self::InitialContext) -> Self {
        Self::from_state(Self::initial_state(context))
    }

    /// Whether the current state is final.
    fn is_finished(&self) -> bool {
        Self::is_final(self.current_state())
    }

    /// Reset to the initial state for `context` in place.
    fn restart_with(&mut self, context: &Self::InitialContext) {
        let state = Self::initial_state(context);
        trace!(state = state.name(), "state_machine_restart");
        self.set_current_state(state);
    }
}

/// Conveniences for machines whose context has a default value.
///
/// Covers the unit context and optional contexts, where the default is
/// "no context".
pub trait DefaultContext: StateMachine {
    /// Initial state for the default context.
    fn default_initial_state() -> Self::State;

    /// Build a machine in the default initial state.
    fn start() -> Self;

    /// Reset to the default initial state.
    fn restart(&mut self);
}

impl<M> DefaultContext for M
where
    M: StateMachine,
    M::InitialContext: Default,
{
    fn default_initial_state() -> Self::State {
        Self::initial_state(&M::InitialContext::default())
    }

    fn start() -> Self {
        Self::from_context(&M::InitialContext::default())
    }

    fn restart(&mut self) {
        self.restart_with(&M::InitialContext::default());
    }
}

/// Transition without an argument for machines that take no input.
pub trait Inputless: StateMachine {
    fn tick(state: &Self::State) -> Self::Output;
}

impl<M> Inputless for M
where
    M: StateMachine<Input = ()>,
{
    fn tick(state: &Self::State) -> Self::Output {
        Self::transition(state, ())
    }
}

/// Machines whose transition output is the next state itself.
///
/// Computing and writing the next state happen in one call.
pub trait Deterministic: StateMachine {
    /// Transition on `input` and store the resulting state.
    fn advance(&mut self, input: Self::Input) -> &Self::State;
}

impl<M, S> Deterministic for M
where
    M: StateMachine<State = S, Output = S>,
    S: State,
{
    fn advance(&mut self, input: Self::Input) -> &Self::State {
        let next = Self::transition(self.current_state(), input);
        trace!(state = next.name(), "state_machine_advance");
        self.set_current_state(next);
        self.current_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Light {
            Red,
            Green,
            Yellow,
            Off,
        }
    }

    impl StateMachine for Light {
        type State = Self;
        type Input = ();
        type Output = Self;
        type InitialContext = Option<Light>;

        fn initial_state(context: &Option<Light>) -> Self {
            context.unwrap_or(Self::Red)
        }

        fn is_final(state: &Self) -> bool {
            *state == Self::Off
        }

        fn transition(state: &Self, _: ()) -> Self {
            match state {
                Self::Red => Self::Green,
                Self::Green => Self::Yellow,
                Self::Yellow => Self::Red,
                Self::Off => Self::Off,
            }
        }

        fn from_state(state: Self) -> Self {
            state
        }

        fn current_state(&self) -> &Self {
            self
        }

        fn set_current_state(&mut self, state: Self) {
            *self = state;
        }
    }

    // Machine whose storage is separate from its state type.
    struct Counter {
        state: Digit,
        restarts: usize,
    }

    crate::state_enum! {
        enum Digit {
            Zero,
            One,
            Two,
        }
    }

    impl StateMachine for Counter {
        type State = Digit;
        type Input = bool;
        type Output = (Digit, bool);
        type InitialContext = Digit;

        fn initial_state(context: &Digit) -> Digit {
            *context
        }

        fn is_final(state: &Digit) -> bool {
            *state == Digit::Two
        }

        fn transition(state: &Digit, carry: bool) -> (Digit, bool) {
            match (state, carry) {
                (s, false) => (*s, false),
                (Digit::Zero, true) => (Digit::One, false),
                (Digit::One, true) => (Digit::Two, false),
                (Digit::Two, true) => (Digit::Zero, true),
            }
        }

        fn from_state(state: Digit) -> Self {
            Counter { state, restarts: 0 }
        }

        fn current_state(&self) -> &Digit {
            &self.state
        }

        fn set_current_state(&mut self, state: Digit) {
            self.state = state;
        }
    }

    #[test]
    fn all_states_enumerates_declaration_order() {
        assert_eq!(
            Light::all_states(),
            vec![Light::Red, Light::Green, Light::Yellow, Light::Off]
        );
    }

    #[test]
    fn from_context_uses_initial_state() {
        assert_eq!(Light::from_context(&None), Light::Red);
        assert_eq!(Light::from_context(&Some(Light::Yellow)), Light::Yellow);
    }

    #[test]
    fn default_context_covers_optional_contexts() {
        assert_eq!(Light::default_initial_state(), Light::Red);
        assert_eq!(Light::start(), Light::Red);
    }

    #[test]
    fn tick_is_pure() {
        let light = Light::Green;
        assert_eq!(Light::tick(&light), Light::Yellow);
        assert_eq!(light, Light::Green);
    }

    #[test]
    fn advance_writes_next_state() {
        let mut light = Light::start();
        assert_eq!(*light.advance(()), Light::Green);
        assert_eq!(*light.advance(()), Light::Yellow);
        assert_eq!(*light.advance(()), Light::Red);
        assert!(!light.is_finished());
    }

    #[test]
    fn is_finished_follows_current_state() {
        let mut light = Light::from_state(Light::Off);
        assert!(light.is_finished());

        light.advance(());
        assert!(light.is_finished());

        light.restart();
        assert_eq!(light, Light::Red);
        assert!(!light.is_finished());
    }

    #[test]
    fn restart_with_keeps_machine_instance() {
        let mut counter = Counter::from_context(&Digit::One);
        counter.restarts = 7;

        let (next, _) = Counter::transition(counter.current_state(), true);
        counter.set_current_state(next);
        assert!(counter.is_finished());

        counter.restart_with(&Digit::Zero);
        assert_eq!(*counter.current_state(), Digit::Zero);
        assert_eq!(counter.restarts, 7);
    }

    #[test]
    fn transition_table_can_be_checked_without_instance() {
        assert_eq!(Counter::transition(&Digit::Two, true), (Digit::Zero, true));
        assert_eq!(Counter::transition(&Digit::One, false), (Digit::One, false));
    }
}
