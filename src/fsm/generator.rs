//! Generator machines and the lazy sequences they produce.
//!
//! A generator takes no input. Each transition yields the next state and
//! optionally a partial output. Iteration stops once the machine reaches its
//! final state or a step emits nothing. A generator that never does either
//! never stops, and callers must bound consumption themselves (for example
//! with `take`).

use crate::core::{State, StateMachine};
use std::fmt;
use std::iter::FusedIterator;
use tracing::trace;

/// Input-free machine emitting partial outputs until it reaches
/// [`final_state`](Self::final_state).
///
/// Implementors route [`StateMachine::is_final`] through
/// [`is_final_state`](Self::is_final_state) and use
/// `(State, Option<PartialOutput>)` as the transition output, which makes
/// [`Generate`] available.
pub trait Generator: StateMachine<Input = ()> {
    type PartialOutput;

    /// State at which generation stops. `None` for infinite generators.
    fn final_state() -> Option<Self::State>;

    /// Whether `state` is the final state. Always `false` without one.
    fn is_final_state(state: &Self::State) -> bool {
        Self::final_state().as_ref() == Some(state)
    }
}

/// Stepping for generators whose transition output is
/// `(next_state, Option<partial>)`.
pub trait Generate: Generator {
    /// Transition once, store the next state and return its partial output.
    fn generate(&mut self) -> Option<Self::PartialOutput>;

    /// Consume this machine as a one-pass iterator over its partial outputs.
    fn into_partials(self) -> GeneratorIter<Self> {
        GeneratorIter {
            machine: self,
            exhausted: false,
        }
    }
}

impl<M, S, P> Generate for M
where
    M: Generator<PartialOutput = P> + StateMachine<State = S, Input = (), Output = (S, Option<P>)>,
    S: State,
{
    fn generate(&mut self) -> Option<P> {
        let (state, partial) = Self::transition(self.current_state(), ());
        trace!(
            state = state.name(),
            emitted = partial.is_some(),
            "generator_transition"
        );
        self.set_current_state(state);
        partial
    }
}

/// Iterator over a generator's partial outputs.
///
/// Ends once the machine is finished or at the first transition that emits
/// nothing, whichever comes first. A machine that is final from the start
/// yields nothing.
pub struct GeneratorIter<G> {
    machine: G,
    exhausted: bool,
}

impl<G: Generate> GeneratorIter<G> {
    /// The machine being driven.
    pub fn machine(&self) -> &G {
        &self.machine
    }
}

impl<G: Generate> Iterator for GeneratorIter<G> {
    type Item = G::PartialOutput;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || self.machine.is_finished() {
            self.exhausted = true;
            return None;
        }

        let partial = self.machine.generate();
        self.exhausted = partial.is_none();
        partial
    }
}

impl<G: Generate> FusedIterator for GeneratorIter<G> {}

/// Restartable lazy sequence backed by a generator's initial context.
///
/// Every call to [`iter`](Self::iter) builds a fresh machine from the stored
/// context, so each pass starts from scratch and yields the same elements.
///
/// # Example
///
/// ```rust
/// use nonstandard::core::StateMachine;
/// use nonstandard::fsm::{Generator, GeneratorSequence};
/// use nonstandard::state_enum;
///
/// state_enum! {
///     enum Countdown {
///         Three,
///         Two,
///         One,
///         Liftoff,
///     }
/// }
///
/// impl StateMachine for Countdown {
///     type State = Self;
///     type Input = ();
///     type Output = (Self, Option<&'static str>);
///     type InitialContext = ();
///
///     fn initial_state(_: &()) -> Self {
///         Self::Three
///     }
///
///     fn is_final(state: &Self) -> bool {
///         Self::is_final_state(state)
///     }
///
///     fn transition(state: &Self, _: ()) -> (Self, Option<&'static str>) {
///         match state {
///             Self::Three => (Self::Two, Some("3")),
///             Self::Two => (Self::One, Some("2")),
///             Self::One => (Self::Liftoff, Some("1")),
///             Self::Liftoff => (Self::Liftoff, None),
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
/// impl Generator for Countdown {
///     type PartialOutput = &'static str;
///
///     fn final_state() -> Option<Self> {
///         Some(Self::Liftoff)
///     }
/// }
///
/// let countdown = GeneratorSequence::<Countdown>::new(());
/// assert_eq!(countdown.iter().collect::<Vec<_>>(), ["3", "2", "1"]);
/// assert_eq!(countdown.iter().collect::<Vec<_>>(), ["3", "2", "1"]);
/// ```
pub struct GeneratorSequence<G: StateMachine> {
    context: G::InitialContext,
}

impl<G: StateMachine> GeneratorSequence<G> {
    pub fn new(context: G::InitialContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &G::InitialContext {
        &self.context
    }
}

impl<G: Generate> GeneratorSequence<G> {
    /// Start a fresh pass over the sequence.
    pub fn iter(&self) -> GeneratorIter<G> {
        G::from_context(&self.context).into_partials()
    }
}

impl<'a, G: Generate> IntoIterator for &'a GeneratorSequence<G> {
    type Item = G::PartialOutput;
    type IntoIter = GeneratorIter<G>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<G: StateMachine> Clone for GeneratorSequence<G>
where
    G::InitialContext: Clone,
{
    fn clone(&self) -> Self {
        Self {
            context: self.context.clone(),
        }
    }
}

impl<G: StateMachine> fmt::Debug for GeneratorSequence<G>
where
    G::InitialContext: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorSequence")
            .field("context", &self.context)
            .finish()
    }
}
