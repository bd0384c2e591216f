//! Acceptor (recognizer) machines.

use super::classifier::Classifier;
use crate::core::StateMachine;

/// Classifier with exactly two verdicts: accepted or rejected.
///
/// Implementors name the two distinguished states and route
/// [`StateMachine::is_final`] through [`is_verdict`](Self::is_verdict) and
/// [`Classifier::final_output`] through [`verdict`](Self::verdict).
///
/// The accepted and rejected states must differ. This is checked with an
/// assertion whenever a verdict is computed and panics on violation.
///
/// While unfinished, an acceptor is neither accepted nor proven accepted:
/// [`is_accepted`](Self::is_accepted) is `false` and
/// [`is_rejected`](Self::is_rejected) is `true`.
pub trait Acceptor: Classifier<FinalOutput = bool> {
    fn accepted_state() -> Self::State;

    fn rejected_state() -> Self::State;

    /// Whether `state` is one of the two verdict states.
    fn is_verdict(state: &Self::State) -> bool {
        *state == Self::accepted_state() || *state == Self::rejected_state()
    }

    /// `Some(true)` when accepted, `Some(false)` when rejected, `None` while
    /// unfinished.
    fn verdict(&self) -> Option<bool> {
        let state = self.current_state();
        if !Self::is_verdict(state) {
            return None;
        }

        let accepted = Self::accepted_state();
        assert_ne!(
            accepted,
            Self::rejected_state(),
            "acceptor must have distinct accepted and rejected states"
        );
        Some(*state == accepted)
    }

    fn is_accepted(&self) -> bool {
        self.final_output() == Some(true)
    }

    /// Unfinished acceptors count as rejected.
    fn is_rejected(&self) -> bool {
        self.final_output() != Some(true)
    }
}
