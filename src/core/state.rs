//! Core State trait for state machine states.
//!
//! States form a finite, comparable, enumerable set. Enumerability lets a
//! machine report every state it can ever be in.

use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. Use [`state_enum!`](crate::state_enum) to derive
/// this for a plain enum.
///
/// # Example
///
/// ```rust
/// use nonstandard::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn all() -> Vec<Self> {
///         vec![Self::Open, Self::Closed]
///     }
///
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::all().len(), 2);
/// assert_eq!(Door::Closed.name(), "Closed");
/// ```
pub trait State: Clone + PartialEq + Debug {
    /// Every value of this state type, in declaration order.
    fn all() -> Vec<Self>;

    /// The state's name for display and logging.
    fn name(&self) -> &str;
}
