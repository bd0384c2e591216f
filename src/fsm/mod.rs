//! Specialized finite-state machines.
//!
//! Each flavor narrows the [`StateMachine`](crate::core::StateMachine)
//! contract:
//!
//! - **Classifier**: output is the next state, ends in labelled final states
//! - **Acceptor**: classifier with an accepted and a rejected state
//! - **Mealy / Moore**: output is the next state plus an entry action
//! - **Generator**: no input, emits partial outputs until a final state
//!
//! Shape-only capabilities (`Mealy`, `Moore`, `Generate`) are implemented
//! automatically for any machine with the matching output type.

mod acceptor;
mod classifier;
mod generator;
mod transducer;

pub use acceptor::Acceptor;
pub use classifier::Classifier;
pub use generator::{Generate, Generator, GeneratorIter, GeneratorSequence};
pub use transducer::{Mealy, Moore, Transducer};
