//! Table-driven transition definitions.

use crate::builder::error::BuildError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Lookup table from `(state, input)` to a transition output.
///
/// The output defaults to the state type, which suits classifiers and
/// acceptors. Transducers use `(S, Action)` outputs.
///
/// # Example
///
/// ```rust
/// use nonstandard::builder::TransitionTable;
///
/// let table = TransitionTable::builder()
///     .on("locked", "coin", "unlocked")
///     .on("unlocked", "push", "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(table.get(&"locked", &"coin"), Some(&"unlocked"));
/// assert_eq!(table.get(&"locked", &"push"), None);
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S, I, O = S> {
    rows: HashMap<S, HashMap<I, O>>,
    len: usize,
}

impl<S, I, O> TransitionTable<S, I, O>
where
    S: Eq + Hash + Debug,
    I: Eq + Hash + Debug,
{
    pub fn builder() -> TransitionTableBuilder<S, I, O> {
        TransitionTableBuilder::new()
    }

    /// Output for `input` in `state`, if one was defined.
    pub fn get(&self, state: &S, input: &I) -> Option<&O> {
        self.rows.get(state).and_then(|row| row.get(input))
    }

    /// Inputs with a defined transition out of `state`.
    pub fn inputs_from<'a>(&'a self, state: &S) -> impl Iterator<Item = &'a I> + 'a {
        self.rows.get(state).into_iter().flat_map(HashMap::keys)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Builder for [`TransitionTable`] with a fluent API.
pub struct TransitionTableBuilder<S, I, O = S> {
    rows: Vec<(S, I, O)>,
}

impl<S, I, O> TransitionTableBuilder<S, I, O>
where
    S: Eq + Hash + Debug,
    I: Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Map `input` in state `from` to `output`.
    pub fn on(mut self, from: S, input: I, output: O) -> Self {
        self.rows.push((from, input, output));
        self
    }

    /// Build the table.
    /// Returns an error if the table is empty or a `(from, input)` pair repeats.
    pub fn build(self) -> Result<TransitionTable<S, I, O>, BuildError> {
        if self.rows.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let len = self.rows.len();
        let mut rows: HashMap<S, HashMap<I, O>> = HashMap::new();
        for (from, input, output) in self.rows {
            if rows.get(&from).is_some_and(|row| row.contains_key(&input)) {
                return Err(BuildError::DuplicateTransition {
                    from: format!("{from:?}"),
                    input: format!("{input:?}"),
                });
            }
            rows.entry(from).or_default().insert(input, output);
        }

        Ok(TransitionTable { rows, len })
    }
}

impl<S, I, O> Default for TransitionTableBuilder<S, I, O>
where
    S: Eq + Hash + Debug,
    I: Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Door {
            Open,
            Closed,
            Locked,
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Action {
        Close,
        Open,
        Lock,
        Unlock,
    }

    fn door_table() -> TransitionTable<Door, Action> {
        TransitionTable::builder()
            .on(Door::Open, Action::Close, Door::Closed)
            .on(Door::Closed, Action::Open, Door::Open)
            .on(Door::Closed, Action::Lock, Door::Locked)
            .on(Door::Locked, Action::Unlock, Door::Closed)
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_finds_defined_transitions() {
        let table = door_table();
        assert_eq!(table.get(&Door::Open, &Action::Close), Some(&Door::Closed));
        assert_eq!(table.get(&Door::Locked, &Action::Unlock), Some(&Door::Closed));
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn lookup_misses_undefined_transitions() {
        let table = door_table();
        assert_eq!(table.get(&Door::Open, &Action::Lock), None);
        assert_eq!(table.get(&Door::Locked, &Action::Open), None);
    }

    #[test]
    fn inputs_from_lists_outgoing_edges() {
        let table = door_table();
        let mut inputs: Vec<_> = table.inputs_from(&Door::Closed).copied().collect();
        inputs.sort_by_key(|a| format!("{a:?}"));
        assert_eq!(inputs, vec![Action::Lock, Action::Open]);
        assert_eq!(table.inputs_from(&Door::Open).count(), 1);
    }

    #[test]
    fn empty_table_is_rejected() {
        let result = TransitionTableBuilder::<Door, Action>::new().build();
        assert!(matches!(result, Err(BuildError::NoTransitions)));
    }

    #[test]
    fn duplicate_transition_is_rejected() {
        let result = TransitionTable::builder()
            .on(Door::Open, Action::Close, Door::Closed)
            .on(Door::Open, Action::Close, Door::Locked)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateTransition {
                from: "Open".to_string(),
                input: "Close".to_string(),
            }
        );
    }

    #[test]
    fn tables_support_transducer_outputs() {
        let table: TransitionTable<Door, Action, (Door, &str)> = TransitionTable::builder()
            .on(Door::Closed, Action::Open, (Door::Open, "creak"))
            .build()
            .unwrap();

        assert_eq!(
            table.get(&Door::Closed, &Action::Open),
            Some(&(Door::Open, "creak"))
        );
    }
}
