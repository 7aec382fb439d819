use std::hash::Hash;

/// A move out of a state: the state reached and the cost of getting there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateTransition<S> {
    pub state: S,
    pub cost: f64,
}

impl<S> StateTransition<S> {
    /// Create a transition into `state` costing `cost`.
    #[inline]
    pub fn new(state: S, cost: f64) -> Self {
        Self { state, cost }
    }
}

/// Graph description consumed by the searches.
///
/// Implementations must be deterministic: the same state always yields the
/// same set of transitions for the lifetime of a search.
pub trait DataSource {
    /// Search state. Only equality and hashing are used by the engine.
    type State: Clone + Eq + Hash;

    /// Append the transitions out of `state` into `buf`. The caller clears
    /// `buf` before calling. Costs must be non-negative.
    fn adjacent_states(&self, state: &Self::State, buf: &mut Vec<StateTransition<Self::State>>);

    /// Estimated cost from `from` to `to`. Must be finite and non-negative.
    /// A* is only guaranteed optimal if this never overestimates.
    fn distance(&self, from: &Self::State, to: &Self::State) -> f64;
}
