use std::collections::HashMap;

use crate::frontier::Frontier;
use crate::traits::DataSource;

/// Uniform-cost exploration from a single origin.
///
/// Shares the [`Frontier`] machinery with [`PathSearch`](crate::PathSearch)
/// but ignores the heuristic and has no goal: it runs until every reachable
/// state has been closed.
pub struct WeightExploration<'a, D> {
    source: &'a D,
}

impl<'a, D: DataSource> WeightExploration<'a, D> {
    pub fn new(source: &'a D) -> Self {
        Self { source }
    }

    /// Minimum cost from `origin` to every state reachable from it.
    ///
    /// The origin itself is not part of the result. Unreachable states are
    /// absent.
    pub fn find_weights(&self, origin: &D::State) -> HashMap<D::State, f64> {
        self.find_weights_within(origin, f64::INFINITY)
    }

    /// Like [`find_weights`](Self::find_weights), but expansion stops at
    /// states whose cost would exceed `max_cost`.
    pub fn find_weights_within(&self, origin: &D::State, max_cost: f64) -> HashMap<D::State, f64> {
        let mut weights = HashMap::new();
        let mut frontier = Frontier::new();
        frontier.insert(origin.clone(), 0.0, 0.0, None);

        let mut buf = Vec::new();

        while let Some(current) = frontier.pop() {
            let node = frontier.node(current);
            let move_cost = node.move_cost();
            if node.parent().is_some() {
                weights.insert(node.state().clone(), move_cost);
            }

            buf.clear();
            self.source.adjacent_states(node.state(), &mut buf);

            for transition in buf.drain(..) {
                let cost = move_cost + transition.cost;
                if cost > max_cost || frontier.is_closed(&transition.state) {
                    continue;
                }
                frontier.relax_or_insert(transition.state, cost, 0.0, current);
            }
        }

        log::debug!(
            "dijkstra: closed {} states, {} weights",
            frontier.closed_len(),
            weights.len()
        );
        weights
    }
}
