use std::hash::{Hash, Hasher};

/// Handle to a [`SearchNode`] inside the [`Frontier`](crate::Frontier) that
/// created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its frontier's arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A discovered state together with its best known cost.
///
/// Equality and hashing only look at the state: the costs and the parent
/// change while the node waits in the open queue.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    state: S,
    move_cost: f64,
    distance: f64,
    parent: Option<NodeId>,
}

impl<S> SearchNode<S> {
    pub(crate) fn new(state: S, move_cost: f64, distance: f64, parent: Option<NodeId>) -> Self {
        Self {
            state,
            move_cost,
            distance,
            parent,
        }
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Cost from the origin along the best path found so far.
    #[inline]
    pub fn move_cost(&self) -> f64 {
        self.move_cost
    }

    /// Heuristic estimate to the goal (zero for Dijkstra).
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The node this one was reached from, `None` for the origin.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// `move_cost + distance`, the priority used by the frontier.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.move_cost + self.distance
    }

    /// Record a cheaper way of reaching this state.
    pub(crate) fn relax(&mut self, move_cost: f64, distance: f64, parent: NodeId) {
        self.move_cost = move_cost;
        self.distance = distance;
        self.parent = Some(parent);
    }
}

impl<S: PartialEq> PartialEq for SearchNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq> Eq for SearchNode<S> {}

impl<S: Hash> Hash for SearchNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}
