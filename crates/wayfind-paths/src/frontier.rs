//! Open/closed list bookkeeping shared by A* and Dijkstra.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::node::{NodeId, SearchNode};
use crate::queue::IndexedPriorityQueue;

/// Outcome of [`Frontier::relax_or_insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// The state was new and has been queued.
    Inserted(NodeId),
    /// The state was queued and its cost dropped.
    Improved(NodeId),
    /// The state was queued with a cost at least as good.
    Unchanged(NodeId),
    /// The state's cost is already final.
    Closed,
}

/// Open queue, closed set and node storage for a single search.
///
/// Nodes live in an arena and refer to their parent by [`NodeId`]. A state is
/// open (queued, cost may still drop) or closed (popped, cost final), never
/// both, and a closed state is never queued again. This is only sound for
/// non-negative transition costs.
#[derive(Debug)]
pub struct Frontier<S> {
    nodes: Vec<SearchNode<S>>,
    queue: IndexedPriorityQueue<NodeId, f64>,
    open: HashMap<S, NodeId>,
    closed: HashSet<S>,
}

impl<S: Clone + Eq + Hash> Frontier<S> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            queue: IndexedPriorityQueue::new(),
            open: HashMap::new(),
            closed: HashSet::new(),
        }
    }

    /// Whether no state is waiting to be expanded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of open states.
    #[inline]
    pub fn open_len(&self) -> usize {
        self.queue.len()
    }

    /// Number of closed states.
    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    #[inline]
    pub fn is_open(&self, state: &S) -> bool {
        self.open.contains_key(state)
    }

    #[inline]
    pub fn is_closed(&self, state: &S) -> bool {
        self.closed.contains(state)
    }

    /// The node behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was produced by another frontier.
    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.0]
    }

    /// Walk from `id` back to the node that has no parent.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = &SearchNode<S>> + '_ {
        std::iter::successors(Some(self.node(id)), move |node| {
            node.parent().map(|parent| self.node(parent))
        })
    }

    /// Queue a newly discovered state.
    ///
    /// Returns `None` without doing anything if the state is closed.
    ///
    /// # Panics
    ///
    /// Panics if the state is already open; use
    /// [`relax_or_insert`](Self::relax_or_insert) for states that may have
    /// been seen before.
    pub fn insert(
        &mut self,
        state: S,
        move_cost: f64,
        distance: f64,
        parent: Option<NodeId>,
    ) -> Option<NodeId> {
        if self.closed.contains(&state) {
            return None;
        }
        assert!(
            !self.open.contains_key(&state),
            "Frontier::insert: state is already open"
        );
        let id = NodeId(self.nodes.len());
        let node = SearchNode::new(state.clone(), move_cost, distance, parent);
        self.queue.insert(id, node.total_cost());
        self.nodes.push(node);
        self.open.insert(state, id);
        Some(id)
    }

    /// Pop the open node with the lowest total cost and close its state.
    pub fn pop(&mut self) -> Option<NodeId> {
        let id = self.queue.pop()?;
        let state = self.nodes[id.0].state().clone();
        self.open.remove(&state);
        self.closed.insert(state);
        Some(id)
    }

    /// Offer a path reaching `state` with `move_cost` through `parent`.
    ///
    /// Closed states are left alone. An open state is only updated when the
    /// new cost is strictly lower; otherwise the state is inserted.
    pub fn relax_or_insert(
        &mut self,
        state: S,
        move_cost: f64,
        distance: f64,
        parent: NodeId,
    ) -> Relaxation {
        if self.closed.contains(&state) {
            return Relaxation::Closed;
        }
        if let Some(&id) = self.open.get(&state) {
            let node = &mut self.nodes[id.0];
            if move_cost >= node.move_cost() {
                return Relaxation::Unchanged(id);
            }
            log::trace!(
                "relaxed node {}: {} -> {}",
                id.0,
                node.move_cost(),
                move_cost
            );
            node.relax(move_cost, distance, parent);
            let total = node.total_cost();
            self.queue.update(&id, total);
            return Relaxation::Improved(id);
        }
        match self.insert(state, move_cost, distance, Some(parent)) {
            Some(id) => Relaxation::Inserted(id),
            None => Relaxation::Closed,
        }
    }
}

impl<S: Clone + Eq + Hash> Default for Frontier<S> {
    fn default() -> Self {
        Self::new()
    }
}
