//! Shortest-path search over caller-defined state graphs.
//!
//! This crate provides two searches driven by a [`DataSource`] that
//! enumerates the transitions out of a state:
//!
//! - **A\*** optimal path between two states ([`PathSearch::find_path`])
//! - **Dijkstra** minimum cost to every reachable state
//!   ([`WeightExploration::find_weights`])
//!
//! Both searches share a [`Frontier`], the open/closed list coordinator,
//! which is built on an [`IndexedPriorityQueue`] supporting in-place
//! priority updates in logarithmic time.
//!
//! Every call owns its own frontier, so a single source may serve any number
//! of searches, including concurrent ones on different threads.
//!
//! # Building blocks
//!
//! | Type | Role |
//! |---|---|
//! | [`IndexedPriorityQueue`] | binary heap with a key → slot index |
//! | [`SearchNode`] | state with move cost, heuristic distance and parent |
//! | [`Frontier`] | open queue, closed set and node arena |
//! | [`PathSearch`] | A* driver |
//! | [`WeightExploration`] | Dijkstra driver |

mod astar;
mod dijkstra;
mod error;
mod frontier;
mod node;
mod queue;
mod traits;

#[cfg(test)]
mod testutil;

pub use astar::{PathSearch, Route};
pub use dijkstra::WeightExploration;
pub use error::SearchError;
pub use frontier::{Frontier, Relaxation};
pub use node::{NodeId, SearchNode};
pub use queue::{IndexedPriorityQueue, MaxFirst, MinFirst, Order};
pub use traits::{DataSource, StateTransition};
