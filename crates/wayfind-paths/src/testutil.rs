//! Small data sources shared by the unit tests.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::traits::{DataSource, StateTransition};

/// Directed graph over integer states with zero heuristic.
#[derive(Default)]
pub(crate) struct Graph {
    edges: HashMap<u32, Vec<StateTransition<u32>>>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn edge(mut self, from: u32, to: u32, cost: f64) -> Self {
        self.edges
            .entry(from)
            .or_default()
            .push(StateTransition::new(to, cost));
        self
    }

    pub(crate) fn both(self, a: u32, b: u32, cost: f64) -> Self {
        self.edge(a, b, cost).edge(b, a, cost)
    }

    /// Cheapest cost from `from` to every other state, by trying every
    /// simple path.
    pub(crate) fn brute_force_costs(&self, from: u32) -> HashMap<u32, f64> {
        fn walk(
            g: &Graph,
            at: u32,
            cost: f64,
            seen: &mut HashSet<u32>,
            best: &mut HashMap<u32, f64>,
        ) {
            for t in g.edges.get(&at).into_iter().flatten() {
                if seen.contains(&t.state) {
                    continue;
                }
                let c = cost + t.cost;
                let entry = best.entry(t.state).or_insert(f64::INFINITY);
                if c < *entry {
                    *entry = c;
                }
                seen.insert(t.state);
                walk(g, t.state, c, seen, best);
                seen.remove(&t.state);
            }
        }
        let mut best = HashMap::new();
        let mut seen = HashSet::from([from]);
        walk(self, from, 0.0, &mut seen, &mut best);
        best.remove(&from);
        best
    }
}

impl DataSource for Graph {
    type State = u32;

    fn adjacent_states(&self, state: &u32, buf: &mut Vec<StateTransition<u32>>) {
        if let Some(out) = self.edges.get(state) {
            buf.extend_from_slice(out);
        }
    }

    fn distance(&self, _from: &u32, _to: &u32) -> f64 {
        0.0
    }
}

/// Unit-cost maze drawn with `#` walls and `.` floors.
pub(crate) struct Maze {
    rows: Vec<Vec<bool>>,
    diagonal: bool,
}

impl Maze {
    pub(crate) fn new(lines: &[&str], diagonal: bool) -> Self {
        let rows = lines
            .iter()
            .map(|l| l.chars().map(|c| c != '#').collect())
            .collect();
        Self { rows, diagonal }
    }

    pub(crate) fn open(&self, (x, y): (i32, i32)) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.rows
            .get(y as usize)
            .and_then(|r| r.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    fn steps(&self) -> &'static [(i32, i32)] {
        static FOUR: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        static EIGHT: [(i32, i32); 8] = [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        if self.diagonal { &EIGHT[..] } else { &FOUR[..] }
    }

    /// Breadth-first step count between two cells.
    pub(crate) fn bfs(&self, from: (i32, i32), to: (i32, i32)) -> Option<usize> {
        let mut dist = HashMap::from([(from, 0usize)]);
        let mut queue = VecDeque::from([from]);
        while let Some(p) = queue.pop_front() {
            if p == to {
                return dist.get(&p).copied();
            }
            let d = dist[&p];
            for &(dx, dy) in self.steps() {
                let n = (p.0 + dx, p.1 + dy);
                if self.open(n) && !dist.contains_key(&n) {
                    dist.insert(n, d + 1);
                    queue.push_back(n);
                }
            }
        }
        None
    }
}

impl DataSource for Maze {
    type State = (i32, i32);

    fn adjacent_states(&self, &(x, y): &(i32, i32), buf: &mut Vec<StateTransition<(i32, i32)>>) {
        for &(dx, dy) in self.steps() {
            let n = (x + dx, y + dy);
            if self.open(n) {
                buf.push(StateTransition::new(n, 1.0));
            }
        }
    }

    fn distance(&self, from: &(i32, i32), to: &(i32, i32)) -> f64 {
        let dx = (from.0 - to.0).abs();
        let dy = (from.1 - to.1).abs();
        if self.diagonal {
            f64::from(dx.max(dy))
        } else {
            f64::from(dx + dy)
        }
    }
}
