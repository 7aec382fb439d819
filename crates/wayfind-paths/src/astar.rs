use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::traits::DataSource;

/// A path returned by [`PathSearch::find_route`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<S> {
    /// States from origin to goal, both included.
    pub states: Vec<S>,
    /// Sum of the transition costs along `states`.
    pub cost: f64,
}

/// A* search over a [`DataSource`].
///
/// The search holds no state between calls; each call builds its own
/// [`Frontier`], so one `PathSearch` can be shared freely, including across
/// threads when the source is `Sync`.
pub struct PathSearch<'a, D> {
    source: &'a D,
}

impl<'a, D: DataSource> PathSearch<'a, D> {
    pub fn new(source: &'a D) -> Self {
        Self { source }
    }

    /// Compute the cheapest path from `origin` to `goal` using A*.
    ///
    /// Returns the full path (including both endpoints). When `origin` and
    /// `goal` are equal the path holds that single state.
    ///
    /// The result is only guaranteed optimal if the source's
    /// [`distance`](DataSource::distance) never overestimates.
    pub fn find_path(
        &self,
        origin: &D::State,
        goal: &D::State,
    ) -> Result<Vec<D::State>, SearchError> {
        self.find_route(origin, goal).map(|route| route.states)
    }

    /// Like [`find_path`](Self::find_path), also reporting the path cost.
    pub fn find_route(
        &self,
        origin: &D::State,
        goal: &D::State,
    ) -> Result<Route<D::State>, SearchError> {
        let mut frontier = Frontier::new();
        frontier.insert(origin.clone(), 0.0, self.source.distance(origin, goal), None);

        let mut buf = Vec::new();
        let mut expanded = 0usize;

        while let Some(current) = frontier.pop() {
            let node = frontier.node(current);
            if node.state() == goal {
                let cost = node.move_cost();
                let mut states: Vec<D::State> = frontier
                    .ancestry(current)
                    .map(|n| n.state().clone())
                    .collect();
                states.reverse();
                log::debug!(
                    "astar: reached goal after {} expansions, {} states, cost {}",
                    expanded,
                    states.len(),
                    cost
                );
                return Ok(Route { states, cost });
            }

            expanded += 1;
            let move_cost = node.move_cost();
            buf.clear();
            self.source.adjacent_states(node.state(), &mut buf);

            for transition in buf.drain(..) {
                if frontier.is_closed(&transition.state) {
                    continue;
                }
                let distance = self.source.distance(&transition.state, goal);
                frontier.relax_or_insert(
                    transition.state,
                    move_cost + transition.cost,
                    distance,
                    current,
                );
            }
        }

        log::debug!("astar: frontier exhausted after {expanded} expansions");
        Err(SearchError::PathNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Graph, Maze};

    const RINGS: [&str; 9] = [
        "..........",
        ".########.",
        ".#......#.",
        ".#.####.#.",
        ".#.#..#.#.",
        ".#.#.##.#.",
        ".#.#....#.",
        ".#.######.",
        "..........",
    ];

    const ROOMS: [&str; 7] = [
        "...#....",
        ".#.#.##.",
        ".#...#..",
        ".####.#.",
        "......#.",
        "##.##...",
        "........",
    ];

    const ENCLOSED: [&str; 5] = [".....", ".###.", ".#.#.", ".###.", "....."];

    fn open_cells(maze: &Maze, w: i32, h: i32) -> Vec<(i32, i32)> {
        let mut cells = Vec::new();
        for y in 0..h {
            for x in 0..w {
                if maze.open((x, y)) {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    fn assert_valid_steps(maze: &Maze, path: &[(i32, i32)]) {
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(maze.open(b), "path enters wall at {b:?}");
            assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1, "{a:?} -> {b:?}");
            assert_ne!(a, b);
        }
    }

    fn check_against_bfs(lines: &[&str], diagonal: bool) {
        let maze = Maze::new(lines, diagonal);
        let (w, h) = (lines[0].len() as i32, lines.len() as i32);
        let cells = open_cells(&maze, w, h);
        let search = PathSearch::new(&maze);
        for &from in &cells {
            for &to in &cells {
                let expected = maze.bfs(from, to);
                match search.find_path(&from, &to) {
                    Ok(path) => {
                        assert_eq!(path.first(), Some(&from));
                        assert_eq!(path.last(), Some(&to));
                        assert_eq!(Some(path.len() - 1), expected, "{from:?} -> {to:?}");
                        assert_valid_steps(&maze, &path);
                    }
                    Err(SearchError::PathNotFound) => {
                        assert_eq!(expected, None, "{from:?} -> {to:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn matches_bfs_four_connected() {
        check_against_bfs(&RINGS, false);
        check_against_bfs(&ROOMS, false);
    }

    #[test]
    fn matches_bfs_eight_connected() {
        check_against_bfs(&RINGS, true);
        check_against_bfs(&ROOMS, true);
    }

    #[test]
    fn start_equals_goal() {
        let maze = Maze::new(&ROOMS, false);
        let path = PathSearch::new(&maze).find_path(&(2, 2), &(2, 2)).unwrap();
        assert_eq!(path, vec![(2, 2)]);
    }

    #[test]
    fn enclosed_origin_has_no_path() {
        for diagonal in [false, true] {
            let maze = Maze::new(&ENCLOSED, diagonal);
            let search = PathSearch::new(&maze);
            assert_eq!(search.find_path(&(2, 2), &(0, 0)), Err(SearchError::PathNotFound));
            assert_eq!(search.find_path(&(0, 0), &(2, 2)), Err(SearchError::PathNotFound));
        }
    }

    #[test]
    fn prefers_cheaper_longer_route() {
        let g = Graph::new()
            .edge(0, 1, 1.0)
            .edge(1, 3, 10.0)
            .edge(0, 2, 2.0)
            .edge(2, 3, 3.0);
        let route = PathSearch::new(&g).find_route(&0, &3).unwrap();
        assert_eq!(route.states, vec![0, 2, 3]);
        assert_eq!(route.cost, 5.0);
    }

    #[test]
    fn rewires_parent_of_open_state() {
        // 1 is first reached directly at cost 5, then through 2 at cost 2.
        let g = Graph::new()
            .edge(0, 1, 5.0)
            .edge(0, 2, 1.0)
            .edge(2, 1, 1.0)
            .edge(1, 3, 1.0);
        let route = PathSearch::new(&g).find_route(&0, &3).unwrap();
        assert_eq!(route.states, vec![0, 2, 1, 3]);
        assert_eq!(route.cost, 3.0);
    }

    #[test]
    fn directed_edges_are_respected() {
        let g = Graph::new().edge(0, 1, 1.0).edge(1, 2, 1.0);
        let search = PathSearch::new(&g);
        assert!(search.find_path(&0, &2).is_ok());
        assert_eq!(search.find_path(&2, &0), Err(SearchError::PathNotFound));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let maze = Maze::new(&RINGS, true);
        let search = PathSearch::new(&maze);
        let first = search.find_path(&(0, 0), &(4, 4)).unwrap();
        let second = search.find_path(&(0, 0), &(4, 4)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn concurrent_searches_do_not_interfere() {
        let maze = Maze::new(&ROOMS, false);
        let search = PathSearch::new(&maze);
        let pairs = [((0, 0), (7, 6)), ((4, 0), (0, 6)), ((2, 2), (7, 0)), ((0, 4), (5, 3))];
        let expected: Vec<_> = pairs
            .iter()
            .map(|(a, b)| search.find_path(a, b))
            .collect();

        let search = &search;
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = pairs
                .iter()
                .map(|(a, b)| scope.spawn(move || search.find_path(a, b)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, expected);
    }
}
