//! Demo driver: parse a map, search it and format a report.

use std::fmt;

use serde::{Deserialize, Serialize};
use wayfind_grid::{ConfigError, GridConfig, GridSource, MapError, Point, parse_map, render};
use wayfind_paths::{PathSearch, SearchError, WeightExploration};

/// Settings read from the optional JSON config file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub grid: GridConfig,
    /// Also run a full Dijkstra exploration from the origin.
    pub weights: bool,
}

impl DemoConfig {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoError {
    Map(MapError),
    Config(ConfigError),
    /// The map lacks the `@` or `>` marker.
    MissingMarker(char),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::MissingMarker(ch) => write!(f, "map has no \u{201c}{ch}\u{201d} marker"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::MissingMarker(_) => None,
        }
    }
}

impl From<MapError> for DemoError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Search `map` from `@` to `>` and return the printable report.
pub fn run(map: &str, config: &DemoConfig) -> Result<String, DemoError> {
    config.grid.validate()?;
    let map = parse_map(map)?;
    let origin = map.origin.ok_or(DemoError::MissingMarker('@'))?;
    let goal = map.goal.ok_or(DemoError::MissingMarker('>'))?;
    let source = GridSource::new(&map.grid, config.grid);

    let route = PathSearch::new(&source).find_route(&origin, &goal)?;
    let mut out = format!(
        "{}\nsteps: {}\ncost: {}\n",
        render(&map.grid, &route.states),
        route.states.len() - 1,
        route.cost
    );

    if config.weights {
        let weights = WeightExploration::new(&source).find_weights(&origin);
        out.push_str(&format!("reachable: {}\n", weights.len()));
        let farthest = weights
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)));
        if let Some((p, w)) = farthest {
            out.push_str(&format!("farthest: {p} at {w}\n"));
        }
    }
    Ok(out)
}

/// Convenience for callers that only want the path.
pub fn shortest_path(map: &str, config: GridConfig) -> Result<Vec<Point>, DemoError> {
    config.validate()?;
    let map = parse_map(map)?;
    let origin = map.origin.ok_or(DemoError::MissingMarker('@'))?;
    let goal = map.goal.ok_or(DemoError::MissingMarker('>'))?;
    let source = GridSource::new(&map.grid, config);
    Ok(PathSearch::new(&source).find_path(&origin, &goal)?)
}
