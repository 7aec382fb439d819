//! [`DataSource`] implementation over a [`Grid`].

use std::fmt;

use wayfind_paths::{DataSource, StateTransition};

use crate::distance::{chebyshev, euclidean, manhattan, octile};
use crate::geom::Point;
use crate::grid::Grid;

/// Which neighbours a cell is connected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Connectivity {
    /// Up, right, down, left.
    #[default]
    Four,
    /// Cardinal and diagonal neighbours.
    Eight,
}

/// Distance estimate used by [`GridSource::distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    /// Always zero: A* degrades to uniform-cost search.
    Zero,
    #[default]
    Manhattan,
    Chebyshev,
    Euclidean,
    /// Exact obstacle-free 8-way cost using both step costs.
    Octile,
}

/// Movement rules for a [`GridSource`].
///
/// The heuristic stays admissible as long as every walkable cell has a
/// weight of at least 1 and it matches the connectivity: Manhattan or
/// Octile for [`Connectivity::Four`], Chebyshev or Octile for
/// [`Connectivity::Eight`] (Euclidean is admissible for both when
/// `diagonal_cost` ≥ `straight_cost`·√2 or for 4-way movement).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridConfig {
    pub connectivity: Connectivity,
    /// Base cost of a cardinal step.
    pub straight_cost: f64,
    /// Base cost of a diagonal step (only used with 8-way connectivity).
    pub diagonal_cost: f64,
    pub heuristic: Heuristic,
}

impl GridConfig {
    /// 4-way movement, unit steps, Manhattan heuristic.
    pub const fn four() -> Self {
        Self {
            connectivity: Connectivity::Four,
            straight_cost: 1.0,
            diagonal_cost: 1.0,
            heuristic: Heuristic::Manhattan,
        }
    }

    /// 8-way movement, unit steps in every direction, Chebyshev heuristic.
    pub const fn eight() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            straight_cost: 1.0,
            diagonal_cost: 1.0,
            heuristic: Heuristic::Chebyshev,
        }
    }

    /// Check that both step costs are finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let costs = [
            ("straight_cost", self.straight_cost),
            ("diagonal_cost", self.diagonal_cost),
        ];
        for (field, value) in costs {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidStepCost { field, value });
            }
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::four()
    }
}

/// A [`GridConfig`] that would produce unusable transition costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// A step cost is negative, NaN or infinite.
    InvalidStepCost { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStepCost { field, value } => {
                write!(f, "grid config: {field} must be finite and >= 0, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A grid seen as a state graph over [`Point`]s.
///
/// Moving into a cell costs the step cost (straight or diagonal) times the
/// weight of the entered cell. Walls and out-of-bounds points are never
/// produced as neighbours.
#[derive(Debug, Clone, Copy)]
pub struct GridSource<'a> {
    grid: &'a Grid,
    config: GridConfig,
}

impl<'a> GridSource<'a> {
    /// `config` must pass [`GridConfig::validate`].
    pub fn new(grid: &'a Grid, config: GridConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid grid config {config:?}");
        Self { grid, config }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn config(&self) -> GridConfig {
        self.config
    }

    fn push_step(&self, from: Point, to: Point, buf: &mut Vec<StateTransition<Point>>) {
        let Some(weight) = self.grid.at(to).and_then(|c| c.weight()) else {
            return;
        };
        let step = if from.is_diagonal_to(to) {
            self.config.diagonal_cost
        } else {
            self.config.straight_cost
        };
        buf.push(StateTransition::new(to, step * weight));
    }
}

impl DataSource for GridSource<'_> {
    type State = Point;

    fn adjacent_states(&self, p: &Point, buf: &mut Vec<StateTransition<Point>>) {
        match self.config.connectivity {
            Connectivity::Four => {
                for n in p.neighbors_4() {
                    self.push_step(*p, n, buf);
                }
            }
            Connectivity::Eight => {
                for n in p.neighbors_8() {
                    self.push_step(*p, n, buf);
                }
            }
        }
    }

    fn distance(&self, from: &Point, to: &Point) -> f64 {
        let straight = self.config.straight_cost;
        match self.config.heuristic {
            Heuristic::Zero => 0.0,
            Heuristic::Manhattan => f64::from(manhattan(*from, *to)) * straight,
            Heuristic::Chebyshev => {
                f64::from(chebyshev(*from, *to)) * straight.min(self.config.diagonal_cost)
            }
            Heuristic::Euclidean => euclidean(*from, *to) * straight,
            Heuristic::Octile => match self.config.connectivity {
                Connectivity::Four => f64::from(manhattan(*from, *to)) * straight,
                Connectivity::Eight => {
                    octile(*from, *to, straight, self.config.diagonal_cost.min(2.0 * straight))
                }
            },
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_from_partial_json() {
        let config: GridConfig =
            serde_json::from_str(r#"{"connectivity":"eight","heuristic":"octile"}"#).unwrap();
        assert_eq!(config.connectivity, Connectivity::Eight);
        assert_eq!(config.heuristic, Heuristic::Octile);
        assert_eq!(config.straight_cost, 1.0);
    }
}
