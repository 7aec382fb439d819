//! Weighted 2D grids for `wayfind-paths`.
//!
//! A [`Grid`] stores one [`Cell`] per [`Point`]; walls have value `0` and any
//! positive value is the cost multiplier for entering that cell.
//! [`GridSource`] turns a grid into a [`wayfind_paths::DataSource`] under a
//! [`GridConfig`], and [`parse_map`] / [`render`] convert between grids and
//! the ASCII map format.
//!
//! ```
//! use wayfind_grid::{parse_map, GridConfig, GridSource};
//! use wayfind_paths::PathSearch;
//!
//! let map = parse_map("@.#\n#.>").unwrap();
//! let source = GridSource::new(&map.grid, GridConfig::four());
//! let path = PathSearch::new(&source)
//!     .find_path(&map.origin.unwrap(), &map.goal.unwrap())
//!     .unwrap();
//! assert_eq!(path.len(), 4);
//! ```

mod distance;
mod geom;
mod grid;
mod map;
mod source;

pub use distance::{chebyshev, euclidean, manhattan, octile};
pub use geom::{Point, Range};
pub use grid::{Cell, Grid};
pub use map::{GridMap, MapError, parse_map, render};
pub use source::{ConfigError, Connectivity, GridConfig, GridSource, Heuristic};
