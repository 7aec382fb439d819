//! A weighted cell grid for map representation.
//!
//! [`Cell`] is a newtype over `i32`: `0` (and below) is a wall, any positive
//! value is walkable and doubles as the cost multiplier for entering the
//! cell. [`Grid`] owns its cells in a flat row-major buffer, so a `&Grid` can
//! be shared between threads running independent searches.

use rand::{Rng, RngExt};

use crate::geom::{Point, Range};

/// A map cell value, wrapping an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell(pub i32);

impl Cell {
    /// Impassable cell.
    pub const WALL: Cell = Cell(0);
    /// Walkable cell with unit cost.
    pub const FLOOR: Cell = Cell(1);

    pub const fn value(self) -> i32 {
        self.0
    }

    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.0 > 0
    }

    /// Cost multiplier for entering the cell, `None` for walls.
    #[inline]
    pub fn weight(self) -> Option<f64> {
        self.is_walkable().then(|| f64::from(self.0))
    }
}

/// A 2D grid of [`Cell`] values with its origin at (0, 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Create a new grid filled with [`Cell::FLOOR`].
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(Point::ZERO, Point::new(width.max(0), height.max(0)));
        Self {
            cells: vec![Cell::FLOOR; bounds.len()],
            bounds,
        }
    }

    /// Returns the bounding range of the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.bounds.width() + p.x) as usize
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Whether `p` is inside the grid and walkable.
    pub fn is_walkable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_walkable)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.bounds.contains(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Fill the grid using a function that takes each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> Cell) {
        for p in self.bounds.iter() {
            let idx = self.index(p);
            self.cells[idx] = f(p);
        }
    }

    /// Set each cell to `cell` with probability `density`.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not in `[0, 1]`.
    pub fn scatter<R: Rng + ?Sized>(&mut self, rng: &mut R, cell: Cell, density: f64) {
        for slot in self.cells.iter_mut() {
            if rng.random_bool(density) {
                *slot = cell;
            }
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}
