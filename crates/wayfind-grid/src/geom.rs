//! Grid coordinates and rectangular bounds.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// Integer cell coordinates. X grows right, Y grows down.
///
/// Points order row by row (y first, then x), which is the order
/// [`Range::iter`] and [`Grid::iter`](crate::Grid::iter) visit them in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const COMPASS: [(i32, i32); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dx` columns and `dy` rows away.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Up, right, down, left.
    pub fn neighbors_4(self) -> [Point; 4] {
        CARDINAL.map(|(dx, dy)| self.shift(dx, dy))
    }

    /// Clockwise from up, diagonals included.
    pub fn neighbors_8(self) -> [Point; 8] {
        COMPASS.map(|(dx, dy)| self.shift(dx, dy))
    }

    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs.x, -rhs.y)
    }
}

/// Cells with `min.x <= x < max.x` and `min.y <= y < max.y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// The rectangle spanned by two corners, in any order; `max` is
    /// exclusive on both axes.
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Width and height as a point.
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.size().x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.size().y
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Number of cells.
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.width() as usize * self.height() as usize
        }
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Every cell, row by row.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        let Range { min, max } = self;
        (min.y..max.y).flat_map(move |y| (min.x..max.x).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn shift_and_sub() {
        let a = Point::new(1, 2);
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
        assert_eq!(Point::new(3, 4) - a, Point::new(2, 2));
    }

    #[test]
    fn neighbors_are_adjacent_and_distinct() {
        let p = Point::new(5, 5);
        let four: HashSet<Point> = p.neighbors_4().into_iter().collect();
        let eight: HashSet<Point> = p.neighbors_8().into_iter().collect();
        assert_eq!(four.len(), 4);
        assert_eq!(eight.len(), 8);
        assert!(four.is_subset(&eight));
        assert!(four.iter().all(|n| !p.is_diagonal_to(*n)));
        assert_eq!(eight.iter().filter(|n| p.is_diagonal_to(**n)).count(), 4);
    }

    #[test]
    fn points_order_row_major() {
        let mut pts = vec![Point::new(2, 1), Point::new(0, 2), Point::new(1, 1)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(2, 1), Point::new(0, 2)]);
        assert_eq!(Point::new(-3, 4).to_string(), "(-3, 4)");
    }

    #[test]
    fn range_from_any_corners() {
        let r = Range::new(Point::new(4, 3), Point::ZERO);
        assert_eq!(r.min, Point::ZERO);
        assert_eq!(r.size(), Point::new(4, 3));
        assert_eq!(r.len(), 12);
        assert!(r.contains(Point::new(3, 2)));
        assert!(!r.contains(Point::new(4, 2)));
        assert!(!r.contains(Point::new(-1, 0)));
        assert!(Range::new(Point::new(1, 1), Point::new(1, 5)).is_empty());
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::new(Point::new(1, 1), Point::new(3, 3));
        let pts: Vec<Point> = r.iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2)
            ]
        );
        assert_eq!(Range::default().iter().count(), 0);
    }
}
