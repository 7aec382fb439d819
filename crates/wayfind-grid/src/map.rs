//! ASCII map format.
//!
//! A map is a block of text where every line has the same width:
//!
//! | Char | Meaning |
//! |---|---|
//! | `#` | wall |
//! | `.` | floor (weight 1) |
//! | `1`-`9` | floor with that weight |
//! | `@` | origin marker, on floor |
//! | `>` | goal marker, on floor |
//! | `*` | path mark drawn by [`render`], read back as floor |
//!
//! Leading and trailing whitespace around the whole block is ignored.

use std::fmt;

use crate::geom::Point;
use crate::grid::{Cell, Grid};

/// A parsed map: the grid plus the optional origin and goal markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    pub grid: Grid,
    pub origin: Option<Point>,
    pub goal: Option<Point>,
}

/// Parse a map from text.
pub fn parse_map(s: &str) -> Result<GridMap, MapError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MapError::Empty);
    }
    let lines: Vec<&str> = s.lines().collect();
    let width = lines[0].chars().count();
    for (y, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != width {
            return Err(MapError::InconsistentWidth {
                line: y,
                expected: width,
                found,
            });
        }
    }

    let mut grid = Grid::new(width as i32, lines.len() as i32);
    let mut origin = None;
    let mut goal = None;

    for (y, line) in lines.iter().enumerate() {
        for (x, ch) in line.chars().enumerate() {
            let pos = Point::new(x as i32, y as i32);
            let cell = match ch {
                '#' => Cell::WALL,
                '.' | '*' => Cell::FLOOR,
                '1'..='9' => Cell(ch as i32 - '0' as i32),
                '@' | '>' => {
                    let marker = if ch == '@' { &mut origin } else { &mut goal };
                    if marker.is_some() {
                        return Err(MapError::DuplicateMarker { ch, pos });
                    }
                    *marker = Some(pos);
                    Cell::FLOOR
                }
                _ => return Err(MapError::InvalidRune { ch, pos }),
            };
            grid.set(pos, cell);
        }
    }

    Ok(GridMap { grid, origin, goal })
}

/// Draw `grid` as text, overlaying `path`.
///
/// The first path point is drawn as `@`, the last as `>` and the rest as
/// `*`. Cells with weights above 9 are drawn as `+`.
pub fn render(grid: &Grid, path: &[Point]) -> String {
    let w = grid.width().max(0) as usize;
    let h = grid.height().max(0) as usize;
    let mut rows: Vec<Vec<char>> = vec![Vec::with_capacity(w); h];

    for (p, cell) in grid.iter() {
        let ch = match cell.value() {
            v if v <= 0 => '#',
            1 => '.',
            v @ 2..=9 => char::from(b'0' + v as u8),
            _ => '+',
        };
        rows[p.y as usize].push(ch);
    }

    let last = path.len().saturating_sub(1);
    for (i, p) in path.iter().enumerate() {
        if !grid.contains(*p) {
            continue;
        }
        let ch = if i == 0 {
            '@'
        } else if i == last {
            '>'
        } else {
            '*'
        };
        rows[p.y as usize][p.x as usize] = ch;
    }

    let lines: Vec<String> = rows.into_iter().map(String::from_iter).collect();
    lines.join("\n")
}

/// Errors that can occur when parsing a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The input holds no map lines.
    Empty,
    /// A line does not have the width of the first line.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet.
    InvalidRune { ch: char, pos: Point },
    /// `@` or `>` appears more than once.
    DuplicateMarker { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("map: empty input"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "map contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map: second \u{201c}{ch}\u{201d} marker at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}
