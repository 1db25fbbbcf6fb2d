//! Lattice coordinates and cardinal directions.
//!
//! ## Coordinates
//!
//! A `Position` is an `(x, y)` cell on an N×N lattice. `x` grows to the
//! right and `y` grows downward, so `Up` decreases `y`.
//!
//! ## Usage
//!
//! ```
//! use grid_pursuit::core::{Direction, Position};
//!
//! let origin = Position::new(0, 0);
//! let right = origin.step(Direction::Right);
//!
//! assert_eq!(right, Position::new(1, 0));
//! assert_eq!(origin.manhattan(Position::new(5, 5)), 10);
//! assert_eq!(origin.direction_to(right), Some(Direction::Right));
//! ```

use serde::{Deserialize, Serialize};

/// A cell on the lattice.
///
/// Positions are plain values; bounds are checked by the graph that owns them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The neighboring position one step in `direction`.
    ///
    /// The result may lie outside the grid.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Direction of a unit step from `self` to `other`.
    ///
    /// Returns `None` unless the two positions are exactly one step apart.
    #[must_use]
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| self.step(d) == other)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal move directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Every direction, in candidate enumeration order.
    ///
    /// Neighbor queries, path search and agent tie-breaks all iterate in
    /// this order, which keeps results reproducible.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(dx, dy)` offset of a single step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Dense index in `0..4`, matching `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
