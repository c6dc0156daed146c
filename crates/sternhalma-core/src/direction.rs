//! The six hex directions of the rhombic grid.

use std::fmt;

/// One of the six neighbor directions.
///
/// On the rhombic layout a cell `(row, col)` touches `(row±1, col)`,
/// `(row, col±1)`, `(row-1, col+1)` and `(row+1, col-1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    South = 0,
    SouthEast = 1,
    West = 2,
    East = 3,
    NorthWest = 4,
    North = 5,
}

impl Direction {
    /// Total number of directions.
    pub const COUNT: usize = 6;

    /// All directions in canonical generation order.
    pub const ALL: [Direction; 6] = [
        Direction::South,
        Direction::SouthEast,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::North,
    ];

    /// Return the index (0..6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the `(row, col)` offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::South => (-1, 0),
            Direction::SouthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (1, -1),
            Direction::North => (1, 0),
        }
    }

    /// Return the direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::South => "S",
            Direction::SouthEast => "SE",
            Direction::West => "W",
            Direction::East => "E",
            Direction::NorthWest => "NW",
            Direction::North => "N",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn indices_follow_order() {
        for (i, dir) in Direction::ALL.into_iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn opposite_negates_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.opposite().delta(), (-dr, -dc), "{dir}");
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
