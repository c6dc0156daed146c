//! Player colors and their home regions.

use std::fmt;
use std::ops::Not;

use crate::bitboard::Bitboard;
use crate::cell::Cell;

/// A player: White or Black. An empty cell has no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// All colors in index order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposite color.
    #[inline]
    pub const fn flip(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Return the region this color starts on.
    #[inline]
    pub const fn home(self) -> Bitboard {
        match self {
            Color::White => Bitboard::WHITE_HOME,
            Color::Black => Bitboard::BLACK_HOME,
        }
    }

    /// Return the region this color must fill to win.
    #[inline]
    pub const fn target(self) -> Bitboard {
        self.flip().home()
    }

    /// Map a cell to this color's point of view.
    ///
    /// White sees the board as is; Black sees it rotated half a turn, so
    /// per-cell tables can be written once for "our" side.
    #[inline]
    pub const fn relative(self, cell: Cell) -> Cell {
        match self {
            Color::White => cell,
            Color::Black => cell.mirror(),
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.flip()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::bitboard::Bitboard;
    use crate::cell::Cell;

    #[test]
    fn flip_and_not() {
        assert_eq!(Color::White.flip(), Color::Black);
        assert_eq!(!Color::Black, Color::White);
        assert_eq!(Color::White.flip().flip(), Color::White);
    }

    #[test]
    fn targets_are_opposing_homes() {
        assert_eq!(Color::White.target(), Bitboard::BLACK_HOME);
        assert_eq!(Color::Black.target(), Bitboard::WHITE_HOME);
    }

    #[test]
    fn relative_maps_home_onto_white_home() {
        for color in Color::ALL {
            let mapped: Bitboard = color.home().map(|c| color.relative(c)).collect();
            assert_eq!(mapped, Bitboard::WHITE_HOME, "{color}");
        }
        let h8 = Cell::from_notation("h8").unwrap();
        assert_eq!(Color::Black.relative(h8).index(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "w");
        assert_eq!(format!("{}", Color::Black), "b");
    }
}
