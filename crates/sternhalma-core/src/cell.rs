//! Board cells of the 8x8 rhombic hex grid, encoded as `row * 8 + col`.

use std::fmt;

use crate::bitboard::Bitboard;

/// A cell on the board.
///
/// Index = row * 8 + col, so a1 = 0, b1 = 1, ..., h8 = 63. Columns are shown
/// as letters `a..h` and rows as digits `1..8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Number of rows (and columns) of the grid.
    pub const SIDE: u8 = 8;

    /// Total number of cells.
    pub const COUNT: usize = Self::SIDE as usize * Self::SIDE as usize;

    /// Create a cell from a row and a column, returning `None` off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Cell> {
        if row < Self::SIDE && col < Self::SIDE {
            Some(Cell(row * Self::SIDE + col))
        } else {
            None
        }
    }

    /// Create a cell from signed coordinates, returning `None` off the board.
    #[inline]
    pub const fn from_coords(row: i8, col: i8) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as u8, col as u8)
    }

    /// Create a cell from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Cell> {
        if (index as usize) < Self::COUNT {
            Some(Cell(index))
        } else {
            None
        }
    }

    /// Create a cell from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Cell {
        debug_assert!((index as usize) < Self::COUNT);
        Cell(index)
    }

    /// Parse a cell name such as `"c4"`.
    pub fn from_notation(s: &str) -> Option<Cell> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let col_byte = bytes[0];
        let row_byte = bytes[1];
        if !(b'a'..=b'h').contains(&col_byte) || !(b'1'..=b'8').contains(&row_byte) {
            return None;
        }

        Cell::new(row_byte - b'1', col_byte - b'a')
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0..7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Return the column (0..7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIDE
    }

    /// Return the cell obtained by rotating the board half a turn.
    #[inline]
    pub const fn mirror(self) -> Cell {
        Cell(63 - self.0)
    }

    /// Return a bitboard with only this cell set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// Iterate over all 64 cells in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Cell> {
        (0u8..64).map(Cell)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'a' + self.col()) as char;
        write!(f, "{}{}", col, self.row() + 1)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Cell;

    #[test]
    fn row_col_roundtrip() {
        for cell in Cell::all() {
            assert_eq!(Cell::new(cell.row(), cell.col()), Some(cell));
        }
    }

    #[test]
    fn off_board_coordinates() {
        assert_eq!(Cell::new(8, 0), None);
        assert_eq!(Cell::new(0, 8), None);
        assert_eq!(Cell::from_coords(-1, 3), None);
        assert_eq!(Cell::from_coords(3, -1), None);
        assert_eq!(Cell::from_index(64), None);
    }

    #[test]
    fn notation() {
        assert_eq!(Cell::from_notation("a1").map(Cell::index), Some(0));
        assert_eq!(Cell::from_notation("h1").map(Cell::index), Some(7));
        assert_eq!(Cell::from_notation("a8").map(Cell::index), Some(56));
        assert_eq!(Cell::from_notation("h8").map(Cell::index), Some(63));
        assert!(Cell::from_notation("i1").is_none());
        assert!(Cell::from_notation("a9").is_none());
        assert!(Cell::from_notation("").is_none());

        let cell = Cell::from_notation("d5").unwrap();
        assert_eq!(cell.row(), 4);
        assert_eq!(cell.col(), 3);
        assert_eq!(format!("{cell}"), "d5");
        assert_eq!(format!("{cell:?}"), "Cell(d5)");
    }

    #[test]
    fn mirror_is_involution() {
        for cell in Cell::all() {
            assert_eq!(cell.mirror().mirror(), cell);
            assert_eq!(cell.mirror().row(), 7 - cell.row());
            assert_eq!(cell.mirror().col(), 7 - cell.col());
        }
    }
}
