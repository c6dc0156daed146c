//! Error types for layout parsing, board validation, and checked moves.

use crate::color::Color;
use crate::hop_move::Move;

/// Errors that occur when parsing a layout string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The layout string does not have exactly 2 space-separated fields.
    #[error("expected 2 layout fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The placement section does not have exactly 8 rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row_index} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index as written (0 = row 8, 7 = row 1).
        row_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not "w" or "b".
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid side string.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from board validation and checked move application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The two side bitboards overlap.
    #[error("white and black side bitboards overlap")]
    OverlappingSides,
    /// A side has no pieces or more pieces than fit in a home region.
    #[error("expected 1 to {max} pieces for {color}, found {count}")]
    PieceCount {
        /// Which side has the wrong count.
        color: Color,
        /// Number of pieces found.
        count: u32,
        /// Largest allowed count.
        max: u32,
    },
    /// The move is not in the generated list for the side to move.
    #[error("illegal move {mv} for {side}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
        /// The side that was to move.
        side: Color,
    },
    /// The game has already ended, no move may be applied.
    #[error("game is already finished")]
    GameFinished,
}
