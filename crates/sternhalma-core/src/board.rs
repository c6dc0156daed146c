//! The board: occupancy per color, side to move, hash, and repetition counts.

use std::collections::HashMap;
use std::fmt;

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::color::Color;
use crate::error::BoardError;
use crate::hop_move::Move;
use crate::movegen;
use crate::outcome::{GameResult, MAX_CYCLES_FOR_DRAW};
use crate::zobrist;

/// Number of pieces each side starts with (the size of a home region).
pub const PIECES_PER_SIDE: u32 = 10;

/// What `undo` needs to restore a position exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Undo {
    pub(crate) mv: Move,
    pub(crate) prior_hash: u64,
}

/// Complete game state.
///
/// Positions are mutated in place with [`Board::apply`] and restored with
/// [`Board::undo`]; the search never copies boards.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Bitboard for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Zobrist hash of the placement and side to move.
    hash: u64,
    /// Occurrences of each hash during this game, including the current one.
    repetitions: HashMap<u64, u32>,
    /// Applied moves, most recent last.
    history: Vec<Undo>,
}

impl Board {
    /// Return the canonical starting position with White to move.
    pub fn starting_position() -> Board {
        Board::new_unchecked(Bitboard::WHITE_HOME, Bitboard::BLACK_HOME, Color::White)
    }

    /// Build a position from two placements.
    ///
    /// The position starts a fresh game: its own configuration counts as seen
    /// once and there is no move history.
    pub fn from_sides(white: Bitboard, black: Bitboard, side_to_move: Color) -> Result<Board, BoardError> {
        let board = Board::new_unchecked(white, black, side_to_move);
        board.validate()?;
        Ok(board)
    }

    fn new_unchecked(white: Bitboard, black: Bitboard, side_to_move: Color) -> Board {
        let mut board = Board {
            sides: [white, black],
            side_to_move,
            hash: 0,
            repetitions: HashMap::new(),
            history: Vec::new(),
        };
        board.hash = zobrist::hash_from_scratch(&board);
        board.repetitions.insert(board.hash, 1);
        board
    }

    /// Return the color of the piece on the given cell, if any.
    pub fn color_on(&self, cell: Cell) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.sides[color.index()].contains(cell))
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the occupied cells bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[0] | self.sides[1]
    }

    /// Return `true` if the given cell is occupied.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied().contains(cell)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the Zobrist hash of the position.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Return how many times the configuration with `hash` has occurred in
    /// this game.
    #[inline]
    pub fn times_seen(&self, hash: u64) -> u32 {
        self.repetitions.get(&hash).copied().unwrap_or(0)
    }

    /// Return the number of moves applied and not undone.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Return the most recently applied move, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|undo| undo.mv)
    }

    /// Return an iterator over the applied moves, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.history.iter().map(|undo| undo.mv)
    }

    /// Return the number of `color`'s pieces standing in its target region.
    #[inline]
    pub fn pieces_in_target(&self, color: Color) -> u32 {
        (self.side(color) & color.target()).count()
    }

    /// Classify the current position.
    ///
    /// A side wins when its pieces fill the opposing home region exactly. A
    /// configuration seen [`MAX_CYCLES_FOR_DRAW`] times is a draw, and so is
    /// a position where the side to move has no move.
    pub fn result(&self) -> GameResult {
        for color in Color::ALL {
            if self.side(color) == color.target() {
                return GameResult::won_by(color);
            }
        }
        if self.times_seen(self.hash) >= MAX_CYCLES_FOR_DRAW {
            return GameResult::Draw;
        }
        if !movegen::has_moves(self, self.side_to_move) {
            return GameResult::Draw;
        }
        GameResult::NotFinished
    }

    #[inline]
    pub(crate) fn toggle_pieces(&mut self, color: Color, mask: Bitboard) {
        self.sides[color.index()] ^= mask;
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_hash(&mut self, hash: u64) {
        self.hash = hash;
    }

    pub(crate) fn push_history(&mut self, undo: Undo) {
        self.history.push(undo);
        *self.repetitions.entry(self.hash).or_insert(0) += 1;
    }

    /// Remove the current configuration's occurrence and pop the last move.
    pub(crate) fn pop_history(&mut self) -> Option<Undo> {
        let undo = self.history.pop()?;
        if let Some(count) = self.repetitions.get_mut(&self.hash) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&self.hash);
            }
        }
        Some(undo)
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if (self.sides[0] & self.sides[1]).is_nonempty() {
            return Err(BoardError::OverlappingSides);
        }

        for color in Color::ALL {
            let count = self.side(color).count();
            if count == 0 || count > PIECES_PER_SIDE {
                return Err(BoardError::PieceCount {
                    color,
                    count,
                    max: PIECES_PER_SIDE,
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a skewed 8x8 grid.
///
/// Each row is shifted half a cell right of the one below, so the six
/// neighbors of a cell are the six surrounding glyphs.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (0..Cell::SIDE).rev() {
            write!(f, "{}  {:indent$}", row + 1, "", indent = row as usize)?;
            for col in 0..Cell::SIDE {
                let c = match Cell::new(row, col).and_then(|cell| board.color_on(cell)) {
                    Some(Color::White) => 'W',
                    Some(Color::Black) => 'B',
                    None => '.',
                };
                if col + 1 < Cell::SIDE {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::bitboard::Bitboard;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::hop_move::Move;
    use crate::outcome::GameResult;

    #[test]
    fn starting_position_validates() {
        let board = Board::starting_position();
        board.validate().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.occupied().count(), 20);
        assert_eq!(board.ply(), 0);
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn starting_position_color_on() {
        let board = Board::starting_position();
        assert_eq!(board.color_on(Cell::from_notation("a1").unwrap()), Some(Color::White));
        assert_eq!(board.color_on(Cell::from_notation("h8").unwrap()), Some(Color::Black));
        assert_eq!(board.color_on(Cell::from_notation("e4").unwrap()), None);
    }

    #[test]
    fn start_is_seen_once_and_running() {
        let board = Board::starting_position();
        assert_eq!(board.times_seen(board.hash()), 1);
        assert_eq!(board.result(), GameResult::NotFinished);
    }

    #[test]
    fn from_sides_rejects_overlap() {
        let err = Board::from_sides(Bitboard::WHITE_HOME, Bitboard::WHITE_HOME, Color::White).unwrap_err();
        assert_eq!(err, BoardError::OverlappingSides);
    }

    #[test]
    fn from_sides_rejects_bad_counts() {
        let err = Board::from_sides(Bitboard::EMPTY, Bitboard::BLACK_HOME, Color::White).unwrap_err();
        assert!(matches!(err, BoardError::PieceCount { color: Color::White, count: 0, .. }));

        let crowded = Bitboard::new(0xFFF);
        let err = Board::from_sides(Bitboard::BLACK_HOME, crowded, Color::White).unwrap_err();
        assert!(matches!(err, BoardError::PieceCount { color: Color::Black, count: 12, .. }));
    }

    #[test]
    fn filled_target_wins() {
        // Homes swapped: both sides have arrived, White is checked first.
        let board = Board::from_sides(Bitboard::BLACK_HOME, Bitboard::WHITE_HOME, Color::White).unwrap();
        assert_eq!(board.result(), GameResult::WhiteWon);

        let black_arrived = Board::from_sides(Bitboard::new(0xFF00), Bitboard::WHITE_HOME, Color::White).unwrap();
        assert_eq!(black_arrived.result(), GameResult::BlackWon);
    }

    #[test]
    fn partial_target_does_not_win() {
        let e4 = Cell::from_notation("e4").unwrap();
        let white = Bitboard::BLACK_HOME.without(Cell::from_notation("h8").unwrap()).with(e4);
        let black = Bitboard::WHITE_HOME.without(Cell::from_notation("a1").unwrap()).with(e4.mirror());
        let board = Board::from_sides(white, black, Color::Black).unwrap();
        assert_eq!(board.result(), GameResult::NotFinished);
        assert_eq!(board.pieces_in_target(Color::White), 9);
        assert_eq!(board.pieces_in_target(Color::Black), 9);
    }

    #[test]
    fn side_without_moves_is_draw() {
        // After g6-h6 the lone Black piece on h8 can neither step nor hop.
        let mut board: Board = "5WWB/7W/6W1/8/8/8/8/8 w".parse().unwrap();
        assert_eq!(board.result(), GameResult::NotFinished);

        let block = Move::step(Cell::from_notation("g6").unwrap(), Cell::from_notation("h6").unwrap());
        board.apply(block);
        assert_eq!(board.result(), GameResult::Draw);

        board.undo(block);
        assert_eq!(board.result(), GameResult::NotFinished);
    }

    #[test]
    fn pretty_print() {
        let board = Board::starting_position();
        let text = format!("{}", board.pretty());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8         . . . . B B B B");
        assert_eq!(lines[7], "1  W W W W . . . .");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
