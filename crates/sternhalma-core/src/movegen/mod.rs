//! Move generation: adjacent steps and chained jumps.

mod jumps;
mod steps;

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::geometry::{landing, neighbor, neighbors};
use crate::hop_move::Move;

use self::jumps::gen_jumps;
use self::steps::gen_steps;

/// Capacity of a [`MoveList`]. Ten pieces can each reach at most 44 empty
/// cells by jumping, plus at most 60 steps, so 500 moves is a hard bound.
pub const MAX_MOVES: usize = 512;

/// Stack-allocated buffer for generated moves.
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::ILLEGAL; MAX_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if the list holds `mv`.
    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate every move for `color` on `board`.
///
/// All steps come first, then all jumps; within each group pieces are
/// visited in ascending cell order and directions in canonical order. The
/// caller decides whether `color` is actually to move.
pub fn generate_moves(board: &Board, color: Color) -> MoveList {
    let mut list = MoveList::new();
    gen_steps(board, color, &mut list);
    gen_jumps(board, color, &mut list);
    list
}

/// Generate every move for the side to move.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    generate_moves(board, board.side_to_move())
}

/// Return `true` if `color` has at least one move on `board`.
///
/// Every jump chain starts with a single hop, so one empty neighbor or one
/// hop over an occupied neighbor into an empty landing is enough.
pub fn has_moves(board: &Board, color: Color) -> bool {
    let occupied = board.occupied();
    board.side(color).into_iter().any(|src| {
        (neighbors(src) & !occupied).is_nonempty()
            || Direction::ALL.into_iter().any(|dir| match (neighbor(src, dir), landing(src, dir)) {
                (Some(over), Some(dst)) => occupied.contains(over) && !occupied.contains(dst),
                _ => false,
            })
    })
}
