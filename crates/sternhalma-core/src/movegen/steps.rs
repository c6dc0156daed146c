//! Single-step move generation.

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::geometry::neighbor;
use crate::hop_move::Move;

use super::MoveList;

/// Generate a step to every empty neighbor of every `color` piece.
pub(super) fn gen_steps(board: &Board, color: Color, list: &mut MoveList) {
    let empty = !board.occupied();
    let mut pieces = board.side(color);

    while let Some((src, rest)) = pieces.pop_lsb() {
        pieces = rest;
        for dir in Direction::ALL {
            if let Some(dst) = neighbor(src, dir) {
                if empty.contains(dst) {
                    list.push(Move::step(src, dst));
                }
            }
        }
    }
}
