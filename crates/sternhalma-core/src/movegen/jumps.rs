//! Chained jump generation.
//!
//! A jump chain is a depth-first walk over landing cells. Occupancy does not
//! change while a chain is explored, so the set of endpoints reachable from
//! a source is fixed; one visited set per source keeps every chain from
//! revisiting a cell and emits each endpoint once.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;
use crate::direction::Direction;
use crate::geometry::{landing, neighbor};
use crate::hop_move::Move;

use super::MoveList;

/// Generate every jump endpoint for every `color` piece.
pub(super) fn gen_jumps(board: &Board, color: Color, list: &mut MoveList) {
    let mut pieces = board.side(color);

    while let Some((src, rest)) = pieces.pop_lsb() {
        pieces = rest;
        // The moving piece has left its cell for the duration of the chain.
        let occupied = board.occupied().without(src);
        let mut visited = src.bitboard();
        walk_chain(src, src, occupied, &mut visited, list);
    }
}

fn walk_chain(origin: Cell, from: Cell, occupied: Bitboard, visited: &mut Bitboard, list: &mut MoveList) {
    for dir in Direction::ALL {
        let (Some(over), Some(to)) = (neighbor(from, dir), landing(from, dir)) else {
            continue;
        };
        if !occupied.contains(over) || occupied.contains(to) || visited.contains(to) {
            continue;
        }
        *visited = visited.with(to);
        list.push(Move::jump(origin, to));
        walk_chain(origin, to, occupied, visited, list);
    }
}
