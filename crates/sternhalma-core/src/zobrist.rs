//! Zobrist hashing keys for repetition detection and opening-book lookup.

use crate::board::Board;
use crate::cell::Cell;
use crate::color::Color;

/// Key for each (color, cell) pair. Indexed by `[Color::index()][Cell::index()]`.
pub(crate) static CELL_COLOR: [[u64; Cell::COUNT]; Color::COUNT] = {
    let mut table = [[0u64; Cell::COUNT]; Color::COUNT];
    let mut state = SEED;
    let mut color = 0;
    while color < Color::COUNT {
        let mut cell = 0;
        while cell < Cell::COUNT {
            let (val, next) = xorshift64(state);
            table[color][cell] = val;
            state = next;
            cell += 1;
        }
        color += 1;
    }
    table
};

/// Key XORed when Black is the side to move.
pub(crate) static SIDE_TO_MOVE: u64 = {
    // Continues the stream after the 2 * 64 cell keys.
    let mut state = SEED;
    let mut i = 0;
    while i < Color::COUNT * Cell::COUNT {
        let (_, next) = xorshift64(state);
        state = next;
        i += 1;
    }
    let (val, _) = xorshift64(state);
    val
};

const SEED: u64 = 0x4855_4d50_4841_4c4d; // "HUMPHALM"

/// Xorshift64 PRNG. Returns (value, next_state).
const fn xorshift64(mut state: u64) -> (u64, u64) {
    state ^= state << 13;
    state ^= state >> 7;
    state ^= state << 17;
    (state, state)
}

/// Return the key of a piece of `color` standing on `cell`.
#[inline]
pub(crate) fn cell_key(color: Color, cell: Cell) -> u64 {
    CELL_COLOR[color.index()][cell.index()]
}

/// Compute a Zobrist hash from scratch for the given board.
pub fn hash_from_scratch(board: &Board) -> u64 {
    let mut hash = 0u64;

    for color in Color::ALL {
        for cell in board.side(color) {
            hash ^= cell_key(color, cell);
        }
    }

    if board.side_to_move() == Color::Black {
        hash ^= SIDE_TO_MOVE;
    }

    hash
}
