//! Progress of a side's pieces toward its target region.

use sternhalma_core::{Board, Color};

/// Sum `table` over `color`'s pieces, each looked up from `color`'s point
/// of view.
pub(super) fn progress(board: &Board, color: Color, table: &[f64; 64]) -> f64 {
    board
        .side(color)
        .map(|cell| table[color.relative(cell).index()])
        .sum()
}
