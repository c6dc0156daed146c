//! Clustering: how many of a side's pieces touch each other.

use sternhalma_core::{Bitboard, neighbors};

/// Count unordered pairs of adjacent cells within `side`.
pub(super) fn adjacent_pairs(side: Bitboard) -> u32 {
    let touching: u32 = side.map(|cell| (neighbors(cell) & side).count()).sum();
    touching / 2
}

#[cfg(test)]
mod tests {
    use sternhalma_core::{Bitboard, Cell};

    use super::adjacent_pairs;

    fn set(names: &[&str]) -> Bitboard {
        names.iter().map(|n| Cell::from_notation(n).unwrap()).collect()
    }

    #[test]
    fn counts_pairs_once() {
        assert_eq!(adjacent_pairs(Bitboard::EMPTY), 0);
        assert_eq!(adjacent_pairs(set(&["d4"])), 0);
        assert_eq!(adjacent_pairs(set(&["d4", "e4"])), 1);
        // d4, e4 and d5 form a triangle on the hex grid.
        assert_eq!(adjacent_pairs(set(&["d4", "e4", "d5"])), 3);
        assert_eq!(adjacent_pairs(set(&["a1", "h8"])), 0);
    }

    #[test]
    fn home_triangle_is_tight() {
        // A 4-3-2-1 triangle has 18 internal edges.
        assert_eq!(adjacent_pairs(Bitboard::WHITE_HOME), 18);
        assert_eq!(adjacent_pairs(Bitboard::BLACK_HOME), 18);
    }
}
