//! Precomputed adjacency and jump-landing tables.
//!
//! Built at compile time and shared read-only by move generation and
//! evaluation.

use crate::bitboard::Bitboard;
use crate::cell::Cell;
use crate::direction::Direction;

const fn compute_offsets(distance: i8) -> [[Option<Cell>; Direction::COUNT]; Cell::COUNT] {
    let mut table = [[None; Direction::COUNT]; Cell::COUNT];
    let mut idx = 0usize;
    while idx < Cell::COUNT {
        let row = (idx / 8) as i8;
        let col = (idx % 8) as i8;
        let mut d = 0;
        while d < Direction::COUNT {
            let (dr, dc) = Direction::ALL[d].delta();
            table[idx][d] = Cell::from_coords(row + dr * distance, col + dc * distance);
            d += 1;
        }
        idx += 1;
    }
    table
}

const fn compute_neighbor_sets() -> [Bitboard; Cell::COUNT] {
    let neighbor = compute_offsets(1);
    let mut table = [Bitboard::EMPTY; Cell::COUNT];
    let mut idx = 0usize;
    while idx < Cell::COUNT {
        let mut bits = 0u64;
        let mut d = 0;
        while d < Direction::COUNT {
            if let Some(cell) = neighbor[idx][d] {
                bits |= 1u64 << cell.index();
            }
            d += 1;
        }
        table[idx] = Bitboard::new(bits);
        idx += 1;
    }
    table
}

/// Immediate neighbor of each cell in each direction.
static NEIGHBOR: [[Option<Cell>; Direction::COUNT]; Cell::COUNT] = compute_offsets(1);

/// Cell two steps away in each direction: where a hop over the neighbor lands.
static LANDING: [[Option<Cell>; Direction::COUNT]; Cell::COUNT] = compute_offsets(2);

static NEIGHBOR_SET: [Bitboard; Cell::COUNT] = compute_neighbor_sets();

/// Return the neighbor of `cell` in `dir`, if it is on the board.
#[inline]
pub fn neighbor(cell: Cell, dir: Direction) -> Option<Cell> {
    NEIGHBOR[cell.index()][dir.index()]
}

/// Return the landing cell of a hop from `cell` in `dir`, if it is on the board.
#[inline]
pub fn landing(cell: Cell, dir: Direction) -> Option<Cell> {
    LANDING[cell.index()][dir.index()]
}

/// Return every neighbor of `cell` as a set.
#[inline]
pub fn neighbors(cell: Cell) -> Bitboard {
    NEIGHBOR_SET[cell.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(name: &str) -> Cell {
        Cell::from_notation(name).unwrap()
    }

    #[test]
    fn corner_neighbors() {
        // a1 touches b1, a2 and nothing else.
        assert_eq!(neighbors(cell("a1")).count(), 2);
        assert_eq!(neighbor(cell("a1"), Direction::East), Some(cell("b1")));
        assert_eq!(neighbor(cell("a1"), Direction::North), Some(cell("a2")));
        assert_eq!(neighbor(cell("a1"), Direction::NorthWest), None);

        // h1 is the acute corner with three neighbors.
        assert_eq!(neighbors(cell("h1")).count(), 3);
        assert!(neighbors(cell("h1")).contains(cell("g2")));
    }

    #[test]
    fn interior_has_six_neighbors() {
        assert_eq!(neighbors(cell("d4")).count(), 6);
        let expected: Bitboard = ["d3", "e3", "c4", "e4", "c5", "d5"].into_iter().map(cell).collect();
        assert_eq!(neighbors(cell("d4")), expected);
    }

    #[test]
    fn adjacency_is_symmetric() {
        for c in Cell::all() {
            for dir in Direction::ALL {
                if let Some(n) = neighbor(c, dir) {
                    assert_eq!(neighbor(n, dir.opposite()), Some(c), "{c} {dir}");
                    assert!(neighbors(n).contains(c));
                }
            }
        }
    }

    #[test]
    fn landing_is_two_neighbors_away() {
        for c in Cell::all() {
            for dir in Direction::ALL {
                let via = neighbor(c, dir).and_then(|n| neighbor(n, dir));
                assert_eq!(landing(c, dir), via, "{c} {dir}");
            }
        }
        assert_eq!(landing(cell("c1"), Direction::East), Some(cell("e1")));
        assert_eq!(landing(cell("g1"), Direction::East), None);
    }
}
