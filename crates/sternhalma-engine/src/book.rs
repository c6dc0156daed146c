//! Precomputed replies for the opening plies.
//!
//! For each side the book follows that side's searched move and branches on
//! every reply of the opponent, so any game that stays within the first
//! `max_ply` plies finds its position in the book on the book side's turn.

use std::collections::HashMap;

use tracing::{debug, info};

use sternhalma_core::movegen::generate_legal_moves;
use sternhalma_core::{Board, Color, Move};

use crate::eval::weights::Weights;
use crate::search::Searcher;

/// Key of a book entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookKey {
    /// Zobrist hash of the position.
    pub hash: u64,
    /// Side to move in the position.
    pub side_to_move: Color,
}

impl BookKey {
    /// Return the key of the current position on `board`.
    pub fn of(board: &Board) -> BookKey {
        BookKey {
            hash: board.hash(),
            side_to_move: board.side_to_move(),
        }
    }
}

/// An immutable table of best moves for shallow opening positions.
///
/// Only valid for the weights and depth it was generated with; using it
/// with other weights trades move quality for speed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpeningBook {
    entries: HashMap<BookKey, Move>,
}

impl OpeningBook {
    /// Build the book for both sides from the starting position.
    ///
    /// # Panics
    ///
    /// Panics if `search_depth` is 0.
    pub fn generate(max_ply: usize, search_depth: u8, weights: &Weights) -> OpeningBook {
        let mut builder = Builder {
            book: OpeningBook::default(),
            searcher: Searcher::new(),
            max_ply,
            search_depth,
            weights,
        };

        for book_side in Color::ALL {
            let mut board = Board::starting_position();
            builder.explore(&mut board, book_side);
        }

        info!(
            entries = builder.book.len(),
            max_ply,
            search_depth,
            nodes = builder.searcher.total_nodes(),
            "opening book generated"
        );
        builder.book
    }

    /// Rebuild a book from stored entries.
    pub fn from_entries(entries: impl IntoIterator<Item = (BookKey, Move)>) -> OpeningBook {
        OpeningBook {
            entries: entries.into_iter().collect(),
        }
    }

    /// Return the stored move for the position on `board`, if the book has
    /// one and it is playable there.
    pub fn lookup(&self, board: &Board) -> Option<Move> {
        let mv = *self.entries.get(&BookKey::of(board))?;
        generate_legal_moves(board).contains(mv).then_some(mv)
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if the book holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&BookKey, &Move)> {
        self.entries.iter()
    }
}

struct Builder<'a> {
    book: OpeningBook,
    searcher: Searcher,
    max_ply: usize,
    search_depth: u8,
    weights: &'a Weights,
}

impl Builder<'_> {
    fn explore(&mut self, board: &mut Board, book_side: Color) {
        if board.ply() >= self.max_ply || board.result().is_finished() {
            return;
        }

        if board.side_to_move() == book_side {
            let key = BookKey::of(board);
            let mv = match self.book.entries.get(&key).copied() {
                Some(mv) => mv,
                None => {
                    let result = self
                        .searcher
                        .get_move(board, self.search_depth, book_side, self.weights);
                    if result.best_move.is_illegal() {
                        return;
                    }
                    debug!(ply = board.ply(), side = %book_side, mv = %result.best_move, score = result.score, "book entry");
                    self.book.entries.insert(key, result.best_move);
                    result.best_move
                }
            };
            board.apply(mv);
            self.explore(board, book_side);
            board.undo(mv);
        } else {
            let replies = generate_legal_moves(board);
            for &mv in replies.as_slice() {
                board.apply(mv);
                self.explore(board, book_side);
                board.undo(mv);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_book_has_no_moves() {
        let book = OpeningBook::default();
        assert!(book.is_empty());
        assert_eq!(book.lookup(&Board::starting_position()), None);
    }

    #[test]
    fn two_ply_book_covers_both_sides() {
        let book = OpeningBook::generate(2, 1, &Weights::default());
        // White: the start position. Black: one entry per White opening move.
        assert_eq!(book.len(), 1 + 14);

        let mut board = Board::starting_position();
        let first = book.lookup(&board).unwrap();
        board.apply(first);
        assert!(book.lookup(&board).is_some());
    }

    #[test]
    fn generation_is_deterministic() {
        let weights = Weights::default();
        let first = OpeningBook::generate(3, 1, &weights);
        let second = OpeningBook::generate(3, 1, &weights);
        assert!(first.len() > 1 + 14);
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_rejects_unplayable_move() {
        let board = Board::starting_position();
        let key = BookKey::of(&board);
        let bogus = Move::ILLEGAL;
        let book = OpeningBook::from_entries([(key, bogus)]);
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup(&board), None);
    }
}
