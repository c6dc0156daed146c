//! Move-choosing agents that a game driver can pit against each other.

use sternhalma_core::{Board, Move};

use crate::book::OpeningBook;
use crate::eval::weights::Weights;
use crate::search::Searcher;

/// Anything that picks a move for the side to move.
pub trait Agent {
    /// Return a move for the side to move on `board`, or [`Move::ILLEGAL`]
    /// if the game is already over. The board must be left as it was found.
    fn best_move(&mut self, board: &mut Board) -> Move;
}

/// An agent that runs a fixed-depth search with its own weights.
pub struct SearchAgent {
    depth: u8,
    weights: Weights,
    searcher: Searcher,
}

impl SearchAgent {
    /// Create an agent searching `depth` plies.
    pub fn new(depth: u8, weights: Weights) -> Self {
        Self {
            depth,
            weights,
            searcher: Searcher::new(),
        }
    }

    /// Return the search depth.
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Return the evaluation weights.
    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Nodes searched by this agent so far.
    pub fn nodes(&self) -> u64 {
        self.searcher.total_nodes()
    }
}

impl Agent for SearchAgent {
    fn best_move(&mut self, board: &mut Board) -> Move {
        if board.result().is_finished() {
            return Move::ILLEGAL;
        }
        let color = board.side_to_move();
        self.searcher
            .get_move(board, self.depth, color, &self.weights)
            .best_move
    }
}

/// An agent that plays from an opening book while it can and searches
/// afterwards.
pub struct BookAgent<'a> {
    book: &'a OpeningBook,
    fallback: SearchAgent,
    book_moves: u32,
}

impl<'a> BookAgent<'a> {
    /// Create an agent reading `book` before falling back to `fallback`.
    pub fn new(book: &'a OpeningBook, fallback: SearchAgent) -> Self {
        Self {
            book,
            fallback,
            book_moves: 0,
        }
    }

    /// Number of moves answered from the book so far.
    pub fn book_moves(&self) -> u32 {
        self.book_moves
    }
}

impl Agent for BookAgent<'_> {
    fn best_move(&mut self, board: &mut Board) -> Move {
        match self.book.lookup(board) {
            Some(mv) => {
                self.book_moves += 1;
                mv
            }
            None => self.fallback.best_move(board),
        }
    }
}
