//! Depth-limited alpha-beta search.

pub mod negamax;

use tracing::debug;

use sternhalma_core::movegen::generate_legal_moves;
use sternhalma_core::{Board, Color, Move};

use crate::eval::weights::Weights;
use negamax::{INF, MAX_PLY, PvTable, SearchContext, WIN_SCORE, WIN_THRESHOLD, negamax};

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move for the searching color.
    pub best_move: Move,
    /// Minimax value from the searching color's point of view.
    pub score: i32,
    /// Full principal variation line.
    pub pv: Vec<Move>,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Return `true` if `score` announces a forced win or loss.
#[inline]
pub fn is_win_score(score: i32) -> bool {
    score.abs() >= WIN_THRESHOLD
}

/// Return the number of plies to the forced result announced by `score`,
/// or `None` for an ordinary score.
#[inline]
pub fn win_distance(score: i32) -> Option<u32> {
    if is_win_score(score) {
        Some((WIN_SCORE - score.abs()) as u32)
    } else {
        None
    }
}

/// Fixed-depth alpha-beta searcher.
///
/// Holds only scratch space, so one searcher can serve any number of
/// positions and weight vectors in sequence.
pub struct Searcher {
    pv: Box<PvTable>,
    total_nodes: u64,
}

impl Searcher {
    /// Create a fresh searcher.
    pub fn new() -> Self {
        Self {
            pv: Box::new(PvTable::new()),
            total_nodes: 0,
        }
    }

    /// Nodes visited over every search run by this searcher.
    pub fn total_nodes(&self) -> u64 {
        self.total_nodes
    }

    /// Search `depth` plies and return the best move for `color`.
    ///
    /// Ties keep the first move in generation order. The board is returned
    /// to its exact prior state.
    ///
    /// # Panics
    ///
    /// Panics if the game on `board` is already finished (which includes a
    /// side to move without moves), if `depth` is 0
    /// or not below the ply limit, or if `color` is not the side to move.
    pub fn get_move(&mut self, board: &mut Board, depth: u8, color: Color, weights: &Weights) -> SearchResult {
        assert!(
            !board.result().is_finished(),
            "get_move called on a finished game ({})",
            board.result()
        );
        assert!(depth > 0, "get_move called with depth 0");
        assert!((depth as usize) < MAX_PLY, "depth {depth} exceeds the ply limit");
        assert_eq!(board.side_to_move(), color, "get_move called for the side not to move");

        let moves = generate_legal_moves(board);
        debug_assert!(!moves.is_empty());

        let mut ctx = SearchContext {
            nodes: 1,
            pv: &mut *self.pv,
            maximizer: color,
            weights,
        };
        ctx.pv.clear_ply(0);

        let mut alpha = -INF;
        let beta = INF;
        let mut best_move = moves[0];
        let mut best_score = -INF;

        for &mv in moves.as_slice() {
            board.apply(mv);
            let score = -negamax(board, depth - 1, 1, -beta, -alpha, &mut ctx);
            board.undo(mv);

            if score > best_score {
                best_score = score;
                best_move = mv;
                if score > alpha {
                    alpha = score;
                    ctx.pv.update(0, mv);
                }
            }
        }

        let nodes = ctx.nodes;
        let pv = ctx.pv.root_pv().to_vec();
        self.total_nodes += nodes;

        debug!(%color, depth, score = best_score, nodes, best = %best_move, "search finished");

        SearchResult {
            best_move,
            score: best_score,
            pv,
            nodes,
            depth,
        }
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_score_helpers() {
        assert!(is_win_score(WIN_SCORE - 1));
        assert!(is_win_score(-(WIN_SCORE - 4)));
        assert!(!is_win_score(500));
        assert_eq!(win_distance(WIN_SCORE - 3), Some(3));
        assert_eq!(win_distance(-(WIN_SCORE - 2)), Some(2));
        assert_eq!(win_distance(0), None);
    }

    #[test]
    fn start_search_returns_generated_move() {
        let mut board = Board::starting_position();
        let mut searcher = Searcher::new();
        let result = searcher.get_move(&mut board, 2, Color::White, &Weights::default());
        assert!(generate_legal_moves(&board).contains(result.best_move));
        assert_eq!(result.pv.first(), Some(&result.best_move));
        assert!(result.nodes > 14);
        assert_eq!(searcher.total_nodes(), result.nodes);
    }

    #[test]
    #[should_panic(expected = "depth 0")]
    fn depth_zero_panics() {
        let mut board = Board::starting_position();
        Searcher::new().get_move(&mut board, 0, Color::White, &Weights::default());
    }

    #[test]
    #[should_panic(expected = "side not to move")]
    fn wrong_color_panics() {
        let mut board = Board::starting_position();
        Searcher::new().get_move(&mut board, 1, Color::Black, &Weights::default());
    }
}
