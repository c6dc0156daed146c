//! Negamax alpha-beta search over a fixed-perspective evaluation.

use sternhalma_core::movegen::generate_legal_moves;
use sternhalma_core::{Board, Color, GameResult, Move};

use crate::eval::evaluate;
use crate::eval::weights::Weights;

/// Score representing an unreachable upper/lower bound.
pub const INF: i32 = 30_000;

/// Base score for a won game (adjusted by ply for win distance).
pub const WIN_SCORE: i32 = 29_000;

/// Scores above this threshold indicate a forced win.
pub const WIN_THRESHOLD: i32 = 28_000;

/// Score of a drawn game.
pub const DRAW_SCORE: i32 = 0;

/// Maximum search depth (in plies) for array sizing and recursion limits.
pub const MAX_PLY: usize = 64;

/// Score a finished game from `maximizer`'s point of view, found `ply`
/// plies below the root.
pub(super) fn terminal_score(result: GameResult, maximizer: Color, ply: usize) -> i32 {
    match result.winner() {
        Some(winner) if winner == maximizer => WIN_SCORE - ply as i32,
        Some(_) => -(WIN_SCORE - ply as i32),
        None => DRAW_SCORE,
    }
}

/// Negamax alpha-beta search.
///
/// Every score is computed from `ctx.maximizer`'s point of view and
/// negated on the other side's turns, so the value returned is the score
/// for the side to move. The principal variation is collected into
/// `ctx.pv`. The board is restored before returning.
pub(super) fn negamax(
    board: &mut Board,
    depth: u8,
    ply: usize,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext<'_>,
) -> i32 {
    ctx.pv.clear_ply(ply);
    ctx.nodes += 1;

    let sign = if board.side_to_move() == ctx.maximizer { 1 } else { -1 };

    let result = board.result();
    if result.is_finished() {
        return sign * terminal_score(result, ctx.maximizer, ply);
    }

    if depth == 0 || ply + 1 >= MAX_PLY {
        return sign * evaluate(board, ctx.maximizer, ctx.weights);
    }

    // A side without moves is a finished draw, so the list is never empty here.
    let moves = generate_legal_moves(board);
    debug_assert!(!moves.is_empty());

    let mut best_score = -INF;

    for &mv in moves.as_slice() {
        board.apply(mv);
        let score = -negamax(board, depth - 1, ply + 1, -beta, -alpha, ctx);
        board.undo(mv);

        if score > best_score {
            best_score = score;
            if score > alpha {
                alpha = score;
                ctx.pv.update(ply, mv);
            }
        }

        if alpha >= beta {
            break;
        }
    }

    best_score
}

/// Triangular PV table for collecting principal variation lines.
///
/// Each row `ply` contains the PV continuation from that ply onward.
pub struct PvTable {
    moves: [[Move; MAX_PLY]; MAX_PLY],
    len: [usize; MAX_PLY],
}

impl PvTable {
    /// Create an empty PV table.
    pub fn new() -> Self {
        Self {
            moves: [[Move::ILLEGAL; MAX_PLY]; MAX_PLY],
            len: [0; MAX_PLY],
        }
    }

    /// Clear the PV line at `ply` (called at the top of each node).
    pub fn clear_ply(&mut self, ply: usize) {
        if ply < MAX_PLY {
            self.len[ply] = 0;
        }
    }

    /// Update the PV at `ply`: set `mv` as the best move and copy
    /// the continuation from `ply + 1`.
    pub fn update(&mut self, ply: usize, mv: Move) {
        if ply >= MAX_PLY {
            return;
        }

        self.moves[ply][0] = mv;

        let child_ply = ply + 1;
        if child_ply < MAX_PLY {
            let copy_len = self.len[child_ply].min(MAX_PLY - 1);
            let (top, bottom) = self.moves.split_at_mut(child_ply);
            top[ply][1..1 + copy_len].copy_from_slice(&bottom[0][..copy_len]);
            self.len[ply] = 1 + copy_len;
        } else {
            self.len[ply] = 1;
        }
    }

    /// The principal variation from the root.
    pub fn root_pv(&self) -> &[Move] {
        &self.moves[0][..self.len[0]]
    }
}

impl Default for PvTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Search state threaded through negamax calls.
pub(super) struct SearchContext<'a> {
    /// Total nodes visited.
    pub nodes: u64,
    /// Principal variation table.
    pub pv: &'a mut PvTable,
    /// The color every score is computed for.
    pub maximizer: Color,
    /// Evaluation parameters.
    pub weights: &'a Weights,
}
