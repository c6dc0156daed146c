//! Static evaluation driven by a [`Weights`] vector.
//!
//! The score is not antisymmetric: with `own_factor != 1` White's score of
//! a position is not the negation of Black's. Search therefore always asks
//! for the score of one fixed color.

mod cohesion;
mod progress;
pub mod weights;

use sternhalma_core::{Board, Color};

use self::cohesion::adjacent_pairs;
use self::progress::progress;
use self::weights::Weights;

/// Bound on the magnitude of any static score.
pub const EVAL_LIMIT: i32 = 20_000;

/// Score `board` for `perspective`; higher is better for that side.
///
/// `100 * (own_factor * our_progress - their_progress + cohesion * pairs)`,
/// rounded and clamped to `±EVAL_LIMIT`.
pub fn evaluate(board: &Board, perspective: Color, weights: &Weights) -> i32 {
    let ours = progress(board, perspective, &weights.advance);
    let theirs = progress(board, perspective.flip(), &weights.opponent);
    let pairs = adjacent_pairs(board.side(perspective)) as f64;

    let raw = weights.own_factor * ours - theirs + weights.cohesion * pairs;
    let scaled = (raw * 100.0).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(-(EVAL_LIMIT as f64), EVAL_LIMIT as f64) as i32
}
