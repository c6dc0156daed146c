//! Move execution via make/unmake on a single mutable board.

use tracing::debug;

use crate::board::{Board, Undo};
use crate::error::BoardError;
use crate::hop_move::Move;
use crate::movegen::generate_legal_moves;
use crate::zobrist;

impl Board {
    /// Apply `mv` for the side to move.
    ///
    /// Moves the piece, flips the side to move, updates the hash and counts
    /// one more occurrence of the resulting configuration.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is the sentinel, if its source is not a piece of the
    /// side to move, or if its destination is occupied. Moves from outside
    /// the engine should go through [`Board::try_apply`].
    pub fn apply(&mut self, mv: Move) {
        let us = self.side_to_move();
        assert!(!mv.is_illegal(), "apply called with the illegal-move sentinel");
        assert!(
            self.side(us).contains(mv.source()),
            "apply {mv}: source is not a {us} piece"
        );
        assert!(!self.is_occupied(mv.dest()), "apply {mv}: destination is occupied");

        let prior_hash = self.hash();
        self.toggle_pieces(us, mv.source().bitboard() | mv.dest().bitboard());
        self.set_hash(
            prior_hash
                ^ zobrist::cell_key(us, mv.source())
                ^ zobrist::cell_key(us, mv.dest())
                ^ zobrist::SIDE_TO_MOVE,
        );
        self.set_side_to_move(us.flip());
        self.push_history(Undo { mv, prior_hash });
    }

    /// Revert `mv`, which must be the most recently applied move.
    ///
    /// Restores placement, side to move and hash bit-for-bit, and removes the
    /// occurrence `apply` recorded.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied or `mv` is not the last one.
    pub fn undo(&mut self, mv: Move) {
        match self.last_move() {
            Some(last) if last == mv => {}
            Some(last) => panic!("undo {mv}: last applied move is {last}"),
            None => panic!("undo {mv}: no move has been applied"),
        }
        let Some(undo) = self.pop_history() else {
            unreachable!("history checked above");
        };

        let mover = self.side_to_move().flip();
        self.toggle_pieces(mover, mv.source().bitboard() | mv.dest().bitboard());
        self.set_side_to_move(mover);
        self.set_hash(undo.prior_hash);
    }

    /// Apply `mv` after checking it against the generated moves.
    ///
    /// This is the entry point for moves arriving from outside the engine.
    pub fn try_apply(&mut self, mv: Move) -> Result<(), BoardError> {
        if self.result().is_finished() {
            return Err(BoardError::GameFinished);
        }
        let side = self.side_to_move();
        if !generate_legal_moves(self).as_slice().contains(&mv) {
            debug!(%mv, %side, "rejected move");
            return Err(BoardError::IllegalMove { mv, side });
        }
        self.apply(mv);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::cell::Cell;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::hop_move::Move;
    use crate::movegen::generate_legal_moves;
    use crate::zobrist::hash_from_scratch;

    fn cell(name: &str) -> Cell {
        Cell::from_notation(name).unwrap()
    }

    #[test]
    fn apply_moves_piece_and_flips_side() {
        let mut board = Board::starting_position();
        let mv = Move::step(cell("d1"), cell("e1"));
        board.apply(mv);
        assert_eq!(board.color_on(cell("d1")), None);
        assert_eq!(board.color_on(cell("e1")), Some(Color::White));
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.last_move(), Some(mv));
        assert_eq!(board.hash(), hash_from_scratch(&board));
        assert_eq!(board.times_seen(board.hash()), 1);
    }

    #[test]
    fn apply_undo_roundtrip() {
        let mut board = Board::starting_position();
        let before = board.clone();
        for mv in generate_legal_moves(&board).as_slice().to_vec() {
            board.apply(mv);
            board.undo(mv);
            assert_eq!(board, before, "roundtrip failed for {mv}");
        }
    }

    #[test]
    #[should_panic(expected = "destination is occupied")]
    fn apply_rejects_occupied_destination() {
        let mut board = Board::starting_position();
        board.apply(Move::step(cell("a1"), cell("b1")));
    }

    #[test]
    #[should_panic(expected = "source is not a w piece")]
    fn apply_rejects_wrong_owner() {
        let mut board = Board::starting_position();
        board.apply(Move::step(cell("h8"), cell("e4")));
    }

    #[test]
    #[should_panic(expected = "sentinel")]
    fn apply_rejects_sentinel() {
        let mut board = Board::starting_position();
        board.apply(Move::ILLEGAL);
    }

    #[test]
    #[should_panic(expected = "last applied move")]
    fn undo_rejects_mismatched_move() {
        let mut board = Board::starting_position();
        board.apply(Move::step(cell("d1"), cell("e1")));
        board.undo(Move::step(cell("d1"), cell("d2")));
    }

    #[test]
    #[should_panic(expected = "no move has been applied")]
    fn undo_on_fresh_board_panics() {
        let mut board = Board::starting_position();
        board.undo(Move::step(cell("d1"), cell("e1")));
    }

    #[test]
    fn try_apply_checks_legality() {
        let mut board = Board::starting_position();
        // Right cells, wrong kind: d1-e1 is a step, not a jump.
        let bogus = Move::jump(cell("d1"), cell("e1"));
        assert_eq!(
            board.try_apply(bogus),
            Err(BoardError::IllegalMove { mv: bogus, side: Color::White })
        );
        assert_eq!(board.ply(), 0);

        board.try_apply(Move::jump(cell("c1"), cell("e1"))).unwrap();
        assert_eq!(board.ply(), 1);
    }
}
