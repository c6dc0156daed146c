//! Drives one game between two agents.

use tracing::{debug, info};

use sternhalma_core::movegen::has_moves;
use sternhalma_core::{Board, Color, GameResult, Move};
use sternhalma_engine::Agent;

use crate::config::GameConfig;

/// Everything that happened in one finished or capped game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    /// How the game ended. `NotFinished` only when the ply cap stopped it.
    pub result: GameResult,
    /// Plies played.
    pub plies: u32,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// `true` if the ply cap stopped the game.
    pub adjudicated: bool,
    /// `true` if the game ended because the side to move had no move.
    pub blocked: bool,
    /// Score of the game from White's point of view.
    pub white_score: f64,
    /// Position when play stopped.
    pub final_board: Board,
}

impl GameRecord {
    /// The game score from `color`'s point of view.
    pub fn score_for(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white_score,
            Color::Black => -self.white_score,
        }
    }
}

/// Plays games from the starting position.
#[derive(Debug, Clone, Copy, Default)]
pub struct GamePlayer {
    config: GameConfig,
}

impl GamePlayer {
    /// Create a player using `config` for every game.
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Return the game settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play one game from the starting position, asking `white` and `black`
    /// for moves in turn.
    ///
    /// # Panics
    ///
    /// Panics if an agent returns a move that is not legal on the board.
    pub fn play(&self, white: &mut dyn Agent, black: &mut dyn Agent) -> GameRecord {
        self.play_from(Board::starting_position(), white, black)
    }

    /// Play one game from `board`.
    ///
    /// The game ends on a win, on a draw (repetition, or a side to move
    /// without moves), or at the ply cap. The cap counts plies played here.
    ///
    /// # Panics
    ///
    /// Panics if an agent returns a move that is not legal on the board.
    pub fn play_from(&self, mut board: Board, white: &mut dyn Agent, black: &mut dyn Agent) -> GameRecord {
        let mut moves = Vec::new();
        let mut adjudicated = false;

        while !board.result().is_finished() {
            if let Some(cap) = self.config.max_plies {
                if moves.len() >= cap as usize {
                    adjudicated = true;
                    break;
                }
            }

            let side = board.side_to_move();
            let agent: &mut dyn Agent = match side {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };
            let mv = agent.best_move(&mut board);
            if let Err(err) = board.try_apply(mv) {
                panic!("{side} agent chose {mv}: {err}");
            }
            debug!(ply = moves.len() + 1, %side, %mv, hash = board.hash(), "move played");
            moves.push(mv);
        }

        let result = board.result();
        let blocked = result == GameResult::Draw && !has_moves(&board, board.side_to_move());
        let plies = moves.len() as u32;
        let white_score = self.white_score(result, plies, &board);

        info!(
            %result,
            plies,
            adjudicated,
            blocked,
            white_score,
            "game finished"
        );

        GameRecord {
            result,
            plies,
            moves,
            adjudicated,
            blocked,
            white_score,
            final_board: board,
        }
    }

    /// Score a game from White's side: a win is worth `1` plus a bonus for
    /// finishing early, a capped game is judged by pieces already home.
    fn white_score(&self, result: GameResult, plies: u32, board: &Board) -> f64 {
        let win_value = match self.config.max_plies {
            Some(cap) => 1.0 + f64::from(cap.saturating_sub(plies)) / f64::from(cap),
            None => 1.0,
        };
        match result {
            GameResult::WhiteWon => win_value,
            GameResult::BlackWon => -win_value,
            GameResult::Draw => 0.0,
            GameResult::NotFinished => {
                let white_home = board.pieces_in_target(Color::White) as f64;
                let black_home = board.pieces_in_target(Color::Black) as f64;
                (white_home - black_home) / 20.0
            }
        }
    }
}
