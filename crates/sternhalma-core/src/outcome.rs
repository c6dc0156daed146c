//! Terminal classification of a position.

use std::fmt;

use crate::color::Color;

/// How many times one (placement, side-to-move) configuration may occur in
/// a game before the game is declared drawn.
pub const MAX_CYCLES_FOR_DRAW: u32 = 3;

/// The state of a game at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    NotFinished,
    Draw,
    WhiteWon,
    BlackWon,
}

impl GameResult {
    /// Return the result in which `color` has won.
    #[inline]
    pub const fn won_by(color: Color) -> GameResult {
        match color {
            Color::White => GameResult::WhiteWon,
            Color::Black => GameResult::BlackWon,
        }
    }

    /// Return `true` unless the game is still running.
    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameResult::NotFinished)
    }

    /// Return the winning color, if any.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::WhiteWon => Some(Color::White),
            GameResult::BlackWon => Some(Color::Black),
            GameResult::NotFinished | GameResult::Draw => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::NotFinished => "*",
            GameResult::Draw => "1/2-1/2",
            GameResult::WhiteWon => "1-0",
            GameResult::BlackWon => "0-1",
        };
        f.write_str(s)
    }
}
