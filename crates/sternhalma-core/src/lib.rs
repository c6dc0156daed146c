//! Core game types: board representation, move generation, and game rules.

mod bitboard;
mod board;
mod cell;
mod color;
mod direction;
mod error;
mod geometry;
mod hop_move;
mod layout;
mod make_move;
mod outcome;

pub mod movegen;
pub mod perft;
pub mod zobrist;

pub use bitboard::Bitboard;
pub use board::{Board, PIECES_PER_SIDE, PrettyBoard};
pub use cell::Cell;
pub use color::Color;
pub use direction::Direction;
pub use error::{BoardError, LayoutError};
pub use geometry::{landing, neighbor, neighbors};
pub use hop_move::{Move, MoveKind};
pub use layout::STARTING_LAYOUT;
pub use outcome::{GameResult, MAX_CYCLES_FOR_DRAW};
