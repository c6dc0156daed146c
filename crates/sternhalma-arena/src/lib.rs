//! Game driver, round-robin tournaments, and genetic weight tuning.

pub mod config;
pub mod error;
pub mod evolution;
pub mod game;
pub mod individual;
pub mod tournament;

pub use config::{EvolutionConfig, GameConfig, TournamentConfig};
pub use error::ArenaError;
pub use evolution::{Evolution, GenerationReport};
pub use game::{GamePlayer, GameRecord};
pub use individual::{Individual, Outcome};
pub use sternhalma_core::Color;
pub use tournament::{Fixture, Tournament, TournamentReport, schedule};
