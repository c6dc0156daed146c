//! Run configuration for games, tournaments, and evolution.

use sternhalma_core::Color;
use sternhalma_engine::MAX_PLY;

use crate::error::ArenaError;

/// Accept a search depth in `1..MAX_PLY`.
fn check_depth(depth: u8) -> Result<(), ArenaError> {
    if depth == 0 {
        return Err(ArenaError::ZeroDepth);
    }
    if depth as usize >= MAX_PLY {
        return Err(ArenaError::DepthTooLarge {
            depth,
            max: MAX_PLY - 1,
        });
    }
    Ok(())
}

/// Settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Stop and adjudicate after this many plies. `None` plays until the
    /// game ends by itself.
    pub max_plies: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_plies: Some(100),
        }
    }
}

impl GameConfig {
    /// Check the settings before a run.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.max_plies == Some(0) {
            return Err(ArenaError::ZeroPlyCap);
        }
        Ok(())
    }
}

/// Settings for a round-robin tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentConfig {
    /// Games played by each unordered pair, alternating colors.
    pub games_per_pairing: u32,
    /// Search depth of whoever plays White.
    pub white_depth: u8,
    /// Search depth of whoever plays Black.
    pub black_depth: u8,
    /// Per-game settings.
    pub game: GameConfig,
    /// Worker threads playing games.
    pub threads: usize,
    /// Build a shared opening book of `(max_ply, search_depth)` with
    /// default weights before the first game.
    pub opening_book: Option<(usize, u8)>,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_pairing: 2,
            white_depth: 1,
            black_depth: 1,
            game: GameConfig::default(),
            threads: 1,
            opening_book: None,
        }
    }
}

impl TournamentConfig {
    /// Check the settings before a run.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.games_per_pairing == 0 {
            return Err(ArenaError::ZeroGames {
                what: "games_per_pairing",
            });
        }
        check_depth(self.white_depth)?;
        check_depth(self.black_depth)?;
        if self.threads == 0 {
            return Err(ArenaError::ZeroThreads);
        }
        if let Some((_, depth)) = self.opening_book {
            check_depth(depth)?;
        }
        self.game.validate()
    }
}

/// Settings for genetic tuning of evaluation weights.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    /// Individuals per generation.
    pub population: usize,
    /// Generations to run.
    pub generations: u32,
    /// Chance that any one gene is perturbed.
    pub mutation_probability: f64,
    /// Standard deviation of the Gaussian noise added to a perturbed gene.
    pub mutation_sigma: f64,
    /// Search depth for both sides.
    pub depth: u8,
    /// Color whose population evolves first.
    pub evolving: Color,
    /// Generations one color evolves before the other takes over.
    pub round_length: u32,
    /// RNG seed; equal seeds give equal runs.
    pub seed: u64,
    /// Per-game settings.
    pub game: GameConfig,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population: 10,
            generations: 10,
            mutation_probability: 0.1,
            mutation_sigma: 0.1,
            depth: 1,
            evolving: Color::White,
            round_length: 5,
            seed: 818_934_826,
            game: GameConfig::default(),
        }
    }
}

impl EvolutionConfig {
    /// Check the settings before a run.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.population < 2 {
            return Err(ArenaError::PopulationTooSmall {
                found: self.population,
                min: 2,
            });
        }
        if self.generations == 0 {
            return Err(ArenaError::ZeroGames { what: "generations" });
        }
        if self.round_length == 0 {
            return Err(ArenaError::ZeroGames { what: "round_length" });
        }
        check_depth(self.depth)?;
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ArenaError::BadMutation {
                name: "mutation_probability",
                value: self.mutation_probability,
            });
        }
        if !(self.mutation_sigma >= 0.0 && self.mutation_sigma.is_finite()) {
            return Err(ArenaError::BadMutation {
                name: "mutation_sigma",
                value: self.mutation_sigma,
            });
        }
        self.game.validate()
    }
}
