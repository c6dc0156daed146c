//! A competitor: a weight vector plus its running tournament record.

use rand::Rng;
use rand_distr::StandardNormal;

use sternhalma_engine::Weights;

/// Standard deviation of the noise used for random starting weights.
pub const INIT_SIGMA: f64 = 0.1;

/// Draw from `Normal(0, sigma)`.
fn gaussian<R: Rng + ?Sized>(rng: &mut R, sigma: f64) -> f64 {
    sigma * rng.sample::<f64, _>(StandardNormal)
}

/// Outcome of one game for one participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The participant won.
    Win,
    /// The participant lost.
    Loss,
    /// Drawn, blocked, or stopped at the ply cap.
    Draw,
}

/// A set of evaluation weights competing in tournaments.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    /// Label used in logs.
    pub name: String,
    /// Evaluation weights this individual plays with.
    pub weights: Weights,
    /// Games won.
    pub wins: u32,
    /// Games lost.
    pub losses: u32,
    /// Games drawn, blocked, or adjudicated.
    pub draws: u32,
    /// Sum of game scores from this individual's side.
    pub score: f64,
}

impl Individual {
    /// Create an individual with a clean record.
    pub fn new(name: impl Into<String>, weights: Weights) -> Self {
        Self {
            name: name.into(),
            weights,
            wins: 0,
            losses: 0,
            draws: 0,
            score: 0.0,
        }
    }

    /// Create an individual whose tunable weights are drawn from
    /// `Normal(0, INIT_SIGMA)` and clamped to `[0, 1]`, so roughly half start
    /// at zero.
    pub fn random<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Self {
        Self::new(name, Weights::from_fn(|| gaussian(rng, INIT_SIGMA)))
    }

    /// Games played so far.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Clear the record, keeping name and weights.
    pub fn reset(&mut self) {
        self.wins = 0;
        self.losses = 0;
        self.draws = 0;
        self.score = 0.0;
    }

    /// Add one game to the record.
    pub fn record(&mut self, outcome: Outcome, score: f64) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.score += score;
    }

    /// Add `Normal(0, sigma)` noise to each tunable weight with probability
    /// `probability`, clamping to `[0, 1]`.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R, probability: f64, sigma: f64) {
        for gene in self.weights.genes_mut() {
            if rng.gen_bool(probability) {
                *gene = (*gene + gaussian(rng, sigma)).clamp(0.0, 1.0);
            }
        }
    }
}
