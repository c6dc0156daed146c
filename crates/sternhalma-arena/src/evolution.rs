//! Genetic co-evolution of evaluation weights.
//!
//! Each color keeps its own population and its own best individual so far.
//! Only one color evolves at a time: every generation each of its
//! individuals plays one game against the other color's best so far, the
//! population is ranked by game score, resampled by stochastic universal
//! sampling, and mutated. After `round_length` generations the roles swap.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use sternhalma_core::{Color, GameResult};
use sternhalma_engine::{SearchAgent, Weights};

use crate::config::EvolutionConfig;
use crate::error::ArenaError;
use crate::game::GamePlayer;
use crate::individual::{Individual, Outcome};

/// Scores of one finished generation, before resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// Zero-based generation number.
    pub generation: u32,
    /// Color whose population played this generation.
    pub evolving: Color,
    /// Highest score this generation.
    pub best: f64,
    /// Mean score this generation.
    pub mean: f64,
    /// Lowest score this generation.
    pub worst: f64,
    /// Highest score the evolving color has reached so far.
    pub best_so_far: f64,
}

/// One color's population and its best individual so far.
#[derive(Debug, Clone)]
struct Lineage {
    population: Vec<Individual>,
    best: Individual,
}

impl Lineage {
    fn new(color: Color, size: usize, rng: &mut ChaCha8Rng) -> Self {
        let prefix = color_name(color);
        let population = (0..size)
            .map(|i| Individual::random(format!("{prefix}-{i}"), rng))
            .collect();
        let mut best = Individual::new(format!("{prefix}-default"), Weights::default());
        best.score = f64::NEG_INFINITY;
        Self { population, best }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}

/// A seeded co-evolution run.
pub struct Evolution {
    config: EvolutionConfig,
    rng: ChaCha8Rng,
    player: GamePlayer,
    lineages: [Lineage; Color::COUNT],
    generation: u32,
}

impl Evolution {
    /// Check `config` and draw both initial populations from its seed,
    /// White's first.
    pub fn new(config: EvolutionConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let white = Lineage::new(Color::White, config.population, &mut rng);
        let black = Lineage::new(Color::Black, config.population, &mut rng);

        Ok(Self {
            player: GamePlayer::new(config.game),
            config,
            rng,
            lineages: [white, black],
            generation: 0,
        })
    }

    /// The current population of `color`.
    pub fn population(&self, color: Color) -> &[Individual] {
        &self.lineages[color.index()].population
    }

    /// The highest-scoring individual `color` has produced, with the record
    /// of the generation it scored in.
    ///
    /// Before `color` has evolved this is the default weights with a score
    /// of negative infinity.
    pub fn best(&self, color: Color) -> &Individual {
        &self.lineages[color.index()].best
    }

    /// Color that evolves in the next generation.
    pub fn evolving(&self) -> Color {
        if (self.generation / self.config.round_length) % 2 == 0 {
            self.config.evolving
        } else {
            self.config.evolving.flip()
        }
    }

    /// Generations completed.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Run every configured generation.
    pub fn run(&mut self) -> Vec<GenerationReport> {
        (0..self.config.generations).map(|_| self.step()).collect()
    }

    /// Play, rank, resample, and mutate one generation of the evolving color.
    pub fn step(&mut self) -> GenerationReport {
        let side = self.evolving();
        let opponent = self.lineages[side.flip().index()].best.weights.clone();
        let lineage = &mut self.lineages[side.index()];

        play_generation(&self.player, &self.config, side, &opponent, &mut lineage.population);

        lineage.population.sort_by(|a, b| b.score.total_cmp(&a.score));
        if lineage.population[0].score > lineage.best.score {
            lineage.best = lineage.population[0].clone();
        }

        let n = lineage.population.len();
        let report = GenerationReport {
            generation: self.generation,
            evolving: side,
            best: lineage.population[0].score,
            mean: lineage.population.iter().map(|ind| ind.score).sum::<f64>() / n as f64,
            worst: lineage.population[n - 1].score,
            best_so_far: lineage.best.score,
        };
        info!(
            generation = report.generation,
            evolving = %side,
            best = report.best,
            mean = report.mean,
            worst = report.worst,
            best_so_far = report.best_so_far,
            "generation finished"
        );

        resample(&mut lineage.population, &lineage.best);
        for ind in &mut lineage.population {
            ind.mutate(&mut self.rng, self.config.mutation_probability, self.config.mutation_sigma);
        }
        self.generation += 1;
        report
    }
}

fn play_generation(
    player: &GamePlayer,
    config: &EvolutionConfig,
    side: Color,
    opponent: &Weights,
    population: &mut [Individual],
) {
    for ind in population {
        let mut ours = SearchAgent::new(config.depth, ind.weights.clone());
        let mut theirs = SearchAgent::new(config.depth, opponent.clone());
        let record = match side {
            Color::White => player.play(&mut ours, &mut theirs),
            Color::Black => player.play(&mut theirs, &mut ours),
        };

        let outcome = match record.result.winner() {
            Some(winner) if winner == side => Outcome::Win,
            Some(_) => Outcome::Loss,
            None => Outcome::Draw,
        };
        ind.reset();
        ind.record(outcome, record.score_for(side));
        debug!(
            name = %ind.name,
            adjudicated = record.result == GameResult::NotFinished,
            score = ind.score,
            "evolution game"
        );
    }
}

/// Stochastic universal sampling over a population ranked best first.
///
/// Slot 0 keeps the generation's best, the last slot takes `best`, and the
/// slots between are filled by evenly spaced pointers over the cumulative
/// scores shifted so the worst scores zero.
fn resample(population: &mut [Individual], best: &Individual) {
    let n = population.len();
    let worst = population[n - 1].score;
    let cumulative: Vec<f64> = population
        .iter()
        .scan(0.0, |total, ind| {
            *total += ind.score - worst;
            Some(*total)
        })
        .collect();
    let step = cumulative[n - 1] / n as f64;

    let ranked = population.to_vec();
    let mut pointer = 0.0;
    let mut parent = 0;
    for slot in (1..n - 1).rev() {
        while parent < n - 1 && pointer > cumulative[parent] {
            parent += 1;
        }
        population[slot] = ranked[parent].clone();
        pointer += step;
    }
    population[n - 1] = best.clone();
}
