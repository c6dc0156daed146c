//! Round-robin tournaments over a population of individuals.
//!
//! Games are independent: each worker owns its boards and agents, and the
//! only shared state is the read-only population and opening book. Records
//! come back tagged with their fixture index and are folded into the
//! population in schedule order, so the outcome does not depend on how
//! many threads played the games.

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info};

use sternhalma_core::GameResult;
use sternhalma_engine::{BookAgent, OpeningBook, SearchAgent, Weights};

use crate::config::TournamentConfig;
use crate::error::ArenaError;
use crate::game::{GamePlayer, GameRecord};
use crate::individual::{Individual, Outcome};

/// One scheduled game: population indices of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Index of the individual playing White.
    pub white: usize,
    /// Index of the individual playing Black.
    pub black: usize,
}

/// Build the round-robin schedule: every unordered pair plays
/// `games_per_pairing` games, the lower index taking White first.
pub fn schedule(population: usize, games_per_pairing: u32) -> Vec<Fixture> {
    let mut fixtures = Vec::new();
    for i in 0..population {
        for j in i + 1..population {
            for game in 0..games_per_pairing {
                let fixture = if game % 2 == 0 {
                    Fixture { white: i, black: j }
                } else {
                    Fixture { white: j, black: i }
                };
                fixtures.push(fixture);
            }
        }
    }
    fixtures
}

/// Totals for one tournament run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TournamentReport {
    /// Games played.
    pub games: u32,
    /// Games won by the White player.
    pub white_wins: u32,
    /// Games won by the Black player.
    pub black_wins: u32,
    /// Games without a winner, adjudicated ones included.
    pub draws: u32,
    /// Games stopped at the ply cap.
    pub adjudicated: u32,
    /// Games ended because the side to move had no move.
    pub blocked: u32,
}

/// A configured round-robin tournament.
#[derive(Debug, Clone)]
pub struct Tournament {
    config: TournamentConfig,
}

impl Tournament {
    /// Create a tournament after checking `config`.
    pub fn new(config: TournamentConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Return the tournament settings.
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    /// Play the full schedule and add every result to `population`.
    ///
    /// Records accumulate on top of whatever the individuals already hold;
    /// call [`Individual::reset`] first for a fresh table.
    pub fn run(&self, population: &mut [Individual]) -> Result<TournamentReport, ArenaError> {
        if population.len() < 2 {
            return Err(ArenaError::PopulationTooSmall {
                found: population.len(),
                min: 2,
            });
        }

        let book = self
            .config
            .opening_book
            .map(|(max_ply, depth)| OpeningBook::generate(max_ply, depth, &Weights::default()));

        let fixtures = schedule(population.len(), self.config.games_per_pairing);
        let records = self.play_fixtures(population, &fixtures, book.as_ref());

        let mut report = TournamentReport::default();
        for (fixture, record) in fixtures.iter().zip(&records) {
            fold(population, *fixture, record, &mut report);
        }

        info!(
            players = population.len(),
            games = report.games,
            white_wins = report.white_wins,
            black_wins = report.black_wins,
            draws = report.draws,
            adjudicated = report.adjudicated,
            threads = self.config.threads,
            "tournament finished"
        );
        Ok(report)
    }

    fn play_fixtures(
        &self,
        population: &[Individual],
        fixtures: &[Fixture],
        book: Option<&OpeningBook>,
    ) -> Vec<GameRecord> {
        let threads = self.config.threads.min(fixtures.len()).max(1);
        if threads == 1 {
            return fixtures
                .iter()
                .map(|fixture| self.play_fixture(population, *fixture, book))
                .collect();
        }

        let next = AtomicUsize::new(0);
        let mut slots: Vec<Option<GameRecord>> = (0..fixtures.len()).map(|_| None).collect();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..threads)
                .map(|_| {
                    s.spawn(|| {
                        let mut done = Vec::new();
                        loop {
                            let index = next.fetch_add(1, Ordering::Relaxed);
                            let Some(fixture) = fixtures.get(index) else {
                                break;
                            };
                            done.push((index, self.play_fixture(population, *fixture, book)));
                        }
                        done
                    })
                })
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(done) => {
                        for (index, record) in done {
                            slots[index] = Some(record);
                        }
                    }
                    Err(payload) => std::panic::resume_unwind(payload),
                }
            }
        });

        slots.into_iter().flatten().collect()
    }

    fn play_fixture(&self, population: &[Individual], fixture: Fixture, book: Option<&OpeningBook>) -> GameRecord {
        let player = GamePlayer::new(self.config.game);
        let mut white = SearchAgent::new(self.config.white_depth, population[fixture.white].weights.clone());
        let mut black = SearchAgent::new(self.config.black_depth, population[fixture.black].weights.clone());

        match book {
            Some(book) => {
                let mut white = BookAgent::new(book, white);
                let mut black = BookAgent::new(book, black);
                player.play(&mut white, &mut black)
            }
            None => player.play(&mut white, &mut black),
        }
    }
}

fn fold(population: &mut [Individual], fixture: Fixture, record: &GameRecord, report: &mut TournamentReport) {
    let (white_outcome, black_outcome) = match record.result {
        GameResult::WhiteWon => {
            report.white_wins += 1;
            (Outcome::Win, Outcome::Loss)
        }
        GameResult::BlackWon => {
            report.black_wins += 1;
            (Outcome::Loss, Outcome::Win)
        }
        GameResult::Draw | GameResult::NotFinished => {
            report.draws += 1;
            (Outcome::Draw, Outcome::Draw)
        }
    };
    report.games += 1;
    report.adjudicated += u32::from(record.adjudicated);
    report.blocked += u32::from(record.blocked);

    population[fixture.white].record(white_outcome, record.white_score);
    population[fixture.black].record(black_outcome, -record.white_score);

    debug!(
        white = %population[fixture.white].name,
        black = %population[fixture.black].name,
        result = %record.result,
        plies = record.plies,
        white_score = record.white_score,
        "game folded"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_alternates_colors() {
        let fixtures = schedule(3, 2);
        assert_eq!(fixtures.len(), 3 * 2);
        assert_eq!(fixtures[0], Fixture { white: 0, black: 1 });
        assert_eq!(fixtures[1], Fixture { white: 1, black: 0 });
        assert_eq!(fixtures[2], Fixture { white: 0, black: 2 });
        assert_eq!(fixtures[5], Fixture { white: 2, black: 1 });
    }

    #[test]
    fn odd_games_favor_lower_index_as_white() {
        let fixtures = schedule(2, 3);
        let white_games = fixtures.iter().filter(|f| f.white == 0).count();
        assert_eq!(white_games, 2);
    }

    #[test]
    fn schedule_of_one_is_empty() {
        assert!(schedule(1, 4).is_empty());
        assert!(schedule(5, 0).is_empty());
    }

    #[test]
    fn run_rejects_lonely_population() {
        let tournament = Tournament::new(TournamentConfig::default()).unwrap();
        let mut population = vec![Individual::new("solo", Weights::default())];
        assert_eq!(
            tournament.run(&mut population),
            Err(ArenaError::PopulationTooSmall { found: 1, min: 2 })
        );
    }

    #[test]
    fn draw_updates_score_but_not_win_loss() {
        let mut population = vec![
            Individual::new("a", Weights::default()),
            Individual::new("b", Weights::default()),
        ];
        let record = GamePlayer::new(crate::config::GameConfig { max_plies: Some(2) }).play(
            &mut SearchAgent::new(1, Weights::default()),
            &mut SearchAgent::new(1, Weights::default()),
        );
        assert!(record.adjudicated);

        let mut report = TournamentReport::default();
        fold(&mut population, Fixture { white: 0, black: 1 }, &record, &mut report);
        assert_eq!(report.draws, 1);
        assert_eq!(report.adjudicated, 1);
        assert_eq!((population[0].wins, population[0].losses, population[0].draws), (0, 0, 1));
        assert_eq!(population[0].score, record.white_score);
        assert_eq!(population[1].score, -record.white_score);
    }
}
