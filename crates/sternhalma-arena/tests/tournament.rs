//! Integration tests for played games, tournaments, and evolution runs.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sternhalma_arena::{
    Evolution, EvolutionConfig, GameConfig, GamePlayer, Individual, Tournament, TournamentConfig,
};
use sternhalma_core::{Board, Cell, Color, GameResult, MAX_CYCLES_FOR_DRAW, Move};
use sternhalma_engine::{Agent, Weights};

/// Plays a fixed cycle of moves.
struct Scripted {
    moves: Vec<Move>,
    next: usize,
}

impl Scripted {
    fn new(moves: &[(&str, &str)]) -> Self {
        let moves = moves
            .iter()
            .map(|(from, to)| Move::step(Cell::from_notation(from).unwrap(), Cell::from_notation(to).unwrap()))
            .collect();
        Self { moves, next: 0 }
    }
}

impl Agent for Scripted {
    fn best_move(&mut self, _board: &mut Board) -> Move {
        let mv = self.moves[self.next % self.moves.len()];
        self.next += 1;
        mv
    }
}

fn population(seed: u64, size: usize) -> Vec<Individual> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut population = vec![Individual::new("default", Weights::default())];
    population.extend((1..size).map(|i| Individual::random(format!("rand-{i}"), &mut rng)));
    population
}

fn small_tournament(threads: usize) -> TournamentConfig {
    TournamentConfig {
        games_per_pairing: 2,
        white_depth: 1,
        black_depth: 1,
        game: GameConfig { max_plies: Some(30) },
        threads,
        opening_book: None,
    }
}

fn assert_conserved(population: &[Individual], report: &sternhalma_arena::TournamentReport) {
    let wins: u32 = population.iter().map(|ind| ind.wins).sum();
    let losses: u32 = population.iter().map(|ind| ind.losses).sum();
    let draws: u32 = population.iter().map(|ind| ind.draws).sum();
    assert_eq!(wins + report.draws, report.games, "every game has one winner or is a draw");
    assert_eq!(wins, losses, "every win is someone's loss");
    assert_eq!(draws, 2 * report.draws, "a draw is recorded for both players");
    assert_eq!(report.white_wins + report.black_wins, wins);
    assert!(report.adjudicated <= report.draws);
}

// ── Games ────────────────────────────────────────────────────────────────────

#[test]
fn shuffling_pieces_ends_in_repetition_draw() {
    let mut white = Scripted::new(&[("a4", "a5"), ("a5", "a4")]);
    let mut black = Scripted::new(&[("h5", "h4"), ("h4", "h5")]);
    let record = GamePlayer::new(GameConfig { max_plies: None }).play(&mut white, &mut black);

    assert_eq!(record.result, GameResult::Draw);
    assert!(!record.adjudicated && !record.blocked);
    assert_eq!(record.plies, 8, "the start position recurs after plies 4 and 8");
    assert_eq!(record.white_score, 0.0);

    let start = Board::starting_position();
    assert_eq!(record.final_board.hash(), start.hash());
    assert_eq!(record.final_board.times_seen(start.hash()), MAX_CYCLES_FOR_DRAW);
}

#[test]
fn played_moves_replay_to_final_board() {
    let player = GamePlayer::new(GameConfig { max_plies: Some(20) });
    let mut white = sternhalma_engine::SearchAgent::new(2, Weights::default());
    let mut black = sternhalma_engine::SearchAgent::new(1, Weights::default());
    let record = player.play(&mut white, &mut black);

    let mut board = Board::starting_position();
    for &mv in &record.moves {
        board.try_apply(mv).unwrap();
    }
    assert_eq!(board, record.final_board);
    assert_eq!(record.plies as usize, record.moves.len());
}

// ── Tournaments ──────────────────────────────────────────────────────────────

#[test]
fn identical_players_conserve_outcomes() {
    let mut population = vec![
        Individual::new("a", Weights::default()),
        Individual::new("b", Weights::default()),
    ];
    let report = Tournament::new(small_tournament(1)).unwrap().run(&mut population).unwrap();

    assert_eq!(report.games, 2);
    assert_conserved(&population, &report);
    assert_eq!(population[0].games(), 2);
    assert_eq!(population[1].games(), 2);
    assert!((population[0].score + population[1].score).abs() < 1e-9, "scores are zero-sum");
}

#[test]
fn round_robin_conserves_outcomes() {
    let mut population = population(21, 4);
    let report = Tournament::new(small_tournament(1)).unwrap().run(&mut population).unwrap();

    assert_eq!(report.games, 6 * 2, "six pairs, two games each");
    assert_conserved(&population, &report);
    for ind in &population {
        assert_eq!(ind.games(), 3 * 2, "{} plays everyone twice", ind.name);
    }
}

#[test]
fn results_do_not_depend_on_thread_count() {
    let mut serial = population(5, 4);
    let mut parallel = serial.clone();

    let serial_report = Tournament::new(small_tournament(1)).unwrap().run(&mut serial).unwrap();
    let parallel_report = Tournament::new(small_tournament(3)).unwrap().run(&mut parallel).unwrap();

    assert_eq!(serial_report, parallel_report);
    assert_eq!(serial, parallel);
}

#[test]
fn records_accumulate_across_runs() {
    let mut population = population(8, 2);
    let tournament = Tournament::new(small_tournament(2)).unwrap();
    tournament.run(&mut population).unwrap();
    tournament.run(&mut population).unwrap();
    assert_eq!(population[0].games(), 4);

    population.iter_mut().for_each(Individual::reset);
    assert_eq!(population[0].games(), 0);
}

#[test]
fn shared_opening_book_tournament() {
    let config = TournamentConfig {
        opening_book: Some((2, 1)),
        threads: 2,
        ..small_tournament(2)
    };
    let mut population = population(13, 3);
    let report = Tournament::new(config).unwrap().run(&mut population).unwrap();
    assert_eq!(report.games, 6);
    assert_conserved(&population, &report);
}

// ── Evolution ────────────────────────────────────────────────────────────────

#[test]
fn evolution_is_reproducible() {
    let config = EvolutionConfig {
        population: 3,
        generations: 4,
        round_length: 2,
        depth: 1,
        seed: 77,
        game: GameConfig { max_plies: Some(12) },
        ..EvolutionConfig::default()
    };

    let mut a = Evolution::new(config.clone()).unwrap();
    let mut b = Evolution::new(config).unwrap();
    let reports_a = a.run();
    let reports_b = b.run();

    assert_eq!(reports_a.len(), 4);
    assert_eq!(reports_a, reports_b);
    let sides: Vec<Color> = reports_a.iter().map(|r| r.evolving).collect();
    assert_eq!(sides, [Color::White, Color::White, Color::Black, Color::Black]);

    for color in Color::ALL {
        assert_eq!(a.population(color), b.population(color));
        assert_eq!(a.best(color), b.best(color));
        assert!(a.best(color).score.is_finite(), "{color} evolved at least once");

        let best_so_far: Vec<f64> = reports_a
            .iter()
            .filter(|r| r.evolving == color)
            .map(|r| r.best_so_far)
            .collect();
        assert!(best_so_far.windows(2).all(|w| w[1] >= w[0]), "{best_so_far:?}");
    }
}
