use anyhow::Result;
use tracing::info;

use sternhalma_arena::{
    Color, Evolution, EvolutionConfig, GameConfig, GamePlayer, Individual, Tournament, TournamentConfig,
};
use sternhalma_engine::{SearchAgent, Weights};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("sternhalma starting");

    let game = GameConfig::default();
    game.validate()?;
    let record = GamePlayer::new(game).play(
        &mut SearchAgent::new(2, Weights::default()),
        &mut SearchAgent::new(1, Weights::default()),
    );
    println!("{}", record.final_board.pretty());
    println!("result {} after {} plies", record.result, record.plies);

    let evolution_config = EvolutionConfig {
        generations: 4,
        round_length: 2,
        ..EvolutionConfig::default()
    };
    let mut evolution = Evolution::new(evolution_config)?;
    for report in evolution.run() {
        println!(
            "generation {} ({}): best {:.3} mean {:.3} best so far {:.3}",
            report.generation, report.evolving, report.best, report.mean, report.best_so_far
        );
    }

    let mut population = vec![Individual::new("default", Weights::default())];
    for color in Color::ALL {
        let mut best = evolution.best(color).clone();
        best.name = format!("evolved-{color}");
        best.reset();
        population.push(best);
    }
    population.extend(evolution.population(evolution.evolving()).iter().take(2).cloned().map(|mut ind| {
        ind.reset();
        ind
    }));

    let tournament = Tournament::new(TournamentConfig {
        threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
        opening_book: Some((2, 1)),
        ..TournamentConfig::default()
    })?;
    let report = tournament.run(&mut population)?;

    println!(
        "{} games: {} white wins, {} black wins, {} draws ({} adjudicated)",
        report.games, report.white_wins, report.black_wins, report.draws, report.adjudicated
    );
    for ind in &population {
        println!(
            "{:>10}  +{} -{} ={}  score {:.3}",
            ind.name, ind.wins, ind.losses, ind.draws, ind.score
        );
    }
    Ok(())
}
