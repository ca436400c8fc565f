use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

use sushigo_bench::arena::ArenaRunner;
use sushigo_bench::config::{AgentSpec, ArenaConfig};
use sushigo_bench::logging::init_logging;

/// Head-to-head arena for Sushi Go drafting agents.
#[derive(Debug, Parser)]
#[command(
    name = "sushigo-bench",
    author,
    version,
    about = "Deterministic Sushi Go arena harness"
)]
struct Cli {
    /// Agent for seat A: random | heuristic | expectimax[:depth] |
    /// expectimax-heuristic[:depth]
    #[arg(long, value_name = "SPEC", default_value = "expectimax:3")]
    seat_a: AgentSpec,

    /// Agent for seat B.
    #[arg(long, value_name = "SPEC", default_value = "heuristic")]
    seat_b: AgentSpec,

    /// Number of games to play.
    #[arg(long, value_name = "GAMES", default_value_t = 100)]
    games: usize,

    /// RNG seed for deal generation.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Write one JSON record per game to this path.
    #[arg(long, value_name = "FILE")]
    jsonl: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let config = ArenaConfig {
        games: cli.games,
        seed: cli.seed,
        seat_a: cli.seat_a,
        seat_b: cli.seat_b,
        jsonl: cli.jsonl,
    };

    let runner = ArenaRunner::new(config)?;
    let summary = runner.run()?;

    println!(
        "{} games: {} wins / {} losses / {} draws for seat A (net margin {})",
        summary.games, summary.wins_a, summary.wins_b, summary.draws, summary.total_margin
    );
    if let Some(path) = &summary.jsonl_path {
        println!("records written to {}", path.display());
    }

    Ok(())
}
