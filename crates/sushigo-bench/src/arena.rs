use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use sushigo_bot::{Agent, ExpectimaxAgent, HeuristicAgent, RandomAgent};
use sushigo_core::game::match_state::{MatchState, TurnError};
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{AgentSpec, ArenaConfig, ValidationError};

/// Plays seeded head-to-head games between two agent blueprints, streaming
/// one JSONL row per game when an output path is configured.
pub struct ArenaRunner {
    config: ArenaConfig,
}

/// One finished game, as written to the JSONL stream.
#[derive(Debug, Serialize)]
pub struct GameRecord {
    pub game: usize,
    pub seed: u64,
    pub seat_a: String,
    pub seat_b: String,
    pub score_a: i32,
    pub score_b: i32,
    pub margin: i32,
    pub turns: u32,
}

/// Aggregates returned after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub games: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub draws: usize,
    pub total_margin: i64,
    pub rows_written: usize,
    pub jsonl_path: Option<PathBuf>,
}

impl ArenaRunner {
    pub fn new(config: ArenaConfig) -> Result<Self, RunnerError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut writer = match &self.config.jsonl {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Some(BufWriter::new(File::create(path)?))
            }
            None => None,
        };

        let mut rng = StdRng::seed_from_u64(self.config.seed.unwrap_or(0));
        let mut summary = RunSummary {
            games: self.config.games,
            wins_a: 0,
            wins_b: 0,
            draws: 0,
            total_margin: 0,
            rows_written: 0,
            jsonl_path: self.config.jsonl.clone(),
        };

        for game_index in 0..self.config.games {
            let game_seed = rng.next_u64();
            let record = self.play_game(game_index, game_seed)?;

            match record.margin.cmp(&0) {
                std::cmp::Ordering::Greater => summary.wins_a += 1,
                std::cmp::Ordering::Less => summary.wins_b += 1,
                std::cmp::Ordering::Equal => summary.draws += 1,
            }
            summary.total_margin += i64::from(record.margin);

            event!(
                target: "sushigo_bench::arena",
                Level::INFO,
                game = record.game,
                seed = record.seed,
                score_a = record.score_a,
                score_b = record.score_b,
                turns = record.turns,
            );

            if let Some(writer) = writer.as_mut() {
                serde_json::to_writer(&mut *writer, &record)?;
                writer.write_all(b"\n")?;
                summary.rows_written += 1;
            }
        }

        if let Some(writer) = writer.as_mut() {
            writer.flush()?;
        }

        Ok(summary)
    }

    fn play_game(&self, game_index: usize, game_seed: u64) -> Result<GameRecord, RunnerError> {
        let mut seat_a = build_agent(self.config.seat_a, game_seed);
        let mut seat_b = build_agent(self.config.seat_b, game_seed.wrapping_add(1));

        let mut game = MatchState::with_seed(game_seed);
        while !game.is_complete() {
            let card_a = seat_a.select_action(game.state())[0];
            let flipped = game.state().flipped();
            let card_b = seat_b.select_action(&flipped)[0];
            game.play_turn(card_a, card_b)
                .map_err(RunnerError::Rejected)?;
        }

        let (score_a, score_b) = game.scores();
        Ok(GameRecord {
            game: game_index,
            seed: game_seed,
            seat_a: self.config.seat_a.label(),
            seat_b: self.config.seat_b.label(),
            score_a,
            score_b,
            margin: score_a - score_b,
            turns: game.turn(),
        })
    }
}

fn build_agent(spec: AgentSpec, seed: u64) -> Box<dyn Agent> {
    match spec {
        AgentSpec::Random => Box::new(RandomAgent::with_seed(seed)),
        AgentSpec::Heuristic => Box::new(HeuristicAgent::with_seed(seed)),
        AgentSpec::Expectimax { depth } => Box::new(ExpectimaxAgent::against_random(depth)),
        AgentSpec::ExpectimaxHeuristic { depth } => Box::new(ExpectimaxAgent::against(
            Box::new(HeuristicAgent::with_seed(seed)),
            depth,
        )),
    }
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ValidationError),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("illegal turn submitted by an agent: {0:?}")]
    Rejected(TurnError),
}
