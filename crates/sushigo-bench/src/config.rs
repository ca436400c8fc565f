use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const MAX_SEARCH_DEPTH: usize = 10;

/// Agent blueprint parsed from a CLI string.
///
/// Accepted forms: `random`, `heuristic`, `expectimax[:depth]` (uniform
/// chance-node adversary) and `expectimax-heuristic[:depth]` (heuristic
/// modeled as the exact adversary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSpec {
    Random,
    Heuristic,
    Expectimax { depth: usize },
    ExpectimaxHeuristic { depth: usize },
}

impl AgentSpec {
    pub fn label(&self) -> String {
        match self {
            AgentSpec::Random => "random".to_string(),
            AgentSpec::Heuristic => "heuristic".to_string(),
            AgentSpec::Expectimax { depth } => format!("expectimax:{depth}"),
            AgentSpec::ExpectimaxHeuristic { depth } => format!("expectimax-heuristic:{depth}"),
        }
    }
}

impl FromStr for AgentSpec {
    type Err = SpecError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, depth) = match raw.split_once(':') {
            Some((kind, depth)) => (kind, Some(depth)),
            None => (raw, None),
        };

        let parse_depth = |raw_depth: Option<&str>| -> Result<usize, SpecError> {
            let Some(raw_depth) = raw_depth else {
                return Ok(sushigo_bot::ExpectimaxAgent::DEFAULT_MAX_DEPTH);
            };
            let depth = raw_depth
                .parse::<usize>()
                .map_err(|_| SpecError::InvalidDepth {
                    raw: raw_depth.to_string(),
                })?;
            if depth > MAX_SEARCH_DEPTH {
                return Err(SpecError::DepthTooLarge {
                    depth,
                    max: MAX_SEARCH_DEPTH,
                });
            }
            Ok(depth)
        };

        match kind.trim().to_ascii_lowercase().as_str() {
            "random" if depth.is_none() => Ok(AgentSpec::Random),
            "heuristic" if depth.is_none() => Ok(AgentSpec::Heuristic),
            "expectimax" => Ok(AgentSpec::Expectimax {
                depth: parse_depth(depth)?,
            }),
            "expectimax-heuristic" => Ok(AgentSpec::ExpectimaxHeuristic {
                depth: parse_depth(depth)?,
            }),
            _ => Err(SpecError::UnknownKind {
                raw: raw.to_string(),
            }),
        }
    }
}

/// Validated settings for one arena run.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub games: usize,
    pub seed: Option<u64>,
    pub seat_a: AgentSpec,
    pub seat_b: AgentSpec,
    pub jsonl: Option<PathBuf>,
}

impl ArenaConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.games == 0 {
            return Err(ValidationError::NoGames);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    #[error("unknown agent spec `{raw}`")]
    UnknownKind { raw: String },
    #[error("invalid search depth `{raw}`")]
    InvalidDepth { raw: String },
    #[error("search depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: usize, max: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("number of games must be greater than zero")]
    NoGames,
}
