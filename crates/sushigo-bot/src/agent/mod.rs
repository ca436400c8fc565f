mod expectimax;
mod heuristic;
mod random;

pub use expectimax::ExpectimaxAgent;
pub use heuristic::{HeuristicAgent, card_values};
pub use random::RandomAgent;

use sushigo_core::model::card::Card;
use sushigo_core::model::state::GameState;

/// Unified interface for drafting policies: pick the move list for the
/// current side of a perspective-relative state.
pub trait Agent: Send {
    /// Returns the cards to draft this turn; always a single card in this
    /// game. The supplied state's current hand must be non-empty.
    fn select_action(&mut self, state: &GameState) -> Vec<Card>;
}
