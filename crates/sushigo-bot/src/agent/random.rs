use super::Agent;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use sushigo_core::model::card::Card;
use sushigo_core::model::state::GameState;

/// Drafts uniformly at random from the current hand.
pub struct RandomAgent {
    rng: SmallRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Vec<Card> {
        let card = state
            .current_hand()
            .cards()
            .choose(&mut self.rng)
            .copied()
            .expect("random agent requires a non-empty hand");
        vec![card]
    }
}
