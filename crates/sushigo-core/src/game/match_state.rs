use crate::model::card::Card;
use crate::model::deck::{Deck, HAND_SIZE};
use crate::model::state::GameState;

/// One full draft round between two seats.
///
/// The embedded [`GameState`] is always expressed from seat A's perspective;
/// a driver serving seat B hands its agent `state().flipped()`.
#[derive(Debug, Clone)]
pub struct MatchState {
    state: GameState,
    turn: u32,
    seed: u64,
}

impl MatchState {
    pub fn new() -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        let deck = Deck::shuffled_with_seed(seed);
        let (current, opponent) = deck.deal(HAND_SIZE);
        Self {
            state: GameState::new(current, opponent),
            turn: 0,
            seed,
        }
    }

    pub fn from_parts(seed: u64, turn: u32, state: GameState) -> Self {
        Self { state, turn, seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn scores(&self) -> (i32, i32) {
        self.state.calculate_scores()
    }

    /// Apply one simultaneous pick for both seats, then exchange hands.
    pub fn play_turn(&mut self, current: Card, opponent: Card) -> Result<(), TurnError> {
        if self.is_complete() {
            return Err(TurnError::MatchComplete);
        }
        if !self.state.current_hand().contains(current) {
            return Err(TurnError::CardNotInHand(current));
        }
        if !self.state.opponent_hand().contains(opponent) {
            return Err(TurnError::CardNotInHand(opponent));
        }

        let _ = self.state.play_current(current);
        let _ = self.state.play_opponent(opponent);
        self.state.swap_hands();
        self.turn += 1;
        Ok(())
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnError {
    MatchComplete,
    CardNotInHand(Card),
}
