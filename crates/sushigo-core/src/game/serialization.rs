use super::match_state::MatchState;
use crate::model::card::Card;
use crate::model::collection::Collection;
use crate::model::hand::Hand;
use crate::model::state::GameState;
use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a match, sufficient to resume play.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSnapshot {
    pub seed: u64,
    pub turn: u32,
    pub current_hand: Vec<Card>,
    pub current_collection: Vec<Card>,
    pub opponent_hand: Vec<Card>,
    pub opponent_collection: Vec<Card>,
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        let game = state.state();
        MatchSnapshot {
            seed: state.seed(),
            turn: state.turn(),
            current_hand: game.current_hand().cards().to_vec(),
            current_collection: game.current_collection().cards().to_vec(),
            opponent_hand: game.opponent_hand().cards().to_vec(),
            opponent_collection: game.opponent_collection().cards().to_vec(),
        }
    }

    pub fn restore(self) -> MatchState {
        let state = GameState::from_parts(
            Hand::with_cards(self.current_hand),
            Collection::with_cards(self.current_collection),
            Hand::with_cards(self.opponent_hand),
            Collection::with_cards(self.opponent_collection),
        );
        MatchState::from_parts(self.seed, self.turn, state)
    }

    pub fn to_json(state: &MatchState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::MatchSnapshot;
    use crate::game::match_state::MatchState;
    use crate::model::card::Card;

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut game = MatchState::with_seed(1234);
        let current = game.state().current_hand().cards()[0];
        let opponent = game.state().opponent_hand().cards()[0];
        game.play_turn(current, opponent).expect("legal turn");

        let json = MatchSnapshot::to_json(&game).expect("serializes");
        let snapshot = MatchSnapshot::from_json(&json).expect("parses");
        let restored = snapshot.restore();

        assert_eq!(restored.seed(), game.seed());
        assert_eq!(restored.turn(), 1);
        assert_eq!(restored.state(), game.state());
    }

    #[test]
    fn snapshot_captures_collections() {
        let mut game = MatchState::with_seed(5);
        let current = game.state().current_hand().cards()[0];
        let opponent = game.state().opponent_hand().cards()[0];
        game.play_turn(current, opponent).expect("legal turn");

        let snapshot = MatchSnapshot::capture(&game);
        // Hands were exchanged after the plays, collections were not.
        assert_eq!(snapshot.opponent_collection.len(), 1);
        assert_eq!(snapshot.current_collection.len(), 1);
        assert!(snapshot.current_collection.iter().all(|c| Card::ALL.contains(c)));
    }
}
