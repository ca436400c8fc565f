use crate::model::card::Card;
use crate::model::collection::Collection;
use crate::model::hand::Hand;
use crate::model::scoring::score_collections;

/// Perspective-relative view of the draft: one side is "current", the other
/// is the opponent. The search engine flips perspective rather than tracking
/// absolute seat identity.
///
/// Derived `Eq`/`Hash` over the sorted containers gives a content-derived
/// identity: two states reached through different move orders but holding the
/// same cards compare equal, which is what the memo table keys on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    current_hand: Hand,
    current_collection: Collection,
    opponent_hand: Hand,
    opponent_collection: Collection,
}

impl GameState {
    pub fn new(current_hand: Hand, opponent_hand: Hand) -> Self {
        Self {
            current_hand,
            current_collection: Collection::new(),
            opponent_hand,
            opponent_collection: Collection::new(),
        }
    }

    pub fn from_parts(
        current_hand: Hand,
        current_collection: Collection,
        opponent_hand: Hand,
        opponent_collection: Collection,
    ) -> Self {
        Self {
            current_hand,
            current_collection,
            opponent_hand,
            opponent_collection,
        }
    }

    pub fn current_hand(&self) -> &Hand {
        &self.current_hand
    }

    pub fn current_collection(&self) -> &Collection {
        &self.current_collection
    }

    pub fn opponent_hand(&self) -> &Hand {
        &self.opponent_hand
    }

    pub fn opponent_collection(&self) -> &Collection {
        &self.opponent_collection
    }

    /// True once no card is left to draft on either side.
    pub fn is_terminal(&self) -> bool {
        self.current_hand.is_empty() && self.opponent_hand.is_empty()
    }

    /// Final scoring for (current, opponent), including the maki contest.
    pub fn calculate_scores(&self) -> (i32, i32) {
        score_collections(&self.current_collection, &self.opponent_collection)
    }

    /// Draft a card for the current side. Returns false when the card is not
    /// in hand and the state is left untouched.
    pub fn play_current(&mut self, card: Card) -> bool {
        if self.current_hand.remove(card) {
            self.current_collection.add(card);
            true
        } else {
            false
        }
    }

    /// Draft a card for the opponent side.
    pub fn play_opponent(&mut self, card: Card) -> bool {
        if self.opponent_hand.remove(card) {
            self.opponent_collection.add(card);
            true
        } else {
            false
        }
    }

    /// Exchange the two hands, advancing the draft to the next turn.
    pub fn swap_hands(&mut self) {
        std::mem::swap(&mut self.current_hand, &mut self.opponent_hand);
    }

    /// Independent copy with the perspective swapped. A total value
    /// transformation: the returned state shares nothing with `self`.
    pub fn flipped(&self) -> GameState {
        GameState {
            current_hand: self.opponent_hand.clone(),
            current_collection: self.opponent_collection.clone(),
            opponent_hand: self.current_hand.clone(),
            opponent_collection: self.current_collection.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::model::card::Card;
    use crate::model::collection::Collection;
    use crate::model::hand::Hand;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn state(current: &[Card], opponent: &[Card]) -> GameState {
        GameState::new(
            Hand::with_cards(current.to_vec()),
            Hand::with_cards(opponent.to_vec()),
        )
    }

    fn hash_of(state: &GameState) -> u64 {
        let mut hasher = DefaultHasher::new();
        state.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn play_current_moves_card_to_collection() {
        let mut state = state(&[Card::Tempura, Card::Wasabi], &[Card::EggNigiri]);
        assert!(state.play_current(Card::Tempura));
        assert_eq!(state.current_hand().len(), 1);
        assert_eq!(state.current_collection().count(Card::Tempura), 1);
        assert!(!state.play_current(Card::Tempura));
    }

    #[test]
    fn flipped_swaps_perspective_without_aliasing() {
        let mut original = state(&[Card::Tempura], &[Card::Sashimi]);
        let flipped = original.flipped();
        assert_eq!(flipped.current_hand().cards(), &[Card::Sashimi]);
        assert_eq!(flipped.opponent_hand().cards(), &[Card::Tempura]);

        original.play_current(Card::Tempura);
        assert_eq!(flipped.opponent_hand().cards(), &[Card::Tempura]);
    }

    #[test]
    fn swap_hands_exchanges_hands_only() {
        let mut state = state(&[Card::Tempura], &[Card::Sashimi]);
        state.play_current(Card::Tempura);
        state.swap_hands();
        assert_eq!(state.current_hand().cards(), &[Card::Sashimi]);
        assert!(state.opponent_hand().is_empty());
        assert_eq!(state.current_collection().count(Card::Tempura), 1);
    }

    #[test]
    fn terminal_when_both_hands_empty() {
        let mut state = state(&[Card::Tempura], &[Card::Sashimi]);
        assert!(!state.is_terminal());
        state.play_current(Card::Tempura);
        state.play_opponent(Card::Sashimi);
        assert!(state.is_terminal());
    }

    #[test]
    fn calculate_scores_reflects_collections() {
        let state = GameState::from_parts(
            Hand::new(),
            Collection::with_cards(vec![Card::Tempura, Card::Tempura, Card::EggNigiri]),
            Hand::new(),
            Collection::with_cards(vec![Card::SquidNigiri, Card::EggNigiri]),
        );
        assert_eq!(state.calculate_scores(), (6, 4));
    }

    #[test]
    fn identity_ignores_move_order() {
        let mut via_tempura = state(
            &[Card::Tempura, Card::Dumpling],
            &[Card::EggNigiri, Card::Wasabi],
        );
        via_tempura.play_current(Card::Tempura);
        via_tempura.play_current(Card::Dumpling);

        let mut via_dumpling = state(
            &[Card::Tempura, Card::Dumpling],
            &[Card::EggNigiri, Card::Wasabi],
        );
        via_dumpling.play_current(Card::Dumpling);
        via_dumpling.play_current(Card::Tempura);

        assert_eq!(via_tempura, via_dumpling);
        assert_eq!(hash_of(&via_tempura), hash_of(&via_dumpling));
    }
}
