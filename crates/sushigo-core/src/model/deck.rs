use crate::model::card::Card;
use crate::model::hand::Hand;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Cards dealt to each player in the two-player game.
pub const HAND_SIZE: usize = 10;

/// Copies of each kind in the deck. Pudding and chopsticks are not part of
/// the drafted set and are omitted entirely.
const COMPOSITION: [(Card, usize); 10] = [
    (Card::Tempura, 14),
    (Card::Sashimi, 14),
    (Card::Dumpling, 14),
    (Card::MakiOne, 6),
    (Card::MakiTwo, 12),
    (Card::MakiThree, 8),
    (Card::SalmonNigiri, 10),
    (Card::SquidNigiri, 5),
    (Card::EggNigiri, 5),
    (Card::Wasabi, 6),
];

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(94);
        for (card, copies) in COMPOSITION.iter().copied() {
            for _ in 0..copies {
                cards.push(card);
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal the two starting hands off the top of the deck.
    pub fn deal(&self, hand_size: usize) -> (Hand, Hand) {
        let first = self.cards[..hand_size].to_vec();
        let second = self.cards[hand_size..hand_size * 2].to_vec();
        (Hand::with_cards(first), Hand::with_cards(second))
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
